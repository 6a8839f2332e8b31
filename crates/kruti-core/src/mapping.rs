//! Legacy glyph mapping table loaded from TOML.
//!
//! - `MappingTable::init_custom(toml_content)` sets a custom TOML before the
//!   first `global()` call
//! - `MappingTable::global()` returns `&'static MappingTable` (lazy-init
//!   singleton)
//! - Default rules are embedded via `include_str!("default_mapping.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_MAPPING_TOML: &str = include_str!("default_mapping.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum MappingConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("no substitution rules defined")]
    Empty,
    #[error("empty legacy pattern for replacement: {0}")]
    EmptyPattern(String),
    #[error("mapping table already initialized")]
    AlreadyInitialized,
}

/// One substitution rule. `legacy` is the glyph-code pattern as it appears in
/// source text; `out` is the replacement, which may be empty (dead glyphs)
/// and may contain the reorder markers consumed by later pipeline passes.
#[derive(Debug, Clone, Deserialize)]
pub struct Rule {
    pub legacy: String,
    pub out: String,
}

#[derive(Deserialize)]
struct MappingConfig {
    #[serde(default)]
    single: Vec<Rule>,
    #[serde(default)]
    compound: Vec<Rule>,
}

/// The ordered substitution rules of the conversion pipeline.
///
/// Rule order is load-bearing: within each list, rules apply exactly as
/// written (an earlier rule may consume text a later rule would otherwise
/// match), and every `single` rule applies before any `compound` rule.
#[derive(Debug)]
pub struct MappingTable {
    pub single: Vec<Rule>,
    pub compound: Vec<Rule>,
}

impl MappingTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), MappingConfigError> {
        // Validate eagerly
        parse_mapping_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| MappingConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static MappingTable {
        static INSTANCE: OnceLock<MappingTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_MAPPING_TOML);
            parse_mapping_toml(toml_str).expect("mapping TOML must be valid")
        })
    }
}

/// Parse TOML text into an ordered [`MappingTable`].
pub fn parse_mapping_toml(toml_str: &str) -> Result<MappingTable, MappingConfigError> {
    let config: MappingConfig =
        toml::from_str(toml_str).map_err(|e| MappingConfigError::Parse(e.to_string()))?;

    if config.single.is_empty() && config.compound.is_empty() {
        return Err(MappingConfigError::Empty);
    }

    for rule in config.single.iter().chain(config.compound.iter()) {
        if rule.legacy.is_empty() {
            return Err(MappingConfigError::EmptyPattern(rule.out.clone()));
        }
    }

    Ok(MappingTable {
        single: config.single,
        compound: config.compound,
    })
}
