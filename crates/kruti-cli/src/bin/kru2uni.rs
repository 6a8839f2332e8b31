use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use kruti_cli::{batch, input};
use kruti_core::convert_to_bytes;
use kruti_core::mapping::MappingTable;

#[derive(Parser)]
#[command(name = "kru2uni", about = "Akruti legacy-font text to Unicode Devanagari")]
struct Cli {
    /// Path to a custom mapping TOML (defaults to the built-in table)
    #[arg(long, global = true)]
    mapping: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert one document (file, literal text, or stdin)
    Convert {
        /// Input file (.txt, .docx, .pdf); omit to read stdin
        file: Option<PathBuf>,
        /// Convert this literal text instead of a file
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,
        /// Write output here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert every document in a directory or ZIP archive
    Batch {
        /// Input directory or .zip file
        input: PathBuf,
        /// Directory for converted .txt files
        #[arg(long)]
        out_dir: PathBuf,
        /// Output the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(path) = &cli.mapping {
        let toml = die!(fs::read_to_string(path), "Error reading mapping file: {}");
        die!(MappingTable::init_custom(toml), "Invalid mapping file: {}");
    }

    match cli.command {
        Command::Convert { file, text, output } => {
            convert_cmd(file.as_deref(), text.as_deref(), output.as_deref())
        }
        Command::Batch {
            input,
            out_dir,
            json,
        } => batch_cmd(&input, &out_dir, json),
    }
}

fn convert_cmd(file: Option<&Path>, text: Option<&str>, output: Option<&Path>) {
    let input_text = if let Some(text) = text {
        text.to_string()
    } else if let Some(path) = file {
        die!(input::extract_text(path), "Error reading input: {}")
    } else {
        let mut buf = String::new();
        die!(io::stdin().read_to_string(&mut buf), "Error reading stdin: {}");
        buf
    };

    // The engine output passes to this boundary verbatim.
    let bytes = convert_to_bytes(&input_text);
    match output {
        Some(path) => die!(fs::write(path, bytes), "Error writing output: {}"),
        None => die!(io::stdout().write_all(&bytes), "Error writing output: {}"),
    }
}

fn batch_cmd(input: &Path, out_dir: &Path, json: bool) {
    let is_zip = input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"));
    let reports = if is_zip {
        die!(batch::process_zip(input, out_dir), "Batch failed: {}")
    } else {
        die!(batch::process_dir(input, out_dir), "Batch failed: {}")
    };

    if json {
        let report = die!(
            serde_json::to_string_pretty(&reports),
            "Error encoding report: {}"
        );
        println!("{report}");
        return;
    }

    for report in &reports {
        match (&report.output, &report.error) {
            (Some(path), _) => println!("{:<24} -> {}", report.name, path.display()),
            (_, Some(err)) => println!("{:<24} !! {err}", report.name),
            _ => {}
        }
    }
    let failed = reports.iter().filter(|r| !r.succeeded()).count();
    if failed > 0 {
        eprintln!("{failed} of {} documents failed", reports.len());
        process::exit(2);
    }
}
