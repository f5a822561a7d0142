use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fmt;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

use strmap_core::{encode, normalize, to_normalized, Normalized, Value};

mod demo;

/// strmap — force every leaf of structured data into text
///
/// Numbers become decimal strings, booleans become "1"/"0",
/// null becomes "". Mapping and sequence shape is preserved.
#[derive(Parser)]
#[command(name = "strmap", version, about, long_about = None)]
struct Cli {
    /// Log collaborator events to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a JSON document
    Normalize {
        /// Path to .json file, or `-` for stdin
        file: PathBuf,
        /// Indent the output
        #[arg(long)]
        pretty: bool,
    },

    /// Show plain and forced-string JSON for built-in sample data
    Demo {
        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show version information
    Version,
}

/// Failures surfaced by the CLI, each with its exit code
#[derive(Debug)]
enum CliError {
    /// Input file could not be read (exit 2)
    Io(PathBuf, io::Error),
    /// Input is not JSON (exit 2)
    Parse(serde_json::Error),
    /// Introspection rejected the input (exit 1) or encoding failed (exit 2)
    Strmap(strmap_core::Error),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Strmap(strmap_core::Error::UnsupportedKey { .. })
            | CliError::Strmap(strmap_core::Error::DuplicateKey { .. })
            | CliError::Strmap(strmap_core::Error::IntrospectionError(_)) => 1,
            _ => 2,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CliError::Io(path, err) => write!(f, "cannot read {}: {}", path.display(), err),
            CliError::Parse(err) => write!(f, "invalid JSON input: {}", err),
            CliError::Strmap(err) => write!(f, "{}", err),
        }
    }
}

impl From<strmap_core::Error> for CliError {
    fn from(err: strmap_core::Error) -> Self {
        CliError::Strmap(err)
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Normalize { file, pretty } => cmd_normalize(&file, pretty),
        Commands::Demo { pretty } => cmd_demo(pretty),
        Commands::Version => {
            println!(
                "strmap {} (strmap-core {})",
                env!("CARGO_PKG_VERSION"),
                strmap_core::VERSION
            );
            Ok(())
        }
    };

    let exit_code = match result {
        Ok(()) => 0,
        Err(err) => {
            tracing::debug!(?err, "command failed");
            eprintln!("{} {}", "error:".red().bold(), err);
            err.exit_code()
        }
    };

    process::exit(exit_code);
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

// ── Commands ──────────────────────────────────────────────

fn cmd_normalize(file: &Path, pretty: bool) -> Result<(), CliError> {
    let text = read_input(file)?;
    let json: serde_json::Value = serde_json::from_str(&text).map_err(CliError::Parse)?;
    tracing::debug!(path = %file.display(), bytes = text.len(), "parsed input");

    let tree = normalize(Value::from(json));
    print_json(&tree, pretty)
}

fn cmd_demo(pretty: bool) -> Result<(), CliError> {
    let resp = demo::sample_response();

    println!("==== normal JSON conversion ====");
    println!("{:?}", resp);
    let plain = if pretty {
        serde_json::to_string_pretty(&resp)
    } else {
        serde_json::to_string(&resp)
    };
    println!("{}", plain.map_err(|e| CliError::Strmap(e.into()))?);

    println!("==== force string JSON conversion ====");
    let tree = to_normalized(&resp)?;
    println!("{}", tree);
    print_json(&tree, pretty)
}

// ── Helpers ───────────────────────────────────────────────

fn read_input(file: &Path) -> Result<String, CliError> {
    let mut text = String::new();
    if file == Path::new("-") {
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| CliError::Io(file.to_path_buf(), e))?;
    } else {
        text = std::fs::read_to_string(file).map_err(|e| CliError::Io(file.to_path_buf(), e))?;
    }
    Ok(text)
}

fn print_json(tree: &Normalized, pretty: bool) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    encode::write_json(&mut out, tree, pretty)?;
    writeln!(out).map_err(|e| CliError::Strmap(strmap_core::Error::EncodingError(e.to_string())))?;
    Ok(())
}
