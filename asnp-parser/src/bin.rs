//! Command line front end of the ASNP parser.
//!
//! Usage:
//!   asnp <file>            print the module name and its type declarations
//!   asnp --tokens <file>   dump the token stream of the file
use std::{fs::read_to_string, path::PathBuf, process::ExitCode};

use clap::Parser as _;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use asnp_parser::{parse_str, scanner::Scanner, LoadError};

#[derive(clap::Parser, Debug)]
#[command(name = "asnp", about = "Parse an ASN1 module and list its type declarations")]
struct Args {
    /// Path to the ASN1 module
    file: PathBuf,

    /// Print the scanned tokens instead of the parsed module
    #[arg(short, long)]
    tokens: bool,

    /// Log parser progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(file = %args.file.display(), "{e}");
            eprintln!("asnp: {}: {e}", args.file.display());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), LoadError> {
    let input = read_to_string(&args.file)?;
    debug!(file = %args.file.display(), bytes = input.len(), "read ASN1 source");

    if args.tokens {
        for (token, literal) in Scanner::new(&input) {
            println!("{token}\t{literal:?}");
        }
        return Ok(());
    }

    let definition = parse_str(&input)?;
    println!("{}", definition.name);
    println!("{}", "=".repeat(definition.name.len()));
    for declaration in &definition.types {
        println!("{}: {}", declaration.name, declaration.r#type.kind());
    }
    Ok(())
}
