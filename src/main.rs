use clap::Parser;
use classwright::{compile_checked, read_record, CliError, Compiler, CompilerConfig};
use std::fs::File;
use std::io;
use std::path::PathBuf;

/// Compiles a JSON style record from the visual editor into utility classes.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Style record JSON file. Reads stdin when omitted or `-`.
    record: Option<PathBuf>,

    /// Compiler config JSON (extra table rows, arbitrary-value mode)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fail on records outside the editor's value domain instead of warning
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Print the tokens as a JSON array
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), CliError> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let compiler = match &args.config {
        Some(path) => {
            log::debug!("Loading compiler config from {}", path.display());
            Compiler::with_config(&CompilerConfig::from_file(path)?)?
        }
        None => Compiler::new(),
    };

    let record = match args.record.as_deref() {
        Some(path) if path.as_os_str() != "-" => read_record(File::open(path)?)?,
        _ => read_record(io::stdin().lock())?,
    };

    let tokens = compile_checked(&compiler, &record, args.strict)?;
    if args.json {
        println!("{}", serde_json::to_string(&tokens)?);
    } else {
        println!("{}", classwright_compiler::token::join(&tokens));
    }
    Ok(())
}
