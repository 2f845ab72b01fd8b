use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use syllable_extract::io_utils::cli_hint;
use syllable_extract::{run, ExtractConfig, Paths};

#[derive(Parser)]
#[command(about = "Extract CV and CVC syllables from a Lexique table")]
struct Args {
    /// Tab separated lexicon with a header row
    #[arg(long, default_value = "Lexique383.tsv")]
    lexicon: PathBuf,
    /// Output table of (orthography, IPA) rows
    #[arg(long, default_value = "cv_cvc_entries.tsv")]
    output: PathBuf,
    /// Registry of syllables exported by earlier runs
    #[arg(long, default_value = "known_syllables.txt")]
    registry: PathBuf,
    /// Log and skip malformed rows instead of aborting
    #[arg(long)]
    lenient: bool,
    /// Report what would change without writing any file
    #[arg(long)]
    dry_run: bool,
    /// Print the run summary as JSON on stdout
    #[arg(long)]
    json: bool,
    /// Log debug details
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();

    if let Err(e) = run_cli(args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run_cli(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let paths = Paths {
        lexicon: args.lexicon,
        output: args.output,
        registry: args.registry,
    };
    let config = ExtractConfig {
        lenient: args.lenient,
        ..ExtractConfig::default()
    };

    let summary = run(&paths, &config, args.dry_run)
        .map_err(|e| format!("error: {}", cli_hint(&e)))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(())
}
