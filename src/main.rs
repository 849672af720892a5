//! Command-line generator for the Agent Wargame slide kit.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

/// Generate the Agent Wargame design-kit deck as a .pptx package.
#[derive(Parser, Debug)]
#[command(name = "slidekit")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output path for the generated presentation
    #[arg(short, long, default_value = "agent_wargame_slide_kit.pptx")]
    output: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let deck = slidekit::kit::deck();
    deck.write_to_file(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!("Wrote {}", args.output.display());
    Ok(())
}
