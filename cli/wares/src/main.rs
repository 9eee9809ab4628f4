//! wares CLI
//!
//! Catalog filtering demo for the wares library.

use clap::Parser;

mod args;
mod run;

use args::Cli;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Initialize logging (to stderr, so stdout is clean for matched products)
    run::init_logging(args.log_level)?;

    let summary = run::execute(&args)?;

    // Report results to stderr
    eprintln!();
    eprintln!("Filtering completed:");
    eprintln!("  Products scanned: {}", summary.scanned);
    eprintln!("  Products matched: {}", summary.matched);
    eprintln!("  Products output:  {}", summary.output);

    Ok(())
}
