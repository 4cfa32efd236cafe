// src/bin/cli.rs
use clap::Parser;
use color_eyre::eyre::WrapErr;

use conj_scrape::cli::{self, Args};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    cli::run(&args).wrap_err("conjugation scrape failed")?;
    Ok(())
}
