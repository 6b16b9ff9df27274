// src/main.rs
use anyhow::Result;
use clap::Parser;

use zipf::{Args, init_logging, run};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_level());
    run(args)
}
