//! Fraction Demonstration Binary Entry Point
//!
//! Parses the command line, builds the report and prints it. Any error is
//! written to stderr and the process exits with status 1.

use std::process;

use clap::Parser;
use frameworks_fraction_demo::{run, FractionArgs};
use log::error;

fn main() {
    env_logger::init();

    let args = FractionArgs::parse();

    match run(&args) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("fraction failed: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
