//! The main entry point for the `detab` command-line application.
//!
//! This file is responsible for the pre-parse argument shortcuts (the `v`
//! version command and the bare invocation), for parsing the remaining
//! arguments, and for dispatching to the conversion run in the `detab`
//! library.

use detab::config::Config;
use detab::errors::Error;
use detab::{cli, rewriter};
use std::env;
use std::process;

/// The fixed version string printed by `detab v`.
const VERSION: &str = concat!("detab ", env!("CARGO_PKG_VERSION"));

fn main() {
    let args_vec: Vec<String> = env::args().collect();

    // Check if no arguments provided (just 'detab')
    if args_vec.len() == 1 {
        fail(&Error::ArgumentMissing);
    }

    // 'detab v' prints the version and wins over anything else on the line.
    if args_vec[1] == "v" {
        println!("{VERSION}");
        process::exit(0);
    }

    let args = cli::parse_args();
    let config = Config::new(args.path, args.width.as_deref());

    if let Err(e) = rewriter::run_convert(&config) {
        fail(&e);
    }
}

/// Prints a tagged one-line diagnostic and terminates with a nonzero status.
///
/// Diagnostics share standard output with the status lines: the stdout
/// stream is the tool's entire reporting surface.
fn fail(error: &Error) -> ! {
    println!("detab: {error}");
    process::exit(1);
}
