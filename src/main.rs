//! Mini Bank CLI
//!
//! An interactive banking session over stdin/stdout. Accounts live in
//! memory for the run and are gone on exit.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use mini_bank::{menu, Ledger, Result};
use std::io;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut ledger = Ledger::new();
    menu::run(&mut ledger, stdin.lock(), stdout.lock())
}
