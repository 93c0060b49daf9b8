//! `tic demo` (and bare `tic`): one line for the fixed meter address.

use anyhow::Result;
use tic_core::demo::{demo_message, DEMO_IDENTIFIER};

pub fn run_demo() -> Result<()> {
    println!("{}", demo_message(DEMO_IDENTIFIER)?);
    Ok(())
}
