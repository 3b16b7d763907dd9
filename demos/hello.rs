//! Plain and template printing to stdout.
//!
//! Run with: cargo run --example hello
//! Set RUST_LOG=trace to see buffer flushes.

use tagprint::{args, print, printfln, println, tprintfln, tprintln, Arg};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // Plain mode: numbers and bools get a trailing space, text does not
    println(&args!["plain: ", 1, 2.5, true, 'c', "end"])?;

    // Template mode: % takes the next argument, %% is a literal percent
    printfln(&args!["template: % + % = % (100%% sure)", 1, 2, 3])?;

    // Arguments left over after a template keep going
    printfln(&args!["left over -> % <-", 69, " and more text ", 420])?;

    // Missing strings print a placeholder
    let missing: Option<&str> = None;
    println(&args!["missing: ", missing])?;

    // Pointers print as hex
    let value = 7u32;
    let ptr: *const u32 = &value;
    printfln(&args!["address of value: %", ptr])?;

    // A long argument list, built at runtime
    let squares: Vec<Arg<'_>> = (1..=10u32).map(|n| Arg::from(n * n)).collect();
    print(&args!["squares: "])?;
    println(&squares)?;

    // The macros pack arguments for you
    tprintln!("macro:", 42, false)?;
    tprintfln!("macro template: % of %", 3, 4)?;

    Ok(())
}
