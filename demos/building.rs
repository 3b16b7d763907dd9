//! Building strings into owned buffers.
//!
//! Run with: cargo run --example building
//! Set RUST_LOG=debug to see buffer growth.

use std::error::Error;
use tagprint::{args, formatf, printfln, tformatf, write_string, writef_string, SliceBuf};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // A fresh buffer per message
    let message = formatf(&args!["% items at % each", 3, 2.5])?;
    printfln(&args!["built: '%' (% bytes)", &message, message.len()])?;

    // One buffer reused across messages keeps its capacity
    let mut report = SliceBuf::with_capacity(64)?;
    for (name, score) in [("alice", 91), ("bob", 78), ("carol", 85)] {
        writef_string(&mut report, &args!["%=%;", name, score])?;
    }
    write_string(&mut report, &args![" total:", 91 + 78 + 85])?;
    printfln(&args!["report: %", &report])?;
    printfln(&args!["capacity: %", report.capacity()])?;

    // Growth doubles capacity as needed
    let mut log = SliceBuf::new();
    for line in 0..100u32 {
        writef_string(&mut log, &args!["line %\n", line])?;
    }
    printfln(&args!["log: % bytes, capacity %", log.len(), log.capacity()])?;

    // Hand the contents to C as a NUL-terminated string
    let terminated_len = report.with_nul(|bytes| bytes.len());
    printfln(&args!["with terminator: % bytes", terminated_len])?;

    report.free();
    printfln(&args!["after free: len % capacity %", report.len(), report.capacity()])?;

    let greeting = tformatf!("hello, %!", "world")?;
    printfln(&args!["%", &greeting])?;

    Ok(())
}
