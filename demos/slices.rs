//! Searching, trimming and splitting byte slices without copying.
//!
//! Run with: cargo run --example slices

use std::error::Error;
use std::ffi::CString;
use tagprint::{args, printfln, Slice};

fn main() -> Result<(), Box<dyn Error>> {
    let config = "  name = demo ; level = 3 ; verbose = true  ";

    for entry in Slice::from(config).trim_whitespace().split_iter(";") {
        let entry = entry.trim_whitespace();
        let key = entry.trim_after("=").trim_whitespace();
        let value = entry.trim_before("=").trim_prefix("=").trim_whitespace();
        printfln(&args!["key: '%' value: '%'", key, value])?;
    }

    let path = Slice::from("/var/log/app/server.log");
    printfln(&args!["is log file: %", path.ends_with(".log")])?;
    printfln(&args!["under /var: %", path.starts_with("/var/")])?;
    printfln(&args!["stem: %", path.trim_suffix(".log")])?;
    if let Some(index) = path.index_of("app") {
        printfln(&args!["'app' found at byte %", index])?;
    }

    // Slices can wrap NUL-terminated data from C
    let c_string = CString::new("from C")?;
    let c_slice = Slice::from_c_str(&c_string);
    printfln(&args!["c string: % (% bytes)", c_slice, c_slice.len()])?;

    let raw = b"terminated\0garbage";
    let terminated = Slice::from_nul_terminated(raw)?;
    printfln(&args!["terminated: %", terminated])?;

    // Owned copies outlive their source
    let owned = {
        let temp = String::from("temporary");
        Slice::from(temp.as_str()).to_buf()?
    };
    printfln(&args!["owned copy: % (owner: %)", &owned, owned.is_owner()])?;

    Ok(())
}
