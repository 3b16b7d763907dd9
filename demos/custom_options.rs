//! Customizing output with FormatOptions.
//!
//! Run with: cargo run --example custom_options

use std::error::Error;
use tagprint::{args, format_with_options, formatf_with_options, printfln, FormatOptions, Mode, Printer};

fn main() -> Result<(), Box<dyn Error>> {
    let values = args![1, 2, 3, 4.5, true];

    // Default format (space separator)
    let default = format_with_options(&values, &FormatOptions::default())?;
    printfln(&args!["default:   '%'", &default])?;

    // Comma separator, useful for CSV-like output
    let csv = FormatOptions::new().with_separator(b',');
    let out = format_with_options(&values, &csv)?;
    printfln(&args!["comma:     '%'", &out])?;

    // No separator at all
    let out = format_with_options(&values, &FormatOptions::compact())?;
    printfln(&args!["compact:   '%'", &out])?;

    // Fewer float digits and a different null placeholder
    let options = FormatOptions::new()
        .with_f64_precision(3)
        .with_null_placeholder("<none>");
    let out = formatf_with_options(&args!["ratio ~ %, user = %", 1.23456789, None::<&str>], &options)?;
    printfln(&args!["precision: '%'", &out])?;

    // Options can be loaded from a config file
    let from_config: FormatOptions =
        serde_json::from_str(r#"{ "separator": 124, "initial_capacity": 32 }"#)?;
    let out = format_with_options(&values, &from_config)?;
    printfln(&args!["from json: '%'", &out])?;

    // A printer with a custom buffer size and options
    let mut printer: Printer<_, 128> = Printer::with_options(std::io::stdout(), csv);
    printer.print(&args!["printer: ", 10, 20, 30], Mode::Plain)?;
    printer.newline()?;

    Ok(())
}
