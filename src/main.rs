// SPDX-License-Identifier: MIT
//
// tonal — derive an accessible UI color palette from a single color.
//
// This is the thin CLI over the workspace crates:
//
//   tonal-color   → OKLCH conversion, hex parsing, tonal ramp synthesis
//   tonal-palette → scale generation, role tokens, WCAG contrast audit
//
// All domain logic lives in the crates; this binary only parses arguments
// and prints the palette result as JSON:
//
//   primary hex → generate_palette → serde_json → stdout

use std::env;
use std::process;

use tonal_palette::{PaletteOptions, Scheme, generate_palette};

fn usage() -> String {
    let schemes: Vec<&str> = Scheme::all().iter().map(|s| s.name()).collect();
    format!(
        "usage: tonal <hex> [--dark] [--scheme <name>]\n\
         \n\
         Derive an accessible UI color palette from a primary color.\n\
         \n\
         arguments:\n\
         \x20 <hex>            primary color, e.g. #6366f1\n\
         \x20 --dark           resolve the dark-mode role table\n\
         \x20 --scheme <name>  one of: {}\n\
         \x20 -h, --help       show this help",
        schemes.join(", ")
    )
}

fn parse_args(args: &[String]) -> Result<(String, PaletteOptions), String> {
    let mut primary: Option<String> = None;
    let mut options = PaletteOptions::default();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--dark" => options.dark = true,
            "--scheme" => {
                let name = iter
                    .next()
                    .ok_or_else(|| "--scheme requires a value".to_string())?;
                options.scheme = name.parse::<Scheme>().map_err(|e| e.to_string())?;
            }
            "-h" | "--help" => return Err(usage()),
            _ if arg.starts_with("--") => {
                return Err(format!("unknown flag {arg}\n\n{}", usage()));
            }
            _ if primary.is_none() => primary = Some(arg.clone()),
            _ => return Err(format!("unexpected argument {arg}\n\n{}", usage())),
        }
    }

    let primary = primary.ok_or_else(usage)?;
    Ok((primary, options))
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let (primary, options) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{message}");
            process::exit(2);
        }
    };

    let palette = match generate_palette(&primary, &options) {
        Ok(palette) => palette,
        Err(error) => {
            eprintln!("tonal: {error}");
            process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&palette) {
        Ok(json) => println!("{json}"),
        Err(error) => {
            eprintln!("tonal: failed to serialize palette: {error}");
            process::exit(1);
        }
    }
}
