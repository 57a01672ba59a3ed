//! `tag-unpack` — decode a binary tag document (stdin) to JSON or tag text
//! (stdout).
//!
//! Usage:
//!   tag-unpack [--format json|text] [--text] [--max-elements N] [--max-depth N] [--unlimited]

use bintag::tag_cli::{unpack, CliError, DEFAULT_MAX_DEPTH, DEFAULT_MAX_ELEMENTS};
use bintag::Limits;
use std::io::{self, Read, Write};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse output format and decode limit flags.
    let mut format = "json".to_string();
    let mut max_elements = DEFAULT_MAX_ELEMENTS;
    let mut max_depth = DEFAULT_MAX_DEPTH;
    let mut unlimited = false;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--text" => { format = "text".to_string(); }
            "--format" => {
                i += 1;
                if let Some(f) = args.get(i) {
                    format = f.clone();
                }
            }
            "--unlimited" => { unlimited = true; }
            "--max-elements" => {
                i += 1;
                match args.get(i).and_then(|s| s.parse().ok()) {
                    Some(n) => max_elements = n,
                    None => {
                        eprintln!("--max-elements expects a number");
                        std::process::exit(1);
                    }
                }
            }
            "--max-depth" => {
                i += 1;
                match args.get(i).and_then(|s| s.parse().ok()) {
                    Some(n) => max_depth = n,
                    None => {
                        eprintln!("--max-depth expects a number");
                        std::process::exit(1);
                    }
                }
            }
            _ => {}
        }
        i += 1;
    }

    let limits = if unlimited {
        Limits::unlimited()
    } else {
        Limits::new(max_elements, max_depth)
    };

    let mut buf = Vec::new();
    if let Err(e) = io::stdin().read_to_end(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match unpack(&buf, &format, limits) {
        Ok(out) => {
            io::stdout().write_all(out.as_bytes()).unwrap();
        }
        Err(CliError::UnknownFormat(f)) => {
            eprintln!("Unknown format: {f}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
