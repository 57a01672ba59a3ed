//! `tag-pack` — encode JSON (stdin) to a binary tag document (stdout).
//!
//! Usage:
//!   tag-pack [--root-name NAME]

use bintag::tag_cli::pack;
use std::io::{self, Read, Write};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse the --root-name flag.
    let mut root_name = String::new();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--root-name" => {
                i += 1;
                if let Some(name) = args.get(i) {
                    root_name = name.clone();
                }
            }
            _ => {}
        }
        i += 1;
    }

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match pack(buf.trim(), &root_name) {
        Ok(bytes) => {
            io::stdout().write_all(&bytes).unwrap();
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
