//! `dicom-edit`: apply edit records to a document.
//!
//! Usage:
//!   dicom-edit < request.json
//!
//! The request is `{"document": {...}, "edits": [...], "options": {...}}`.
//! The edited document is written to stdout; logs go to stderr.

use dicom_edit::cli::run_edit_request;
use std::io::{self, Read, Write};

fn main() {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match run_edit_request(buf.trim()) {
        Ok(result) => {
            let mut stdout = io::stdout();
            if let Err(e) = writeln!(stdout, "{result}") {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
