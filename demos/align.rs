//! Example: edit-distance alignment of two DNA strings.
//!
//! Run with:
//! `cargo run --example align`
//!
//! Optionally pass the two sequences:
//! `cargo run --example align -- ACAACC CAAAAC`

use seq_edit::{align, render};

fn main() {
    let mut args = std::env::args().skip(1);
    let s = args.next().unwrap_or_else(|| "ACAACC".to_string());
    let t = args.next().unwrap_or_else(|| "CAAAAC".to_string());

    let aln = align(s.as_bytes(), t.as_bytes());

    println!("Edit distance: {}", aln.distance);
    println!("Operations:    {}", aln.operations);
    println!();

    match render(s.as_bytes(), t.as_bytes(), &aln.operations) {
        Ok(view) => {
            if let Err(err) = view.write_to(std::io::stdout().lock()) {
                eprintln!("align: {err}");
                std::process::exit(1);
            }
        }
        Err(err) => {
            eprintln!("align: {err}");
            std::process::exit(1);
        }
    }
}
