//! Simple binary for profiling the tokenizer.
//! Run with: samply record cargo run --release --example profile_tokens
//!
//! Takes an optional file and iteration count:
//!   cargo run --release --example profile_tokens -- data.json 500

use std::time::Instant;

use jot_core::{tokenize, ByteView, TokenArena};

fn synthetic_records(count: usize) -> Vec<u8> {
    let mut doc = String::from("[");
    for i in 0..count {
        if i > 0 {
            doc.push(',');
        }
        doc.push_str(&format!(
            r#"{{"id":{},"label":"item-{}","flags":[true,false,null]}}"#,
            i, i
        ));
    }
    doc.push(']');
    doc.into_bytes()
}

fn main() {
    let mut args = std::env::args().skip(1);
    let input = match args.next() {
        Some(path) => std::fs::read(&path).unwrap_or_else(|e| {
            eprintln!("cannot read {}: {}", path, e);
            std::process::exit(1);
        }),
        None => synthetic_records(20_000),
    };
    let iterations: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(100);

    let view = ByteView::new(&input);
    let mut arena = TokenArena::with_capacity(input.len() / 2 + 8);

    let count = match tokenize(view, &mut arena) {
        Ok(count) => count,
        Err(err) => {
            eprintln!("parse failed: {}", err);
            std::process::exit(1);
        }
    };

    let start = Instant::now();
    for _ in 0..iterations {
        std::hint::black_box(tokenize(view, &mut arena).expect("reparse failed"));
    }
    let elapsed = start.elapsed();

    let megabytes = (input.len() * iterations) as f64 / 1_000_000.0;
    println!(
        "{} bytes, {} tokens, {} iterations in {:.3}s ({:.1} MB/s)",
        input.len(),
        count,
        iterations,
        elapsed.as_secs_f64(),
        megabytes / elapsed.as_secs_f64()
    );
}
