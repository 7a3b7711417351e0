use std::io::Read;

use jot_core::{tokenize, ByteView, TokenArena};

fn main() {
    let mut input = Vec::new();
    std::io::stdin().read_to_end(&mut input).unwrap();

    // A token costs at least two source bytes on average; the slack
    // covers a lone scalar.
    let mut arena = TokenArena::with_capacity(input.len() / 2 + 8);

    match tokenize(ByteView::new(&input), &mut arena) {
        Ok(count) => {
            let containers = arena
                .tokens()
                .iter()
                .filter(|t| t.kind.is_container())
                .count();
            println!(
                "ok: {} tokens from {} bytes ({} containers, {} leaves)",
                count,
                input.len(),
                containers,
                count - containers
            );
        }
        Err(err) => {
            eprintln!("parse failed: {}", err);
            std::process::exit(1);
        }
    }
}
