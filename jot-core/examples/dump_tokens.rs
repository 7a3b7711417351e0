use jot_core::{tokenize, ByteView, TokenArena};

fn main() {
    let doc = br#"{"name":"jot","version":3,"tags":["fast","flat"],"nested":{"deep":true}}"#;
    let view = ByteView::new(doc);
    let mut arena = TokenArena::with_capacity(32);

    println!("Input: {:?}\n", std::str::from_utf8(doc).unwrap());

    match tokenize(view, &mut arena) {
        Ok(count) => {
            println!("{} tokens:", count);
            for (i, token) in arena.tokens().iter().enumerate() {
                let parent = token
                    .parent
                    .map(|p| p.index().to_string())
                    .unwrap_or_else(|| "-".to_string());
                let content = view
                    .content(token)
                    .map(|c| String::from_utf8_lossy(c.as_bytes()).into_owned())
                    .unwrap_or_default();
                println!(
                    "  {:>3}  {:<9}  {:>3}..{:<3}  size={}  parent={:>2}  {}",
                    i,
                    format!("{:?}", token.kind),
                    token.start,
                    token.end,
                    token.size,
                    parent,
                    content
                );
            }

            if let Some(root) = arena.root() {
                if let Some(version) = root.field(&view, b"version") {
                    let bytes = view.content(version.token()).unwrap();
                    println!("\nversion = {}", String::from_utf8_lossy(bytes.as_bytes()));
                }
            }
        }
        Err(err) => eprintln!("parse failed: {}", err),
    }
}
