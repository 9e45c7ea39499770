use anyhow::{Context, Result};
use replymark_engine::render_markdown;
use std::io::Read;
use std::{env, fs, io, process};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let input = if args.len() == 2 {
        fs::read_to_string(&args[1])
            .with_context(|| format!("Failed to read input file '{}'", args[1]))?
    } else if args.len() == 1 {
        // No file argument - render stdin
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        buffer
    } else {
        eprintln!("Usage: {} [markdown-file]", args[0]);
        process::exit(1);
    };

    println!("{}", render_markdown(&input));
    Ok(())
}
