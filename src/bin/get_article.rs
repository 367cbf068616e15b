use std::env;

use fixturegen::config::{parse_args, Config};
use fixturegen::generate_article;

fn main() {
    fixturegen::init_logging();

    let overrides = parse_args(env::args().skip(1), true).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("Usage: get_article [--config <path>] [--testdata <dir>] [--url <url>]");
        std::process::exit(1);
    });

    let config = Config::resolve(&overrides).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    match generate_article(&config) {
        Ok(path) => println!("Wrote {}", path.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
