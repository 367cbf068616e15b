use std::env;

use fixturegen::config::{parse_args, Config};
use fixturegen::generate_treebank;

fn main() {
    fixturegen::init_logging();

    let overrides = parse_args(env::args().skip(1), false).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("Usage: treebank_words [--config <path>] [--testdata <dir>]");
        std::process::exit(1);
    });

    let config = Config::resolve(&overrides).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    match generate_treebank(&config) {
        Ok(_) => {
            println!("Wrote {}", config.treebank_words_path().display());
            println!("Wrote {}", config.treebank_sents_path().display());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
