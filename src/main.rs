use clap::Parser;
use dirsweep::cli::{Cli, run};
use dirsweep::output::OutputFormatter;
use std::collections::HashSet;
use std::env;
use std::process;

fn main() {
    let cli = Cli::parse();
    let exclude: HashSet<String> = cli.exclude.into_iter().collect();

    let dir = match env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            OutputFormatter::error(&format!("Failed to resolve working directory: {}", e));
            process::exit(1);
        }
    };

    if let Err(e) = run(&dir, &exclude) {
        OutputFormatter::error(&e.to_string());
        process::exit(1);
    }
}
