use dirsweep::ip::{self, LOOKUP_ENDPOINT};
use dirsweep::output::OutputFormatter;
use std::process;

fn main() {
    match ip::fetch(LOOKUP_ENDPOINT) {
        Ok(info) => info.show(),
        Err(e) => {
            OutputFormatter::error(&e.to_string());
            process::exit(1);
        }
    }
}
