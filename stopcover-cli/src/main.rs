//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = stopcover_cli::run() {
        eprintln!("stopcover: {err}");
        std::process::exit(1);
    }
}
