//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    env_logger::init();
    if let Err(err) = trailmark_cli::run() {
        eprintln!("trailmark: {err}");
        std::process::exit(1);
    }
}
