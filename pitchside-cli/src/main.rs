//! Entry point for the `pitchside` command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = pitchside_cli::run() {
        eprintln!("pitchside: {err}");
        std::process::exit(1);
    }
}
