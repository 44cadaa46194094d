use std::process;

fn main() {
    if let Err(err) = cc_sessions::cli::run() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
