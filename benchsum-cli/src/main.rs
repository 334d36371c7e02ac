//! benchsum binary entry point.

fn main() {
    if let Err(e) = benchsum_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
