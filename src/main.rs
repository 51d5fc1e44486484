fn main() {
    // Delegate to CLI runner; errors are printed with their causes.
    if let Err(err) = dirtree::cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
