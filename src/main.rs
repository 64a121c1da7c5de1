fn main() {
    if let Err(e) = pulsechat::cli::main() {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}
