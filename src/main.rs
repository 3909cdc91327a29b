fn main() {
    if let Err(err) = shorturl_seed::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
