fn main() {
    let args = clipio::Args::from_env();
    if let Err(e) = clipio::run(args) {
        eprintln!("Error: {:?}", e);
    }
}
