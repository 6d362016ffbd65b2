fn main() {
    if let Err(err) = astrowheel::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
