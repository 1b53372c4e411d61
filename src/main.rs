fn main() {
    if let Err(err) = timegrid_layout::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
