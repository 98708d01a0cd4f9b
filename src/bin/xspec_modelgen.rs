fn main() {
    if let Err(err) = xspec_modelgen::cli::run_cli() {
        eprintln!("ERROR: {err}");
        std::process::exit(1);
    }
}
