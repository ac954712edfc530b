fn main() {
    match projscan::run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{}", projscan::format_error(&err));
            std::process::exit(projscan::EXIT_FAILURE);
        }
    }
}
