//! Entrypoint.

fn main() {
    if let Err(err) = kpreview::run_command_line() {
        eprintln!("ERROR: {:?}", err);
        std::process::exit(1);
    }
}
