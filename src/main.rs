use swatchkit::{cli, logger, ui};

fn main() {
    if let Err(e) = logger::init() {
        eprintln!("Warning: Failed to initialize logging: {e}");
    }

    if let Err(e) = cli::main() {
        ui::print_error(&format!("Error: {e:#}"));
        std::process::exit(1);
    }
}
