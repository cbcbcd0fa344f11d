use std::process;

fn main() {
    if let Err(err) = budget_tracker::cli::run_cli() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
