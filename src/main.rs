// src/main.rs

use stepplan::{cli, logging, run};

fn main() {
    if let Err(err) = run_main() {
        eprintln!("stepplan error: {err}");
        std::process::exit(1);
    }
}

fn run_main() -> stepplan::errors::Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args)
}
