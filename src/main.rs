use std::process;

use bank_ledger::{logging, run, Config};

fn main() {
    logging::init();

    let config = Config::default();
    if let Err(err) = run(&config) {
        tracing::error!(%err, "console failure");
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
