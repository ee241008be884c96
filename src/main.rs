use clap::Parser;
use sclc::{init_logging, run, Cli};

fn main() {
    init_logging();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => std::process::exit(0),
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(1);
        }
    }
}
