use clap::Parser;

mod cli;
mod error;
mod io;
mod logging;
mod pipeline;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(&cli);

    match pipeline::run(&cli) {
        Ok(count) => {
            println!("Outputted File: {count} rows processed.");
        }
        Err(e) => {
            eprintln!("{}", e.message());
            std::process::exit(e.exit_code());
        }
    }
}
