use std::env;

mod cli;
mod exits;
mod logging;
mod terminal;
mod tui;

fn main() {
    exits::install_handlers();

    let args: Vec<String> = env::args().collect();
    std::process::exit(cli::run(args));
}
