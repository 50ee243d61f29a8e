use std::io;

use account_book::{
    cli::{run_cli, Output},
    config::Config,
    init,
};

fn main() {
    init();

    let config = Config::from_env();
    if let Err(err) = run_cli(&config) {
        let mut stderr = Output::new(io::stderr(), config.styled_output);
        if stderr.error(format!("Error: {err}")).is_err() {
            eprintln!("Error: {err}");
        }
        std::process::exit(1);
    }
}
