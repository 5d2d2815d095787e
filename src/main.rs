use std::process;
use todocli::commands::Cli;
use todocli::msg_error;

fn main() {
    if let Err(err) = Cli::menu() {
        msg_error!(err);
        process::exit(1);
    }
}
