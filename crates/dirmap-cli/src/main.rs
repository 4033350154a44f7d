use dirmap_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Logs go to the state dir; stdout is reserved for the map.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("dirmap error: {:#}", err);
        std::process::exit(1);
    }
}
