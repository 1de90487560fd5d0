//! The `cryptosuite` command.

use std::process::ExitCode;

use clap::Parser as _;
use cryptosuite_cli::Args;

fn main() -> ExitCode {
    better_panic::install();

    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    match cryptosuite_cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("{err:?}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
