use std::process::ExitCode;

use tracing::debug;

use sendmapping_lib::error::EXIT_USAGE;
use sendmapping_lib::{cli, logging, Error, MappingLoader, SystemSerial};

fn main() -> ExitCode {
    let Some(args) = cli::parse_args(std::env::args_os()) else {
        eprintln!("{}", cli::usage());
        return ExitCode::from(EXIT_USAGE);
    };

    logging::init_logging();
    debug!("[sendmapping] {:?}", args);

    let loader = MappingLoader::beside_executable();
    let mut stdout = std::io::stdout().lock();
    let result = sendmapping_lib::run(&args, &loader, &SystemSerial, &mut stdout);
    drop(stdout);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ Error::Mapping(_)) => {
            println!("{}", err);
            ExitCode::from(err.exit_code())
        }
        Err(err @ Error::Transport(_)) => {
            eprintln!("error: {}", err);
            ExitCode::from(err.exit_code())
        }
    }
}
