use baily::commands::Cli;
use baily::libs::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = logging::init() {
        eprintln!("{}", e);
    }

    match Cli::menu() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = e.to_string();
            if message.starts_with('❌') {
                baily::msg_error!(message.trim_start_matches('❌').trim_start());
            } else {
                baily::msg_error!(message);
            }
            ExitCode::FAILURE
        }
    }
}
