//! Binary entrypoint for the `prompt-weave` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Variables already set in the environment win over `.env`.
    dotenvy::dotenv().ok();

    // Recording is handled in commands::dispatch via PROMPT_WEAVE_RECORD=<dir>.
    match prompt_weave::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err.trim_end());
            ExitCode::FAILURE
        }
    }
}
