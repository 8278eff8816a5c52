//! Command dispatch and handlers.

pub mod check_ignore;
pub mod regenerate;

use crate::cassette::session::RecordingSession;
use crate::cli::Command;
use crate::config::Settings;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// When `PROMPT_WEAVE_RECORD` is set to a directory path, all port
/// interactions are recorded to per-port cassette files below it.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let user_snippets = match command {
        Command::Regenerate {
            user_snippets,
            ..
        } => user_snippets.clone(),
        Command::CheckIgnore { .. } => None,
    };
    let settings = Settings::from_env(user_snippets);

    let (ctx, session) = if let Some(dir) = &settings.record_dir {
        let (ctx, session) = ServiceContext::recording_at(dir)?;
        (ctx, Some(session))
    } else {
        (ServiceContext::live(), None)
    };

    let result = dispatch_with_context(command, &ctx, &settings);

    // Finish recording even when the command failed.
    match session {
        Some(session) => {
            drop(ctx);
            combine(result, finish_recording(session))
        }
        None => result,
    }
}

/// Dispatch a command with the given service context.
fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    settings: &Settings,
) -> Result<(), String> {
    match command {
        Command::Regenerate {
            workspace,
            builtin_snippets,
            include,
            ..
        } => regenerate::run(
            ctx,
            settings.user_snippets_dir.as_deref(),
            workspace,
            builtin_snippets,
            include,
        ),
        Command::CheckIgnore { workspace } => {
            check_ignore::run(ctx, workspace);
            Ok(())
        }
    }
}

/// Merge the command's result with the recording session's result.
///
/// The command error comes first; a recording failure is appended on its
/// own line so neither message is lost.
fn combine(command: Result<(), String>, recording: Result<(), String>) -> Result<(), String> {
    match (command, recording) {
        (Ok(()), Ok(())) => Ok(()),
        (Err(e), Ok(())) | (Ok(()), Err(e)) => Err(e),
        (Err(command), Err(recording)) => Err(format!("{command}\n{recording}")),
    }
}

/// Finish a recording session and print the output directory.
fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let output_dir = session.finish()?;
    eprintln!("Recording saved to: {}", output_dir.display());
    Ok(())
}
