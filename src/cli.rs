//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `prompt-weave`.
#[derive(Debug, Parser)]
#[command(
    name = "prompt-weave",
    version,
    about = "Assemble .github/copilot-instructions.md from snippets"
)]
pub struct Cli {
    /// Log resolution and write decisions to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Regenerate .github/copilot-instructions.md for a workspace.
    Regenerate {
        /// Absolute path to the workspace root.
        #[arg(long, value_name = "PATH")]
        workspace: PathBuf,
        /// Absolute path to the extension's built-in snippets directory.
        #[arg(long, value_name = "PATH")]
        builtin_snippets: PathBuf,
        /// Ordered list of snippet names to include.
        #[arg(long, num_args = 0.., value_name = "NAME")]
        include: Vec<String>,
        /// User snippets directory [default: ~/.prompt-weave/snippets].
        #[arg(long, value_name = "PATH", env = "PROMPT_WEAVE_USER_SNIPPETS")]
        user_snippets: Option<PathBuf>,
    },
    /// Warn if the generated file is not ignored by git.
    CheckIgnore {
        /// Absolute path to the workspace root.
        #[arg(long, value_name = "PATH")]
        workspace: PathBuf,
    },
}
