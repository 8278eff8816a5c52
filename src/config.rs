//! Runtime settings gathered from flags and the environment.

use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable overriding the user snippets directory.
pub const USER_SNIPPETS_ENV: &str = "PROMPT_WEAVE_USER_SNIPPETS";

/// Environment variable naming a directory to record cassettes into.
pub const RECORD_ENV: &str = "PROMPT_WEAVE_RECORD";

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "PROMPT_WEAVE_LOG";

/// User snippets location relative to the home directory.
const USER_SNIPPETS_SUBDIR: &str = ".prompt-weave/snippets";

/// Settings shared by every command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Directory searched for the user tier, if any.
    pub user_snippets_dir: Option<PathBuf>,
    /// Base directory for cassette recording, if recording is enabled.
    pub record_dir: Option<PathBuf>,
}

impl Settings {
    /// Resolves settings from the process environment.
    ///
    /// `user_snippets` is the value of the `--user-snippets` flag (which
    /// already falls back to `PROMPT_WEAVE_USER_SNIPPETS`).
    #[must_use]
    pub fn from_env(user_snippets: Option<PathBuf>) -> Self {
        Self::from_lookup(user_snippets, |key| std::env::var_os(key))
    }

    /// Resolves settings using `lookup` to read environment variables.
    #[must_use]
    pub fn from_lookup(
        user_snippets: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<OsString>,
    ) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty()).map(PathBuf::from);

        let user_snippets_dir = user_snippets
            .or_else(|| non_empty(USER_SNIPPETS_ENV))
            .or_else(|| {
                non_empty("HOME")
                    .or_else(|| non_empty("USERPROFILE"))
                    .map(|home| home.join(USER_SNIPPETS_SUBDIR))
            });

        Self {
            user_snippets_dir,
            record_dir: non_empty(RECORD_ENV),
        }
    }
}
