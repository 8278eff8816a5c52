//! Replaying adapter for the `GitRepo` port.

use std::path::Path;
use std::sync::Mutex;

use super::extract_result;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::git::{GitRepo, IgnoreStatus};

/// Replays recorded git operations from a cassette.
pub struct ReplayingGitRepo {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingGitRepo {
    /// Creates a new replaying git repo from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self {
            replayer: Mutex::new(replayer),
        }
    }
}

impl GitRepo for ReplayingGitRepo {
    fn check_ignore(
        &self,
        _root: &Path,
        _relative_path: &str,
    ) -> Result<IgnoreStatus, Box<dyn std::error::Error + Send + Sync>> {
        let output = {
            let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
            replayer.next_interaction("git", "check_ignore").output
        };
        extract_result(&output, "git::check_ignore")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn make_replayer(outputs: &[serde_json::Value]) -> CassetteReplayer {
        let interactions = outputs
            .iter()
            .enumerate()
            .map(|(seq, output)| Interaction {
                seq: seq as u64,
                port: "git".into(),
                method: "check_ignore".into(),
                input: json!({}),
                output: output.clone(),
            })
            .collect();
        CassetteReplayer::new(&Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            tool_version: "0.0.0".into(),
            interactions,
        })
    }

    #[test]
    fn replays_statuses_in_order() {
        let git = ReplayingGitRepo::new(make_replayer(&[
            json!({"ok": "ignored"}),
            json!({"ok": "indeterminate"}),
            json!({"err": "failed to run git check-ignore: not found"}),
        ]));
        let root = Path::new("/ws");

        assert_eq!(git.check_ignore(root, "x").unwrap(), IgnoreStatus::Ignored);
        assert_eq!(
            git.check_ignore(root, "x").unwrap(),
            IgnoreStatus::Indeterminate
        );
        assert!(git.check_ignore(root, "x").is_err());
    }
}
