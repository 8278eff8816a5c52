//! Check-ignore command handler.

use std::path::Path;

use crate::advisory::check_ignored;
use crate::context::ServiceContext;

/// Prints any warning about the output file being tracked by git.
pub fn run(ctx: &ServiceContext, workspace: &Path) {
    for warning in check_ignored(ctx, workspace) {
        println!("{warning}");
    }
}
