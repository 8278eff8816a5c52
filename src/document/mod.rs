//! The generated instructions document.
//!
//! ```text
//! <!-- prompt-weave:line 4 "builtin:base.md" sha256 <digest> -->
//! ## Base
//!
//! <!-- prompt-weave:generated - do not edit above this line -->
//!
//! user-owned notes
//! ```
//!
//! Everything above the first separator is owned by the [`Assembler`];
//! everything below it belongs to the user and is copied through verbatim.

mod assembler;
mod layout;
mod provenance;

pub use assembler::Assembler;
pub use layout::{render, ExistingDocument};
pub use provenance::{extract_digests, Directive};

/// Marker dividing the generated region from the user region.
pub const SEPARATOR: &str = "<!-- prompt-weave:generated - do not edit above this line -->";

/// Output document location, relative to the workspace root.
pub const OUTPUT_PATH: &str = ".github/copilot-instructions.md";

/// Workspace-tier snippets directory, relative to the workspace root.
pub const WORKSPACE_SNIPPETS_DIR: &str = ".prompt-weave/snippets";
