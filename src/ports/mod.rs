//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the regeneration core and an
//! external system (the filesystem and git). Implementations live in
//! `src/adapters/`.

pub mod filesystem;
pub mod git;

pub use filesystem::FileSystem;
pub use git::{GitRepo, IgnoreStatus};
