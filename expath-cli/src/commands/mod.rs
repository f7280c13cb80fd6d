//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `normalize`: Canonicalize separators without resolving
//! - `resolve`: Collapse `.` and `..` into a canonical absolute path
//! - `join`: Append components to a base path
//! - `resolve_against`: Resolve a relative path against a base directory
//! - `is_absolute`: Check for a root segment
//! - `dirname`: Print the parent part of a path
//! - `ext`: Print the extension of the final component
//! - `mkdirs`: Create a directory and its missing ancestors
//! - `exists`: Check whether a path exists
//! - `exec_path`: Print the running executable's path
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod dirname;
pub mod exec_path;
pub mod exists;
pub mod ext;
pub mod is_absolute;
pub mod join;
pub mod mkdirs;
pub mod normalize;
pub mod resolve;
pub mod resolve_against;

pub use completions::CompletionsCommand;
pub use dirname::DirnameCommand;
pub use exec_path::ExecPathCommand;
pub use exists::ExistsCommand;
pub use ext::ExtCommand;
pub use is_absolute::IsAbsoluteCommand;
pub use join::JoinCommand;
pub use mkdirs::MkdirsCommand;
pub use normalize::NormalizeCommand;
pub use resolve::ResolveCommand;
pub use resolve_against::ResolveAgainstCommand;
