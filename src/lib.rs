//! jaelon - GitHub milestone checker and fixer
//!
//! Finds pull requests merged between two releases and makes sure each one
//! carries the release milestone. PRs without a milestone are assigned the
//! expected one (unless running dry); PRs carrying a different milestone are
//! reported and left alone.

pub mod auth;
pub mod config;
pub mod error;
pub mod milestone;
pub mod platform;
pub mod reconcile;
pub mod types;
