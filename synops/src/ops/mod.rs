//! Core operations.
//!
//! This module contains the business logic for synops commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod render;
pub mod tree;

pub use check::check;
pub use render::{indent_setting, render};
pub use tree::tree;
