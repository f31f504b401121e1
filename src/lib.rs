//! Error-checked helpers over the host filesystem.
//!
//! See [`fs_op`] for the operations and [`config::FsOptions`] for the knobs
//! shared by copying and walking.

pub mod config;
pub mod fs_op;

pub use crate::config::FsOptions;
pub use crate::fs_op::{FsOpError, Result};
