#![doc = include_str!("../README.md")]

pub mod channel;
pub mod core;
pub mod io;

#[cfg(feature = "tokio")]
pub mod tokio;

pub use crate::core::{str_lines, StrLines};
pub use crate::io::{lines, lines_with_capacity, Lines, ReadExt};
