//! Driver for the streamcore engines
//!
//! Wraps the pure keystream engines with argument parsing, hex I/O and
//! wall-clock timing. The engines themselves never log or time anything.

pub mod commands;
pub mod timing;
