//! Test harnesses for the streamcore library
//!
//! - [`suites::vectors`]: JSON known-answer vectors and their runner
//! - [`suites::counting`]: a generator wrapper that counts keystream blocks
