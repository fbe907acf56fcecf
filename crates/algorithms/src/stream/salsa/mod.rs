//! Salsa family of stream ciphers

pub mod salsa20;

// Re-export for convenience
pub use salsa20::Salsa20;
