//! Helpers shared by the binaries and service crates.

pub mod utils;
