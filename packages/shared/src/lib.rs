//! Utilities shared by the Voyage binaries.

pub mod logger;
