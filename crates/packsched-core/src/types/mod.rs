//! Core type definitions used across the PackScheduler workspace.

pub mod id;

pub use id::*;
