//! Shared helpers for the `redwood` binary.

pub mod bootstrap;
