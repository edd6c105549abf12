//! Command implementations behind the `nnet` binary.

pub mod commands;
