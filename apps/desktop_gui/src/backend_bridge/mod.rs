//! Backend bridge: command types and the worker that runs them against the fact store.

pub mod commands;
pub mod runtime;
