//! patternkit: classic object-oriented design patterns as runnable Rust demos
//!
//! The composite tree and the observer registry are the substantial pieces;
//! the remaining modules are compact one-scenario illustrations.
//!
//! Architecture:
//! - Pattern modules: one self-contained module per pattern
//! - `demo`: fixed scenario per pattern, returned as transcript lines
//! - `config`: layered settings (defaults, global file, --config, env)
//! - `cli`: argument parsing, dispatch and terminal output

pub mod adapter;
pub mod builder;
pub mod command;
pub mod composite;
pub mod decorator;
pub mod facade;
pub mod factory;
pub mod observer;
pub mod strategy;

pub mod cli;
pub mod config;
pub mod demo;
pub mod errors;
pub mod exitcode;
pub mod util;

pub use composite::{Component, RenderStyle};
pub use errors::{PatternError, PatternResult};
pub use observer::{Observer, Reaction, Subject};
