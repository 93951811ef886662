//! wgraph Core Library
//!
//! Graph model, loader and algorithms for the wgraph CLI.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
