//! CLI commands for wgraph

pub mod costs;
pub mod dispatch;
pub mod format;
pub mod input;
pub mod path;
pub mod report;
pub mod show;
pub mod traverse;
