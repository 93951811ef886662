//! Output rendering shared by the graph commands
//!
//! `human` builds the line-oriented text report, `json` builds the keys of
//! the JSON document. Both are pure; the command handlers do the printing.

pub mod human;
pub mod json;
