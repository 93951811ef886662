use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for wgraph running in `dir`, isolated from the caller's
/// logging and graph-selection environment
pub fn wgraph_in(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("wgraph");
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("WGRAPH_LOG")
        .env_remove("WGRAPH_FILE")
        .env_remove("WGRAPH_CONFIG");
    cmd
}

/// Path to a checked-in sample graph
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Write graph text into `dir` and return its path
#[allow(dead_code)]
pub fn write_graph(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).expect("write graph file");
    path
}
