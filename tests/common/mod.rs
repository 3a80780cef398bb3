use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn seoinject_cmd() -> Command {
    let mut cmd = Command::cargo_bin("seoinject").unwrap();
    cmd.env_remove("SEOINJECT_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write seoinject.toml and create an empty templates directory
#[allow(dead_code)]
pub fn write_site(root: &Path, config: &str) {
    fs::write(root.join("seoinject.toml"), config).unwrap();
    fs::create_dir_all(root.join("templates")).unwrap();
}
