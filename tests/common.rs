use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::PathBuf;

pub fn rotei() -> Command {
    cargo_bin_cmd!("rotei")
}

/// The bundled harbour-town map
pub fn demo_catalog() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("demos")
        .join("harbor-town.toml")
}

/// `rotei --catalog <demo map>` ready for a subcommand
#[allow(dead_code)]
pub fn rotei_demo() -> Command {
    let mut cmd = rotei();
    cmd.arg("--catalog").arg(demo_catalog());
    cmd
}
