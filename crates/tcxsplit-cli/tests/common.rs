//! Shared helpers for CLI integration tests.
#![allow(dead_code)]

use assert_cmd::Command;
use tcxsplit_testing::TestWorld;

/// `tcxsplit` running inside the world root, with the user config directory
/// pointed into the temp dir so a real config never leaks in.
pub fn tcxsplit(world: &TestWorld) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("tcxsplit");
    cmd.current_dir(world.root())
        .env("XDG_CONFIG_HOME", world.root().join("config"))
        .env("HOME", world.root())
        .env_remove("RUST_LOG");
    cmd
}
