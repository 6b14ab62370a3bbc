//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create an understudy command with correct environment variables.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - Current directory set to the test project directory
    /// - No inherited agent credentials
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("understudy").expect("failed to find understudy binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        // Agent runs must never leak out of the test sandbox
        cmd.env_remove("ANTHROPIC_API_KEY");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `understudy init --yes`.
    pub fn init_cmd(&self) -> Output {
        self.cmd()
            .args(["init", "--yes"])
            .output()
            .expect("failed to run understudy init")
    }

    /// Shortcut for `understudy init` with extra flags.
    pub fn init_with(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("init")
            .args(args)
            .output()
            .expect("failed to run understudy init")
    }

    /// Shortcut for `understudy login`.
    pub fn login(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("login")
            .args(args)
            .output()
            .expect("failed to run understudy login")
    }

    /// Shortcut for `understudy generate`.
    pub fn generate(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("generate")
            .args(args)
            .output()
            .expect("failed to run understudy generate")
    }

    /// Shortcut for `understudy eject`.
    pub fn eject(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("eject")
            .args(args)
            .output()
            .expect("failed to run understudy eject")
    }
}
