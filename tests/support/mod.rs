//! Test support utilities for warren integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;

#[allow(unused_imports)]
pub use assertions::*;

use assert_cmd::Command;
use std::process::Output;
use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own temporary project dir and home dir.
/// No process-global state is mutated — child processes use
/// `.current_dir()` so tests can safely run in parallel.
///
/// AWS environment variables are pinned to an unroutable local
/// endpoint, so any store call fails fast with a connection error
/// instead of reaching a real account. Tests exercising the fallback
/// path rely on that.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Create a warren command with a hermetic environment.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("warren").expect("failed to find warren binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.current_dir(self.dir.path());

        // Point the SDK at a closed local port: fast, deterministic
        // connection failures, no real AWS traffic.
        cmd.env("AWS_ACCESS_KEY_ID", "testing");
        cmd.env("AWS_SECRET_ACCESS_KEY", "testing");
        cmd.env("AWS_REGION", "us-east-1");
        cmd.env("AWS_ENDPOINT_URL", "http://127.0.0.1:1");
        cmd.env("AWS_MAX_ATTEMPTS", "1");
        cmd.env("AWS_EC2_METADATA_DISABLED", "true");

        cmd
    }

    /// Write a `.warren.toml` into the test project directory.
    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.dir.path().join(".warren.toml"), contents)
            .expect("failed to write config");
    }

    /// Shortcut for `warren run [args…] -- command…`.
    pub fn run(&self, args: &[&str], command: &[&str]) -> Output {
        self.cmd()
            .arg("run")
            .args(args)
            .arg("--")
            .args(command)
            .output()
            .expect("failed to run warren run")
    }

    /// Shortcut for `warren env [args…]`.
    pub fn env(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("env")
            .args(args)
            .output()
            .expect("failed to run warren env")
    }
}
