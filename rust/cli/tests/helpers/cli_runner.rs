use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempDir;

#[derive(Debug)]
pub struct CliRunner {
    binary_path: PathBuf,
    temp_dir: TempDir,
}

#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CliRunner {
    pub fn new() -> Self {
        Self {
            binary_path: PathBuf::from(env!("CARGO_BIN_EXE_acefive")),
            temp_dir: TempDir::new().expect("temporary workspace"),
        }
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir().join(name);
        std::fs::write(&path, content).expect("write fixture");
        path
    }

    /// In-process run through the library entry point.
    pub fn run(&self, args: &[&str]) -> CliResult {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let argv: Vec<String> = std::iter::once("acefive".to_string())
            .chain(args.iter().map(|s| s.to_string()))
            .collect();
        let code = acefive_cli::run(argv, &mut out, &mut err);
        CliResult {
            exit_code: code,
            stdout: String::from_utf8_lossy(&out).to_string(),
            stderr: String::from_utf8_lossy(&err).to_string(),
        }
    }

    /// Spawn the binary with `input` on stdin and a clean player environment.
    pub fn run_with_input(&self, args: &[&str], input: &str) -> CliResult {
        let mut cmd = Command::new(&self.binary_path);
        cmd.args(args)
            .current_dir(self.dir())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        for (key, _) in std::env::vars() {
            if key.starts_with("ACEFIVE_") {
                cmd.env_remove(key);
            }
        }

        let mut child = cmd.spawn().expect("failed to spawn acefive");
        if let Some(mut stdin) = child.stdin.take() {
            let _ = stdin.write_all(input.as_bytes());
        }
        let output = child.wait_with_output().expect("failed to read output");
        CliResult {
            exit_code: output.status.code().unwrap_or(1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Clear every variable the player reads so a test starts from defaults.
pub fn clear_player_env() {
    for key in [
        "ACEFIVE_CONFIG",
        "ACEFIVE_STRATEGY",
        "ACEFIVE_BET_POLICY",
        "ACEFIVE_FLAT_BET",
        "ACEFIVE_MAX_BET",
        "ACEFIVE_INSURANCE",
        "ACEFIVE_SURRENDER",
        "ACEFIVE_PAIR_MATCH",
        "ACEFIVE_TRANSCRIPT",
        "ACEFIVE_CARDS_LOG",
        "ACEFIVE_VERBOSE",
    ] {
        unsafe {
            std::env::remove_var(key);
        }
    }
}
