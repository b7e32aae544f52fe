//! Shared fixtures for binary-level tests.
//!
//! A [`Project`] is a temporary directory with a `.lodetime/` layout. A
//! [`MockRuntime`] is a real TCP listener on `127.0.0.1:0` that answers one
//! request with a canned line from a background thread.

#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

use assert_cmd::Command;
use tempfile::TempDir;

/// Get a command for running lode, isolated from the host's environment.
///
/// The user config directory points into `home`, so a real
/// `~/.config/lode/config.yaml` never leaks into a test.
pub fn lode(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("lode").unwrap();
    cmd.env_remove("LODE_RUNTIME_ENDPOINT")
        .env_remove("LODE_LOG")
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"));
    cmd
}

/// A temporary LodeTime project.
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// A project with the given `config.yaml` and empty declaration dirs.
    pub fn new(config: &str) -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let lode_dir = dir.path().join(".lodetime");
        std::fs::create_dir_all(lode_dir.join("components")).unwrap();
        std::fs::create_dir_all(lode_dir.join("contracts")).unwrap();
        std::fs::write(lode_dir.join("config.yaml"), config).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn lode_dir(&self) -> PathBuf {
        self.dir.path().join(".lodetime")
    }

    /// Add a component declaration document.
    pub fn component(&self, name: &str) -> &Self {
        let path = self.lode_dir().join("components").join(name);
        std::fs::write(path, "name: x\n").unwrap();
        self
    }

    /// Add a contract declaration document.
    pub fn contract(&self, name: &str) -> &Self {
        let path = self.lode_dir().join("contracts").join(name);
        std::fs::write(path, "name: x\n").unwrap();
        self
    }

    /// A `lode` command running inside this project.
    pub fn lode(&self) -> Command {
        let mut cmd = lode(self.path());
        cmd.arg("--cwd").arg(self.path());
        cmd
    }
}

/// A one-shot runtime stand-in.
pub struct MockRuntime {
    endpoint: String,
    handle: JoinHandle<String>,
}

impl MockRuntime {
    /// Answer the first request with `reply` (a newline is appended).
    pub fn reply(reply: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let endpoint = listener.local_addr().unwrap().to_string();
        let reply = format!("{}\n", reply);

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut request = String::new();
            reader.read_line(&mut request).unwrap();
            let mut stream = stream;
            let _ = stream.write_all(reply.as_bytes());
            request
        });

        Self { endpoint, handle }
    }

    /// Answer with a successful envelope around `data`.
    pub fn ok(data: serde_json::Value) -> Self {
        Self::reply(&serde_json::json!({"ok": true, "data": data}).to_string())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Wait for the exchange and return the request line received.
    pub fn request(self) -> String {
        self.handle.join().unwrap()
    }
}

/// An endpoint nothing is listening on.
pub fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = listener.local_addr().unwrap().to_string();
    drop(listener);
    endpoint
}
