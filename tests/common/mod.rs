//! Shared test host for integration tests.
#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use vsix_signer::pipeline::{CommandInvocation, Host, ProcessOutput};

/// Host backed by the real filesystem plus a set of virtual Windows paths,
/// with scripted process results.
#[derive(Default)]
pub struct ScriptedHost {
    virtual_files: HashSet<PathBuf>,
    on_path: Option<PathBuf>,
    responses: Mutex<VecDeque<ProcessOutput>>,
    runs: Mutex<Vec<(PathBuf, Vec<String>)>>,
    touched: Mutex<usize>,
}

impl ScriptedHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_virtual_file(mut self, path: &str) -> Self {
        self.virtual_files.insert(PathBuf::from(path));
        self
    }

    pub fn with_on_path(mut self, path: &str) -> Self {
        self.on_path = Some(PathBuf::from(path));
        self
    }

    pub fn respond(self, code: i32, stdout: &str) -> Self {
        self.responses.lock().unwrap().push_back(ProcessOutput {
            code: Some(code),
            stdout: stdout.to_string(),
            stderr: String::new(),
        });
        self
    }

    pub fn runs(&self) -> Vec<(PathBuf, Vec<String>)> {
        self.runs.lock().unwrap().clone()
    }

    /// Number of filesystem, PATH and process calls made so far.
    pub fn touched(&self) -> usize {
        *self.touched.lock().unwrap()
    }
}

impl Host for ScriptedHost {
    fn exists(&self, path: &Path) -> bool {
        *self.touched.lock().unwrap() += 1;
        self.virtual_files.contains(path) || path.exists()
    }

    fn which(&self, _name: &str) -> Option<PathBuf> {
        *self.touched.lock().unwrap() += 1;
        self.on_path.clone()
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    async fn run(&self, invocation: &CommandInvocation) -> io::Result<ProcessOutput> {
        *self.touched.lock().unwrap() += 1;
        self.runs.lock().unwrap().push((
            invocation.program().to_path_buf(),
            invocation.args().into_iter().map(String::from).collect(),
        ));
        let next = self.responses.lock().unwrap().pop_front();
        Ok(next.unwrap_or(ProcessOutput {
            code: Some(0),
            ..Default::default()
        }))
    }
}
