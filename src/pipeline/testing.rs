//! Recording fake host for unit tests.

use std::collections::{HashSet, VecDeque};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::host::{CommandInvocation, Host, ProcessOutput};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Exists(PathBuf),
    Which(String),
    Run { program: PathBuf, args: Vec<String> },
}

/// Filesystem root of the platform the tests run on.
pub fn test_root() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from("C:\\")
    } else {
        PathBuf::from("/")
    }
}

#[derive(Default)]
pub struct FakeHost {
    files: HashSet<PathBuf>,
    on_path: Option<PathBuf>,
    cwd_unavailable: bool,
    responses: Mutex<VecDeque<Result<ProcessOutput, io::ErrorKind>>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.insert(path.into());
        self
    }

    pub fn with_on_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.on_path = Some(path.into());
        self
    }

    /// Make `current_dir` fail, as when the working directory was deleted.
    pub fn without_cwd(mut self) -> Self {
        self.cwd_unavailable = true;
        self
    }

    pub fn respond(self, code: i32, stdout: &str) -> Self {
        self.respond_with(code, stdout, "")
    }

    pub fn respond_with(self, code: i32, stdout: &str, stderr: &str) -> Self {
        self.responses.lock().unwrap().push_back(Ok(ProcessOutput {
            code: Some(code),
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        }));
        self
    }

    pub fn respond_err(self, kind: io::ErrorKind) -> Self {
        self.responses.lock().unwrap().push_back(Err(kind));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn runs(&self) -> Vec<(PathBuf, Vec<String>)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Run { program, args } => Some((program, args)),
                _ => None,
            })
            .collect()
    }
}

impl Host for FakeHost {
    fn exists(&self, path: &Path) -> bool {
        self.calls.lock().unwrap().push(Call::Exists(path.to_path_buf()));
        self.files.contains(path)
    }

    fn which(&self, name: &str) -> Option<PathBuf> {
        self.calls.lock().unwrap().push(Call::Which(name.to_string()));
        self.on_path.clone()
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        if self.cwd_unavailable {
            return Err(io::Error::from(io::ErrorKind::NotFound));
        }
        Ok(test_root().join("cwd"))
    }

    async fn run(&self, invocation: &CommandInvocation) -> io::Result<ProcessOutput> {
        self.calls.lock().unwrap().push(Call::Run {
            program: invocation.program().to_path_buf(),
            args: invocation.args().into_iter().map(String::from).collect(),
        });
        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(output)) => Ok(output),
            Some(Err(kind)) => Err(io::Error::from(kind)),
            None => Ok(ProcessOutput {
                code: Some(0),
                ..Default::default()
            }),
        }
    }
}
