//! External-process solver
//!
//! [`ProcessSolverLoader`] resolves the configured command on `PATH` once,
//! in the background; [`ProcessSolver`] then runs it once per request.

use async_trait::async_trait;
use planner_application::{PlanSolver, SolverError, SolverLoader};
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info};

/// Runs the solver executable for each request
#[derive(Debug, Clone)]
pub struct ProcessSolver {
    program: PathBuf,
    args: Vec<String>,
    timeout: Duration,
    name: String,
}

impl ProcessSolver {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>, timeout: Duration) -> Self {
        let program = program.into();
        let name = program
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| program.display().to_string());
        Self {
            program,
            args,
            timeout,
            name,
        }
    }

    async fn run(&self, input_json: &str) -> Result<std::process::Output, SolverError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| SolverError::Other("solver stdin unavailable".to_string()))?;
        let input = input_json.to_owned();
        let write = async move {
            stdin.write_all(input.as_bytes()).await?;
            // Closing stdin lets the solver see EOF
            stdin.shutdown().await
        };

        let (written, output) = tokio::join!(write, child.wait_with_output());
        let output = output?;
        if let Err(e) = written
            && e.kind() != ErrorKind::BrokenPipe
        {
            return Err(SolverError::SpawnError(e));
        }
        Ok(output)
    }
}

#[async_trait]
impl PlanSolver for ProcessSolver {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate_plan(&self, input_json: &str) -> Result<String, SolverError> {
        debug!("Running solver {}", self.program.display());
        let output = tokio::time::timeout(self.timeout, self.run(input_json))
            .await
            .map_err(|_| SolverError::Timeout(self.timeout))??;

        if !output.status.success() {
            return Err(SolverError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| SolverError::InvalidOutput)
    }
}

/// Locates the solver executable and produces a [`ProcessSolver`]
#[derive(Debug, Clone)]
pub struct ProcessSolverLoader {
    command: String,
    args: Vec<String>,
    timeout: Duration,
}

impl ProcessSolverLoader {
    pub fn new(command: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            command: command.into(),
            args,
            timeout,
        }
    }
}

#[async_trait]
impl SolverLoader for ProcessSolverLoader {
    async fn load(&self) -> Result<Arc<dyn PlanSolver>, SolverError> {
        if self.command.trim().is_empty() {
            return Err(SolverError::NotFound(
                "no solver command configured".to_string(),
            ));
        }

        let command = self.command.clone();
        let program = tokio::task::spawn_blocking(move || which::which(&command))
            .await
            .map_err(|e| SolverError::Other(e.to_string()))?
            .map_err(|e| SolverError::NotFound(format!("{}: {}", self.command, e)))?;

        info!("Using solver at {}", program.display());
        Ok(Arc::new(ProcessSolver::new(
            program,
            self.args.clone(),
            self.timeout,
        )))
    }
}
