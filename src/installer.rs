//! Post-generation package installs.
//! Every installer that is not skipped runs `<name> install` as its own
//! process. All of them run at the same time and each reports on its own.

use std::path::Path;
use std::process::Command;

use log::{error, info, warn};
use rayon::prelude::*;

use crate::error::{Error, Result};

/// Installers run after generation, in reporting order.
pub const INSTALLERS: [&str; 3] = ["npm", "bower", "composer"];

/// Exit code a shell uses for "command not found".
const COMMAND_NOT_FOUND: i32 = 127;

/// A single installer invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallTask {
    pub name: String,
    pub argv: Vec<String>,
    pub skip: bool,
}

impl InstallTask {
    /// Creates the task for `<name> install`.
    pub fn new<S: Into<String>>(name: S, skip: bool) -> Self {
        let name = name.into();
        let argv = vec![name.clone(), "install".to_string()];
        Self { name, argv, skip }
    }

    /// Creates a task running an explicit command line.
    pub fn with_argv<S: Into<String>>(name: S, argv: Vec<String>, skip: bool) -> Self {
        Self { name: name.into(), argv, skip }
    }
}

/// Builds one task per supported installer from the skip flags.
///
/// # Arguments
/// * `skip_install` - Skip every installer
/// * `skipped` - Names of individually skipped installers
pub fn build_install_tasks(skip_install: bool, skipped: &[&str]) -> Vec<InstallTask> {
    INSTALLERS
        .iter()
        .map(|name| InstallTask::new(*name, skip_install || skipped.contains(name)))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStatus {
    Succeeded,
    Skipped,
}

/// Outcome of one installer.
#[derive(Debug)]
pub struct InstallReport {
    pub name: String,
    pub outcome: Result<InstallStatus>,
}

fn run_task(task: &InstallTask, working_dir: &Path) -> Result<InstallStatus> {
    let (program, args) = task.argv.split_first().ok_or_else(|| {
        Error::ConfigError(format!("installer '{}' has an empty command line", task.name))
    })?;

    let status = Command::new(program)
        .args(args)
        .current_dir(working_dir)
        .status()
        .map_err(|source| Error::InstallerLaunchFailure {
            installer: task.name.clone(),
            source,
        })?;

    match status.code() {
        Some(0) => Ok(InstallStatus::Succeeded),
        Some(COMMAND_NOT_FOUND) => Err(Error::InstallerExit127 { installer: task.name.clone() }),
        _ => Err(Error::InstallerFailed {
            installer: task.name.clone(),
            status: status.to_string(),
        }),
    }
}

fn log_outcome(name: &str, outcome: &Result<InstallStatus>) {
    match outcome {
        Ok(InstallStatus::Succeeded) => info!("{name} install finished"),
        Ok(InstallStatus::Skipped) => {}
        Err(e @ Error::InstallerExit127 { .. }) => error!("{e}"),
        Err(e) => warn!("{e}"),
    }
}

fn install_labels(tasks: &[&InstallTask]) -> String {
    tasks.iter().map(|task| format!("{} install", task.name)).collect::<Vec<_>>().join(", ")
}

/// Runs every non-skipped task concurrently in `working_dir` and waits for all.
///
/// Reports come back in task order. A failing installer never affects the
/// others.
///
/// # Errors
/// * `Error::ThreadPoolError` if the worker threads cannot be started
pub fn run_installers(tasks: &[InstallTask], working_dir: &Path) -> Result<Vec<InstallReport>> {
    let (skipped, to_run): (Vec<&InstallTask>, Vec<&InstallTask>) =
        tasks.iter().partition(|task| task.skip);

    if !skipped.is_empty() {
        println!(
            "Skipping {}. Just run yourself when you are ready.",
            install_labels(&skipped)
        );
    }

    if to_run.is_empty() {
        return Ok(tasks
            .iter()
            .map(|task| InstallReport {
                name: task.name.clone(),
                outcome: Ok(InstallStatus::Skipped),
            })
            .collect());
    }

    println!(
        "Running {} for you. If this fails try running yourself.",
        install_labels(&to_run)
    );

    let pool = rayon::ThreadPoolBuilder::new().num_threads(to_run.len()).build()?;
    let reports = pool.install(|| {
        tasks
            .par_iter()
            .map(|task| {
                let outcome = if task.skip {
                    Ok(InstallStatus::Skipped)
                } else {
                    run_task(task, working_dir)
                };
                log_outcome(&task.name, &outcome);
                InstallReport { name: task.name.clone(), outcome }
            })
            .collect::<Vec<_>>()
    });

    Ok(reports)
}

/// One line describing how every installer ended, such as
/// `npm install succeeded, bower install skipped, composer install failed.`
pub fn summarize(reports: &[InstallReport]) -> String {
    let parts: Vec<String> = reports
        .iter()
        .map(|report| {
            let state = match report.outcome {
                Ok(InstallStatus::Succeeded) => "succeeded",
                Ok(InstallStatus::Skipped) => "skipped",
                Err(_) => "failed",
            };
            format!("{} install {state}", report.name)
        })
        .collect();
    format!("{}.", parts.join(", "))
}
