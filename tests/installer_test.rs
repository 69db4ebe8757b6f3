use tempfile::TempDir;
use wpmake::error::Error;
use wpmake::installer::{
    build_install_tasks, run_installers, summarize, InstallStatus, InstallTask, INSTALLERS,
};

fn shell(name: &str, script: &str) -> InstallTask {
    InstallTask::with_argv(
        name,
        vec!["sh".to_string(), "-c".to_string(), script.to_string()],
        false,
    )
}

/// Touches `own` and succeeds once `other` shows up, giving up after ~10s.
fn wait_for(own: &str, other: &str) -> String {
    format!(
        "touch {own}; i=0; while [ $i -lt 100 ]; do [ -f {other} ] && exit 0; \
         sleep 0.1; i=$((i+1)); done; exit 1"
    )
}

#[test]
fn test_build_install_tasks() {
    let tasks = build_install_tasks(false, &["bower"]);

    let names: Vec<&str> = tasks.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, INSTALLERS);
    assert_eq!(tasks[1].argv, vec!["bower", "install"]);
    assert!(!tasks[0].skip);
    assert!(tasks[1].skip);
    assert!(!tasks[2].skip);
}

#[test_log::test]
fn test_skip_install_launches_nothing() {
    let working_dir = TempDir::new().unwrap();
    let tasks: Vec<InstallTask> = build_install_tasks(true, &[])
        .into_iter()
        .map(|task| {
            // Launching this would be reported as a launch failure
            let argv = vec!["wpmake-no-such-installer".to_string()];
            InstallTask::with_argv(task.name, argv, task.skip)
        })
        .collect();

    let reports = run_installers(&tasks, working_dir.path()).unwrap();

    assert_eq!(reports.len(), INSTALLERS.len());
    assert_eq!(
        summarize(&reports),
        "npm install skipped, bower install skipped, composer install skipped."
    );
    for report in &reports {
        assert!(
            matches!(report.outcome, Ok(InstallStatus::Skipped)),
            "{} was launched",
            report.name
        );
    }
}

#[cfg(unix)]
#[test_log::test]
fn test_exit_127_is_reported_independently() {
    let working_dir = TempDir::new().unwrap();
    let tasks = vec![shell("composer", "exit 127"), shell("npm", "exit 0")];

    let reports = run_installers(&tasks, working_dir.path()).unwrap();

    assert_eq!(reports[0].name, "composer");
    match &reports[0].outcome {
        Err(Error::InstallerExit127 { installer }) => assert_eq!(installer, "composer"),
        other => panic!("Expected InstallerExit127, got {other:?}"),
    }
    assert_eq!(reports[1].name, "npm");
    assert!(matches!(reports[1].outcome, Ok(InstallStatus::Succeeded)));
}

#[cfg(unix)]
#[test_log::test]
fn test_failures_do_not_affect_siblings() {
    let working_dir = TempDir::new().unwrap();
    let tasks = vec![
        shell("npm", "exit 3"),
        InstallTask::with_argv("bower", vec!["wpmake-no-such-installer".to_string()], false),
        shell("composer", "touch installed"),
        InstallTask::with_argv("skipped", vec!["sh".to_string()], true),
    ];

    let reports = run_installers(&tasks, working_dir.path()).unwrap();

    assert!(matches!(reports[0].outcome, Err(Error::InstallerFailed { .. })));
    assert!(matches!(reports[1].outcome, Err(Error::InstallerLaunchFailure { .. })));
    assert!(matches!(reports[2].outcome, Ok(InstallStatus::Succeeded)));
    assert!(matches!(reports[3].outcome, Ok(InstallStatus::Skipped)));
    // Installers run inside the working directory
    assert!(working_dir.path().join("installed").exists());

    assert_eq!(
        summarize(&reports),
        "npm install failed, bower install failed, composer install succeeded, \
         skipped install skipped."
    );
}

#[cfg(unix)]
#[test]
fn test_installers_run_concurrently() {
    let working_dir = TempDir::new().unwrap();
    // Each installer waits for the other's marker file
    let tasks = vec![
        shell("npm", &wait_for("npm.started", "bower.started")),
        shell("bower", &wait_for("bower.started", "npm.started")),
    ];

    let reports = run_installers(&tasks, working_dir.path()).unwrap();

    for report in &reports {
        assert!(
            matches!(report.outcome, Ok(InstallStatus::Succeeded)),
            "{} did not overlap",
            report.name
        );
    }
}

#[test]
fn test_empty_command_line_is_reported() {
    let working_dir = TempDir::new().unwrap();
    let tasks = vec![InstallTask::with_argv("npm", Vec::new(), false)];

    let reports = run_installers(&tasks, working_dir.path()).unwrap();
    assert!(matches!(reports[0].outcome, Err(Error::ConfigError(_))));
}
