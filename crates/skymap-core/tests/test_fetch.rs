use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use skymap_core::config::{FetchConfig, FetchFlags};
use skymap_core::error::SkymapError;
use skymap_core::fetch::{run_fetch, spawn_fetch, FetchOutcome, FetchRequest};

fn sh_config(script: &Path) -> FetchConfig {
    FetchConfig {
        interpreter: "sh".into(),
        script: script.to_path_buf(),
        ..Default::default()
    }
}

fn write_script(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("fetch.sh");
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_args_use_script_flags() {
    let request = FetchRequest {
        ra_deg: 83.8221,
        dec_deg: -5.3911,
        date_time: "2025-10-04 11:31:02".into(),
        radius_deg: 0.3,
        pixels: 800,
        survey: Some("DSS2 Red".into()),
        output: None,
    };
    let args = request.to_args(&FetchFlags::default());
    assert_eq!(
        args,
        [
            "--ra", "83.8221", "--dec", "-5.3911", "--raio", "0.3", "--pixels", "800",
            "--data_hora", "2025-10-04 11:31:02", "--survey", "DSS2 Red",
        ]
    );
}

#[test]
fn test_args_with_output_name() {
    let request = FetchRequest {
        output: Some("m42.png".into()),
        ..Default::default()
    };
    let args = request.to_args(&FetchFlags::default());
    assert_eq!(&args[args.len() - 2..], ["--output", "m42.png"]);
    assert!(!args.contains(&"--survey".to_string()));
}

#[test]
fn test_invalid_request_rejected_before_spawn() {
    let request = FetchRequest {
        dec_deg: 123.0,
        ..Default::default()
    };
    let err = spawn_fetch(request, FetchConfig::default(), PathBuf::from("img"), |_| {})
        .unwrap_err();
    assert!(matches!(err, SkymapError::InvalidFetchRequest(_)));
}

#[cfg(unix)]
#[test]
fn test_run_fetch_success_passes_arguments() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("args.txt");
    let script = write_script(
        dir.path(),
        &format!("printf '%s\\n' \"$@\" > '{}'\n", log.display()),
    );

    let tile_dir = dir.path().join("img");
    let result = run_fetch(&FetchRequest::default(), &sh_config(&script), &tile_dir).unwrap();
    assert_eq!(result, tile_dir);

    let recorded = std::fs::read_to_string(&log).unwrap();
    let lines: Vec<&str> = recorded.lines().collect();
    assert_eq!(lines[0], "--ra");
    assert_eq!(lines[1], "10.6847");
    assert!(lines.contains(&"2025-10-04 11:31:02"));
}

#[cfg(unix)]
#[test]
fn test_run_fetch_failure_reports_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let script = write_script(dir.path(), "echo 'survey offline' >&2\nexit 3\n");

    let err = run_fetch(&FetchRequest::default(), &sh_config(&script), dir.path()).unwrap_err();
    match err {
        SkymapError::FetchFailed(reason) => assert!(reason.contains("survey offline"), "{reason}"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_run_fetch_missing_interpreter() {
    let config = FetchConfig {
        interpreter: "skymap-no-such-interpreter".into(),
        ..Default::default()
    };
    let err = run_fetch(&FetchRequest::default(), &config, Path::new("img")).unwrap_err();
    assert!(matches!(err, SkymapError::FetchFailed(_)));
}

#[cfg(unix)]
#[test]
fn test_spawn_fetch_reports_completion() {
    let dir = tempfile::tempdir().unwrap();
    let ok = write_script(dir.path(), "exit 0\n");
    let tile_dir = dir.path().join("img");

    let (tx, rx) = mpsc::channel();
    let handle = spawn_fetch(FetchRequest::default(), sh_config(&ok), tile_dir.clone(), move |o| {
        tx.send(o).unwrap();
    })
    .unwrap();

    let outcome = rx.recv_timeout(Duration::from_secs(10)).unwrap();
    handle.join().unwrap();
    assert_eq!(outcome, FetchOutcome::Completed { tile_dir });
    assert!(outcome.is_completed());
}

#[cfg(unix)]
#[test]
fn test_spawn_fetch_reports_failure() {
    let dir = tempfile::tempdir().unwrap();
    let failing = write_script(dir.path(), "exit 1\n");

    let (tx, rx) = mpsc::channel();
    spawn_fetch(FetchRequest::default(), sh_config(&failing), dir.path().into(), move |o| {
        tx.send(o).unwrap();
    })
    .unwrap();

    let outcome = rx.recv_timeout(Duration::from_secs(10)).unwrap();
    assert!(matches!(outcome, FetchOutcome::Failed { .. }));
}
