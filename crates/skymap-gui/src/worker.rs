use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use skymap_core::io::image_io::{save_composite, save_frame};
use skymap_core::mosaic::{build_composite_reported, MosaicOptions};

use crate::messages::{WorkerCommand, WorkerResult};
use crate::progress::ChannelProgressReporter;

/// Spawn the background worker. Commands are processed one at a time, in order.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("skymap-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_log(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Log { message: msg.into() });
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Error { message: msg.into() });
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::Rebuild { dir, options } => {
                handle_rebuild(&dir, &options, &tx, &ctx);
            }
            WorkerCommand::SaveView { frame, path } => match save_frame(&frame, &path) {
                Ok(()) => send(&tx, &ctx, WorkerResult::ImageSaved { path }),
                Err(e) => send_error(&tx, &ctx, format!("Save failed: {e}")),
            },
            WorkerCommand::SaveMosaic { composite, path } => {
                match save_composite(&composite, &path) {
                    Ok(()) => send(&tx, &ctx, WorkerResult::ImageSaved { path }),
                    Err(e) => send_error(&tx, &ctx, format!("Save failed: {e}")),
                }
            }
        }
    }
    tracing::debug!("Worker channel closed, exiting");
}

fn handle_rebuild(
    dir: &Path,
    options: &MosaicOptions,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    send_log(tx, ctx, format!("Building mosaic from {}", dir.display()));
    let start = Instant::now();
    let reporter = ChannelProgressReporter::new(tx.clone(), ctx.clone());

    match build_composite_reported(dir, options, &reporter) {
        Ok((composite, report)) => {
            for path in &report.skipped {
                send_log(tx, ctx, format!("Skipped unreadable tile: {}", path.display()));
            }
            send(
                tx,
                ctx,
                WorkerResult::CompositeReady {
                    composite: Box::new(composite),
                    report,
                    elapsed: start.elapsed(),
                },
            );
        }
        Err(e) => send(
            tx,
            ctx,
            WorkerResult::RebuildFailed {
                message: e.to_string(),
            },
        ),
    }
}
