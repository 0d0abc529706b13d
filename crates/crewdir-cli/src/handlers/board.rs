//! Board handler.
//!
//! Spawns the renderer thread, then runs the handler loop on the main
//! thread: consume semantic actions, drive the session (including async
//! store calls), and ship a fresh screen snapshot after every change. Idle
//! ticks re-send snapshots so notification expiry becomes visible without
//! user input.

use crate::presentation::presenters::build_board_view_model;
use crate::presentation::renderers::{BoardEvent, BoardRenderer};
use anyhow::{Result, bail};
use crewdir_runtime::{Action, DirectorySession};
use is_terminal::IsTerminal;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

pub fn handle(runtime: &tokio::runtime::Runtime, session: DirectorySession) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("the board needs an interactive terminal; use 'crewdir list' instead");
    }

    let (event_tx, event_rx) = mpsc::channel(); // handler -> renderer (snapshots)
    let (action_tx, action_rx) = mpsc::channel(); // renderer -> handler (actions)

    let renderer_handle = thread::spawn(move || BoardRenderer::run(event_rx, action_tx));

    let result = runtime.block_on(run_handler(session, event_tx, action_rx));

    match renderer_handle.join() {
        Ok(renderer_result) => renderer_result?,
        Err(e) => eprintln!("board renderer panicked: {:?}", e),
    }

    result
}

async fn run_handler(
    mut session: DirectorySession,
    tx: Sender<BoardEvent>,
    rx: Receiver<Action>,
) -> Result<()> {
    // Page-load bootstrap; a failure already posted its notification and
    // the board opens on the (empty or stale) cache.
    let _ = session.refresh().await;
    send_update(&session, &tx);

    loop {
        match rx.recv_timeout(Duration::from_millis(200)) {
            Ok(Action::Quit) => break,
            Ok(action) => {
                session.dispatch(action).await;
                send_update(&session, &tx);
            }
            Err(RecvTimeoutError::Timeout) => {
                session.tick();
                send_update(&session, &tx);
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}

fn send_update(session: &DirectorySession, tx: &Sender<BoardEvent>) {
    let screen = build_board_view_model(session);
    // Ignore errors if the renderer has quit
    let _ = tx.send(BoardEvent::Update(Box::new(screen)));
}
