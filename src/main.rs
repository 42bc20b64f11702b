//! Terminal runner (default binary).
//!
//! Builds the screen controller, mounts its surface into the terminal page and
//! forwards clicks to it. Uses crossterm for input and the framebuffer
//! renderer for output.

use std::time::Duration;

use anyhow::Result;
use crossterm::event;

use tui_delve::core::{Journal, ScreenController};
use tui_delve::input::{map_event, ShellInput};
use tui_delve::term::{FrameBuffer, Page, TerminalRenderer};
use tui_delve::types::{ScreenConfig, MOUNT_ANCHOR_ID};
use tui_delve::{RunSession, SurfaceMount};

/// Input poll timeout; also bounds how long the journal waits to drain.
const POLL_MS: u64 = 50;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = ScreenConfig::from_env();
    let (controller, journal_task) = match config.log_path.clone() {
        Some(path) => {
            let (journal, task) = Journal::spawn(path);
            (ScreenController::with_journal(config, journal), Some(task))
        }
        None => (ScreenController::new(config), None),
    };
    let session = RunSession::attach(&controller);

    let mut page = Page::new().with_anchor(MOUNT_ANCHOR_ID);
    let mut mount = SurfaceMount::new(MOUNT_ANCHOR_ID);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &controller, &mut page, &mut mount).await;

    // Always try to restore terminal state.
    let _ = term.exit();

    // The journal task ends once the last controller handle is gone.
    drop(session);
    drop(controller);
    drop(page);
    if let Some(task) = journal_task {
        let _ = task.await;
    }
    result
}

async fn run(
    term: &mut TerminalRenderer,
    controller: &ScreenController,
    page: &mut Page,
    mount: &mut SurfaceMount,
) -> Result<()> {
    mount.on_display(controller, page).await;

    let mut fb = FrameBuffer::new(0, 0);
    let mut screen = crossterm::terminal::size().unwrap_or((80, 24));

    loop {
        fb.resize(screen.0, screen.1);
        page.render_into(&mut fb);
        term.draw_swap(&mut fb)?;

        if event::poll(Duration::from_millis(POLL_MS))? {
            match map_event(&event::read()?) {
                Some(ShellInput::Quit) => return Ok(()),
                Some(ShellInput::Click { column, row }) => {
                    page.click(column, row, screen);
                }
                Some(ShellInput::Resize { width, height }) => {
                    screen = (width, height);
                    term.invalidate();
                    // The effect re-runs on every re-layout; the mount guard keeps it idempotent.
                    mount.on_display(controller, page).await;
                }
                None => {}
            }
        }

        // Single-threaded runtime: give the journal writer a turn.
        tokio::task::yield_now().await;
    }
}
