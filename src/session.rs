//! Demo run: the smallest game that exercises every screen.
//!
//! Each `DIG` advances one turn and odd turns turn up a coin. `FLEE` ends the
//! run on the game-over screen with the totals; `PAUSE` opens the default
//! modal until `RESUME` is clicked.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use tui_delve_core::{ModalOptions, ScreenController};
use tui_delve_term::{render_button, ButtonOptions, Container, Text};
use tui_delve_types::{GameStats, Screen, BUTTON_HEIGHT, BUTTON_WIDTH};

/// Gap between the three action buttons, in cells.
const BUTTON_GAP: i32 = 2;

/// Counters for the current run.
#[derive(Default)]
pub struct RunSession {
    controller: Option<ScreenController>,
    coins: Cell<u32>,
    turns: Cell<u32>,
}

impl RunSession {
    /// Subscribe a new session to the controller's game-start event.
    pub fn attach(controller: &ScreenController) -> Rc<RunSession> {
        let session = Rc::new(RunSession {
            controller: Some(controller.clone()),
            ..Default::default()
        });

        let weak = Rc::downgrade(&session);
        controller.on_game_start(move || {
            if let Some(session) = weak.upgrade() {
                session.start();
            }
        });
        session
    }

    pub fn stats(&self) -> GameStats {
        GameStats::new(self.coins.get(), self.turns.get())
    }

    fn start(self: &Rc<Self>) {
        self.coins.set(0);
        self.turns.set(0);
        self.draw();
    }

    fn dig(self: &Rc<Self>) {
        let turn = self.turns.get() + 1;
        self.turns.set(turn);
        if turn % 2 == 1 {
            self.coins.set(self.coins.get() + 1);
        }
        self.draw();
    }

    fn flee(&self) {
        if let Some(controller) = &self.controller {
            controller.set_current_screen(Screen::GameOver {
                stats: Some(self.stats()),
            });
        }
    }

    fn resume(&self) {
        if let Some(controller) = &self.controller {
            controller.close_modal();
        }
    }

    fn pause(self: &Rc<Self>) {
        let Some(controller) = &self.controller else {
            return;
        };
        let Some(modal) = controller.render_modal(ModalOptions::default()) else {
            return;
        };
        let Some(bounds) = modal.bounds() else {
            return;
        };

        let cx = (bounds.width / 2) as i32;
        modal.add_child(Text::new("PAUSED").with_anchor(0.5).with_position(cx, 2));

        let session = Rc::downgrade(self);
        let resume = render_button(ButtonOptions::new("RESUME", move || {
            if let Some(session) = session.upgrade() {
                session.resume();
            }
        }));
        resume.set_position(
            cx - (BUTTON_WIDTH / 2) as i32,
            bounds.height as i32 - BUTTON_HEIGHT as i32 - 1,
        );
        modal.add_child(resume);
    }

    /// Redraw the run into the screen container.
    fn draw(self: &Rc<Self>) {
        let Some(container) = self.controller.as_ref().and_then(ScreenController::container)
        else {
            return;
        };
        container.remove_children();

        let config = self.controller.as_ref().map(|c| c.config().clone()).unwrap_or_default();
        let cx = (config.width / 2) as i32;
        let cy = (config.height / 2) as i32;

        container.add_child(
            Text::new(format!(
                "Turn {}   Coins {}",
                self.turns.get(),
                self.coins.get()
            ))
            .with_anchor(0.5)
            .with_position(cx, cy - 2),
        );

        let step = BUTTON_WIDTH as i32 + BUTTON_GAP;
        let left = cx - (BUTTON_WIDTH / 2) as i32 - step;
        add_action(&container, "DIG", left, cy, Rc::downgrade(self), |s| s.dig());
        add_action(&container, "PAUSE", left + step, cy, Rc::downgrade(self), |s| s.pause());
        add_action(&container, "FLEE", left + 2 * step, cy, Rc::downgrade(self), |s| s.flee());
    }
}

fn add_action(
    container: &Container,
    label: &str,
    x: i32,
    y: i32,
    session: Weak<RunSession>,
    action: fn(&Rc<RunSession>),
) {
    let button = render_button(ButtonOptions::new(label, move || {
        if let Some(session) = session.upgrade() {
            action(&session);
        }
    }));
    button.set_position(x, y);
    container.add_child(button);
}
