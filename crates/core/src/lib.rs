//! Screen state machine - the presentation core of the game shell
//!
//! This crate decides which screen is on the surface and owns the modal layer
//! drawn above it. It knows nothing about game rules: the game collaborator
//! subscribes to [`ScreenController::on_game_start`] and fills the screen
//! container itself.
//!
//! # Screens
//!
//! | Screen | Content | Leaves via |
//! |--------|---------|------------|
//! | `home` | centered title, START button | START → `game` |
//! | `game` | empty; populated by the game-start callback | collaborator → `gameOver` |
//! | `gameOver` | headline, optional stats, RESTART button | RESTART → `game` |
//!
//! `home` is entered automatically at the end of initialization. No screen is
//! terminal.
//!
//! # Layers
//!
//! The surface stage holds, bottom to top: a full-bleed background fill, the
//! screen container, and the modal container. Switching screens never touches
//! the modal container, and opening a modal never touches the screen.
//!
//! # Example
//!
//! ```
//! use tui_delve_core::{ModalOptions, ScreenController};
//! use tui_delve_core::types::{GameStats, Screen, ScreenType};
//!
//! # tokio_test_block_on(async {
//! let controller = ScreenController::default();
//! controller.initialize().await;
//! assert_eq!(controller.current_screen(), ScreenType::Home);
//!
//! controller.set_current_screen(Screen::GameOver {
//!     stats: Some(GameStats::new(5, 3)),
//! });
//! assert!(controller.container().unwrap().texts().contains(&"Score: 5 Coins\nTurns: 3".to_string()));
//!
//! let modal = controller.render_modal(ModalOptions::default()).unwrap();
//! assert_eq!(modal.position(), (16, 9));
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

pub mod controller;
pub mod journal;

pub use tui_delve_term as term;
pub use tui_delve_types as types;

pub use controller::{ModalOptions, ScreenController};
pub use journal::{Journal, JournalEvent, JournalRecord, StatsRecord};
