//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (screen controller, terminal rendering, demo session).
//!
//! # Surface Dimensions
//!
//! The render surface has a fixed size, measured in terminal cells:
//!
//! - **Width**: 80 columns
//! - **Height**: 30 rows
//!
//! Primary elements (title, "game over" text) are centered on the surface.
//! Secondary elements (buttons, stats) are stacked below the primary element at
//! fixed row offsets; there is no computed layout.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `START_BUTTON_OFFSET_Y` | 2 | START button below the title |
//! | `STATS_OFFSET_Y` | 3 | Stats block below "game over" |
//! | `RESTART_BUTTON_OFFSET_Y` | 5 | RESTART button below "game over" |
//!
//! # Examples
//!
//! ```
//! use tui_delve_types::{GameStats, Screen, ScreenType};
//!
//! // Only the game-over destination carries a payload.
//! let screen = Screen::GameOver {
//!     stats: Some(GameStats::new(5, 3)),
//! };
//! assert_eq!(screen.kind(), ScreenType::GameOver);
//! assert_eq!(screen.kind().as_str(), "gameOver");
//!
//! // Parse a screen name (case-insensitive)
//! assert_eq!(ScreenType::from_str("home"), Some(ScreenType::Home));
//! ```

pub mod config;

pub use config::ScreenConfig;

use std::fmt;

/// Surface width in cells (80 columns)
pub const APP_WIDTH: u16 = 80;

/// Surface height in cells (30 rows)
pub const APP_HEIGHT: u16 = 30;

/// Default modal width in cells
pub const MODAL_WIDTH: u16 = 48;

/// Default modal height in cells
pub const MODAL_HEIGHT: u16 = 12;

/// Button width in cells
pub const BUTTON_WIDTH: u16 = 16;

/// Button height in cells (label row plus one row of padding above and below)
pub const BUTTON_HEIGHT: u16 = 3;

/// Rows between the title and the top of the START button
pub const START_BUTTON_OFFSET_Y: i32 = 2;

/// Rows between the "game over" text and the center of the stats block
pub const STATS_OFFSET_Y: i32 = 3;

/// Rows between the "game over" text and the top of the RESTART button
pub const RESTART_BUTTON_OFFSET_Y: i32 = 5;

/// Full-bleed background fill behind every screen
pub const COLOR_APP_BG: u32 = 0x1b1d2a;

/// Default text fill
pub const COLOR_TEXT: u32 = 0xffffff;

/// Button face fill
pub const COLOR_BUTTON: u32 = 0x3a5fcd;

/// Modal fill, drawn at `MODAL_ALPHA`
pub const COLOR_MODAL: u32 = 0xff0000;

/// Modal opacity (0.0 = invisible, 1.0 = opaque)
pub const MODAL_ALPHA: f32 = 0.5;

/// Home screen title
pub const GAME_TITLE: &str = "DELVE";

/// Game-over screen headline
pub const GAME_OVER: &str = "GAME OVER";

/// Id of the host anchor the surface view is appended to
pub const MOUNT_ANCHOR_ID: &str = "delve-root";

/// The three screens the controller can show
///
/// - **Home**: title plus START button (initial screen)
/// - **Game**: empty container handed to the game collaborator
/// - **GameOver**: headline, optional stats, RESTART button
///
/// There is no terminal screen: every screen can be re-entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenType {
    #[default]
    Home,
    Game,
    GameOver,
}

impl ScreenType {
    /// Parse screen name from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_delve_types::ScreenType;
    ///
    /// assert_eq!(ScreenType::from_str("game"), Some(ScreenType::Game));
    /// assert_eq!(ScreenType::from_str("GAMEOVER"), Some(ScreenType::GameOver));
    /// assert_eq!(ScreenType::from_str("splash"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "home" => Some(ScreenType::Home),
            "game" => Some(ScreenType::Game),
            "gameover" => Some(ScreenType::GameOver),
            _ => None,
        }
    }

    /// Convert to camelCase string (journal format)
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenType::Home => "home",
            ScreenType::Game => "game",
            ScreenType::GameOver => "gameOver",
        }
    }
}

impl fmt::Display for ScreenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final statistics of a run, shown on the game-over screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GameStats {
    pub coins: u32,
    pub turns: u32,
}

impl GameStats {
    pub fn new(coins: u32, turns: u32) -> Self {
        Self { coins, turns }
    }

    /// Two-line summary drawn below the game-over headline
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_delve_types::GameStats;
    ///
    /// assert_eq!(GameStats::new(5, 3).summary(), "Score: 5 Coins\nTurns: 3");
    /// ```
    pub fn summary(&self) -> String {
        format!("Score: {} Coins\nTurns: {}", self.coins, self.turns)
    }
}

/// A transition request: the destination screen plus its payload
///
/// The payload is keyed by destination, so only `GameOver` can carry stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Game,
    GameOver { stats: Option<GameStats> },
}

impl Screen {
    /// The screen type this request lands on
    pub fn kind(&self) -> ScreenType {
        match self {
            Screen::Home => ScreenType::Home,
            Screen::Game => ScreenType::Game,
            Screen::GameOver { .. } => ScreenType::GameOver,
        }
    }

    /// Stats payload, if any
    pub fn stats(&self) -> Option<GameStats> {
        match self {
            Screen::GameOver { stats } => *stats,
            Screen::Home | Screen::Game => None,
        }
    }
}

impl From<ScreenType> for Screen {
    /// Payload-free request for a screen type
    fn from(kind: ScreenType) -> Self {
        match kind {
            ScreenType::Home => Screen::Home,
            ScreenType::Game => Screen::Game,
            ScreenType::GameOver => Screen::GameOver { stats: None },
        }
    }
}
