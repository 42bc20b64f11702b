//! Terminal "render surface" module.
//!
//! This is a small retained-mode rendering layer for the game's screens. Screen
//! code builds a scene graph (containers, filled rectangles, text, buttons);
//! the rasterizer turns it into a framebuffer of styled cells that the
//! terminal renderer flushes through crossterm.
//!
//! Goals:
//! - Keep screen logic testable without a terminal (assert on the scene or
//!   on the rasterized framebuffer)
//! - Give screens a fixed-size surface with centered layout, independent of
//!   the real terminal size
//! - Draw translucent overlays (modals) on top of screen content

pub mod app;
pub mod button;
pub mod fb;
pub mod page;
pub mod raster;
pub mod renderer;
pub mod scene;

pub use tui_delve_types as types;

pub use app::{Application, ApplicationOptions, SurfaceView};
pub use button::{render_button, ButtonOptions};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use page::{Anchor, Page};
pub use raster::{draw_into, rasterize, render_stage};
pub use renderer::TerminalRenderer;
pub use scene::{ClickHandler, Container, DisplayObject, Fill, Graphics, Rect, Text};
