//! TUI Delve (workspace facade crate).
//!
//! Re-exports the member crates under short names and hosts the two pieces
//! that sit on top of them: the mount component that puts the surface on the
//! page, and the demo run that plays the game screen.

pub mod mount;
pub mod session;

pub use tui_delve_core as core;
pub use tui_delve_input as input;
pub use tui_delve_term as term;
pub use tui_delve_types as types;

pub use mount::SurfaceMount;
pub use session::RunSession;
