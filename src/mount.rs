//! Mount component: attaches the controller's surface to the host page.
//!
//! The display effect may run more than once (every resize re-runs it), but
//! the surface is initialized and appended exactly once.

use tui_delve_core::ScreenController;
use tui_delve_term::{Page, SurfaceView};

/// Display-effect state for one anchor.
#[derive(Debug, Clone)]
pub struct SurfaceMount {
    anchor_id: String,
    surface: Option<SurfaceView>,
    attached: bool,
}

impl SurfaceMount {
    pub fn new(anchor_id: impl Into<String>) -> Self {
        Self {
            anchor_id: anchor_id.into(),
            surface: None,
            attached: false,
        }
    }

    pub fn anchor_id(&self) -> &str {
        &self.anchor_id
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Run the display effect.
    ///
    /// Initializes the controller on the first call and appends its view to
    /// the anchor. Returns whether this call attached the view. While the
    /// anchor is missing, later calls only retry the lookup; once attached
    /// they do nothing.
    pub async fn on_display(&mut self, controller: &ScreenController, page: &mut Page) -> bool {
        if self.attached {
            return false;
        }

        let view = match &self.surface {
            Some(view) => view.clone(),
            None => {
                let app = controller.initialize().await;
                let view = app.view().clone();
                self.surface = Some(view.clone());
                view
            }
        };

        let Some(anchor) = page.get_element_by_id(&self.anchor_id) else {
            return false;
        };

        self.attached = true;
        anchor.append_child(view);
        true
    }
}
