//! Render surface: a fixed-size stage plus the view that gets mounted.

use crate::fb::FrameBuffer;
use crate::raster::rasterize;
use crate::scene::Container;

/// Surface construction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplicationOptions {
    pub width: u16,
    pub height: u16,
}

/// A render surface of fixed size.
///
/// `stage` is the root container; `view` is the attachable handle a host
/// anchor displays. Both share the same scene graph.
#[derive(Debug, Clone)]
pub struct Application {
    stage: Container,
    view: SurfaceView,
}

impl Application {
    /// Construct the surface.
    ///
    /// Yields to the event loop once before returning, the way a real graphics
    /// backend suspends while its context comes up.
    pub async fn init(options: ApplicationOptions) -> Self {
        tokio::task::yield_now().await;

        let stage = Container::new();
        let view = SurfaceView {
            stage: stage.clone(),
            width: options.width,
            height: options.height,
        };
        Self { stage, view }
    }

    pub fn stage(&self) -> &Container {
        &self.stage
    }

    pub fn view(&self) -> &SurfaceView {
        &self.view
    }

    pub fn width(&self) -> u16 {
        self.view.width
    }

    pub fn height(&self) -> u16 {
        self.view.height
    }
}

/// The displayable side of an [`Application`].
#[derive(Debug, Clone)]
pub struct SurfaceView {
    stage: Container,
    width: u16,
    height: u16,
}

impl SurfaceView {
    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Whether both views show the same stage.
    pub fn same_surface(&self, other: &SurfaceView) -> bool {
        self.stage.ptr_eq(&other.stage)
    }

    /// Rasterize the stage into `fb`, resizing it to the surface.
    pub fn render_into(&self, fb: &mut FrameBuffer) {
        fb.resize(self.width, self.height);
        rasterize(&self.stage, fb);
    }

    pub fn render(&self) -> FrameBuffer {
        let mut fb = FrameBuffer::new(self.width, self.height);
        self.render_into(&mut fb);
        fb
    }

    /// Deliver a click at surface coordinates.
    ///
    /// Returns whether a click handler ran.
    pub fn click(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        // The borrow taken by hit_test is released before the handler runs.
        let handler = self.stage.hit_test(x, y);
        match handler {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::{render_button, ButtonOptions};
    use crate::scene::Text;
    use std::cell::Cell;
    use std::rc::Rc;

    #[tokio::test]
    async fn view_shares_the_stage() {
        let app = Application::init(ApplicationOptions {
            width: 10,
            height: 2,
        })
        .await;
        app.stage().add_child(Text::new("hello"));

        let fb = app.view().render();
        assert_eq!(fb.width(), 10);
        assert_eq!(fb.row_text(0), "hello     ");
    }

    #[tokio::test]
    async fn clicks_outside_the_surface_are_ignored() {
        let app = Application::init(ApplicationOptions {
            width: 20,
            height: 5,
        })
        .await;
        let fired = Rc::new(Cell::new(false));
        let f = Rc::clone(&fired);
        app.stage()
            .add_child(render_button(ButtonOptions::new("X", move || f.set(true))));

        assert!(!app.view().click(-1, 0));
        assert!(!app.view().click(0, 5));
        assert!(!fired.get());

        assert!(app.view().click(0, 0));
        assert!(fired.get());
    }
}
