//! Host page: the named anchors a surface view can be mounted into.

use crate::app::SurfaceView;
use crate::fb::FrameBuffer;

/// A mount target identified by id.
#[derive(Debug, Clone)]
pub struct Anchor {
    id: String,
    views: Vec<SurfaceView>,
}

impl Anchor {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            views: Vec::new(),
        }
    }

    pub fn append_child(&mut self, view: SurfaceView) {
        self.views.push(view);
    }

    pub fn views(&self) -> &[SurfaceView] {
        &self.views
    }
}

/// Host document: owns the anchors and composes their views on screen.
///
/// Every attached view is drawn centered in the terminal framebuffer.
#[derive(Debug, Clone, Default)]
pub struct Page {
    anchors: Vec<Anchor>,
    scratch: Option<FrameBuffer>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor(mut self, id: impl Into<String>) -> Self {
        self.anchors.push(Anchor::new(id));
        self
    }

    pub fn get_element_by_id(&mut self, id: &str) -> Option<&mut Anchor> {
        self.anchors.iter_mut().find(|a| a.id == id)
    }

    pub fn anchor(&self, id: &str) -> Option<&Anchor> {
        self.anchors.iter().find(|a| a.id == id)
    }

    fn views(&self) -> impl Iterator<Item = &SurfaceView> {
        self.anchors.iter().flat_map(|a| a.views.iter())
    }

    /// Top-left of `view` when centered in a `width` x `height` screen.
    fn origin(view: &SurfaceView, width: u16, height: u16) -> (i32, i32) {
        let x = (width as i32 - view.width() as i32) / 2;
        let y = (height as i32 - view.height() as i32) / 2;
        (x.max(0), y.max(0))
    }

    /// Compose every attached view into `fb`.
    pub fn render_into(&mut self, fb: &mut FrameBuffer) {
        fb.clear(Default::default());
        let mut scratch = self.scratch.take().unwrap_or_else(|| FrameBuffer::new(0, 0));
        for view in self.views() {
            view.render_into(&mut scratch);
            let (x, y) = Self::origin(view, fb.width(), fb.height());
            fb.blit(&scratch, x, y);
        }
        self.scratch = Some(scratch);
    }

    /// Route a terminal click to the view under it.
    ///
    /// Returns whether a click handler ran.
    pub fn click(&self, column: u16, row: u16, screen: (u16, u16)) -> bool {
        // Topmost view first.
        let views: Vec<SurfaceView> = self.views().cloned().collect();
        for view in views.iter().rev() {
            let (x, y) = Self::origin(view, screen.0, screen.1);
            let (vx, vy) = (column as i32 - x, row as i32 - y);
            if vx < 0 || vy < 0 || vx >= view.width() as i32 || vy >= view.height() as i32 {
                continue;
            }
            return view.click(vx, vy);
        }
        false
    }
}
