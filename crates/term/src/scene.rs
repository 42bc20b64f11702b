//! Retained scene graph.
//!
//! A `Container` is a shared handle onto an ordered list of children. The
//! screen controller keeps handles to its containers and the collaborators it
//! hands them to mutate the same nodes, so every mutation is visible on the
//! next rasterization. Everything here is single-threaded (`Rc`/`RefCell`):
//! the whole UI runs on one event loop.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::types::COLOR_TEXT;

/// Click callback attached to an interactive container.
pub type ClickHandler = Rc<dyn Fn()>;

/// Axis-aligned rectangle in surface cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x
            && y >= self.y
            && x < self.x + self.width as i32
            && y < self.y + self.height as i32
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Smallest rectangle covering both.
    pub fn union(self, other: Rect) -> Self {
        let x0 = self.x.min(other.x);
        let y0 = self.y.min(other.y);
        let x1 = (self.x + self.width as i32).max(other.x + other.width as i32);
        let y1 = (self.y + self.height as i32).max(other.y + other.height as i32);
        Self {
            x: x0,
            y: y0,
            width: (x1 - x0) as u16,
            height: (y1 - y0) as u16,
        }
    }
}

/// One filled rectangle inside a `Graphics` object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    pub rect: Rect,
    pub color: u32,
    pub alpha: f32,
}

/// Vector-ish shape list: a sequence of filled rectangles.
///
/// ```
/// use tui_delve_term::Graphics;
///
/// let g = Graphics::new().begin_fill(0xff0000, 0.5).draw_rect(0, 0, 10, 4);
/// assert_eq!(g.fills().len(), 1);
/// assert_eq!(g.bounds().unwrap().width, 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Graphics {
    x: i32,
    y: i32,
    fill: (u32, f32),
    fills: Vec<Fill>,
}

impl Default for Graphics {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            fill: (0x000000, 1.0),
            fills: Vec::new(),
        }
    }
}

impl Graphics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fill used by subsequent `draw_rect` calls.
    pub fn begin_fill(mut self, color: u32, alpha: f32) -> Self {
        self.fill = (color, alpha);
        self
    }

    pub fn draw_rect(mut self, x: i32, y: i32, width: u16, height: u16) -> Self {
        let (color, alpha) = self.fill;
        self.fills.push(Fill {
            rect: Rect::new(x, y, width, height),
            color,
            alpha,
        });
        self
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.set_position(x, y);
        self
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn fills(&self) -> &[Fill] {
        &self.fills
    }

    /// Local bounds (relative to the parent), if anything was drawn.
    pub fn bounds(&self) -> Option<Rect> {
        self.fills
            .iter()
            .map(|f| f.rect.offset(self.x, self.y))
            .reduce(Rect::union)
    }
}

/// Text label.
///
/// The anchor picks which point of the text block sits on the position:
/// `(0.0, 0.0)` is the top-left corner, `(0.5, 0.5)` the center.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    content: String,
    fill: u32,
    anchor: (f32, f32),
    x: i32,
    y: i32,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            fill: COLOR_TEXT,
            anchor: (0.0, 0.0),
            x: 0,
            y: 0,
        }
    }

    pub fn with_fill(mut self, fill: u32) -> Self {
        self.fill = fill;
        self
    }

    /// Same anchor on both axes.
    pub fn with_anchor(mut self, anchor: f32) -> Self {
        self.anchor = (anchor, anchor);
        self
    }

    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.set_position(x, y);
        self
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn fill(&self) -> u32 {
        self.fill
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n')
    }

    /// Width and height of the text block in cells.
    pub fn size(&self) -> (u16, u16) {
        let width = self.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        let height = self.lines().count();
        (width as u16, height as u16)
    }

    /// Local bounds (relative to the parent) after applying the anchor.
    pub fn bounds(&self) -> Rect {
        let (w, h) = self.size();
        let left = self.x - (w as f32 * self.anchor.0) as i32;
        let top = self.y - (h as f32 * self.anchor.1) as i32;
        Rect::new(left, top, w, h)
    }
}

/// A node in the scene graph.
#[derive(Clone)]
pub enum DisplayObject {
    Container(Container),
    Graphics(Graphics),
    Text(Text),
}

impl DisplayObject {
    fn bounds(&self) -> Option<Rect> {
        match self {
            DisplayObject::Container(c) => c.bounds(),
            DisplayObject::Graphics(g) => g.bounds(),
            DisplayObject::Text(t) => Some(t.bounds()),
        }
    }
}

impl fmt::Debug for DisplayObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayObject::Container(c) => fmt::Debug::fmt(c, f),
            DisplayObject::Graphics(g) => fmt::Debug::fmt(g, f),
            DisplayObject::Text(t) => fmt::Debug::fmt(t, f),
        }
    }
}

impl From<Container> for DisplayObject {
    fn from(value: Container) -> Self {
        DisplayObject::Container(value)
    }
}

impl From<Graphics> for DisplayObject {
    fn from(value: Graphics) -> Self {
        DisplayObject::Graphics(value)
    }
}

impl From<Text> for DisplayObject {
    fn from(value: Text) -> Self {
        DisplayObject::Text(value)
    }
}

#[derive(Default)]
struct ContainerData {
    x: i32,
    y: i32,
    children: Vec<DisplayObject>,
    on_click: Option<ClickHandler>,
    hit_area: Option<Rect>,
}

/// Shared handle onto a group of display objects.
///
/// Cloning the handle does not copy the children: both clones see the same
/// node.
#[derive(Clone, Default)]
pub struct Container {
    inner: Rc<RefCell<ContainerData>>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether both handles point at the same node.
    pub fn ptr_eq(&self, other: &Container) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn set_position(&self, x: i32, y: i32) {
        let mut data = self.inner.borrow_mut();
        data.x = x;
        data.y = y;
    }

    pub fn position(&self) -> (i32, i32) {
        let data = self.inner.borrow();
        (data.x, data.y)
    }

    pub fn add_child(&self, child: impl Into<DisplayObject>) {
        self.inner.borrow_mut().children.push(child.into());
    }

    /// Drop every child.
    pub fn remove_children(&self) {
        self.inner.borrow_mut().children.clear();
    }

    /// Snapshot of the direct children (handles, not deep copies).
    pub fn children(&self) -> Vec<DisplayObject> {
        self.inner.borrow().children.clone()
    }

    pub fn child_count(&self) -> usize {
        self.inner.borrow().children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.child_count() == 0
    }

    /// Make this container clickable within `hit_area` (local coordinates).
    pub fn set_on_click(&self, hit_area: Rect, on_click: ClickHandler) {
        let mut data = self.inner.borrow_mut();
        data.hit_area = Some(hit_area);
        data.on_click = Some(on_click);
    }

    pub fn is_interactive(&self) -> bool {
        self.inner.borrow().on_click.is_some()
    }

    /// Bounds in the parent's coordinate space, if anything is drawn.
    pub fn bounds(&self) -> Option<Rect> {
        let data = self.inner.borrow();
        let from_children = data
            .children
            .iter()
            .filter_map(DisplayObject::bounds)
            .reduce(Rect::union);
        let local = match (from_children, data.hit_area) {
            (Some(a), Some(b)) => Some(a.union(b)),
            (a, b) => a.or(b),
        };
        local.map(|r| r.offset(data.x, data.y))
    }

    /// Every text content in the subtree, in draw order.
    pub fn texts(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_texts(&mut out);
        out
    }

    fn collect_texts(&self, out: &mut Vec<String>) {
        for child in self.inner.borrow().children.iter() {
            match child {
                DisplayObject::Container(c) => c.collect_texts(out),
                DisplayObject::Text(t) => out.push(t.content().to_string()),
                DisplayObject::Graphics(_) => {}
            }
        }
    }

    /// Find the topmost click handler under (`x`, `y`), given in the parent's
    /// coordinate space.
    ///
    /// The handler is cloned out so no borrow is held when the caller runs it.
    pub fn hit_test(&self, x: i32, y: i32) -> Option<ClickHandler> {
        let data = self.inner.borrow();
        let lx = x - data.x;
        let ly = y - data.y;

        // Later children draw on top, so they get the first look.
        for child in data.children.iter().rev() {
            if let DisplayObject::Container(c) = child {
                if let Some(handler) = c.hit_test(lx, ly) {
                    return Some(handler);
                }
            }
        }

        match (&data.on_click, data.hit_area) {
            (Some(handler), Some(area)) if area.contains(lx, ly) => Some(Rc::clone(handler)),
            _ => None,
        }
    }

    /// Visit the subtree in draw order with absolute offsets.
    pub fn walk(&self, origin: (i32, i32), f: &mut dyn FnMut((i32, i32), &DisplayObject)) {
        let data = self.inner.borrow();
        let base = (origin.0 + data.x, origin.1 + data.y);
        for child in data.children.iter() {
            f(base, child);
            if let DisplayObject::Container(c) = child {
                c.walk(base, f);
            }
        }
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.inner.borrow();
        f.debug_struct("Container")
            .field("x", &data.x)
            .field("y", &data.y)
            .field("interactive", &data.on_click.is_some())
            .field("children", &data.children)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn centered_text_bounds() {
        let t = Text::new("GAME OVER").with_anchor(0.5).with_position(40, 15);
        assert_eq!(t.bounds(), Rect::new(36, 15, 9, 1));

        let two = Text::new("ab\nlonger").with_anchor(0.5).with_position(10, 10);
        assert_eq!(two.size(), (6, 2));
        assert_eq!(two.bounds(), Rect::new(7, 9, 6, 2));
    }

    #[test]
    fn clones_share_children() {
        let a = Container::new();
        let b = a.clone();
        b.add_child(Text::new("x"));
        assert_eq!(a.child_count(), 1);
        assert!(a.ptr_eq(&b));

        a.remove_children();
        assert!(b.is_empty());
    }

    #[test]
    fn bounds_include_position() {
        let c = Container::new();
        c.add_child(Graphics::new().draw_rect(0, 0, 4, 2));
        c.set_position(10, 5);
        assert_eq!(c.bounds(), Some(Rect::new(10, 5, 4, 2)));
        assert_eq!(Container::new().bounds(), None);
    }

    #[test]
    fn hit_test_prefers_topmost_and_respects_offsets() {
        let hits = Rc::new(Cell::new(0u32));

        let root = Container::new();
        root.set_position(2, 1);

        let lower = Container::new();
        let h = Rc::clone(&hits);
        lower.set_on_click(Rect::new(0, 0, 10, 10), Rc::new(move || h.set(h.get() + 1)));
        root.add_child(lower);

        let upper = Container::new();
        upper.set_position(5, 5);
        let h = Rc::clone(&hits);
        upper.set_on_click(Rect::new(0, 0, 2, 2), Rc::new(move || h.set(h.get() + 100)));
        root.add_child(upper);

        // Inside the upper button: (2+5, 1+5).
        (root.hit_test(7, 6).expect("upper hit"))();
        assert_eq!(hits.get(), 100);

        // Only the lower one covers (2, 1).
        (root.hit_test(2, 1).expect("lower hit"))();
        assert_eq!(hits.get(), 101);

        assert!(root.hit_test(0, 0).is_none());
    }

    #[test]
    fn handler_may_clear_its_own_container() {
        let root = Container::new();
        let button = Container::new();
        let r = root.clone();
        button.set_on_click(Rect::new(0, 0, 1, 1), Rc::new(move || r.remove_children()));
        root.add_child(button);

        let handler = root.hit_test(0, 0).expect("hit");
        handler();
        assert!(root.is_empty());
    }

    #[test]
    fn texts_are_collected_recursively() {
        let root = Container::new();
        root.add_child(Text::new("title"));
        let nested = Container::new();
        nested.add_child(Graphics::new().draw_rect(0, 0, 1, 1));
        nested.add_child(Text::new("label"));
        root.add_child(nested);
        assert_eq!(root.texts(), vec!["title".to_string(), "label".to_string()]);
    }
}
