//! Rasterizer: draws a scene graph into a framebuffer.
//!
//! Pure (no I/O), so screens can be asserted on cell by cell.

use crate::fb::{Cell, FrameBuffer, Rgb};
use crate::scene::{Container, DisplayObject};

/// Clear `fb` and draw `stage` into it, children in insertion order.
pub fn rasterize(stage: &Container, fb: &mut FrameBuffer) {
    fb.clear(Cell::default());
    draw_into(stage, fb);
}

/// Draw `stage` over whatever `fb` already holds.
pub fn draw_into(stage: &Container, fb: &mut FrameBuffer) {
    stage.walk((0, 0), &mut |(ox, oy), obj| match obj {
        DisplayObject::Graphics(g) => {
            let (gx, gy) = g.position();
            for fill in g.fills() {
                fb.blend_rect(
                    ox + gx + fill.rect.x,
                    oy + gy + fill.rect.y,
                    fill.rect.width,
                    fill.rect.height,
                    Rgb::from_hex(fill.color),
                    fill.alpha,
                );
            }
        }
        DisplayObject::Text(t) => {
            let bounds = t.bounds();
            let fg = Rgb::from_hex(t.fill());
            for (row, line) in t.lines().enumerate() {
                fb.print_over(ox + bounds.x, oy + bounds.y + row as i32, line, fg);
            }
        }
        // Children are visited by `walk` itself.
        DisplayObject::Container(_) => {}
    });
}

/// A framebuffer sized to the surface, with the stage already drawn.
pub fn render_stage(stage: &Container, width: u16, height: u16) -> FrameBuffer {
    let mut fb = FrameBuffer::new(width, height);
    rasterize(stage, &mut fb);
    fb
}
