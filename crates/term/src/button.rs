//! Button helper: a clickable labelled box.

use std::rc::Rc;

use crate::scene::{ClickHandler, Container, Graphics, Rect, Text};
use crate::types::{BUTTON_HEIGHT, BUTTON_WIDTH, COLOR_BUTTON, COLOR_TEXT};

/// Label and click callback for [`render_button`].
pub struct ButtonOptions {
    pub text: String,
    pub on_click: ClickHandler,
}

impl ButtonOptions {
    pub fn new(text: impl Into<String>, on_click: impl Fn() + 'static) -> Self {
        Self {
            text: text.into(),
            on_click: Rc::new(on_click),
        }
    }
}

/// Build a `BUTTON_WIDTH` x `BUTTON_HEIGHT` button at the origin.
///
/// Callers position it with [`Container::set_position`] afterwards.
pub fn render_button(options: ButtonOptions) -> Container {
    let button = Container::new();

    button.add_child(
        Graphics::new()
            .begin_fill(COLOR_BUTTON, 1.0)
            .draw_rect(0, 0, BUTTON_WIDTH, BUTTON_HEIGHT),
    );
    button.add_child(
        Text::new(options.text)
            .with_fill(COLOR_TEXT)
            .with_anchor(0.5)
            .with_position((BUTTON_WIDTH / 2) as i32, (BUTTON_HEIGHT / 2) as i32),
    );
    button.set_on_click(Rect::new(0, 0, BUTTON_WIDTH, BUTTON_HEIGHT), options.on_click);

    button
}
