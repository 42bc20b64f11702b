//! Screen controller: which screen is showing, and the modal layer above it.
//!
//! The controller owns three things once initialized: the render surface, the
//! screen container (cleared and rebuilt on every transition) and the modal
//! container (layered above, independent of transitions). Every operation is
//! a silent no-op until [`ScreenController::initialize`] has completed.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::journal::{Journal, JournalEvent};
use crate::term::{
    render_button, Application, ApplicationOptions, ButtonOptions, Container, Graphics, Text,
};
use crate::types::{
    GameStats, Screen, ScreenConfig, ScreenType, BUTTON_WIDTH, COLOR_MODAL, COLOR_TEXT,
    MODAL_ALPHA, RESTART_BUTTON_OFFSET_Y, START_BUTTON_OFFSET_Y, STATS_OFFSET_Y,
};

type GameStartHandler = Rc<dyn Fn()>;

/// Modal size overrides; `None` means the configured default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalOptions {
    pub width: Option<u16>,
    pub height: Option<u16>,
}

impl ModalOptions {
    pub fn sized(width: u16, height: u16) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }
}

#[derive(Default)]
struct ControllerState {
    app: Option<Application>,
    screen_container: Option<Container>,
    modal_container: Option<Container>,
    current: ScreenType,
}

#[derive(Default)]
struct Handlers {
    on_game_start: Option<GameStartHandler>,
}

struct Inner {
    state: RefCell<ControllerState>,
    handlers: RefCell<Handlers>,
    config: ScreenConfig,
    journal: Option<Journal>,
}

/// Shared handle to the screen state machine.
///
/// Clones refer to the same controller. The composition root creates one and
/// hands clones to the collaborators that need to drive or extend the screens.
#[derive(Clone)]
pub struct ScreenController {
    inner: Rc<Inner>,
}

/// Non-owning handle, held by buttons inside the controller's own scene.
#[derive(Clone)]
struct WeakController {
    inner: Weak<Inner>,
}

impl WeakController {
    fn set_current_screen(&self, screen: Screen) {
        if let Some(inner) = self.inner.upgrade() {
            ScreenController { inner }.set_current_screen(screen);
        }
    }
}

impl Default for ScreenController {
    fn default() -> Self {
        Self::new(ScreenConfig::default())
    }
}

impl ScreenController {
    pub fn new(config: ScreenConfig) -> Self {
        Self::build(config, None)
    }

    /// Controller that reports transitions and modal events to `journal`.
    pub fn with_journal(config: ScreenConfig, journal: Journal) -> Self {
        Self::build(config, Some(journal))
    }

    fn build(config: ScreenConfig, journal: Option<Journal>) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(ControllerState::default()),
                handlers: RefCell::new(Handlers::default()),
                config,
                journal,
            }),
        }
    }

    fn downgrade(&self) -> WeakController {
        WeakController {
            inner: Rc::downgrade(&self.inner),
        }
    }

    fn record(&self, event: JournalEvent) {
        if let Some(journal) = &self.inner.journal {
            journal.record(event);
        }
    }

    pub fn config(&self) -> &ScreenConfig {
        &self.inner.config
    }

    /// Build the surface and its layers, then show the home screen.
    ///
    /// Call at most once: a second call builds a fresh surface and replaces
    /// every reference held so far.
    pub async fn initialize(&self) -> Application {
        let config = &self.inner.config;
        let app = Application::init(ApplicationOptions {
            width: config.width,
            height: config.height,
        })
        .await;

        // Z-order: background, screens, modals.
        app.stage().add_child(
            Graphics::new()
                .begin_fill(config.background, 1.0)
                .draw_rect(0, 0, app.width(), app.height()),
        );
        let screen_container = Container::new();
        app.stage().add_child(screen_container.clone());
        let modal_container = Container::new();
        app.stage().add_child(modal_container.clone());

        {
            let mut state = self.inner.state.borrow_mut();
            state.app = Some(app.clone());
            state.screen_container = Some(screen_container);
            state.modal_container = Some(modal_container);
        }

        self.record(JournalEvent::Initialized {
            width: app.width(),
            height: app.height(),
        });
        self.set_current_screen(Screen::Home);
        app
    }

    /// Switch screens and render the destination.
    ///
    /// The screen container is emptied first; an open modal stays open.
    pub fn set_current_screen(&self, screen: Screen) {
        self.inner.state.borrow_mut().current = screen.kind();
        self.record(JournalEvent::screen(screen.kind(), screen.stats()));

        match screen {
            Screen::Home => self.render_home_screen(),
            Screen::Game => self.render_game_screen(),
            Screen::GameOver { stats } => self.render_game_over_screen(stats),
        }
    }

    pub fn current_screen(&self) -> ScreenType {
        self.inner.state.borrow().current
    }

    /// Cleared screen container plus the surface center, if initialized.
    fn fresh_screen(&self) -> Option<(Container, i32, i32)> {
        let container = self.inner.state.borrow().screen_container.clone()?;
        container.remove_children();
        let cx = (self.inner.config.width / 2) as i32;
        let cy = (self.inner.config.height / 2) as i32;
        Some((container, cx, cy))
    }

    fn add_button(&self, container: &Container, label: &str, x: i32, y: i32, target: Screen) {
        let weak = self.downgrade();
        let button = render_button(ButtonOptions::new(label, move || {
            weak.set_current_screen(target)
        }));
        button.set_position(x, y);
        container.add_child(button);
    }

    fn render_home_screen(&self) {
        let Some((container, cx, cy)) = self.fresh_screen() else {
            return;
        };

        container.add_child(
            Text::new(self.inner.config.title.as_str())
                .with_fill(COLOR_TEXT)
                .with_anchor(0.5)
                .with_position(cx, cy),
        );

        let bx = cx - (BUTTON_WIDTH / 2) as i32;
        self.add_button(&container, "START", bx, cy + START_BUTTON_OFFSET_Y, Screen::Game);
    }

    fn render_game_screen(&self) {
        if self.fresh_screen().is_none() {
            return;
        }

        // Clone out so the handler may call back into the controller.
        let handler = self.inner.handlers.borrow().on_game_start.clone();
        if let Some(handler) = handler {
            handler();
        }
    }

    fn render_game_over_screen(&self, stats: Option<GameStats>) {
        let Some((container, cx, cy)) = self.fresh_screen() else {
            return;
        };

        container.add_child(
            Text::new(self.inner.config.game_over.as_str())
                .with_fill(COLOR_TEXT)
                .with_anchor(0.5)
                .with_position(cx, cy),
        );

        if let Some(stats) = stats {
            container.add_child(
                Text::new(stats.summary())
                    .with_fill(COLOR_TEXT)
                    .with_anchor(0.5)
                    .with_position(cx, cy + STATS_OFFSET_Y),
            );
        }

        let bx = cx - (BUTTON_WIDTH / 2) as i32;
        self.add_button(&container, "RESTART", bx, cy + RESTART_BUTTON_OFFSET_Y, Screen::Game);
    }

    /// Replace the modal layer with a translucent box centered on the surface.
    ///
    /// Returns the modal's root container so callers can add content to it, or
    /// `None` before initialization.
    pub fn render_modal(&self, options: ModalOptions) -> Option<Container> {
        let modal_container = self.inner.state.borrow().modal_container.clone()?;
        modal_container.remove_children();

        let config = &self.inner.config;
        let width = options.width.unwrap_or(config.modal_width);
        let height = options.height.unwrap_or(config.modal_height);

        let modal = Container::new();
        modal.add_child(
            Graphics::new()
                .begin_fill(COLOR_MODAL, MODAL_ALPHA)
                .draw_rect(0, 0, width, height),
        );
        modal.set_position(
            (config.width as i32 - width as i32) / 2,
            (config.height as i32 - height as i32) / 2,
        );
        modal_container.add_child(modal.clone());

        self.record(JournalEvent::ModalOpened { width, height });
        Some(modal)
    }

    /// Empty the modal layer.
    pub fn close_modal(&self) {
        let Some(modal_container) = self.inner.state.borrow().modal_container.clone() else {
            return;
        };
        modal_container.remove_children();
        self.record(JournalEvent::ModalClosed);
    }

    /// Register the callback run every time the game screen is entered.
    ///
    /// There is a single slot: the last registration wins and earlier
    /// callbacks are dropped.
    pub fn on_game_start(&self, callback: impl Fn() + 'static) {
        self.inner.handlers.borrow_mut().on_game_start = Some(Rc::new(callback));
    }

    /// The render surface, once initialized.
    pub fn app(&self) -> Option<Application> {
        self.inner.state.borrow().app.clone()
    }

    /// The screen container, once initialized.
    pub fn container(&self) -> Option<Container> {
        self.inner.state.borrow().screen_container.clone()
    }

    /// The modal layer, once initialized.
    pub fn modal_container(&self) -> Option<Container> {
        self.inner.state.borrow().modal_container.clone()
    }
}
