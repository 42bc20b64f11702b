//! Integration tests for the screen state machine as seen through the surface.

use std::cell::Cell;
use std::rc::Rc;

use tui_delve::core::{ModalOptions, ScreenController};
use tui_delve::term::{Application, FrameBuffer, Page};
use tui_delve::types::{
    GameStats, Screen, ScreenType, APP_HEIGHT, APP_WIDTH, BUTTON_WIDTH, GAME_OVER, GAME_TITLE,
    MODAL_HEIGHT, MODAL_WIDTH, RESTART_BUTTON_OFFSET_Y, START_BUTTON_OFFSET_Y,
};

fn block_on<F: std::future::Future>(f: F) -> F::Output {
    tokio_test::block_on(f)
}

fn ready() -> (ScreenController, Application) {
    let controller = ScreenController::default();
    let app = block_on(controller.initialize());
    (controller, app)
}

fn expected_texts(screen: Screen) -> Vec<String> {
    match screen {
        Screen::Home => vec![GAME_TITLE.to_string(), "START".to_string()],
        Screen::Game => vec![],
        Screen::GameOver { stats } => {
            let mut v = vec![GAME_OVER.to_string()];
            if let Some(stats) = stats {
                v.push(stats.summary());
            }
            v.push("RESTART".to_string());
            v
        }
    }
}

fn screen_contains(fb: &FrameBuffer, needle: &str) -> bool {
    (0..fb.height()).any(|y| fb.row_text(y).contains(needle))
}

#[test]
fn only_the_latest_screen_is_ever_in_the_container() {
    let choices = [
        Screen::Home,
        Screen::Game,
        Screen::GameOver { stats: None },
        Screen::GameOver {
            stats: Some(GameStats::new(7, 11)),
        },
    ];

    // Every sequence of three transitions.
    for a in choices {
        for b in choices {
            for c in choices {
                let (controller, _app) = ready();
                for screen in [a, b, c] {
                    controller.set_current_screen(screen);
                }
                assert_eq!(controller.current_screen(), c.kind());
                assert_eq!(
                    controller.container().unwrap().texts(),
                    expected_texts(c),
                    "after {a:?} -> {b:?} -> {c:?}"
                );
            }
        }
    }
}

#[test]
fn nothing_happens_before_initialize() {
    let controller = ScreenController::default();
    controller.set_current_screen(Screen::Home);
    controller.set_current_screen(Screen::GameOver { stats: None });
    assert!(controller.render_modal(ModalOptions::sized(4, 4)).is_none());
    controller.close_modal();
    assert!(controller.app().is_none());
    assert!(controller.container().is_none());
}

#[test]
fn home_screen_is_drawn_on_the_surface() {
    let (_controller, app) = ready();
    let fb = app.view().render();

    let cy = APP_HEIGHT / 2;
    let title_row = fb.row_text(cy);
    let title_x = title_row.find(GAME_TITLE).expect("title on the center row");
    assert_eq!(title_x, (APP_WIDTH / 2) as usize - GAME_TITLE.len() / 2);

    // Label row of the START button is the middle of its three rows.
    let label_row = fb.row_text(cy + START_BUTTON_OFFSET_Y as u16 + 1);
    assert!(label_row.contains("START"));
}

#[test]
fn game_over_shows_stats_lines() {
    let (controller, app) = ready();
    controller.set_current_screen(Screen::GameOver {
        stats: Some(GameStats::new(5, 3)),
    });

    let fb = app.view().render();
    assert!(screen_contains(&fb, GAME_OVER));
    assert!(screen_contains(&fb, "Score: 5 Coins"));
    assert!(screen_contains(&fb, "Turns: 3"));
    assert!(screen_contains(&fb, "RESTART"));

    controller.set_current_screen(Screen::GameOver { stats: None });
    let fb = app.view().render();
    assert!(screen_contains(&fb, GAME_OVER));
    assert!(!screen_contains(&fb, "Score:"));
}

#[test]
fn clicking_start_then_restart_through_the_view() {
    let (controller, app) = ready();
    let starts = Rc::new(Cell::new(0));
    let s = Rc::clone(&starts);
    controller.on_game_start(move || s.set(s.get() + 1));

    let cx = (APP_WIDTH / 2) as i32;
    let cy = (APP_HEIGHT / 2) as i32;
    let button_x = cx - (BUTTON_WIDTH / 2) as i32;

    assert!(app.view().click(button_x, cy + START_BUTTON_OFFSET_Y));
    assert_eq!(controller.current_screen(), ScreenType::Game);
    assert_eq!(starts.get(), 1);

    // The START button is gone with the home screen.
    assert!(!app.view().click(button_x, cy + START_BUTTON_OFFSET_Y));

    controller.set_current_screen(Screen::GameOver {
        stats: Some(GameStats::new(1, 2)),
    });
    assert!(app.view().click(button_x + 3, cy + RESTART_BUTTON_OFFSET_Y + 2));
    assert_eq!(controller.current_screen(), ScreenType::Game);
    assert_eq!(starts.get(), 2);
}

#[test]
fn clicks_reach_the_surface_through_the_page() {
    let (controller, app) = ready();
    let mut page = Page::new().with_anchor("root");
    page.get_element_by_id("root")
        .unwrap()
        .append_child(app.view().clone());

    // Surface centered in a 100x40 terminal: origin (10, 5).
    let screen = (100, 40);
    let column = 10 + (APP_WIDTH / 2 - BUTTON_WIDTH / 2);
    let row = 5 + APP_HEIGHT / 2 + START_BUTTON_OFFSET_Y as u16;

    assert!(!page.click(0, 0, screen));
    assert!(page.click(column, row, screen));
    assert_eq!(controller.current_screen(), ScreenType::Game);
}

#[test]
fn default_modal_geometry() {
    let (controller, app) = ready();
    let modal = controller.render_modal(ModalOptions::default()).unwrap();

    let x = (APP_WIDTH - MODAL_WIDTH) as i32 / 2;
    let y = (APP_HEIGHT - MODAL_HEIGHT) as i32 / 2;
    assert_eq!(modal.position(), (x, y));

    // Translucent: the title underneath is still legible through it.
    let fb = app.view().render();
    assert!(fb.row_text(APP_HEIGHT / 2).contains(GAME_TITLE));
}

#[test]
fn modal_open_then_close_leaves_layer_empty() {
    let (controller, _app) = ready();
    controller.render_modal(ModalOptions::default());
    controller.close_modal();
    assert!(controller.modal_container().unwrap().is_empty());
}

#[test]
fn game_start_single_slot() {
    let (controller, _app) = ready();
    let first = Rc::new(Cell::new(0));
    let second = Rc::new(Cell::new(0));

    let f = Rc::clone(&first);
    controller.on_game_start(move || f.set(f.get() + 1));
    controller.set_current_screen(Screen::Game);

    let s = Rc::clone(&second);
    controller.on_game_start(move || s.set(s.get() + 1));
    controller.set_current_screen(Screen::Game);

    assert_eq!(first.get(), 1);
    assert_eq!(second.get(), 1);
}
