//! Hurry Hard entry point
//!
//! The wasm build hooks the canvas and DOM HUD and runs the frame loop; the
//! native build drives a scripted round headless so the sim can be exercised
//! without a browser.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::f64::consts::TAU;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, PointerEvent};

    use glam::Vec2;
    use hurry_hard::consts::*;
    use hurry_hard::hack_position;
    use hurry_hard::sim::{GamePhase, GameState, StatusSnapshot, Team, tick};

    const COLOR_RED: &str = "#e53e3e";
    const COLOR_BLUE: &str = "#4299e1";
    const COLOR_HOUSE_BLUE: &str = "#a0deff";
    const COLOR_HOUSE_RED: &str = "#ffc0c0";
    const COLOR_BUTTON: &str = "#f6ad55";
    const COLOR_HOG_LINE: &str = "#3182ce";

    const STORAGE_KEY: &str = "hurry_hard_save";

    /// Game instance holding sim state and the 2D context
    struct Game {
        state: GameState,
        ctx: CanvasRenderingContext2d,
        /// Previous frame's phase, for save/clear on transitions
        last_phase: GamePhase,
    }

    impl Game {
        fn new(ctx: CanvasRenderingContext2d) -> Self {
            Self {
                state: GameState::new(),
                ctx,
                last_phase: GamePhase::Aiming,
            }
        }

        /// One frame: advance the sim, repaint, sync the HUD
        fn frame(&mut self) {
            tick(&mut self.state);

            // A finished round invalidates any saved game
            if self.state.phase == GamePhase::RoundOver && self.last_phase != GamePhase::RoundOver
            {
                clear_saved_game();
            }
            self.last_phase = self.state.phase;

            self.draw();
            update_hud(&self.state.status());
        }

        fn team_color(team: Team) -> &'static str {
            match team {
                Team::Red => COLOR_RED,
                Team::Blue => COLOR_BLUE,
            }
        }

        fn draw(&self) {
            let ctx = &self.ctx;
            ctx.clear_rect(0.0, 0.0, SHEET_WIDTH as f64, SHEET_HEIGHT as f64);

            self.draw_house();
            for stone in self.state.stones.iter() {
                self.draw_stone(stone.pos, Self::team_color(stone.team));
            }
            if self.state.phase == GamePhase::Aiming {
                // Preview stone waiting on the hack
                self.draw_stone(hack_position(), Self::team_color(self.state.current_team));
            }
            self.draw_aim_line();
        }

        fn draw_house(&self) {
            let ctx = &self.ctx;
            let house = &self.state.house;
            let cx = house.center.x as f64;
            let cy = house.center.y as f64;

            for (radius, color) in [
                (house.outer_radius, COLOR_HOUSE_BLUE),
                (house.inner_radius, COLOR_HOUSE_RED),
                (house.button_radius, COLOR_BUTTON),
            ] {
                ctx.begin_path();
                let _ = ctx.arc(cx, cy, radius as f64, 0.0, TAU);
                ctx.set_fill_style_str(color);
                ctx.fill();
            }

            // Hog lines (visual only)
            ctx.set_fill_style_str(COLOR_HOG_LINE);
            for x in [FAR_HOG_X, NEAR_HOG_X] {
                ctx.fill_rect(x as f64 - 2.0, 0.0, 4.0, SHEET_HEIGHT as f64);
            }
        }

        fn draw_stone(&self, pos: Vec2, color: &str) {
            let ctx = &self.ctx;
            ctx.begin_path();
            let _ = ctx.arc(pos.x as f64, pos.y as f64, STONE_RADIUS as f64, 0.0, TAU);
            ctx.set_fill_style_str(color);
            ctx.fill();

            // Highlight dot
            ctx.begin_path();
            let _ = ctx.arc(
                pos.x as f64 - 4.0,
                pos.y as f64 - 4.0,
                STONE_RADIUS as f64 / 3.0,
                0.0,
                TAU,
            );
            ctx.set_fill_style_str("rgba(255, 255, 255, 0.5)");
            ctx.fill();
        }

        /// Slingshot line: the drag is mirrored about the hack so the line
        /// points where the stone will actually go
        fn draw_aim_line(&self) {
            let Some(gesture) = self.state.gesture else {
                return;
            };
            let ctx = &self.ctx;
            let hack = hack_position();
            let drag = gesture.current - gesture.start;

            ctx.begin_path();
            ctx.move_to(hack.x as f64, hack.y as f64);
            ctx.line_to((hack.x - drag.x) as f64, (hack.y - drag.y) as f64);
            ctx.set_stroke_style_str("rgba(0, 0, 0, 0.5)");
            ctx.set_line_width(3.0);
            ctx.stroke();
        }
    }

    /// Write status text and scores into the page shell
    fn update_hud(status: &StatusSnapshot) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(el) = document.get_element_by_id("score-red") {
            el.set_text_content(Some(&status.scores.red.to_string()));
        }
        if let Some(el) = document.get_element_by_id("score-blue") {
            el.set_text_content(Some(&status.scores.blue.to_string()));
        }

        let Some(status_el) = document.get_element_by_id("status") else {
            return;
        };

        let team = status.current_team;
        let remaining = match team {
            Team::Red => status.red_remaining,
            Team::Blue => status.blue_remaining,
        };
        let chip = format!(
            "<span class=\"color-box\" style=\"background-color:{}\"></span>",
            Game::team_color(team),
        );

        match status.phase {
            GamePhase::Aiming => match status.aim {
                Some(aim) => status_el.set_inner_html(&format!(
                    "{chip} {}: drag to aim &mdash; power {:.0}%. Release to throw.",
                    team.as_str(),
                    aim.power_percent,
                )),
                None => status_el.set_inner_html(&format!(
                    "{chip} {}'s turn ({remaining} stones left)",
                    team.as_str(),
                )),
            },
            GamePhase::Sliding => status_el.set_inner_html("Sliding..."),
            GamePhase::Scoring => status_el.set_inner_html("Scoring..."),
            GamePhase::RoundOver => status_el.set_inner_html(&format!(
                "Round over &mdash; Red {} : Blue {}. Press New Game to play again.",
                status.scores.red, status.scores.blue,
            )),
        }
    }

    /// Save an in-progress round to LocalStorage
    fn save_game(state: &GameState) {
        if let Ok(json) = serde_json::to_string(state) {
            if let Some(storage) = web_sys::window()
                .and_then(|w| w.local_storage().ok())
                .flatten()
            {
                let _ = storage.set_item(STORAGE_KEY, &json);
                log::info!("Round saved ({} stones thrown)", state.stones_thrown);
            }
        }
    }

    /// Load a saved round from LocalStorage
    fn load_saved_game() -> Option<GameState> {
        let storage = web_sys::window()?.local_storage().ok()??;
        let json = storage.get_item(STORAGE_KEY).ok()??;
        serde_json::from_str(&json).ok()
    }

    /// Clear any saved round
    fn clear_saved_game() {
        if let Some(storage) = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
        {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Hurry Hard starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(SHEET_WIDTH as u32);
        canvas.set_height(SHEET_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("2d context failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let game = Rc::new(RefCell::new(Game::new(ctx)));

        // Resume a round interrupted mid-play (tab closed while sliding
        // states were saved on visibilitychange)
        if let Some(saved) = load_saved_game() {
            log::info!(
                "Resuming saved round ({} stones thrown)",
                saved.stones_thrown
            );
            game.borrow_mut().state = saved;
        }

        setup_input_handlers(&canvas, game.clone());
        setup_reset_button(game.clone());
        setup_auto_save(game.clone());

        request_animation_frame(game);

        log::info!("Hurry Hard running!");
    }

    fn event_point(event: &PointerEvent) -> Vec2 {
        Vec2::new(event.offset_x() as f32, event.offset_y() as f32)
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Pointer down - begin a gesture
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                game.borrow_mut().state.pointer_down(event_point(&event));
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer move - update the gesture (inert when none is live)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                game.borrow_mut().state.pointer_move(event_point(&event));
            });
            let _ = canvas
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer up - release the throw
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                game.borrow_mut().state.pointer_up(event_point(&event));
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_reset_button(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(btn) = document.get_element_by_id("resetButton") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().state.reset();
                clear_saved_game();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Save the round when the tab goes hidden mid-play
    fn setup_auto_save(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                let g = game.borrow();
                if g.state.stones_thrown > 0 && g.state.phase != GamePhase::RoundOver {
                    save_game(&g.state);
                }
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game.borrow_mut().frame();
            request_animation_frame(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;
    use hurry_hard::consts::POWER_SCALE;
    use hurry_hard::sim::{GamePhase, GameState, tick};

    env_logger::init();
    log::info!("Hurry Hard (native) starting...");
    log::info!("Headless demo round - run with `trunk serve` for the browser version");

    let mut state = GameState::new();

    // Eight scripted throws through the same gesture API the browser uses
    let launches = [
        Vec2::new(11.0, 0.2),
        Vec2::new(10.5, -0.4),
        Vec2::new(11.2, 0.0),
        Vec2::new(9.0, 1.0),
        Vec2::new(11.4, -0.1),
        Vec2::new(12.0, 0.3),
        Vec2::new(10.8, 0.5),
        Vec2::new(11.1, -0.3),
    ];

    for vel in launches {
        let start = Vec2::new(100.0, 200.0);
        state.pointer_down(start);
        state.pointer_up(start - vel / POWER_SCALE);
        while state.phase == GamePhase::Sliding {
            tick(&mut state);
        }
    }
    // Resolve the score
    tick(&mut state);
    assert_eq!(state.phase, GamePhase::RoundOver);

    let status = state.status();
    log::info!(
        "Demo round finished: Red {} - Blue {}",
        status.scores.red,
        status.scores.blue,
    );
    for stone in state.stones.iter() {
        log::info!(
            "  stone {} ({}) rests at ({:.1}, {:.1}), {:.1} px from the tee",
            stone.id,
            stone.team.as_str(),
            stone.pos.x,
            stone.pos.y,
            stone.distance_to(state.house.center),
        );
    }
}
