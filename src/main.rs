//! Gravity Dodge entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use gravity_dodge::Settings;
    use gravity_dodge::platform::{FrameClock, KeyboardAdapter};
    use gravity_dodge::renderer::{Palette, render};
    use gravity_dodge::sim::{GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: TickInput,
        clock: FrameClock,
        adapter: KeyboardAdapter,
        settings: Settings,
        ctx: CanvasRenderingContext2d,
    }

    impl Game {
        /// Record a key press or release
        fn key(&mut self, key: &str, pressed: bool) {
            if self.adapter.handle(&mut self.input, key, pressed) {
                log::debug!("{} {}", key, if pressed { "down" } else { "up" });
            }
        }

        /// Advance one animation frame
        fn update(&mut self, time: f64) {
            let dt = self.clock.advance(time);
            let input = self.input;
            tick(&mut self.state, &input, dt);
        }

        /// Redraw the current frame
        fn draw(&mut self) {
            if let Err(e) = render(&mut self.ctx, &self.state, Palette::from(&self.settings)) {
                log::warn!("Render error: {:?}", e);
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        log::info!("Gravity Dodge starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        // Fill the viewport, minus a small margin
        let settings = Settings::load();
        if !Settings::has_saved() {
            // Leave an editable entry behind
            settings.save();
        }
        let inner_width = window.inner_width()?.as_f64().unwrap_or_default();
        let inner_height = window.inner_height()?.as_f64().unwrap_or_default();
        let bounds = settings.canvas_bounds(inner_width, inner_height);
        canvas.set_width(bounds.width as u32);
        canvas.set_height(bounds.height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into()?;

        let seed = js_sys::Date::now() as u64;
        let state = GameState::new(seed, bounds);
        log::info!(
            "Game initialized with seed: {} ({}x{})",
            seed,
            bounds.width,
            bounds.height
        );

        let now = window
            .performance()
            .ok_or_else(|| JsValue::from_str("no performance"))?
            .now();

        let game = Rc::new(RefCell::new(Game {
            state,
            input: TickInput::default(),
            clock: FrameClock::start(now, settings.max_frame_ms),
            adapter: KeyboardAdapter::new(settings.keys.clone()),
            settings,
            ctx,
        }));

        setup_input_handlers(&window, game.clone())?;

        log::info!("start animation");
        request_animation_frame(game)
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().key(&event.key(), true);
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().key(&event.key(), false);
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let running = {
            let mut g = game.borrow_mut();
            g.update(time);
            g.draw();
            g.state.is_running()
        };

        // Game over stops the loop; nothing reschedules it
        if running {
            if let Err(e) = request_animation_frame(game) {
                log::error!("Could not schedule next frame: {:?}", e);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&JsValue::from_str(&e.to_string()));
    }

    if let Err(e) = wasm_game::run() {
        log::error!("Startup failed: {:?}", e);
    }
}

/// Headless run length cap (frames)
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_FRAME_CAP: u32 = 60 * 60 * 5;

/// Nominal 60 Hz frame (ms)
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_FRAME_MS: f64 = 1000.0 / 60.0;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use gravity_dodge::Settings;
    use gravity_dodge::platform::FrameClock;
    use gravity_dodge::sim::{Bounds, GameState, TickInput, run};

    env_logger::init();
    log::info!("Gravity Dodge (native) starting...");
    log::info!("Native mode runs headless - serve the wasm build for the canvas version");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    let settings = Settings::load();
    if !Settings::has_saved() {
        settings.save();
    }
    let mut state = GameState::new(seed, Bounds::new(800.0, 600.0));
    log::info!("Game initialized with seed: {}", seed);

    let mut clock = FrameClock::start(0.0, settings.max_frame_ms);
    let deltas = (1..=HEADLESS_FRAME_CAP).map(|i| clock.advance(f64::from(i) * HEADLESS_FRAME_MS));
    let summary = run(&mut state, &TickInput::default(), deltas);

    log::info!(
        "Stopped in {:?} after {} frames ({:.0} ms simulated, {} wall bounces)",
        summary.phase,
        summary.frames,
        state.elapsed_ms,
        state.wall_bounces
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
