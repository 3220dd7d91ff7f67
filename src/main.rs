//! Canvas Pong entry point
//!
//! On the web this wires the `#pong` canvas, launch buttons and pointer input
//! to a [`FrameDriver`]. Natively it runs a short headless session.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, Document, HtmlCanvasElement, KeyboardEvent, MouseEvent,
    };

    use canvas_pong::renderer::{Frame, FrameSink, draw_list};
    use canvas_pong::{FrameDriver, InputState, Simulation};

    /// Executes draw lists on a 2D canvas context
    struct CanvasSink {
        ctx: CanvasRenderingContext2d,
    }

    impl FrameSink for CanvasSink {
        fn present(&mut self, frame: &Frame) {
            for rect in draw_list(frame) {
                self.ctx.set_fill_style_str(rect.color.css());
                self.ctx
                    .fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
            }
        }
    }

    /// Game instance holding all state
    struct Game {
        driver: FrameDriver<CanvasSink>,
        input: InputState,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Canvas Pong starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .query_selector("#pong")?
            .ok_or("no #pong canvas")?
            .dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let seed = js_sys::Date::now() as u64;
        let sim = Simulation::new(canvas.width() as f32, canvas.height() as f32, seed);
        log::info!(
            "Field {}x{}, seed {}",
            canvas.width(),
            canvas.height(),
            seed
        );

        let game = Rc::new(RefCell::new(Game {
            driver: FrameDriver::new(sim, CanvasSink { ctx }),
            input: InputState::new(),
        }));

        setup_launch_buttons(&document, &canvas, game.clone())?;
        setup_input_handlers(&canvas, game.clone())?;

        request_animation_frame(game);

        log::info!("Canvas Pong running!");
        Ok(())
    }

    fn setup_launch_buttons(
        document: &Document,
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        for (id, two_players) in [("onePlayer", false), ("twoPlayers", true)] {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Launch button #{} not found", id);
                continue;
            };

            let game = game.clone();
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let _ = canvas.focus();
                let mut g = game.borrow_mut();
                let Game { driver, input } = &mut *g;
                input.launch(driver.sim_mut(), two_players);
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        // Pointer drives the left paddle
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let height = canvas_clone.get_bounding_client_rect().height() as f32;
                let mut g = game.borrow_mut();
                let Game { driver, input } = &mut *g;
                input.pointer_moved(driver.sim_mut(), event.offset_y() as f32, height);
            });
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Keyboard
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let Game { driver, input } = &mut *g;
                input.key_pressed(driver.sim_mut(), event.key_code());
            });
            canvas.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, stopping frame loop");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().driver.on_frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use canvas_pong::renderer::{Frame, FrameSink};
    use canvas_pong::{FrameDriver, InputState, Simulation, Tuning, TuningError};

    const FIELD_WIDTH: f32 = 640.0;
    const FIELD_HEIGHT: f32 = 400.0;
    const FRAME_MS: f64 = 1000.0 / 60.0;
    const DEMO_SECONDS: u32 = 60;

    /// Logs score changes instead of drawing
    #[derive(Default)]
    struct ScoreLog {
        last: Option<Frame>,
    }

    impl FrameSink for ScoreLog {
        fn present(&mut self, frame: &Frame) {
            let changed = self
                .last
                .as_ref()
                .is_none_or(|last| last.scores != frame.scores);
            if changed {
                log::info!("Score {} - {}", frame.scores[0], frame.scores[1]);
            }
            self.last = Some(frame.clone());
        }
    }

    /// Headless session: optional tuning file as the first argument
    pub fn run() -> Result<(), TuningError> {
        let tuning = match std::env::args().nth(1) {
            Some(path) => {
                log::info!("Loading tuning from {}", path);
                Tuning::from_file(&path)?
            }
            None => Tuning::default(),
        };

        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        log::info!("Game initialized with seed: {}", seed);

        let sim = Simulation::with_tuning(FIELD_WIDTH, FIELD_HEIGHT, tuning, seed);
        let mut driver = FrameDriver::new(sim, ScoreLog::default());
        let mut input = InputState::new();

        let total_frames = DEMO_SECONDS as u64 * 60;
        for frame in 0..=total_frames {
            input.launch(driver.sim_mut(), false);
            driver.on_frame(frame as f64 * FRAME_MS);
        }

        let [left, right] = driver.sim().scores();
        log::info!(
            "Session over after {} frames: {} - {}",
            driver.frames(),
            left,
            right
        );
        if let Some(frame) = &driver.sink().last {
            match serde_json::to_string(frame) {
                Ok(json) => log::info!("Final frame: {}", json),
                Err(e) => log::warn!("Could not serialize final frame: {}", e),
            }
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Canvas Pong (native) starting...");
    log::info!("Native mode runs a headless session - run with `trunk serve` for the web version");

    if let Err(e) = native::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
