//! Atom Maze entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use atom_maze::platform::{EventQueue, FixedTimer, HostEvent};
    use atom_maze::renderer::CanvasRenderer;
    use atom_maze::sim::Direction;
    use atom_maze::{Game, GameConfig};

    /// Everything the browser callbacks share
    struct App {
        game: Game,
        renderer: CanvasRenderer,
        timer: FixedTimer,
        queue: EventQueue,
    }

    impl App {
        /// Run one animation frame: enqueue due ticks, drain, draw
        fn frame(&mut self, time: f64) {
            for _ in 0..self.timer.advance_to(time) {
                self.queue.push(HostEvent::Tick);
            }

            match self.game.pump(&mut self.queue) {
                Ok(0) => {}
                Ok(_) => {
                    if let Err(e) = self.renderer.draw(&self.game.frame()) {
                        log::warn!("Render error: {:?}", e);
                    }
                }
                Err(e) => {
                    log::error!("Simulation error: {}", e);
                    if let Err(e) = self.game.restart() {
                        log::error!("Restart failed: {}", e);
                    }
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Atom Maze starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let config = GameConfig::load();
        let seed = js_sys::Date::now() as u64;
        let game = match Game::new(config, seed) {
            Ok(game) => game,
            Err(e) => {
                log::error!("Failed to start game: {}", e);
                return;
            }
        };

        let config = game.config();
        let renderer = CanvasRenderer::new(&canvas, config.canvas_width, config.canvas_height)
            .expect("Failed to get 2d context");
        let timer = FixedTimer::new(config.tick_interval_ms);

        // Draw once so the maze shows before the first tick
        if let Err(e) = renderer.draw(&game.frame()) {
            log::warn!("Render error: {:?}", e);
        }

        let app = Rc::new(RefCell::new(App {
            game,
            renderer,
            timer,
            queue: EventQueue::new(),
        }));

        setup_input_handlers(app.clone());
        request_animation_frame(app);

        log::info!("Atom Maze running!");
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if let Some(direction) = Direction::from_key(&event.key()) {
                // Keep arrow keys from scrolling the page
                event.prevent_default();
                app.borrow_mut().queue.push(HostEvent::Key(direction));
            }
        });
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().frame(time);
        request_animation_frame(app);
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
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use atom_maze::platform::{EventQueue, FixedTimer, HostEvent};
    use atom_maze::renderer::ascii;
    use atom_maze::sim::Direction;
    use atom_maze::{Game, GameConfig};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    /// Length of the headless demo (ticks)
    const DEMO_TICKS: u32 = 600;

    env_logger::init();
    log::info!("Atom Maze (native) starting...");
    log::info!("Native mode runs a headless demo - build for wasm32 to play in a browser");

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = GameConfig::load_from(config_path.as_deref());

    let clock_seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut game = match Game::new(config, clock_seed) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Failed to start game: {}", e);
            std::process::exit(1);
        }
    };

    // Random walker pressing one key per tick, on a simulated clock
    let mut input_rng = Pcg32::seed_from_u64(game.seed().wrapping_add(1));
    let mut timer = FixedTimer::new(game.config().tick_interval_ms);
    let mut queue = EventQueue::new();
    let mut now = 0.0;
    timer.advance_to(now);

    while game.ticks < DEMO_TICKS as u64 {
        now += game.config().tick_interval_ms;
        let direction = Direction::ALL[input_rng.random_range(0..Direction::ALL.len())];
        queue.push(HostEvent::Key(direction));
        for _ in 0..timer.advance_to(now) {
            queue.push(HostEvent::Tick);
        }

        if let Err(e) = game.pump(&mut queue) {
            log::error!("Simulation error: {}", e);
            std::process::exit(1);
        }
    }

    log::info!(
        "Demo finished: {} ticks, {} atoms, {} resets",
        game.ticks,
        game.atoms_collected,
        game.resets
    );
    println!("{}", ascii::render(game.grid(), &game.snapshot()));
}
