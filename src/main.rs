//! Cactus Run entry point
//!
//! Browser host (canvas + DOM) on wasm32, terminal host everywhere else.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, HtmlElement, KeyboardEvent, TouchEvent};

    use cactus_run::render::CanvasSurface;
    use cactus_run::sim::{Action, action_for_code};
    use cactus_run::{Hud, LoopDriver, Viewport};

    /// Score readout and game-over message elements
    struct DomHud {
        score: Element,
        message: HtmlElement,
    }

    impl Hud for DomHud {
        fn set_score(&mut self, score: u32) {
            self.score.set_text_content(Some(&score.to_string()));
        }

        fn set_game_over_visible(&mut self, visible: bool) {
            let display = if visible { "block" } else { "none" };
            if let Err(e) = self.message.style().set_property("display", display) {
                log::warn!("Could not toggle game-over message: {:?}", e);
            }
        }
    }

    struct Game {
        driver: LoopDriver<Pcg32>,
        surface: CanvasSurface,
        hud: DomHud,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Cactus Run starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        // Responsive width, fixed height
        let host_width = window.inner_width()?.as_f64().unwrap_or(0.0) as f32;
        let viewport = Viewport::for_host_width(host_width);

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no #gameCanvas element")?
            .dyn_into()?;
        canvas.set_width(viewport.width as u32);
        canvas.set_height(viewport.height as u32);

        let hud = DomHud {
            score: document.get_element_by_id("score").ok_or("no #score element")?,
            message: document
                .get_element_by_id("game-over-message")
                .ok_or("no #game-over-message element")?
                .dyn_into()?,
        };

        let seed = js_sys::Date::now() as u64;
        log::info!("Seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            driver: LoopDriver::new(viewport, Pcg32::seed_from_u64(seed)),
            surface: CanvasSurface::new(&canvas)?,
            hud,
        }));

        setup_input_handlers(&document, game.clone())?;

        let schedule = {
            let mut g = game.borrow_mut();
            let g = &mut *g;
            g.driver.start(&mut g.hud)
        };
        if schedule {
            request_animation_frame(game);
        }

        log::info!("Cactus Run running!");
        Ok(())
    }

    fn setup_input_handlers(
        document: &web_sys::Document,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        // Keyboard: Space / ArrowUp jump, anything else only matters after game over
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let action = action_for_code(&event.code());
                if action == Action::Jump {
                    // Keep Space / ArrowUp from scrolling the page
                    event.prevent_default();
                }
                dispatch(&game, action);
            });
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                dispatch(&game, Action::Jump);
            });
            document
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn dispatch(game: &Rc<RefCell<Game>>, action: Action) {
        let schedule = {
            let mut g = game.borrow_mut();
            let g = &mut *g;
            g.driver.handle_action(action, &mut g.hud)
        };
        if schedule {
            request_animation_frame(game.clone());
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window to schedule frames on");
            return;
        };
        let driver_game = game.clone();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(_) => closure.forget(),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                driver_game.borrow_mut().driver.abandon_frame();
            }
        }
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let schedule = {
            let mut g = game.borrow_mut();
            let g = &mut *g;
            match g.driver.frame(&mut g.surface, &mut g.hud) {
                Ok(schedule) => schedule,
                Err(e) => {
                    log::error!("Frame failed: {:?}", e);
                    false
                }
            }
        };

        if schedule {
            request_animation_frame(game);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod terminal_game {
    use std::io::{self, Write, stdout};
    use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

    use crossterm::event::{self, Event};
    use crossterm::{cursor, execute, terminal};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use cactus_run::render::{TerminalHud, TerminalSurface};
    use cactus_run::terminal_input::{Command, command_for};
    use cactus_run::{LoopDriver, Viewport};

    /// ~60 frames per second
    const FRAME: Duration = Duration::from_micros(16_667);
    /// Input poll interval while no frames are scheduled
    const IDLE_POLL: Duration = Duration::from_millis(250);

    pub fn run() -> io::Result<()> {
        let mut out = stdout();
        terminal::enable_raw_mode()?;
        execute!(
            out,
            terminal::EnterAlternateScreen,
            terminal::Clear(terminal::ClearType::All),
            cursor::Hide,
            terminal::DisableLineWrap,
        )?;

        let result = play(&mut out);

        // Always give the terminal back, even if the game loop failed
        execute!(
            out,
            terminal::LeaveAlternateScreen,
            cursor::Show,
            terminal::EnableLineWrap,
        )?;
        terminal::disable_raw_mode()?;

        result
    }

    fn play(out: &mut impl Write) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let viewport = Viewport::default();

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        log::info!("Seed: {}", seed);

        let mut driver = LoopDriver::new(viewport, Pcg32::seed_from_u64(seed));
        let mut surface = TerminalSurface::new(viewport, cols, rows);
        let mut hud = TerminalHud::default();

        let mut frame_due = driver.start(&mut hud);
        let mut next_frame = Instant::now();

        loop {
            let timeout = if frame_due {
                next_frame.saturating_duration_since(Instant::now())
            } else {
                IDLE_POLL
            };

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => match command_for(&key) {
                        Some(Command::Quit) => return Ok(()),
                        Some(Command::Play(action)) => {
                            if driver.handle_action(action, &mut hud) {
                                frame_due = true;
                                next_frame = Instant::now();
                            }
                        }
                        None => {}
                    },
                    Event::Resize(cols, rows) => {
                        surface.resize(cols, rows);
                        // A running loop repaints on its next frame
                        if !frame_due {
                            let Ok(()) = driver.repaint(&mut surface);
                            surface.present(&hud, out)?;
                        }
                    }
                    _ => {}
                }
                continue;
            }

            if frame_due {
                let Ok(schedule) = driver.frame(&mut surface, &mut hud);
                frame_due = schedule;
                surface.present(&hud, out)?;

                // Fall back to "now" if we are running behind
                next_frame += FRAME;
                let now = Instant::now();
                if next_frame < now {
                    next_frame = now;
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Cactus Run failed to start: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    // Logs go to stderr; redirect it (`2>cactus.log`) to keep the screen clean
    env_logger::init();
    log::info!("Cactus Run (terminal) starting...");

    terminal_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
