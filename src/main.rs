//! Stack Pong entry point
//!
//! Opens the terminal in raw mode, pushes the main menu and runs the frame
//! loop until the stack empties or the player quits. Logs go to stderr, so
//! redirect it (`RUST_LOG=debug stack-pong 2>pong.log`) to keep the screen clean.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::io::{Write, stdout};
    use std::thread;
    use std::time::{Duration, Instant};

    use termion::cursor::HideCursor;
    use termion::raw::IntoRawMode;

    use stack_pong::consts::MAX_FRAME_DT;
    use stack_pong::platform::terminal::TerminalInput;
    use stack_pong::platform::{Font, InputEvent};
    use stack_pong::renderer::{Canvas, Color, TerminalCanvas};
    use stack_pong::ui::{Menu, Resources, StateStack};
    use stack_pong::{PongError, Settings};

    const FRAME_TIME: Duration = Duration::from_millis(16);

    pub fn run() -> Result<(), PongError> {
        let settings = Settings::default();
        settings.validate()?;
        match serde_json::to_string(&settings) {
            Ok(json) => log::debug!("Settings: {}", json),
            Err(e) => log::warn!("Cannot serialize settings: {}", e),
        }

        let font = Font::load(&settings.font_path)?;
        let (cols, rows) = termion::terminal_size()?;
        log::info!("Terminal is {}x{} cells", cols, rows);

        let out = HideCursor::from(stdout()).into_raw_mode()?;
        let mut canvas = TerminalCanvas::new(out, cols, rows, settings.screen_size);
        let mut input = TerminalInput::new();
        let mut resources = Resources::new(settings, font);

        let mut stack = StateStack::new();
        stack.push(Box::new(Menu::main_menu(
            &resources.font,
            resources.settings.screen_size,
        )));

        let mut last = Instant::now();
        'frames: while !stack.is_empty() {
            for event in input.poll() {
                if event == InputEvent::Closed {
                    log::info!("Window closed");
                    break 'frames;
                }
                stack.handle_input(&event, &mut resources, &input);
            }

            let now = Instant::now();
            let dt = now.duration_since(last).as_secs_f32().min(MAX_FRAME_DT);
            last = now;
            stack.update(dt, &mut resources, &input);

            canvas.clear(Color::BLACK);
            stack.draw(&mut canvas);
            canvas.present()?;

            thread::sleep(FRAME_TIME.saturating_sub(now.elapsed()));
        }

        let mut out = canvas.into_inner();
        write!(
            out,
            "{}{}{}",
            termion::style::Reset,
            termion::clear::All,
            termion::cursor::Goto(1, 1)
        )?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Stack Pong starting...");

    if let Err(e) = native::run() {
        log::error!("{}", e);
        eprintln!("stack-pong: {}", e);
        std::process::exit(1);
    }
    log::info!("Stack Pong finished");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No web frontend; the library still builds for wasm32
}
