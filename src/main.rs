//! Terminal fire runner (default binary).
//!
//! Reads text from stdin when piped, burns it in the terminal until `q`,
//! Ctrl-C or an interrupt signal. Set `TEXTBURN_LOG=<file>` to write debug
//! logs to a file (never to the terminal the animation owns).

use std::fs::File;
use std::process::ExitCode;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use textburn::core::{Frame, Scene, SimpleRng};
use textburn::input::{read_seed_text, should_quit, InterruptFlag};
use textburn::term::{
    restore_terminal, DisplayError, FireView, FrameBuffer, Palette, TerminalRenderer,
};
use textburn::types::{FireParams, FRAME_MS};
use textburn::{run_loop, Animation, Control, ControlSource, FrameSink, RunSummary};

fn main() -> ExitCode {
    init_logging();

    let text = match read_seed_text() {
        Ok(text) => text,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    let interrupt = InterruptFlag::new();
    if let Err(err) = interrupt.install() {
        warn!("{err:#}");
    }
    install_panic_hook();

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &text, &interrupt));

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        error!("failed to restore terminal: {err:#}");
    }

    match result {
        Ok(summary) => {
            info!(ticks = summary.ticks, burned = summary.burned, "bye");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err:#}");
            eprintln!("error: {err:#}");
            if let Some(display) = err.downcast_ref::<DisplayError>() {
                eprintln!("{}", display.hint());
            }
            ExitCode::FAILURE
        }
    }
}

fn run(term: &mut TerminalRenderer, text: &str, interrupt: &InterruptFlag) -> Result<RunSummary> {
    let dims = term.dims()?;
    let rng = SimpleRng::from_time();
    info!(
        height = dims.height,
        width = dims.width,
        seed = rng.state(),
        input_bytes = text.len(),
        "starting"
    );

    let scene = Scene::new(dims, text);
    let mut anim = Animation::new(scene, FireParams::default(), rng);
    let mut sink = TerminalSink {
        term,
        view: FireView::new(Palette::default()),
        fb: FrameBuffer::new(dims.width as u16, dims.height as u16),
    };
    let mut control = KeyboardControl {
        interrupt: interrupt.clone(),
    };

    run_loop(
        &mut anim,
        &mut sink,
        &mut control,
        Duration::from_millis(FRAME_MS as u64),
    )
}

/// Blits frames through the diffing terminal renderer.
struct TerminalSink<'a> {
    term: &'a mut TerminalRenderer,
    view: FireView,
    fb: FrameBuffer,
}

impl FrameSink for TerminalSink<'_> {
    fn present(&mut self, frame: &Frame) -> Result<()> {
        // The scene never resizes, but the physical terminal may have shrunk:
        // clip to what is actually there.
        let (w, h) = crossterm::terminal::size().unwrap_or((self.fb.width(), self.fb.height()));
        self.fb.resize(w, h);
        self.view.render_into(frame, &mut self.fb);
        self.term.draw_swap(&mut self.fb)
    }
}

/// Waits out the frame while watching the keyboard and the interrupt flag.
struct KeyboardControl {
    interrupt: InterruptFlag,
}

impl ControlSource for KeyboardControl {
    fn wait_until(&mut self, deadline: Instant) -> Result<Control> {
        loop {
            if self.interrupt.is_raised() {
                return Ok(Control::Interrupt);
            }

            let timeout = deadline.saturating_duration_since(Instant::now());
            match event::poll(timeout) {
                Ok(false) => return Ok(Control::Continue),
                Ok(true) => {}
                Err(err) if err.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            }

            if let Event::Key(key) = event::read()? {
                if should_quit(key) {
                    return Ok(Control::Quit);
                }
            }
            // Other keys and resizes: keep waiting out the frame.
        }
    }
}

fn init_logging() {
    let Some(path) = std::env::var_os("TEXTBURN_LOG") else {
        return;
    };
    let file = match File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("warning: cannot open log file {}: {err}", path.to_string_lossy());
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Restore the terminal before the default hook prints the panic message.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));
}
