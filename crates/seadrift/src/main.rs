use std::io::stdout;
use std::time::{Duration, Instant};

use chrono::{Local, Timelike};
use crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use ratatui::{DefaultTerminal, Frame};
use seadrift_ambience::{PaletteClock, ParallaxTracker, ParticleField, TypingAnimator};
use seadrift_config::Config;
use seadrift_core::StyleMap;

mod scene;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    let terminal = ratatui::init();
    let result = execute!(stdout(), EnableMouseCapture, EnableFocusChange)
        .map_err(color_eyre::Report::from)
        .and_then(|()| App::new(config).run(terminal));
    let _ = execute!(stdout(), DisableMouseCapture, DisableFocusChange);
    ratatui::restore();
    result
}

/// The main application; owns the four ambient components and the frame loop.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    config: Config,
    /// Scene start, the zero point for all elapsed-time cadences.
    started: Instant,
    /// Last known terminal extent in cells.
    cols: u16,
    rows: u16,
    rng: fastrand::Rng,
    /// The document-style sink shared by all components.
    style: StyleMap,
    palette: PaletteClock,
    /// Absent under reduced motion.
    parallax: Option<ParallaxTracker>,
    /// Absent when the terminal has no drawing surface.
    field: Option<ParticleField>,
    /// Absent when no tagline is configured.
    tagline: Option<TypingAnimator>,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        // Capture system time as seed for randomness
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);

        Self {
            running: false,
            config,
            started: Instant::now(),
            cols: 0,
            rows: 0,
            rng: fastrand::Rng::with_seed(seed),
            style: StyleMap::new(),
            palette: PaletteClock::new(),
            parallax: None,
            field: None,
            tagline: None,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let size = terminal.size()?;
        self.cols = size.width;
        self.rows = size.height;

        let reduced = self.config.reduced_motion;
        self.field = ParticleField::new(size.width, size.height, &mut self.rng);
        if !self.config.tagline.is_empty() {
            self.tagline = Some(TypingAnimator::new(&self.config.tagline, reduced, &mut self.rng));
        }
        if !reduced {
            self.parallax = Some(ParallaxTracker::new());
        }

        self.running = true;
        while self.running {
            self.tick();
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Advance every component by one frame.
    fn tick(&mut self) {
        let elapsed = self.elapsed_ms();
        self.palette.tick(elapsed, Local::now().hour(), &mut self.style);
        if let Some(parallax) = &mut self.parallax {
            parallax.tick(&mut self.style);
        }
        if let Some(field) = &mut self.field {
            field.step(self.config.reduced_motion);
        }
        if let Some(tagline) = &mut self.tagline {
            tagline.advance(elapsed);
        }
    }

    /// Renders the scene.
    fn render(&mut self, frame: &mut Frame) {
        scene::render(frame, &self.style, self.field.as_ref(), self.tagline.as_ref());
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with a short timeout so the scene animates smoothly.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(16))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::FocusLost => self.on_pointer_left(),
                Event::Resize(cols, rows) => self.on_resize(cols, rows),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            _ => {}
        }
    }

    /// Pointer movement feeds both the parallax target and the repulsion
    /// center; the latest position wins, one read per frame.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                if let Some(parallax) = &mut self.parallax {
                    parallax.set_target(
                        mouse.column as f64,
                        mouse.row as f64,
                        self.cols as f64,
                        self.rows as f64,
                    );
                }
                if let Some(field) = &mut self.field {
                    field.set_pointer_cell(mouse.column, mouse.row);
                }
            }
            _ => {}
        }
    }

    /// Terminal focus loss is the closest thing to the pointer leaving the
    /// surface; repulsion stops until it comes back.
    fn on_pointer_left(&mut self) {
        if let Some(field) = &mut self.field {
            field.pointer_left();
        }
    }

    /// Resize updates extents only; particles outside the new bounds are
    /// picked up by the wrap check.
    fn on_resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        if let Some(field) = &mut self.field {
            field.resize(cols, rows);
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
