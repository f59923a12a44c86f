//! Main TUI application state and logic

use crate::input::{self, share, Bounds};
use crate::playback::{Player, Speed};
use crate::trace::{generate, Locale, StepTrace};
use crate::ui::panes::{self, DataEditor};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Settings the app starts with
#[derive(Debug, Clone, Copy)]
pub struct AppOptions {
    pub bounds: Bounds,
    pub speed: Speed,
    pub locale: Locale,
    /// Seed for the `r` key; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for AppOptions {
    fn default() -> Self {
        AppOptions {
            bounds: Bounds::default(),
            speed: Speed::default(),
            locale: Locale::default(),
            seed: None,
        }
    }
}

/// The main application state
pub struct App {
    /// Steps for the current array
    pub trace: StepTrace,

    /// Cursor and playback state
    pub player: Player,

    pub locale: Locale,

    /// Accepted data for the editor and random arrays
    pub bounds: Bounds,

    /// Open while the user is typing custom data
    pub editor: Option<DataEditor>,

    /// Whether the guide pane is shown under the explanation
    pub show_guide: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    rng: SmallRng,
}

impl App {
    /// Create a new app showing the trace for `values`
    pub fn new(values: Vec<i64>, options: AppOptions) -> Self {
        let trace = generate(&values);
        let player = Player::new(trace.len(), options.speed);
        let rng = match options.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        App {
            trace,
            player,
            locale: options.locale,
            bounds: options.bounds,
            editor: None,
            show_guide: true,
            should_quit: false,
            status_message: String::from("Ready!"),
            rng,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.player.tick(Instant::now()) && !self.player.is_playing() {
                self.status_message = "Playback complete".to_string();
            }

            // Poll with a timeout so auto-play keeps advancing without input
            if event::poll(Duration::from_millis(20))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key, Instant::now());
                    }
                }
            }
        }

        Ok(())
    }

    /// Replace the array: new trace, cursor back to the first step
    pub fn load_array(&mut self, values: Vec<i64>) {
        info!(values = %share::encode(&values), "loading array");
        self.trace = generate(&values);
        self.player.reset(self.trace.len());
    }

    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        // Right column: listing | explanation | guide
        let guide_height = if self.show_guide { 9 } else { 0 };
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(10),
                Constraint::Min(0),
                Constraint::Length(guide_height),
            ])
            .split(columns[1]);

        let step = self
            .trace
            .get(self.player.cursor())
            .unwrap_or_else(|| self.trace.last());

        panes::render_bars_pane(frame, columns[0], step, self.bounds.max);
        panes::render_source_pane(frame, right_rows[0], step.highlight);
        panes::render_narrative_pane(frame, right_rows[1], step, self.locale);
        if self.show_guide {
            panes::render_guide_pane(frame, right_rows[2], self.locale);
        }

        if let Some(editor) = &self.editor {
            panes::render_editor_popup(frame, main_chunks[0], editor, &self.bounds);
        }

        panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            &self.player,
            self.editor.is_some(),
        );
    }

    fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if self.editor.is_some() {
            self.handle_editor_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.player.step_backward() {
                    self.status_message = "Stepped backward".to_string();
                } else {
                    self.status_message = "Already at the first step".to_string();
                }
            }
            KeyCode::Right => {
                if self.player.step_forward() {
                    self.status_message = "Stepped forward".to_string();
                } else {
                    self.status_message = "Already at the last step".to_string();
                }
            }
            KeyCode::Char(' ') => {
                self.status_message = if self.player.toggle(now) {
                    "Playing...".to_string()
                } else if self.player.at_end() {
                    "At the last step".to_string()
                } else {
                    "Paused".to_string()
                };
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.player.faster(now);
                self.status_message = format!("Speed {}%", self.player.speed().percent());
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.player.slower(now);
                self.status_message = format!("Speed {}%", self.player.speed().percent());
            }
            KeyCode::Enter => {
                self.player.jump_to_end();
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.player.jump_to_start();
                self.status_message = "Jumped to start".to_string();
            }
            KeyCode::Char('e') => {
                self.player.pause();
                let current = self
                    .trace
                    .input()
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                self.editor = Some(DataEditor::new(current));
                self.status_message = "Editing data".to_string();
            }
            KeyCode::Char('r') => {
                let values = input::random_array(&mut self.rng, &self.bounds);
                self.load_array(values);
                self.status_message = "Generated a random array".to_string();
            }
            KeyCode::Char('s') => {
                self.status_message = format!("Share: {}", share::share_query(self.trace.input()));
            }
            KeyCode::Char('l') => {
                self.locale = self.locale.toggle();
                self.status_message = format!("Language: {}", self.locale);
            }
            KeyCode::Char('g') => {
                self.show_guide = !self.show_guide;
                self.status_message = if self.show_guide {
                    "Guide shown".to_string()
                } else {
                    "Guide hidden".to_string()
                };
            }
            _ => {}
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Esc => {
                self.editor = None;
                self.status_message = "Edit cancelled".to_string();
            }
            KeyCode::Enter => match input::validate_with(&editor.buffer, &self.bounds) {
                Ok(values) => {
                    self.editor = None;
                    self.load_array(values);
                    self.status_message = "Applied custom data".to_string();
                }
                Err(e) => {
                    // The current trace stays as it is
                    warn!(error = %e, "rejected custom data");
                    editor.error = Some(e.to_string());
                }
            },
            KeyCode::Backspace => {
                editor.buffer.pop();
                editor.error = None;
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == ',' || c == ' ' || c == '-' => {
                editor.buffer.push(c);
                editor.error = None;
            }
            _ => {}
        }
    }
}
