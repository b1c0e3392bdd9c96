//! Main TUI application state and logic

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use crate::alloc::{run_allocations, FitPolicy};
use crate::input::parse_number_list;
use crate::ui::textfield::TextField;

/// Which control is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedControl {
    Partitions,
    Requests,
    Policy,
    Results,
}

impl FocusedControl {
    /// Move focus to the next control (top to bottom)
    pub fn next(self) -> Self {
        match self {
            FocusedControl::Partitions => FocusedControl::Requests,
            FocusedControl::Requests => FocusedControl::Policy,
            FocusedControl::Policy => FocusedControl::Results,
            FocusedControl::Results => FocusedControl::Partitions,
        }
    }

    /// Move focus to the previous control
    pub fn prev(self) -> Self {
        match self {
            FocusedControl::Partitions => FocusedControl::Results,
            FocusedControl::Requests => FocusedControl::Partitions,
            FocusedControl::Policy => FocusedControl::Requests,
            FocusedControl::Results => FocusedControl::Policy,
        }
    }
}

/// The main application state
pub struct App {
    /// Free-form text for the partition capacity list
    pub partitions_input: TextField,

    /// Free-form text for the request size list
    pub requests_input: TextField,

    /// The fit policy applied to every request
    pub policy: FitPolicy,

    /// Currently focused control
    pub focus: FocusedControl,

    /// Scroll offset for the results pane
    pub results_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app, optionally pre-filling the input fields.
    pub fn new(partitions: Option<&str>, requests: Option<&str>, policy: FitPolicy) -> Self {
        let mut partitions_input = TextField::new("300, 600, 350, 200, 750, 125");
        if let Some(text) = partitions {
            partitions_input.set_value(text);
        }
        let mut requests_input = TextField::new("115, 500, 358, 200, 375");
        if let Some(text) = requests {
            requests_input.set_value(text);
        }

        App {
            partitions_input,
            requests_input,
            policy,
            focus: FocusedControl::Partitions,
            results_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Layout: input pane on top, results below, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0)])
            .split(main_chunks[0]);

        // Re-parse both lists and replay the whole run every frame; no
        // allocator state survives between frames.
        let mut partitions = parse_number_list(self.partitions_input.value());
        let requests = parse_number_list(self.requests_input.value());
        let steps = run_allocations(self.policy, &mut partitions, &requests);

        super::panes::render_controls_pane(
            frame,
            rows[0],
            &self.partitions_input,
            &self.requests_input,
            self.policy,
            self.focus,
        );

        super::panes::render_results_pane(
            frame,
            rows[1],
            &steps,
            &partitions,
            self.focus == FocusedControl::Results,
            &mut self.results_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.policy,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
            }
            _ => match self.focus {
                FocusedControl::Partitions => self.partitions_input.handle_key(key.code),
                FocusedControl::Requests => self.requests_input.handle_key(key.code),
                FocusedControl::Policy => self.handle_policy_key(key.code),
                FocusedControl::Results => self.handle_results_key(key.code),
            },
        }
    }

    fn handle_policy_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Down | KeyCode::Right | KeyCode::Char(' ') => {
                self.set_policy(self.policy.next());
            }
            KeyCode::Up | KeyCode::Left => {
                self.set_policy(self.policy.prev());
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn handle_results_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => {
                self.results_scroll = self.results_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                // Clamped against the row count at render time
                self.results_scroll = self.results_scroll.saturating_add(1);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn set_policy(&mut self, policy: FitPolicy) {
        self.policy = policy;
        self.status_message = format!("Policy: {}", policy.label());
    }
}
