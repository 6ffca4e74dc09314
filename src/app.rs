use crate::config::Config;
use crate::input::Key;
use crate::menu::{MenuAction, MenuState};
use crate::mode::Mode;
use crate::progress::{ProgressRecorder, ProgressTracker};
use crate::session::{Session, SessionConfig, SessionEvent, SessionSummary};
use crate::view::{self, View};
use crate::words::WordSource;

#[derive(Debug, Clone)]
pub enum AppState {
    Menu(MenuState),
    Practice(Session),
    Complete(SessionSummary),
}

/// Top-level state machine: menu, practice session, summary.
pub struct App {
    config: Config,
    source: WordSource,
    tracker: ProgressTracker,
    state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, source: WordSource, tracker: ProgressTracker) -> Self {
        Self {
            config,
            source,
            tracker,
            state: AppState::Menu(MenuState::default()),
            should_quit: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.state {
            AppState::Practice(session) => Some(session),
            _ => None,
        }
    }

    pub fn tracker(&self) -> &ProgressTracker {
        &self.tracker
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn start_session(&mut self, mode: Mode) {
        let session = Session::start(mode, SessionConfig::from(&self.config), &mut self.source);
        self.state = AppState::Practice(session);
    }

    pub fn handle_key(&mut self, key: Key) {
        if key == Key::Interrupt {
            self.should_quit = true;
            return;
        }

        match &mut self.state {
            AppState::Menu(menu) => match menu.on_key(key) {
                MenuAction::Start(mode) => self.start_session(mode),
                MenuAction::Quit => self.should_quit = true,
                MenuAction::None => {}
            },
            AppState::Practice(session) => {
                let event = match key {
                    Key::Esc => session.cancel(),
                    Key::Backspace => session.backspace(),
                    Key::Char(c) => session.type_char(c, &mut self.source, &mut self.tracker),
                    _ => SessionEvent::Ignored,
                };
                match event {
                    SessionEvent::Cancelled => {
                        self.state = AppState::Menu(MenuState::default());
                    }
                    SessionEvent::Completed(summary) => {
                        self.state = AppState::Complete(summary);
                    }
                    SessionEvent::Ignored | SessionEvent::Edited | SessionEvent::Matched { .. } => {}
                }
            }
            AppState::Complete(_) => {
                self.state = AppState::Menu(MenuState::default());
            }
        }
    }

    pub fn view(&mut self) -> View {
        match &self.state {
            AppState::Menu(menu) => {
                let today = self.tracker.today();
                view::menu_view(menu, &today, &self.tracker.alltime_by_mode())
            }
            AppState::Practice(session) => view::session_view(session),
            AppState::Complete(summary) => view::summary_view(summary),
        }
    }
}
