use std::io;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent};

use crate::app::App;
use crate::input::Key;

/// What the game loop reacts to. Raw terminal events are mapped to [`Key`]
/// before they get here; anything without a mapping never arrives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Key(Key),
    Resize,
    Tick,
}

pub trait GameEventSource: Send + 'static {
    /// Waits up to `timeout` for the next event.
    fn recv_timeout(&self, timeout: Duration) -> Result<GameEvent, RecvTimeoutError>;
}

/// Reads the real terminal on a background thread. The thread only forwards
/// events; all game state stays on the caller's thread.
pub struct CrosstermEventSource {
    rx: Receiver<GameEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            let event = match event::read() {
                Ok(CtEvent::Key(raw)) => match Key::from_event(raw) {
                    Some(key) => GameEvent::Key(key),
                    None => continue,
                },
                Ok(CtEvent::Resize(_, _)) => GameEvent::Resize,
                Ok(_) => continue,
                Err(err) => {
                    tracing::error!(%err, "terminal event stream failed");
                    break;
                }
            };
            if tx.send(event).is_err() {
                break;
            }
        });

        Self { rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEventSource for CrosstermEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<GameEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

pub trait Ticker: Send + Sync + 'static {
    fn interval(&self) -> Duration;
}

#[derive(Clone, Copy, Debug)]
pub struct FixedTicker {
    interval: Duration,
}

impl FixedTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Ticker for FixedTicker {
    fn interval(&self) -> Duration {
        self.interval
    }
}

/// Scripted input for headless runs; pairs with [`TestEventSource`].
#[derive(Clone)]
pub struct TestInput {
    tx: Sender<GameEvent>,
}

impl TestInput {
    pub fn key(&self, key: Key) -> &Self {
        let _ = self.tx.send(GameEvent::Key(key));
        self
    }

    /// Sends every character of `text` as a key press.
    pub fn keys(&self, text: &str) -> &Self {
        for c in text.chars() {
            self.key(Key::Char(c));
        }
        self
    }

    pub fn resize(&self) -> &Self {
        let _ = self.tx.send(GameEvent::Resize);
        self
    }
}

pub struct TestEventSource {
    rx: Receiver<GameEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<GameEvent>) -> Self {
        Self { rx }
    }

    pub fn channel() -> (TestInput, Self) {
        let (tx, rx) = mpsc::channel();
        (TestInput { tx }, Self::new(rx))
    }
}

impl GameEventSource for TestEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<GameEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

pub struct Runner<E: GameEventSource, T: Ticker> {
    event_source: E,
    ticker: T,
}

impl<E: GameEventSource, T: Ticker> Runner<E, T> {
    pub fn new(event_source: E, ticker: T) -> Self {
        Self {
            event_source,
            ticker,
        }
    }

    /// Next event, or `Tick` once the interval passes quietly. A source that
    /// has hung up also ticks.
    pub fn step(&self) -> GameEvent {
        self.event_source
            .recv_timeout(self.ticker.interval())
            .unwrap_or(GameEvent::Tick)
    }

    /// Feeds keys to `app` until it asks to quit or the source hangs up.
    /// `redraw` runs once up front and again after every key or resize.
    pub fn run<F>(&self, app: &mut App, mut redraw: F) -> io::Result<()>
    where
        F: FnMut(&mut App) -> io::Result<()>,
    {
        redraw(app)?;
        while !app.should_quit() {
            match self.event_source.recv_timeout(self.ticker.interval()) {
                Ok(GameEvent::Key(key)) => app.handle_key(key),
                Ok(GameEvent::Resize) => {}
                Ok(GameEvent::Tick) | Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => {
                    tracing::debug!("event source closed");
                    break;
                }
            }
            redraw(app)?;
        }
        Ok(())
    }
}
