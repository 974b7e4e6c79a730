use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::models::{Continents, Countries};

pub enum Event {
    Key(KeyEvent),
    Tick,
}

/// Completion messages from the fire-and-forget catalog fetches.
/// Each carries the resolved dictionary; `None` marks a fetch that
/// succeeded with an empty payload. A failed fetch sends nothing.
#[derive(Debug)]
pub enum DataEvent {
    ContinentsLoaded(Option<Continents>),
    CountriesLoaded(Option<Countries>),
}

pub struct EventHandler {
    #[allow(dead_code)]
    sender: mpsc::Sender<Event>,
    receiver: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: u64) -> Self {
        let (sender, receiver) = mpsc::channel();
        let sender_clone = sender.clone();

        thread::spawn(move || {
            loop {
                match event::poll(Duration::from_millis(tick_rate)) {
                    Ok(true) => {
                        if let Ok(CrosstermEvent::Key(key)) = event::read() {
                            if key.kind == KeyEventKind::Press {
                                if sender_clone.send(Event::Key(key)).is_err() {
                                    break;
                                }
                            }
                        }
                    }
                    Ok(false) => {}
                    Err(_) => {}
                }
                if sender_clone.send(Event::Tick).is_err() {
                    break;
                }
            }
        });

        Self { sender, receiver }
    }

    pub fn recv(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}
