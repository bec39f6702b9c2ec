//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::sync::Arc;

use invitation_core::{
    BackendFactory, EventData, InviteConfig, InviteError, InviteResult, ManualClock,
    PageController, PlayTicket, PlaybackBackend,
};
use parking_lot::Mutex;

/// How a recording backend answers start requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Autoplay {
    /// Leave requests pending; the test reports outcomes
    Pending,
    /// Refuse on the spot, like a browser without a user gesture
    Blocked,
}

#[derive(Debug, Default)]
pub struct PlaybackLog {
    pub loaded: Vec<(String, bool)>,
    pub starts: Vec<PlayTicket>,
    pub pauses: usize,
    pub releases: usize,
}

pub struct RecordingPlayback {
    autoplay: Autoplay,
    log: Arc<Mutex<PlaybackLog>>,
}

impl PlaybackBackend for RecordingPlayback {
    fn load(&mut self, track_url: &str, looping: bool) {
        self.log.lock().loaded.push((track_url.to_string(), looping));
    }

    fn start(&mut self, ticket: PlayTicket) -> InviteResult<()> {
        self.log.lock().starts.push(ticket);
        match self.autoplay {
            Autoplay::Pending => Ok(()),
            Autoplay::Blocked => Err(InviteError::PlaybackRejected(
                "play() failed because the user didn't interact with the document first"
                    .to_string(),
            )),
        }
    }

    fn pause(&mut self) {
        self.log.lock().pauses += 1;
    }

    fn release(&mut self) {
        self.log.lock().releases += 1;
    }
}

/// A page session on a manual clock, plus the logs of every handle it created
pub struct Session {
    pub page: PageController,
    pub clock: ManualClock,
    pub handles: Arc<Mutex<Vec<Arc<Mutex<PlaybackLog>>>>>,
}

impl Session {
    pub fn new(event: EventData, query: &str, autoplay: Autoplay) -> Self {
        let clock = ManualClock::new();
        let handles = Arc::new(Mutex::new(Vec::new()));
        let created = handles.clone();
        let factory: BackendFactory = Box::new(move || {
            let log = Arc::new(Mutex::new(PlaybackLog::default()));
            created.lock().push(log.clone());
            Box::new(RecordingPlayback { autoplay, log }) as Box<dyn PlaybackBackend>
        });
        let page = PageController::new(
            event,
            &InviteConfig::default(),
            query,
            Box::new(clock.clone()),
            factory,
        );
        Self {
            page,
            clock,
            handles,
        }
    }

    pub fn with_gallery(len: usize, autoplay: Autoplay) -> Self {
        let mut event = EventData::default();
        event.gallery_images = (0..len).map(|i| format!("img-{}.jpg", i)).collect();
        Self::new(event, "", autoplay)
    }

    /// Click the seal and let the opening animation finish
    pub fn open(&mut self) -> Option<PlayTicket> {
        let ticket = self.page.open_envelope();
        self.clock.advance(self.page.gate_delay());
        self.page.tick();
        ticket
    }

    pub fn handle(&self, i: usize) -> Arc<Mutex<PlaybackLog>> {
        self.handles.lock()[i].clone()
    }
}
