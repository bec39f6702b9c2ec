//! Background music controller.
//!
//! Wraps the single playback handle of a page session. Starting playback is
//! a request the platform may refuse (autoplay policies), either right away
//! or later. Each request gets a [`PlayTicket`]; the backend reports the
//! outcome against that ticket and anything older than the latest request is
//! ignored.

use std::fmt;

use crate::error::InviteResult;

/// Identifies one playback start request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayTicket(u64);

impl PlayTicket {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "play#{}", self.0)
    }
}

/// A platform audio handle.
///
/// Implemented by the desktop shell (a webview `<audio>` element) and by
/// test fakes.
pub trait PlaybackBackend {
    /// Bind the handle to a track. Called once, before anything else.
    fn load(&mut self, track_url: &str, looping: bool);

    /// Ask the platform to start playing.
    ///
    /// `Err` means the request was refused synchronously. An `Ok` request may
    /// still be refused later, reported via
    /// [`AudioController::playback_rejected`].
    fn start(&mut self, ticket: PlayTicket) -> InviteResult<()>;

    /// Stop playing. Must tolerate a start request that is still pending.
    fn pause(&mut self);

    /// Drop the underlying resource. No other call follows.
    fn release(&mut self);
}

/// Owns the session's playback handle and the `is_playing` flag.
pub struct AudioController {
    handle: Option<Box<dyn PlaybackBackend>>,
    track_url: String,
    is_playing: bool,
    next_ticket: u64,
    pending: Option<PlayTicket>,
}

impl AudioController {
    /// Create the session's handle, set up for looped playback. Nothing plays yet.
    pub fn initialize(backend: Box<dyn PlaybackBackend>, track_url: impl Into<String>) -> Self {
        Self::initialize_after(backend, track_url, 0)
    }

    /// Like [`initialize`](Self::initialize), but ticket numbering continues
    /// after `last_ticket`. Used when a handle replaces an earlier one, so
    /// late outcomes for the old handle can never match a new ticket.
    pub fn initialize_after(
        mut backend: Box<dyn PlaybackBackend>,
        track_url: impl Into<String>,
        last_ticket: u64,
    ) -> Self {
        let track_url = track_url.into();
        backend.load(&track_url, true);
        tracing::debug!(track = %track_url, "Audio handle initialized");

        Self {
            handle: Some(backend),
            track_url,
            is_playing: false,
            next_ticket: last_ticket,
            pending: None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Whether the handle is still alive (false after [`teardown`](Self::teardown))
    pub fn is_initialized(&self) -> bool {
        self.handle.is_some()
    }

    /// Whether a start request is awaiting its outcome
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn track_url(&self) -> &str {
        &self.track_url
    }

    /// Number of the most recent ticket issued (0 before any request)
    pub fn last_ticket(&self) -> u64 {
        self.next_ticket
    }

    /// Request playback. Sets `is_playing` optimistically.
    ///
    /// Returns the ticket the backend will report against, or `None` once
    /// the handle has been released. A synchronous refusal is logged and
    /// reverts the flag before returning.
    pub fn play(&mut self) -> Option<PlayTicket> {
        let handle = self.handle.as_mut()?;

        self.next_ticket += 1;
        let ticket = PlayTicket(self.next_ticket);
        self.pending = Some(ticket);
        self.is_playing = true;

        if let Err(e) = handle.start(ticket) {
            self.playback_rejected(ticket, e);
        }
        Some(ticket)
    }

    /// Stop playback. Always succeeds; any pending request becomes stale.
    pub fn pause(&mut self) {
        if let Some(handle) = self.handle.as_mut() {
            handle.pause();
        }
        self.pending = None;
        self.is_playing = false;
    }

    /// Pause when playing, play otherwise
    pub fn toggle(&mut self) -> Option<PlayTicket> {
        if self.is_playing {
            self.pause();
            None
        } else {
            self.play()
        }
    }

    /// The backend started playing for `ticket`.
    pub fn playback_confirmed(&mut self, ticket: PlayTicket) {
        if self.pending == Some(ticket) {
            self.pending = None;
            tracing::debug!(%ticket, "Playback started");
        } else if !self.is_playing {
            // A start that outlived a pause: keep the handle silent.
            if let Some(handle) = self.handle.as_mut() {
                handle.pause();
            }
            tracing::debug!(%ticket, "Stale playback start silenced");
        }
    }

    /// The backend refused `ticket`. Logged and swallowed.
    pub fn playback_rejected(&mut self, ticket: PlayTicket, reason: impl fmt::Display) {
        if self.pending != Some(ticket) {
            tracing::debug!(%ticket, %reason, "Ignoring stale playback rejection");
            return;
        }
        self.pending = None;
        self.is_playing = false;
        tracing::warn!(%ticket, %reason, "Autoplay blocked");
    }

    /// Pause and release the handle. Idempotent; also runs on drop.
    pub fn teardown(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.pause();
            handle.release();
            tracing::debug!(track = %self.track_url, "Audio handle released");
        }
        self.pending = None;
        self.is_playing = false;
    }
}

impl Drop for AudioController {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl fmt::Debug for AudioController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioController")
            .field("track_url", &self.track_url)
            .field("initialized", &self.handle.is_some())
            .field("is_playing", &self.is_playing)
            .field("pending", &self.pending)
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;
    use crate::error::InviteError;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum StartMode {
        /// Requests stay pending until the test reports an outcome
        Defer,
        /// Requests are refused synchronously
        Refuse,
    }

    #[derive(Debug, Default)]
    pub struct Calls {
        pub loads: Vec<(String, bool)>,
        pub starts: Vec<PlayTicket>,
        pub pauses: usize,
        pub releases: usize,
    }

    pub struct FakePlayback {
        pub mode: StartMode,
        pub calls: Arc<Mutex<Calls>>,
    }

    impl FakePlayback {
        pub fn new(mode: StartMode) -> (Box<dyn PlaybackBackend>, Arc<Mutex<Calls>>) {
            let calls = Arc::new(Mutex::new(Calls::default()));
            let backend = Self {
                mode,
                calls: calls.clone(),
            };
            (Box::new(backend), calls)
        }
    }

    impl PlaybackBackend for FakePlayback {
        fn load(&mut self, track_url: &str, looping: bool) {
            self.calls.lock().loads.push((track_url.to_string(), looping));
        }

        fn start(&mut self, ticket: PlayTicket) -> InviteResult<()> {
            self.calls.lock().starts.push(ticket);
            match self.mode {
                StartMode::Defer => Ok(()),
                StartMode::Refuse => Err(InviteError::PlaybackRejected(
                    "NotAllowedError".to_string(),
                )),
            }
        }

        fn pause(&mut self) {
            self.calls.lock().pauses += 1;
        }

        fn release(&mut self) {
            self.calls.lock().releases += 1;
        }
    }
}
