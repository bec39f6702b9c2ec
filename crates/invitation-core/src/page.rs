//! Page controller - owns all interactive state of one invitation session.
//!
//! The UI layer forwards user input here and renders from the accessors;
//! it never mutates the pieces directly.
//!
//! ## Usage
//!
//! ```ignore
//! let mut page = PageController::new(
//!     EventData::default(),
//!     &InviteConfig::default(),
//!     "?k=Anna",
//!     Box::new(SystemClock),
//!     Box::new(|| Box::new(MyPlayback::new()) as Box<dyn PlaybackBackend>),
//! );
//!
//! page.open_envelope();          // guest clicks the seal
//! // ... after the opening delay
//! page.tick();                   // gate opens, page becomes interactive
//! page.activate_gallery_item(2); // lightbox on image 2
//! page.handle_key(NavKey::ArrowRight);
//! ```

use std::time::Duration;

use crate::audio::{AudioController, PlayTicket, PlaybackBackend};
use crate::clock::Clock;
use crate::config::InviteConfig;
use crate::event::EventData;
use crate::gallery::GalleryCursor;
use crate::gate::{EntryGate, GatePhase};
use crate::query::resolve_guest_name;

/// Creates a fresh playback handle (once per track)
pub type BackendFactory = Box<dyn FnMut() -> Box<dyn PlaybackBackend>>;

/// Keys the lightbox responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    Escape,
}

impl NavKey {
    /// Map a DOM `KeyboardEvent.key` name
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(NavKey::ArrowLeft),
            "ArrowRight" => Some(NavKey::ArrowRight),
            "Escape" => Some(NavKey::Escape),
            _ => None,
        }
    }
}

/// Composes event data, gallery cursor, audio and entry gate.
pub struct PageController {
    event: EventData,
    guest_name: Option<String>,
    cursor: GalleryCursor,
    audio: AudioController,
    gate: EntryGate,
    clock: Box<dyn Clock>,
    make_backend: BackendFactory,
    keys_registered: bool,
    session_active: bool,
}

impl PageController {
    /// Start a page session.
    ///
    /// `query` is the incoming query string (or full URL) the guest name is
    /// read from. The audio handle is created here; nothing plays until the
    /// envelope is opened.
    pub fn new(
        event: EventData,
        config: &InviteConfig,
        query: &str,
        clock: Box<dyn Clock>,
        mut make_backend: BackendFactory,
    ) -> Self {
        let guest_name = resolve_guest_name(query, &config.guest_params);
        let audio = AudioController::initialize(make_backend(), event.music_url.clone());

        tracing::info!(
            guest = guest_name.as_deref().unwrap_or(""),
            images = event.gallery_len(),
            "Invitation session started"
        );

        Self {
            cursor: GalleryCursor::new(event.gallery_len()),
            event,
            guest_name,
            audio,
            gate: EntryGate::new(config.gate_delay()),
            clock,
            make_backend,
            keys_registered: false,
            session_active: true,
        }
    }

    pub fn event(&self) -> &EventData {
        &self.event
    }

    /// Display-only guest name; `None` when the link carried none
    pub fn guest_name(&self) -> Option<&str> {
        self.guest_name.as_deref()
    }

    pub fn gate_phase(&self) -> GatePhase {
        self.gate.phase()
    }

    /// Whether the page behind the envelope is visible and interactive
    pub fn content_visible(&self) -> bool {
        self.gate.is_open()
    }

    pub fn gate_delay(&self) -> Duration {
        self.gate.delay()
    }

    /// Time until [`tick`](Self::tick) will open the gate, while opening
    pub fn gate_remaining(&self) -> Option<Duration> {
        self.gate.remaining(self.clock.now())
    }

    pub fn is_playing(&self) -> bool {
        self.audio.is_playing()
    }

    pub fn audio(&self) -> &AudioController {
        &self.audio
    }

    pub fn lightbox_index(&self) -> Option<usize> {
        self.cursor.current()
    }

    /// Index and reference of the enlarged image
    pub fn lightbox_image(&self) -> Option<(usize, &str)> {
        self.cursor
            .current()
            .and_then(|i| self.event.gallery_images.get(i).map(|img| (i, img.as_str())))
    }

    /// Whether the lightbox key bindings are currently registered
    pub fn keys_registered(&self) -> bool {
        self.keys_registered
    }

    pub fn session_active(&self) -> bool {
        self.session_active
    }

    /// The guest clicked the seal. The first call starts the gate and asks
    /// for music; later calls do nothing.
    pub fn open_envelope(&mut self) -> Option<PlayTicket> {
        if !self.session_active || !self.gate.trigger(self.clock.now()) {
            return None;
        }
        self.audio.play()
    }

    /// Let timed transitions catch up. Returns `true` when the gate opened.
    pub fn tick(&mut self) -> bool {
        self.gate.advance(self.clock.now())
    }

    /// Music button
    pub fn toggle_music(&mut self) -> Option<PlayTicket> {
        if !self.session_active {
            return None;
        }
        self.audio.toggle()
    }

    pub fn playback_confirmed(&mut self, ticket: PlayTicket) {
        self.audio.playback_confirmed(ticket);
    }

    pub fn playback_rejected(&mut self, ticket: PlayTicket, reason: impl std::fmt::Display) {
        self.audio.playback_rejected(ticket, reason);
    }

    /// A gallery thumbnail was selected. Ignored before the page is open.
    pub fn activate_gallery_item(&mut self, index: usize) {
        if !self.session_active || !self.content_visible() {
            return;
        }
        self.cursor.open(index);
        if self.cursor.is_open() {
            self.register_keys();
        }
    }

    pub fn next_image(&mut self) {
        self.cursor.next();
    }

    pub fn previous_image(&mut self) {
        self.cursor.previous();
    }

    /// Close button, or a click outside the enlarged image
    pub fn dismiss_lightbox(&mut self) {
        self.cursor.close();
        self.deregister_keys();
    }

    /// Route a key press. Returns `true` when the lightbox consumed it.
    pub fn handle_key(&mut self, key: NavKey) -> bool {
        if !self.keys_registered {
            return false;
        }
        match key {
            NavKey::ArrowLeft => self.previous_image(),
            NavKey::ArrowRight => self.next_image(),
            NavKey::Escape => self.dismiss_lightbox(),
        }
        true
    }

    /// Swap in edited event data.
    ///
    /// The lightbox survives when its image still exists. A new music
    /// reference replaces the audio handle, resuming if music was playing.
    pub fn apply_edit(&mut self, event: EventData) -> Option<PlayTicket> {
        self.cursor.retarget(event.gallery_len());
        if !self.cursor.is_open() {
            self.deregister_keys();
        }

        let music_changed = event.music_url != self.event.music_url;
        self.event = event;
        tracing::info!(music_changed, "Event data replaced");

        if !music_changed || !self.session_active {
            return None;
        }

        let was_playing = self.audio.is_playing();
        let last_ticket = self.audio.last_ticket();
        self.audio.teardown();
        self.audio = AudioController::initialize_after(
            (self.make_backend)(),
            self.event.music_url.clone(),
            last_ticket,
        );
        if was_playing {
            self.audio.play()
        } else {
            None
        }
    }

    /// Release everything the session holds. Idempotent; also runs on drop.
    pub fn end_session(&mut self) {
        if !self.session_active {
            return;
        }
        self.cursor.close();
        self.deregister_keys();
        self.audio.teardown();
        self.session_active = false;
        tracing::info!("Invitation session ended");
    }

    fn register_keys(&mut self) {
        if !self.keys_registered {
            self.keys_registered = true;
            tracing::trace!("Lightbox key bindings registered");
        }
    }

    fn deregister_keys(&mut self) {
        if self.keys_registered {
            self.keys_registered = false;
            tracing::trace!("Lightbox key bindings removed");
        }
    }
}

impl Drop for PageController {
    fn drop(&mut self) {
        self.end_session();
    }
}

impl std::fmt::Debug for PageController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageController")
            .field("guest_name", &self.guest_name)
            .field("gate", &self.gate.phase())
            .field("lightbox", &self.cursor.current())
            .field("audio", &self.audio)
            .field("keys_registered", &self.keys_registered)
            .field("session_active", &self.session_active)
            .finish()
    }
}
