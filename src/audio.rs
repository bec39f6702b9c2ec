//! Webview audio backend.
//!
//! Plays the track through an `Audio` object living in the webview. A start
//! request stores the browser's `play()` promise under its ticket;
//! [`watch_start`] awaits that promise and reports the outcome back to the
//! page controller. The report happens in a spawned task, never while the
//! controller is borrowed.

use dioxus::prelude::*;
use invitation_core::{InviteResult, PageController, PlayTicket, PlaybackBackend};

/// `PlaybackBackend` over a webview `Audio` element
#[derive(Debug, Default)]
pub struct WebviewPlayback {
    loaded: bool,
}

impl WebviewPlayback {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlaybackBackend for WebviewPlayback {
    fn load(&mut self, track_url: &str, looping: bool) {
        // JSON string literal doubles as a safely quoted JS string
        let src = serde_json::to_string(track_url).unwrap_or_else(|_| "\"\"".to_string());
        document::eval(&format!(
            r#"
            if (window.__inviteAudio) {{ window.__inviteAudio.pause(); }}
            window.__inviteAudio = new Audio({src});
            window.__inviteAudio.loop = {looping};
            window.__invitePlays = window.__invitePlays || {{}};
            "#
        ));
        self.loaded = true;
    }

    fn start(&mut self, ticket: PlayTicket) -> InviteResult<()> {
        document::eval(&format!(
            r#"
            if (window.__inviteAudio) {{
                window.__invitePlays[{id}] = window.__inviteAudio.play();
            }} else {{
                window.__invitePlays[{id}] = Promise.reject(new Error("audio released"));
            }}
            "#,
            id = ticket.as_u64()
        ));
        Ok(())
    }

    fn pause(&mut self) {
        if self.loaded {
            document::eval("if (window.__inviteAudio) { window.__inviteAudio.pause(); }");
        }
    }

    fn release(&mut self) {
        if self.loaded {
            document::eval(
                r#"
                if (window.__inviteAudio) {
                    window.__inviteAudio.pause();
                    window.__inviteAudio.removeAttribute("src");
                    window.__inviteAudio.load();
                    window.__inviteAudio = null;
                }
                "#,
            );
            self.loaded = false;
        }
    }
}

/// Wait for the outcome of `ticket`'s start request and report it.
pub fn watch_start(mut page: Signal<PageController>, ticket: PlayTicket) {
    spawn(async move {
        let script = format!(
            r#"
            const pending = (window.__invitePlays || {{}})[{id}];
            delete (window.__invitePlays || {{}})[{id}];
            if (!pending) {{ return "no pending play request"; }}
            try {{
                await pending;
                return true;
            }} catch (e) {{
                return String(e);
            }}
            "#,
            id = ticket.as_u64()
        );

        match document::eval(&script).await {
            Ok(serde_json::Value::Bool(true)) => page.write().playback_confirmed(ticket),
            Ok(reason) => page.write().playback_rejected(ticket, reason),
            Err(e) => page.write().playback_rejected(ticket, format!("{:?}", e)),
        }
    });
}
