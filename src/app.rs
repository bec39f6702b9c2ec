use dioxus::prelude::*;
use invitation_core::{BackendFactory, PageController, PlaybackBackend, SystemClock};

use crate::audio::WebviewPlayback;
use crate::context::launch_context;
use crate::pages::Invitation;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Creates the page session, provides it to the tree and ends it when the
/// window goes away.
#[component]
pub fn App() -> Element {
    let launch = use_hook(launch_context);

    let mut page: Signal<PageController> = use_signal({
        let launch = launch.clone();
        move || {
            let factory: BackendFactory =
                Box::new(|| Box::new(WebviewPlayback::new()) as Box<dyn PlaybackBackend>);
            PageController::new(
                launch.event,
                &launch.config,
                &launch.query,
                Box::new(SystemClock),
                factory,
            )
        }
    });

    use_context_provider(|| page);
    use_context_provider(|| launch);

    // Leaving the page releases audio and key bindings on every exit path
    use_drop(move || {
        if let Ok(mut session) = page.try_write() {
            session.end_session();
        }
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Invitation {}
    }
}
