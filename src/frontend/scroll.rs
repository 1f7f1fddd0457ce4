use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routing::{ScrollReset, Viewport};

/// The browser window.
pub struct WindowViewport;

impl Viewport for WindowViewport {
    fn scroll_to_top(&self) {
        window().scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Scrolls the window back to the top whenever the route's pathname changes.
/// Effects only run in the browser, so this renders nothing during SSR.
#[component]
pub fn ScrollToTop() -> impl IntoView {
    let location = use_location();
    let tracker = StoredValue::new(ScrollReset::new());

    Effect::new(move |_| {
        let path = location.pathname.get();
        tracker.update_value(|tracker| {
            if tracker.on_navigate(&path, &WindowViewport) {
                log::debug!("scroll reset for {}", path);
            }
        });
    });
}
