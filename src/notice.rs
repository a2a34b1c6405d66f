//! Notification banner auto-dismiss.
//!
//! Banners visible at wiring time play an exit animation after a fixed dwell
//! and are then removed once the animation finishes. Timers are fire-and-
//! forget: navigating away simply abandons them.

use gloo_timers::callback::Timeout;
use web_sys::Document;

use crate::consts::{ALERT_EXIT_ANIMATION, ALERT_EXIT_MS, ALERT_SELECTOR, ALERT_VISIBLE_MS};
use crate::dom::{self, best_effort};

pub fn schedule_dismissals(document: &Document) {
    for alert in dom::html_elements(document, ALERT_SELECTOR) {
        Timeout::new(ALERT_VISIBLE_MS, move || {
            best_effort(
                alert.style().set_property("animation", ALERT_EXIT_ANIMATION),
                "alert exit animation",
            );
            Timeout::new(ALERT_EXIT_MS, move || {
                alert.remove();
            })
            .forget();
        })
        .forget();
    }
}
