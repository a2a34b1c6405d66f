//! Circular score gauge animation.
//!
//! The gauge is an SVG circle whose stroke is dashed so that the filled arc
//! length represents score/total. The arc is set shortly after wiring so the
//! initial layout paints the empty gauge first and the CSS stroke transition
//! animates it in. The dash math is pure and clamped: garbage or out-of-range
//! attributes produce an empty or full arc, never a NaN in the style.

#[cfg(test)]
#[path = "gauge_test.rs"]
mod gauge_test;

use gloo_timers::callback::Timeout;
use web_sys::Document;

use crate::consts::{GAUGE_CIRCUMFERENCE, GAUGE_LAYOUT_DELAY_MS, SCORE_FILL_SELECTOR};
use crate::dom::{self, best_effort};

pub fn animate_if_present(document: &Document) {
    let Some(fill) = dom::first_html(document, SCORE_FILL_SELECTOR) else {
        return;
    };
    Timeout::new(GAUGE_LAYOUT_DELAY_MS, move || {
        let score = parse_metric(fill.get_attribute("data-score"));
        let total = parse_metric(fill.get_attribute("data-total"));
        best_effort(
            fill.style()
                .set_property("stroke-dasharray", &dash_pattern(score, total)),
            "score gauge stroke",
        );
    })
    .forget();
}

/// Parse a `data-*` metric; anything unusable becomes NaN and is handled by
/// the clamping in [`dash_value`].
#[must_use]
pub fn parse_metric(attr: Option<String>) -> f64 {
    attr.map_or(f64::NAN, |raw| raw.trim().parse().unwrap_or(f64::NAN))
}

/// Length of the filled arc for a score/total pair, in stroke units.
///
/// The ratio is clamped to `[0, 1]`; non-finite inputs and non-positive
/// totals yield an empty arc.
#[must_use]
pub fn dash_value(score: f64, total: f64) -> f64 {
    if !score.is_finite() || !total.is_finite() || total <= 0.0 {
        return 0.0;
    }
    (score / total).clamp(0.0, 1.0) * GAUGE_CIRCUMFERENCE
}

/// The full `stroke-dasharray` value: filled arc, then the gap.
#[must_use]
pub fn dash_pattern(score: f64, total: f64) -> String {
    format!("{} {GAUGE_CIRCUMFERENCE}", dash_value(score, total))
}
