//! Markup contract and shared style values for the quiz pages.

// ── Markup contract ─────────────────────────────────────────────

/// Dismissable notification banners rendered by the messages framework.
pub const ALERT_SELECTOR: &str = ".alert";

/// One quiz question with its answer choices.
pub const QUESTION_CARD_SELECTOR: &str = ".question-card";

/// Card-like blocks that get the scroll-in entrance animation.
pub const CARD_SELECTOR: &str = ".question-card, .review-card";

/// One selectable choice inside a question card.
pub const ANSWER_OPTION_SELECTOR: &str = ".answer-option";

/// Wrapper around the submit button, hidden in review mode.
pub const SUBMIT_SECTION_SELECTOR: &str = ".submit-section";

/// Circular score gauge arc, carrying `data-score` / `data-total`.
pub const SCORE_FILL_SELECTOR: &str = ".score-fill";

pub const RADIO_SELECTOR: &str = "input[type=\"radio\"]";
pub const CHECKED_RADIO_SELECTOR: &str = "input[type=\"radio\"]:checked";

pub const RETAKE_MODAL_ID: &str = "retakeModal";
pub const MODAL_ACTIVE_CLASS: &str = "active";

/// Host globals injected by the server template in review mode only.
pub const PREVIOUS_ANSWERS_GLOBAL: &str = "previousAnswers";
pub const HAS_PREVIOUS_GLOBAL: &str = "hasPrevious";

// ── Timing ──────────────────────────────────────────────────────

/// How long a notification banner stays visible before its exit animation.
pub const ALERT_VISIBLE_MS: u32 = 5_000;

/// Exit animation length; the banner is removed once it elapses.
pub const ALERT_EXIT_MS: u32 = 300;

/// Layout-settle delay before the score gauge arc is animated in.
pub const GAUGE_LAYOUT_DELAY_MS: u32 = 100;

// ── Style values ────────────────────────────────────────────────

pub const ALERT_EXIT_ANIMATION: &str = "slideOut 0.3s ease-out";
pub const CARD_ENTER_ANIMATION: &str = "fadeInUp 0.5s ease-out";

/// Visibility fraction at which a card counts as entered.
pub const CARD_VISIBILITY_THRESHOLD: f64 = 0.1;

/// Bottom margin so cards animate slightly before full entry.
pub const CARD_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Circumference of the gauge's circular stroke (2π × r = 45, rounded).
pub const GAUGE_CIRCUMFERENCE: f64 = 283.0;

/// Left border accent applied to a question card once answered.
pub const ANSWERED_CARD_ACCENT: &str = "4px solid #10b981";

pub const CORRECT_BACKGROUND: &str = "#d1fae5";
pub const CORRECT_BORDER: &str = "#10b981";
pub const WRONG_BACKGROUND: &str = "#fee2e2";
pub const WRONG_BORDER: &str = "#ef4444";
