//! The fixed mapping from a sentiment category to how a result is presented.
//!
//! Keeping it as a static table means the renderer never branches on raw
//! strings: it looks an entry up, and an unknown sentiment simply has no
//! entry, which leaves the presentation blank.

use crate::core::models::Sentiment;

/// Icon, badge style and confidence-bar style for one sentiment.
///
/// The default value (all three empty) is what an unmapped sentiment gets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Presentation {
    /// Icon identifier (e.g. "smile").
    pub icon: &'static str,
    /// Badge style class, named after the sentiment it conveys.
    pub badge_class: &'static str,
    /// Confidence-bar style class (e.g. "success").
    pub bar_class: &'static str,
}

struct PresentationEntry {
    sentiment: Sentiment,
    presentation: Presentation,
}

static PRESENTATIONS: &[PresentationEntry] = &[
    PresentationEntry {
        sentiment: Sentiment::Positive,
        presentation: Presentation { icon: "smile", badge_class: "positive", bar_class: "success" },
    },
    PresentationEntry {
        sentiment: Sentiment::Negative,
        presentation: Presentation { icon: "frown", badge_class: "negative", bar_class: "danger" },
    },
    PresentationEntry {
        sentiment: Sentiment::Neutral,
        presentation: Presentation { icon: "meh", badge_class: "neutral", bar_class: "warning" },
    },
];

/// Looks up the presentation for a typed sentiment. Callers holding an
/// unknown raw value use `Presentation::default()` instead.
pub fn presentation_for(sentiment: Sentiment) -> Presentation {
    PRESENTATIONS
        .iter()
        .find(|entry| entry.sentiment == sentiment)
        .map(|entry| entry.presentation)
        .unwrap_or_default()
}
