//! Terminal capability probe.
//!
//! Picks an initial render quality from the environment. The probe is a
//! heuristic, not a guarantee; callers degrade through
//! [`RenderQuality::fallback_chain`] if the recommendation turns out too
//! optimistic.

use gridatlas_types::RenderQuality;

/// Recommend a render quality from `TERM` and the locale variables.
pub fn recommended_quality() -> RenderQuality {
    let term = std::env::var("TERM").ok();
    let locale = std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LC_CTYPE"))
        .or_else(|_| std::env::var("LANG"))
        .ok();
    classify(term.as_deref(), locale.as_deref())
}

/// Pure classification so the heuristic is testable without touching the
/// process environment.
pub fn classify(term: Option<&str>, locale: Option<&str>) -> RenderQuality {
    let term = term.unwrap_or("");
    if term == "dumb" || term.is_empty() {
        return RenderQuality::Ascii;
    }

    let utf8 = locale
        .map(|l| {
            let l = l.to_ascii_lowercase();
            l.contains("utf-8") || l.contains("utf8")
        })
        .unwrap_or(false);
    if !utf8 {
        return RenderQuality::Ascii;
    }

    // The bare linux console font usually lacks the sextant block but does
    // carry the legacy quadrant and shade glyphs.
    if term == "linux" {
        return RenderQuality::AsciiBlock;
    }

    RenderQuality::Teletext
}
