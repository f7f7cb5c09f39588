//! Document classification heuristics

use tracing::debug;
use vendcheck_domain::DocumentClass;

const PROFILE_MARKERS: [&str; 5] = ["uei:", "duns:", "sam.gov", "primary contact", "poc:"];
const PAST_PERFORMANCE_MARKERS: [&str; 5] =
    ["past performance", "customer:", "contract:", "value:", "period:"];
const PRICING_MARKERS: [&str; 5] = ["labor category", "rate", "pricing", "hour", "day"];

/// Classify a document by keyword markers.
///
/// A caller-supplied hint always wins. Otherwise the lower-cased text is
/// scanned against the marker sets in priority order: profile, then past
/// performance, then pricing. First matching class wins; no marker at all
/// means `Unknown`.
pub fn classify(text: &str, type_hint: Option<&str>) -> DocumentClass {
    if let Some(hint) = type_hint {
        let class = DocumentClass::from_hint(hint);
        debug!(hint, %class, "classified by hint");
        return class;
    }

    let lower = text.to_lowercase();
    let class = if PROFILE_MARKERS.iter().any(|m| lower.contains(m)) {
        DocumentClass::Profile
    } else if PAST_PERFORMANCE_MARKERS.iter().any(|m| lower.contains(m)) {
        DocumentClass::PastPerformance
    } else if PRICING_MARKERS.iter().any(|m| lower.contains(m)) {
        DocumentClass::Pricing
    } else {
        DocumentClass::Unknown
    };
    debug!(%class, "classified by markers");
    class
}
