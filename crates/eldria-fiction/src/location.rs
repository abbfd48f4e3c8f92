//! Location identifiers.
//!
//! Games name their locations with a fieldless enum implementing
//! [`Location`]. The engine is generic over it, so a typo in a navigation
//! target is a compile error rather than a silently ignored string.

use std::fmt::Debug;
use std::hash::Hash;

use strsim::jaro_winkler;

use crate::error::{FictionError, FictionResult};

/// Minimum similarity score for a key suggestion (0.0-1.0).
const SUGGEST_THRESHOLD: f64 = 0.7;

/// A location identifier.
pub trait Location: Copy + Eq + Hash + Debug + 'static {
    /// Every location of the game, in display order.
    const ALL: &'static [Self];

    /// Stable lowercase key, e.g. `"forest_path"`.
    fn key(self) -> &'static str;

    /// Player-facing title, e.g. `"Forest Path"`.
    fn title(self) -> &'static str;

    /// Look a location up by key (case-insensitive).
    fn parse(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|loc| loc.key().eq_ignore_ascii_case(key))
    }

    /// Look a location up by key, suggesting the closest key on failure.
    fn resolve(key: &str) -> FictionResult<Self> {
        Self::parse(key).ok_or_else(|| FictionError::UnknownKey {
            key: key.to_string(),
            suggestion: suggest::<Self>(key),
        })
    }
}

/// The known key most similar to `input`, if any is similar enough.
pub fn suggest<L: Location>(input: &str) -> Option<&'static str> {
    let input_lower = input.trim().to_lowercase();
    L::ALL
        .iter()
        .map(|loc| (loc.key(), jaro_winkler(&input_lower, loc.key())))
        .filter(|(_, score)| *score >= SUGGEST_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(key, _)| key)
}
