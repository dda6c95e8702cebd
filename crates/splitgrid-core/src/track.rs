//! One-dimensional track-size model.
//!
//! A [`TrackList`] is an ordered sequence of opaque size tokens (`"1fr"`,
//! `"37.5%"`, `"min-content"`), one per pane, joined on serialization by a
//! fixed splitter-track token. Keeping the tokens as strings lets the same
//! model carry fixed, proportional, and percentage sizes without a tagged
//! union; numeric semantics live only in the resize path that needs them.

use serde::{Deserialize, Serialize};

/// Default size token assigned to a newly created pane track.
pub const DEFAULT_TRACK: &str = "1fr";

/// Default size token for the splitter tracks between panes.
pub const SPLITTER_TRACK: &str = "min-content";

/// Ordered list of per-pane size tokens.
///
/// Index arguments are signed: any negative index means "the front" on
/// insertion and "out of range" everywhere else, which is how callers express
/// first/last-pane edge handling without branching on length themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackList {
    splitter_track: String,
    entries: Vec<String>,
}

impl TrackList {
    /// Empty track list with the default splitter token.
    #[must_use]
    pub fn new() -> Self {
        Self::with_splitter_track(SPLITTER_TRACK)
    }

    /// Empty track list with a custom splitter token.
    #[must_use]
    pub fn with_splitter_track(token: impl Into<String>) -> Self {
        Self {
            splitter_track: token.into(),
            entries: Vec::new(),
        }
    }

    /// Track list seeded from a serialized template.
    ///
    /// A blank template yields an empty list.
    #[must_use]
    pub fn from_template(template: &str) -> Self {
        let mut list = Self::new();
        list.parse(template);
        list
    }

    /// The token that separates pane tracks in the serialized form.
    #[must_use]
    pub fn splitter_track(&self) -> &str {
        &self.splitter_track
    }

    /// Number of pane tracks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list holds no tracks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert `value` at `index`.
    ///
    /// A negative index of any magnitude prepends; an index at or past the
    /// end appends; anything else inserts before the existing entry. Always
    /// succeeds.
    pub fn add(&mut self, index: isize, value: &str) {
        let at = if index < 0 {
            0
        } else {
            (index as usize).min(self.entries.len())
        };
        self.entries.insert(at, value.to_string());
    }

    /// Remove the entry at `index`, reporting whether anything was removed.
    ///
    /// Out-of-range indexes (including negative) are a no-op.
    pub fn remove(&mut self, index: isize) -> bool {
        match self.slot(index) {
            Some(at) => {
                self.entries.remove(at);
                true
            }
            None => false,
        }
    }

    /// Read the entry at `index`.
    #[must_use]
    pub fn get(&self, index: isize) -> Option<&str> {
        self.slot(index).map(|at| self.entries[at].as_str())
    }

    /// Overwrite the entry at `index`, reporting whether a write happened.
    ///
    /// Out-of-range indexes (including negative) leave the list untouched.
    pub fn set(&mut self, index: isize, value: &str) -> bool {
        match self.slot(index) {
            Some(at) => {
                self.entries[at] = value.to_string();
                true
            }
            None => false,
        }
    }

    /// Replace all entries by splitting `template` on the splitter token.
    ///
    /// A blank or whitespace-only template leaves the current entries
    /// untouched, so re-parsing an empty style attribute never destroys
    /// in-memory state.
    pub fn parse(&mut self, template: &str) {
        if template.trim().is_empty() {
            return;
        }
        self.entries = template
            .split(&self.splitter_track)
            .map(|token| token.trim().to_string())
            .collect();
    }

    /// Serialize to a template string: entries joined by `" <token> "`.
    ///
    /// An empty list builds to the empty string.
    #[must_use]
    pub fn build(&self) -> String {
        self.entries.join(&format!(" {} ", self.splitter_track))
    }

    fn slot(&self, index: isize) -> Option<usize> {
        if index < 0 {
            return None;
        }
        let at = index as usize;
        (at < self.entries.len()).then_some(at)
    }
}

impl Default for TrackList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ---- Construction ----

    #[test]
    fn new_is_empty() {
        let tracks = TrackList::new();
        assert!(tracks.is_empty());
        assert_eq!(tracks.len(), 0);
        assert_eq!(tracks.splitter_track(), SPLITTER_TRACK);
    }

    #[test]
    fn from_template_splits_on_splitter_token() {
        let tracks = TrackList::from_template("1fr min-content 37.5% min-content 1fr");
        assert_eq!(tracks.len(), 3);
        assert_eq!(tracks.get(0), Some("1fr"));
        assert_eq!(tracks.get(1), Some("37.5%"));
        assert_eq!(tracks.get(2), Some("1fr"));
    }

    #[test]
    fn from_blank_template_is_empty() {
        assert!(TrackList::from_template("").is_empty());
        assert!(TrackList::from_template("   ").is_empty());
    }

    #[test]
    fn custom_splitter_token() {
        let mut tracks = TrackList::with_splitter_track("8px");
        tracks.parse("1fr 8px 2fr");
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks.build(), "1fr 8px 2fr");
    }

    // ---- add ----

    #[test]
    fn add_negative_index_prepends() {
        let mut tracks = TrackList::new();
        tracks.add(0, "a");
        tracks.add(-1, "b");
        tracks.add(-99, "c");
        assert_eq!(tracks.get(0), Some("c"));
        assert_eq!(tracks.get(1), Some("b"));
        assert_eq!(tracks.get(2), Some("a"));
    }

    #[test]
    fn add_past_end_appends() {
        let mut tracks = TrackList::new();
        tracks.add(10, "a");
        tracks.add(10, "b");
        assert_eq!(tracks.get(0), Some("a"));
        assert_eq!(tracks.get(1), Some("b"));
    }

    #[test]
    fn add_interior_inserts_before() {
        let mut tracks = TrackList::from_template("a min-content c");
        tracks.add(1, "b");
        assert_eq!(tracks.build(), "a min-content b min-content c");
    }

    // ---- remove ----

    #[test]
    fn remove_in_range() {
        let mut tracks = TrackList::from_template("a min-content b");
        assert!(tracks.remove(0));
        assert_eq!(tracks.build(), "b");
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut tracks = TrackList::from_template("a min-content b");
        assert!(!tracks.remove(2));
        assert!(!tracks.remove(-1));
        assert_eq!(tracks.len(), 2);
    }

    #[test]
    fn remove_from_empty_is_noop() {
        let mut tracks = TrackList::new();
        assert!(!tracks.remove(0));
    }

    // ---- get / set ----

    #[test]
    fn get_out_of_range_is_none() {
        let tracks = TrackList::from_template("1fr");
        assert_eq!(tracks.get(1), None);
        assert_eq!(tracks.get(-1), None);
    }

    #[test]
    fn set_in_range_overwrites() {
        let mut tracks = TrackList::from_template("1fr min-content 1fr");
        assert!(tracks.set(1, "25%"));
        assert_eq!(tracks.get(1), Some("25%"));
    }

    #[test]
    fn set_out_of_range_is_noop() {
        let mut tracks = TrackList::from_template("1fr");
        assert!(!tracks.set(1, "25%"));
        assert!(!tracks.set(-1, "25%"));
        assert_eq!(tracks.build(), "1fr");
    }

    // ---- parse / build ----

    #[test]
    fn parse_blank_keeps_entries() {
        let mut tracks = TrackList::from_template("1fr min-content 2fr");
        tracks.parse("");
        assert_eq!(tracks.len(), 2);
        tracks.parse("  \t ");
        assert_eq!(tracks.build(), "1fr min-content 2fr");
    }

    #[test]
    fn parse_replaces_entries() {
        let mut tracks = TrackList::from_template("1fr");
        tracks.parse("25% min-content 75%");
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks.get(0), Some("25%"));
        assert_eq!(tracks.get(1), Some("75%"));
    }

    #[test]
    fn build_empty_is_empty_string() {
        assert_eq!(TrackList::new().build(), "");
    }

    #[test]
    fn build_single_entry_has_no_splitter() {
        let mut tracks = TrackList::new();
        tracks.add(0, DEFAULT_TRACK);
        assert_eq!(tracks.build(), "1fr");
    }

    #[test]
    fn build_parse_round_trip() {
        let template = "10% min-content 1fr min-content 2fr";
        let tracks = TrackList::from_template(template);
        assert_eq!(tracks.build(), template);
    }

    // ---- Serde ----

    #[test]
    fn serde_round_trip() {
        let tracks = TrackList::from_template("1fr min-content 37.5%");
        let json = serde_json::to_string(&tracks).unwrap();
        let back: TrackList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tracks);
    }

    // ---- Properties ----

    proptest! {
        #[test]
        fn add_then_remove_restores_length(
            seed in proptest::collection::vec("[a-z0-9]{1,4}(fr|%)", 0..8),
            index in -4isize..12,
        ) {
            let mut tracks = TrackList::new();
            for token in &seed {
                tracks.add(isize::MAX, token);
            }
            let before = tracks.len();
            tracks.add(index, DEFAULT_TRACK);
            prop_assert_eq!(tracks.len(), before + 1);

            let clamped = index.clamp(0, before as isize);
            prop_assert!(tracks.remove(clamped));
            prop_assert_eq!(tracks.len(), before);
        }

        #[test]
        fn out_of_range_ops_never_mutate(
            seed in proptest::collection::vec("1fr|2fr|50%", 0..6),
            index in 0isize..32,
        ) {
            let mut tracks = TrackList::new();
            for token in &seed {
                tracks.add(isize::MAX, token);
            }
            let oob = index + tracks.len() as isize;
            let snapshot = tracks.build();
            prop_assert!(!tracks.remove(oob));
            prop_assert!(!tracks.set(oob, "99%"));
            prop_assert_eq!(tracks.get(oob), None);
            prop_assert_eq!(tracks.build(), snapshot);
        }
    }
}
