//! Pointer input projected onto the split axis.

use serde::{Deserialize, Serialize};

/// One pointer event sample along a container's split axis.
///
/// The `pointer_id` is the host's capture token: a drag session only honors
/// samples carrying the id that started it. `position` is splitter-local on
/// the sample that starts a drag (the grab offset) and container-local on
/// every move sample afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub pointer_id: u32,
    pub position: f64,
}

impl PointerSample {
    /// Build a sample.
    #[must_use]
    pub const fn new(pointer_id: u32, position: f64) -> Self {
        Self {
            pointer_id,
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_round_trip() {
        let sample = PointerSample::new(7, 123.5);
        let json = serde_json::to_string(&sample).unwrap();
        let back: PointerSample = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample);
    }
}
