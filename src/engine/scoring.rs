//! Star scoring.

use serde::{Deserialize, Serialize};

/// Move-count ceilings for 1, 2 and 3 stars.
///
/// Serialized with the level data's string keys (`"1"`, `"2"`, `"3"`).
/// The ceilings are not required to be monotonic here; a malformed level
/// (e.g. `three > one`) yields whatever the most-generous-first ladder
/// produces. Level tooling is expected to keep thresholds sane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarThresholds {
    /// Maximum moves that still earn 1 star.
    #[serde(rename = "1")]
    pub one: u32,
    /// Maximum moves that still earn 2 stars.
    #[serde(rename = "2")]
    pub two: u32,
    /// Maximum moves that still earn 3 stars.
    #[serde(rename = "3")]
    pub three: u32,
}

impl StarThresholds {
    #[must_use]
    pub const fn new(one: u32, two: u32, three: u32) -> Self {
        Self { one, two, three }
    }
}

/// Stars earned for finishing in `move_count` moves: most-generous-first
/// lookup, 0 if even the 1-star ceiling was exceeded.
///
/// Pure function of its inputs.
#[must_use]
pub fn compute_stars(move_count: u32, thresholds: &StarThresholds) -> u8 {
    if move_count <= thresholds.three {
        3
    } else if move_count <= thresholds.two {
        2
    } else if move_count <= thresholds.one {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_ladder() {
        let thresholds = StarThresholds::new(18, 13, 9);

        assert_eq!(compute_stars(7, &thresholds), 3);
        assert_eq!(compute_stars(9, &thresholds), 3);
        assert_eq!(compute_stars(10, &thresholds), 2);
        assert_eq!(compute_stars(13, &thresholds), 2);
        assert_eq!(compute_stars(14, &thresholds), 1);
        assert_eq!(compute_stars(18, &thresholds), 1);
        assert_eq!(compute_stars(20, &thresholds), 0);
    }

    #[test]
    fn test_zero_moves_earns_three() {
        let thresholds = StarThresholds::new(3, 2, 1);
        assert_eq!(compute_stars(0, &thresholds), 3);
    }

    #[test]
    fn test_non_monotonic_thresholds_follow_ladder() {
        // three > one: the ladder answers 3 for anything <= three.
        let thresholds = StarThresholds::new(5, 8, 10);
        assert_eq!(compute_stars(9, &thresholds), 3);
        assert_eq!(compute_stars(11, &thresholds), 0);
    }

    #[test]
    fn test_json_keys_are_string_digits() {
        let thresholds = StarThresholds::new(18, 13, 9);
        let json = serde_json::to_value(thresholds).unwrap();

        assert_eq!(json["1"], 18);
        assert_eq!(json["2"], 13);
        assert_eq!(json["3"], 9);

        let back: StarThresholds =
            serde_json::from_str(r#"{"1": 18, "2": 13, "3": 9}"#).unwrap();
        assert_eq!(back, thresholds);
    }
}
