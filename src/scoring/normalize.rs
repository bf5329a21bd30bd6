//! Score normalization.

use crate::scoring::ScoreMap;

/// Min-max normalize scores into `[0, 1]`.
///
/// An empty map is returned as-is. When every score is equal, every score
/// becomes 1.0.
///
/// # Examples
///
/// ```
/// use talentscout::scoring::{ScoreMap, normalize_min_max};
///
/// let mut scores = ScoreMap::default();
/// scores.insert("a".to_string(), 4.0);
/// scores.insert("b".to_string(), 2.0);
/// scores.insert("c".to_string(), 0.0);
///
/// let normalized = normalize_min_max(&scores);
/// assert_eq!(normalized["a"], 1.0);
/// assert_eq!(normalized["b"], 0.5);
/// assert_eq!(normalized["c"], 0.0);
/// ```
pub fn normalize_min_max(scores: &ScoreMap) -> ScoreMap {
    if scores.is_empty() {
        return scores.clone();
    }

    let min = scores.values().copied().fold(f64::INFINITY, f64::min);
    let max = scores.values().copied().fold(f64::NEG_INFINITY, f64::max);

    if max == min {
        return scores.keys().map(|id| (id.clone(), 1.0)).collect();
    }

    let range = max - min;
    scores
        .iter()
        .map(|(id, &score)| (id.clone(), (score - min) / range))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, f64)]) -> ScoreMap {
        entries
            .iter()
            .map(|(id, score)| (id.to_string(), *score))
            .collect()
    }

    #[test]
    fn test_negative_scores() {
        let normalized = normalize_min_max(&map(&[("a", -2.0), ("b", 0.0), ("c", 2.0)]));

        assert_eq!(normalized["a"], 0.0);
        assert_eq!(normalized["b"], 0.5);
        assert_eq!(normalized["c"], 1.0);
    }

    #[test]
    fn test_ties_become_one() {
        let normalized = normalize_min_max(&map(&[("a", 0.0), ("b", 0.0)]));
        assert_eq!(normalized["a"], 1.0);
        assert_eq!(normalized["b"], 1.0);

        let normalized = normalize_min_max(&map(&[("solo", 3.7)]));
        assert_eq!(normalized["solo"], 1.0);
    }

    #[test]
    fn test_empty() {
        assert!(normalize_min_max(&ScoreMap::default()).is_empty());
    }

    #[test]
    fn test_values_in_unit_interval() {
        let scores = map(&[("a", 0.13), ("b", 7.9), ("c", 3.3), ("d", -1.25)]);
        for value in normalize_min_max(&scores).values() {
            assert!((0.0..=1.0).contains(value));
        }
    }
}
