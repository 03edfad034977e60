use crate::{CareerLabel, Error, ReferenceProfile, Result, ScoreVector};
use ordered_float::OrderedFloat;
use std::collections::HashSet;

/// Number of careers returned per recommendation
pub const DEFAULT_NEIGHBORS: usize = 3;

/// A reference profile matched against a query, with its distance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub label: CareerLabel,
    pub distance: f64,
}

/// Exact nearest-neighbor index over the reference profiles.
///
/// Queries are a full linear scan with Euclidean distance; no normalization
/// or weighting is applied to the three dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationIndex {
    profiles: Vec<ReferenceProfile>,
    points: Vec<[f64; 3]>,
}

impl RecommendationIndex {
    /// Build the index, keeping the given definition order for tie-breaks
    pub fn build(profiles: &[ReferenceProfile]) -> Result<Self> {
        if profiles.is_empty() {
            return Err(Error::InvalidReferenceSet("no reference profiles".to_string()));
        }

        let mut seen = HashSet::with_capacity(profiles.len());
        for profile in profiles {
            if !seen.insert(profile.label) {
                return Err(Error::InvalidReferenceSet(format!(
                    "duplicate label: {}",
                    profile.label
                )));
            }
        }

        Ok(Self {
            profiles: profiles.to_vec(),
            points: profiles.iter().map(|p| p.vector.as_point()).collect(),
        })
    }

    #[inline]
    pub fn profiles(&self) -> &[ReferenceProfile] {
        &self.profiles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// The `k` closest profiles, nearest first.
    ///
    /// `k` is clamped to the size of the reference set. Equidistant profiles
    /// keep their definition order.
    pub fn nearest(&self, query: &ScoreVector, k: usize) -> Vec<Neighbor> {
        let q = query.as_point();
        let mut scored: Vec<(usize, f64)> = self
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| (i, l2_distance(&q, p)))
            .collect();

        // sort_by_key is stable
        scored.sort_by_key(|&(_, d)| OrderedFloat(d));
        scored.truncate(k.min(self.profiles.len()));

        scored
            .into_iter()
            .map(|(i, distance)| Neighbor {
                label: self.profiles[i].label,
                distance,
            })
            .collect()
    }

    /// Labels of the [`DEFAULT_NEIGHBORS`] closest profiles, nearest first
    pub fn recommend(&self, query: &ScoreVector) -> Vec<CareerLabel> {
        self.nearest(query, DEFAULT_NEIGHBORS)
            .into_iter()
            .map(|n| n.label)
            .collect()
    }
}

#[inline]
fn l2_distance(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::REFERENCE_PROFILES;

    fn index() -> RecommendationIndex {
        RecommendationIndex::build(&REFERENCE_PROFILES).unwrap()
    }

    #[test]
    fn test_l2_distance() {
        assert!((l2_distance(&[0.0, 0.0, 0.0], &[3.0, 4.0, 0.0]) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_exact_match_comes_first() {
        let neighbors = index().nearest(&ScoreVector::new(3, 1, 1), 3);
        assert_eq!(neighbors[0].label, CareerLabel::DataAnalyst);
        assert_eq!(neighbors[0].distance, 0.0);
        assert_eq!(neighbors[1].label, CareerLabel::Engineer);
        assert_eq!(neighbors[2].label, CareerLabel::Doctor);
        assert!((neighbors[1].distance - 2f64.sqrt()).abs() < 1e-12);
        assert_eq!(neighbors[1].distance, neighbors[2].distance);
    }

    #[test]
    fn test_ties_keep_definition_order() {
        assert_eq!(
            index().recommend(&ScoreVector::new(0, 0, 5)),
            vec![CareerLabel::Entrepreneur, CareerLabel::Accountant, CareerLabel::Banker]
        );
    }

    #[test]
    fn test_k_is_clamped() {
        let idx = index();
        assert_eq!(idx.nearest(&ScoreVector::new(1, 1, 1), 50).len(), 12);
        assert!(idx.nearest(&ScoreVector::new(1, 1, 1), 0).is_empty());
    }

    #[test]
    fn test_distances_are_non_decreasing() {
        let neighbors = index().nearest(&ScoreVector::new(2, 0, 3), 12);
        for pair in neighbors.windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
    }

    #[test]
    fn test_build_rejects_bad_reference_sets() {
        assert!(matches!(
            RecommendationIndex::build(&[]),
            Err(Error::InvalidReferenceSet(_))
        ));

        let dup = [
            ReferenceProfile::new(1, 0, 0, CareerLabel::Banker),
            ReferenceProfile::new(0, 1, 0, CareerLabel::Banker),
        ];
        assert!(matches!(
            RecommendationIndex::build(&dup),
            Err(Error::InvalidReferenceSet(_))
        ));
    }
}
