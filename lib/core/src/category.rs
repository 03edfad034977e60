use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three streams a quiz answer can point to.
///
/// Variant order is the enumeration order used for tie-breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerCategory {
    Science,
    Arts,
    Commerce,
}

impl AnswerCategory {
    pub const ALL: [AnswerCategory; 3] = [
        AnswerCategory::Science,
        AnswerCategory::Arts,
        AnswerCategory::Commerce,
    ];

    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerCategory::Science => "science",
            AnswerCategory::Arts => "arts",
            AnswerCategory::Commerce => "commerce",
        }
    }

    /// Resolve a career-path URL segment such as `arts-stream` or `arts`
    pub fn from_stream_slug(slug: &str) -> Option<Self> {
        let name = slug.strip_suffix("-stream").unwrap_or(slug);
        name.parse().ok()
    }
}

impl fmt::Display for AnswerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnswerCategory {
    type Err = Error;

    /// Exact, case-sensitive match
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "science" => Ok(AnswerCategory::Science),
            "arts" => Ok(AnswerCategory::Arts),
            "commerce" => Ok(AnswerCategory::Commerce),
            other => Err(Error::InvalidAnswerToken(other.to_string())),
        }
    }
}

/// Per-stream answer counts for one quiz submission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreVector {
    pub science: u32,
    pub arts: u32,
    pub commerce: u32,
}

impl ScoreVector {
    #[inline]
    #[must_use]
    pub const fn new(science: u32, arts: u32, commerce: u32) -> Self {
        Self { science, arts, commerce }
    }

    /// Validate raw signed components coming from outside the aggregator.
    ///
    /// Exactly three components are required and none may be negative.
    pub fn from_components(components: &[i64]) -> Result<Self> {
        if components.len() != 3 {
            return Err(Error::MalformedScoreVector(format!(
                "expected 3 components, got {}",
                components.len()
            )));
        }

        let mut counts = [0u32; 3];
        for (slot, (&value, category)) in counts
            .iter_mut()
            .zip(components.iter().zip(AnswerCategory::ALL))
        {
            *slot = u32::try_from(value).map_err(|_| {
                Error::MalformedScoreVector(format!("{} score out of range: {}", category, value))
            })?;
        }

        Ok(Self::from(counts))
    }

    #[inline]
    pub fn get(&self, category: AnswerCategory) -> u32 {
        match category {
            AnswerCategory::Science => self.science,
            AnswerCategory::Arts => self.arts,
            AnswerCategory::Commerce => self.commerce,
        }
    }

    #[inline]
    pub(crate) fn increment(&mut self, category: AnswerCategory) {
        match category {
            AnswerCategory::Science => self.science += 1,
            AnswerCategory::Arts => self.arts += 1,
            AnswerCategory::Commerce => self.commerce += 1,
        }
    }

    #[inline]
    pub fn components(&self) -> [u32; 3] {
        [self.science, self.arts, self.commerce]
    }

    /// Sum of all counts; widened so it cannot overflow
    #[inline]
    pub fn total(&self) -> u64 {
        self.components().iter().map(|&c| u64::from(c)).sum()
    }

    /// Stream with the highest count, see [`crate::aggregator::dominant`]
    #[inline]
    pub fn dominant(&self) -> AnswerCategory {
        crate::aggregator::dominant(self)
    }

    #[inline]
    pub(crate) fn as_point(&self) -> [f64; 3] {
        [self.science as f64, self.arts as f64, self.commerce as f64]
    }
}

impl From<[u32; 3]> for ScoreVector {
    fn from(c: [u32; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl fmt::Display for ScoreVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.science, self.arts, self.commerce)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!("arts".parse::<AnswerCategory>().unwrap(), AnswerCategory::Arts);
        match "Science".parse::<AnswerCategory>() {
            Err(Error::InvalidAnswerToken(token)) => assert_eq!(token, "Science"),
            other => panic!("unexpected: {:?}", other),
        }
        assert!(" commerce".parse::<AnswerCategory>().is_err());
    }

    #[test]
    fn test_stream_slug() {
        assert_eq!(AnswerCategory::from_stream_slug("science-stream"), Some(AnswerCategory::Science));
        assert_eq!(AnswerCategory::from_stream_slug("commerce"), Some(AnswerCategory::Commerce));
        assert_eq!(AnswerCategory::from_stream_slug("history-stream"), None);
        assert_eq!(AnswerCategory::from_stream_slug("-stream"), None);
    }

    #[test]
    fn test_from_components() {
        let v = ScoreVector::from_components(&[3, 1, 1]).unwrap();
        assert_eq!(v, ScoreVector::new(3, 1, 1));
        assert_eq!(v.total(), 5);

        assert!(matches!(
            ScoreVector::from_components(&[3, -1, 1]),
            Err(Error::MalformedScoreVector(_))
        ));
        assert!(matches!(
            ScoreVector::from_components(&[3, 1]),
            Err(Error::MalformedScoreVector(_))
        ));
    }

    #[test]
    fn test_total_does_not_overflow() {
        let max = u32::MAX as i64;
        let v = ScoreVector::from_components(&[max, max, max]).unwrap();
        assert_eq!(v.total(), 3 * u32::MAX as u64);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ScoreVector::new(0, 2, 3)).unwrap();
        assert_eq!(json, serde_json::json!({"science": 0, "arts": 2, "commerce": 3}));
        assert_eq!(serde_json::to_value(AnswerCategory::Commerce).unwrap(), "commerce");
    }
}
