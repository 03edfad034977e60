use crate::ScoreVector;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Career a reference profile points to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CareerLabel {
    Engineer,
    Doctor,
    Scientist,
    Journalist,
    Lawyer,
    Teacher,
    Accountant,
    Banker,
    Entrepreneur,
    Marketer,
    #[serde(rename = "Data Analyst")]
    DataAnalyst,
    Designer,
}

impl CareerLabel {
    pub const ALL: [CareerLabel; 12] = [
        CareerLabel::Engineer,
        CareerLabel::Doctor,
        CareerLabel::Scientist,
        CareerLabel::Journalist,
        CareerLabel::Lawyer,
        CareerLabel::Teacher,
        CareerLabel::Accountant,
        CareerLabel::Banker,
        CareerLabel::Entrepreneur,
        CareerLabel::Marketer,
        CareerLabel::DataAnalyst,
        CareerLabel::Designer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CareerLabel::Engineer => "Engineer",
            CareerLabel::Doctor => "Doctor",
            CareerLabel::Scientist => "Scientist",
            CareerLabel::Journalist => "Journalist",
            CareerLabel::Lawyer => "Lawyer",
            CareerLabel::Teacher => "Teacher",
            CareerLabel::Accountant => "Accountant",
            CareerLabel::Banker => "Banker",
            CareerLabel::Entrepreneur => "Entrepreneur",
            CareerLabel::Marketer => "Marketer",
            CareerLabel::DataAnalyst => "Data Analyst",
            CareerLabel::Designer => "Designer",
        }
    }
}

impl fmt::Display for CareerLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown career label: {0}")]
pub struct UnknownCareerLabel(pub String);

impl FromStr for CareerLabel {
    type Err = UnknownCareerLabel;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        CareerLabel::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| UnknownCareerLabel(s.to_string()))
    }
}

/// A fixed exemplar score vector labeled with one career
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReferenceProfile {
    pub vector: ScoreVector,
    pub label: CareerLabel,
}

impl ReferenceProfile {
    #[inline]
    #[must_use]
    pub const fn new(science: u32, arts: u32, commerce: u32, label: CareerLabel) -> Self {
        Self {
            vector: ScoreVector::new(science, arts, commerce),
            label,
        }
    }
}

/// The reference dataset, in definition order.
///
/// Nearest-neighbor ties resolve by position in this table.
pub const REFERENCE_PROFILES: [ReferenceProfile; 12] = [
    ReferenceProfile::new(4, 1, 0, CareerLabel::Engineer),
    ReferenceProfile::new(3, 2, 0, CareerLabel::Doctor),
    ReferenceProfile::new(5, 0, 0, CareerLabel::Scientist),
    ReferenceProfile::new(2, 4, 0, CareerLabel::Journalist),
    ReferenceProfile::new(1, 4, 1, CareerLabel::Lawyer),
    ReferenceProfile::new(0, 5, 0, CareerLabel::Teacher),
    ReferenceProfile::new(0, 1, 4, CareerLabel::Accountant),
    ReferenceProfile::new(1, 0, 4, CareerLabel::Banker),
    ReferenceProfile::new(0, 0, 5, CareerLabel::Entrepreneur),
    ReferenceProfile::new(2, 2, 2, CareerLabel::Marketer),
    ReferenceProfile::new(3, 1, 1, CareerLabel::DataAnalyst),
    ReferenceProfile::new(1, 3, 1, CareerLabel::Designer),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_labels_round_trip_through_strings() {
        for label in CareerLabel::ALL {
            assert_eq!(label.as_str().parse::<CareerLabel>().unwrap(), label);
        }
        let err = "Astronaut".parse::<CareerLabel>().unwrap_err();
        assert_eq!(err, UnknownCareerLabel("Astronaut".to_string()));
        assert_eq!(err.to_string(), "unknown career label: Astronaut");
        assert_eq!(
            serde_json::to_value(CareerLabel::DataAnalyst).unwrap(),
            "Data Analyst"
        );
    }

    #[test]
    fn test_reference_set_is_bijective() {
        let labels: HashSet<_> = REFERENCE_PROFILES.iter().map(|p| p.label).collect();
        assert_eq!(labels.len(), CareerLabel::ALL.len());
        let vectors: HashSet<_> = REFERENCE_PROFILES.iter().map(|p| p.vector).collect();
        assert_eq!(vectors.len(), REFERENCE_PROFILES.len());
    }
}
