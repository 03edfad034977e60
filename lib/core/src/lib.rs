//! # CareerPath Core
//!
//! Scoring and recommendation engine for the CareerPath quiz.
//!
//! This crate provides:
//!
//! - [`aggregate`] / [`dominant`] - turn five quiz answers into a [`ScoreVector`]
//!   and pick the dominant stream
//! - [`RecommendationIndex`] - exact k-nearest-neighbor search over the fixed
//!   [`REFERENCE_PROFILES`]
//! - [`CareerRecommender`] - the shared, build-once service wrapping the index
//!
//! ## Example
//!
//! ```rust
//! use careerpath_core::{aggregate, dominant, AnswerCategory, CareerRecommender,
//!     RecommendationIndex, REFERENCE_PROFILES};
//!
//! let scores = aggregate(&["commerce"; 5]).unwrap();
//! assert_eq!(dominant(&scores), AnswerCategory::Commerce);
//!
//! let recommender = CareerRecommender::new();
//! recommender
//!     .initialize(|| RecommendationIndex::build(&REFERENCE_PROFILES))
//!     .unwrap();
//! let careers = recommender.recommend(&scores).unwrap();
//! assert_eq!(careers[0].as_str(), "Entrepreneur");
//! ```

pub mod aggregator;
pub mod category;
pub mod error;
pub mod index;
pub mod profile;
pub mod recommender;

pub use aggregator::{aggregate, dominant, QUIZ_LENGTH};
pub use category::{AnswerCategory, ScoreVector};
pub use error::{Error, Result};
pub use index::{Neighbor, RecommendationIndex, DEFAULT_NEIGHBORS};
pub use profile::{CareerLabel, ReferenceProfile, UnknownCareerLabel, REFERENCE_PROFILES};
pub use recommender::{CareerRecommender, IndexState};
