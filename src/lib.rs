//! # CareerPath
//!
//! A small quiz service that suggests an education stream and recommends
//! careers.
//!
//! Five answers (`science`, `arts` or `commerce`) are counted into a
//! [`ScoreVector`]. The dominant stream selects the suggestion text, and the
//! three nearest of twelve labeled reference profiles become the career
//! recommendations.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! careerpath --data-dir ./data --http-port 5000
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use careerpath::prelude::*;
//!
//! let recommender = CareerRecommender::new();
//! let manager = IndexManager::new("./data");
//! manager.initialize(&recommender, &REFERENCE_PROFILES).unwrap();
//!
//! let scores = aggregate(&["science", "science", "science", "arts", "commerce"]).unwrap();
//! assert_eq!(dominant(&scores), AnswerCategory::Science);
//! let careers = recommender.recommend(&scores).unwrap();
//! ```
//!
//! ## Crate Structure
//!
//! - `careerpath-core` - aggregation, reference profiles, nearest-neighbor index
//! - `careerpath-storage` - versioned index snapshots, load-or-build
//! - `careerpath-api` - static content and the REST API

pub use careerpath_core::{
    aggregate, dominant,
    AnswerCategory, ScoreVector,
    CareerLabel, ReferenceProfile, REFERENCE_PROFILES,
    RecommendationIndex, Neighbor, CareerRecommender, IndexState,
    Error, Result,
};

pub use careerpath_storage::{IndexManager, BuildReport, IndexSource};

pub use careerpath_api::{ContentStore, RestApi};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        aggregate, dominant,
        AnswerCategory, ScoreVector,
        CareerLabel, ReferenceProfile, REFERENCE_PROFILES,
        RecommendationIndex, CareerRecommender, IndexState,
        Error, Result,
        IndexManager, ContentStore, RestApi,
    };
}
