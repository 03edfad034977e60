use crate::{CareerLabel, Error, Neighbor, RecommendationIndex, Result, ScoreVector};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;
use tracing::debug;

/// Lifecycle of the shared index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexState {
    Unbuilt,
    Building,
    Ready,
}

/// Process-wide career matcher.
///
/// The index is built at most once, under `build_lock`, and is read-only
/// afterwards. Queries never take the lock.
pub struct CareerRecommender {
    index: OnceLock<RecommendationIndex>,
    build_lock: Mutex<()>,
    building: AtomicBool,
}

struct BuildingFlag<'a>(&'a AtomicBool);

impl Drop for BuildingFlag<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for CareerRecommender {
    fn default() -> Self {
        Self::new()
    }
}

impl CareerRecommender {
    pub fn new() -> Self {
        Self {
            index: OnceLock::new(),
            build_lock: Mutex::new(()),
            building: AtomicBool::new(false),
        }
    }

    /// Recommender that is ready from the start
    pub fn with_index(index: RecommendationIndex) -> Self {
        let recommender = Self::new();
        let _ = recommender.index.set(index);
        recommender
    }

    pub fn state(&self) -> IndexState {
        if self.index.get().is_some() {
            IndexState::Ready
        } else if self.building.load(Ordering::Acquire) {
            IndexState::Building
        } else {
            IndexState::Unbuilt
        }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.index.get().is_some()
    }

    /// Run `build` unless the index already exists.
    ///
    /// Concurrent callers are serialized; exactly one of them runs `build` and
    /// all of them get the same index. A failed build leaves the recommender
    /// `Unbuilt` so a later call can retry.
    pub fn initialize<F>(&self, build: F) -> Result<&RecommendationIndex>
    where
        F: FnOnce() -> Result<RecommendationIndex>,
    {
        if let Some(index) = self.index.get() {
            return Ok(index);
        }

        let _guard = self.build_lock.lock();
        if let Some(index) = self.index.get() {
            return Ok(index);
        }

        self.building.store(true, Ordering::Release);
        let _flag = BuildingFlag(&self.building);
        debug!("Building recommendation index");

        let index = build()?;
        Ok(self.index.get_or_init(|| index))
    }

    pub fn index(&self) -> Result<&RecommendationIndex> {
        self.index.get().ok_or(Error::IndexNotReady)
    }

    /// Three closest careers, nearest first
    pub fn recommend(&self, scores: &ScoreVector) -> Result<Vec<CareerLabel>> {
        Ok(self.index()?.recommend(scores))
    }

    /// Like [`recommend`](Self::recommend) for unvalidated signed components
    pub fn recommend_raw(&self, components: &[i64]) -> Result<Vec<CareerLabel>> {
        let scores = ScoreVector::from_components(components)?;
        self.recommend(&scores)
    }

    pub fn nearest(&self, scores: &ScoreVector, k: usize) -> Result<Vec<Neighbor>> {
        Ok(self.index()?.nearest(scores, k))
    }
}
