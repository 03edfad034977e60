use careerpath_core::{CareerRecommender, Error, RecommendationIndex, ReferenceProfile, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use crate::snapshot::{IndexSnapshot, SnapshotStore};

/// Where the live index came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexSource {
    Loaded,
    Built,
}

/// Outcome of a load-or-build pass.
///
/// `warnings` only ever holds recoverable persistence errors.
#[derive(Debug)]
pub struct BuildReport {
    pub source: IndexSource,
    pub warnings: Vec<Error>,
}

/// Loads the recommendation index from its snapshot, or builds and persists it
pub struct IndexManager {
    data_dir: PathBuf,
    store: SnapshotStore,
}

impl IndexManager {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        let data_dir = data_dir.as_ref().to_path_buf();
        let store = SnapshotStore::new(&data_dir);
        Self { data_dir, store }
    }

    #[inline]
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    #[inline]
    #[must_use]
    pub fn snapshot_path(&self) -> &Path {
        self.store.path()
    }

    /// Load the snapshot if it matches `profiles`, otherwise build and save.
    ///
    /// Only an invalid reference set is a hard error. Snapshot read and write
    /// failures are reported in [`BuildReport::warnings`].
    pub fn load_or_build(
        &self,
        profiles: &[ReferenceProfile],
    ) -> Result<(RecommendationIndex, BuildReport)> {
        let mut warnings = Vec::new();

        match self.load(profiles) {
            Ok(Some(index)) => {
                info!("Loaded recommendation index from {:?}", self.store.path());
                return Ok((
                    index,
                    BuildReport {
                        source: IndexSource::Loaded,
                        warnings,
                    },
                ));
            }
            Ok(None) => {}
            Err(e) => {
                warn!("{}; rebuilding", e);
                warnings.push(e);
            }
        }

        let index = RecommendationIndex::build(profiles)?;
        info!("Built recommendation index over {} profiles", index.len());

        if let Err(e) = self.store.save(&IndexSnapshot::from_profiles(profiles)) {
            let e = Error::PersistenceWriteFailed(format!("{:#}", e));
            warn!("{}; serving from memory", e);
            warnings.push(e);
        } else {
            info!("Index snapshot saved to {:?}", self.store.path());
        }

        Ok((
            index,
            BuildReport {
                source: IndexSource::Built,
                warnings,
            },
        ))
    }

    fn load(&self, profiles: &[ReferenceProfile]) -> Result<Option<RecommendationIndex>> {
        let snapshot = match self.store.load() {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => return Ok(None),
            Err(e) => return Err(Error::PersistenceLoadFailed(format!("{:#}", e))),
        };

        let stored = snapshot
            .to_profiles()
            .map_err(|e| Error::PersistenceLoadFailed(format!("{:#}", e)))?;
        if stored != profiles {
            return Err(Error::PersistenceLoadFailed(
                "snapshot does not match the reference profiles".to_string(),
            ));
        }

        RecommendationIndex::build(&stored)
            .map(Some)
            .map_err(|e| Error::PersistenceLoadFailed(e.to_string()))
    }

    /// Initialize `recommender` through its build guard.
    ///
    /// Returns `None` when the index was already ready and nothing ran.
    pub fn initialize(
        &self,
        recommender: &CareerRecommender,
        profiles: &[ReferenceProfile],
    ) -> Result<Option<BuildReport>> {
        let mut report = None;
        recommender.initialize(|| {
            let (index, r) = self.load_or_build(profiles)?;
            report = Some(r);
            Ok(index)
        })?;
        Ok(report)
    }
}
