// Versioned on-disk snapshot of the recommendation index
use anyhow::{anyhow, bail, Context, Result};
use atomicwrites::{AtomicFile, OverwriteBehavior};
use careerpath_core::{CareerLabel, ReferenceProfile, ScoreVector};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

pub const SNAPSHOT_FILE_NAME: &str = "career_index.snap";
pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;
const SNAPSHOT_MAGIC: [u8; 4] = *b"CPIX";

/// Outer record: header plus the checksummed body bytes
#[derive(Debug, Serialize, Deserialize)]
struct SnapshotFile {
    magic: [u8; 4],
    format_version: u32,
    checksum: String,
    body: Vec<u8>,
}

/// Snapshot body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexSnapshot {
    pub created_at: DateTime<Utc>,
    pub profiles: Vec<ProfileRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub vector: [u32; 3],
    pub label: String,
}

impl IndexSnapshot {
    pub fn from_profiles(profiles: &[ReferenceProfile]) -> Self {
        Self {
            created_at: Utc::now(),
            profiles: profiles
                .iter()
                .map(|p| ProfileRecord {
                    vector: p.vector.components(),
                    label: p.label.as_str().to_string(),
                })
                .collect(),
        }
    }

    /// Reference profiles in stored order
    pub fn to_profiles(&self) -> Result<Vec<ReferenceProfile>> {
        self.profiles
            .iter()
            .map(|record| -> Result<ReferenceProfile> {
                let label: CareerLabel = record.label.parse()?;
                Ok(ReferenceProfile {
                    vector: ScoreVector::from(record.vector),
                    label,
                })
            })
            .collect()
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        self.encode_as(SNAPSHOT_FORMAT_VERSION)
    }

    pub(crate) fn encode_as(&self, format_version: u32) -> Result<Vec<u8>> {
        let body = bincode::serialize(self)
            .map_err(|e| anyhow!("Serialization error: {}", e))?;
        let file = SnapshotFile {
            magic: SNAPSHOT_MAGIC,
            format_version,
            checksum: checksum(&body),
            body,
        };
        bincode::serialize(&file).map_err(|e| anyhow!("Serialization error: {}", e))
    }

    pub fn decode(data: &[u8]) -> Result<Self> {
        let file: SnapshotFile = bincode::deserialize(data)
            .map_err(|e| anyhow!("Deserialization error: {}", e))?;

        if file.magic != SNAPSHOT_MAGIC {
            bail!("not an index snapshot");
        }
        if file.format_version != SNAPSHOT_FORMAT_VERSION {
            bail!(
                "unsupported snapshot format version {} (expected {})",
                file.format_version,
                SNAPSHOT_FORMAT_VERSION
            );
        }

        let actual = checksum(&file.body);
        if actual != file.checksum {
            bail!("Checksum mismatch: expected {}, got {}", file.checksum, actual);
        }

        bincode::deserialize(&file.body).map_err(|e| anyhow!("Deserialization error: {}", e))
    }
}

fn checksum(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}

/// The single global snapshot file
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            path: data_dir.as_ref().join(SNAPSHOT_FILE_NAME),
        }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when no snapshot has been written yet
    pub fn load(&self) -> Result<Option<IndexSnapshot>> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()))
            }
        };

        let snapshot = IndexSnapshot::decode(&data)
            .with_context(|| format!("decoding {}", self.path.display()))?;
        Ok(Some(snapshot))
    }

    /// Replace the snapshot atomically (temp file + rename)
    pub fn save(&self, snapshot: &IndexSnapshot) -> Result<()> {
        let data = snapshot.encode()?;

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
        }

        AtomicFile::new(&self.path, OverwriteBehavior::AllowOverwrite)
            .write(|f| f.write_all(&data))
            .map_err(|e| anyhow!("writing {}: {}", self.path.display(), e))?;
        Ok(())
    }
}
