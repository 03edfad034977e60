pub mod manager;
pub mod snapshot;

pub use manager::{BuildReport, IndexManager, IndexSource};
pub use snapshot::{IndexSnapshot, ProfileRecord, SnapshotStore, SNAPSHOT_FILE_NAME, SNAPSHOT_FORMAT_VERSION};
