pub mod seed_file;
pub mod snapshot_file;

pub use seed_file::{default_seed_users, YamlSeedRepository};
pub use snapshot_file::{JsonSnapshotRepository, MemorySnapshotRepository};
