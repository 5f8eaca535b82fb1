use crate::roster::RosterSnapshot;

/// Local persistence for the roster snapshot.
///
/// Deliberately synchronous: every mutation persists inside the registry's
/// serializing section before broadcasting, and the backing store is a small
/// local file.
pub trait RosterStorePort: Send + Sync {
    /// Load the persisted snapshot. A missing backing file is not an error
    /// and yields the empty snapshot.
    fn load(&self) -> anyhow::Result<RosterSnapshot>;

    fn save(&self, snapshot: &RosterSnapshot) -> anyhow::Result<()>;
}
