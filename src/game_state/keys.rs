//! Persistent per-tile identities.
//!
//! Boards store tiles by position, so a consumer watching successive board
//! snapshots cannot tell which piece moved where. A `KeySet` assigns every
//! board index a stable identity that follows a piece as it moves, which is
//! what animation layers key their transitions on. The `last` counter mints a
//! fresh identity for the square a piece vacates (or a captured piece's
//! replacement), so identities are never reused.

/// A single tile identity.
pub type Key = u32;

/// A set of unique identities, one per board index, plus the last identity
/// that was issued. Values are pairwise distinct at all times: every minted
/// identity is strictly greater than anything issued before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySet {
    pub values: Vec<Key>,
    pub last: Key,
}

impl KeySet {
    /// Identity keys `[0..length)` with `last` at `length - 1`.
    pub fn new(length: usize) -> KeySet {
        KeySet {
            values: (0..length as Key).collect(),
            last: length.saturating_sub(1) as Key,
        }
    }

    /// The key set after a piece moves from `source` to `destination`.
    ///
    /// The moved piece keeps its identity; the vacated source square gets a
    /// freshly minted one. The old destination value is discarded, never
    /// duplicated, so uniqueness is preserved.
    pub fn derive(&self, source: usize, destination: usize) -> KeySet {
        let mut values = self.values.clone();
        values[destination] = values[source];
        let last = self.last + 1;
        values[source] = last;
        KeySet { values, last }
    }
}
