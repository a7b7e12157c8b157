use std::hash::{Hash, Hasher};
use std::sync::Arc;

use dashmap::DashMap;

use crate::cancel::CancellationToken;
use crate::classify;
use crate::error::Cancelled;
use crate::unit::SourceUnit;

/// Session-scoped verdict cache shared by every worker thread of one
/// analysis session. The host creates it empty at session start, passes it
/// by reference into each classification call, and drops it with the
/// session — nothing persists across runs.
///
/// Entries are write-once in effect: racing writers store the same pure
/// value, so an overwrite never changes an observed verdict.
#[derive(Default)]
pub struct VerdictCache {
    verdicts: DashMap<UnitKey, bool>,
}

impl VerdictCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached verdict for `unit`, computing it on first sight.
    ///
    /// An absent unit is a defined input, not an error: `Ok(false)`, cache
    /// untouched. On a miss the evaluator runs outside any map lock — two
    /// threads may both compute an uncached unit, and the loser's insert
    /// overwrites with an identical value. Cancellation during evaluation
    /// propagates and leaves the map unmodified for that unit.
    pub fn is_generated(
        &self,
        unit: Option<&Arc<SourceUnit>>,
        cancel: &CancellationToken,
    ) -> Result<bool, Cancelled> {
        let Some(unit) = unit else {
            return Ok(false);
        };
        if let Some(verdict) = self.verdicts.get(&UnitKey(Arc::clone(unit))) {
            return Ok(*verdict);
        }
        let verdict = classify::classify(unit, cancel)?;
        self.verdicts.insert(UnitKey(Arc::clone(unit)), verdict);
        Ok(verdict)
    }

    /// Number of units classified so far in this session.
    #[must_use]
    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }
}

/// Identity key: hashes and compares the `Arc` allocation address, never
/// the text. Holding a strong `Arc` pins the address for as long as the
/// entry lives, so it cannot be recycled for a different unit within the
/// session.
struct UnitKey(Arc<SourceUnit>);

impl PartialEq for UnitKey {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for UnitKey {}

impl Hash for UnitKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state);
    }
}
