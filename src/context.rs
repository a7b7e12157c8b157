use std::sync::Arc;

use crate::cancel::CancellationToken;
use crate::unit::SourceUnit;

/// Analysis context for a single point of interest inside a unit — one of
/// the two shapes the host hands in, depending on what triggered the
/// analysis. The byte offset locates the triggering node; classification
/// itself only ever consults the enclosing unit.
pub struct NodeContext {
    unit: Option<Arc<SourceUnit>>,
    byte_offset: usize,
    cancellation: CancellationToken,
}

impl NodeContext {
    #[must_use]
    pub fn new(
        unit: Option<Arc<SourceUnit>>,
        byte_offset: usize,
        cancellation: CancellationToken,
    ) -> Self {
        Self {
            unit,
            byte_offset,
            cancellation,
        }
    }

    /// Unit enclosing the node of interest, if any.
    #[must_use]
    pub fn unit(&self) -> Option<&Arc<SourceUnit>> {
        self.unit.as_ref()
    }

    /// Start byte of the node that triggered the analysis.
    #[must_use]
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    #[must_use]
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }
}

/// Analysis context for a whole unit.
pub struct UnitContext {
    unit: Option<Arc<SourceUnit>>,
    cancellation: CancellationToken,
}

impl UnitContext {
    #[must_use]
    pub fn new(unit: Option<Arc<SourceUnit>>, cancellation: CancellationToken) -> Self {
        Self { unit, cancellation }
    }

    #[must_use]
    pub fn unit(&self) -> Option<&Arc<SourceUnit>> {
        self.unit.as_ref()
    }

    #[must_use]
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }
}
