//! Visit aggregate.

use chrono::{DateTime, Utc};

use super::identifier::{CemeteryId, CustomerId, VisitId};
use super::range::{DateTimeRange, Range};

/// A recorded visit to a cemetery plot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    id: VisitId,
    customer_id: CustomerId,
    cemetery_id: CemeteryId,
    visited_at: DateTime<Utc>,
    note: Option<String>,
}

impl Visit {
    /// Assemble a visit from validated components.
    pub fn new(
        id: VisitId,
        customer_id: CustomerId,
        cemetery_id: CemeteryId,
        visited_at: DateTime<Utc>,
        note: Option<String>,
    ) -> Self {
        Self {
            id,
            customer_id,
            cemetery_id,
            visited_at,
            note,
        }
    }

    /// Visit identifier.
    pub fn id(&self) -> &VisitId {
        &self.id
    }

    /// Visiting customer.
    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    /// Visited plot.
    pub fn cemetery_id(&self) -> &CemeteryId {
        &self.cemetery_id
    }

    /// When the visit took place.
    pub fn visited_at(&self) -> DateTime<Utc> {
        self.visited_at
    }

    /// Free-form note, if any.
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// True when the visit falls inside the given window.
    pub fn within(&self, window: &DateTimeRange) -> bool {
        window.includes(&Range::at(self.visited_at))
    }
}
