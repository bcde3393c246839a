//! Visit schedule aggregate.
//!
//! Schedules are tree shaped: a schedule may carry nested sub-schedules, each
//! of which is itself a full schedule. The payload side mirrors this with a
//! lazily resolved self-referential schema.

use chrono::{DateTime, Utc};

use super::enums::FrequencyType;
use super::identifier::{CustomerId, ScheduleId};

/// A recurring visit schedule, possibly with nested sub-schedules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    id: ScheduleId,
    customer_id: CustomerId,
    frequency_type: FrequencyType,
    starts_at: DateTime<Utc>,
    sub_schedules: Option<Vec<Schedule>>,
}

impl Schedule {
    /// Assemble a schedule from validated components.
    pub fn new(
        id: ScheduleId,
        customer_id: CustomerId,
        frequency_type: FrequencyType,
        starts_at: DateTime<Utc>,
        sub_schedules: Option<Vec<Schedule>>,
    ) -> Self {
        Self {
            id,
            customer_id,
            frequency_type,
            starts_at,
            sub_schedules,
        }
    }

    /// Schedule identifier.
    pub fn id(&self) -> &ScheduleId {
        &self.id
    }

    /// Owning customer.
    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    /// Recurrence of the schedule.
    pub fn frequency_type(&self) -> FrequencyType {
        self.frequency_type
    }

    /// First occurrence.
    pub fn starts_at(&self) -> DateTime<Utc> {
        self.starts_at
    }

    /// Nested sub-schedules, if any.
    pub fn sub_schedules(&self) -> Option<&[Schedule]> {
        self.sub_schedules.as_deref()
    }

    /// Number of schedules in the tree, counting this node.
    pub fn tree_size(&self) -> usize {
        1 + self
            .sub_schedules
            .as_deref()
            .map_or(0, |entries| entries.iter().map(Schedule::tree_size).sum())
    }
}
