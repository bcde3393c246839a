//! Closed interval value object with optional bounds.
//!
//! A missing bound means "unbounded" on that side. The comparison predicates
//! deliberately treat an absent bound on *either* side being compared as an
//! automatic pass, which yields a non-strict partial order: two unbounded
//! ranges mutually include each other. Callers relying on a strict total
//! order should not use this type.

use std::fmt;

use chrono::{DateTime, Utc};

/// Validation errors returned by [`Range::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeValidationError {
    /// Both bounds were present and the minimum exceeded the maximum.
    MinAboveMax,
}

impl fmt::Display for RangeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinAboveMax => write!(f, "range minimum must not exceed its maximum"),
        }
    }
}

impl std::error::Error for RangeValidationError {}

/// Closed interval over an orderable type, unbounded where a bound is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range<T> {
    min: Option<T>,
    max: Option<T>,
}

impl<T: PartialOrd> Range<T> {
    /// Validate and construct a range.
    ///
    /// Fails only when both bounds are present and out of order; a range with
    /// one or both bounds absent is always valid.
    pub fn new(min: Option<T>, max: Option<T>) -> Result<Self, RangeValidationError> {
        if let (Some(lower), Some(upper)) = (&min, &max) {
            if lower > upper {
                return Err(RangeValidationError::MinAboveMax);
            }
        }
        Ok(Self { min, max })
    }

    /// Range with both bounds absent.
    pub fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// Degenerate range covering exactly one value.
    pub fn at(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            min: Some(value.clone()),
            max: Some(value),
        }
    }

    /// Lower bound, if present.
    pub fn min(&self) -> Option<&T> {
        self.min.as_ref()
    }

    /// Upper bound, if present.
    pub fn max(&self) -> Option<&T> {
        self.max.as_ref()
    }

    /// True when this range reaches at least as far down as `other`.
    ///
    /// An absent minimum on either side passes unconditionally; otherwise the
    /// comparison is against the candidate's own minimum, not a fixed
    /// reference point.
    pub fn is_greater_than(&self, other: &Self) -> bool {
        match (&self.min, &other.min) {
            (Some(own), Some(candidate)) => own <= candidate,
            _ => true,
        }
    }

    /// True when this range reaches at least as far up as `other`.
    ///
    /// An absent maximum on either side passes unconditionally.
    pub fn is_less_than(&self, other: &Self) -> bool {
        match (&self.max, &other.max) {
            (Some(own), Some(candidate)) => own >= candidate,
            _ => true,
        }
    }

    /// True when `other` lies entirely within this range.
    pub fn includes(&self, other: &Self) -> bool {
        self.is_greater_than(other) && self.is_less_than(other)
    }
}

/// Date-time interval used for visit windows and schedule queries.
///
/// The instantiation adds no validation beyond [`Range::new`]; any ordered
/// pair of timestamps is a valid window.
pub type DateTimeRange = Range<DateTime<Utc>>;
