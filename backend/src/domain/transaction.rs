//! Transaction-history aggregate.

use std::fmt;

use chrono::{DateTime, Utc};

use super::enums::TransactionType;
use super::identifier::{CustomerId, TransactionId};

/// Validation errors returned by [`TransactionHistory::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    /// The amount was negative.
    NegativeAmount {
        /// Offending amount in yen.
        amount: i64,
    },
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount { amount } => {
                write!(f, "transaction amount must not be negative, got {amount}")
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}

/// A settled payment or refund against a customer account.
///
/// Refunds are modelled with [`TransactionType::Refund`] and a non-negative
/// amount; the sign never encodes direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionHistory {
    id: TransactionId,
    customer_id: CustomerId,
    transaction_type: TransactionType,
    amount: i64,
    recorded_at: DateTime<Utc>,
}

impl TransactionHistory {
    /// Validate and construct a transaction-history entry.
    pub fn new(
        id: TransactionId,
        customer_id: CustomerId,
        transaction_type: TransactionType,
        amount: i64,
        recorded_at: DateTime<Utc>,
    ) -> Result<Self, TransactionValidationError> {
        if amount < 0 {
            return Err(TransactionValidationError::NegativeAmount { amount });
        }
        Ok(Self {
            id,
            customer_id,
            transaction_type,
            amount,
            recorded_at,
        })
    }

    /// Entry identifier.
    pub fn id(&self) -> &TransactionId {
        &self.id
    }

    /// Settling customer.
    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    /// Payment or refund.
    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    /// Settled amount in yen.
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// When the entry was recorded.
    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn rejects_a_negative_amount() {
        let err = TransactionHistory::new(
            TransactionId::random(),
            CustomerId::random(),
            TransactionType::Refund,
            -500,
            "2026-01-15T08:30:00Z".parse().expect("valid timestamp"),
        )
        .expect_err("negative amount should fail");
        assert_eq!(err, TransactionValidationError::NegativeAmount { amount: -500 });
    }

    #[rstest]
    fn accepts_a_zero_amount() {
        let entry = TransactionHistory::new(
            TransactionId::random(),
            CustomerId::random(),
            TransactionType::Payment,
            0,
            "2026-01-15T08:30:00Z".parse().expect("valid timestamp"),
        )
        .expect("zero amount is valid");
        assert_eq!(entry.amount(), 0);
    }
}
