//! Port abstractions for the upstream service adaptors.
//!
//! The hydration core never performs I/O. Persistence happens behind a
//! per-aggregate [`Repository`] capability, and raw wire text crosses the
//! boundary through [`PayloadReader`] / [`PayloadWriter`]. Real adaptors
//! (HTTP transport, status-code mapping, retries) live outside this crate.

use async_trait::async_trait;
use serde_json::Value;

use super::enums::SortOrder;
use super::pager::Pager;

/// Errors raised by upstream-facing adaptors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortError {
    /// The upstream service could not be reached.
    #[error("upstream connection failed: {message}")]
    Connection {
        /// Adapter-supplied detail.
        message: String,
    },
    /// The upstream service rejected or failed the request.
    #[error("upstream request failed: {message}")]
    Upstream {
        /// Adapter-supplied detail.
        message: String,
    },
    /// Wire text could not be parsed into a payload value.
    #[error("payload could not be decoded: {message}")]
    Decode {
        /// Parser-supplied detail.
        message: String,
    },
}

/// Persistence capability exposed per aggregate.
///
/// Implementations translate each call into an upstream HTTP request; the
/// hydration layer's output is what flows through `add` and `update`, and
/// its input is what `find` and `list` produce.
#[async_trait]
pub trait Repository: Send + Sync {
    /// Aggregate handled by this repository.
    type Entity: Send + Sync;
    /// Identifier of the aggregate.
    type Id: Send + Sync;

    /// Store a new aggregate.
    async fn add(&self, entity: &Self::Entity) -> Result<(), PortError>;

    /// Replace an existing aggregate.
    async fn update(&self, entity: &Self::Entity) -> Result<(), PortError>;

    /// Fetch one aggregate by identifier.
    async fn find(&self, id: &Self::Id) -> Result<Option<Self::Entity>, PortError>;

    /// Fetch one page of aggregates in the given order.
    async fn list(&self, pager: &Pager, order: SortOrder)
    -> Result<Vec<Self::Entity>, PortError>;

    /// Delete one aggregate by identifier.
    async fn delete(&self, id: &Self::Id) -> Result<(), PortError>;
}

/// Turns raw wire text into an untyped payload value.
///
/// Deliberately untyped: shape judgement belongs to the schema layer, not to
/// the reader. Callers pass the returned value through a hydrator's
/// `as_payload` gate before trusting any field.
pub trait PayloadReader: Send + Sync {
    /// Parse wire text into an untyped value.
    fn read(&self, text: &str) -> Result<Value, PortError>;
}

/// Turns an untyped payload value back into wire text.
pub trait PayloadWriter: Send + Sync {
    /// Serialise a payload value into wire text.
    fn write(&self, payload: &Value) -> Result<String, PortError>;
}

/// JSON implementation of [`PayloadReader`].
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonReader;

impl PayloadReader for JsonReader {
    fn read(&self, text: &str) -> Result<Value, PortError> {
        serde_json::from_str(text).map_err(|err| PortError::Decode {
            message: err.to_string(),
        })
    }
}

/// JSON implementation of [`PayloadWriter`].
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonWriter;

impl PayloadWriter for JsonWriter {
    fn write(&self, payload: &Value) -> Result<String, PortError> {
        serde_json::to_string(payload).map_err(|err| PortError::Decode {
            message: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    //! Coverage for the JSON boundary and a mocked repository port.

    use super::*;
    use crate::domain::customer::Customer;
    use crate::domain::identifier::CustomerId;
    use mockall::mock;
    use mockall::predicate::eq;
    use rstest::rstest;
    use serde_json::json;

    mock! {
        CustomerRepository {}

        #[async_trait]
        impl Repository for CustomerRepository {
            type Entity = Customer;
            type Id = CustomerId;

            async fn add(&self, entity: &Customer) -> Result<(), PortError>;
            async fn update(&self, entity: &Customer) -> Result<(), PortError>;
            async fn find(&self, id: &CustomerId) -> Result<Option<Customer>, PortError>;
            async fn list(&self, pager: &Pager, order: SortOrder) -> Result<Vec<Customer>, PortError>;
            async fn delete(&self, id: &CustomerId) -> Result<(), PortError>;
        }
    }

    #[rstest]
    fn json_reader_round_trips_through_the_writer() {
        let value = JsonReader
            .read(r#"{"value":"01890a5d-ac96-774b-bcce-b302099a8057"}"#)
            .expect("valid json");
        assert_eq!(
            value,
            json!({"value": "01890a5d-ac96-774b-bcce-b302099a8057"})
        );
        let text = JsonWriter.write(&value).expect("serialisable value");
        let reparsed = JsonReader.read(&text).expect("round-trip");
        assert_eq!(reparsed, value);
    }

    #[rstest]
    fn json_reader_surfaces_a_decode_error() {
        let err = JsonReader.read("{not json").expect_err("invalid json should fail");
        assert!(matches!(err, PortError::Decode { .. }));
    }

    #[tokio::test]
    async fn repository_port_is_mockable_per_aggregate() {
        let id = CustomerId::random();
        let mut repository = MockCustomerRepository::new();
        repository
            .expect_find()
            .with(eq(id.clone()))
            .return_once(|_| Ok(None));

        let found = repository.find(&id).await.expect("mocked call");
        assert!(found.is_none());
    }
}
