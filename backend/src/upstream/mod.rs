//! Translation of upstream service responses into domain aggregates.
//!
//! The upstream service answers listings as an envelope holding an ordered
//! entry array. Each aggregate gets a translator with two operations:
//! `translate` maps a whole envelope, preserving entry order and producing
//! one entity per entry, and `translate_entry` maps a single entry by
//! delegating to the aggregate's hydrator. `decode` is the untrusted-input
//! path: it runs the envelope through the schema gate first.
//!
//! Translators never catch or wrap hydration failures beyond tagging which
//! tier they came from; [`TranslateError`] keeps the recoverable structural
//! tier and the fail-fast domain tier distinct so callers must handle both.
//!
//! The whole graph is built once by [`Translators::new`] and passed around
//! explicitly; there is no ambient registry to look translators up in.

use serde_json::Value;
use tracing::{debug, warn};

use crate::hydration::entities::{
    AuthTokenHydrator, CemeteryHydrator, CustomerHydrator, FeedbackHydrator, ScheduleHydrator,
    TransactionHydrator, UserHydrator, VisitHydrator,
};
use crate::hydration::payload::{
    AuthTokenPayload, CemeteryListPayload, CustomerListPayload, FeedbackListPayload,
    ScheduleListPayload, TransactionListPayload, UserListPayload, VisitListPayload,
};
use crate::hydration::{Hydrator, HydrationError, SchemaError, registry};
use crate::domain::AuthToken;

/// Failure while decoding an upstream response.
///
/// The two tiers stay separate: [`TranslateError::Schema`] is the aggregate,
/// recoverable structural tier; [`TranslateError::Hydration`] is the
/// fail-fast domain tier and indicates drifted invariants when it fires on
/// input that passed the schema gate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    /// The envelope failed structural validation.
    #[error(transparent)]
    Schema(#[from] SchemaError),
    /// An entry was rejected by a domain constructor or enum table.
    #[error(transparent)]
    Hydration(#[from] HydrationError),
}

macro_rules! define_translator {
    (
        $(#[$meta:meta])*
        $name:ident {
            hydrator: $hydrator:ty,
            list: $list:ty,
            entries: $entries:ident,
            schema: $schema:path,
            label: $label:literal,
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone)]
        pub struct $name {
            hydrator: $hydrator,
        }

        impl $name {
            /// Build the translator and its hydrator graph.
            pub fn new() -> Self {
                Self::default()
            }

            /// Gate an untrusted envelope, then translate it.
            pub fn decode(
                &self,
                raw: &Value,
            ) -> Result<Vec<<$hydrator as Hydrator>::Domain>, TranslateError> {
                $schema().validate(raw)?;
                let payload: $list =
                    serde_json::from_value(raw.clone()).map_err(SchemaError::undecodable)?;
                Ok(self.translate(&payload)?)
            }

            /// Translate a validated envelope, preserving entry order.
            pub fn translate(
                &self,
                payload: &$list,
            ) -> Result<Vec<<$hydrator as Hydrator>::Domain>, HydrationError> {
                debug!(
                    aggregate = $label,
                    entries = payload.$entries.len(),
                    "translating upstream listing"
                );
                payload
                    .$entries
                    .iter()
                    .map(|entry| self.translate_entry(entry))
                    .collect()
            }

            /// Translate one entry.
            pub fn translate_entry(
                &self,
                entry: &<$hydrator as Hydrator>::Payload,
            ) -> Result<<$hydrator as Hydrator>::Domain, HydrationError> {
                self.hydrator.hydrate(entry).inspect_err(|error| {
                    warn!(aggregate = $label, %error, "upstream entry rejected");
                })
            }
        }
    };
}

define_translator!(
    /// Translator for upstream cemetery listings.
    CemeteryTranslator {
        hydrator: CemeteryHydrator,
        list: CemeteryListPayload,
        entries: cemeteries,
        schema: registry::cemetery_list,
        label: "cemetery",
    }
);

define_translator!(
    /// Translator for upstream customer listings.
    CustomerTranslator {
        hydrator: CustomerHydrator,
        list: CustomerListPayload,
        entries: customers,
        schema: registry::customer_list,
        label: "customer",
    }
);

define_translator!(
    /// Translator for upstream user listings.
    UserTranslator {
        hydrator: UserHydrator,
        list: UserListPayload,
        entries: users,
        schema: registry::user_list,
        label: "user",
    }
);

define_translator!(
    /// Translator for upstream visit listings.
    VisitTranslator {
        hydrator: VisitHydrator,
        list: VisitListPayload,
        entries: visits,
        schema: registry::visit_list,
        label: "visit",
    }
);

define_translator!(
    /// Translator for upstream schedule listings.
    ScheduleTranslator {
        hydrator: ScheduleHydrator,
        list: ScheduleListPayload,
        entries: schedules,
        schema: registry::schedule_list,
        label: "schedule",
    }
);

define_translator!(
    /// Translator for upstream feedback listings.
    FeedbackTranslator {
        hydrator: FeedbackHydrator,
        list: FeedbackListPayload,
        entries: feedbacks,
        schema: registry::feedback_list,
        label: "feedback",
    }
);

define_translator!(
    /// Translator for upstream transaction listings.
    TransactionTranslator {
        hydrator: TransactionHydrator,
        list: TransactionListPayload,
        entries: transactions,
        schema: registry::transaction_list,
        label: "transaction",
    }
);

/// Translator for upstream authentication responses.
///
/// Tokens arrive one at a time, so there is no listing operation.
#[derive(Debug, Default, Clone, Copy)]
pub struct AuthTranslator {
    hydrator: AuthTokenHydrator,
}

impl AuthTranslator {
    /// Build the translator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gate an untrusted token payload, then translate it.
    pub fn decode(&self, raw: &Value) -> Result<AuthToken, TranslateError> {
        let payload = self.hydrator.as_payload(raw)?;
        Ok(self.translate_entry(&payload)?)
    }

    /// Translate one token payload.
    pub fn translate_entry(&self, entry: &AuthTokenPayload) -> Result<AuthToken, HydrationError> {
        self.hydrator.hydrate(entry).inspect_err(|error| {
            warn!(%error, "auth token rejected");
        })
    }
}

/// The full translator graph, built once at start-up.
///
/// Consumers receive this by reference from whoever wires the process
/// together; nothing here is looked up through a global container.
#[derive(Debug, Default, Clone)]
pub struct Translators {
    /// Cemetery listings.
    pub cemeteries: CemeteryTranslator,
    /// Customer listings.
    pub customers: CustomerTranslator,
    /// User listings.
    pub users: UserTranslator,
    /// Visit listings.
    pub visits: VisitTranslator,
    /// Schedule listings.
    pub schedules: ScheduleTranslator,
    /// Feedback listings.
    pub feedbacks: FeedbackTranslator,
    /// Transaction listings.
    pub transactions: TransactionTranslator,
    /// Authentication responses.
    pub auth: AuthTranslator,
}

impl Translators {
    /// Build every translator and the hydrator graph underneath.
    pub fn new() -> Self {
        Self::default()
    }
}
