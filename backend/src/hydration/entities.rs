//! Hydrators for the domain aggregates.
//!
//! Every aggregate hydrator delegates each field to the hydrator for that
//! field's type; none of them restate nested conversion logic. Enum fields
//! go through the closed-enumeration coercion, so a double-encoded literal
//! is tolerated on the way in and always emitted plain on the way out.

use super::payload::{
    AuthTokenPayload, CemeteryPayload, CustomerPayload, FeedbackPayload, SchedulePayload,
    TransactionPayload, UserPayload, VisitPayload,
};
use super::values::{
    AddressHydrator, IdentifierHydrator, MailAddressHydrator, NameHydrator, PhoneHydrator,
    format_timestamp, parse_timestamp,
};
use super::{Hydrator, HydrationError, ListHydrator, OptionalHydrator, registry, schema::Schema};
use crate::domain::{
    AuthToken, Cemetery, CemeteryId, CemeteryType, Customer, CustomerId, CustomerStatus,
    Feedback, FeedbackId, FrequencyType, Schedule, ScheduleId, TokenType, TransactionHistory,
    TransactionId, TransactionType, User, UserId, UserRole, Visit, VisitId, coerce_member,
};

/// Hydrator for [`Cemetery`].
#[derive(Debug, Default, Clone)]
pub struct CemeteryHydrator {
    identifier: IdentifierHydrator<CemeteryId>,
    customer_identifier: IdentifierHydrator<CustomerId>,
    address: AddressHydrator,
}

impl Hydrator for CemeteryHydrator {
    type Domain = Cemetery;
    type Payload = CemeteryPayload;

    fn schema(&self) -> &'static Schema {
        registry::cemetery()
    }

    fn hydrate(&self, payload: &Self::Payload) -> Result<Self::Domain, HydrationError> {
        let id = self.identifier.hydrate(&payload.identifier)?;
        let customer_id = self.customer_identifier.hydrate(&payload.customer_identifier)?;
        let cemetery_type: CemeteryType = coerce_member(&payload.cemetery_type)?;
        let address = self.address.hydrate(&payload.address)?;
        Cemetery::new(
            id,
            customer_id,
            cemetery_type,
            &payload.name,
            address,
            payload.note.clone(),
        )
        .map_err(HydrationError::invariant)
    }

    fn dehydrate(&self, domain: &Self::Domain) -> Self::Payload {
        CemeteryPayload {
            identifier: self.identifier.dehydrate(domain.id()),
            customer_identifier: self.customer_identifier.dehydrate(domain.customer_id()),
            cemetery_type: domain.cemetery_type().as_str().to_owned(),
            name: domain.name().to_owned(),
            address: self.address.dehydrate(domain.address()),
            note: domain.note().map(str::to_owned),
        }
    }
}

/// Hydrator for [`Customer`].
#[derive(Debug, Default, Clone)]
pub struct CustomerHydrator {
    identifier: IdentifierHydrator<CustomerId>,
    name: NameHydrator,
    address: AddressHydrator,
    phone: PhoneHydrator,
    mail_address: OptionalHydrator<MailAddressHydrator>,
    cemetery_identifiers: ListHydrator<IdentifierHydrator<CemeteryId>>,
}

impl Hydrator for CustomerHydrator {
    type Domain = Customer;
    type Payload = CustomerPayload;

    fn schema(&self) -> &'static Schema {
        registry::customer()
    }

    fn hydrate(&self, payload: &Self::Payload) -> Result<Self::Domain, HydrationError> {
        let id = self.identifier.hydrate(&payload.identifier)?;
        let name = self.name.hydrate(&payload.name)?;
        let address = self.address.hydrate(&payload.address)?;
        let phone = self.phone.hydrate(&payload.phone)?;
        let mail_address = self.mail_address.hydrate(payload.mail_address.as_ref())?;
        let status: CustomerStatus = coerce_member(&payload.status)?;
        let cemetery_ids = self
            .cemetery_identifiers
            .hydrate(&payload.cemetery_identifiers)?;
        Ok(Customer::new(
            id,
            name,
            address,
            phone,
            mail_address,
            status,
            cemetery_ids,
        ))
    }

    fn dehydrate(&self, domain: &Self::Domain) -> Self::Payload {
        CustomerPayload {
            identifier: self.identifier.dehydrate(domain.id()),
            name: self.name.dehydrate(domain.name()),
            address: self.address.dehydrate(domain.address()),
            phone: self.phone.dehydrate(domain.phone()),
            mail_address: self.mail_address.dehydrate(domain.mail_address()),
            status: domain.status().as_str().to_owned(),
            cemetery_identifiers: self.cemetery_identifiers.dehydrate(domain.cemetery_ids()),
        }
    }
}

/// Hydrator for [`User`].
#[derive(Debug, Default, Clone)]
pub struct UserHydrator {
    identifier: IdentifierHydrator<UserId>,
    name: NameHydrator,
    address: AddressHydrator,
    phone: PhoneHydrator,
    mail_address: MailAddressHydrator,
}

impl Hydrator for UserHydrator {
    type Domain = User;
    type Payload = UserPayload;

    fn schema(&self) -> &'static Schema {
        registry::user()
    }

    fn hydrate(&self, payload: &Self::Payload) -> Result<Self::Domain, HydrationError> {
        let id = self.identifier.hydrate(&payload.identifier)?;
        let name = self.name.hydrate(&payload.name)?;
        let address = self.address.hydrate(&payload.address)?;
        let phone = self.phone.hydrate(&payload.phone)?;
        let mail_address = self.mail_address.hydrate(&payload.mail_address)?;
        let role: UserRole = coerce_member(&payload.role)?;
        Ok(User::new(id, name, address, phone, mail_address, role))
    }

    fn dehydrate(&self, domain: &Self::Domain) -> Self::Payload {
        UserPayload {
            identifier: self.identifier.dehydrate(domain.id()),
            name: self.name.dehydrate(domain.name()),
            address: self.address.dehydrate(domain.address()),
            phone: self.phone.dehydrate(domain.phone()),
            mail_address: self.mail_address.dehydrate(domain.mail_address()),
            role: domain.role().as_str().to_owned(),
        }
    }
}

/// Hydrator for [`Visit`].
#[derive(Debug, Default, Clone)]
pub struct VisitHydrator {
    identifier: IdentifierHydrator<VisitId>,
    customer_identifier: IdentifierHydrator<CustomerId>,
    cemetery_identifier: IdentifierHydrator<CemeteryId>,
}

impl Hydrator for VisitHydrator {
    type Domain = Visit;
    type Payload = VisitPayload;

    fn schema(&self) -> &'static Schema {
        registry::visit()
    }

    fn hydrate(&self, payload: &Self::Payload) -> Result<Self::Domain, HydrationError> {
        let id = self.identifier.hydrate(&payload.identifier)?;
        let customer_id = self.customer_identifier.hydrate(&payload.customer_identifier)?;
        let cemetery_id = self.cemetery_identifier.hydrate(&payload.cemetery_identifier)?;
        let visited_at = parse_timestamp(&payload.visited_at)?;
        Ok(Visit::new(
            id,
            customer_id,
            cemetery_id,
            visited_at,
            payload.note.clone(),
        ))
    }

    fn dehydrate(&self, domain: &Self::Domain) -> Self::Payload {
        VisitPayload {
            identifier: self.identifier.dehydrate(domain.id()),
            customer_identifier: self.customer_identifier.dehydrate(domain.customer_id()),
            cemetery_identifier: self.cemetery_identifier.dehydrate(domain.cemetery_id()),
            visited_at: format_timestamp(&domain.visited_at()),
            note: domain.note().map(str::to_owned),
        }
    }
}

/// Hydrator for [`Schedule`]; recurses through `sub_schedules`.
#[derive(Debug, Default, Clone)]
pub struct ScheduleHydrator {
    identifier: IdentifierHydrator<ScheduleId>,
    customer_identifier: IdentifierHydrator<CustomerId>,
}

impl Hydrator for ScheduleHydrator {
    type Domain = Schedule;
    type Payload = SchedulePayload;

    fn schema(&self) -> &'static Schema {
        registry::schedule()
    }

    fn hydrate(&self, payload: &Self::Payload) -> Result<Self::Domain, HydrationError> {
        let id = self.identifier.hydrate(&payload.identifier)?;
        let customer_id = self.customer_identifier.hydrate(&payload.customer_identifier)?;
        let frequency_type: FrequencyType = coerce_member(&payload.frequency_type)?;
        let starts_at = parse_timestamp(&payload.starts_at)?;
        let sub_schedules = match &payload.sub_schedules {
            None => None,
            Some(entries) => Some(
                entries
                    .iter()
                    .map(|entry| self.hydrate(entry))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
        };
        Ok(Schedule::new(
            id,
            customer_id,
            frequency_type,
            starts_at,
            sub_schedules,
        ))
    }

    fn dehydrate(&self, domain: &Self::Domain) -> Self::Payload {
        SchedulePayload {
            identifier: self.identifier.dehydrate(domain.id()),
            customer_identifier: self.customer_identifier.dehydrate(domain.customer_id()),
            frequency_type: domain.frequency_type().as_str().to_owned(),
            starts_at: format_timestamp(&domain.starts_at()),
            sub_schedules: domain
                .sub_schedules()
                .map(|entries| entries.iter().map(|entry| self.dehydrate(entry)).collect()),
        }
    }
}

/// Hydrator for [`Feedback`].
#[derive(Debug, Default, Clone)]
pub struct FeedbackHydrator {
    identifier: IdentifierHydrator<FeedbackId>,
    customer_identifier: IdentifierHydrator<CustomerId>,
}

impl Hydrator for FeedbackHydrator {
    type Domain = Feedback;
    type Payload = FeedbackPayload;

    fn schema(&self) -> &'static Schema {
        registry::feedback()
    }

    fn hydrate(&self, payload: &Self::Payload) -> Result<Self::Domain, HydrationError> {
        let id = self.identifier.hydrate(&payload.identifier)?;
        let customer_id = self.customer_identifier.hydrate(&payload.customer_identifier)?;
        let posted_at = parse_timestamp(&payload.posted_at)?;
        Feedback::new(id, customer_id, &payload.message, posted_at)
            .map_err(HydrationError::invariant)
    }

    fn dehydrate(&self, domain: &Self::Domain) -> Self::Payload {
        FeedbackPayload {
            identifier: self.identifier.dehydrate(domain.id()),
            customer_identifier: self.customer_identifier.dehydrate(domain.customer_id()),
            message: domain.message().to_owned(),
            posted_at: format_timestamp(&domain.posted_at()),
        }
    }
}

/// Hydrator for [`TransactionHistory`].
#[derive(Debug, Default, Clone)]
pub struct TransactionHydrator {
    identifier: IdentifierHydrator<TransactionId>,
    customer_identifier: IdentifierHydrator<CustomerId>,
}

impl Hydrator for TransactionHydrator {
    type Domain = TransactionHistory;
    type Payload = TransactionPayload;

    fn schema(&self) -> &'static Schema {
        registry::transaction()
    }

    fn hydrate(&self, payload: &Self::Payload) -> Result<Self::Domain, HydrationError> {
        let id = self.identifier.hydrate(&payload.identifier)?;
        let customer_id = self.customer_identifier.hydrate(&payload.customer_identifier)?;
        let transaction_type: TransactionType = coerce_member(&payload.transaction_type)?;
        let recorded_at = parse_timestamp(&payload.recorded_at)?;
        TransactionHistory::new(id, customer_id, transaction_type, payload.amount, recorded_at)
            .map_err(HydrationError::invariant)
    }

    fn dehydrate(&self, domain: &Self::Domain) -> Self::Payload {
        TransactionPayload {
            identifier: self.identifier.dehydrate(domain.id()),
            customer_identifier: self.customer_identifier.dehydrate(domain.customer_id()),
            transaction_type: domain.transaction_type().as_str().to_owned(),
            amount: domain.amount(),
            recorded_at: format_timestamp(&domain.recorded_at()),
        }
    }
}

/// Hydrator for [`AuthToken`].
#[derive(Debug, Default, Clone, Copy)]
pub struct AuthTokenHydrator;

impl Hydrator for AuthTokenHydrator {
    type Domain = AuthToken;
    type Payload = AuthTokenPayload;

    fn schema(&self) -> &'static Schema {
        registry::auth_token()
    }

    fn hydrate(&self, payload: &Self::Payload) -> Result<Self::Domain, HydrationError> {
        let token_type: TokenType = coerce_member(&payload.token_type)?;
        let expires_at = parse_timestamp(&payload.expires_at)?;
        AuthToken::new(token_type, payload.value.as_str(), expires_at)
            .map_err(HydrationError::invariant)
    }

    fn dehydrate(&self, domain: &Self::Domain) -> Self::Payload {
        AuthTokenPayload {
            token_type: domain.token_type().as_str().to_owned(),
            value: domain.value().to_owned(),
            expires_at: format_timestamp(&domain.expires_at()),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Round-trip and invariant coverage for the aggregate hydrators.

    use super::*;
    use crate::hydration::payload::{
        AddressPayload, IdentifierPayload, NamePayload, PhonePayload, PostalCodePayload,
    };
    use rstest::{fixture, rstest};
    use serde_json::json;

    const CUSTOMER_V7: &str = "01890a5d-ac96-774b-bcce-b302099a8057";
    const CEMETERY_V7: &str = "01890a5d-ac96-774b-bcce-b302099a8058";
    const OTHER_CEMETERY_V7: &str = "01890a5d-ac96-774b-bcce-b302099a8059";

    fn address_payload() -> AddressPayload {
        AddressPayload {
            postal_code: PostalCodePayload {
                first: "150".to_owned(),
                second: "0041".to_owned(),
            },
            prefecture: "Tokyo".to_owned(),
            city: "Shibuya".to_owned(),
            street: "1-2-3 Jinnan".to_owned(),
            building: None,
        }
    }

    #[fixture]
    fn customer_payload() -> CustomerPayload {
        CustomerPayload {
            identifier: IdentifierPayload::new(CUSTOMER_V7),
            name: NamePayload {
                first: "Hanako".to_owned(),
                last: "Sato".to_owned(),
            },
            address: address_payload(),
            phone: PhonePayload {
                area_code: "03".to_owned(),
                local_code: "1234".to_owned(),
                subscriber_number: "5678".to_owned(),
            },
            mail_address: Some("hanako@example.jp".to_owned()),
            status: "ACTIVE".to_owned(),
            cemetery_identifiers: vec![
                IdentifierPayload::new(CEMETERY_V7),
                IdentifierPayload::new(OTHER_CEMETERY_V7),
            ],
        }
    }

    #[rstest]
    fn customer_round_trips_value_equal(customer_payload: CustomerPayload) {
        let hydrator = CustomerHydrator::default();
        let customer = hydrator.hydrate(&customer_payload).expect("valid payload");
        let dehydrated = hydrator.dehydrate(&customer);
        assert_eq!(dehydrated, customer_payload);
        let rehydrated = hydrator.hydrate(&dehydrated).expect("round-trip");
        assert_eq!(rehydrated, customer);
    }

    #[rstest]
    fn customer_status_tolerates_double_encoding(mut customer_payload: CustomerPayload) {
        customer_payload.status = "\"ACTIVE\"".to_owned();
        let hydrator = CustomerHydrator::default();
        let customer = hydrator.hydrate(&customer_payload).expect("coerced status");
        assert_eq!(customer.status(), crate::domain::CustomerStatus::Active);
        // Dehydration always emits the plain literal.
        assert_eq!(hydrator.dehydrate(&customer).status, "ACTIVE");
    }

    #[rstest]
    fn customer_preserves_cemetery_order(customer_payload: CustomerPayload) {
        let hydrator = CustomerHydrator::default();
        let customer = hydrator.hydrate(&customer_payload).expect("valid payload");
        let ids: Vec<&str> = customer
            .cemetery_ids()
            .iter()
            .map(|id| id.as_ref())
            .collect();
        assert_eq!(ids, [CEMETERY_V7, OTHER_CEMETERY_V7]);
    }

    #[rstest]
    fn customer_rejects_an_unknown_status(mut customer_payload: CustomerPayload) {
        customer_payload.status = "BOGUS".to_owned();
        let err = CustomerHydrator::default()
            .hydrate(&customer_payload)
            .expect_err("unknown status should fail");
        assert!(matches!(
            err,
            HydrationError::UnknownValue { ref value } if value == "BOGUS"
        ));
    }

    #[rstest]
    fn customer_gate_rejects_a_structurally_broken_payload() {
        let hydrator = CustomerHydrator::default();
        let err = hydrator
            .as_payload(&json!({"identifier": "nope"}))
            .expect_err("missing fields should fail");
        assert!(err.violations().len() > 1);
    }

    #[rstest]
    fn schedule_round_trips_through_nested_levels() {
        let hydrator = ScheduleHydrator::default();
        let payload: SchedulePayload = serde_json::from_value(json!({
            "identifier": "01890a5d-ac96-774b-bcce-b302099a8060",
            "customerIdentifier": CUSTOMER_V7,
            "frequencyType": "MONTHLY",
            "startsAt": "2026-03-01T09:00:00Z",
            "subSchedules": [{
                "identifier": "01890a5d-ac96-774b-bcce-b302099a8061",
                "customerIdentifier": CUSTOMER_V7,
                "frequencyType": "WEEKLY",
                "startsAt": "2026-03-08T09:00:00Z",
                "subSchedules": null
            }]
        }))
        .expect("decodable payload");
        let schedule = hydrator.hydrate(&payload).expect("valid schedule");
        assert_eq!(schedule.tree_size(), 2);
        let dehydrated = hydrator.dehydrate(&schedule);
        assert_eq!(
            hydrator.hydrate(&dehydrated).expect("round-trip"),
            schedule
        );
    }

    #[rstest]
    fn visit_flags_an_unparseable_timestamp() {
        let payload = VisitPayload {
            identifier: IdentifierPayload::new("01890a5d-ac96-774b-bcce-b302099a8062"),
            customer_identifier: IdentifierPayload::new(CUSTOMER_V7),
            cemetery_identifier: IdentifierPayload::new(CEMETERY_V7),
            visited_at: "2026-03-40T00:00:00Z".to_owned(),
            note: None,
        };
        let err = VisitHydrator::default()
            .hydrate(&payload)
            .expect_err("impossible date should fail");
        assert!(matches!(err, HydrationError::InvalidTimestamp { .. }));
    }

    #[rstest]
    fn auth_token_round_trips() {
        let hydrator = AuthTokenHydrator;
        let payload = AuthTokenPayload {
            token_type: "REFRESH".to_owned(),
            value: "opaque-token".to_owned(),
            expires_at: "2026-06-01T00:00:00Z".to_owned(),
        };
        let token = hydrator.hydrate(&payload).expect("valid token");
        assert_eq!(hydrator.dehydrate(&token), payload);
    }
}
