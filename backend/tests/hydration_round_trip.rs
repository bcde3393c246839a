//! End-to-end coverage of the wire boundary.
//!
//! Drives the full path an upstream response takes: raw JSON text through
//! the reader port, the schema gate, entry translation into domain
//! aggregates, and dehydration back out to a JSON-serialisable payload.

use reien_backend::domain::{
    CustomerStatus, JsonReader, JsonWriter, PayloadReader, PayloadWriter,
};
use reien_backend::hydration::Hydrator;
use reien_backend::hydration::entities::CustomerHydrator;
use reien_backend::{TranslateError, Translators};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[fixture]
fn translators() -> Translators {
    init_tracing();
    Translators::new()
}

fn customer_entry() -> Value {
    json!({
        "identifier": "01890a5d-ac96-774b-bcce-b302099a8001",
        "name": {"first": "Hanako", "last": "Sato"},
        "address": {
            "postalCode": {"first": "150", "second": "0041"},
            "prefecture": "Tokyo",
            "city": "Shibuya",
            "street": "1-2-3 Jinnan",
            "building": "Aoba Building 4F"
        },
        "phone": {"areaCode": "03", "localCode": "1234", "subscriberNumber": "5678"},
        "mailAddress": "hanako@example.jp",
        "status": "ACTIVE",
        "cemeteryIdentifiers": [
            "01890a5d-ac96-774b-bcce-b302099a8002",
            "01890a5d-ac96-774b-bcce-b302099a8003"
        ]
    })
}

#[rstest]
fn upstream_text_round_trips_to_the_wire(translators: Translators) {
    let envelope = json!({"customers": [customer_entry()]});
    let text = JsonWriter.write(&envelope).expect("serialisable envelope");

    // Inbound: text -> untyped value -> schema gate -> domain.
    let raw = JsonReader.read(&text).expect("parseable text");
    let customers = translators.customers.decode(&raw).expect("valid envelope");
    assert_eq!(customers.len(), 1);
    let customer = &customers[0];
    assert_eq!(customer.status(), CustomerStatus::Active);
    assert_eq!(customer.name().first(), "Hanako");
    assert_eq!(customer.address().postal_code().first(), "150");
    assert_eq!(
        customer
            .mail_address()
            .expect("mail address present")
            .domain(),
        "example.jp"
    );

    // Outbound: domain -> payload -> JSON value, field for field.
    let hydrator = CustomerHydrator::default();
    let dehydrated =
        serde_json::to_value(hydrator.dehydrate(customer)).expect("serialisable payload");
    assert_eq!(dehydrated, customer_entry());
}

#[rstest]
fn double_encoded_enums_survive_the_full_path(translators: Translators) {
    let mut entry = customer_entry();
    entry["status"] = json!("\"INACTIVE\"");
    let customers = translators
        .customers
        .decode(&json!({"customers": [entry]}))
        .expect("coerced status");
    assert_eq!(customers[0].status(), CustomerStatus::Inactive);
}

#[rstest]
fn the_gate_reports_every_structural_violation_at_once(translators: Translators) {
    let mut entry = customer_entry();
    entry["identifier"] = json!("not-a-uuid");
    entry["status"] = json!("BOGUS");
    entry["phone"]["areaCode"] = json!("zero-three");
    let err = translators
        .customers
        .decode(&json!({"customers": [entry]}))
        .expect_err("broken entry should fail");
    let TranslateError::Schema(schema_err) = err else {
        panic!("expected the structural tier, got {err:?}");
    };
    let paths: Vec<&str> = schema_err
        .violations()
        .iter()
        .map(|violation| violation.path.as_str())
        .collect();
    assert_eq!(
        paths,
        [
            "customers[0].identifier",
            "customers[0].phone.areaCode",
            "customers[0].status"
        ]
    );
}

#[rstest]
fn nested_schedules_translate_depth_first(translators: Translators) {
    let envelope = json!({"schedules": [{
        "identifier": "01890a5d-ac96-774b-bcce-b302099a8010",
        "customerIdentifier": "01890a5d-ac96-774b-bcce-b302099a8001",
        "frequencyType": "YEARLY",
        "startsAt": "2026-08-13T09:00:00Z",
        "subSchedules": [{
            "identifier": "01890a5d-ac96-774b-bcce-b302099a8011",
            "customerIdentifier": "01890a5d-ac96-774b-bcce-b302099a8001",
            "frequencyType": "MONTHLY",
            "startsAt": "2026-09-13T09:00:00Z",
            "subSchedules": [{
                "identifier": "01890a5d-ac96-774b-bcce-b302099a8012",
                "customerIdentifier": "01890a5d-ac96-774b-bcce-b302099a8001",
                "frequencyType": "WEEKLY",
                "startsAt": "2026-09-20T09:00:00Z",
                "subSchedules": null
            }]
        }]
    }]});
    let schedules = translators
        .schedules
        .decode(&envelope)
        .expect("valid nested envelope");
    assert_eq!(schedules.len(), 1);
    assert_eq!(schedules[0].tree_size(), 3);
    let second_level = schedules[0].sub_schedules().expect("one nested level");
    assert_eq!(
        second_level[0].frequency_type(),
        reien_backend::domain::FrequencyType::Monthly
    );
}

#[rstest]
fn domain_failures_pass_the_gate_and_fail_in_hydration(translators: Translators) {
    // A syntactically plausible but impossible date: the pattern-based gate
    // accepts it, the chrono parse inside hydration rejects it.
    let envelope = json!({"visits": [{
        "identifier": "01890a5d-ac96-774b-bcce-b302099a8020",
        "customerIdentifier": "01890a5d-ac96-774b-bcce-b302099a8001",
        "cemeteryIdentifier": "01890a5d-ac96-774b-bcce-b302099a8002",
        "visitedAt": "2026-02-30T09:00:00Z",
        "note": "bring flowers"
    }]});
    let err = translators
        .visits
        .decode(&envelope)
        .expect_err("impossible date should fail");
    assert!(matches!(err, TranslateError::Hydration(_)));
}
