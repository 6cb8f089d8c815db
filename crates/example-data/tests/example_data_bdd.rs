//! Behavioural tests for example-data crate.
//!
//! These tests validate the crate's behaviour against Gherkin scenarios
//! covering registry parsing, service lookup, and validation.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use example_data::{RegistryError, SeedRegistry, ServiceSeed};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

// ============================================================================
// Test fixtures and constants
// ============================================================================

/// Base valid registry JSON used by multiple Given steps.
const VALID_REGISTRY_JSON: &str = r#"{
    "version": 1,
    "pointsBalance": 1247,
    "services": [
        {
            "id": "cleaning-1",
            "name": "Pool Cleaning",
            "company": "AquaPro Services",
            "description": "Complete pool cleaning",
            "price": 85,
            "duration": "1-2 hours",
            "popular": true,
            "createdAt": "2024-01-15"
        },
        {
            "id": "repair-1",
            "name": "Equipment Repair",
            "company": "TechPool Solutions",
            "description": "Pump and filter repair",
            "price": 120,
            "duration": "2-4 hours",
            "createdAt": "2024-01-10"
        }
    ],
    "tiers": [
        {"name": "Basic", "color": "gray", "pointsRequired": 0},
        {"name": "Silver", "color": "slate", "pointsRequired": 1000}
    ]
}"#;

/// Test world holding the registry input and parse outcome.
#[derive(Default, ScenarioState)]
struct World {
    json_input: Slot<String>,
    registry_result: Slot<Result<SeedRegistry, RegistryError>>,
    lookup_result: Slot<Result<ServiceSeed, RegistryError>>,
}

impl World {
    /// Extracts the valid registry from the world state.
    fn registry(&self) -> SeedRegistry {
        self.registry_result
            .get()
            .expect("registry should be set")
            .expect("registry should be valid")
    }

    /// Extracts the registry result (Ok or Err) from the world state.
    fn registry_result(&self) -> Result<SeedRegistry, RegistryError> {
        self.registry_result
            .get()
            .expect("registry result should be set")
    }

    fn lookup_result(&self) -> Result<ServiceSeed, RegistryError> {
        self.lookup_result.get().expect("lookup should have run")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("a valid seed registry JSON")]
fn a_valid_seed_registry_json(world: &World) {
    world.json_input.set(VALID_REGISTRY_JSON.to_owned());
}

#[given("a valid seed registry")]
fn a_valid_seed_registry(world: &World) {
    let registry = SeedRegistry::from_json(VALID_REGISTRY_JSON).expect("valid test registry");
    world.registry_result.set(Ok(registry));
}

#[given("malformed JSON")]
fn malformed_json(world: &World) {
    world.json_input.set("not valid json".to_owned());
}

#[given("registry JSON with empty services array")]
fn registry_json_with_empty_services_array(world: &World) {
    let json = r#"{
        "version": 1,
        "services": [],
        "tiers": [{"name": "Basic", "color": "gray", "pointsRequired": 0}]
    }"#;
    world.json_input.set(json.to_owned());
}

#[given("registry JSON with a repeated order id")]
fn registry_json_with_a_repeated_order_id(world: &World) {
    let order = r#"{
        "id": "ORD-001",
        "service": "Pool Cleaning",
        "company": "AquaPro Services",
        "pool": "Main Pool",
        "date": "2024-01-15",
        "time": "2:00 PM",
        "technician": {"name": "Mike Johnson", "phone": "(555) 123-4567", "rating": 4.8},
        "status": "upcoming",
        "price": 85,
        "finalPrice": 85
    }"#;
    let json = format!(
        r#"{{
            "version": 1,
            "services": [{{"id": "a", "name": "A", "company": "C", "description": "D", "price": 1, "duration": "1h", "createdAt": "2024-01-01"}}],
            "tiers": [{{"name": "Basic", "color": "gray", "pointsRequired": 0}}],
            "orders": [{order}, {order}]
        }}"#
    );
    world.json_input.set(json);
}

// ============================================================================
// When steps
// ============================================================================

#[when("the registry is parsed")]
fn the_registry_is_parsed(world: &World) {
    let json_opt = world.json_input.get();
    let json = json_opt.expect("JSON input should be set");
    let result = SeedRegistry::from_json(&json);
    world.registry_result.set(result);
}

#[when("the service {id} is looked up")]
fn the_service_is_looked_up(world: &World, id: String) {
    let registry = world.registry();
    let result = registry.find_service(&id).cloned();
    world.lookup_result.set(result);
}

// ============================================================================
// Then steps
// ============================================================================

#[then("parsing succeeds")]
fn parsing_succeeds(world: &World) {
    let result = world.registry_result();
    assert!(result.is_ok(), "Expected parsing to succeed: {result:?}");
}

#[then("the registry contains {count:usize} services")]
fn the_registry_contains_services(world: &World, count: usize) {
    assert_eq!(world.registry().services().len(), count);
}

#[then("the service is priced at {price:i32}")]
fn the_service_is_priced_at(world: &World, price: i32) {
    let service = world.lookup_result().expect("service should exist");
    assert_eq!(service.price, price);
}

#[then("the lookup reports the service as missing")]
fn the_lookup_reports_the_service_as_missing(world: &World) {
    match world.lookup_result() {
        Err(RegistryError::ServiceNotFound { .. }) => {}
        other => panic!("Expected ServiceNotFound, got: {other:?}"),
    }
}

#[then("parsing fails with a parse error")]
fn parsing_fails_with_a_parse_error(world: &World) {
    match world.registry_result() {
        Err(RegistryError::ParseError { .. }) => {}
        other => panic!("Expected ParseError, got: {other:?}"),
    }
}

#[then("parsing fails with empty services error")]
fn parsing_fails_with_empty_services_error(world: &World) {
    match world.registry_result() {
        Err(RegistryError::EmptyServices) => {}
        other => panic!("Expected EmptyServices, got: {other:?}"),
    }
}

#[then("parsing fails with a duplicate orders id")]
fn parsing_fails_with_a_duplicate_orders_id(world: &World) {
    match world.registry_result() {
        Err(RegistryError::DuplicateId {
            collection: "orders",
            index: 1,
            ..
        }) => {}
        other => panic!("Expected DuplicateId for orders, got: {other:?}"),
    }
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Valid registry parses successfully"
)]
fn valid_registry_parses_successfully(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Known service is found by id"
)]
fn known_service_is_found_by_id(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Unknown service is reported"
)]
fn unknown_service_is_reported(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Invalid JSON fails parsing"
)]
fn invalid_json_fails_parsing(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Empty services array fails parsing"
)]
fn empty_services_array_fails_parsing(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Repeated order id fails parsing"
)]
fn repeated_order_id_fails_parsing(world: World) {
    let _ = world;
}
