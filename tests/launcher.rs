//! Integration tests for the launcher engine (properties, scenarios, persistence).

#[path = "launcher/common.rs"]
mod common;
#[path = "launcher/persistence.rs"]
mod persistence;
#[path = "launcher/properties.rs"]
mod properties;
#[path = "launcher/scenarios.rs"]
mod scenarios;
