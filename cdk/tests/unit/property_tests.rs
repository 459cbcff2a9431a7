//! Property-based tests for configuration pass-through and stack naming.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::expect_used)]

use proptest::prelude::*;

use customer_agent_cdk::application::services::bootstrap::bootstrap;
use customer_agent_cdk::application::services::config_service::resolve_settings;
use customer_agent_cdk::domain::{App, DeployEnv, synthesize, validate_stack_name};

use crate::helpers::{RecordingStackFactory, env_map};

// ============================================================================
// Account / region pass-through
// ============================================================================

proptest! {
    /// Any string reaches the stack unchanged: no format checks on either value.
    #[test]
    fn prop_values_pass_through_unvalidated(
        account in "[ -~]{0,24}",
        region in "[ -~]{0,24}",
    ) {
        let settings = resolve_settings(
            env_map(&[("AWS_ACCOUNT_ID", account.as_str()), ("AWS_REGION", region.as_str())]),
            env_map(&[]),
        )
        .expect("resolve");

        let factory = RecordingStackFactory::default();
        let mut app = App::new();
        bootstrap(&mut app, &factory, &settings.deploy_env()).expect("bootstrap");

        let calls = factory.calls.borrow();
        prop_assert_eq!(calls[0].1.env.account.as_deref(), Some(account.as_str()));
        prop_assert_eq!(calls[0].1.env.region.as_deref(), Some(region.as_str()));
    }

    /// The process environment wins for every key it sets.
    #[test]
    fn prop_process_value_always_wins(
        file_region in "[a-z0-9-]{1,16}",
        process_region in "[a-z0-9-]{1,16}",
    ) {
        let settings = resolve_settings(
            env_map(&[("AWS_REGION", file_region.as_str())]),
            env_map(&[("AWS_REGION", process_region.as_str())]),
        )
        .expect("resolve");
        prop_assert_eq!(settings.aws_region.as_deref(), Some(process_region.as_str()));
    }

    /// Synthesizing the same app twice yields the same assembly.
    #[test]
    fn prop_synthesis_is_deterministic(
        account in proptest::option::of("[0-9]{12}"),
        region in proptest::option::of("[a-z]{2}-[a-z]{4,9}-[1-3]"),
    ) {
        let factory = RecordingStackFactory::default();
        let mut app = App::new();
        bootstrap(&mut app, &factory, &DeployEnv::new(account, region)).expect("bootstrap");
        prop_assert_eq!(synthesize(&app), synthesize(&app));
    }
}

// ============================================================================
// validate_stack_name()
// ============================================================================

proptest! {
    /// Names built from the allowed alphabet are accepted.
    #[test]
    fn prop_well_formed_names_accepted(name in "[A-Za-z][A-Za-z0-9-]{0,127}") {
        prop_assert!(validate_stack_name(&name).is_ok(), "rejected: {name}");
    }

    /// A leading digit or hyphen is always rejected.
    #[test]
    fn prop_bad_first_char_rejected(name in "[0-9-][A-Za-z0-9-]{0,20}") {
        prop_assert!(validate_stack_name(&name).is_err(), "accepted: {name}");
    }
}

#[test]
fn test_stack_name_length_limit() {
    let max = format!("A{}", "b".repeat(127));
    assert!(validate_stack_name(&max).is_ok());
    let over = format!("A{}", "b".repeat(128));
    assert!(validate_stack_name(&over).is_err());
    assert!(validate_stack_name("").is_err());
    assert!(validate_stack_name("Customer_Agent").is_err());
}
