use std::collections::HashMap;

use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;
use sms_composer::models::context::{ContextInput, FALLBACK_BUSINESS_NAME, TemplateContext};

/// Test: The empty input still yields a fully-keyed context
#[test]
fn test_empty_input_is_fully_defaulted() {
    let context = TemplateContext::prepare(ContextInput::default());

    assert_eq!(context.customer_name, "");
    assert_eq!(context.customer_first_name, "");
    assert_eq!(context.customer_address, "");
    assert_eq!(context.price, 0.0);
    assert_eq!(context.scheduled_date, None);
    assert_eq!(context.business_name, FALLBACK_BUSINESS_NAME);
    assert_eq!(context.service_type, "");
    assert!(!context.is_direct_debit_active);
    assert_eq!(context.review_link, "");
}

/// Test: Supplied fields survive the merge untouched
#[test]
fn test_partial_input_merges_over_defaults() {
    let input = ContextInput {
        customer_name: Some("Jane Doe".to_string()),
        business_name: Some("SoloWipe".to_string()),
        price: Some(25.0),
        ..Default::default()
    };

    let context = TemplateContext::prepare(input);

    assert_eq!(context.customer_name, "Jane Doe");
    assert_eq!(context.business_name, "SoloWipe");
    assert_eq!(context.price, 25.0);
    assert_eq!(context.customer_address, "");
}

/// Test: A blank business name resolves to the fallback identity
#[test]
fn test_blank_business_name_uses_fallback() {
    let input = ContextInput {
        business_name: Some("   ".to_string()),
        ..Default::default()
    };

    let context = TemplateContext::prepare(input);

    assert_eq!(context.business_name, FALLBACK_BUSINESS_NAME);
}

/// Test: First name derives from the full name when absent
#[test]
fn test_first_name_derived_from_full_name() {
    let input = ContextInput {
        customer_name: Some("Jane Doe".to_string()),
        ..Default::default()
    };

    let context = TemplateContext::prepare(input);

    assert_eq!(context.customer_first_name, "Jane");
}

/// Test: An explicit first name wins over derivation
#[test]
fn test_explicit_first_name_preferred() {
    let input = ContextInput {
        customer_name: Some("Jane Doe".to_string()),
        customer_first_name: Some("Janey".to_string()),
        ..Default::default()
    };

    let context = TemplateContext::prepare(input);

    assert_eq!(context.customer_first_name, "Janey");
}

/// Test: The variable bag accepts upstream field spellings as aliases
#[test]
fn test_from_variables_resolves_aliases() -> Result<()> {
    let mut variables = HashMap::new();
    variables.insert("customer_firstName".to_string(), json!("Jane"));
    variables.insert("addressLine1".to_string(), json!("12 High Street"));
    variables.insert("jobTotal".to_string(), json!(25));
    variables.insert("scheduledDate".to_string(), json!("2026-08-08"));
    variables.insert("isDirectDebitActive".to_string(), json!(true));

    let input = ContextInput::from_variables(&variables)?;

    assert_eq!(input.customer_first_name.as_deref(), Some("Jane"));
    assert_eq!(input.customer_address.as_deref(), Some("12 High Street"));
    assert_eq!(input.price, Some(25.0));
    assert_eq!(
        input.scheduled_date,
        NaiveDate::from_ymd_opt(2026, 8, 8)
    );
    assert_eq!(input.is_direct_debit_active, Some(true));

    Ok(())
}

/// Test: Unrecognized fields in the bag are ignored
#[test]
fn test_from_variables_ignores_unknown_fields() -> Result<()> {
    let mut variables = HashMap::new();
    variables.insert("customer_name".to_string(), json!("Jane Doe"));
    variables.insert("favourite_colour".to_string(), json!("teal"));

    let input = ContextInput::from_variables(&variables)?;

    assert_eq!(input.customer_name.as_deref(), Some("Jane Doe"));

    Ok(())
}

/// Test: Nested values are rejected at the boundary, not paniced on
#[test]
fn test_from_variables_rejects_nested_values() {
    let mut variables = HashMap::new();
    variables.insert("customer_name".to_string(), json!({"first": "Jane"}));

    let result = ContextInput::from_variables(&variables);

    assert!(result.is_err(), "Nested values should be a caller error");
}
