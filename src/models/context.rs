use std::collections::HashMap;

use anyhow::{Error, Result, anyhow};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identity used when the operator's business profile is absent or blank.
pub const FALLBACK_BUSINESS_NAME: &str = "Your window cleaner";

/// Partial context supplied by a trigger site. Aliases carry the field
/// spellings used by upstream callers; unrecognized fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContextInput {
    pub customer_name: Option<String>,

    #[serde(alias = "customer_firstName")]
    pub customer_first_name: Option<String>,

    #[serde(alias = "addressLine1")]
    pub customer_address: Option<String>,

    #[serde(alias = "amount", alias = "jobTotal")]
    pub price: Option<f64>,

    #[serde(alias = "scheduledDate")]
    pub scheduled_date: Option<NaiveDate>,

    pub business_name: Option<String>,

    #[serde(alias = "serviceType")]
    pub service_type: Option<String>,

    #[serde(alias = "isDirectDebitActive")]
    pub is_direct_debit_active: Option<bool>,

    #[serde(alias = "reviewLink")]
    pub review_link: Option<String>,
}

impl ContextInput {
    /// Adapts a loose variable bag (string/number/boolean leaves only) into a
    /// typed input. Nested values are a caller error.
    pub fn from_variables(variables: &HashMap<String, serde_json::Value>) -> Result<Self, Error> {
        for (key, value) in variables {
            if value.is_object() || value.is_array() {
                return Err(anyhow!("Context variable '{}' must be a scalar", key));
            }
        }

        let bag = serde_json::Value::Object(
            variables
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        );

        serde_json::from_value(bag).map_err(|e| anyhow!("Invalid context variables: {}", e))
    }
}

/// Canonical template context. Every field is always defined; the sentinels
/// are the empty string, zero, `None`, and `false`. Rendering branches on
/// sentinel values only, never on key presence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateContext {
    pub customer_name: String,
    pub customer_first_name: String,
    pub customer_address: String,
    pub price: f64,
    pub scheduled_date: Option<NaiveDate>,
    pub business_name: String,
    pub service_type: String,
    pub is_direct_debit_active: bool,
    pub review_link: String,
}

impl Default for TemplateContext {
    fn default() -> Self {
        Self::prepare(ContextInput::default())
    }
}

impl TemplateContext {
    /// Merges a partial input over the defaults. Pure and total: any input
    /// produces a fully-keyed context.
    pub fn prepare(input: ContextInput) -> Self {
        let customer_name = input.customer_name.unwrap_or_default();

        let customer_first_name = input
            .customer_first_name
            .filter(|name| !name.trim().is_empty())
            .or_else(|| first_token(&customer_name))
            .unwrap_or_default();

        let business_name = input
            .business_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_BUSINESS_NAME.to_string());

        Self {
            customer_name,
            customer_first_name,
            customer_address: input.customer_address.unwrap_or_default(),
            price: input.price.unwrap_or_default(),
            scheduled_date: input.scheduled_date,
            business_name,
            service_type: input.service_type.unwrap_or_default(),
            is_direct_debit_active: input.is_direct_debit_active.unwrap_or_default(),
            review_link: input.review_link.unwrap_or_default(),
        }
    }

    pub fn has_price(&self) -> bool {
        self.price > 0.0
    }
}

fn first_token(name: &str) -> Option<String> {
    name.split_whitespace().next().map(str::to_string)
}
