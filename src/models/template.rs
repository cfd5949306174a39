use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

/// UI origin of a messaging request. Every trigger maps to exactly one
/// template category; anything without a dedicated catalog entry renders
/// from the general pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerType {
    ReviewRequest,
    OnMyWay,
    PaymentReminder,
    TomorrowReminder,
    Generic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateCategory {
    General,
    Review,
    OnMyWay,
    PaymentReminder,
    TomorrowReminder,
}

impl TriggerType {
    pub fn category(self) -> TemplateCategory {
        match self {
            TriggerType::ReviewRequest => TemplateCategory::Review,
            TriggerType::OnMyWay => TemplateCategory::OnMyWay,
            TriggerType::PaymentReminder => TemplateCategory::PaymentReminder,
            TriggerType::TomorrowReminder => TemplateCategory::TomorrowReminder,
            TriggerType::Generic => TemplateCategory::General,
        }
    }
}

/// One message phrasing. Bodies contain `{{field}}` substitution points and
/// `[[ ... ]]` fragments that are dropped wholesale when every field inside
/// them is still at its sentinel value. Direct-Debit customers get the
/// alternate body when one is registered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageTemplate {
    pub id: String,
    pub body: String,
    pub body_direct_debit: Option<String>,
}

impl MessageTemplate {
    pub fn new(id: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            body: body.into(),
            body_direct_debit: None,
        }
    }

    pub fn with_direct_debit_body(mut self, body: impl Into<String>) -> Self {
        self.body_direct_debit = Some(body.into());
        self
    }
}

/// A rendered candidate handed to the presentation surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedMessage {
    pub template_id: String,
    pub text: String,
}

impl Display for TriggerType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            TriggerType::ReviewRequest => write!(f, "review_request"),
            TriggerType::OnMyWay => write!(f, "on_my_way"),
            TriggerType::PaymentReminder => write!(f, "payment_reminder"),
            TriggerType::TomorrowReminder => write!(f, "tomorrow_reminder"),
            TriggerType::Generic => write!(f, "generic"),
        }
    }
}

impl Display for TemplateCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            TemplateCategory::General => write!(f, "general"),
            TemplateCategory::Review => write!(f, "review"),
            TemplateCategory::OnMyWay => write!(f, "on_my_way"),
            TemplateCategory::PaymentReminder => write!(f, "payment_reminder"),
            TemplateCategory::TomorrowReminder => write!(f, "tomorrow_reminder"),
        }
    }
}
