use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Read-only customer record supplied by the persistence layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub name: String,
    pub first_name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub direct_debit_active: bool,
}

/// Read-only job record supplied by the persistence layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: String,
    pub price: f64,
    pub scheduled_date: Option<NaiveDate>,
    pub service_type: Option<String>,
}

/// Read-only business identity from the profile/settings layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub name: Option<String>,
    pub review_link: Option<String>,
}
