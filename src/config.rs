use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;
use tracing::warn;

use crate::{dispatch::Platform, models::records::BusinessProfile};

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    pub business_name: String,
    pub review_link: String,
    pub platform: String,
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let config = envy::from_env::<Self>()
            .map_err(|_| anyhow!("Invalid or missing environmental variable"))?;
        Ok(config)
    }

    /// Configured platform, degrading to target detection on an unknown value.
    pub fn platform(&self) -> Platform {
        match self.platform.parse() {
            Ok(platform) => platform,
            Err(e) => {
                warn!(error = %e, "Falling back to platform detection");
                Platform::detect()
            }
        }
    }

    pub fn business_profile(&self) -> BusinessProfile {
        BusinessProfile {
            name: Some(self.business_name.clone()),
            review_link: Some(self.review_link.clone()),
        }
    }
}
