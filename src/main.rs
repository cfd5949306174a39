use anyhow::{Error, Result};
use sms_composer::config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::load()?;

    info!(
        business = %config.business_name,
        platform = %config.platform(),
        "Configuration validated. Composer is ready."
    );

    Ok(())
}
