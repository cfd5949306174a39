use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{
    send_event::{SendEvent, SendEventLog},
    template::TriggerType,
};

/// Mobile OS family the deep link targets. The two families disagree on the
/// separator ahead of the body key, and on nothing else we care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
}

impl Platform {
    pub fn detect() -> Self {
        if cfg!(any(target_os = "ios", target_os = "macos")) {
            Platform::Ios
        } else {
            Platform::Android
        }
    }

    fn body_separator(self) -> char {
        match self {
            Platform::Ios => '&',
            Platform::Android => '?',
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            other => Err(format!("Unknown platform '{}'", other)),
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Ios => write!(f, "ios"),
            Platform::Android => write!(f, "android"),
        }
    }
}

/// Builds the messaging deep link for `platform` with the body pre-filled.
/// The OS routes it to the native SMS composer; the draft is never auto-sent.
pub fn build_deep_link(platform: Platform, phone_number: &str, body: &str) -> String {
    format!(
        "sms:{}{}body={}",
        normalize_phone(phone_number),
        platform.body_separator(),
        urlencoding::encode(body)
    )
}

fn normalize_phone(phone_number: &str) -> String {
    phone_number
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Navigation capability. Production routes through the OS URL opener; tests
/// substitute a recorder.
pub trait Navigate {
    fn navigate(&self, uri: &str);
}

pub struct SystemNavigator;

impl Navigate for SystemNavigator {
    fn navigate(&self, uri: &str) {
        // Transport failure has no reliable error channel across platforms.
        if let Err(e) = open::that(uri) {
            debug!(error = %e, "Messaging hand-off not confirmed");
        }
    }
}

/// Fire-and-forget hand-off to the device's messaging app, with optional
/// send-history recording.
pub struct Dispatcher {
    platform: Platform,
    navigator: Box<dyn Navigate>,
    log: SendEventLog,
}

impl Dispatcher {
    pub fn new(platform: Platform) -> Self {
        Self::with_navigator(platform, Box::new(SystemNavigator))
    }

    pub fn with_navigator(platform: Platform, navigator: Box<dyn Navigate>) -> Self {
        Self {
            platform,
            navigator,
            log: SendEventLog::new(),
        }
    }

    /// Assumes a valid, non-empty phone number; the trigger-site guard owns
    /// that check. Records a [`SendEvent`] only when `job_id` is supplied.
    pub fn send(
        &mut self,
        phone_number: &str,
        message: &str,
        trigger: TriggerType,
        job_id: Option<&str>,
    ) {
        let uri = build_deep_link(self.platform, phone_number, message);

        debug!(
            trigger = %trigger,
            message_length = message.len(),
            "Handing message off to the OS composer"
        );

        self.navigator.navigate(&uri);

        if let Some(job_id) = job_id {
            self.log.record(SendEvent::new(
                phone_number.to_string(),
                job_id.to_string(),
                trigger,
                message.len(),
            ));
        }
    }

    pub fn history(&self) -> &[SendEvent] {
        self.log.events()
    }
}
