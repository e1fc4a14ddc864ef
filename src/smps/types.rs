use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::args::format_span;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PerformanceSpec {
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub endpoint_url: Option<String>,
    pub client: Option<ClientSpec>,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientSpec {
    pub internal: Option<bool>,
    pub load_generator: Option<String>,
    pub protocol: Option<String>,
    pub connections: Option<u64>,
    pub rps: Option<f64>,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub cookies: BTreeMap<String, String>,
    pub body: Option<String>,
    pub content_type: Option<String>,
}

impl PerformanceSpec {
    /// Test length as `end_time - start_time`, rendered as a span string.
    ///
    /// A window that ends before it starts renders with a leading `-` so that
    /// it fails span validation instead of silently becoming zero.
    #[must_use]
    pub fn duration_text(&self) -> Option<String> {
        let (start, end) = (self.start_time?, self.end_time?);
        let delta = end.signed_duration_since(start);
        let text = match delta.to_std() {
            Ok(span) => format_span(span),
            Err(_negative) => {
                let span = (-delta).to_std().unwrap_or_default();
                format!("-{}", format_span(span))
            }
        };
        Some(text)
    }

    #[must_use]
    pub fn endpoint_url(&self) -> Option<&str> {
        self.endpoint_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    #[must_use]
    pub fn connections_text(&self) -> Option<String> {
        self.client
            .as_ref()?
            .connections
            .map(|connections| connections.to_string())
    }

    #[must_use]
    pub fn rps_text(&self) -> Option<String> {
        self.client.as_ref()?.rps.map(|rps| rps.to_string())
    }

    #[must_use]
    pub fn load_generator(&self) -> Option<&str> {
        self.client
            .as_ref()?
            .load_generator
            .as_deref()
            .filter(|name| !name.is_empty())
    }
}
