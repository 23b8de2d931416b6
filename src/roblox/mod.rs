pub mod error;
pub mod group;
pub mod user;

pub use error::Error;

use crate::APP_USER_AGENT;
use chrono::Utc;
use reqwest::Client;
use serde_json::Value;
use std::fmt;
use tracing::{Instrument, debug, info_span};
use url::Url;

/// Which remote record a lookup targets. The kind selects the endpoint
/// template, the default host and the projection applied to the decoded body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    User,
    Group,
}

impl Kind {
    #[must_use]
    pub const fn default_base_url(self) -> &'static str {
        match self {
            Self::User => "https://users.roblox.com",
            Self::Group => "https://groups.roblox.com",
        }
    }

    #[must_use]
    pub fn path(self, id: &str) -> String {
        match self {
            Self::User => format!("/v1/users/{id}"),
            Self::Group => format!("/v1/groups/{id}"),
        }
    }

    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::User => "Enter the User ID:",
            Self::Group => "Enter the Group ID:",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Group => write!(f, "group"),
        }
    }
}

fn client() -> Result<Client, Error> {
    Ok(Client::builder().user_agent(APP_USER_AGENT).build()?)
}

/// # Errors
/// Returns an error if `base` cannot be parsed, has no host, or uses an
/// unsupported scheme.
pub fn endpoint_url(base: &str, path: &str) -> Result<String, Error> {
    let url = Url::parse(base).map_err(|error| Error::Endpoint(error.to_string()))?;

    let scheme = url.scheme();

    let host = url
        .host()
        .ok_or_else(|| Error::Endpoint("no host specified".to_string()))?
        .to_owned();

    let port = match url.port() {
        Some(p) => p,
        None => match scheme {
            "http" => 80,
            "https" => 443,
            _ => return Err(Error::Endpoint(format!("unsupported scheme {scheme}"))),
        },
    };

    let endpoint_url = format!("{scheme}://{host}:{port}{path}");

    debug!("endpoint URL: {}", endpoint_url);

    Ok(endpoint_url)
}

/// Fetch one record from the remote service.
///
/// The body is only read and decoded on a success status.
/// # Errors
/// Returns [`Error::Transport`] when the request cannot be completed,
/// [`Error::Status`] on a non-success response, and [`Error::Decode`] when
/// the body is not valid JSON.
pub async fn fetch(base: &str, kind: Kind, id: &str) -> Result<Value, Error> {
    let url = endpoint_url(base, &kind.path(id))?;

    let span = info_span!(
        "roblox.fetch",
        http.method = "GET",
        url = %url
    );
    let response = client()?.get(&url).send().instrument(span).await?;

    if !response.status().is_success() {
        return Err(Error::Status {
            status: response.status(),
        });
    }

    let body = response.text().await?;

    Ok(serde_json::from_str(&body)?)
}

/// Look up one entity and render its report.
/// # Errors
/// Fails exactly when [`fetch`] fails; rendering itself cannot fail.
pub async fn lookup(base: &str, kind: Kind, id: &str) -> Result<String, Error> {
    let record = fetch(base, kind, id).await?;

    Ok(match kind {
        Kind::User => user::report(&record, Utc::now()),
        Kind::Group => group::report(&record),
    })
}

// Optional text fields count as present only when non-blank.
pub(crate) fn text_or<'a>(record: &'a Value, field: &str, default: &'a str) -> &'a str {
    record
        .get(field)
        .and_then(Value::as_str)
        .filter(|text| !text.trim().is_empty())
        .unwrap_or(default)
}
