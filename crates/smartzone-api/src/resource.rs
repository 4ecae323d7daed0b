// Read-only resource endpoints
//
// Every collection stage issues exactly one request through `fetch`.
// List-style endpoints take a `listSize` query hint; `query/*`
// endpoints take a POST body with a row `limit`. Neither is paginated:
// a controller holding more than `PAGE_SIZE` entities of one kind is
// silently truncated to the first page.

use serde_json::{Value, json};
use tracing::{debug, trace};

use crate::client::{SmartZoneClient, body_preview};
use crate::error::Error;
use crate::session::Session;

/// Fixed page size / row limit sent with every resource request.
pub const PAGE_SIZE: u32 = 1000;

/// How a resource is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    /// `GET {path}?listSize=1000`
    List,
    /// `POST {path}` with `{"limit": 1000}`
    Query,
}

/// One logical upstream resource: an API-relative path and its query mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub path: String,
    pub mode: QueryMode,
}

impl Resource {
    pub fn list(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            mode: QueryMode::List,
        }
    }

    pub fn query(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            mode: QueryMode::Query,
        }
    }
}

impl SmartZoneClient {
    /// Fetch one resource and parse its body as JSON.
    ///
    /// Transport failures, non-2xx statuses and malformed bodies are all
    /// errors; a 401 is reported as [`Error::SessionExpired`].
    pub async fn fetch(&self, session: &Session, resource: &Resource) -> Result<Value, Error> {
        let mut url = session.base_url().join(resource.path.trim_start_matches('/'))?;
        let headers = session.headers()?;

        let builder = match resource.mode {
            QueryMode::List => {
                url.query_pairs_mut()
                    .append_pair("listSize", &PAGE_SIZE.to_string());
                debug!("GET {}", url);
                self.http().get(url).headers(headers)
            }
            QueryMode::Query => {
                debug!("POST {}", url);
                self.http()
                    .post(url)
                    .headers(headers)
                    .json(&json!({ "limit": PAGE_SIZE }))
            }
        };

        let resp = builder.send().await?;
        let status = resp.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::SessionExpired {
                path: resource.path.clone(),
            });
        }

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Status {
                status: status.as_u16(),
                path: resource.path.clone(),
                body: body_preview(&body),
            });
        }

        let body = resp.text().await?;
        trace!(path = %resource.path, bytes = body.len(), "response received");

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: format!("{e} (body preview: {:?})", body_preview(&body)),
            body,
        })
    }
}
