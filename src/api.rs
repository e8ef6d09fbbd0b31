//! Synchronous client for the **Datawrapper API (v3)**.
//!
//! Three operations, one endpoint each:
//! - `create_chart` → `POST /charts`
//! - `update_chart_data` → `PUT /charts/{id}/data` (CSV body)
//! - `publish_chart` → `POST /charts/{id}/publish`
//!
//! ### Notes
//! - Outcomes are reported as plain values (`Option<String>` / `bool`);
//!   errors are logged at the operation boundary and never propagate.
//! - No operation retries or validates input; sequencing create → update →
//!   publish is the caller's job, and the remote service is the sole source
//!   of truth for chart state.
//! - `base_url` is public so tests can point the client at a local fake
//!   server.

use crate::errors::ClientError;
use crate::models::{ChartInfo, Dataset, create_chart_body};
use crate::storage;
use log::{error, info};
use reqwest::blocking::{Client as HttpClient, Response};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::redirect::Policy;
use serde_json::{Map, Value};
use std::time::Duration;

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.datawrapper.de/v3";

/// CDN host serving published charts.
pub const PUBLIC_CDN_URL: &str = "https://datawrapper.dwcdn.net";

/// Public viewing URL of a published chart.
pub fn public_url(chart_id: &str) -> String {
    format!("{}/{}", PUBLIC_CDN_URL, chart_id)
}

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    token: String,
    http: HttpClient,
}

impl Client {
    /// Build a client around a static bearer token.
    pub fn new(token: impl Into<String>) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("dwpub/", env!("CARGO_PKG_VERSION"))) // set user agent
            .build()
            .expect("reqwest client build");
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            token: token.into(),
            http,
        }
    }

    /// Create a new chart.
    ///
    /// The request body always enables stacking via
    /// `metadata.visualize.stacking`; `metadata` entries are shallow-merged
    /// over the top level of the body (see
    /// [`create_chart_body`](crate::models::create_chart_body) for the
    /// replacement quirk this implies).
    ///
    /// Returns the service-assigned chart ID, or `None` after logging the
    /// error on any transport or HTTP failure.
    pub fn create_chart(
        &self,
        title: &str,
        chart_type: &str,
        metadata: Option<&Map<String, Value>>,
    ) -> Option<String> {
        match self.try_create_chart(title, chart_type, metadata) {
            Ok(id) => {
                info!("created chart {}", id);
                Some(id)
            }
            Err(e) => {
                error!("failed to create chart: {}", e);
                None
            }
        }
    }

    /// Replace a chart's data wholesale with the dataset serialized as CSV.
    ///
    /// Returns `true` only on a 2xx response; `false` (after logging) on any
    /// failure.
    pub fn update_chart_data(&self, chart_id: &str, data: &Dataset) -> bool {
        match self.try_update_chart_data(chart_id, data) {
            Ok(()) => {
                info!("updated data for chart {}", chart_id);
                true
            }
            Err(e) => {
                error!("failed to update data for chart {}: {}", chart_id, e);
                false
            }
        }
    }

    /// Publish a chart, making it publicly visible. Same contract as
    /// [`update_chart_data`](Self::update_chart_data).
    pub fn publish_chart(&self, chart_id: &str) -> bool {
        match self.try_publish_chart(chart_id) {
            Ok(()) => {
                info!("published chart {}", chart_id);
                true
            }
            Err(e) => {
                error!("failed to publish chart {}: {}", chart_id, e);
                false
            }
        }
    }

    fn try_create_chart(
        &self,
        title: &str,
        chart_type: &str,
        metadata: Option<&Map<String, Value>>,
    ) -> Result<String, ClientError> {
        let body = create_chart_body(title, chart_type, metadata);
        let resp = self
            .http
            .post(format!("{}/charts", self.base_url))
            .header(AUTHORIZATION, self.bearer())
            .json(&body)
            .send()?;
        let chart: ChartInfo = check_status(resp)?.json()?;
        Ok(chart.id)
    }

    fn try_update_chart_data(&self, chart_id: &str, data: &Dataset) -> Result<(), ClientError> {
        let csv = storage::to_csv(data)?;
        let resp = self
            .http
            .put(format!("{}/charts/{}/data", self.base_url, chart_id))
            .header(AUTHORIZATION, self.bearer())
            .header(CONTENT_TYPE, "text/csv")
            .body(csv)
            .send()?;
        check_status(resp)?;
        Ok(())
    }

    fn try_publish_chart(&self, chart_id: &str) -> Result<(), ClientError> {
        let resp = self
            .http
            .post(format!("{}/charts/{}/publish", self.base_url, chart_id))
            .header(AUTHORIZATION, self.bearer())
            .send()?;
        check_status(resp)?;
        Ok(())
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

fn check_status(resp: Response) -> Result<Response, ClientError> {
    if resp.status().is_success() {
        Ok(resp)
    } else {
        Err(ClientError::Status(resp.status()))
    }
}
