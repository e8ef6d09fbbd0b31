//! dwpub
//!
//! A lightweight Rust library for pushing charts to Datawrapper via its
//! REST API (v3). Pairs with the `dwpub` CLI.
//!
//! ### Features
//! - Create a chart with a title, chart type, and metadata overrides
//! - Upload tabular data as CSV (wholesale replacement of the chart's data)
//! - Publish the chart and derive its public viewing URL
//!
//! Operations map 1:1 onto Datawrapper endpoints and report outcomes as
//! simple values: `create_chart` returns the new chart ID or `None`,
//! `update_chart_data` and `publish_chart` return `bool`. Failures are
//! logged, never raised — callers sequence the three steps themselves.
//!
//! ### Example
//! ```no_run
//! use dwpub::{Client, Dataset};
//!
//! let client = Client::new("my-api-token");
//! let data = Dataset::new()
//!     .with_text_column("Year", ["2020", "2021", "2022"])
//!     .with_numeric_column("Urban", [1_000_000.0, 1_100_000.0, 1_200_000.0]);
//!
//! if let Some(id) = client.create_chart("Population", "d3-bars-stacked", None) {
//!     if client.update_chart_data(&id, &data) && client.publish_chart(&id) {
//!         println!("live at {}", dwpub::public_url(&id));
//!     }
//! }
//! ```

pub mod api;
pub mod errors;
pub mod models;
pub mod storage;

pub use api::{Client, public_url};
pub use errors::ClientError;
pub use models::{ChartInfo, Column, Dataset};
