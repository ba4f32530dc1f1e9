//! Research Portal Client
//!
//! A terminal client for the COVID-19 research paper portal. Browses papers
//! by topic, runs full-text searches and drills into treatments through the
//! portal's JSON API, rendering paper cards, publication histograms and
//! treatment details as text.
//!
//! # Features
//!
//! - **Typed API client**: every portal endpoint, with lenient response parsing
//! - **Views**: topic, search and treatment pages with filters and "show more"
//! - **Ordered refreshes**: late responses from superseded requests are dropped
//!
//! # Example
//!
//! ```no_run
//! use research_portal::{Config, PortalClient, PortalView, Route};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = PortalClient::new(&config)?;
//!
//!     let view = PortalView::new(client, Route::parse("/vaccine")?, &config);
//!     view.load().await;
//!     println!("{}", research_portal::formatters::format_page(
//!         view.route(),
//!         &view.snapshot().await,
//!         config.debug,
//!     ));
//!     Ok(())
//! }
//! ```

pub mod browse;
pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod query;
pub mod route;
pub mod view;

pub use client::PortalClient;
pub use config::Config;
pub use error::{ClientError, RouteError};
pub use route::Route;
pub use view::PortalView;
