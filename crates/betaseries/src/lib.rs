//! Client for the BetaSeries v3 API.
//!
//! ```no_run
//! # async fn run() -> Result<(), betaseries::ApiError> {
//! use betaseries::{Client, Locale, params::ShowsDisplayParams};
//!
//! let client = Client::new("api-key").with_locale(Locale::En);
//! let show = client.shows().display(ShowsDisplayParams {
//!     id: Some(1161),
//!     ..Default::default()
//! }).await?;
//! println!("{}", show.title);
//! # Ok(())
//! # }
//! ```

pub mod types;
pub mod decode;
pub mod query;
pub mod errors;
pub mod config;
pub mod models;
pub mod params;
pub mod api;
pub mod shows;
pub mod badges;

pub use api::{ApiError, Client};
pub use badges::{Badge, BadgeService};
pub use config::{ClientConfig, ConfigError};
pub use errors::{ErrorEntry, ErrorList};
pub use shows::ShowService;
pub use types::{InvalidValue, Locale};
