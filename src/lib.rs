//! restcountries_rs
//!
//! A lightweight Rust library for fetching and normalizing country data from
//! the public REST Countries API. It is the data-access layer for a
//! country-browsing front end: the rendering side reads the shared store
//! state and the returned lists, and never talks to the API directly.
//!
//! ### Features
//! - Fetch all countries, or search by name or region, with a restricted
//!   field projection to keep payloads small
//! - Normalize the untrusted API payload into a stable [`Country`] shape
//!   ("N/A" fallbacks, never a null)
//! - Shared `{is_fetching, countries}` state with last-started-wins
//!   settlement for overlapping fetches
//! - URL-friendly slugs for per-country routes, and slug-based detail lookup
//!
//! ### Example
//! ```no_run
//! use restcountries_rs::{Client, CountryStore};
//!
//! let store = CountryStore::new(Client::default());
//! let countries = store.fetch_all_countries()?;
//! for c in &countries {
//!     println!("{} ({}): {}", c.name, c.region, c.display_population());
//! }
//! let france = store.find_country_by_slug("france")?;
//! println!("{} is in {}", france.name_common, france.sub_region);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod models;
pub mod slug;
pub mod store;

pub use api::{ApiError, Client};
pub use models::{Country, CountryDetails, map_countries_details};
pub use slug::{from_slug, to_slug};
pub use store::{CountryStore, FetchResult};
