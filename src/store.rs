//! Shared country browsing state and its fetch operations.
//!
//! A [`CountryStore`] owns the `{is_fetching, countries}` pair the rendering
//! layer reads, and routes every mutation through its fetch operations. The
//! store is a plain value passed by reference to consumers; it is `Send +
//! Sync`, so any caller thread may fetch while others read snapshots.
//!
//! Overlapping fetches are legal. Each operation captures a generation token
//! at start; on settlement a country-list result is applied to the shared
//! collection only if its token is still the newest issued, so the
//! last-started fetch wins regardless of arrival order. Search results are
//! returned to the caller without touching the shared collection at all.

use crate::api::{ApiError, Client};
use crate::models::{Country, CountryDetails, RawCountry, map_countries_details};
use crate::slug::from_slug;
use anyhow::{Context, Result, bail};
use log::warn;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Envelope returned by every fetch operation: `Ok(data)` on success,
/// `Err(errors)` when the request failed. Errors are captured, never
/// panicked, so the caller can branch on the envelope alone.
pub type FetchResult = Result<Vec<Country>>;

#[derive(Debug, Default)]
struct StoreState {
    is_fetching: bool,
    countries: Vec<Country>,
}

/// Process-wide country state plus the client it fetches through.
///
/// Lives for the application session; there is no teardown. The shared
/// `countries` collection only serves the browse-all case and is fully
/// replaced, never appended to, on each successful [`fetch_all_countries`].
///
/// [`fetch_all_countries`]: CountryStore::fetch_all_countries
#[derive(Debug, Default)]
pub struct CountryStore {
    client: Client,
    state: Mutex<StoreState>,
    generation: AtomicU64,
}

impl CountryStore {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            state: Mutex::new(StoreState::default()),
            generation: AtomicU64::new(0),
        }
    }

    /// True between the start of a fetch operation and its settlement.
    pub fn is_fetching(&self) -> bool {
        self.state.lock().expect("store state lock").is_fetching
    }

    /// Snapshot of the browsed collection, populated by
    /// [`CountryStore::fetch_all_countries`].
    pub fn countries(&self) -> Vec<Country> {
        self.state.lock().expect("store state lock").countries.clone()
    }

    /// Fetch and normalize every country, replacing the shared collection on
    /// success (unless a newer fetch has started since, in which case the
    /// stale list is returned to the caller but not stored).
    pub fn fetch_all_countries(&self) -> FetchResult {
        let token = self.begin_fetch();
        let outcome = self.client.all();
        self.settle_all(token, outcome)
    }

    /// Search countries by name. The result is handed back to the caller
    /// only; the shared collection is left alone.
    pub fn search_countries_by_name(&self, name: &str) -> FetchResult {
        let _token = self.begin_fetch();
        let outcome = self.client.by_name(name);
        self.settle_search(outcome)
            .with_context(|| format!("search countries by name {name:?}"))
    }

    /// Search countries by region. Same contract as
    /// [`CountryStore::search_countries_by_name`].
    pub fn search_countries_by_region(&self, region: &str) -> FetchResult {
        let _token = self.begin_fetch();
        let outcome = self.client.by_region(region);
        self.settle_search(outcome)
            .with_context(|| format!("search countries by region {region:?}"))
    }

    /// Resolve a route slug back into a search term and fetch that country's
    /// full details.
    ///
    /// The slug is lossy, so the API lookup may return several candidates;
    /// an exact case-insensitive name match is preferred, otherwise the first
    /// result is taken. Errors if the lookup comes back empty.
    pub fn find_country_by_slug(&self, slug: &str) -> Result<CountryDetails> {
        let term = from_slug(slug);
        let _token = self.begin_fetch();
        let outcome = self.client.find_by_name(&term);
        self.state.lock().expect("store state lock").is_fetching = false;
        let raw = outcome.with_context(|| format!("find country for slug {slug:?}"))?;
        let mut details: Vec<CountryDetails> =
            raw.into_iter().map(CountryDetails::from).collect();
        if details.is_empty() {
            bail!("no country found for slug {slug:?}");
        }
        let exact = details
            .iter()
            .position(|d| d.name_common.eq_ignore_ascii_case(&term));
        Ok(details.swap_remove(exact.unwrap_or(0)))
    }

    /// Issue a generation token and raise `is_fetching`.
    fn begin_fetch(&self) -> u64 {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.lock().expect("store state lock").is_fetching = true;
        token
    }

    /// Settle a fetch-all operation: clear `is_fetching` on every path, then
    /// apply the normalized list to shared state iff `token` is still the
    /// newest issued.
    fn settle_all(&self, token: u64, outcome: Result<Vec<RawCountry>, ApiError>) -> FetchResult {
        let normalized = outcome.map(map_countries_details);
        let mut state = self.state.lock().expect("store state lock");
        state.is_fetching = false;
        match normalized {
            Ok(list) => {
                if token == self.generation.load(Ordering::SeqCst) {
                    state.countries = list.clone();
                } else {
                    warn!("discarding stale country list from fetch generation {token}");
                }
                Ok(list)
            }
            Err(e) => Err(e).context("fetch all countries"),
        }
    }

    /// Settle a search operation: clear `is_fetching`, hand the normalized
    /// list (or the captured error) straight back.
    fn settle_search(
        &self,
        outcome: Result<Vec<RawCountry>, ApiError>,
    ) -> Result<Vec<Country>, ApiError> {
        let normalized = outcome.map(map_countries_details);
        self.state.lock().expect("store state lock").is_fetching = false;
        normalized
    }
}
