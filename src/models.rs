use num_format::{Locale, ToFormattedString};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::slug::to_slug;

/// Placeholder substituted for any missing optional field during normalization.
pub const NOT_AVAILABLE: &str = "N/A";

fn na() -> String {
    NOT_AVAILABLE.to_string()
}

/// Name object as served by the API. `nativeName` only appears in the detail
/// projection; list queries leave it out entirely.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawName {
    #[serde(default)]
    pub common: Option<String>,
    #[serde(default, rename = "nativeName")]
    pub native_name: Option<BTreeMap<String, RawNativeName>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawNativeName {
    #[serde(default)]
    pub official: Option<String>,
    #[serde(default)]
    pub common: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFlags {
    #[serde(default)]
    pub png: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

/// Raw country record from the list endpoints (`/all`, `/name`, `/region`).
///
/// The source guarantees nothing: every field may be absent or null, so each
/// one is optional here and collapses to a fallback during normalization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCountry {
    #[serde(default)]
    pub name: Option<RawName>,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub flags: Option<RawFlags>,
}

/// Normalized country as exposed to consumers (one row = one country).
///
/// String fields hold the `"N/A"` sentinel when the API omitted them, so the
/// rendering layer never sees a null. `population` stays an explicit optional
/// number; use [`Country::display_population`] for the presentation string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Country {
    pub name: String,
    pub capital: String,
    pub region: String,
    pub population: Option<u64>,
    pub flag_image_url: String,
    pub flag_image_alt: String,
    /// Stable routing identifier derived from `name`; the API has no
    /// canonical country id.
    pub slug: String,
}

impl Country {
    /// Population with thousands separators ("67,000,000"), or `"N/A"` when
    /// the API did not report one.
    pub fn display_population(&self) -> String {
        match self.population {
            Some(p) => p.to_formatted_string(&Locale::en),
            None => na(),
        }
    }
}

impl From<RawCountry> for Country {
    fn from(raw: RawCountry) -> Self {
        let RawCountry {
            name,
            capital,
            region,
            population,
            flags,
        } = raw;
        let name = name.and_then(|n| n.common).unwrap_or_else(na);
        let capital = first_or_na(capital);
        let region = region.unwrap_or_else(na);
        let flags = flags.unwrap_or_default();
        let slug = to_slug(&name);
        Self {
            name,
            capital,
            region,
            population,
            flag_image_url: flags.png.unwrap_or_else(na),
            flag_image_alt: flags.alt.unwrap_or_else(na),
            slug,
        }
    }
}

/// Normalize a raw response array item-wise.
///
/// Pure and order-preserving: output has the same length as the input and
/// `output[i]` derives from `input[i]`. Nothing is filtered; partial records
/// degrade to sentinel fields instead of failing the whole batch.
pub fn map_countries_details(raw: Vec<RawCountry>) -> Vec<Country> {
    raw.into_iter().map(Country::from).collect()
}

fn first_or_na(list: Option<Vec<String>>) -> String {
    list.and_then(|mut l| {
        if l.is_empty() {
            None
        } else {
            Some(l.swap_remove(0))
        }
    })
    .unwrap_or_else(na)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCurrency {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// Raw record from the detail lookup (wider field projection).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCountryDetails {
    #[serde(default)]
    pub name: Option<RawName>,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub tld: Option<Vec<String>>,
    #[serde(default)]
    pub currencies: Option<BTreeMap<String, RawCurrency>>,
    #[serde(default)]
    pub languages: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub borders: Option<Vec<String>>,
    #[serde(default)]
    pub flags: Option<RawFlags>,
}

/// Full per-country record backing a detail view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountryDetails {
    pub name_common: String,
    pub name_native: String,
    pub capital: String,
    pub region: String,
    pub sub_region: String,
    pub population: Option<u64>,
    pub top_level_domain: String,
    pub flag_image_url: String,
    pub flag_image_alt: String,
    /// Currency display names, sorted by currency code.
    pub currencies: Vec<String>,
    /// Language display names, sorted by language code.
    pub languages: Vec<String>,
    /// Bordering countries as cca3 codes, in API order.
    pub bordering_countries: Vec<String>,
    pub slug: String,
}

impl CountryDetails {
    /// See [`Country::display_population`].
    pub fn display_population(&self) -> String {
        match self.population {
            Some(p) => p.to_formatted_string(&Locale::en),
            None => na(),
        }
    }
}

impl From<RawCountryDetails> for CountryDetails {
    fn from(raw: RawCountryDetails) -> Self {
        let RawCountryDetails {
            name,
            capital,
            region,
            subregion,
            population,
            tld,
            currencies,
            languages,
            borders,
            flags,
        } = raw;
        let (name_common, name_native) = match name {
            Some(n) => {
                let native = n
                    .native_name
                    .unwrap_or_default()
                    .into_values()
                    .find_map(|v| v.common.or(v.official));
                (
                    n.common.unwrap_or_else(na),
                    native.unwrap_or_else(na),
                )
            }
            None => (na(), na()),
        };
        let flags = flags.unwrap_or_default();
        let slug = to_slug(&name_common);
        Self {
            name_common,
            name_native,
            capital: first_or_na(capital),
            region: region.unwrap_or_else(na),
            sub_region: subregion.unwrap_or_else(na),
            population,
            top_level_domain: first_or_na(tld),
            flag_image_url: flags.png.unwrap_or_else(na),
            flag_image_alt: flags.alt.unwrap_or_else(na),
            currencies: currencies
                .unwrap_or_default()
                .into_values()
                .filter_map(|c| c.name)
                .collect(),
            languages: languages.unwrap_or_default().into_values().collect(),
            bordering_countries: borders.unwrap_or_default(),
            slug,
        }
    }
}
