//! Fluent builder for filtered job listings.
//!
//! # Invariants
//! - Each builder owns its own parameter map; builders never share state
//! - Setting a parameter twice keeps the last value
//! - `execute` neither consumes nor changes the builder, so executing again
//!   yields a traverser over the same parameters

use crate::client::JobsClient;
use crate::models::QueryParams;
use crate::pagination::Traverser;

const FIELDS: &str = "fields";
const BRAND: &str = "brand";
const COUNTRY: &str = "country";
const CITY: &str = "city";
const ZIP: &str = "zip";

/// Accumulates listing parameters for a [`JobsClient`].
///
/// ```rust,ignore
/// let jobs = client
///     .begin_query()
///     .of_brand("netto")
///     .in_country("dk")
///     .pick(["id", "title"])
///     .execute()
///     .collect_all()
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct JobsQuery<'a> {
    client: &'a JobsClient,
    params: QueryParams,
}

impl<'a> JobsQuery<'a> {
    pub(crate) fn new(client: &'a JobsClient) -> Self {
        Self {
            client,
            params: QueryParams::new(),
        }
    }

    /// Set any query parameter, replacing a previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Restrict the returned fields. Replaces any earlier selection.
    pub fn pick<I, S>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = fields
            .into_iter()
            .map(|field| field.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.set(FIELDS, joined)
    }

    /// Filter by brand.
    pub fn of_brand(&mut self, brand: impl Into<String>) -> &mut Self {
        self.set(BRAND, brand)
    }

    /// Filter by country.
    pub fn in_country(&mut self, country: impl Into<String>) -> &mut Self {
        self.set(COUNTRY, country)
    }

    /// Filter by city.
    pub fn in_city(&mut self, city: impl Into<String>) -> &mut Self {
        self.set(CITY, city)
    }

    /// Filter by postal code.
    pub fn in_zip(&mut self, zip: impl Into<String>) -> &mut Self {
        self.set(ZIP, zip)
    }

    /// Parameters accumulated so far.
    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    /// Run the query through the owning client.
    pub fn execute(&self) -> Traverser {
        self.client.query(self.params.clone())
    }
}
