pub mod client;
pub mod source;
pub mod types;

pub use client::{DEFAULT_BASE_URL, RestCountriesClient};
pub use source::{ApiError, CountrySource};
