//! HTTP client for the api-sports.io football standings endpoint.

mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::{Client, Credentials};
pub use self::errors::Error;
pub use self::query::{Query, StandingsQuery};
