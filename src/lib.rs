pub mod colors;
pub mod fetch;
pub mod handler;
pub mod model;
pub mod nhl;
pub mod season;
pub mod standings;

pub use fetch::{Fetch, FetchError};
pub use nhl::NhlApi;
