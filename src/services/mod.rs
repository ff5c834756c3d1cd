pub mod ipinfo;

pub use ipinfo::{IpInfoClient, LookupOutcome};
