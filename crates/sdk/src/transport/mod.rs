//! Transport layer for the Coolify SDK.

pub mod http;

pub use http::HttpTransport;
