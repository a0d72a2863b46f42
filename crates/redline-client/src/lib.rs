//! Client for the redaction server endpoints

pub mod backend;
pub mod http;

pub use backend::RedactionBackend;
pub use http::HttpBackend;
