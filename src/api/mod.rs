//! HTTP access to the ipgeolocation.io v2 API.

pub mod client;
pub mod request;

pub use client::{ApiClient, ApiResponse};
pub use request::{ApiRequest, Method};
