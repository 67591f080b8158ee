//! Backend API: wire types and the HTTP client

pub mod client;
pub mod types;

pub use client::{ApiError, CatalogApi, HttpCatalogApi};
pub use types::{Course, FileKind, FileMeta, FileRequest, StatusResponse, Topic};
