//! Common type definitions shared across the API surface

pub mod response;

pub use response::ResponseStatus;
