//! Runtime module
//!
//! Streaming primitive used to walk paginated endpoints item by item.

pub mod async_stream;

pub use async_stream::AsyncStream;
