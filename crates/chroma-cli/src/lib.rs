//! Library surface of the chroma CLI: logging setup, report building and
//! table rendering.

pub mod logging;
pub mod summary;
pub mod types;
