//! Element ingestion for chemdata
//!
//! The reference provider is a periodic table compiled into the binary
//! (`resources/elements.json`). This crate maps each provider entry into a flat
//! [`ElementRecord`](chemdata_model::ElementRecord):
//!
//! - [`ElementProvider::fetch_all`] is fail-fast: one bad entry aborts the batch.
//! - [`ElementProvider::fetch_one`] never fails; errors are logged and yield `None`.

pub mod provider;
pub mod table;

pub use provider::{to_record, ElementProvider};
pub use table::{ElementData, PeriodicTable};

/// Errors raised while reading the reference provider.
#[derive(Debug, thiserror::Error)]
pub enum ElementError {
    #[error("unknown element: {0}")]
    UnknownElement(String),

    #[error("element {element}: missing or empty `{field}`")]
    MissingField {
        element: String,
        field: &'static str,
    },

    #[error("element {element}: {field} = {value} is out of range")]
    OutOfRange {
        element: String,
        field: &'static str,
        value: i64,
    },

    #[error("periodic table dataset is malformed: {0}")]
    Dataset(String),
}
