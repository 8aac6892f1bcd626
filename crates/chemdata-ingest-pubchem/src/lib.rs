//! PubChem ingestion for chemdata
//!
//! Resolves a compound name into a [`CompoundRecord`](chemdata_model::CompoundRecord):
//!
//! ```text
//!   name ──► cache hit? ──yes──► cached record
//!              │ no
//!              ▼
//!   name → CID ──► basic properties ──► experimental properties (best effort)
//!              │
//!              ▼
//!        assembled record ──► cache write
//! ```
//!
//! Every network call goes through the [`Transport`] trait; the production
//! implementation is [`HttpTransport`] (blocking reqwest, fixed per-request
//! timeout). The resolver never surfaces transport errors: failures are logged
//! and the caller sees `None`.

pub mod cache;
pub mod config;
pub mod experimental;
pub mod resolver;
pub mod transport;

pub use cache::{CacheEntry, CacheError, CompoundCache};
pub use config::{Endpoints, PubChemConfig};
pub use experimental::{ExperimentalField, ExperimentalProperties, PropertyPath};
pub use resolver::{CompoundResolver, ResolveError};
pub use transport::{FetchError, HttpTransport, Transport};
