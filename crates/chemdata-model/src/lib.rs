//! Chemdata record types
//!
//! Shared by every crate in the workspace:
//!
//! ```text
//!   periodic table ──► ElementRecord ──┐
//!                                       ├──► SQLite (elements / compounds)
//!   PubChem API ─────► CompoundRecord ─┘
//! ```
//!
//! Records are flat and serde-friendly: the same shape is written to the
//! compound cache, bound to SQL parameters, and printed by the CLI.

pub mod numeric;
pub mod records;

pub use numeric::extract_number;
pub use records::{CompoundRecord, ElementRecord, FieldValue};
