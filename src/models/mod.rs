//! Value types returned to callers of the storage client.
//!
//! Nothing here is persisted by this crate; these are transient per-call
//! results that serialize naturally as JSON for the surrounding API.

pub mod object;
