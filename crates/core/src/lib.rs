//! Domain layer shared by the petbook crates.
//!
//! Holds the common ID/timestamp aliases, the domain error type, and the
//! pure validation logic (meal types, toy colors, photo storage keys) that
//! has no database or HTTP dependencies.

pub mod error;
pub mod feeding;
pub mod naming;
pub mod palette;
pub mod types;
