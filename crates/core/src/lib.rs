//! Cinema catalog domain core.
//!
//! Holds the types shared by the database and HTTP layers, and the two
//! relationship procedures that operate on the store through narrow traits:
//! cast linking ([`cast`]) and favourite-genre aggregation
//! ([`genre_affinity`]).

pub mod cast;
pub mod error;
pub mod genre_affinity;
pub mod store;
pub mod types;
pub mod validation;
