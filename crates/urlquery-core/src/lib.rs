//! Order-preserving URL query strings.
//!
//! Query strings are decoded into an [`OrderedMultiMap`] that keeps every
//! pair in its original position, duplicates included, and serializes back in
//! the same order.

pub mod codec;
pub mod config;
pub mod error;
pub mod logging;
pub mod multimap;
pub mod params;

pub use codec::DecodeOutcome;
pub use error::{ArityError, DecodeError, QueryError};
pub use multimap::{Entry, Iter, OrderedMultiMap};
pub use params::{ParseOutcome, QueryParams};
