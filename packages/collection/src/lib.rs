//! Ordered collection wrapper for Utilify
//!
//! `Collection` wraps a [`Map`] and exposes the `utilify` array helpers as
//! methods. Every method converts to the plain map form, calls the helper,
//! and wraps the result; there is no logic of its own here.
//!
//! # Example
//!
//! ```rust
//! use utilify_collection::{collect, Collection};
//! use utilify::Value;
//!
//! let dotted = collect([
//!     ("user.name", Value::from("Ann")),
//!     ("user.email", Value::from("")),
//! ]);
//!
//! let nested: Collection = dotted.undot();
//! assert!(nested.get("user").is_some());
//! ```

mod collection;

pub use collection::{collect, Collection};

// Re-export the types the methods take and return
pub use utilify::{Condition, Conditions, EncodeOptions, Error, Map, Result, Value};
