//! Entity value object
//!
//! An entity is an opaque business record: an entity-type tag (e.g.
//! "Lead") plus a map of attribute values. The validation manager only
//! ever reads the type tag and individual attributes; ownership stays
//! with the caller.

mod types;

pub use types::{Entity, EntityError};
