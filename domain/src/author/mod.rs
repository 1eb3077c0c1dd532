//! Author subdomain: the author entity and its identifier.

pub mod entities;
pub mod value_objects;
