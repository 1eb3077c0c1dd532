//! Course subdomain: the course entity, its update representation, patch
//! documents, and validation.

pub mod draft;
pub mod entities;
pub mod patch;
pub mod validation;
pub mod value_objects;
