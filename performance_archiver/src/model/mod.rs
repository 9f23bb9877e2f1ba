//!
//! The archive data model.
//!

pub mod configuration;
pub mod machine;
pub mod result;
pub mod test;
pub mod value;
