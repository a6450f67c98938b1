//! Domain models for txnpack
//!
//! Pure data types shared by the generation pipeline. A [`Resource`] is
//! created once per embedded file and never mutated afterwards.

pub mod resource;

pub use resource::{Resource, ResourceName, ResourceSet};
