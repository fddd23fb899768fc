//! Build-configuration composition for the gesso site pipeline.
//!
//! Merges project metadata and registered preprocessing stages into the
//! single, ordered configuration the site-building tool consumes: the
//! extension allow-list, the phase-ordered stage sequence, the resolved
//! adapter parameters and the prerender policy.

pub mod composer;
pub mod manifest;
pub mod profiles;

pub use composer::{assemble, BuildConfiguration, Composer, BASE_EXTENSION};
pub use manifest::{ConfigManifest, KitManifest, PrerenderPolicy};
