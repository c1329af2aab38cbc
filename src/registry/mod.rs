//! Registry module - static SDL reference data
//!
//! These registries are reference catalogs with list/serialize operations;
//! the scanning engine's findings can be traced to their requirement ids.

pub mod roadmap;
pub mod sdl;
pub mod stride;
