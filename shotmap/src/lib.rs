//! Domain-agnostic building blocks for rendering event maps: JSON file I/O, timing, relative
//! frequencies, colour normalisation and scales, and a minimal SVG document builder.

pub mod colour;
pub mod file;
pub mod freq;
pub mod norm;
pub mod svg;
pub mod timed;

#[doc = include_str!("../../README.md")]
#[cfg(doc)]
fn readme() {}
