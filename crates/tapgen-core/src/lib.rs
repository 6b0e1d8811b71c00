//! Core logic for tapgen: rendering Homebrew formulae from release
//! metadata, loading metadata files, and hashing release artifacts.
//!
//! Rendering itself is a pure function of its inputs (see
//! [`formula::render`]); everything that touches the filesystem lives
//! in [`values`] and [`digest`].

pub mod digest;
pub mod formula;
pub mod values;

pub use formula::{FormulaSkeleton, RenderedManifest, render};
