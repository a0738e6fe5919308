// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive single-property animation lab.
//!
//! A user configures one visual transform (offset, scale, rotation,
//! opacity, or background color) through a form, plays it on a preview
//! element, applies canned presets, and copies the equivalent playback code.
//!
//! # Key entry points
//!
//! - [`lab::AnimationLab`] - wires user actions to everything below
//! - [`form::build_from_form`] / [`form::apply_to_form`] - form to
//!   descriptor and back
//! - [`animation::PlaybackController`] - at most one running animation,
//!   with reset-before-start
//! - [`code::render`] - the playback-code snippet
//! - [`presets::PresetCatalog`] - builtin and TOML preset catalogs
//! - [`options::LabOptions`] - target element, rest style, fallbacks
//!
//! # Architecture
//!
//! The DOM, the tweening engine, and the clipboard are reached only through
//! traits ([`form::FormFields`], [`animation::PreviewElement`],
//! [`animation::TweenEngine`], [`clipboard::Clipboard`]). The `web` feature
//! implements them on top of `web-sys` and anime.js; natively,
//! [`form::MemoryForm`] and [`animation::TimelineEngine`] stand in.

pub mod animation;
pub mod clipboard;
pub mod code;
pub mod error;
pub mod form;
pub mod lab;
pub mod options;
pub mod presets;
#[cfg(feature = "web")]
pub mod web;

pub use error::LabError;
pub use lab::{AnimationLab, LabCommand};
