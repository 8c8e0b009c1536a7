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

//! Procedural per-glyph text animation.
//!
//! Glyph-motion displaces, rotates, scales and recolors the quads of laid-out
//! text every tick: waving lines, jittering letters, characters dangling from
//! their top edge, and random color cycling. Text layout and rendering live
//! behind the [`layout::TextLayout`] trait; the engine only reads glyph
//! geometry and writes vertex buffers back.
//!
//! # Key entry points
//!
//! - [`animation::TextAnimator`] - per-text animation state and tick logic
//! - [`animation::TickScheduler`] - fixed-cadence driver for a host loop
//! - [`animation::AnimationWorker`] - background thread owning a layout
//! - [`options::AnimationConfig`] - designer tunables with TOML presets
//! - [`layout::MonospaceLayout`] - a self-contained grid layout

pub mod animation;
pub mod error;
pub mod layout;
pub mod options;
pub mod util;
