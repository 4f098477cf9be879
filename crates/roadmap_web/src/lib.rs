//! The IFRS AI roadmap page as a Leptos CSR app.
//!
//! [`ui_model`] holds the view decisions (theme button, root presentation,
//! tab attributes, evidence notes) and is tested on the host. The components
//! live in the `web` module, compiled only with the `web` feature:
//!
//! ```text
//! cargo check -p roadmap_web --features web
//! trunk serve crates/roadmap_web/index.html
//! ```
//!
//! The first line type-checks every component natively; Trunk builds the
//! wasm32 bundle.

pub mod ui_model;

/// Without the `web` feature there is no page to mount.
#[cfg(not(feature = "web"))]
pub fn placeholder() {}

#[cfg(feature = "web")]
mod web;

#[cfg(feature = "web")]
pub use web::start;
