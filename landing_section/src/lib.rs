//! # landing-section
//!
//! Leptos SSR renderer for the AKS Labs landing section.
//!
//! The section is a logo, a headline whose last words are cycled by a
//! typewriter animation, a subtitle, a call-to-action link and an
//! illustration, laid out in a two-column grid.
//!
//! ## Quick Start
//!
//! ```rust
//! use landing_section::{render_landing, config::LandingConfig};
//!
//! let html = render_landing(&LandingConfig::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("/docs/intro"));
//! ```
//!
//! ## Architecture
//!
//! - [`config`] - every literal the section renders, loadable from TOML
//! - [`cycler`] - the [`cycler::WordCycler`] trait, its strategies and the
//!   timer that drives a mounted cycler
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS and the inline browser script
//! - [`mount`] - a section with a live cycler
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering uses Leptos 0.8's `RenderHtml` trait; no reactive runtime or
//! hydration is involved, so rendering is a pure function of the config.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod config;
pub mod cycler;
pub mod error;
pub mod mount;
pub mod styles;

use components::{LandingDocument, LandingSection};
use config::LandingConfig;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

pub use error::ConfigError;
pub use mount::MountedSection;

/// Render the complete landing page.
///
/// Produces a standalone HTML document, including `<!DOCTYPE html>`, the
/// inline stylesheet and the script that animates the headline in a browser.
///
/// # Example
///
/// ```rust
/// use landing_section::{render_landing, config::LandingConfig};
///
/// let html = render_landing(&LandingConfig::default());
/// assert!(html.contains("Browse Workshops"));
/// ```
pub fn render_landing(config: &LandingConfig) -> String {
    let doc = view! { <LandingDocument config=config.clone() /> };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render only the section fragment, with the cycler in its initial (empty)
/// state.
pub fn render_section(config: &LandingConfig) -> String {
    render_section_with_text(config, String::new())
}

/// Render the section fragment with `cycler_text` in the headline slot.
pub fn render_section_with_text(config: &LandingConfig, cycler_text: String) -> String {
    view! { <LandingSection config=config.clone() cycler_text=cycler_text /> }.to_html()
}
