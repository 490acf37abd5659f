//! Leptos UI components for the landing page.
//!
//! # Component Hierarchy
//!
//! ```text
//! LandingDocument
//! └── LandingSection
//!     ├── logo <img>
//!     ├── headline
//!     │   └── WordCyclerView
//!     ├── subtitle
//!     ├── call-to-action <a>
//!     └── illustration <img>
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_landing`] or
//! [`crate::render_section`], but can be embedded in other layouts:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use landing_section::components::LandingSection;
//! use landing_section::config::LandingConfig;
//!
//! view! {
//!     <main>
//!         <LandingSection config=LandingConfig::default() />
//!     </main>
//! }
//! ```

mod document;
mod landing_section;
mod word_cycler;

pub use document::LandingDocument;
pub use landing_section::LandingSection;
pub use word_cycler::WordCyclerView;
