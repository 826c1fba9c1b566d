//! # searchd-renderer
//!
//! Tera-based rendering of the launchd property lists for the search daemon
//! and its menu-bar helper.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use searchd_core::ServiceKind;
//! use searchd_renderer::{Renderer, TokenValues};
//!
//! fn render_all(home: &Path, tool: &Path, project: &Path) {
//!     let renderer = Renderer::default();
//!     let values = TokenValues::for_home(home, tool, project);
//!     for kind in ServiceKind::all() {
//!         if let Ok(plist) = renderer.render(*kind, &values) {
//!             println!("{kind}: {} bytes", plist.len());
//!         }
//!     }
//! }
//! ```

pub mod engine;
pub mod error;
pub mod tokens;

pub use engine::{render, Renderer, TemplateSource};
pub use error::RenderError;
pub use tokens::{TokenMap, TokenValues};
