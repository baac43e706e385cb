//! Proc macros for sitecfg.
//!
//! # Config derive macro
//!
//! Generates both field path accessors and a commented TOML template.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "presentation")]
//! /// Strings shown by the theme.
//! pub struct PresentationConfig {
//!     /// Site name shown in the navbar and html title.
//!     #[config(inline_doc)]
//!     pub site_name: String,
//!
//!     /// Default language code.
//!     #[config(default = "en")]
//!     pub default_lang: String,
//! }
//!
//! // Generates:
//! // - PresentationConfig::FIELDS.site_name -> FieldPath("presentation.site_name")
//! // - PresentationConfig::KEYS -> ["presentation.site_name", "presentation.default_lang"]
//! // - PresentationConfig::template() -> TOML string with comments
//! // - PresentationConfig::template_with_header() -> with [section] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path
//!
//! Field-level:
//! - `#[config(default = "x")]` - Default value shown in template
//! - `#[config(inline_doc)]` - Single-line doc rendered as trailing comment
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `ContentConfig` → `content`
//! - `TocPluginConfig` → `toc_plugin`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS, KEYS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
