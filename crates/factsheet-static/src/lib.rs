//! Static page builder for the factsheet site.
//!
//! Renders the content store through a single template into one HTML file and
//! publishes the static assets next to it.

pub mod assets;
pub mod builder;
pub mod config;
pub mod templates;

pub use assets::{publish, AssetError, PublishReport};
pub use builder::{BuildConfig, BuildError, BuildResult, StaticBuilder};
pub use config::{read_config, Configuration, FORM_URL_VAR};
pub use templates::{asset_path, Bindings, TemplateEngine, TemplateError};
