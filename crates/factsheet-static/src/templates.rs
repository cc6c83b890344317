//! Template engine for rendering the site page.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use minijinja::value::Kwargs;
use minijinja::{context, AutoEscape, Environment, Value};
use walkdir::WalkDir;

use factsheet_content::{AuxiliaryContentRecord, ContentRecord, ContentStore};

use crate::config::Configuration;

/// URL prefix under which published assets are served.
pub const ASSET_PREFIX: &str = "static/";

/// Map an asset name to its published URL path.
///
/// `asset_path("img/x.png")` is `static/img/x.png`. A leading `/` on the name
/// is ignored.
pub fn asset_path(name: &str) -> String {
    format!("{}{}", ASSET_PREFIX, name.trim_start_matches('/'))
}

/// Values bound into the page template.
#[derive(Debug, Clone, Copy)]
pub struct Bindings<'a> {
    /// Records in render order
    pub records: &'a [ContentRecord],
    /// Auxiliary records by key
    pub auxiliary: &'a BTreeMap<String, AuxiliaryContentRecord>,
    /// Environment configuration
    pub config: &'a Configuration,
}

impl<'a> Bindings<'a> {
    pub fn new(store: &'a ContentStore, config: &'a Configuration) -> Self {
        Self {
            records: store.records(),
            auxiliary: store.auxiliary(),
            config,
        }
    }
}

/// Errors that can occur while loading or rendering templates.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Template directory not found: {}", .0.display())]
    MissingDir(PathBuf),

    #[error("Failed to read template {path}: {message}")]
    Read { path: String, message: String },

    #[error(transparent)]
    Render(#[from] minijinja::Error),
}

/// Template engine using minijinja.
///
/// Template sources are read up front, so rendering never touches the
/// filesystem. Sources are compiled only when a template is first resolved.
pub struct TemplateEngine {
    env: Environment<'static>,
    names: Vec<String>,
}

impl TemplateEngine {
    /// Create an engine with no templates loaded.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(auto_escape_for);

        Self {
            env,
            names: Vec::new(),
        }
    }

    /// Read every file under `dir`, named by its `/`-separated relative path.
    ///
    /// Files that are not valid UTF-8 are skipped. Syntax errors surface only
    /// for templates the render actually resolves.
    pub fn from_dir(dir: &Path) -> Result<Self, TemplateError> {
        if !dir.is_dir() {
            return Err(TemplateError::MissingDir(dir.to_path_buf()));
        }

        let mut sources = BTreeMap::new();

        for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(|e| TemplateError::Read {
                path: dir.display().to_string(),
                message: e.to_string(),
            })?;

            if !entry.file_type().is_file() || is_hidden(entry.path()) {
                continue;
            }

            let path = entry.path();
            let relative = path.strip_prefix(dir).unwrap_or(path);

            let bytes = fs::read(path).map_err(|e| TemplateError::Read {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

            match String::from_utf8(bytes) {
                Ok(source) => {
                    sources.insert(template_name(relative), source);
                }
                Err(_) => tracing::debug!("Skipping non-text file {}", relative.display()),
            }
        }

        let mut engine = Self::new();
        engine.names = sources.keys().cloned().collect();
        engine
            .env
            .set_loader(move |name| Ok(sources.get(name).cloned()));

        tracing::debug!("Loaded templates: {}", engine.names.join(", "));

        Ok(engine)
    }

    /// Register and compile a template from source.
    pub fn add_template(&mut self, name: String, source: String) -> Result<(), TemplateError> {
        self.env.add_template_owned(name.clone(), source)?;
        if let Err(pos) = self.names.binary_search(&name) {
            self.names.insert(pos, name);
        }
        Ok(())
    }

    /// Names of the available templates, sorted.
    pub fn template_names(&self) -> &[String] {
        &self.names
    }

    /// Render the named template with the given bindings.
    pub fn render(&self, template: &str, bindings: &Bindings<'_>) -> Result<String, TemplateError> {
        let tmpl = self.env.get_template(template)?;

        let html = tmpl.render(context! {
            records => bindings.records,
            auxiliary => bindings.auxiliary,
            config => bindings.config,
            asset => Value::from_function(asset_helper),
        })?;

        Ok(html)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Template-side `asset(name, ...)`. Keyword arguments are accepted and ignored.
fn asset_helper(name: &str, kwargs: Kwargs) -> Result<String, minijinja::Error> {
    for key in kwargs.args() {
        let _: Value = kwargs.get(key)?;
    }
    Ok(asset_path(name))
}

/// `.html` and `.xml` templates are escaped, matching the extension in any
/// case; everything else renders raw.
fn auto_escape_for(name: &str) -> AutoEscape {
    match name.rsplit_once('.') {
        Some((_, ext)) if ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("xml") => {
            AutoEscape::Html
        }
        _ => AutoEscape::None,
    }
}

fn template_name(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}

/// Starter page template written by `factsheet init`.
pub const DEFAULT_INDEX_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>AI Risk Facts</title>
  <link rel="stylesheet" href="{{ asset('css/style.css') }}">
</head>
<body>
  <main class="facts">
    {% for record in records %}
    <article class="fact-card" id="{{ record.id }}">
      <h2 class="fact-title">{{ record.title }}</h2>
      <div class="fact-content">{{ record.content|safe }}</div>
    </article>
    {% endfor %}
  </main>
  <aside class="panels">
    {% for key, panel in auxiliary|items %}
    <section class="panel" id="{{ key }}">
      <h3>{{ panel.title }}</h3>
      <p>{{ panel.content|safe }}</p>
    </section>
    {% endfor %}
  </aside>
  <form class="subscribe" action="{{ config.form_url }}" method="post">
    <input type="email" name="email" placeholder="you@example.com" required>
    <button type="submit">Subscribe</button>
  </form>
</body>
</html>
"##;
