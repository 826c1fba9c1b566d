//! Tera rendering: the pure [`render`] function and the descriptor [`Renderer`].
//!
//! | Service  | Template             | Tokens                                          |
//! |----------|----------------------|-------------------------------------------------|
//! | Daemon   | `daemon.plist.tera`  | `tool_path`, `project_dir`, `config_path`, `log_path` |
//! | Menu bar | `menubar.plist.tera` | `tool_path`, `project_dir`                      |

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tera::{Context, Tera};

use searchd_core::ServiceKind;

use crate::error::RenderError;
use crate::tokens::{TokenMap, TokenValues};

// ---------------------------------------------------------------------------
// Embedded templates: baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const DAEMON_TPL: &str = include_str!("templates/daemon.plist.tera");
const MENUBAR_TPL: &str = include_str!("templates/menubar.plist.tera");

fn embedded(kind: ServiceKind) -> &'static str {
    match kind {
        ServiceKind::Daemon => DAEMON_TPL,
        ServiceKind::MenuBar => MENUBAR_TPL,
    }
}

// ---------------------------------------------------------------------------
// render
// ---------------------------------------------------------------------------

/// Substitute `{{ token }}` placeholders in `template` with `tokens`.
///
/// Values are inserted verbatim. A placeholder with no entry in `tokens` is an
/// error, so the output never carries a literal placeholder. Line endings are
/// normalised to LF.
pub fn render(template: &str, tokens: &TokenMap) -> Result<String, RenderError> {
    let mut ctx = Context::new();
    for (token, value) in tokens {
        ctx.insert(token.name(), value);
    }
    let rendered = Tera::one_off(template, &ctx, false)?;
    Ok(rendered.replace("\r\n", "\n"))
}

fn xml_escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Where a descriptor template was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Embedded,
    Override(PathBuf),
}

#[derive(Debug, Clone)]
struct Template {
    body: String,
    source: TemplateSource,
}

/// Renders launchd descriptors from embedded templates, optionally replaced
/// per kind by files in an override directory.
#[derive(Debug, Clone)]
pub struct Renderer {
    templates: HashMap<ServiceKind, Template>,
}

impl Default for Renderer {
    fn default() -> Self {
        let templates = ServiceKind::all()
            .iter()
            .map(|kind| {
                let tpl = Template {
                    body: embedded(*kind).to_string(),
                    source: TemplateSource::Embedded,
                };
                (*kind, tpl)
            })
            .collect();
        Renderer { templates }
    }
}

impl Renderer {
    /// Embedded templates, with `<dir>/<kind template name>` taking precedence
    /// wherever such a file exists. A missing `dir` is not an error.
    pub fn with_overrides(dir: &Path) -> Result<Self, RenderError> {
        let mut renderer = Renderer::default();
        for kind in ServiceKind::all() {
            let path = dir.join(kind.template_name());
            if !path.is_file() {
                continue;
            }
            let body = std::fs::read_to_string(&path).map_err(|source| RenderError::Io {
                path: path.clone(),
                source,
            })?;
            tracing::info!(service = %kind, path = %path.display(), "using template override");
            renderer.templates.insert(
                *kind,
                Template {
                    body,
                    source: TemplateSource::Override(path),
                },
            );
        }
        Ok(renderer)
    }

    pub fn source(&self, kind: ServiceKind) -> &TemplateSource {
        &self.template(kind).source
    }

    /// Render the descriptor for `kind`, substituting only the tokens that
    /// kind declares. Values are XML-escaped.
    pub fn render(&self, kind: ServiceKind, values: &TokenValues) -> Result<String, RenderError> {
        let tokens: TokenMap = values
            .for_kind(kind)
            .into_iter()
            .map(|(token, value)| (token, xml_escape(&value)))
            .collect();
        render(&self.template(kind).body, &tokens)
    }

    fn template(&self, kind: ServiceKind) -> &Template {
        // Every kind is inserted by `default()` and never removed.
        &self.templates[&kind]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
