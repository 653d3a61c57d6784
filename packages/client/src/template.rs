//! Named string templates for the response and history regions.

use std::path::Path;

use handlebars::Handlebars;
use serde_json::{Value, json};

use crate::{domain::HistoryEntry, error::ClientError};

/// Template for the current response region; binds `data`
pub const RESPONSE_TEMPLATE: &str = "template-response";

/// Template for one history entry; binds `type`, `input` and `response`
pub const HISTORY_TEMPLATE: &str = "template-history";

const DEFAULT_RESPONSE_SOURCE: &str = "{{data}}";

const DEFAULT_HISTORY_SOURCE: &str = "[{{type}}] {{input}} => {{response}}\n";

/// The two page templates, compiled once at startup
pub struct Templates {
    handlebars: Handlebars<'static>,
}

impl std::fmt::Debug for Templates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Templates").finish_non_exhaustive()
    }
}

impl Templates {
    /// Compile both templates from source.
    ///
    /// Values are interpolated without HTML escaping and missing values
    /// render as empty text.
    pub fn new(response_source: &str, history_source: &str) -> Result<Self, ClientError> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        handlebars.register_escape_fn(handlebars::no_escape);

        for (name, source) in [
            (RESPONSE_TEMPLATE, response_source),
            (HISTORY_TEMPLATE, history_source),
        ] {
            handlebars
                .register_template_string(name, source)
                .map_err(|e| ClientError::Template(format!("{}: {}", name, e)))?;
        }

        Ok(Self { handlebars })
    }

    /// Templates suited to a plain terminal
    pub fn builtin() -> Result<Self, ClientError> {
        Self::new(DEFAULT_RESPONSE_SOURCE, DEFAULT_HISTORY_SOURCE)
    }

    /// Load `template-response.hbs` and `template-history.hbs` from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self, ClientError> {
        let response = read_template(dir, RESPONSE_TEMPLATE)?;
        let history = read_template(dir, HISTORY_TEMPLATE)?;
        Self::new(&response, &history)
    }

    /// Render the current response region for `data`.
    pub fn render_response(&self, data: &Value) -> Result<String, ClientError> {
        self.render(RESPONSE_TEMPLATE, &json!({ "data": data }))
    }

    /// Render one history fragment.
    pub fn render_history(&self, entry: &HistoryEntry) -> Result<String, ClientError> {
        self.render(HISTORY_TEMPLATE, entry)
    }

    fn render<T: serde::Serialize>(&self, name: &str, bindings: &T) -> Result<String, ClientError> {
        self.handlebars
            .render(name, bindings)
            .map_err(|e| ClientError::Template(format!("{}: {}", name, e)))
    }
}

fn read_template(dir: &Path, name: &'static str) -> Result<String, ClientError> {
    let path = dir.join(format!("{}.hbs", name));
    std::fs::read_to_string(&path).map_err(|source| ClientError::MissingTemplate {
        name,
        path,
        source,
    })
}
