//! Index page rendering
//!
//! The page is a minijinja template registered as `index.html`, so every
//! interpolated value is HTML-escaped by the environment.

use journal_types::entry::Entry;
use minijinja::{context, Environment};
use thiserror::Error;

pub const EMPTY_PLACEHOLDER: &str = "No entries yet. POST /entries to add one.";

const INDEX_TEMPLATE_NAME: &str = "index.html";
const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Renders the index page from the shared template environment
#[derive(Debug)]
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.add_template(INDEX_TEMPLATE_NAME, INDEX_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Render the index page, newest entry first
    pub fn render_index(&self, agent_id: &str, entries: &[Entry]) -> Result<String, RenderError> {
        let template = self.env.get_template(INDEX_TEMPLATE_NAME)?;
        let html = template.render(context! {
            agent => agent_id,
            entries => entries,
        })?;
        Ok(html)
    }
}
