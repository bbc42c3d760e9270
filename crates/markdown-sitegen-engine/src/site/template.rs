use std::fs;
use std::path::Path;

use super::SiteError;

/// An HTML page template with `{{ Title }}` and `{{ Content }}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    pub const TITLE: &'static str = "{{ Title }}";
    pub const CONTENT: &'static str = "{{ Content }}";

    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, SiteError> {
        let source = fs::read_to_string(path).map_err(|source| SiteError::TemplateRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(source))
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Fills the placeholders and points root-relative links at `basepath`.
    ///
    /// `href="/` and `src="/` become `href="{basepath}` and `src="{basepath}`,
    /// so a basepath of `/` leaves links unchanged.
    pub fn render(&self, title: &str, content: &str, basepath: &str) -> String {
        let page = self.fill(title, content);
        if basepath == "/" {
            return page;
        }
        page.replace("href=\"/", &format!("href=\"{basepath}"))
            .replace("src=\"/", &format!("src=\"{basepath}"))
    }

    /// Substitutes both placeholders in one scan of the source. Inserted values
    /// are never rescanned.
    fn fill(&self, title: &str, content: &str) -> String {
        let mut out = String::with_capacity(self.source.len() + title.len() + content.len());
        let mut rest = self.source.as_str();

        loop {
            let next = [(Self::TITLE, title), (Self::CONTENT, content)]
                .into_iter()
                .filter_map(|(placeholder, value)| {
                    rest.find(placeholder).map(|at| (at, placeholder, value))
                })
                .min_by_key(|(at, _, _)| *at);

            let Some((at, placeholder, value)) = next else {
                out.push_str(rest);
                return out;
            };
            out.push_str(&rest[..at]);
            out.push_str(value);
            rest = &rest[at + placeholder.len()..];
        }
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}

/// Used when no template file is configured.
pub const DEFAULT_TEMPLATE: &str = r#"<!doctype html>
<html>
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{{ Title }}</title>
    <link href="/index.css" rel="stylesheet" />
  </head>
  <body>
    <article>{{ Content }}</article>
  </body>
</html>
"#;
