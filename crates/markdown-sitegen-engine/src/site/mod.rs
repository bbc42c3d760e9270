//! # Site Generation
//!
//! Turns a directory of markdown pages into a directory of HTML pages.
//!
//! Every `content/**/name.md` becomes `output/**/name.html`, rendered through a
//! [`Template`]. Static assets are copied alongside. A page that fails to
//! convert is logged and reported; the rest of the site is still generated.

pub mod template;

pub use template::{DEFAULT_TEMPLATE, Template};

use relative_path::{RelativePath, RelativePathBuf};
use std::path::{Path, PathBuf};

use crate::convert::{ConvertError, extract_title, markdown_to_html_with};
use crate::io::{self, IoError};
use crate::parsing::ParseOptions;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("Failed to read template at {path}: {source}")]
    TemplateRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Why a single page was skipped.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("Failed to read page: {0}")]
    Read(IoError),
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error("Failed to write page: {0}")]
    Write(IoError),
}

/// Where a site's inputs live and where its output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLayout {
    pub content_dir: PathBuf,
    pub static_dir: Option<PathBuf>,
    pub output_dir: PathBuf,
    /// Falls back to [`DEFAULT_TEMPLATE`] when unset.
    pub template_path: Option<PathBuf>,
    pub basepath: String,
    pub parse: ParseOptions,
}

/// A markdown page that could not be read, converted or written.
#[derive(Debug)]
pub struct PageFailure {
    pub source: RelativePathBuf,
    pub error: PageError,
}

/// Outcome of a site build.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Generated pages, relative to the output directory.
    pub pages: Vec<RelativePathBuf>,
    pub failures: Vec<PageFailure>,
    pub static_files: usize,
}

impl BuildReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Renders one markdown page into a full HTML document.
pub fn generate_page(
    markdown: &str,
    template: &Template,
    basepath: &str,
    options: &ParseOptions,
) -> Result<String, ConvertError> {
    let content = markdown_to_html_with(markdown, options)?;
    let title = extract_title(markdown)?;
    Ok(template.render(&title, &content, basepath))
}

/// Generates an HTML page for every markdown file under `content_dir`.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template: &Template,
    dest_dir: &Path,
    basepath: &str,
    options: &ParseOptions,
) -> Result<BuildReport, SiteError> {
    let mut report = BuildReport::default();

    for source in io::relative_markdown_paths(content_dir)? {
        let target = source.with_extension("html");
        let generated = generate_page_file(
            &source,
            &target,
            content_dir,
            dest_dir,
            template,
            basepath,
            options,
        );
        match generated {
            Ok(()) => {
                log::info!("Generated {source} -> {target}");
                report.pages.push(target);
            }
            Err(error) => {
                log::warn!("Skipping {source}: {error}");
                report.failures.push(PageFailure { source, error });
            }
        }
    }

    Ok(report)
}

fn generate_page_file(
    source: &RelativePath,
    target: &RelativePath,
    content_dir: &Path,
    dest_dir: &Path,
    template: &Template,
    basepath: &str,
    options: &ParseOptions,
) -> Result<(), PageError> {
    let markdown = io::read_file(source, content_dir).map_err(PageError::Read)?;
    let page = generate_page(&markdown, template, basepath, options)?;
    io::write_file(target, dest_dir, &page).map_err(PageError::Write)
}

/// Rebuilds the whole output directory: static assets first, then pages.
///
/// The template and content directory are checked before the output directory
/// is touched, so a failed setup leaves the previous build in place.
pub fn build_site(layout: &SiteLayout) -> Result<BuildReport, SiteError> {
    let template = match layout.template_path.as_deref() {
        Some(path) => Template::load(path)?,
        None => Template::default(),
    };
    io::validate_dir(&layout.content_dir)?;

    io::reset_dir(&layout.output_dir)?;

    let static_files = match layout.static_dir.as_deref() {
        Some(dir) if dir.is_dir() => io::copy_dir_recursive(dir, &layout.output_dir)?,
        Some(dir) => {
            log::warn!("Static directory {} not found, skipping", dir.display());
            0
        }
        None => 0,
    };

    let mut report = generate_pages_recursive(
        &layout.content_dir,
        &template,
        &layout.output_dir,
        &layout.basepath,
        &layout.parse,
    )?;
    report.static_files = static_files;

    log::info!(
        "Built {} page(s), copied {} static file(s), {} failure(s)",
        report.pages.len(),
        report.static_files,
        report.failures.len()
    );
    Ok(report)
}
