//! Static site generation: asset copy, page discovery and page output.
//!
//! Generation runs in two phases. Discovery walks the content tree and pairs
//! every markdown file with its output path; no content is read at this
//! stage. Generation then converts each page independently, in parallel.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::config::{Config, ErrorPolicy};
use crate::error::{Error, SiteError};
use crate::template::render_page;
use crate::{extract_title, markdown_to_html};

/// A markdown source file and the HTML file it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Outcome of a site build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub generated: usize,
    /// Pages that failed to render under [`ErrorPolicy::Skip`].
    pub skipped: usize,
}

/// Build the whole site described by `config`.
///
/// The output directory is recreated from scratch. Only render failures are
/// subject to the error policy; I/O errors always abort the build. Every page
/// is rendered before any is written, so under [`ErrorPolicy::Abort`] a render
/// failure leaves no pages in the output, and the first failure in source
/// order is returned.
pub fn generate_site(config: &Config) -> Result<BuildReport, SiteError> {
    let site = &config.site;

    if site.static_dir.is_dir() {
        copy_static(&site.static_dir, &site.output_dir)?;
    } else {
        tracing::warn!(path = %site.static_dir.display(), "Static directory not found, skipping asset copy");
        reset_dir(&site.output_dir)?;
    }

    let template =
        fs::read_to_string(&site.template).map_err(|e| SiteError::io(&site.template, e))?;
    let pages = discover_pages(&site.content_dir, &site.output_dir)?;

    let rendered: Vec<Result<String, SiteError>> = pages
        .par_iter()
        .map(|page| render_html(page, &template, &site.base_path))
        .collect();

    let mut report = BuildReport::default();
    let mut ready = Vec::with_capacity(pages.len());
    for (page, result) in pages.iter().zip(rendered) {
        match result {
            Ok(html) => ready.push((page, html)),
            Err(SiteError::Render { path, source }) if config.build.on_error == ErrorPolicy::Skip => {
                tracing::warn!(path = %path.display(), error = %source, "Failed to render page, skipping");
                report.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    ready
        .par_iter()
        .try_for_each(|(page, html)| write_page(page, html))?;
    report.generated = ready.len();
    Ok(report)
}

/// Convert one page and write it, creating parent directories as needed.
pub fn generate_page(page: &Page, template: &str, base_path: &str) -> Result<(), SiteError> {
    let html = render_html(page, template, base_path)?;
    write_page(page, &html)
}

/// Read a page's markdown and fill the template with its title and content.
pub fn render_html(page: &Page, template: &str, base_path: &str) -> Result<String, SiteError> {
    let markdown =
        fs::read_to_string(&page.source).map_err(|e| SiteError::io(&page.source, e))?;

    let render_error = |source: Error| SiteError::Render {
        path: page.source.clone(),
        source,
    };
    let title = extract_title(&markdown).map_err(render_error)?;
    let content = markdown_to_html(&markdown).map_err(render_error)?;
    Ok(render_page(template, &title, &content, base_path))
}

fn write_page(page: &Page, html: &str) -> Result<(), SiteError> {
    if let Some(parent) = page.destination.parent() {
        fs::create_dir_all(parent).map_err(|e| SiteError::io(parent, e))?;
    }
    fs::write(&page.destination, html).map_err(|e| SiteError::io(&page.destination, e))?;

    tracing::info!(
        source = %page.source.display(),
        destination = %page.destination.display(),
        "Generated page"
    );
    Ok(())
}

/// Find every markdown file under `content_dir`, sorted by source path.
///
/// `content/blog/post.md` maps to `output_dir/blog/post.html`. Hidden
/// entries are skipped.
pub fn discover_pages(content_dir: &Path, output_dir: &Path) -> Result<Vec<Page>, SiteError> {
    if !content_dir.is_dir() {
        return Err(SiteError::MissingDirectory(content_dir.to_path_buf()));
    }
    let mut pages = Vec::new();
    scan_directory(content_dir, output_dir, &mut pages)?;
    pages.sort_by(|a, b| a.source.cmp(&b.source));
    Ok(pages)
}

fn scan_directory(dir: &Path, output_dir: &Path, pages: &mut Vec<Page>) -> Result<(), SiteError> {
    let entries = fs::read_dir(dir).map_err(|e| SiteError::io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| SiteError::io(dir, e))?;
        let name = entry.file_name();
        if name.to_string_lossy().starts_with('.') {
            continue;
        }

        let path = entry.path();
        let is_dir = entry
            .file_type()
            .map_err(|e| SiteError::io(&path, e))?
            .is_dir();
        if is_dir {
            scan_directory(&path, &output_dir.join(&name), pages)?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            pages.push(Page {
                destination: output_dir.join(&name).with_extension("html"),
                source: path,
            });
        } else {
            tracing::debug!(path = %path.display(), "Skipping non-markdown file");
        }
    }
    Ok(())
}

/// Replace `destination` with a recursive copy of `source`.
///
/// Returns the number of files copied.
pub fn copy_static(source: &Path, destination: &Path) -> Result<usize, SiteError> {
    if !source.is_dir() {
        return Err(SiteError::MissingDirectory(source.to_path_buf()));
    }
    reset_dir(destination)?;

    let copied = copy_dir(source, destination)?;
    tracing::info!(
        source = %source.display(),
        destination = %destination.display(),
        files = copied,
        "Copied static files"
    );
    Ok(copied)
}

fn copy_dir(source: &Path, destination: &Path) -> Result<usize, SiteError> {
    let mut copied = 0;
    let entries = fs::read_dir(source).map_err(|e| SiteError::io(source, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| SiteError::io(source, e))?;
        let path = entry.path();
        let target = destination.join(entry.file_name());

        if entry.file_type().map_err(|e| SiteError::io(&path, e))?.is_dir() {
            fs::create_dir(&target).map_err(|e| SiteError::io(&target, e))?;
            copied += copy_dir(&path, &target)?;
        } else {
            fs::copy(&path, &target).map_err(|e| SiteError::io(&path, e))?;
            tracing::debug!(from = %path.display(), to = %target.display(), "Copied file");
            copied += 1;
        }
    }
    Ok(copied)
}

fn reset_dir(dir: &Path) -> Result<(), SiteError> {
    if dir.exists() {
        tracing::debug!(path = %dir.display(), "Removing existing output directory");
        fs::remove_dir_all(dir).map_err(|e| SiteError::io(dir, e))?;
    }
    fs::create_dir_all(dir).map_err(|e| SiteError::io(dir, e))
}
