//! Component folder generation.
//!
//! Validates the name, derives the slug, creates `<base>/<slug>/` and writes
//! the four rendered stubs. Writes are not transactional: a failure leaves
//! the files written so far in place.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::local_files::{self, FileSystem};
use crate::slugify::{slug, validate_component_name};
use crate::template::{render, TemplateVars};
use crate::templates::component_templates;

#[derive(Debug, Clone, Default)]
pub struct ScaffoldOptions {
    /// Render everything but leave the filesystem untouched.
    pub dry_run: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedFile {
    pub filename: String,
    pub path: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaffoldResult {
    pub name: String,
    pub slug: String,
    pub directory: String,
    pub files: Vec<GeneratedFile>,
    pub dry_run: bool,
}

impl ScaffoldResult {
    pub fn summary(&self) -> String {
        format!(
            "{} component created successfully at \"{}\"!",
            self.name, self.directory
        )
    }
}

/// Render the four stubs for `name` without touching the filesystem.
pub fn plan(name: &str, base_path: &Path) -> Result<(PathBuf, ScaffoldResult)> {
    let name = validate_component_name(name)?;
    let slug = slug(name);
    let dir = base_path.join(&slug);
    let context = [(TemplateVars::NAME, name)];

    let files = component_templates(&slug)
        .into_iter()
        .map(|t| {
            let content = render(&t.template, &context).trim().to_string();
            GeneratedFile {
                path: dir.join(&t.filename).display().to_string(),
                filename: t.filename,
                content,
            }
        })
        .collect();

    let result = ScaffoldResult {
        name: name.to_string(),
        slug,
        directory: dir.display().to_string(),
        files,
        dry_run: false,
    };

    Ok((dir, result))
}

/// Generate the component folder on the local filesystem.
pub fn generate(name: &str, base_path: &Path, options: &ScaffoldOptions) -> Result<ScaffoldResult> {
    generate_with(&local_files::local(), name, base_path, options)
}

pub fn generate_with(
    fs: &dyn FileSystem,
    name: &str,
    base_path: &Path,
    options: &ScaffoldOptions,
) -> Result<ScaffoldResult> {
    let (dir, mut result) = plan(name, base_path)?;

    if options.dry_run {
        result.dry_run = true;
        return Ok(result);
    }

    fs.ensure_dir(&dir)?;
    log_status!("generate", "Ensured directory {}", dir.display());

    for file in &result.files {
        fs.write(&dir.join(&file.filename), &file.content)?;
        log_status!("generate", "Wrote {}", file.path);
    }

    Ok(result)
}
