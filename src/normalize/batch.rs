use std::{
    fs,
    path::{Path, PathBuf},
};

use rayon::prelude::*;

use crate::{
    foundation::error::{DioramaError, DioramaResult},
    normalize::{
        bbox::{BoundsAccumulator, DEFAULT_PADDING_RATIO, ViewBox, padded_view_box, path_bounds},
        svg::SvgSource,
    },
};

/// Options for a normalization run.
#[derive(Clone, Debug)]
pub struct NormalizeOpts {
    /// File extension to select, without the dot (case-insensitive).
    pub extension: String,
    /// Descend into subdirectories.
    pub recursive: bool,
    /// Padding on each side as a fraction of the content extent.
    pub padding_ratio: f64,
    /// Process files on the rayon pool.
    pub parallel: bool,
    /// Compute and report, but never write.
    pub dry_run: bool,
}

impl Default for NormalizeOpts {
    fn default() -> Self {
        Self {
            extension: "svg".to_owned(),
            recursive: false,
            padding_ratio: DEFAULT_PADDING_RATIO,
            parallel: false,
            dry_run: false,
        }
    }
}

/// A non-fatal problem found while processing a file.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct NormalizeWarning {
    /// File the warning is about.
    pub path: PathBuf,
    /// Human-readable message.
    pub message: String,
}

/// What happened to one file.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    /// `viewBox` rewritten (or would be, in a dry run).
    Updated {
        /// New window.
        view_box: ViewBox,
        /// Window declared before the run.
        previous: Option<ViewBox>,
    },
    /// The declared window already matched.
    Unchanged {
        /// Declared window.
        view_box: ViewBox,
    },
    /// Left untouched.
    Skipped {
        /// Why.
        reason: String,
    },
}

/// Result of processing one file.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FileReport {
    /// File processed.
    pub path: PathBuf,
    /// Outcome.
    pub outcome: FileOutcome,
    /// Warnings raised for this file, including the skip reason when skipped.
    pub warnings: Vec<NormalizeWarning>,
}

/// Result of a batch run, in file path order.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct BatchReport {
    /// Per-file reports.
    pub files: Vec<FileReport>,
}

impl BatchReport {
    /// Files whose window was (or would be) rewritten.
    pub fn updated(&self) -> impl Iterator<Item = &FileReport> {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, FileOutcome::Updated { .. }))
    }

    /// Files left untouched because of an error.
    pub fn skipped(&self) -> impl Iterator<Item = &FileReport> {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, FileOutcome::Skipped { .. }))
    }

    /// Every warning across the batch.
    pub fn warnings(&self) -> impl Iterator<Item = &NormalizeWarning> {
        self.files.iter().flat_map(|f| f.warnings.iter())
    }
}

/// A document with its window recomputed.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedSvg {
    /// Rewritten document text.
    pub text: String,
    /// Computed window.
    pub view_box: ViewBox,
    /// Window declared in the input.
    pub previous: Option<ViewBox>,
    /// Number of paths that contributed to the bounds.
    pub paths_used: usize,
    /// One message per excluded path.
    pub path_warnings: Vec<String>,
}

/// Recompute the `viewBox` of an SVG document held in memory.
///
/// Paths that fail to parse are excluded and reported in [`NormalizedSvg::path_warnings`]. Fails
/// when the document itself is unusable or no path contributes bounds.
pub fn normalize_svg_text(text: &str, padding_ratio: f64) -> DioramaResult<NormalizedSvg> {
    let src = SvgSource::parse(text)?;
    let (acc, path_warnings) = collect_bounds(&src);
    rewrite(text, &src, acc, path_warnings, padding_ratio)
}

fn collect_bounds(src: &SvgSource<'_>) -> (BoundsAccumulator, Vec<String>) {
    let mut acc = BoundsAccumulator::new();
    let mut path_warnings = Vec::new();
    for p in src.paths() {
        let Some(d) = p.d.as_deref() else {
            path_warnings.push(format!("{}: no d attribute; excluded", p.label()));
            continue;
        };
        match path_bounds(d) {
            Ok(r) => acc.add(r),
            Err(e) => path_warnings.push(format!("{}: {e}; excluded", p.label())),
        }
    }
    (acc, path_warnings)
}

fn rewrite(
    text: &str,
    src: &SvgSource<'_>,
    acc: BoundsAccumulator,
    path_warnings: Vec<String>,
    padding_ratio: f64,
) -> DioramaResult<NormalizedSvg> {
    let paths_used = acc.count();
    let bounds = acc
        .finish()
        .ok_or_else(|| DioramaError::asset("no parseable paths; viewBox left unchanged"))?;
    let view_box = padded_view_box(bounds, padding_ratio);
    let rewritten = src.with_view_box(&view_box)?;
    verify_still_parses(text, &rewritten)?;

    Ok(NormalizedSvg {
        text: rewritten,
        view_box,
        previous: src.view_box(),
        paths_used,
        path_warnings,
    })
}

/// A rewrite must not turn a renderable document into an unrenderable one.
fn verify_still_parses(original: &str, rewritten: &str) -> DioramaResult<()> {
    let opts = usvg::Options::default();
    if usvg::Tree::from_str(original, &opts).is_err() {
        return Ok(());
    }
    usvg::Tree::from_str(rewritten, &opts)
        .map(|_| ())
        .map_err(|e| DioramaError::asset(format!("rewritten document no longer renders: {e}")))
}

/// Normalize one file in place. Never fails; problems become warnings on the report.
#[tracing::instrument(skip(opts), fields(path = %path.display()))]
pub fn normalize_file(path: &Path, opts: &NormalizeOpts) -> FileReport {
    let mut warnings = Vec::new();
    let outcome = match process_file(path, opts, &mut warnings) {
        Ok(outcome) => outcome,
        Err(e) => {
            let reason = e.to_string();
            tracing::warn!(file = %path.display(), %reason, "skipped asset");
            warnings.push(NormalizeWarning {
                path: path.to_owned(),
                message: reason.clone(),
            });
            FileOutcome::Skipped { reason }
        }
    };
    FileReport {
        path: path.to_owned(),
        outcome,
        warnings,
    }
}

fn process_file(
    path: &Path,
    opts: &NormalizeOpts,
    warnings: &mut Vec<NormalizeWarning>,
) -> DioramaResult<FileOutcome> {
    let text = fs::read_to_string(path)
        .map_err(|e| DioramaError::asset(format!("read '{}': {e}", path.display())))?;
    let src = SvgSource::parse(&text)?;
    let (acc, path_warnings) = collect_bounds(&src);

    // A file with nothing usable is one skip; excluded paths go into its reason.
    if acc.count() == 0 {
        let mut reason = "no parseable paths; viewBox left unchanged".to_owned();
        if !path_warnings.is_empty() {
            reason.push_str(&format!(" ({})", path_warnings.join("; ")));
        }
        return Err(DioramaError::asset(reason));
    }

    for message in &path_warnings {
        tracing::warn!(file = %path.display(), %message, "excluded path");
        warnings.push(NormalizeWarning {
            path: path.to_owned(),
            message: message.clone(),
        });
    }
    let normalized = rewrite(&text, &src, acc, path_warnings, opts.padding_ratio)?;

    if normalized.text == text {
        tracing::debug!(file = %path.display(), view_box = %normalized.view_box, "asset already normalized");
        return Ok(FileOutcome::Unchanged {
            view_box: normalized.view_box,
        });
    }

    if !opts.dry_run {
        write_replacing(path, &normalized.text)?;
    }
    tracing::info!(
        file = %path.display(),
        view_box = %normalized.view_box,
        paths = normalized.paths_used,
        dry_run = opts.dry_run,
        "normalized asset"
    );
    Ok(FileOutcome::Updated {
        view_box: normalized.view_box,
        previous: normalized.previous,
    })
}

/// Write through a sibling temp file so a failed write never leaves a truncated asset.
fn write_replacing(path: &Path, contents: &str) -> DioramaResult<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".diorama-tmp");
    let tmp = PathBuf::from(tmp);

    let result = fs::write(&tmp, contents).and_then(|()| fs::rename(&tmp, path));
    if let Err(e) = result {
        let _ = fs::remove_file(&tmp);
        return Err(DioramaError::asset(format!("write '{}': {e}", path.display())));
    }
    Ok(())
}

/// Files under `dir` with the configured extension, sorted by path.
pub fn collect_files(dir: &Path, opts: &NormalizeOpts) -> DioramaResult<Vec<PathBuf>> {
    let ext = opts.extension.trim_start_matches('.').to_ascii_lowercase();
    let mut out = Vec::new();
    let mut pending = vec![dir.to_owned()];

    while let Some(d) = pending.pop() {
        let entries = fs::read_dir(&d).map_err(|e| {
            DioramaError::validation(format!("list directory '{}': {e}", d.display()))
        })?;
        for entry in entries {
            let entry = entry.map_err(|e| {
                DioramaError::validation(format!("list directory '{}': {e}", d.display()))
            })?;
            let path = entry.path();
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if is_dir {
                if opts.recursive {
                    pending.push(path);
                }
                continue;
            }
            let matches = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case(&ext));
            if matches {
                out.push(path);
            }
        }
    }

    out.sort();
    Ok(out)
}

/// Normalize every matching file under `dir`.
///
/// Only failing to list `dir` is an error; each file succeeds or is skipped independently.
pub fn normalize_dir(dir: &Path, opts: &NormalizeOpts) -> DioramaResult<BatchReport> {
    let files = collect_files(dir, opts)?;
    tracing::debug!(dir = %dir.display(), files = files.len(), "normalizing assets");
    Ok(normalize_files(&files, opts))
}

/// Normalize an explicit list of files, preserving input order in the report.
pub fn normalize_files(files: &[PathBuf], opts: &NormalizeOpts) -> BatchReport {
    let files: Vec<FileReport> = if opts.parallel {
        files
            .par_iter()
            .map(|p| normalize_file(p, opts))
            .collect()
    } else {
        files.iter().map(|p| normalize_file(p, opts)).collect()
    };
    BatchReport { files }
}

#[cfg(test)]
#[path = "../../tests/unit/normalize/batch.rs"]
mod tests;
