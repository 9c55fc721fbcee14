//! Full conversion pass over an input tree.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::convert::codec::Codec;
use crate::convert::spinner::Spinner;
use crate::error::{CodecError, CoreResult};
use crate::fs::mirror::{mirror_structure, MirrorReport};
use crate::fs::path::target_path;
use crate::fs::walk::TreeWalk;

/// A source file paired with the path its conversion is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionTask {
    pub source: PathBuf,
    pub target: PathBuf,
}

impl ConversionTask {
    /// Builds the task for `source`, mirroring its position under `output_root`.
    pub fn for_file(
        source: &Path,
        input_root: &Path,
        output_root: &Path,
        extension: &str,
    ) -> CoreResult<Self> {
        Ok(Self {
            source: source.to_path_buf(),
            target: target_path(source, input_root, output_root, extension)?,
        })
    }

    fn display_name(&self) -> String {
        self.source
            .file_name()
            .map(|n| crate::nfc_string(&n.to_string_lossy()))
            .unwrap_or_default()
    }
}

/// Result of converting one file.
#[derive(Debug)]
pub enum FileOutcome {
    Converted,
    Failed(CodecError),
}

#[derive(Debug)]
pub struct FileReport {
    pub task: ConversionTask,
    pub outcome: FileOutcome,
}

/// Everything one pass did, in walk order.
#[derive(Debug, Default)]
pub struct PassReport {
    pub mirror: MirrorReport,
    pub files: Vec<FileReport>,
}

impl PassReport {
    pub fn converted(&self) -> impl Iterator<Item = &ConversionTask> {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, FileOutcome::Converted))
            .map(|f| &f.task)
    }

    pub fn failures(&self) -> impl Iterator<Item = (&ConversionTask, &CodecError)> {
        self.files.iter().filter_map(|f| match &f.outcome {
            FileOutcome::Failed(err) => Some((&f.task, err)),
            FileOutcome::Converted => None,
        })
    }

    pub fn converted_count(&self) -> usize {
        self.converted().count()
    }

    pub fn failed_count(&self) -> usize {
        self.failures().count()
    }
}

/// Knobs for a [`ConversionEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Animate a spinner on stdout while each file converts.
    pub spinner: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self { spinner: true }
    }
}

/// Mirrors the input tree and converts every file in it.
pub struct ConversionEngine<C> {
    codec: C,
    options: EngineOptions,
}

impl<C: Codec> ConversionEngine<C> {
    pub fn new(codec: C, options: EngineOptions) -> Self {
        Self { codec, options }
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Runs one full pass: mirror directories, then convert each file.
    ///
    /// Progress text is written to `out`. A file that fails to convert is
    /// reported and skipped; the pass always visits every file.
    ///
    /// # Errors
    ///
    /// Returns an error only when the output structure cannot be created or
    /// `out` cannot be written to.
    pub fn run_pass(
        &self,
        input_root: &Path,
        output_root: &Path,
        out: &mut dyn Write,
    ) -> CoreResult<PassReport> {
        let mirror = mirror_structure(input_root, output_root)?;
        let mut report = PassReport {
            mirror,
            files: Vec::new(),
        };
        let extension = self.codec.target_extension();

        for source in TreeWalk::new(input_root).files() {
            let task = ConversionTask::for_file(&source, input_root, output_root, extension)?;
            let name = task.display_name();

            write!(out, "Converting {name} to .{extension}...")?;
            out.flush()?;

            let spinner = self.options.spinner.then(Spinner::start);
            let result = self.codec.convert(&task.source, &task.target);
            if let Some(spinner) = spinner {
                spinner.stop();
            }

            let outcome = match result {
                Ok(()) => {
                    writeln!(out, "\rConversion complete: {}", task.target.display())?;
                    tracing::debug!(source = %task.source.display(), "converted");
                    FileOutcome::Converted
                }
                Err(err) => {
                    writeln!(out, "\rFailed to convert {name}: {err}")?;
                    tracing::warn!(source = %task.source.display(), "conversion failed: {err}");
                    FileOutcome::Failed(err)
                }
            };
            report.files.push(FileReport { task, outcome });
        }

        writeln!(out, "All images have been converted.")?;
        tracing::info!(
            converted = report.converted_count(),
            failed = report.failed_count(),
            "conversion pass finished"
        );
        Ok(report)
    }
}
