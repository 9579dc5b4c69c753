use std::io::Write;

use crate::common::result::{DiffResult, ResultExt};
use crate::domain::entities::manifest_diff::{DiffEntry, ManifestDiff};
use crate::domain::value_objects::revision::Revision;

/// Narrowest field the absent marker is padded to
pub const DEFAULT_ABSENT_WIDTH: usize = 40;

/// Options controlling how a diff report is rendered
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Minimum width of the field holding the absent marker.
    /// The field grows to fit the longest revision in the report.
    pub min_absent_width: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            min_absent_width: DEFAULT_ABSENT_WIDTH,
        }
    }
}

impl ReportOptions {
    pub fn with_min_absent_width(mut self, width: usize) -> Self {
        self.min_absent_width = width;
        self
    }
}

/// Plain-text rendering of a [`ManifestDiff`], one line per project
/// sorted by name: `<old> -> <new> [<name>]`
pub struct DiffReport<'a> {
    diff: &'a ManifestDiff,
    options: ReportOptions,
}

impl<'a> DiffReport<'a> {
    pub fn new(diff: &'a ManifestDiff, options: ReportOptions) -> Self {
        Self { diff, options }
    }

    /// Render every line of the report
    pub fn lines(&self) -> Vec<String> {
        let width = self.absent_width();

        let mut entries: Vec<(&str, &DiffEntry)> = self.diff.iter().collect();
        entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

        entries
            .into_iter()
            .map(|(name, entry)| {
                format!(
                    "{} -> {} [{}]",
                    render_side(&entry.old, width),
                    render_side(&entry.new, width),
                    name
                )
            })
            .collect()
    }

    /// Write the report, one newline-terminated line per project
    pub fn write_to<W: Write>(&self, out: &mut W) -> DiffResult<()> {
        for line in self.lines() {
            writeln!(out, "{}", line).with_internal_error("Failed to write diff report")?;
        }
        out.flush().with_internal_error("Failed to flush diff report")
    }

    fn absent_width(&self) -> usize {
        self.diff
            .iter()
            .flat_map(|(_, entry)| [entry.old.as_str(), entry.new.as_str()])
            .flatten()
            .map(|revision| revision.chars().count())
            .fold(self.options.min_absent_width, usize::max)
    }
}

fn render_side(revision: &Revision, width: usize) -> String {
    match revision {
        Revision::Present(_) => revision.to_string(),
        Revision::Absent => format!("{:<width$}", revision, width = width),
    }
}
