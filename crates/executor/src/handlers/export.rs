//! CSV export handler.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::sync::Arc;

use conceptmatch_core::{MatcherKind, ProjectId};

use crate::bridge::{Context, ProjectData};
use crate::export::export_matches_csv;
use crate::handlers::matching::run;
use crate::output::ExportSummary;
use crate::{Output, Result};

/// Handle ExportMatches command.
///
/// Matching runs before the file is created, so a failed run leaves no
/// file behind.
pub fn export_matches(
    p: &Arc<Context>,
    project: ProjectId,
    matcher: MatcherKind,
    threshold: Option<f64>,
    path: PathBuf,
) -> Result<Output> {
    let threshold = p.resolve_threshold(matcher, threshold)?;
    let data = ProjectData::load(p, project)?;
    let map = run(&data, matcher, threshold)?;

    let mut writer = BufWriter::new(File::create(&path)?);
    let rows = export_matches_csv(&mut writer, &map, &data.match_context())?;
    tracing::info!(
        target: "conceptmatch::executor",
        %project,
        matcher = matcher.name(),
        rows,
        path = %path.display(),
        "Exported matches"
    );
    Ok(Output::Exported(ExportSummary { path, rows }))
}
