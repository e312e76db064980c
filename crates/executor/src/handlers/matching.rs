//! Matcher handlers.

use std::sync::Arc;

use conceptmatch_core::{MatchMap, MatcherInfo, MatcherKind, ProjectId};

use crate::bridge::{Context, ProjectData};
use crate::convert::convert_result;
use crate::{Output, Result};

/// Handle ComputeMatches command.
pub fn compute_matches(
    p: &Arc<Context>,
    project: ProjectId,
    matcher: MatcherKind,
    threshold: Option<f64>,
) -> Result<Output> {
    let threshold = p.resolve_threshold(matcher, threshold)?;
    let data = ProjectData::load(p, project)?;
    let map = run(&data, matcher, threshold)?;
    Ok(Output::Matches(map))
}

/// Handle ListMatchers command.
pub fn list_matchers() -> Result<Output> {
    Ok(Output::Matchers(
        MatcherKind::ALL.iter().copied().map(MatcherInfo::from).collect(),
    ))
}

pub(crate) fn run(data: &ProjectData, matcher: MatcherKind, threshold: f64) -> Result<MatchMap> {
    let ctx = data.match_context();
    convert_result(conceptmatch_engine::compute_matches(matcher, &ctx, threshold))
}
