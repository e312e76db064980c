//! CSV export of match results.
//!
//! One row per match, `;`-separated:
//!
//! ```text
//! Class;Method;Concept;Weight;Validated;Stems
//! Battery;getVoltage();BatteryPack;0.5;false;voltag
//! ```
//!
//! `Stems` lists the terms found on both sides of the match's evidence,
//! sorted and comma-joined. Matchers that record no evidence leave it empty.
//! Fields holding `;`, quotes or line breaks are quoted.

use std::collections::BTreeSet;
use std::io::Write;

use rustc_hash::FxHashMap;

use conceptmatch_core::{ConceptId, MatchMap, MethodConceptMatch, MethodId};
use conceptmatch_engine::{MatchContext, StemNode};

/// Header line of every export
pub const CSV_HEADER: &str = "Class;Method;Concept;Weight;Validated;Stems";

/// Write `map` as CSV, returning the number of data rows.
///
/// `ctx` must be the context the map was computed from; it resolves ids to
/// names and evidence ids to terms. Matches whose method or concept is not
/// in `ctx` are skipped.
pub fn export_matches_csv<W: Write>(
    writer: &mut W,
    map: &MatchMap,
    ctx: &MatchContext<'_>,
) -> std::io::Result<usize> {
    let methods: FxHashMap<MethodId, _> = ctx.methods().iter().map(|m| (m.id, m)).collect();
    let concepts: FxHashMap<ConceptId, _> = ctx.concepts().iter().map(|c| (c.id, c)).collect();

    let mut out = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(writer);
    out.write_record(CSV_HEADER.split(';'))?;
    let mut rows = 0;
    for (method_id, matches) in map {
        let Some(method) = methods.get(method_id) else {
            tracing::warn!(
                target: "conceptmatch::executor",
                method = %method_id,
                "Skipping export of unknown method"
            );
            continue;
        };
        for m in matches {
            let Some(concept) = concepts.get(&m.concept) else {
                continue;
            };
            out.write_record([
                method.class_name.as_str(),
                method.signature.as_str(),
                concept.name.as_str(),
                m.weight.to_string().as_str(),
                "false",
                shared_terms(m, ctx).as_str(),
            ])?;
            rows += 1;
        }
    }
    out.flush()?;
    Ok(rows)
}

fn shared_terms(m: &MethodConceptMatch, ctx: &MatchContext<'_>) -> String {
    let concept_terms: BTreeSet<&str> = m
        .concept_stems
        .iter()
        .filter_map(|id| ctx.concept_stems().get(*id))
        .map(|node| node.term())
        .collect();
    let method_terms: BTreeSet<&str> = m
        .method_stems
        .iter()
        .filter_map(|id| ctx.method_stems().get(*id))
        .map(|node| node.term())
        .collect();
    concept_terms
        .intersection(&method_terms)
        .copied()
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use conceptmatch_core::{Concept, MatcherKind, RejectLists, SourceMethod};
    use conceptmatch_engine::{build_concept_forest, build_method_forest, compute_matches};

    fn run(kind: MatcherKind, threshold: f64) -> String {
        run_named("BatteryPack", kind, threshold)
    }

    fn run_named(concept: &str, kind: MatcherKind, threshold: f64) -> String {
        let concepts = vec![
            Concept::new(1, concept).with_attribute("voltage", "V"),
            Concept::new(2, "ElectricMotor"),
        ];
        let methods = vec![SourceMethod::new(10, "Battery", "getVoltage")];
        let rejects = RejectLists::default();
        let cf = build_concept_forest(&concepts, &rejects);
        let mf = build_method_forest(&methods, &rejects);
        let ctx = MatchContext::new(&concepts, &methods, &cf, &mf);
        let map = compute_matches(kind, &ctx, threshold).unwrap();

        let mut out = Vec::new();
        export_matches_csv(&mut out, &map, &ctx).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_header_and_overlap_row() {
        let csv = run(MatcherKind::Overlap, 0.1);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some(CSV_HEADER));
        let row = lines.next().unwrap();
        let fields: Vec<&str> = row.split(';').collect();
        assert_eq!(fields[0], "Battery");
        assert_eq!(fields[1], "getVoltage()");
        assert_eq!(fields[2], "BatteryPack");
        assert!(fields[3].parse::<f64>().unwrap() > 0.0);
        assert_eq!(fields[4], "false");
        assert_eq!(fields[5], "voltag");
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_no_evidence_leaves_stems_empty() {
        let csv = run(MatcherKind::EditDistance, 0.0);
        let rows: Vec<&str> = csv.lines().skip(1).collect();
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|r| r.ends_with(";false;")));
    }

    #[test]
    fn test_empty_map_writes_header_only() {
        let concepts: Vec<Concept> = Vec::new();
        let methods: Vec<SourceMethod> = Vec::new();
        let cf = build_concept_forest(&concepts, &RejectLists::default());
        let mf = build_method_forest(&methods, &RejectLists::default());
        let ctx = MatchContext::new(&concepts, &methods, &cf, &mf);

        let mut out = Vec::new();
        let rows = export_matches_csv(&mut out, &MatchMap::new(), &ctx).unwrap();
        assert_eq!(rows, 0);
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", CSV_HEADER));
    }

    #[test]
    fn test_delimiter_in_name_is_quoted() {
        let csv = run_named("Battery;Pack", MatcherKind::Overlap, 0.1);
        assert!(csv.contains("\"Battery;Pack\""));

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_reader(csv.as_bytes());
        let header: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(header.join(";"), CSV_HEADER);

        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 1);
        let row = &records[0];
        assert_eq!(row.len(), 6);
        assert_eq!(&row[0], "Battery");
        assert_eq!(&row[2], "Battery;Pack");
        assert_eq!(&row[5], "voltag");
    }
}
