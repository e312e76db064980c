//! Stem forest construction
//!
//! Concept trees:
//!
//! ```text
//! CONCEPT_NAME_FULL
//!     CONCEPT_NAME_PART ...
//!     ATTRIBUTE_NAME_FULL
//!         ATTRIBUTE_NAME_PART ...
//!         ATTRIBUTE_IDENTIFIER_FULL
//!             ATTRIBUTE_IDENTIFIER_PART ...
//!     CLASS_NAME_FULL
//!         CLASS_NAME_PART ...
//!         CLASS_IDENTIFIER_FULL
//!             CLASS_IDENTIFIER_PART ...
//! ```
//!
//! Method trees have the same shape with parameters and references in place
//! of attributes and classes, and a single `*_TYPE_FULL` node (no parts) in
//! place of identifiers.
//!
//! A name that yields no stems produces no sub-tree. For a root this means the
//! entity gets no tree at all.

use conceptmatch_core::{
    Concept, ConceptId, ConceptStemType, MethodId, MethodStemType, RejectList, RejectLists,
    SourceMethod, StemId,
};

use super::node::{ConceptStem, MethodStem};
use super::{ConceptStemForest, MethodStemForest};
use crate::search::{full_term, get_stems};

/// Build one tree per concept, in input order.
pub fn build_concept_forest(concepts: &[Concept], rejects: &RejectLists) -> ConceptStemForest {
    let unfiltered = RejectList::empty();
    let mut forest = ConceptStemForest::new();

    for concept in concepts {
        let stems = get_stems(&concept.name, &rejects.concepts);
        if stems.is_empty() {
            tracing::warn!(
                target: "conceptmatch::stems",
                concept = %concept.id,
                name = %concept.name,
                "Concept name yields no stems, skipping"
            );
            continue;
        }

        let root = add_concept_stems(
            &mut forest,
            &stems,
            ConceptStemType::ConceptNameFull,
            concept.id,
            None,
        );

        for attribute in &concept.attributes {
            let attr_stems = get_stems(&attribute.name, &rejects.concepts);
            if attr_stems.is_empty() {
                continue;
            }
            let attr = add_concept_stems(
                &mut forest,
                &attr_stems,
                ConceptStemType::AttributeNameFull,
                concept.id,
                Some(root),
            );
            forest.node_mut(root).attributes.push(attr);

            let ident_stems = get_stems(&attribute.identifier, &unfiltered);
            if !ident_stems.is_empty() {
                let ident = add_concept_stems(
                    &mut forest,
                    &ident_stems,
                    ConceptStemType::AttributeIdentifierFull,
                    concept.id,
                    Some(attr),
                );
                forest.node_mut(attr).identifiers.push(ident);
            }
        }

        for class in &concept.classes {
            let class_stems = get_stems(&class.name, &rejects.concepts);
            if class_stems.is_empty() {
                continue;
            }
            let class_id = add_concept_stems(
                &mut forest,
                &class_stems,
                ConceptStemType::ClassNameFull,
                concept.id,
                Some(root),
            );
            forest.node_mut(root).classes.push(class_id);

            let ident_stems = get_stems(&class.identifier, &unfiltered);
            if !ident_stems.is_empty() {
                let ident = add_concept_stems(
                    &mut forest,
                    &ident_stems,
                    ConceptStemType::ClassIdentifierFull,
                    concept.id,
                    Some(class_id),
                );
                forest.node_mut(class_id).identifiers.push(ident);
            }
        }

        forest.add_root(concept.id, root);
    }

    tracing::info!(
        target: "conceptmatch::stems",
        concepts = concepts.len(),
        trees = forest.roots().len(),
        stems = forest.len(),
        "Built concept stem forest"
    );
    forest
}

/// Build one tree per method, in input order.
pub fn build_method_forest(methods: &[SourceMethod], rejects: &RejectLists) -> MethodStemForest {
    let unfiltered = RejectList::empty();
    let mut forest = MethodStemForest::new();

    for method in methods {
        let stems = get_stems(&method.name, &rejects.methods);
        if stems.is_empty() {
            tracing::warn!(
                target: "conceptmatch::stems",
                method = %method.id,
                name = %method.name,
                "Method name yields no stems, skipping"
            );
            continue;
        }

        let root = add_method_stems(
            &mut forest,
            &stems,
            MethodStemType::MethodNameFull,
            method.id,
            None,
        );

        for parameter in &method.parameters {
            if let Some(param) = add_named_element(
                &mut forest,
                method.id,
                root,
                (&parameter.name, MethodStemType::ParameterNameFull),
                (&parameter.type_name, MethodStemType::ParameterTypeFull),
                &unfiltered,
                &rejects.types,
            ) {
                forest.node_mut(root).parameters.push(param);
            }
        }

        for reference in &method.references {
            if let Some(refr) = add_named_element(
                &mut forest,
                method.id,
                root,
                (&reference.name, MethodStemType::ReferenceNameFull),
                (&reference.type_name, MethodStemType::ReferenceTypeFull),
                &unfiltered,
                &rejects.types,
            ) {
                forest.node_mut(root).references.push(refr);
            }
        }

        forest.add_root(method.id, root);
    }

    tracing::info!(
        target: "conceptmatch::stems",
        methods = methods.len(),
        trees = forest.roots().len(),
        stems = forest.len(),
        "Built method stem forest"
    );
    forest
}

/// Add a full node and its parts; returns the full node.
fn add_concept_stems(
    forest: &mut ConceptStemForest,
    stems: &[String],
    full: ConceptStemType,
    concept: ConceptId,
    parent: Option<StemId>,
) -> StemId {
    let full_id = forest.alloc(ConceptStem::new(full_term(stems), full, concept, parent));
    for stem in stems {
        let part = forest.alloc(ConceptStem::new(
            stem.clone(),
            full.part(),
            concept,
            Some(full_id),
        ));
        forest.node_mut(full_id).parts.push(part);
    }
    full_id
}

/// Add a full node and, for tags that have them, its parts.
fn add_method_stems(
    forest: &mut MethodStemForest,
    stems: &[String],
    full: MethodStemType,
    method: MethodId,
    parent: Option<StemId>,
) -> StemId {
    let full_id = forest.alloc(MethodStem::new(full_term(stems), full, method, parent));
    if let Some(part_type) = full.part() {
        for stem in stems {
            let part = forest.alloc(MethodStem::new(
                stem.clone(),
                part_type,
                method,
                Some(full_id),
            ));
            forest.node_mut(full_id).parts.push(part);
        }
    }
    full_id
}

/// Add a parameter or reference sub-tree with its declared type.
fn add_named_element(
    forest: &mut MethodStemForest,
    method: MethodId,
    root: StemId,
    (name, name_type): (&str, MethodStemType),
    (type_name, type_type): (&str, MethodStemType),
    name_rejects: &RejectList,
    type_rejects: &RejectList,
) -> Option<StemId> {
    let name_stems = get_stems(name, name_rejects);
    if name_stems.is_empty() {
        return None;
    }
    let element = add_method_stems(forest, &name_stems, name_type, method, Some(root));

    let type_stems = get_stems(type_name, type_rejects);
    if !type_stems.is_empty() {
        let ty = add_method_stems(forest, &type_stems, type_type, method, Some(element));
        forest.node_mut(element).types.push(ty);
    }
    Some(element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stems::StemNode;
    use conceptmatch_core::ReferenceOrigin;

    fn battery_pack() -> Concept {
        Concept::new(1, "BatteryPack")
            .with_attribute("voltage", "V")
            .with_class("Pack", "pk")
    }

    fn get_voltage() -> SourceMethod {
        SourceMethod::new(10, "Battery", "getVoltage")
            .with_parameter("cellIndex", "int")
            .with_reference("cellVoltage", "Double", ReferenceOrigin::Field)
    }

    fn rejects() -> RejectLists {
        RejectLists {
            methods: RejectList::from_words(["get"]),
            ..RejectLists::default()
        }
    }

    fn terms<N: StemNode>(forest: &crate::stems::StemForest<N>, ids: &[StemId]) -> Vec<String> {
        ids.iter().map(|id| forest.term(*id).to_string()).collect()
    }

    // ========================================================================
    // Concept forests
    // ========================================================================

    #[test]
    fn test_concept_tree_shape() {
        let forest = build_concept_forest(&[battery_pack()], &rejects());
        let root = forest.root_of(ConceptId(1)).unwrap();
        let node = forest.node(root);

        assert_eq!(node.term, "batteripack");
        assert_eq!(node.stem_type, ConceptStemType::ConceptNameFull);
        assert_eq!(terms(&forest, &node.parts), vec!["batteri", "pack"]);
        assert_eq!(node.attributes.len(), 1);
        assert_eq!(node.classes.len(), 1);

        let attr = forest.node(node.attributes[0]);
        assert_eq!(attr.term, "voltag");
        assert_eq!(attr.parent, Some(root));
        assert_eq!(attr.identifiers.len(), 1);
        let ident = forest.node(attr.identifiers[0]);
        assert_eq!(ident.stem_type, ConceptStemType::AttributeIdentifierFull);
        assert_eq!(ident.term, "v");
    }

    #[test]
    fn test_concept_inflate_order() {
        let forest = build_concept_forest(&[battery_pack()], &rejects());
        let root = forest.roots()[0];
        let kinds: Vec<ConceptStemType> = forest
            .inflate(root)
            .into_iter()
            .map(|id| forest.node(id).stem_type)
            .collect();

        use ConceptStemType::*;
        assert_eq!(
            kinds,
            vec![
                ConceptNameFull,
                ConceptNamePart,
                ConceptNamePart,
                AttributeNameFull,
                AttributeNamePart,
                AttributeIdentifierFull,
                AttributeIdentifierPart,
                ClassNameFull,
                ClassNamePart,
                ClassIdentifierFull,
                ClassIdentifierPart,
            ]
        );
    }

    #[test]
    fn test_full_term_is_concatenation_of_parts() {
        let concepts = vec![
            battery_pack(),
            Concept::new(2, "ElectricMotorSpeed").with_attribute("maxTorque", "tq_max"),
        ];
        let forest = build_concept_forest(&concepts, &rejects());
        for (_, node) in forest.iter() {
            if !node.parts.is_empty() {
                let joined: String = node.parts.iter().map(|p| forest.term(*p)).collect();
                assert_eq!(node.term, joined);
            }
        }
    }

    #[test]
    fn test_empty_names_skip_subtrees() {
        let concepts = vec![
            Concept::new(1, "Battery").with_attribute("", "x").with_class("Cell", ""),
            Concept::new(2, "***"),
        ];
        let forest = build_concept_forest(&concepts, &rejects());

        assert_eq!(forest.roots().len(), 1);
        assert!(forest.root_of(ConceptId(2)).is_none());

        let root = forest.node(forest.roots()[0]);
        assert!(root.attributes.is_empty());
        assert_eq!(root.classes.len(), 1);
        assert!(forest.node(root.classes[0]).identifiers.is_empty());
    }

    #[test]
    fn test_concept_rejects_do_not_apply_to_identifiers() {
        let rejects = RejectLists {
            concepts: RejectList::from_words(["speed"]),
            ..RejectLists::default()
        };
        let concept = Concept::new(1, "MotorSpeed")
            .with_attribute("speedLimit", "speed")
            .with_attribute("speed", "v_max");
        let forest = build_concept_forest(&[concept], &rejects);
        let root = forest.node(forest.roots()[0]);

        assert_eq!(root.term, "motor");
        assert_eq!(root.attributes.len(), 1);

        let attr = forest.node(root.attributes[0]);
        assert_eq!(attr.term, "limit");
        assert_eq!(forest.node(attr.identifiers[0]).term, "speed");
    }

    // ========================================================================
    // Method forests
    // ========================================================================

    #[test]
    fn test_method_tree_shape() {
        let forest = build_method_forest(&[get_voltage()], &rejects());
        let root = forest.root_of(MethodId(10)).unwrap();
        let node = forest.node(root);

        assert_eq!(node.term, "voltag");
        assert_eq!(terms(&forest, &node.parts), vec!["voltag"]);

        let param = forest.node(node.parameters[0]);
        assert_eq!(param.stem_type, MethodStemType::ParameterNameFull);
        assert_eq!(param.term, "cellindex");
        assert_eq!(terms(&forest, &param.parts), vec!["cell", "index"]);
        assert_eq!(param.types.len(), 1);

        let ty = forest.node(param.types[0]);
        assert_eq!(ty.stem_type, MethodStemType::ParameterTypeFull);
        assert_eq!(ty.term, "int");
        assert!(ty.parts.is_empty());

        let refr = forest.node(node.references[0]);
        assert_eq!(refr.stem_type, MethodStemType::ReferenceNameFull);
        assert_eq!(forest.node(refr.types[0]).stem_type, MethodStemType::ReferenceTypeFull);
    }

    #[test]
    fn test_method_inflate_order() {
        let forest = build_method_forest(&[get_voltage()], &rejects());
        let kinds: Vec<MethodStemType> = forest
            .inflate_owner(MethodId(10))
            .into_iter()
            .map(|id| forest.node(id).stem_type)
            .collect();

        use MethodStemType::*;
        assert_eq!(kinds[0], MethodNameFull);
        assert_eq!(kinds[1], MethodNamePart);
        assert_eq!(&kinds[2..6], &[ParameterNameFull, ParameterNamePart, ParameterNamePart, ParameterTypeFull]);
        assert_eq!(kinds[6], ReferenceNameFull);
        assert_eq!(*kinds.last().unwrap(), ReferenceTypeFull);
    }

    #[test]
    fn test_method_rejects() {
        let rejects = RejectLists {
            methods: RejectList::from_words(["get"]),
            types: RejectList::from_words(["int"]),
            ..RejectLists::default()
        };
        let methods = vec![
            get_voltage(),
            SourceMethod::new(11, "Battery", "get").with_parameter("get", "int"),
        ];
        let forest = build_method_forest(&methods, &rejects);

        assert_eq!(forest.roots().len(), 1);
        assert!(forest.root_of(MethodId(11)).is_none());

        let root = forest.node(forest.roots()[0]);
        let param = forest.node(root.parameters[0]);
        assert!(param.types.is_empty());
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let concepts = vec![battery_pack(), Concept::new(2, "Cell").with_attribute("temperature", "T")];
        let first = build_concept_forest(&concepts, &rejects());
        let second = build_concept_forest(&concepts, &rejects());

        assert_eq!(first.roots(), second.roots());
        let a: Vec<_> = first.iter().map(|(_, n)| n.clone()).collect();
        let b: Vec<_> = second.iter().map(|(_, n)| n.clone()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_by_term_groups_in_inflate_order() {
        let concepts = vec![
            Concept::new(1, "Pack"),
            Concept::new(2, "BatteryPack"),
        ];
        let forest = build_concept_forest(&concepts, &rejects());
        let index = forest.by_term();

        assert_eq!(index.terms(), &["pack", "batteripack", "batteri"]);
        let pack = index.stems("pack");
        assert_eq!(pack.len(), 3);
        assert_eq!(forest.node(pack[0]).concept, ConceptId(1));
        assert_eq!(forest.node(pack[2]).concept, ConceptId(2));
        assert!(index.stems("unknown").is_empty());
        assert_eq!(index.position("batteri"), Some(2));
    }
}
