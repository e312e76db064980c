//! Stem trees
//!
//! Every concept and every method is reduced to a tree of stem nodes. All
//! trees of one side live in a single [`StemForest`] arena; nodes refer to
//! their parent and children by [`StemId`].
//!
//! - `node`: concept and method node shapes
//! - `builder`: builds forests from concept and method graphs

pub mod builder;
pub mod node;

use rustc_hash::FxHashMap;

use conceptmatch_core::StemId;

pub use builder::{build_concept_forest, build_method_forest};
pub use node::{ConceptStem, MethodStem, StemNode};

/// Forest of concept stem trees
pub type ConceptStemForest = StemForest<ConceptStem>;

/// Forest of method stem trees
pub type MethodStemForest = StemForest<MethodStem>;

/// Arena holding every stem tree of one side of a project.
///
/// Roots are kept in the order their owners were visited.
#[derive(Debug, Clone)]
pub struct StemForest<N: StemNode> {
    nodes: Vec<N>,
    roots: Vec<StemId>,
    root_by_owner: FxHashMap<N::Owner, StemId>,
}

impl<N: StemNode> Default for StemForest<N> {
    fn default() -> Self {
        StemForest {
            nodes: Vec::new(),
            roots: Vec::new(),
            root_by_owner: FxHashMap::default(),
        }
    }
}

impl<N: StemNode> StemForest<N> {
    /// Empty forest
    pub fn new() -> Self {
        Self::default()
    }

    /// Total node count across all trees
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the forest has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node by id.
    ///
    /// Panics if `id` was issued by another forest and is out of range.
    pub fn node(&self, id: StemId) -> &N {
        &self.nodes[id.index()]
    }

    /// Node by id, `None` when out of range
    pub fn get(&self, id: StemId) -> Option<&N> {
        self.nodes.get(id.index())
    }

    /// Term carried by a node
    pub fn term(&self, id: StemId) -> &str {
        self.node(id).term()
    }

    /// Root ids in owner order
    pub fn roots(&self) -> &[StemId] {
        &self.roots
    }

    /// Root of the tree owned by `owner`
    pub fn root_of(&self, owner: N::Owner) -> Option<StemId> {
        self.root_by_owner.get(&owner).copied()
    }

    /// Iterate all nodes with their ids, in allocation order
    pub fn iter(&self) -> impl Iterator<Item = (StemId, &N)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (StemId(i as u32), n))
    }

    /// Flatten a tree: the node, its parts, then each branch child (with
    /// its own parts and nested sub-trees) in construction order.
    pub fn inflate(&self, root: StemId) -> Vec<StemId> {
        let mut out = Vec::new();
        self.inflate_into(root, &mut out);
        out
    }

    /// Flatten the tree owned by `owner`; empty when it has none
    pub fn inflate_owner(&self, owner: N::Owner) -> Vec<StemId> {
        self.root_of(owner)
            .map(|root| self.inflate(root))
            .unwrap_or_default()
    }

    /// Index every node by term, walking roots in order and each tree in
    /// inflate order.
    pub fn by_term(&self) -> TermIndex {
        let mut index = TermIndex::default();
        for root in &self.roots {
            for id in self.inflate(*root) {
                index.insert(self.term(id), id);
            }
        }
        index
    }

    pub(crate) fn alloc(&mut self, node: N) -> StemId {
        let id = StemId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub(crate) fn node_mut(&mut self, id: StemId) -> &mut N {
        &mut self.nodes[id.index()]
    }

    pub(crate) fn add_root(&mut self, owner: N::Owner, root: StemId) {
        self.roots.push(root);
        self.root_by_owner.insert(owner, root);
    }

    fn inflate_into(&self, id: StemId, out: &mut Vec<StemId>) {
        let node = self.node(id);
        out.push(id);
        out.extend_from_slice(node.parts());
        for branch in node.branches() {
            for child in branch {
                self.inflate_into(*child, out);
            }
        }
        for nested in node.nested() {
            self.inflate_into(*nested, out);
        }
    }
}

/// Terms of a forest in first-seen order, each with the nodes carrying it
#[derive(Debug, Clone, Default)]
pub struct TermIndex {
    terms: Vec<String>,
    stems: Vec<Vec<StemId>>,
    position: FxHashMap<String, usize>,
}

impl TermIndex {
    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether no term was indexed
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Distinct terms in first-seen order
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Position of `term` in [`terms`](Self::terms)
    pub fn position(&self, term: &str) -> Option<usize> {
        self.position.get(term).copied()
    }

    /// Nodes carrying the term at `position`
    pub fn stems_at(&self, position: usize) -> &[StemId] {
        &self.stems[position]
    }

    /// Nodes carrying `term`; empty when unknown
    pub fn stems(&self, term: &str) -> &[StemId] {
        match self.position(term) {
            Some(i) => &self.stems[i],
            None => &[],
        }
    }

    fn insert(&mut self, term: &str, id: StemId) {
        match self.position.get(term) {
            Some(i) => self.stems[*i].push(id),
            None => {
                self.position.insert(term.to_string(), self.terms.len());
                self.terms.push(term.to_string());
                self.stems.push(vec![id]);
            }
        }
    }
}
