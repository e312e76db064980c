//! Project storage seen by the executor.
//!
//! The executor only needs four things from storage: the concept and method
//! graphs of a project, and somewhere to keep the two stem forests built from
//! them. [`MemoryPersistence`] keeps everything in process.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use conceptmatch_core::{Concept, ProjectId, SourceMethod};
use conceptmatch_engine::{ConceptStemForest, MethodStemForest};

use crate::{Error, Result};

/// Storage backend for project graphs and stem forests.
///
/// A `replace_*` call swaps the whole forest of a project at once; readers
/// see either the old forest or the new one, never a mix.
pub trait Persistence: Send + Sync {
    /// Concepts of a project, in project order
    fn list_concepts(&self, project: ProjectId) -> Result<Vec<Concept>>;

    /// Source methods of a project, in project order
    fn list_source_methods(&self, project: ProjectId) -> Result<Vec<SourceMethod>>;

    /// Replace the concept stem forest of a project
    fn replace_concept_stems(&self, project: ProjectId, forest: ConceptStemForest) -> Result<()>;

    /// Replace the method stem forest of a project
    fn replace_method_stems(&self, project: ProjectId, forest: MethodStemForest) -> Result<()>;

    /// Current concept stem forest, `None` if never built
    fn concept_stems(&self, project: ProjectId) -> Result<Option<Arc<ConceptStemForest>>>;

    /// Current method stem forest, `None` if never built
    fn method_stems(&self, project: ProjectId) -> Result<Option<Arc<MethodStemForest>>>;
}

/// Serializable project graphs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    /// Ontology concepts
    #[serde(default)]
    pub concepts: Vec<Concept>,
    /// Source methods
    #[serde(default)]
    pub methods: Vec<SourceMethod>,
}

#[derive(Default)]
struct ProjectState {
    snapshot: ProjectSnapshot,
    concept_stems: Option<Arc<ConceptStemForest>>,
    method_stems: Option<Arc<MethodStemForest>>,
}

/// In-memory [`Persistence`]
#[derive(Default)]
pub struct MemoryPersistence {
    projects: RwLock<FxHashMap<ProjectId, ProjectState>>,
}

impl MemoryPersistence {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a project.
    ///
    /// Replacing a project drops any stem forests built for it.
    pub fn insert_project(&self, project: ProjectId, snapshot: ProjectSnapshot) {
        self.projects.write().insert(
            project,
            ProjectState {
                snapshot,
                ..Default::default()
            },
        );
    }

    /// Parse a JSON [`ProjectSnapshot`] and insert it
    pub fn load_json(&self, project: ProjectId, json: &str) -> Result<()> {
        let snapshot: ProjectSnapshot = serde_json::from_str(json)?;
        tracing::debug!(
            target: "conceptmatch::executor",
            %project,
            concepts = snapshot.concepts.len(),
            methods = snapshot.methods.len(),
            "Loaded project snapshot"
        );
        self.insert_project(project, snapshot);
        Ok(())
    }

    /// Ids of every stored project, ascending
    pub fn project_ids(&self) -> Vec<ProjectId> {
        let mut ids: Vec<ProjectId> = self.projects.read().keys().copied().collect();
        ids.sort();
        ids
    }

    fn read<T>(&self, project: ProjectId, f: impl FnOnce(&ProjectState) -> T) -> Result<T> {
        let projects = self.projects.read();
        let state = projects
            .get(&project)
            .ok_or(Error::ProjectNotFound { project })?;
        Ok(f(state))
    }

    fn write(&self, project: ProjectId, f: impl FnOnce(&mut ProjectState)) -> Result<()> {
        let mut projects = self.projects.write();
        let state = projects
            .get_mut(&project)
            .ok_or(Error::ProjectNotFound { project })?;
        f(state);
        Ok(())
    }
}

impl Persistence for MemoryPersistence {
    fn list_concepts(&self, project: ProjectId) -> Result<Vec<Concept>> {
        self.read(project, |s| s.snapshot.concepts.clone())
    }

    fn list_source_methods(&self, project: ProjectId) -> Result<Vec<SourceMethod>> {
        self.read(project, |s| s.snapshot.methods.clone())
    }

    fn replace_concept_stems(&self, project: ProjectId, forest: ConceptStemForest) -> Result<()> {
        self.write(project, |s| s.concept_stems = Some(Arc::new(forest)))
    }

    fn replace_method_stems(&self, project: ProjectId, forest: MethodStemForest) -> Result<()> {
        self.write(project, |s| s.method_stems = Some(Arc::new(forest)))
    }

    fn concept_stems(&self, project: ProjectId) -> Result<Option<Arc<ConceptStemForest>>> {
        self.read(project, |s| s.concept_stems.clone())
    }

    fn method_stems(&self, project: ProjectId) -> Result<Option<Arc<MethodStemForest>>> {
        self.read(project, |s| s.method_stems.clone())
    }
}
