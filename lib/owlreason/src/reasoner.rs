//! Structural reasoning over an in-memory [`Ontology`].

use crate::error::ReasoningLimitError;
use owlmodel::{Ontology, OntologyClass, PropertyKind, vocab};
use rustc_hash::{FxHashMap, FxHashSet};
use std::time::{Duration, Instant};

/// Default number of node visits a single [`StructuralReasoner::reason`] run
/// may spend on hierarchy traversals.
pub const DEFAULT_MAX_VISITED: usize = 1_000_000;

/// Tuning knobs for the [`StructuralReasoner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReasonerConfig {
    /// Upper bound on the total number of class nodes visited by hierarchy
    /// traversals in one reasoning run. When the bound is hit, reasoning
    /// fails with [`ReasoningLimitError`] instead of returning a partial
    /// result.
    pub max_visited: usize,
}

impl Default for ReasonerConfig {
    fn default() -> Self {
        Self {
            max_visited: DEFAULT_MAX_VISITED,
        }
    }
}

/// Classification of a reasoning error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReasoningErrorKind {
    /// Disjoint classes share subclasses.
    Inconsistency,
    /// A class cannot have any instances.
    Unsatisfiable,
    /// The subclass graph contains a cycle.
    CircularDependency,
}

/// Classification of a reasoning warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReasoningWarningKind {
    /// A property does not declare a domain.
    MissingDomain,
    /// An object property does not declare a range.
    MissingRange,
    /// A class is declared but nothing references it.
    UnusedClass,
    /// An axiom restates something already entailed.
    Redundant,
}

/// A contradiction found in the ontology.
///
/// Errors make the ontology inconsistent but never abort reasoning; the full
/// list is collected into the [`ReasoningResult`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReasoningError {
    pub kind: ReasoningErrorKind,
    pub message: String,
    /// Entity IRIs involved in the contradiction.
    pub affected_entities: Vec<String>,
}

/// A modelling smell that does not make the ontology inconsistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReasoningWarning {
    pub kind: ReasoningWarningKind,
    pub message: String,
    /// Entity IRIs the warning is about.
    pub affected_entities: Vec<String>,
}

/// Everything a reasoning run produced.
#[derive(Debug, Clone)]
pub struct ReasoningResult {
    /// `true` when no [`ReasoningError`] was found.
    pub consistent: bool,
    pub errors: Vec<ReasoningError>,
    pub warnings: Vec<ReasoningWarning>,
    /// For every class, its transitive superclasses in depth-first order
    /// starting from the directly declared ones.
    pub inferred_hierarchy: FxHashMap<String, Vec<String>>,
    /// Classes whose transitive superclasses include a disjoint pair.
    pub unsatisfiable_classes: Vec<String>,
    /// Wall-clock time the run took.
    pub duration: Duration,
}

/// Tracks how many nodes the traversals of one reasoning run have visited.
struct Budget {
    remaining: usize,
    limit: usize,
}

impl Budget {
    fn new(limit: usize) -> Self {
        Self {
            remaining: limit,
            limit,
        }
    }

    fn visit(&mut self) -> Result<(), ReasoningLimitError> {
        if self.remaining == 0 {
            return Err(ReasoningLimitError { limit: self.limit });
        }
        self.remaining -= 1;
        Ok(())
    }
}

/// Maps a class id to the ids of its directly declared subclasses.
type ChildIndex<'a> = FxHashMap<&'a str, Vec<&'a str>>;

/// Checks an [`Ontology`] for structural contradictions and computes its
/// inferred class hierarchy.
///
/// The checks are purely structural: declared disjointness, declared subclass
/// axioms and declared property signatures. Contradictions are returned as
/// data in the [`ReasoningResult`], never as `Err`; the only failure mode is
/// exhausting the traversal budget of the [`ReasonerConfig`].
///
/// ```
/// use owlmodel::{Ontology, OntologyClass};
/// use owlreason::StructuralReasoner;
///
/// let mut ontology = Ontology::new("http://example.org/zoo", "Zoo");
/// ontology.insert_class(OntologyClass::new("http://example.org/zoo#Animal", "Animal"));
/// let mut lion = OntologyClass::new("http://example.org/zoo#Lion", "Lion");
/// lion.super_classes.push("http://example.org/zoo#Animal".to_owned());
/// ontology.insert_class(lion);
///
/// let result = StructuralReasoner::new(&ontology).reason()?;
/// assert!(result.consistent);
/// assert_eq!(
///     result.inferred_hierarchy["http://example.org/zoo#Lion"],
///     ["http://example.org/zoo#Animal"]
/// );
/// # Ok::<_, owlreason::ReasoningLimitError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StructuralReasoner<'a> {
    ontology: &'a Ontology,
    config: ReasonerConfig,
}

impl<'a> StructuralReasoner<'a> {
    /// Builds a reasoner with the default [`ReasonerConfig`].
    #[must_use]
    pub fn new(ontology: &'a Ontology) -> Self {
        Self::with_config(ontology, ReasonerConfig::default())
    }

    /// Builds a reasoner with an explicit traversal budget.
    #[must_use]
    pub fn with_config(ontology: &'a Ontology, config: ReasonerConfig) -> Self {
        Self { ontology, config }
    }

    /// Runs all checks and returns the collected findings.
    ///
    /// # Errors
    ///
    /// Returns [`ReasoningLimitError`] when the hierarchy traversals exceed
    /// [`ReasonerConfig::max_visited`]. No partial result is returned in
    /// that case.
    pub fn reason(&self) -> Result<ReasoningResult, ReasoningLimitError> {
        let started = Instant::now();
        let mut budget = Budget::new(self.config.max_visited);
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let children = self.child_index();

        self.check_disjoint_consistency(&children, &mut errors, &mut budget)?;
        let unsatisfiable_classes = self.find_unsatisfiable_classes(&mut budget)?;
        self.detect_inheritance_cycles(&mut errors, &mut budget)?;
        let inferred_hierarchy = self.infer_hierarchy(&mut budget)?;
        self.check_property_declarations(&mut warnings);
        self.find_unused_classes(&mut warnings);

        Ok(ReasoningResult {
            consistent: errors.is_empty(),
            errors,
            warnings,
            inferred_hierarchy,
            unsatisfiable_classes,
            duration: started.elapsed(),
        })
    }

    /// Builds the subclass adjacency once; every descent reuses it.
    fn child_index(&self) -> ChildIndex<'a> {
        let mut children: ChildIndex<'a> = FxHashMap::default();
        for class in self.ontology.classes() {
            for super_id in &class.super_classes {
                children
                    .entry(super_id.as_str())
                    .or_default()
                    .push(class.id.as_str());
            }
        }
        children
    }

    /// Reports every disjoint class pair that shares at least one subclass.
    fn check_disjoint_consistency(
        &self,
        children: &ChildIndex<'a>,
        errors: &mut Vec<ReasoningError>,
        budget: &mut Budget,
    ) -> Result<(), ReasoningLimitError> {
        for class in self.ontology.classes() {
            for disjoint_id in &class.disjoint_with {
                let Some(disjoint) = self.ontology.class(disjoint_id) else {
                    continue;
                };
                let shared = self.shared_subclasses(children, &class.id, disjoint_id, budget)?;
                if shared.is_empty() {
                    continue;
                }
                let mut affected = vec![class.id.clone(), disjoint_id.clone()];
                affected.extend(shared);
                errors.push(ReasoningError {
                    kind: ReasoningErrorKind::Inconsistency,
                    message: format!(
                        "Classes {} and {} are disjoint but share subclasses",
                        class.name, disjoint.name
                    ),
                    affected_entities: affected,
                });
            }
        }
        Ok(())
    }

    /// A class is unsatisfiable when two of its transitive superclasses are
    /// declared disjoint.
    fn find_unsatisfiable_classes(
        &self,
        budget: &mut Budget,
    ) -> Result<Vec<String>, ReasoningLimitError> {
        let mut unsatisfiable = Vec::new();
        for class in self.ontology.classes() {
            let supers = self.superclasses_of(&class.id, budget)?;
            if self.contains_disjoint_pair(&supers) {
                unsatisfiable.push(class.id.clone());
            }
        }
        Ok(unsatisfiable)
    }

    fn contains_disjoint_pair(&self, class_ids: &[String]) -> bool {
        class_ids.iter().enumerate().any(|(index, first)| {
            class_ids[index + 1..]
                .iter()
                .any(|second| self.are_disjoint(first, second))
        })
    }

    fn are_disjoint(&self, first: &str, second: &str) -> bool {
        self.declares_disjoint(first, second) || self.declares_disjoint(second, first)
    }

    fn declares_disjoint(&self, class_id: &str, other_id: &str) -> bool {
        self.ontology
            .class(class_id)
            .is_some_and(|class| class.disjoint_with.iter().any(|id| id == other_id))
    }

    fn detect_inheritance_cycles(
        &self,
        errors: &mut Vec<ReasoningError>,
        budget: &mut Budget,
    ) -> Result<(), ReasoningLimitError> {
        let mut visited: FxHashSet<&'a str> = FxHashSet::default();
        for class in self.ontology.classes() {
            if !visited.contains(class.id.as_str()) {
                self.cycle_search(class, &mut visited, errors, budget)?;
            }
        }
        Ok(())
    }

    /// One depth-first descent along `super_classes` edges looking for a back
    /// edge. Each frame remembers which edge of its class to try next; the
    /// map of on-stack ids to frame depths recovers the cycle path when a
    /// back edge closes it. The first cycle found abandons this root.
    fn cycle_search(
        &self,
        root: &'a OntologyClass,
        visited: &mut FxHashSet<&'a str>,
        errors: &mut Vec<ReasoningError>,
        budget: &mut Budget,
    ) -> Result<(), ReasoningLimitError> {
        visited.insert(root.id.as_str());
        budget.visit()?;
        let mut on_stack: FxHashMap<&'a str, usize> = FxHashMap::default();
        on_stack.insert(root.id.as_str(), 0);
        let mut frames: Vec<(&'a OntologyClass, usize)> = vec![(root, 0)];

        while let Some(frame) = frames.last_mut() {
            let class = frame.0;
            let Some(super_id) = class.super_classes.get(frame.1) else {
                on_stack.remove(class.id.as_str());
                frames.pop();
                continue;
            };
            frame.1 += 1;

            if let Some(&entry) = on_stack.get(super_id.as_str()) {
                let mut cycle: Vec<String> = frames[entry..]
                    .iter()
                    .map(|(class, ..)| class.id.clone())
                    .collect();
                cycle.push(super_id.clone());
                errors.push(ReasoningError {
                    kind: ReasoningErrorKind::CircularDependency,
                    message: format!(
                        "Circular inheritance detected: {}",
                        self.display_path(&cycle)
                    ),
                    affected_entities: cycle,
                });
                return Ok(());
            }
            if !visited.insert(super_id.as_str()) {
                continue;
            }
            // Dangling superclass references are leaves, never stack entries.
            let Some(super_class) = self.ontology.class(super_id) else {
                continue;
            };
            budget.visit()?;
            on_stack.insert(super_class.id.as_str(), frames.len());
            frames.push((super_class, 0));
        }
        Ok(())
    }

    fn display_path(&self, class_ids: &[String]) -> String {
        class_ids
            .iter()
            .map(|id| {
                self.ontology
                    .class(id)
                    .map_or(id.as_str(), |class| class.name.as_str())
            })
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    fn infer_hierarchy(
        &self,
        budget: &mut Budget,
    ) -> Result<FxHashMap<String, Vec<String>>, ReasoningLimitError> {
        let mut hierarchy = FxHashMap::default();
        for class in self.ontology.classes() {
            let supers = self.superclasses_of(&class.id, budget)?;
            hierarchy.insert(class.id.clone(), supers);
        }
        Ok(hierarchy)
    }

    /// Transitive superclasses of `class_id` in depth-first order, directly
    /// declared parents first. The visited set makes the walk terminate on
    /// cyclic hierarchies; dangling ids are reported but not expanded.
    fn superclasses_of(
        &self,
        class_id: &str,
        budget: &mut Budget,
    ) -> Result<Vec<String>, ReasoningLimitError> {
        let mut found = Vec::new();
        let mut visited = FxHashSet::default();
        visited.insert(class_id.to_owned());
        let mut stack: Vec<String> = Vec::new();
        if let Some(class) = self.ontology.class(class_id) {
            budget.visit()?;
            stack.extend(class.super_classes.iter().rev().cloned());
        }
        while let Some(current) = stack.pop() {
            if !found.contains(&current) {
                found.push(current.clone());
            }
            if !visited.insert(current.clone()) {
                continue;
            }
            budget.visit()?;
            if let Some(class) = self.ontology.class(&current) {
                stack.extend(class.super_classes.iter().rev().cloned());
            }
        }
        Ok(found)
    }

    /// Transitive subclasses of `class_id` in depth-first order over the
    /// prebuilt child adjacency.
    fn subclasses_of(
        &self,
        children: &ChildIndex<'a>,
        class_id: &str,
        budget: &mut Budget,
    ) -> Result<Vec<String>, ReasoningLimitError> {
        let mut found: Vec<&str> = Vec::new();
        let mut visited: FxHashSet<&str> = FxHashSet::default();
        let mut stack: Vec<&str> = vec![class_id];
        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            budget.visit()?;
            if current != class_id && !found.contains(&current) {
                found.push(current);
            }
            if let Some(direct) = children.get(current) {
                // Reversed so the stack pops them in declaration order.
                stack.extend(direct.iter().rev().copied());
            }
        }
        Ok(found.into_iter().map(str::to_owned).collect())
    }

    fn shared_subclasses(
        &self,
        children: &ChildIndex<'a>,
        first: &str,
        second: &str,
        budget: &mut Budget,
    ) -> Result<Vec<String>, ReasoningLimitError> {
        let first_subs = self.subclasses_of(children, first, budget)?;
        let second_subs = self.subclasses_of(children, second, budget)?;
        Ok(first_subs
            .into_iter()
            .filter(|id| second_subs.contains(id))
            .collect())
    }

    fn check_property_declarations(&self, warnings: &mut Vec<ReasoningWarning>) {
        for property in self.ontology.properties() {
            if property.domain.is_empty() {
                warnings.push(ReasoningWarning {
                    kind: ReasoningWarningKind::MissingDomain,
                    message: format!("Property {} has no domain specified", property.name),
                    affected_entities: vec![property.id.clone()],
                });
            }
            if property.kind == PropertyKind::Object && property.range.is_empty() {
                warnings.push(ReasoningWarning {
                    kind: ReasoningWarningKind::MissingRange,
                    message: format!("Object property {} has no range specified", property.name),
                    affected_entities: vec![property.id.clone()],
                });
            }
        }
    }

    /// A class counts as used when another axiom references it: a subclass,
    /// disjointness or equivalence declaration, a property domain or range,
    /// or an individual's type. `owl:Thing` is exempt.
    fn find_unused_classes(&self, warnings: &mut Vec<ReasoningWarning>) {
        let mut used: FxHashSet<&str> = FxHashSet::default();
        for class in self.ontology.classes() {
            used.extend(class.super_classes.iter().map(String::as_str));
            used.extend(class.disjoint_with.iter().map(String::as_str));
            used.extend(class.equivalent_to.iter().map(String::as_str));
        }
        for property in self.ontology.properties() {
            used.extend(property.domain.iter().map(String::as_str));
            used.extend(property.range.iter().map(String::as_str));
        }
        for individual in self.ontology.individuals() {
            used.extend(individual.types.iter().map(String::as_str));
        }
        for class in self.ontology.classes() {
            if used.contains(class.id.as_str()) || vocab::expand(&class.id) == vocab::owl::THING {
                continue;
            }
            warnings.push(ReasoningWarning {
                kind: ReasoningWarningKind::UnusedClass,
                message: format!("Class {} is defined but never used", class.name),
                affected_entities: vec![class.id.clone()],
            });
        }
    }
}

/// Runs a [`StructuralReasoner`] with its default configuration.
///
/// # Errors
///
/// Returns [`ReasoningLimitError`] when the traversal budget is exhausted.
pub fn reason(ontology: &Ontology) -> Result<ReasoningResult, ReasoningLimitError> {
    StructuralReasoner::new(ontology).reason()
}
