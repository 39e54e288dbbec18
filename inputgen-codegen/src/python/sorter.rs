//! Dependency ordering of generated classes.

use indexmap::IndexMap;
use std::collections::HashSet;

/// Direct class-to-class references collected while building classes.
///
/// Each class maps to the classes its fields reference, in field order.
/// Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    edges: IndexMap<String, Vec<String>>,
}

impl DependencyGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `class` references `dependency`.
    pub fn add_dependency(&mut self, class: &str, dependency: &str) {
        self.edges
            .entry(class.to_string())
            .or_default()
            .push(dependency.to_string());
    }

    /// Returns the direct dependencies of a class.
    #[must_use]
    pub fn dependencies(&self, class: &str) -> &[String] {
        self.edges.get(class).map_or(&[], Vec::as_slice)
    }

    /// Orders `classes` so that each one comes after everything it
    /// (transitively) depends on.
    ///
    /// Classes are visited in the given order and each dependency is placed
    /// before its dependant, depth first. Every name appears exactly once.
    /// Cycles are legal because classes reference each other through forward
    /// references; the edge closing a cycle is skipped, so classes on a cycle
    /// keep the order in which they are first reached.
    #[must_use]
    pub fn sort<'a, I>(&self, classes: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut sorter = Sorter {
            graph: self,
            placed: HashSet::new(),
            in_progress: HashSet::new(),
            order: Vec::new(),
        };
        for class in classes {
            sorter.visit(class);
        }
        sorter.order
    }
}

struct Sorter<'g> {
    graph: &'g DependencyGraph,
    placed: HashSet<String>,
    in_progress: HashSet<String>,
    order: Vec<String>,
}

impl Sorter<'_> {
    fn visit(&mut self, class: &str) {
        if self.placed.contains(class) {
            return;
        }
        if !self.in_progress.insert(class.to_string()) {
            tracing::debug!("Dependency cycle through {}, relying on forward references", class);
            return;
        }

        let graph = self.graph;
        for dependency in graph.dependencies(class) {
            self.visit(dependency);
        }

        self.in_progress.remove(class);
        self.placed.insert(class.to_string());
        self.order.push(class.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(edges: &[(&str, &str)]) -> DependencyGraph {
        let mut graph = DependencyGraph::new();
        for (class, dependency) in edges {
            graph.add_dependency(class, dependency);
        }
        graph
    }

    fn position(order: &[String], name: &str) -> usize {
        order.iter().position(|n| n == name).expect("name placed")
    }

    #[test]
    fn test_sort_without_dependencies_keeps_order() {
        let order = DependencyGraph::new().sort(["C", "A", "B"]);
        assert_eq!(order, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_sort_places_dependency_first() {
        let order = graph(&[("A", "B")]).sort(["A", "B"]);
        assert_eq!(order, vec!["B", "A"]);
    }

    #[test]
    fn test_sort_transitive() {
        let order = graph(&[("A", "B"), ("B", "C")]).sort(["A", "B", "C"]);
        assert_eq!(order, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_sort_expands_dependencies_in_field_order() {
        let order = graph(&[("A", "C"), ("A", "B"), ("B", "D")]).sort(["A", "B", "C", "D"]);
        assert_eq!(order, vec!["C", "D", "B", "A"]);
    }

    #[test]
    fn test_sort_duplicates_appear_once() {
        let order = graph(&[("A", "B"), ("A", "B"), ("C", "B")]).sort(["A", "B", "C"]);
        assert_eq!(order, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_sort_diamond() {
        let edges = [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")];
        let order = graph(&edges).sort(["A", "B", "C", "D"]);

        assert_eq!(order.len(), 4);
        for (class, dependency) in edges {
            assert!(position(&order, dependency) < position(&order, class));
        }
    }

    #[test]
    fn test_sort_self_reference() {
        let order = graph(&[("A", "A")]).sort(["A"]);
        assert_eq!(order, vec!["A"]);
    }

    #[test]
    fn test_sort_mutual_reference_terminates() {
        let order = graph(&[("A", "B"), ("B", "A")]).sort(["A", "B"]);
        assert_eq!(order, vec!["B", "A"]);
    }

    #[test]
    fn test_sort_cycle_with_tail() {
        let order = graph(&[("A", "B"), ("B", "C"), ("C", "A"), ("C", "D")]).sort([
            "A", "B", "C", "D",
        ]);
        assert_eq!(order, vec!["D", "C", "B", "A"]);
    }

    #[test]
    fn test_dependencies_lookup() {
        let graph = graph(&[("A", "B"), ("A", "B")]);
        assert_eq!(graph.dependencies("A"), ["B".to_string(), "B".to_string()]);
        assert!(graph.dependencies("B").is_empty());
    }
}
