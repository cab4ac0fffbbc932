use thiserror::Error;

/// Error returned when reasoning stops because the traversal budget ran out.
///
/// Hierarchy traversals share one node-visit budget per run
/// ([`ReasonerConfig::max_visited`](crate::ReasonerConfig::max_visited)), so
/// an extremely deep or densely cross-linked ontology fails closed instead of
/// hanging. No partial result is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("reasoning incomplete: the traversal budget of {limit} visited nodes was exhausted")]
pub struct ReasoningLimitError {
    /// The configured node-visit limit.
    pub limit: usize,
}
