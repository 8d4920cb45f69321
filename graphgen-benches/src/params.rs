//! Benchmark parameter types.

use std::fmt;

/// Size of one benchmarked graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphBenchParams {
    /// Number of nodes.
    pub node_count: usize,
    /// Complexity factor.
    pub complexity: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},c={}", self.node_count, self.complexity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(100, 1, "n=100,c=1")]
    #[case(5_000, 3, "n=5000,c=3")]
    fn display_labels_benchmark_ids(
        #[case] node_count: usize,
        #[case] complexity: usize,
        #[case] expected: &str,
    ) {
        let params = GraphBenchParams {
            node_count,
            complexity,
        };
        assert_eq!(params.to_string(), expected);
    }
}
