//! Standard PageRank algorithm
//!
//! Implements the classic PageRank with power iteration. A dangling node
//! (no outbound links) hands its damped mass to every node uniformly,
//! itself included, which models a random surfer who teleports when stuck.

use super::PageRankResult;
use crate::graph::csr::CsrGraph;
use crate::types::RankConfig;

/// Standard PageRank implementation
#[derive(Debug, Clone)]
pub struct StandardPageRank {
    /// Damping factor (typically 0.85)
    pub decay: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold: every node must move by less than this
    pub epsilon: f64,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self::from_config(&RankConfig::default())
    }
}

impl StandardPageRank {
    /// Create a new StandardPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a [`RankConfig`] (which is not validated here)
    pub fn from_config(config: &RankConfig) -> Self {
        Self {
            decay: config.decay,
            max_iterations: config.max_iterations,
            epsilon: config.epsilon,
        }
    }

    /// Set the damping factor
    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Run PageRank on a graph
    ///
    /// Returns the last ranks even if convergence wasn't achieved, with
    /// `converged=false`. Scores are not renormalized.
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        let n = graph.num_nodes;
        if n == 0 {
            return PageRankResult::new(vec![], 0, 0.0, true);
        }
        let n_f64 = n as f64;

        // Initialize scores uniformly
        let mut scores = vec![1.0 / n_f64; n];
        let mut new_scores = vec![0.0; n];

        let dangling_nodes = graph.dangling_nodes();
        let teleport = (1.0 - self.decay) / n_f64;
        let mut iterations = 0;
        let mut delta = f64::INFINITY;
        let mut converged = false;

        while iterations < self.max_iterations {
            iterations += 1;

            // Mass from dangling nodes is shared by everyone, so fold it into
            // the base value along with the teleport term
            let dangling_mass: f64 = dangling_nodes.iter().map(|&d| scores[d as usize]).sum();
            let dangling_share = self.decay * dangling_mass / n_f64;

            // Fresh accumulator: reads come only from `scores`
            new_scores.fill(teleport + dangling_share);

            for (node, &node_score) in scores.iter().enumerate() {
                let links = graph.neighbors(node as u32);
                if links.is_empty() {
                    continue;
                }
                let contribution = self.decay * node_score / links.len() as f64;
                for &neighbor in links {
                    new_scores[neighbor as usize] += contribution;
                }
            }

            // Convergence delta (L-infinity norm)
            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .fold(0.0, f64::max);

            std::mem::swap(&mut scores, &mut new_scores);

            if delta < self.epsilon {
                converged = true;
                break;
            }
        }

        #[cfg(feature = "tracing")]
        if converged {
            tracing::debug!(iterations, delta, nodes = n, "pagerank converged");
        } else {
            tracing::warn!(
                iterations,
                delta,
                nodes = n,
                "pagerank hit the iteration limit; returning best-effort ranks"
            );
        }

        PageRankResult::new(scores, iterations, delta, converged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::LinkGraphBuilder;
    use crate::types::Document;

    fn graph_of(edges: &[(&str, &[&str])]) -> CsrGraph {
        let docs: Vec<_> = edges
            .iter()
            .map(|(id, links)| Document::new(*id, links.iter().copied(), Vec::<String>::new()))
            .collect();
        CsrGraph::from_link_graph(&LinkGraphBuilder::build(&docs))
    }

    fn build_cycle_graph() -> CsrGraph {
        graph_of(&[("a", &["b"]), ("b", &["c"]), ("c", &["a"])])
    }

    fn build_star_graph() -> CsrGraph {
        // Every spoke links to the hub; the hub links nowhere
        graph_of(&[
            ("hub", &[]),
            ("s1", &["hub"]),
            ("s2", &["hub"]),
            ("s3", &["hub"]),
        ])
    }

    #[test]
    fn test_cycle_graph_equal_scores() {
        let graph = build_cycle_graph();
        let result = StandardPageRank::new().run(&graph);

        assert!(result.converged);
        let expected = 1.0 / 3.0;
        for score in &result.scores {
            assert!((score - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_star_graph_hub_highest() {
        let graph = build_star_graph();
        let result = StandardPageRank::new().run(&graph);

        assert!(result.converged);
        let hub = graph.node("hub").unwrap() as usize;
        for (i, &score) in result.scores.iter().enumerate() {
            if i != hub {
                assert!(result.scores[hub] > score);
            }
        }
    }

    #[test]
    fn test_scores_sum_to_one() {
        for graph in [build_cycle_graph(), build_star_graph()] {
            let result = StandardPageRank::new().with_epsilon(1e-12).run(&graph);
            assert!((result.scores.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_graph() {
        let result = StandardPageRank::new().run(&CsrGraph::default());

        assert!(result.converged);
        assert!(result.scores.is_empty());
    }

    #[test]
    fn test_single_node() {
        let graph = graph_of(&[("only", &[])]);
        for decay in [0.0, 0.3, 0.85, 1.0] {
            let result = StandardPageRank::new().with_decay(decay).run(&graph);
            assert!(result.converged);
            assert_eq!(result.iterations, 1);
            assert!((result.scores[0] - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_no_links_stays_uniform() {
        let graph = graph_of(&[("a", &[]), ("b", &[]), ("c", &[]), ("d", &[])]);
        let result = StandardPageRank::new().run(&graph);

        assert!(result.converged);
        assert_eq!(result.iterations, 1);
        for score in &result.scores {
            assert!((score - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn test_max_iterations_returns_partial() {
        let graph = build_star_graph();
        let result = StandardPageRank::new()
            .with_max_iterations(1)
            .with_epsilon(1e-300)
            .run(&graph);

        assert_eq!(result.iterations, 1);
        assert!(!result.converged);
        assert_eq!(result.scores.len(), 4);
        assert!((result.scores.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_one_iteration_by_hand() {
        // a -> b, b dangling; decay 0.5, N = 2
        // a: teleport 0.25 + dangling share 0.5 * 0.5 / 2 = 0.375
        // b: 0.375 + 0.5 * 0.5 / 1 = 0.625
        let graph = graph_of(&[("a", &["b"]), ("b", &[])]);
        let result = StandardPageRank::new()
            .with_decay(0.5)
            .with_max_iterations(1)
            .run(&graph);

        assert!((result.scores[0] - 0.375).abs() < 1e-12);
        assert!((result.scores[1] - 0.625).abs() < 1e-12);
    }

    #[test]
    fn test_two_cycle_with_dangling() {
        let graph = graph_of(&[("A", &["B"]), ("B", &["A"]), ("C", &[])]);
        let result = StandardPageRank::new()
            .with_epsilon(1e-10)
            .with_max_iterations(100)
            .run(&graph);

        let a = result.scores[graph.node("A").unwrap() as usize];
        let b = result.scores[graph.node("B").unwrap() as usize];
        let c = result.scores[graph.node("C").unwrap() as usize];

        assert!(result.converged);
        assert!((a - b).abs() < 1e-9);
        assert!(a > c);
    }

    #[test]
    fn test_decay_factor() {
        let graph = build_star_graph();
        let hub = graph.node("hub").unwrap() as usize;
        let spoke = graph.node("s1").unwrap() as usize;

        // Lower damping = more teleportation = more uniform scores
        let low = StandardPageRank::new().with_decay(0.5).run(&graph);
        let high = StandardPageRank::new().with_decay(0.95).run(&graph);

        let advantage_low = low.scores[hub] - low.scores[spoke];
        let advantage_high = high.scores[hub] - high.scores[spoke];
        assert!(advantage_high > advantage_low);
    }

    #[test]
    fn test_zero_decay_is_uniform() {
        let graph = build_star_graph();
        let result = StandardPageRank::new().with_decay(0.0).run(&graph);

        assert!(result.converged);
        for score in &result.scores {
            assert!((score - 0.25).abs() < 1e-12);
        }
    }
}
