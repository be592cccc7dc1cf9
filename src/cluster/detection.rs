//! Community detection via the mutual double-threshold qualification rule

use crate::cluster::Community;
use crate::graph::WeightedGraph;
use std::collections::HashMap;

/// Union-Find data structure for connected component analysis
pub struct DisjointSets {
    /// Parent pointers (parent[i] = parent of node i)
    parent: Vec<u32>,

    /// Rank/size of each set (for union by rank)
    rank: Vec<u32>,
}

impl DisjointSets {
    /// Create a new DisjointSets structure with each node in its own set
    pub fn new(size: usize) -> Self {
        let mut parent = Vec::with_capacity(size);
        let mut rank = Vec::with_capacity(size);

        for i in 0..size {
            parent.push(i as u32);
            rank.push(1);
        }

        Self { parent, rank }
    }

    /// Find the root of the set containing x with path compression
    pub fn find(&mut self, x: u32) -> u32 {
        let px = self.parent[x as usize];
        if px != x {
            // Path compression: set parent to root
            self.parent[x as usize] = self.find(px);
        }
        self.parent[x as usize]
    }

    /// Union the sets containing x and y
    pub fn union(&mut self, x: u32, y: u32) {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return; // Already in the same set
        }

        // Union by rank: attach smaller tree under root of larger tree
        let rank_x = self.rank[root_x as usize];
        let rank_y = self.rank[root_y as usize];

        if rank_x > rank_y {
            self.parent[root_y as usize] = root_x;
            self.rank[root_x as usize] += self.rank[root_y as usize];
        } else {
            self.parent[root_x as usize] = root_y;
            self.rank[root_y as usize] += self.rank[root_x as usize];
        }
    }
}

/// Partition the graph's nodes into strongly connected groups for one
/// fixed threshold.
///
/// An edge (n, m) qualifies iff its weight is at least `threshold` times the
/// strongest incident edge weight of *both* endpoints. Requiring both sides
/// keeps a weak node from dragging a strong hub into its community just
/// because the shared edge looks important from the weak side.
///
/// Communities are the connected components of the qualifying-edge graph.
/// The resulting set partition is uniquely determined by the graph and the
/// threshold; only the internal member ordering is normalized here (members
/// ascending, communities ordered by smallest member).
pub fn find_strong_communities(graph: &WeightedGraph, threshold: f64) -> Vec<Community> {
    let node_count = graph.node_count();
    if node_count == 0 {
        return Vec::new();
    }

    // Precompute each node's strongest incident edge weight once; the
    // qualification check is then O(1) per edge.
    let local_caps: Vec<f64> = (0..node_count as u32).map(|n| graph.local_cap(n)).collect();

    let mut sets = DisjointSets::new(node_count);
    for edge in &graph.edges {
        let cap_src = local_caps[edge.source as usize];
        let cap_dst = local_caps[edge.target as usize];
        if edge.weight >= threshold * cap_src && edge.weight >= threshold * cap_dst {
            sets.union(edge.source, edge.target);
        }
    }

    // Group nodes by component root
    let mut groups: HashMap<u32, Vec<u32>> = HashMap::new();
    for node in 0..node_count as u32 {
        let root = sets.find(node);
        groups.entry(root).or_default().push(node);
    }

    // Normalize ordering so repeated runs report identical partitions
    let mut member_lists: Vec<Vec<u32>> = groups.into_values().collect();
    for members in &mut member_lists {
        members.sort_unstable();
    }
    member_lists.sort_unstable_by_key(|members| members[0]);

    member_lists
        .into_iter()
        .enumerate()
        .map(|(id, members)| Community {
            id: id as u32,
            size: members.len(),
            members,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::GraphBuilder;

    fn graph_from_edges(edges: &[(&str, &str, f64)]) -> WeightedGraph {
        let mut builder = GraphBuilder::new();
        for &(a, b, w) in edges {
            builder.add_edge(a, b, w, w, w);
        }
        builder.build()
    }

    fn labeled(graph: &WeightedGraph, communities: &[Community]) -> Vec<Vec<String>> {
        communities
            .iter()
            .map(|c| {
                c.members
                    .iter()
                    .map(|&n| graph.label(n).to_string())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn uniform_chain_forms_single_community() {
        let graph = graph_from_edges(&[("X", "Y", 1.0), ("Y", "Z", 1.0)]);
        let communities = find_strong_communities(&graph, 0.5);

        assert_eq!(communities.len(), 1);
        assert_eq!(labeled(&graph, &communities), vec![vec!["X", "Y", "Z"]]);
    }

    #[test]
    fn qualification_must_hold_on_both_sides() {
        // Hub A has a strong edge to B; C's only edge is the weak C-A edge.
        // From C's side the weak edge is locally maximal, but A's side
        // disqualifies it, so C stays out of the hub's community.
        let graph = graph_from_edges(&[("A", "B", 1.0), ("A", "C", 0.2)]);
        let communities = find_strong_communities(&graph, 0.5);

        assert_eq!(
            labeled(&graph, &communities),
            vec![vec!["A", "B"], vec!["C"]]
        );
    }

    #[test]
    fn repeated_runs_yield_identical_partitions() {
        let graph = graph_from_edges(&[
            ("A", "B", 0.9),
            ("B", "C", 0.3),
            ("C", "D", 0.8),
            ("D", "A", 0.5),
        ]);

        let first = find_strong_communities(&graph, 0.6);
        for _ in 0..5 {
            assert_eq!(find_strong_communities(&graph, 0.6), first);
        }
    }

    #[test]
    fn every_node_lands_in_exactly_one_community() {
        let graph = graph_from_edges(&[
            ("A", "B", 0.9),
            ("B", "C", 0.1),
            ("C", "D", 0.9),
            ("A", "D", 0.4),
        ]);
        let communities = find_strong_communities(&graph, 0.7);

        let mut seen: Vec<u32> = communities
            .iter()
            .flat_map(|c| c.members.iter().copied())
            .collect();
        seen.sort_unstable();
        let expected: Vec<u32> = (0..graph.node_count() as u32).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn raising_threshold_never_merges_communities() {
        let graph = graph_from_edges(&[
            ("A", "B", 1.0),
            ("B", "C", 0.6),
            ("C", "D", 1.0),
            ("D", "E", 0.3),
        ]);

        let loose = find_strong_communities(&graph, 0.01);
        let strict = find_strong_communities(&graph, 0.99);
        assert!(loose.len() <= strict.len());
    }

    #[test]
    fn empty_graph_yields_empty_partition() {
        let graph = GraphBuilder::new().build();
        assert!(find_strong_communities(&graph, 0.5).is_empty());
    }
}
