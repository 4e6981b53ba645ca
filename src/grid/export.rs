//! Conversion of the grid into a petgraph undirected graph.
//!
//! The arena is the source of truth; this view exists for analysis with
//! petgraph's algorithms (component counts, edge counts, external tooling).

use std::collections::HashMap;

use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};

use super::geometry::{Axis, Direction, Point};
use super::graph::Grid;
use super::vertex::VertexId;

/// Reachable subgraph as a petgraph `UnGraph`, plus the id → node mapping.
pub struct GridGraph {
    pub graph: UnGraph<Point, Axis>,
    pub node_index: HashMap<VertexId, NodeIndex>,
}

impl Grid {
    /// Nodes in breadth-first order from `root`; one edge per adjacency.
    pub fn to_petgraph(&self, root: impl Into<Option<VertexId>>) -> GridGraph {
        let order = self.breadth_first(root);
        let mut graph = UnGraph::with_capacity(order.len(), order.len() * 2);
        let mut node_index = HashMap::with_capacity(order.len());
        for &id in &order {
            node_index.insert(id, graph.add_node(self.point(id)));
        }
        // Down and Right cover every undirected edge exactly once.
        for &id in &order {
            for direction in [Direction::Down, Direction::Right] {
                if let Some(next) = self.neighbor(id, direction) {
                    graph.add_edge(node_index[&id], node_index[&next], direction.axis());
                }
            }
        }
        GridGraph { graph, node_index }
    }

    /// Undirected edges reachable from `root`.
    pub fn edge_count(&self, root: impl Into<Option<VertexId>>) -> usize {
        self.to_petgraph(root).graph.edge_count()
    }

    /// Connected components over every allocated vertex, reachable or not.
    pub fn component_count(&self) -> usize {
        let mut graph: UnGraph<(), ()> = UnGraph::with_capacity(self.len(), self.len() * 2);
        let nodes: Vec<NodeIndex> = self.ids().map(|_| graph.add_node(())).collect();
        for id in self.ids() {
            for direction in [Direction::Down, Direction::Right] {
                if let Some(next) = self.neighbor(id, direction) {
                    graph.add_edge(nodes[id.index()], nodes[next.index()], ());
                }
            }
        }
        connected_components(&graph)
    }
}
