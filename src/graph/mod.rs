use std::fmt::{self, Debug, Display};

use num_traits::PrimInt;
use thiserror::Error;

/// Find the [Minimum Spanning Tree (MST)](https://en.wikipedia.org/wiki/Minimum_spanning_tree)
pub mod mst;
/// Track a partition of vertices for cycle detection
pub mod union_find;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {vertex} is out of range for a graph with {vertices} vertices")]
    VertexOutOfRange { vertex: usize, vertices: usize },

    #[error("edge {src} -- {dest} has a negative weight")]
    NegativeWeight { src: usize, dest: usize },
}

/// An undirected weighted edge.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Edge<W> {
    pub src: usize,
    pub dest: usize,
    pub weight: W,
}

impl<W: Display> Display for Edge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {} == {}", self.src, self.dest, self.weight)
    }
}

/// A graph that exclusively owns its edge list.
///
/// Vertices are the ids `0..vertex_count()`.
#[derive(Clone, Debug)]
pub struct Graph<W> {
    vertices: usize,
    edges: Vec<Edge<W>>,
}

impl<W: PrimInt + Debug> Graph<W> {
    pub fn new(vertices: usize) -> Self {
        Self {
            vertices,
            edges: vec![],
        }
    }

    pub fn from_edges(
        vertices: usize,
        edges: impl IntoIterator<Item = (usize, usize, W)>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(vertices);
        for (src, dest, weight) in edges {
            graph.add_edge(src, dest, weight)?;
        }
        Ok(graph)
    }

    pub fn add_edge(&mut self, src: usize, dest: usize, weight: W) -> Result<(), GraphError> {
        for vertex in [src, dest] {
            if vertex >= self.vertices {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    vertices: self.vertices,
                });
            }
        }
        if weight < W::zero() {
            return Err(GraphError::NegativeWeight { src, dest });
        }
        self.edges.push(Edge { src, dest, weight });
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }
}

/// Sum of the edge weights, or `None` if it does not fit in `W`.
pub fn total_weight<W: PrimInt>(edges: &[Edge<W>]) -> Option<W> {
    edges
        .iter()
        .try_fold(W::zero(), |acc, edge| acc.checked_add(&edge.weight))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_edge_display() {
        let edge = Edge {
            src: 3,
            dest: 4,
            weight: 2,
        };
        assert_eq!(edge.to_string(), "3 -- 4 == 2");
    }

    #[test]
    fn test_add_edge_rejects_unknown_vertex() {
        let mut graph = Graph::<u32>::new(3);
        assert_eq!(
            graph.add_edge(0, 3, 1),
            Err(GraphError::VertexOutOfRange {
                vertex: 3,
                vertices: 3
            })
        );
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_add_edge_rejects_negative_weight() {
        let result = Graph::from_edges(2, [(0, 1, -1i32)]);
        assert_eq!(
            result.unwrap_err(),
            GraphError::NegativeWeight { src: 0, dest: 1 }
        );
    }

    #[test]
    fn test_from_edges_keeps_insertion_order() {
        let graph = Graph::from_edges(3, [(0, 1, 5u8), (1, 2, 0)]).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(
            graph.edges(),
            &[
                Edge {
                    src: 0,
                    dest: 1,
                    weight: 5
                },
                Edge {
                    src: 1,
                    dest: 2,
                    weight: 0
                }
            ]
        );
        assert_eq!(total_weight(graph.edges()), Some(5));
    }

    #[test]
    fn test_total_weight_overflow() {
        let graph = Graph::from_edges(3, [(0, 1, 200u8), (1, 2, 200)]).unwrap();
        assert_eq!(total_weight(graph.edges()), None);
        assert_eq!(total_weight::<u8>(&[]), Some(0));
    }
}
