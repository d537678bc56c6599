use num_traits::PrimInt;
use std::{
    fmt::{Debug, Display},
    io::{self, Write},
};
use tracing::{debug, info, warn};

use super::{total_weight, union_find::UnionFind, Edge, Graph};

impl<W: PrimInt + Debug> Graph<W> {
    /// Compute the MST with [Kruskal's algorithm](https://en.wikipedia.org/wiki/Kruskal%27s_algorithm) in O(E log(E)) time.
    ///
    /// Edges are sorted in place by weight. The sort is stable, so equal weights keep their insertion order,
    /// but any order among equal weights yields a tree of the same total weight.
    ///
    /// Accepted edges are returned in acceptance order. A disconnected graph yields a spanning forest
    /// with fewer than `V - 1` edges.
    pub fn kruskal_mst(&mut self) -> Vec<Edge<W>> {
        let target = self.vertices.saturating_sub(1);
        self.edges.sort_by_key(|edge| edge.weight);

        let mut subsets = UnionFind::new(self.vertices);
        let mut mst = Vec::with_capacity(target);
        for edge in &self.edges {
            if mst.len() == target {
                // Early stopping condition, MST already has all the edges
                break;
            }
            let x = subsets.find(edge.src);
            let y = subsets.find(edge.dest);
            if x == y {
                debug!(?edge, "Discarding edge that closes a cycle");
                continue;
            }
            debug!(?edge, "Accepting edge");
            mst.push(*edge);
            subsets.union(x, y);
        }

        if mst.len() < target {
            warn!(
                "Graph is disconnected, found a spanning forest with {} of {} edges",
                mst.len(),
                target
            );
        }
        match total_weight(&mst) {
            Some(weight) => info!(
                "MST has {} edges with total weight {:?}",
                mst.len(),
                weight
            ),
            None => info!("MST has {} edges, total weight overflows", mst.len()),
        }
        mst
    }
}

/// Print a header followed by one `src -- dest == weight` line per edge.
pub fn write_mst<W: Display>(out: &mut impl Write, mst: &[Edge<W>]) -> io::Result<()> {
    writeln!(out, "Following are the edges in the constructed MST:")?;
    for edge in mst {
        writeln!(out, "{}", edge)?;
    }
    Ok(())
}
