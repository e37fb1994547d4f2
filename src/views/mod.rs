//! # Views module
//!
//! ## Description
//! This module contains the lazy adaptors that turn a conforming graph into  a  range
//! of [structured records][crate::records]:
//!
//! * [`vertexlist`] - all vertices, as [`VertexData`][crate::VertexData];
//! * [`incidence`] / [`in_incidence`] - the outgoing (incoming) edges of one  vertex,
//! as [`EdgeData`][crate::EdgeData];
//! * [`neighbors`] / [`in_neighbors`] - the  vertices  adjacent  to  one  vertex,  as
//! [`NeighborData`][crate::NeighborData];
//! * [`edgelist`] - all edges of the graph, as [`EdgeData`][crate::EdgeData];
//! * [`vertices_bfs`] / [`edges_bfs`], [`vertices_dfs`] / [`edges_dfs`],
//! [`topological_sort`] - stateful traversal ranges with  progress  accounting  and
//! cancellation.
//!
//! Every view is constructed in O(1) (the search views excepted - they allocate their
//! working state eagerly), holds an immutable borrow of the graph  and  computes  its
//! records on demand. Each comes in  a  plain  form  and  a  `_with`  form  taking  a
//! per-element value function that fills the records' `value` field.
//!
//! ## Details
//! Value functions must be pure: they are invoked exactly once per yielded record  and
//! receive the graph plus the descriptor of the element being yielded.
//!
//! Mutating a graph while any view on it is alive is  impossible  by  construction  -
//! views hold a shared borrow for their whole lifetime.
pub mod bfs;
pub mod dfs;
pub mod edgelist;
pub mod incidence;
pub mod neighbors;
pub mod topological_sort;
pub mod vertexlist;

pub use bfs::{
    edges_bfs, edges_bfs_multi, edges_bfs_with, vertices_bfs, vertices_bfs_multi, vertices_bfs_with,
    EdgesBfs, VerticesBfs,
};
pub use dfs::{edges_dfs, edges_dfs_with, vertices_dfs, vertices_dfs_with, DfsEdgeKind, EdgesDfs, VerticesDfs};
pub use edgelist::{edgelist, edgelist_with, Edgelist};
pub use incidence::{in_incidence, in_incidence_with, incidence, incidence_with, Incidence};
pub use neighbors::{in_neighbors, in_neighbors_with, neighbors, neighbors_with, Neighbors};
pub use topological_sort::{
    topological_sort, topological_sort_safe, topological_sort_safe_with, topological_sort_with,
    TopologicalSort,
};
pub use vertexlist::{vertexlist, vertexlist_with, Vertexlist};





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * CANCELLATION                                                                      *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Cancellation of a running search
///
/// ## Description
/// The search views accept a cancellation request through their `cancel`  method  and
/// act on it at the next step:
///
/// * `ContinueSearch` - no request; iteration proceeds (the initial state).
/// * `CancelBranch` - do not expand the descendants  of  the  element  most  recently
/// yielded; siblings already queued continue. The  request  is  consumed  after  one
/// step.
/// * `CancelAll` - end the iteration immediately; every further step yields nothing.
///
/// ## Details
/// For the [topological sort view][topological_sort] the order is flat, so branches do
/// not exist and `CancelBranch` behaves exactly like `CancelAll`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CancelSearch {
    ContinueSearch,
    CancelBranch,
    CancelAll,
}
