//! # Visitors module
//!
//! ## Description
//! This module contains the [`Visitor`] trait: a vocabulary of optional callbacks that
//! the [algorithms][crate::algo] invoke at well-defined events. Every method  has  an
//! empty default body, so a visitor implements exactly the hooks it cares about  and
//! the rest compile to nothing. [`EmptyVisitor`] implements none of them and  is  the
//! visitor the plain algorithm entry points use.
use crate::{
    descriptors::{EdgeDescriptor, VertexDescriptor},
    AdjacencyList,
};





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * VISITOR PROTOCOL                                                                  *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Algorithm event callbacks
///
/// ## Description
/// A visitor is any value implementing this trait. Algorithms call  the  hooks  below
/// at the events their documentation names; hooks that are not overridden are  no-ops.
/// Which hooks fire depends on the algorithm:
///
/// * breadth-first search: `on_initialize_vertex`, `on_discover_vertex`,
/// `on_examine_vertex`, `on_examine_edge`, `on_tree_edge`, `on_finish_vertex`;
/// * depth-first search: the above plus `on_start_vertex`, `on_back_edge`,
/// `on_forward_or_cross_edge`, `on_finish_edge`;
/// * Dijkstra: `on_initialize_vertex`, `on_discover_vertex`,  `on_examine_vertex`,
/// `on_examine_edge`, `on_edge_relaxed`, `on_edge_not_relaxed`, `on_finish_vertex`;
/// * Bellman-Ford: `on_discover_vertex`, `on_examine_edge`, `on_edge_relaxed`,
/// `on_edge_not_relaxed`, and - in the negative-cycle detection pass -
/// `on_edge_minimized` / `on_edge_not_minimized`.
///
/// ## Details
/// Hooks receive the graph and a descriptor; vertex IDs are recovered  from  the
/// descriptor in O(1), so there are no separate ID-taking variants.
///
/// A visitor that needs to stop an algorithm early does so by keeping state and
/// ignoring further events, or - where truly necessary - by panicking and catching
/// the unwind at the call site; the search [views][crate::views] are  the  supported
/// way to get cancellable traversal.
#[allow(unused_variables)]
pub trait Visitor<GraphType>
where
    GraphType: AdjacencyList,
{
    // Vertex events.

    /// Fired once per vertex when an algorithm prepares its working arrays.
    fn on_initialize_vertex(&mut self, g: &GraphType, u: &VertexDescriptor<GraphType::VertexIdType>) {}

    /// Fired on each root a depth-first search is started from.
    fn on_start_vertex(&mut self, g: &GraphType, u: &VertexDescriptor<GraphType::VertexIdType>) {}

    /// Fired when a vertex is seen for the first time.
    fn on_discover_vertex(&mut self, g: &GraphType, u: &VertexDescriptor<GraphType::VertexIdType>) {}

    /// Fired when a vertex is taken out of the frontier to have its edges scanned.
    fn on_examine_vertex(&mut self, g: &GraphType, u: &VertexDescriptor<GraphType::VertexIdType>) {}

    /// Fired when a vertex will never be examined again.
    ///
    /// Dijkstra may examine a vertex more than once when a shorter  path  to  it  is
    /// found later; in that case this hook also fires more than once.
    fn on_finish_vertex(&mut self, g: &GraphType, u: &VertexDescriptor<GraphType::VertexIdType>) {}

    // Edge events.

    /// Fired on every scanned edge before anything is decided about it.
    fn on_examine_edge(&mut self, g: &GraphType, e: &EdgeDescriptor<GraphType::VertexIdType>) {}

    /// Fired when an edge leads to a newly discovered vertex.
    fn on_tree_edge(&mut self, g: &GraphType, e: &EdgeDescriptor<GraphType::VertexIdType>) {}

    /// Fired when an edge closes a cycle onto an ancestor still being processed.
    fn on_back_edge(&mut self, g: &GraphType, e: &EdgeDescriptor<GraphType::VertexIdType>) {}

    /// Fired when an edge reaches a vertex that is already fully processed.
    fn on_forward_or_cross_edge(&mut self, g: &GraphType, e: &EdgeDescriptor<GraphType::VertexIdType>) {}

    /// Fired when a depth-first search is done with an edge.
    fn on_finish_edge(&mut self, g: &GraphType, e: &EdgeDescriptor<GraphType::VertexIdType>) {}

    /// Fired when a relaxation step lowered the target's tentative distance.
    fn on_edge_relaxed(&mut self, g: &GraphType, e: &EdgeDescriptor<GraphType::VertexIdType>) {}

    /// Fired when a relaxation step left the target's tentative distance unchanged.
    fn on_edge_not_relaxed(&mut self, g: &GraphType, e: &EdgeDescriptor<GraphType::VertexIdType>) {}

    /// Fired in Bellman-Ford's detection pass on an edge confirmed minimal.
    fn on_edge_minimized(&mut self, g: &GraphType, e: &EdgeDescriptor<GraphType::VertexIdType>) {}

    /// Fired in Bellman-Ford's detection pass on an edge that still relaxes, i.e. on
    /// evidence of a reachable negative cycle.
    fn on_edge_not_minimized(&mut self, g: &GraphType, e: &EdgeDescriptor<GraphType::VertexIdType>) {}
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * EMPTY VISITOR                                                                     *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # The do-nothing visitor
///
/// ## Description
/// Implements [`Visitor`] with every hook left at its no-op default. Algorithms  whose
/// caller supplies no visitor use a value of this type, which optimises every hook
/// site away.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyVisitor;

// EmptyVisitor::Visitor
impl<GraphType> Visitor<GraphType> for EmptyVisitor where GraphType: AdjacencyList {}
