//! # Algorithms module
//!
//! ## Description
//! This module contains the classical graph algorithms, every one of them  written
//! against the [access protocol][crate::AdjacencyList] alone: any conforming  graph
//! with [index IDs][crate::IndexAdjacencyList] can be handed to any of  them.  All
//! algorithms are pure - they read the graph, write into caller-supplied  output
//! containers and never mutate the graph - and single-threaded.
//!
//! * Shortest paths: [`dijkstra_shortest_paths`], [`bellman_ford_shortest_paths`] and
//! their `_distances` siblings.
//! * Traversal with [visitors][crate::Visitor]: [`breadth_first_search`],
//! [`depth_first_search`].
//! * DAGs: [`topological_sort`] (single-source, multi-source, whole-graph).
//! * Connectivity: [`connected_components`], [`strongly_connected_components`],
//! [`articulation_points`], [`biconnected_components`].
//! * Spanning trees: [`kruskal`], [`inplace_kruskal`], [`prim`].
//! * Local structure: [`triangle_count`], [`jaccard_coefficient`],
//! [`maximal_independent_set`], [`label_propagation`].
//!
//! ## Details
//! Failure policy: precondition violations (out-of-range sources, undersized  output
//! containers) surface as [`GraphError`][crate::GraphError]s *before* any  output  is
//! touched. On any error the graph is unchanged  and  partially-written  outputs
//! must be discarded.
pub mod articulation;
pub mod bellman_ford;
pub mod connected_components;
pub mod dijkstra;
pub mod jaccard;
pub mod label_propagation;
pub mod mis;
pub mod mst;
pub mod search;
pub mod topological_sort;
pub mod triangle_count;

pub use articulation::{articulation_points, biconnected_components};
pub use bellman_ford::{
    bellman_ford_shortest_distances, bellman_ford_shortest_paths, bellman_ford_shortest_paths_with,
    find_negative_cycle,
};
pub use connected_components::{
    connected_components, strongly_connected_components, strongly_connected_components_bidirectional,
};
pub use dijkstra::{
    dijkstra_shortest_distances, dijkstra_shortest_paths, dijkstra_shortest_paths_with,
};
pub use jaccard::jaccard_coefficient;
pub use label_propagation::{label_propagation, label_propagation_with_empty};
pub use mis::maximal_independent_set;
pub use mst::{inplace_kruskal, kruskal, kruskal_with, prim, prim_with};
pub use search::{breadth_first_search, breadth_first_search_multi, depth_first_search};
pub use topological_sort::{topological_sort, topological_sort_from, topological_sort_multi};
pub use triangle_count::triangle_count;

use std::ops::Add;
use crate::{
    errors::{GraphError, GraphErrorKind, GraphResult},
    AdjacencyList, Id,
};





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * WEIGHTS                                                                           *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Weight trait
///
/// ## Description
/// Types usable as edge weights and accumulated distances by the shortest-path  and
/// spanning-tree algorithms. Implemented for all standard integer  and  floating
/// point types.
///
/// ## Details
/// `INFINITE` is the numeric maximum of the type; it marks unreachable  vertices  in
/// distance outputs. `is_negative` is what lets Dijkstra reject  negative  weights
/// for signed types while compiling to a constant `false` for unsigned ones.
pub trait Weight
where
    Self: Copy + PartialOrd + Add<Output = Self>,
{
    const ZERO: Self;
    const INFINITE: Self;

    fn is_negative(&self) -> bool;
}

macro_rules! implement_weight_trait_for_unsigned {
    ($t: ty) => {
        impl Weight for $t {
            const ZERO: Self = 0;
            const INFINITE: Self = <$t>::MAX;

            #[inline]
            fn is_negative(&self) -> bool {
                false
            }
        }
    };
}

macro_rules! implement_weight_trait_for_signed {
    ($t: ty) => {
        impl Weight for $t {
            const ZERO: Self = 0;
            const INFINITE: Self = <$t>::MAX;

            #[inline]
            fn is_negative(&self) -> bool {
                *self < 0
            }
        }
    };
}

implement_weight_trait_for_unsigned!(u8);
implement_weight_trait_for_unsigned!(u16);
implement_weight_trait_for_unsigned!(u32);
implement_weight_trait_for_unsigned!(u64);
implement_weight_trait_for_unsigned!(u128);
implement_weight_trait_for_unsigned!(usize);
implement_weight_trait_for_signed!(i8);
implement_weight_trait_for_signed!(i16);
implement_weight_trait_for_signed!(i32);
implement_weight_trait_for_signed!(i64);
implement_weight_trait_for_signed!(i128);
implement_weight_trait_for_signed!(isize);

// f32::Weight
impl Weight for f32 {
    const ZERO: Self = 0.0;
    const INFINITE: Self = f32::MAX;

    #[inline]
    fn is_negative(&self) -> bool {
        *self < 0.0
    }
}

// f64::Weight
impl Weight for f64 {
    const ZERO: Self = 0.0;
    const INFINITE: Self = f64::MAX;

    #[inline]
    fn is_negative(&self) -> bool {
        *self < 0.0
    }
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * PREDECESSOR TRACKING                                                              *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Optional predecessor output
///
/// ## Description
/// Shortest-path algorithms can reconstruct paths only if the caller asks for it,  by
/// passing `Predecessors::Out(&mut slice)`; passing `Predecessors::None`  skips  the
/// bookkeeping entirely. The slice must hold at least
/// [`num_vertices`][AdjacencyList::num_vertices] elements and is  indexed  by  vertex
/// position; entries of unreached vertices are left untouched.
pub enum Predecessors<'a, VertexIdType>
where
    VertexIdType: Id,
{
    None,
    Out(&'a mut [VertexIdType]),
}

// Implementation of Predecessors
impl<'a, VertexIdType> Predecessors<'a, VertexIdType>
where
    VertexIdType: Id,
{
    #[inline]
    pub(crate) fn record(&mut self, target_index: usize, uid: &VertexIdType) {
        if let Predecessors::Out(slice) = self {
            slice[target_index] = uid.clone();
        }
    }

    pub(crate) fn check_len(&self, n: usize, function_path: &str) -> GraphResult<()> {
        match self {
            Predecessors::None => Ok(()),
            Predecessors::Out(slice) => {
                if slice.len() < n {
                    Err(GraphError::new(
                        GraphErrorKind::OutOfRange,
                        function_path,
                        format!(
                            "Size of the predecessor container of {} is less than the number of vertices {}.",
                            slice.len(),
                            n
                        ),
                    ))
                } else {
                    Ok(())
                }
            },
        }
    }
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * SHARED PRECONDITION CHECKS                                                        *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



// Distances must cover every vertex.
pub(crate) fn check_distances_len<WeightType>(
    distances: &[WeightType],
    n: usize,
    function_path: &str,
) -> GraphResult<()> {
    if distances.len() < n {
        Err(GraphError::new(
            GraphErrorKind::OutOfRange,
            function_path,
            format!(
                "Size of the distance container of {} is less than the number of vertices {}.",
                distances.len(),
                n
            ),
        ))
    } else {
        Ok(())
    }
}

// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * SCORED HEAP                                                                       *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



// Binary min-heap of (score, vertex index) entries ordered by a caller-supplied
// "is less" predicate, which is how the relaxation loops honor custom comparators
// (std::collections::BinaryHeap demands a total Ord). Used by Dijkstra and Prim.
pub(crate) struct ScoredHeap<'c, WeightType, CompareFnType>
where
    WeightType: Copy,
    CompareFnType: Fn(&WeightType, &WeightType) -> bool,
{
    entries: Vec<(WeightType, usize)>,
    compare: &'c CompareFnType,
}

// Implementation of ScoredHeap
impl<'c, WeightType, CompareFnType> ScoredHeap<'c, WeightType, CompareFnType>
where
    WeightType: Copy,
    CompareFnType: Fn(&WeightType, &WeightType) -> bool,
{
    pub(crate) fn new(compare: &'c CompareFnType) -> Self {
        ScoredHeap { entries: Vec::new(), compare }
    }

    pub(crate) fn push(&mut self, score: WeightType, index: usize) {
        self.entries.push((score, index));
        self.sift_up(self.entries.len() - 1);
    }

    pub(crate) fn pop(&mut self) -> Option<(WeightType, usize)> {
        if self.entries.is_empty() {
            return None;
        }
        let top = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some(top)
    }

    fn sift_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = (child - 1) / 2;
            if (self.compare)(&self.entries[child].0, &self.entries[parent].0) {
                self.entries.swap(child, parent);
                child = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut parent: usize) {
        loop {
            let mut smallest = parent;
            for child in [2 * parent + 1, 2 * parent + 2] {
                if child < self.entries.len()
                    && (self.compare)(&self.entries[child].0, &self.entries[smallest].0)
                {
                    smallest = child;
                }
            }
            if smallest == parent {
                break;
            }
            self.entries.swap(parent, smallest);
            parent = smallest;
        }
    }
}





// Every source must name an existing vertex.
pub(crate) fn check_sources<GraphType>(
    g: &GraphType,
    sources: &[GraphType::VertexIdType],
    function_path: &str,
) -> GraphResult<()>
where
    GraphType: AdjacencyList,
{
    for source in sources {
        if g.find_vertex(source).is_none() {
            return Err(GraphError::new(
                GraphErrorKind::OutOfRange,
                function_path,
                format!("Source vertex with ID {} doesn't exist.", source),
            ));
        }
    }
    Ok(())
}
