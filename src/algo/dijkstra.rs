use crate::{
    algo::{check_distances_len, check_sources, Predecessors, ScoredHeap, Weight},
    descriptors::EdgeDescriptor,
    errors::{GraphError, GraphErrorKind, GraphResult},
    visitors::{EmptyVisitor, Visitor},
    IndexAdjacencyList, IndexId,
};





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * DIJKSTRA                                                                          *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Dijkstra's shortest paths, fully parameterised
///
/// ## Description
/// Multi-source shortest paths over non-negative edge weights, with  every  knob
/// exposed: a visitor for algorithmic events and custom comparison /  combination  of
/// distances. [`dijkstra_shortest_paths`] and [`dijkstra_shortest_distances`] are the
/// plain entry points.
///
/// ## Arguments
/// * `g` : `&GraphType` - the graph.
/// * `sources` : `&[GraphType::VertexIdType]` - one or more source vertex IDs.
/// * `weight` : `WeightFnType` - pure function `(graph, edge) -> weight`;  must  not
/// return negative weights.
/// * `distances` : `&mut [WeightType]` - output; must hold at  least  `num_vertices`
/// elements. On success, `distances[v]` is the shortest distance from  the  nearest
/// source, or [`Weight::INFINITE`] for unreachable vertices.
/// * `predecessors` : `Predecessors` - optional output  encoding  the  shortest-path
/// tree; see [`Predecessors`].
/// * `visitor` : `&mut VisitorType` - event callbacks; see [`Visitor`].
/// * `compare` : `CompareFnType` - strict "is better" order on distances  (`<`  for
/// shortest paths).
/// * `combine` : `CombineFnType` - accumulation of a distance and a weight (`+`  for
/// shortest paths).
///
/// ## Returns
/// * `GraphResult<()>` - `Ok(())` on success; `Err(GraphError)` with kind
/// [`OutOfRange`][GraphErrorKind::OutOfRange] on an unknown source or an  undersized
/// output (raised before outputs are touched), with kind
/// [`InvalidWeight`][GraphErrorKind::InvalidWeight] on a negative weight,  and  with
/// kind [`Internal`][GraphErrorKind::Internal] if the relaxation invariant breaks.
///
/// ## Details
/// The frontier is a binary heap with lazy deletion: a popped entry whose recorded
/// distance is worse than the stored one is a  stale  duplicate  and  is  discarded.
/// Because of re-relaxation, `on_examine_vertex` and `on_finish_vertex` can fire more
/// than once for the same vertex on graphs with strongly uneven weights.
///
/// ## Complexity
/// Time: O((|V| + |E|) log |V|). Space: O(|V|).
pub fn dijkstra_shortest_paths_with<GraphType, WeightType, WeightFnType, VisitorType, CompareFnType, CombineFnType>(
    g: &GraphType,
    sources: &[GraphType::VertexIdType],
    weight: WeightFnType,
    distances: &mut [WeightType],
    mut predecessors: Predecessors<'_, GraphType::VertexIdType>,
    visitor: &mut VisitorType,
    compare: CompareFnType,
    combine: CombineFnType,
) -> GraphResult<()>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    WeightType: Weight,
    WeightFnType: Fn(&GraphType, &EdgeDescriptor<GraphType::VertexIdType>) -> WeightType,
    VisitorType: Visitor<GraphType>,
    CompareFnType: Fn(&WeightType, &WeightType) -> bool,
    CombineFnType: Fn(&WeightType, &WeightType) -> WeightType,
{
    const FUNCTION_PATH: &str = "algo::dijkstra_shortest_paths";
    let n = g.num_vertices();
    check_distances_len(distances, n, FUNCTION_PATH)?;
    predecessors.check_len(n, FUNCTION_PATH)?;
    check_sources(g, sources, FUNCTION_PATH)?;

    for u in g.vertices() {
        visitor.on_initialize_vertex(g, &u);
        distances[u.id().to_index()] = WeightType::INFINITE;
    }

    let mut heap = ScoredHeap::new(&compare);
    for source in sources {
        let index = source.to_index();
        distances[index] = WeightType::ZERO;
        visitor.on_discover_vertex(g, &g.find_vertex(source).unwrap());
        heap.push(WeightType::ZERO, index);
    }

    while let Some((popped, uindex)) = heap.pop() {
        // Lazy deletion: a better distance was stored after this entry was pushed.
        if compare(&distances[uindex], &popped) {
            continue;
        }
        let u = g.find_vertex(&GraphType::VertexIdType::from_index(uindex)).unwrap();
        visitor.on_examine_vertex(g, &u);
        for e in g.edges(&u) {
            visitor.on_examine_edge(g, &e);
            let w = weight(g, &e);
            if w.is_negative() {
                return Err(GraphError::new(
                    GraphErrorKind::InvalidWeight,
                    FUNCTION_PATH,
                    format!(
                        "Invalid negative edge weight encountered on the edge ({}, {}).",
                        e.source_id(),
                        e.target_id()
                    ),
                ));
            }
            let vindex = e.target_id().to_index();
            let undiscovered = distances[vindex] == WeightType::INFINITE;
            let candidate = combine(&distances[uindex], &w);
            if compare(&candidate, &distances[vindex]) {
                distances[vindex] = candidate;
                predecessors.record(vindex, u.id());
                visitor.on_edge_relaxed(g, &e);
                if undiscovered {
                    visitor.on_discover_vertex(g, &e.target());
                }
                heap.push(candidate, vindex);
            } else if undiscovered {
                return Err(GraphError::new(
                    GraphErrorKind::Internal,
                    FUNCTION_PATH,
                    format!(
                        "The edge ({}, {}) leads to an undiscovered vertex but failed to relax.",
                        e.source_id(),
                        e.target_id()
                    ),
                ));
            } else {
                visitor.on_edge_not_relaxed(g, &e);
            }
        }
        visitor.on_finish_vertex(g, &u);
    }
    Ok(())
}



/// # Dijkstra's shortest paths
///
/// ## Description
/// Multi-source shortest paths over non-negative edge weights, with  the  default  `<`
/// comparison, `+` combination and no visitor. See
/// [`dijkstra_shortest_paths_with`] for the full contract.
pub fn dijkstra_shortest_paths<GraphType, WeightType, WeightFnType>(
    g: &GraphType,
    sources: &[GraphType::VertexIdType],
    weight: WeightFnType,
    distances: &mut [WeightType],
    predecessors: Predecessors<'_, GraphType::VertexIdType>,
) -> GraphResult<()>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    WeightType: Weight,
    WeightFnType: Fn(&GraphType, &EdgeDescriptor<GraphType::VertexIdType>) -> WeightType,
{
    dijkstra_shortest_paths_with(
        g,
        sources,
        weight,
        distances,
        predecessors,
        &mut EmptyVisitor,
        |a, b| a < b,
        |a, b| *a + *b,
    )
}



/// # Dijkstra's shortest distances
///
/// ## Description
/// Like [`dijkstra_shortest_paths`] without predecessor tracking, for  callers  that
/// only need the distances.
pub fn dijkstra_shortest_distances<GraphType, WeightType, WeightFnType>(
    g: &GraphType,
    sources: &[GraphType::VertexIdType],
    weight: WeightFnType,
    distances: &mut [WeightType],
) -> GraphResult<()>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    WeightType: Weight,
    WeightFnType: Fn(&GraphType, &EdgeDescriptor<GraphType::VertexIdType>) -> WeightType,
{
    dijkstra_shortest_paths(g, sources, weight, distances, Predecessors::None)
}





#[cfg(test)]
mod dijkstra_tests {
    use super::*;
    use crate::EdgeValues;

    // CLRS figure 24.6: s, t, x, y, z indexed 0..4.
    fn clrs() -> Vec<Vec<(usize, u32)>> {
        vec![
            vec![(1, 10), (3, 5)],
            vec![(2, 1), (3, 2)],
            vec![(4, 4)],
            vec![(1, 3), (2, 9), (4, 2)],
            vec![(2, 6), (0, 7)],
        ]
    }

    fn weight(g: &Vec<Vec<(usize, u32)>>, e: &EdgeDescriptor<usize>) -> u32 {
        *g.edge_value(e).unwrap()
    }

    #[test]
    fn clrs_figure_24_6() {
        let g = clrs();
        let mut distances = [0u32; 5];
        let mut predecessor = [0usize; 5];
        dijkstra_shortest_paths(&g, &[0], weight, &mut distances, Predecessors::Out(&mut predecessor)).unwrap();
        assert_eq!(distances, [0, 8, 9, 5, 7]);
        // The predecessor chain from any vertex walks back to the source.
        assert_eq!(predecessor[1], 3);
        assert_eq!(predecessor[3], 0);
        assert_eq!(predecessor[4], 3);
        assert_eq!(predecessor[2], 1);
    }

    #[test]
    fn unreachable_vertices_stay_infinite() {
        let g: Vec<Vec<(usize, u32)>> = vec![vec![(1, 1)], vec![], vec![]];
        let mut distances = [0u32; 3];
        dijkstra_shortest_distances(&g, &[0], weight, &mut distances).unwrap();
        assert_eq!(distances, [0, 1, u32::INFINITE]);
    }

    #[test]
    fn multiple_sources_take_the_nearest() {
        let g: Vec<Vec<(usize, u32)>> = vec![vec![(1, 10)], vec![], vec![(1, 1)]];
        let mut distances = [0u32; 3];
        dijkstra_shortest_distances(&g, &[0, 2], weight, &mut distances).unwrap();
        assert_eq!(distances, [0, 1, 0]);
    }

    #[test]
    fn negative_weights_are_rejected() {
        let g: Vec<Vec<(usize, i32)>> = vec![vec![(1, -4)], vec![]];
        let mut distances = [0i32; 2];
        let err = dijkstra_shortest_distances(&g, &[0], |g, e| *g.edge_value(e).unwrap(), &mut distances)
            .unwrap_err();
        assert_eq!(err.kind(), GraphErrorKind::InvalidWeight);
    }

    #[test]
    fn out_of_range_source_is_rejected_before_any_write() {
        let g = clrs();
        let mut distances = [42u32; 5];
        let err = dijkstra_shortest_distances(&g, &[9], weight, &mut distances).unwrap_err();
        assert_eq!(err.kind(), GraphErrorKind::OutOfRange);
        assert_eq!(distances, [42; 5]);
    }

    #[test]
    fn undersized_distances_are_rejected() {
        let g = clrs();
        let mut distances = [0u32; 3];
        let err = dijkstra_shortest_distances(&g, &[0], weight, &mut distances).unwrap_err();
        assert_eq!(err.kind(), GraphErrorKind::OutOfRange);
    }

    #[test]
    fn visitor_sees_relaxations() {
        struct Recorder {
            relaxed: usize,
            not_relaxed: usize,
            discovered: Vec<usize>,
        }
        impl Visitor<Vec<Vec<(usize, u32)>>> for Recorder {
            fn on_discover_vertex(
                &mut self,
                _g: &Vec<Vec<(usize, u32)>>,
                u: &crate::VertexDescriptor<usize>,
            ) {
                self.discovered.push(*u.id());
            }

            fn on_edge_relaxed(&mut self, _g: &Vec<Vec<(usize, u32)>>, _e: &EdgeDescriptor<usize>) {
                self.relaxed += 1;
            }

            fn on_edge_not_relaxed(&mut self, _g: &Vec<Vec<(usize, u32)>>, _e: &EdgeDescriptor<usize>) {
                self.not_relaxed += 1;
            }
        }

        let g = clrs();
        let mut distances = [0u32; 5];
        let mut recorder = Recorder { relaxed: 0, not_relaxed: 0, discovered: Vec::new() };
        dijkstra_shortest_paths_with(
            &g,
            &[0],
            weight,
            &mut distances,
            Predecessors::None,
            &mut recorder,
            |a, b| a < b,
            |a, b| *a + *b,
        )
        .unwrap();
        assert_eq!(recorder.discovered[0], 0);
        assert_eq!(recorder.discovered.len(), 5);
        assert!(recorder.relaxed >= 4);
        assert!(recorder.not_relaxed > 0);
    }

    #[test]
    fn custom_combine_builds_minimax_paths() {
        // Minimise the largest edge weight along the path instead of the sum.
        let g: Vec<Vec<(usize, u32)>> = vec![vec![(1, 3), (2, 10)], vec![(3, 9)], vec![(3, 2)], vec![]];
        let mut bottleneck = [0u32; 4];
        dijkstra_shortest_paths_with(
            &g,
            &[0],
            weight,
            &mut bottleneck,
            Predecessors::None,
            &mut EmptyVisitor,
            |a, b| a < b,
            |a, b| (*a).max(*b),
        )
        .unwrap();
        assert_eq!(bottleneck[3], 9);
    }
}
