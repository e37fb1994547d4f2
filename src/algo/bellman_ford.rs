use crate::{
    algo::{check_distances_len, check_sources, Predecessors, Weight},
    descriptors::EdgeDescriptor,
    errors::GraphResult,
    views::edgelist,
    visitors::{EmptyVisitor, Visitor},
    IndexAdjacencyList, IndexId,
};





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * BELLMAN-FORD                                                                      *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Bellman-Ford shortest paths, fully parameterised
///
/// ## Description
/// Multi-source shortest paths over arbitrary (including negative)  edge  weights,
/// with negative-cycle detection. [`bellman_ford_shortest_paths`] and
/// [`bellman_ford_shortest_distances`] are the plain entry points.
///
/// ## Arguments
/// Same shape as [`dijkstra_shortest_paths_with`][super::dijkstra_shortest_paths_with];
/// the weight function may return negative values.
///
/// ## Returns
/// * `GraphResult<Option<GraphType::VertexIdType>>` - on success, `None` means  every
/// distance is final; `Some(uid)` means a negative cycle is reachable, and `uid`  is
/// the *source* ID of the first edge that still relaxed in  the  detection  pass.
/// Feed it to [`find_negative_cycle`] to list the cycle. Errors follow  the  same
/// precondition policy as Dijkstra.
///
/// ## Details
/// Up to `num_vertices` relaxation rounds run over the whole  [`edgelist`];  a  round
/// that relaxes nothing ends the loop early. If the last round still relaxed,  one
/// extra detection pass looks for a witness edge; finding one,  it  writes
/// `predecessor[target] = source` to close the recorded cycle  and  reports  the
/// witness. `on_edge_minimized` / `on_edge_not_minimized`  fire  only  during  this
/// detection pass.
///
/// ## Complexity
/// Time: O(|V| · |E|). Space: O(1) beyond the outputs.
pub fn bellman_ford_shortest_paths_with<GraphType, WeightType, WeightFnType, VisitorType, CompareFnType, CombineFnType>(
    g: &GraphType,
    sources: &[GraphType::VertexIdType],
    weight: WeightFnType,
    distances: &mut [WeightType],
    mut predecessors: Predecessors<'_, GraphType::VertexIdType>,
    visitor: &mut VisitorType,
    compare: CompareFnType,
    combine: CombineFnType,
) -> GraphResult<Option<GraphType::VertexIdType>>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    WeightType: Weight,
    WeightFnType: Fn(&GraphType, &EdgeDescriptor<GraphType::VertexIdType>) -> WeightType,
    VisitorType: Visitor<GraphType>,
    CompareFnType: Fn(&WeightType, &WeightType) -> bool,
    CombineFnType: Fn(&WeightType, &WeightType) -> WeightType,
{
    const FUNCTION_PATH: &str = "algo::bellman_ford_shortest_paths";
    let n = g.num_vertices();
    check_distances_len(distances, n, FUNCTION_PATH)?;
    predecessors.check_len(n, FUNCTION_PATH)?;
    check_sources(g, sources, FUNCTION_PATH)?;

    for index in 0..n {
        distances[index] = WeightType::INFINITE;
    }
    for source in sources {
        distances[source.to_index()] = WeightType::ZERO;
        visitor.on_discover_vertex(g, &g.find_vertex(source).unwrap());
    }

    let mut relaxed_any = false;
    for _round in 0..n {
        relaxed_any = false;
        for record in edgelist(g) {
            let e = &record.edge;
            visitor.on_examine_edge(g, e);
            let uindex = e.source_id().to_index();
            let vindex = e.target_id().to_index();
            // An undiscovered source cannot improve anything yet.
            if distances[uindex] == WeightType::INFINITE {
                visitor.on_edge_not_relaxed(g, e);
                continue;
            }
            let candidate = combine(&distances[uindex], &weight(g, e));
            if compare(&candidate, &distances[vindex]) {
                distances[vindex] = candidate;
                predecessors.record(vindex, e.source_id());
                relaxed_any = true;
                visitor.on_edge_relaxed(g, e);
            } else {
                visitor.on_edge_not_relaxed(g, e);
            }
        }
        if !relaxed_any {
            break;
        }
    }

    // The main loop converged iff its last round relaxed nothing; one more pass over
    // the edges finds a witness of a reachable negative cycle otherwise.
    if relaxed_any {
        for record in edgelist(g) {
            let e = &record.edge;
            let uindex = e.source_id().to_index();
            let vindex = e.target_id().to_index();
            if distances[uindex] == WeightType::INFINITE {
                visitor.on_edge_minimized(g, e);
                continue;
            }
            let candidate = combine(&distances[uindex], &weight(g, e));
            if compare(&candidate, &distances[vindex]) {
                predecessors.record(vindex, e.source_id());
                visitor.on_edge_not_minimized(g, e);
                return Ok(Some(e.source_id().clone()));
            } else {
                visitor.on_edge_minimized(g, e);
            }
        }
    }
    Ok(None)
}



/// # Bellman-Ford shortest paths
///
/// ## Description
/// Multi-source shortest paths over arbitrary edge weights with the default `<` / `+`
/// distance operations and no visitor. See  [`bellman_ford_shortest_paths_with`]  for
/// the full contract.
pub fn bellman_ford_shortest_paths<GraphType, WeightType, WeightFnType>(
    g: &GraphType,
    sources: &[GraphType::VertexIdType],
    weight: WeightFnType,
    distances: &mut [WeightType],
    predecessors: Predecessors<'_, GraphType::VertexIdType>,
) -> GraphResult<Option<GraphType::VertexIdType>>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    WeightType: Weight,
    WeightFnType: Fn(&GraphType, &EdgeDescriptor<GraphType::VertexIdType>) -> WeightType,
{
    bellman_ford_shortest_paths_with(
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



/// # Bellman-Ford shortest distances
///
/// ## Description
/// Like [`bellman_ford_shortest_paths`] without predecessor tracking. Note that  the
/// negative-cycle *witness* is still returned; only the ability to  reconstruct  the
/// cycle is lost.
pub fn bellman_ford_shortest_distances<GraphType, WeightType, WeightFnType>(
    g: &GraphType,
    sources: &[GraphType::VertexIdType],
    weight: WeightFnType,
    distances: &mut [WeightType],
) -> GraphResult<Option<GraphType::VertexIdType>>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    WeightType: Weight,
    WeightFnType: Fn(&GraphType, &EdgeDescriptor<GraphType::VertexIdType>) -> WeightType,
{
    bellman_ford_shortest_paths(g, sources, weight, distances, Predecessors::None)
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * NEGATIVE CYCLE EXTRACTION                                                         *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # List the vertices of a detected negative cycle
///
/// ## Description
/// Follows the predecessor chain from the witness returned  by  a  Bellman-Ford  run
/// until it comes back around, appending the visited vertex IDs  to  `out_cycle`  in
/// reverse cycle order. With no witness (`None`), `out_cycle` is left untouched.
///
/// ## Arguments
/// * `predecessor` : `&[VertexIdType]` - the predecessor container filled by the  same
/// run that produced `cycle_vertex_id`; handing in anything  else  leaves  the  walk
/// undefined.
/// * `cycle_vertex_id` : `&Option<VertexIdType>` - the  return  value  of  the
/// Bellman-Ford run.
/// * `out_cycle` : `&mut Vec<VertexIdType>` - output collector.
pub fn find_negative_cycle<VertexIdType>(
    predecessor: &[VertexIdType],
    cycle_vertex_id: &Option<VertexIdType>,
    out_cycle: &mut Vec<VertexIdType>,
)
where
    VertexIdType: IndexId,
{
    if let Some(start) = cycle_vertex_id {
        let mut uid = start.clone();
        loop {
            out_cycle.push(uid.clone());
            uid = predecessor[uid.to_index()].clone();
            if uid == *start {
                break;
            }
        }
    }
}
