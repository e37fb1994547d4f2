use itertools::{EitherOrBoth, Itertools};
use crate::{IndexAdjacencyList, IndexId};





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * JACCARD COEFFICIENTS                                                              *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Jaccard coefficients of adjacent vertex pairs
///
/// ## Description
/// For every edge `(u, v)` of the graph, compute the Jaccard similarity of  the  two
/// endpoints' neighborhoods, `|intersection(N(u), N(v))| / |union(N(u), N(v))|`, and hand  it  to  the
/// output callback as `(uid, vid, coefficient)`. Pairs whose union is empty  (only
/// possible when both adjacencies consist of nothing but  the  edge's  own  mirror
/// loops) are reported as `0.0`.
///
/// ## Arguments
/// * `g` : `&GraphType` - the graph.
/// * `out` : `FnMut(&GraphType::VertexIdType, &GraphType::VertexIdType, f64)` -  the
/// consumer, called once per stored half-edge (an undirected graph  stored  as
/// symmetric pairs reports each pair twice, once per direction).
///
/// ## Details
/// Neighborhoods are materialised once, sorted and deduplicated, so  the  per-edge
/// intersection is a linear merge; the container's own adjacency order  is  irrelevant.
///
/// ## Complexity
/// Time: O(|E| · d) where d bounds the degree. Space: O(|V| + |E|).
pub fn jaccard_coefficient<GraphType, OutFnType>(g: &GraphType, mut out: OutFnType)
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    OutFnType: FnMut(&GraphType::VertexIdType, &GraphType::VertexIdType, f64),
{
    let n = g.num_vertices();
    let mut neighborhoods: Vec<Vec<usize>> = Vec::with_capacity(n);
    for u in g.vertices() {
        let mut targets: Vec<usize> = g.edges(&u).map(|e| e.target_id().to_index()).collect();
        targets.sort_unstable();
        targets.dedup();
        neighborhoods.push(targets);
    }

    for u in g.vertices() {
        let uindex = u.id().to_index();
        for e in g.edges(&u) {
            let vindex = e.target_id().to_index();
            let intersection = neighborhoods[uindex]
                .iter()
                .merge_join_by(neighborhoods[vindex].iter(), Ord::cmp)
                .filter(|pair| matches!(pair, EitherOrBoth::Both(_, _)))
                .count();
            let union = neighborhoods[uindex].len() + neighborhoods[vindex].len() - intersection;
            let coefficient = if union == 0 { 0.0 } else { intersection as f64 / union as f64 };
            out(e.source_id(), e.target_id(), coefficient);
        }
    }
}
