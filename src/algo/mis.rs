use fixedbitset::FixedBitSet;
use crate::{
    algo::check_sources,
    errors::GraphResult,
    IndexAdjacencyList, IndexId,
};





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * MAXIMAL INDEPENDENT SET                                                           *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Maximal independent set
///
/// ## Description
/// Greedily grow an independent set of an undirected graph (stored as  symmetric
/// half-edge pairs), starting from `seed`: take the seed,  discard  its  neighbors,
/// then sweep the remaining vertices in store order taking  every  vertex  none  of
/// whose neighbors was taken. The result is maximal (no  further  vertex  can  be
/// added), not maximum.
///
/// ## Arguments
/// * `g` : `&GraphType` - the graph.
/// * `seed` : `&GraphType::VertexIdType` - the first vertex offered membership.
/// * `out` : `&mut Vec<GraphType::VertexIdType>` - output; receives the members.
///
/// ## Returns
/// * `GraphResult<usize>` - the number of members appended, or `Err(GraphError)` with
/// kind [`OutOfRange`][crate::GraphErrorKind::OutOfRange] for an unknown seed.
///
/// ## Details
/// A seed carrying a self-loop is adjacent to itself and can belong to no independent
/// set: it is skipped (and blocks nothing), and the sweep proceeds as usual.
///
/// ## Complexity
/// Time: O(|V| + |E|). Space: O(|V|).
pub fn maximal_independent_set<GraphType>(
    g: &GraphType,
    seed: &GraphType::VertexIdType,
    out: &mut Vec<GraphType::VertexIdType>,
) -> GraphResult<usize>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
{
    const FUNCTION_PATH: &str = "algo::maximal_independent_set";
    check_sources(g, std::slice::from_ref(seed), FUNCTION_PATH)?;

    let n = g.num_vertices();
    let mut removed = FixedBitSet::with_capacity(n);
    let mut count = 0usize;

    let seed_vertex = g.find_vertex(seed).unwrap();
    removed.insert(seed.to_index());
    let seed_has_self_loop = g.edges(&seed_vertex).any(|e| e.target_id() == seed);
    if !seed_has_self_loop {
        out.push(seed.clone());
        count += 1;
        for e in g.edges(&seed_vertex) {
            removed.insert(e.target_id().to_index());
        }
    }

    for u in g.vertices() {
        let index = u.id().to_index();
        if !removed.contains(index) {
            out.push(u.id().clone());
            count += 1;
            removed.insert(index);
            for e in g.edges(&u) {
                removed.insert(e.target_id().to_index());
            }
        }
    }
    Ok(count)
}





#[cfg(test)]
mod mis_tests {
    use super::*;

    fn undirected(n: usize, edges: &[(usize, usize)]) -> Vec<Vec<usize>> {
        let mut g = vec![Vec::new(); n];
        for &(u, v) in edges {
            g[u].push(v);
            g[v].push(u);
        }
        g
    }

    fn is_independent(g: &Vec<Vec<usize>>, members: &[usize]) -> bool {
        members.iter().all(|&u| members.iter().all(|&v| u == v || !g[u].contains(&v)))
    }

    fn is_maximal(g: &Vec<Vec<usize>>, members: &[usize]) -> bool {
        (0..g.len()).all(|candidate| {
            members.contains(&candidate) || g[candidate].iter().any(|t| members.contains(t))
        })
    }

    #[test]
    fn path_graph_from_an_end() {
        let g = undirected(4, &[(0, 1), (1, 2), (2, 3)]);
        let mut members = Vec::new();
        let count = maximal_independent_set(&g, &0, &mut members).unwrap();
        assert_eq!(count, members.len());
        assert!(is_independent(&g, &members));
        assert!(is_maximal(&g, &members));
        assert!(members.contains(&0));
    }

    #[test]
    fn star_center_seed_takes_only_the_center() {
        let g = undirected(4, &[(0, 1), (0, 2), (0, 3)]);
        let mut members = Vec::new();
        maximal_independent_set(&g, &0, &mut members).unwrap();
        assert_eq!(members, vec![0]);
    }

    #[test]
    fn looped_seed_is_excluded_but_blocks_nothing() {
        let mut g = undirected(3, &[(0, 1), (1, 2)]);
        g[0].push(0);
        let mut members = Vec::new();
        maximal_independent_set(&g, &0, &mut members).unwrap();
        assert!(!members.contains(&0));
        assert!(is_independent(&g, &members));
        assert!(members.contains(&1) || members.contains(&2));
    }

    #[test]
    fn unknown_seed_is_rejected() {
        let g = undirected(2, &[(0, 1)]);
        let mut members = Vec::new();
        assert!(maximal_independent_set(&g, &5, &mut members).is_err());
    }
}
