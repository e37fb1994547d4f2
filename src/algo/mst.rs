use std::cmp::Ordering;
use fixedbitset::FixedBitSet;
use crate::{
    algo::{check_distances_len, check_sources, Predecessors, ScoredHeap, Weight},
    descriptors::EdgeDescriptor,
    errors::GraphResult,
    records::EdgeData,
    IndexAdjacencyList, IndexId,
};





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * DISJOINT SETS                                                                     *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



// Union-find with path compression and union by rank.
struct DisjointSets {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

// Implementation of DisjointSets
impl DisjointSets {
    fn new(n: usize) -> Self {
        DisjointSets { parent: (0..n).collect(), rank: vec![0; n] }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    // Returns false when both elements already share a set.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            Ordering::Less => self.parent[ra] = rb,
            Ordering::Greater => self.parent[rb] = ra,
            Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            },
        }
        true
    }
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * KRUSKAL                                                                           *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



fn kruskal_scan<VertexIdType, WeightType, CompareFnType>(
    edges: &[EdgeData<VertexIdType, WeightType>],
    tree: &mut Vec<EdgeData<VertexIdType, WeightType>>,
    compare: CompareFnType,
) -> (WeightType, usize)
where
    VertexIdType: IndexId,
    WeightType: Weight,
    CompareFnType: Fn(&WeightType, &WeightType) -> bool,
{
    let n = edges
        .iter()
        .map(|e| e.source_id.to_index().max(e.target_id.to_index()) + 1)
        .max()
        .unwrap_or(0);
    let mut sets = DisjointSets::new(n);
    let mut order: Vec<usize> = (0..edges.len()).collect();
    order.sort_by(|&a, &b| {
        if compare(&edges[a].value, &edges[b].value) {
            Ordering::Less
        } else if compare(&edges[b].value, &edges[a].value) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });

    let mut total = WeightType::ZERO;
    let mut components = n;
    for position in order {
        let e = &edges[position];
        if sets.union(e.source_id.to_index(), e.target_id.to_index()) {
            total = total + e.value;
            components -= 1;
            tree.push(e.clone());
        }
    }
    (total, components)
}



/// # Kruskal's minimum spanning tree with a custom order
///
/// ## Description
/// Like [`kruskal`], consuming edges in  the  order  induced  by  `compare`  instead
/// of ascending weight; passing a reversed comparison yields  a  *maximum*  spanning
/// tree.
pub fn kruskal_with<VertexIdType, WeightType, CompareFnType>(
    edges: &[EdgeData<VertexIdType, WeightType>],
    tree: &mut Vec<EdgeData<VertexIdType, WeightType>>,
    compare: CompareFnType,
) -> (WeightType, usize)
where
    VertexIdType: IndexId,
    WeightType: Weight,
    CompareFnType: Fn(&WeightType, &WeightType) -> bool,
{
    kruskal_scan(edges, tree, compare)
}



/// # Kruskal's minimum spanning tree
///
/// ## Description
/// Scan the given edges in ascending weight order, accepting every  edge  that  joins
/// two distinct components (union-find with path compression and union by rank);  the
/// accepted edges are appended to `tree`. The edge list is  typically  built  with
/// [`edgelist_with`][crate::views::edgelist_with], the value being the  edge  weight.
/// The input is left untouched; see [`inplace_kruskal`] for the destructive  variant.
///
/// ## Arguments
/// * `edges` : `&[EdgeData<VertexIdType, WeightType>]` - the edges  to  scan.  For  an
/// undirected graph stored as symmetric half-edge pairs, the mirror of  an  accepted
/// edge is rejected by the union-find, so passing both halves is harmless.
/// * `tree` : `&mut Vec<EdgeData<VertexIdType, WeightType>>` - output; receives  the
/// spanning forest's edges.
///
/// ## Returns
/// * `(WeightType, usize)` - the total weight of the forest and the  number  of
/// components remaining (1 for a connected graph). Vertex count is taken to  be  one
/// past the highest endpoint index among `edges`.
///
/// ## Complexity
/// Time: O(|E| log |E|). Space: O(|V| + |E|).
pub fn kruskal<VertexIdType, WeightType>(
    edges: &[EdgeData<VertexIdType, WeightType>],
    tree: &mut Vec<EdgeData<VertexIdType, WeightType>>,
) -> (WeightType, usize)
where
    VertexIdType: IndexId,
    WeightType: Weight,
{
    kruskal_scan(edges, tree, |a, b| a < b)
}



/// # Kruskal's minimum spanning tree, in place
///
/// ## Description
/// Like [`kruskal`], but sorting the caller's edge list itself  instead  of  an  index
/// permutation - cheaper for very large edge lists, at the price of  reordering  the
/// input.
pub fn inplace_kruskal<VertexIdType, WeightType>(
    edges: &mut [EdgeData<VertexIdType, WeightType>],
    tree: &mut Vec<EdgeData<VertexIdType, WeightType>>,
) -> (WeightType, usize)
where
    VertexIdType: IndexId,
    WeightType: Weight,
{
    let n = edges
        .iter()
        .map(|e| e.source_id.to_index().max(e.target_id.to_index()) + 1)
        .max()
        .unwrap_or(0);
    edges.sort_by(|a, b| a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal));
    let mut sets = DisjointSets::new(n);
    let mut total = WeightType::ZERO;
    let mut components = n;
    for e in edges.iter() {
        if sets.union(e.source_id.to_index(), e.target_id.to_index()) {
            total = total + e.value;
            components -= 1;
            tree.push(e.clone());
        }
    }
    (total, components)
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * PRIM                                                                              *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Prim's minimum spanning tree with a custom order
///
/// ## Description
/// Like [`prim`] with the comparison of candidate edge weights  exposed;  passing  a
/// reversed comparison grows a *maximum* spanning tree. `initial` is  the  candidate
/// weight every non-seed vertex starts with - the worst  value  under  `compare`
/// ([`Weight::INFINITE`] for minimum trees, [`Weight::ZERO`] for maximum ones).
pub fn prim_with<GraphType, WeightType, WeightFnType, CompareFnType>(
    g: &GraphType,
    seed: &GraphType::VertexIdType,
    weight: WeightFnType,
    mut predecessors: Predecessors<'_, GraphType::VertexIdType>,
    weights_out: &mut [WeightType],
    compare: CompareFnType,
    initial: WeightType,
) -> GraphResult<()>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    WeightType: Weight,
    WeightFnType: Fn(&GraphType, &EdgeDescriptor<GraphType::VertexIdType>) -> WeightType,
    CompareFnType: Fn(&WeightType, &WeightType) -> bool,
{
    const FUNCTION_PATH: &str = "algo::prim";
    let n = g.num_vertices();
    check_distances_len(weights_out, n, FUNCTION_PATH)?;
    predecessors.check_len(n, FUNCTION_PATH)?;
    check_sources(g, std::slice::from_ref(seed), FUNCTION_PATH)?;

    for index in 0..n {
        weights_out[index] = initial;
    }
    weights_out[seed.to_index()] = WeightType::ZERO;

    let mut in_tree = FixedBitSet::with_capacity(n);
    let mut heap = ScoredHeap::new(&compare);
    heap.push(WeightType::ZERO, seed.to_index());
    while let Some((_, uindex)) = heap.pop() {
        if in_tree.contains(uindex) {
            continue;
        }
        in_tree.insert(uindex);
        let u = g.find_vertex(&GraphType::VertexIdType::from_index(uindex)).unwrap();
        for e in g.edges(&u) {
            let vindex = e.target_id().to_index();
            let w = weight(g, &e);
            if !in_tree.contains(vindex) && compare(&w, &weights_out[vindex]) {
                weights_out[vindex] = w;
                predecessors.record(vindex, u.id());
                heap.push(w, vindex);
            }
        }
    }
    Ok(())
}



/// # Prim's minimum spanning tree
///
/// ## Description
/// Grow a spanning tree of the component containing `seed`, binary-heap-driven:  pop
/// the cheapest frontier vertex, relax its incident edges. The  tree  is  encoded  in
/// the caller's predecessor and weight containers: after the call,  for  every  tree
/// vertex `v` other than the seed, `(predecessor[v], v)` is a tree  edge  of  weight
/// `weights_out[v]`. Vertices outside the seed's component keep
/// [`Weight::INFINITE`].
///
/// ## Returns
/// * `GraphResult<()>` - `Err(GraphError)` with kind
/// [`OutOfRange`][crate::GraphErrorKind::OutOfRange] on an unknown  seed  or  an
/// undersized output.
///
/// ## Complexity
/// Time: O((|V| + |E|) log |V|). Space: O(|V|).
pub fn prim<GraphType, WeightType, WeightFnType>(
    g: &GraphType,
    seed: &GraphType::VertexIdType,
    weight: WeightFnType,
    predecessors: Predecessors<'_, GraphType::VertexIdType>,
    weights_out: &mut [WeightType],
) -> GraphResult<()>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    WeightType: Weight,
    WeightFnType: Fn(&GraphType, &EdgeDescriptor<GraphType::VertexIdType>) -> WeightType,
{
    prim_with(g, seed, weight, predecessors, weights_out, |a, b| a < b, WeightType::INFINITE)
}





#[cfg(test)]
mod mst_tests {
    use super::*;
    use crate::{views::edgelist_with, AdjacencyList, EdgeValues};

    fn undirected_weighted(n: usize, edges: &[(usize, usize, u64)]) -> Vec<Vec<(usize, u64)>> {
        let mut g = vec![Vec::new(); n];
        for &(u, v, w) in edges {
            g[u].push((v, w));
            g[v].push((u, w));
        }
        g
    }

    // Four-vertex cycle with a chord.
    fn chorded_cycle() -> Vec<Vec<(usize, u64)>> {
        undirected_weighted(4, &[(0, 1, 4), (1, 2, 8), (2, 3, 7), (3, 0, 9), (0, 2, 2), (1, 3, 5)])
    }

    fn weighted_edges(g: &Vec<Vec<(usize, u64)>>) -> Vec<EdgeData<usize, u64>> {
        edgelist_with(g, |g, e| *g.edge_value(e).unwrap()).collect()
    }

    #[test]
    fn kruskal_picks_the_cheapest_spanning_edges() {
        let g = chorded_cycle();
        let edges = weighted_edges(&g);
        let mut tree = Vec::new();
        let (total, components) = kruskal(&edges, &mut tree);
        assert_eq!(total, 11);
        assert_eq!(components, 1);
        assert_eq!(tree.len(), 3);
        let mut picked: Vec<(usize, usize)> = tree
            .iter()
            .map(|e| (e.source_id.min(e.target_id), e.source_id.max(e.target_id)))
            .collect();
        picked.sort_unstable();
        assert_eq!(picked, vec![(0, 1), (0, 2), (1, 3)]);
    }

    #[test]
    fn kruskal_counts_components_of_forests() {
        let g = undirected_weighted(4, &[(0, 1, 1), (2, 3, 1)]);
        let edges = weighted_edges(&g);
        let mut tree = Vec::new();
        let (total, components) = kruskal(&edges, &mut tree);
        assert_eq!(total, 2);
        assert_eq!(components, 2);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn inplace_variant_agrees_with_the_copying_one() {
        let g = chorded_cycle();
        let mut edges = weighted_edges(&g);
        let mut copying_tree = Vec::new();
        let copying = kruskal(&edges, &mut copying_tree);
        let mut inplace_tree = Vec::new();
        let inplace = inplace_kruskal(&mut edges, &mut inplace_tree);
        assert_eq!(copying, inplace);
        assert_eq!(copying_tree.len(), inplace_tree.len());
    }

    #[test]
    fn maximum_spanning_tree_via_reversed_compare() {
        let g = chorded_cycle();
        let edges = weighted_edges(&g);
        let mut tree = Vec::new();
        let (total, components) = kruskal_with(&edges, &mut tree, |a, b| a > b);
        assert_eq!(components, 1);
        assert_eq!(total, 9 + 8 + 7);
    }

    #[test]
    fn prim_matches_kruskal_total() {
        let g = chorded_cycle();
        let weight = |g: &Vec<Vec<(usize, u64)>>, e: &EdgeDescriptor<usize>| *g.edge_value(e).unwrap();
        let mut predecessor = [0usize; 4];
        let mut weights = [0u64; 4];
        prim(&g, &0, weight, Predecessors::Out(&mut predecessor), &mut weights).unwrap();
        let total: u64 = (0..4).filter(|&v| v != 0).map(|v| weights[v]).sum();
        assert_eq!(total, 11);
        // Every non-seed vertex hangs off the tree through its recorded predecessor.
        for v in 1..4 {
            assert!(g.contains_edge(&predecessor[v], &v));
        }
    }

    #[test]
    fn prim_leaves_other_components_untouched() {
        let g = undirected_weighted(4, &[(0, 1, 3)]);
        let weight = |g: &Vec<Vec<(usize, u64)>>, e: &EdgeDescriptor<usize>| *g.edge_value(e).unwrap();
        let mut weights = [0u64; 4];
        prim(&g, &0, weight, Predecessors::None, &mut weights).unwrap();
        assert_eq!(weights[1], 3);
        assert_eq!(weights[2], u64::INFINITE);
        assert_eq!(weights[3], u64::INFINITE);
    }

    #[test]
    fn prim_rejects_unknown_seeds() {
        let g = chorded_cycle();
        let weight = |g: &Vec<Vec<(usize, u64)>>, e: &EdgeDescriptor<usize>| *g.edge_value(e).unwrap();
        let mut weights = [0u64; 4];
        assert!(prim(&g, &9, weight, Predecessors::None, &mut weights).is_err());
    }
}
