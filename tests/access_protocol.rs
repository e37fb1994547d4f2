use std::collections::{BTreeMap, BTreeSet, HashMap};
use crabgraph::{
    views::{edgelist, incidence, neighbors, vertexlist},
    AdjacencyHints, AdjacencyList, Bidirectional, BidirectionalAdjacencyList, EdgeDescriptor,
    EdgeValues, GraphValue, IndexAdjacencyList, VertexDescriptor, VertexValues,
};





// A vertex payload, an edge payload, three different container families: every one of
// them must answer the same protocol and satisfy the same laws.

fn weighted_vov() -> Vec<(String, Vec<(usize, f64)>)> {
    vec![
        ("alpha".to_string(), vec![(1, 0.5), (2, 1.5)]),
        ("beta".to_string(), vec![(2, 2.5)]),
        ("gamma".to_string(), vec![]),
    ]
}

fn string_map() -> BTreeMap<String, BTreeSet<(String, u32)>> {
    let mut g = BTreeMap::new();
    g.insert(
        "amsterdam".to_string(),
        BTreeSet::from([("berlin".to_string(), 650), ("cologne".to_string(), 260)]),
    );
    g.insert("berlin".to_string(), BTreeSet::from([("cologne".to_string(), 570)]));
    g.insert("cologne".to_string(), BTreeSet::new());
    g
}



#[test]
fn vertex_ids_are_stable_and_unique() {
    let g = weighted_vov();
    let mut seen = Vec::new();
    for u in g.vertices() {
        assert!(!seen.contains(u.id()));
        seen.push(*u.id());
        // Looking the vertex up again answers the same descriptor.
        assert_eq!(g.find_vertex(u.id()).unwrap(), u);
    }
    assert_eq!(seen.len(), g.num_vertices());
}

#[test]
fn every_edge_targets_an_existing_vertex() {
    let g = string_map();
    for u in g.vertices() {
        for e in g.edges(&u) {
            assert!(g.find_vertex(e.target_id()).is_some());
        }
    }
}

#[test]
fn degree_law_and_sum_law() {
    let g = string_map();
    let mut total = 0;
    for u in g.vertices() {
        assert_eq!(g.degree(&u), g.edges(&u).count());
        total += g.degree(&u);
    }
    assert_eq!(g.num_edges(), total);
}

#[test]
fn sum_law_holds_over_in_edges_of_bidirectional_graphs() {
    let g = Bidirectional::new(vec![vec![1usize, 2], vec![2], vec![0]]).unwrap();
    let out_total: usize = g.vertices().map(|u| g.degree(&u)).sum();
    let in_total: usize = g.vertices().map(|u| g.in_degree(&u)).sum();
    assert_eq!(out_total, in_total);
    assert_eq!(g.num_edges(), in_total);
}

#[test]
fn bidirectional_mirror() {
    let g = Bidirectional::new(vec![vec![1usize, 2], vec![2], vec![0]]).unwrap();
    for u in g.vertices() {
        for e in g.edges(&u) {
            let v = e.target();
            assert!(g.in_edges(&v).any(|incoming| incoming.source_id() == u.id()));
        }
    }
}

#[test]
fn views_are_idempotent() {
    let g = weighted_vov();
    let first: Vec<_> = incidence(&g, &0).collect();
    let second: Vec<_> = incidence(&g, &0).collect();
    assert_eq!(first, second);
    let all_first: Vec<_> = edgelist(&g).collect();
    let all_second: Vec<_> = edgelist(&g).collect();
    assert_eq!(all_first, all_second);
}

#[test]
fn payloads_are_reachable_through_descriptors() {
    let g = weighted_vov();
    let u = g.find_vertex(&1).unwrap();
    assert_eq!(g.vertex_value(&u).unwrap(), "beta");
    let e = g.find_vertex_edge(&0, &2).unwrap();
    assert_eq!(*g.edge_value(&e).unwrap(), 1.5);
}

#[test]
fn mapping_graphs_expose_the_same_views() {
    let g = string_map();
    let ids: Vec<String> = vertexlist(&g).map(|record| record.id).collect();
    assert_eq!(ids, vec!["amsterdam", "berlin", "cologne"]);
    let reached: Vec<String> =
        neighbors(&g, &"amsterdam".to_string()).map(|record| record.target_id).collect();
    assert_eq!(reached, vec!["berlin", "cologne"]);
    let weights: Vec<u32> = edgelist(&g).map(|record| *g.edge_value(&record.edge).unwrap()).collect();
    assert_eq!(weights, vec![650, 260, 570]);
}

#[test]
fn hash_mapping_graphs_conform_too() {
    let mut g: HashMap<u64, Vec<u64>> = HashMap::new();
    g.insert(10, vec![20]);
    g.insert(20, vec![10, 30]);
    g.insert(30, vec![]);
    assert_eq!(g.num_vertices(), 3);
    assert_eq!(g.num_edges(), 3);
    assert!(g.contains_edge(&20, &30));
    assert!(!g.contains_edge(&30, &20));
    // Iteration order is container-defined, but the sum law still holds.
    let total: usize = g.vertices().map(|u| g.degree(&u)).sum();
    assert_eq!(total, 3);
}

#[test]
fn default_partition_covers_the_whole_graph() {
    let g = weighted_vov();
    assert_eq!(g.num_partitions(), 1);
    assert_eq!(g.num_vertices_in_partition(0), g.num_vertices());
    assert_eq!(g.vertices_in_partition(1).count(), 0);
    for u in g.vertices() {
        assert_eq!(g.partition_id(&u), 0);
    }
}



// A custom container taking the override tier of the protocol: it caches its edge
// count, advertises the fast path, and carries a graph-level payload.
struct RoadNetwork {
    name: String,
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl RoadNetwork {
    fn new(name: &str, adjacency: Vec<Vec<usize>>) -> Self {
        let edge_count = adjacency.iter().map(|targets| targets.len()).sum();
        RoadNetwork { name: name.to_string(), adjacency, edge_count }
    }
}

impl AdjacencyList for RoadNetwork {
    type VertexIdType = usize;

    const HINTS: AdjacencyHints = AdjacencyHints::SIZED_EDGES;

    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item = VertexDescriptor<usize>> + 'a> {
        self.adjacency.vertices()
    }

    fn find_vertex(&self, uid: &usize) -> Option<VertexDescriptor<usize>> {
        self.adjacency.find_vertex(uid)
    }

    fn edges<'a>(&'a self, u: &VertexDescriptor<usize>) -> Box<dyn Iterator<Item = EdgeDescriptor<usize>> + 'a> {
        self.adjacency.edges(u)
    }

    fn num_vertices(&self) -> usize {
        self.adjacency.num_vertices()
    }

    fn num_edges(&self) -> usize {
        self.edge_count
    }
}

impl IndexAdjacencyList for RoadNetwork {}

impl GraphValue for RoadNetwork {
    type GraphValueType = String;

    fn graph_value(&self) -> &String {
        &self.name
    }
}

#[test]
fn custom_containers_opt_into_the_fast_paths() {
    let g = RoadNetwork::new("ring of three", vec![vec![1], vec![2], vec![0]]);
    assert_eq!(g.graph_value(), "ring of three");
    assert_eq!(g.num_edges(), 3);
    // The advertised O(1) edge count makes the edgelist view exactly sized.
    let view = edgelist(&g);
    assert_eq!(view.size_hint(), (3, Some(3)));
    assert_eq!(view.count(), 3);
}
