use itertools::Itertools;
use crate::{
    descriptors::{EdgeDescriptor, VertexDescriptor},
    Id, IndexAdjacencyList, IndexId,
};

const UNDISCOVERED: usize = usize::MAX;





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * LOW-POINT DFS                                                                     *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



struct LowPointFrame<'a, VertexIdType>
where
    VertexIdType: Id,
{
    index: usize,
    edges: Box<dyn Iterator<Item = EdgeDescriptor<VertexIdType>> + 'a>,
    parent: Option<usize>,
    parent_edge_skipped: bool,
    tree_children: usize,
}

enum LowPointStep<VertexIdType>
where
    VertexIdType: Id,
{
    Skip,
    Descend(VertexDescriptor<VertexIdType>, usize),
    Finished,
}

// One iterative DFS over the whole graph computing discovery times and low points.
// Returns the articulation flags; when `components` is given, also pops the edge
// stack at every articulation boundary and emits the unique endpoints as one
// biconnected component. Self-loops are ignored. Only the first reverse-to-parent
// edge counts as the tree edge; parallel copies are back edges.
fn low_point_dfs<GraphType>(
    g: &GraphType,
    mut components: Option<&mut Vec<Vec<GraphType::VertexIdType>>>,
) -> Vec<bool>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
{
    let n = g.num_vertices();
    let mut disc = vec![UNDISCOVERED; n];
    let mut low = vec![UNDISCOVERED; n];
    let mut is_articulation = vec![false; n];
    let mut timer = 0usize;
    let mut edge_stack: Vec<(usize, usize)> = Vec::new();

    for root in g.vertices() {
        let root_index = root.id().to_index();
        if disc[root_index] != UNDISCOVERED {
            continue;
        }
        disc[root_index] = timer;
        low[root_index] = timer;
        timer += 1;
        let root_edges = g.edges(&root);
        let mut stack = vec![LowPointFrame {
            index: root_index,
            edges: root_edges,
            parent: None,
            parent_edge_skipped: false,
            tree_children: 0,
        }];

        while !stack.is_empty() {
            let step = {
                let top = stack.last_mut().unwrap();
                match top.edges.next() {
                    None => LowPointStep::Finished,
                    Some(e) => {
                        let v = e.target_id().to_index();
                        if v == top.index {
                            LowPointStep::Skip
                        } else if top.parent == Some(v) && !top.parent_edge_skipped {
                            top.parent_edge_skipped = true;
                            LowPointStep::Skip
                        } else if disc[v] == UNDISCOVERED {
                            top.tree_children += 1;
                            edge_stack.push((top.index, v));
                            disc[v] = timer;
                            low[v] = timer;
                            timer += 1;
                            LowPointStep::Descend(e.target(), top.index)
                        } else {
                            if disc[v] < disc[top.index] {
                                edge_stack.push((top.index, v));
                                if disc[v] < low[top.index] {
                                    low[top.index] = disc[v];
                                }
                            }
                            LowPointStep::Skip
                        }
                    },
                }
            };
            match step {
                LowPointStep::Skip => {},
                LowPointStep::Descend(target, parent_index) => {
                    let index = target.id().to_index();
                    let edges = g.edges(&target);
                    stack.push(LowPointFrame {
                        index,
                        edges,
                        parent: Some(parent_index),
                        parent_edge_skipped: false,
                        tree_children: 0,
                    });
                },
                LowPointStep::Finished => {
                    let finished = stack.pop().unwrap();
                    match finished.parent {
                        Some(p) => {
                            let parent_is_root = stack.last().unwrap().parent.is_none();
                            if low[finished.index] < low[p] {
                                low[p] = low[finished.index];
                            }
                            if low[finished.index] >= disc[p] {
                                if !parent_is_root {
                                    is_articulation[p] = true;
                                }
                                // Unwind the subtree's edges; they form one component.
                                let boundary = (p, finished.index);
                                match components.as_mut() {
                                    Some(out) => {
                                        let mut endpoints: Vec<usize> = Vec::new();
                                        while let Some((a, b)) = edge_stack.pop() {
                                            endpoints.push(a);
                                            endpoints.push(b);
                                            if (a, b) == boundary {
                                                break;
                                            }
                                        }
                                        out.push(
                                            endpoints
                                                .into_iter()
                                                .sorted_unstable()
                                                .dedup()
                                                .map(GraphType::VertexIdType::from_index)
                                                .collect(),
                                        );
                                    },
                                    None => {
                                        while let Some(popped) = edge_stack.pop() {
                                            if popped == boundary {
                                                break;
                                            }
                                        }
                                    },
                                }
                            }
                        },
                        None => {
                            if finished.tree_children >= 2 {
                                is_articulation[finished.index] = true;
                            }
                        },
                    }
                },
            }
        }
    }
    is_articulation
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * ARTICULATION POINTS                                                               *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Articulation points
///
/// ## Description
/// Append to `out` the IDs of all vertices whose removal disconnects  the  graph.  The
/// graph must be undirected, stored as symmetric half-edge pairs.
///
/// ## Details
/// One iterative depth-first search computes, for every vertex,  its  discovery  time
/// and the lowest discovery time reachable through back  edges  from  its  subtree.  A
/// non-root vertex `u` is an articulation point iff some DFS  child  `c`  satisfies
/// `low(c) >= disc(u)`; a root is one iff it has two or more DFS children.
///
/// Self-loops are ignored. Parallel edges make their endpoints biconnected:  only  the
/// first edge back to the DFS parent is treated as the tree edge, any  further  copy
/// counts as a back edge.
///
/// ## Complexity
/// Time: O(|V| + |E|). Space: O(|V|).
pub fn articulation_points<GraphType>(g: &GraphType, out: &mut Vec<GraphType::VertexIdType>)
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
{
    let flags = low_point_dfs(g, None);
    for (index, flag) in flags.into_iter().enumerate() {
        if flag {
            out.push(GraphType::VertexIdType::from_index(index));
        }
    }
}



/// # Biconnected components
///
/// ## Description
/// Append to `out` the vertex sets of all biconnected components  of  an  undirected
/// graph (stored as symmetric half-edge pairs), each as a sorted  deduplicated  list
/// of vertex IDs. Isolated vertices form no component.
///
/// ## Details
/// Same depth-first search as [`articulation_points`],  additionally  keeping  the
/// crossed edges on an auxiliary stack; at every articulation  boundary  the  stack
/// is popped down to and including the boundary tree edge  and  the  popped  edges'
/// unique endpoints become one component. A vertex appearing in two  or  more  of
/// the emitted components is exactly an articulation point.
///
/// ## Complexity
/// Time: O(|V| + |E| log |E|) (the per-component endpoint sort). Space: O(|V| + |E|).
pub fn biconnected_components<GraphType>(g: &GraphType, out: &mut Vec<Vec<GraphType::VertexIdType>>)
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
{
    low_point_dfs(g, Some(out));
}
