use std::{collections::HashMap, hash::Hash};
use rand::{seq::SliceRandom, Rng};
use crate::{
    algo::check_distances_len,
    errors::GraphResult,
    IndexAdjacencyList, IndexId,
};





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * LABEL PROPAGATION                                                                 *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



// One propagation sweep over the given order; returns whether any label changed.
// When an empty label is supplied, vertices carrying it neither vote nor count.
fn propagate_once<GraphType, LabelType, RngType>(
    g: &GraphType,
    labels: &mut [LabelType],
    order: &[usize],
    empty_label: Option<&LabelType>,
    rng: &mut RngType,
) -> bool
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    LabelType: Clone + Eq + Hash,
    RngType: Rng,
{
    let mut changed = false;
    for &uindex in order {
        let u = g.find_vertex(&GraphType::VertexIdType::from_index(uindex)).unwrap();
        let mut frequencies: HashMap<&LabelType, usize> = HashMap::new();
        for e in g.edges(&u) {
            let label = &labels[e.target_id().to_index()];
            if empty_label != Some(label) {
                *frequencies.entry(label).or_insert(0) += 1;
            }
        }
        if frequencies.is_empty() {
            continue;
        }
        let max_count = frequencies.values().copied().max().unwrap();
        let candidates: Vec<&LabelType> = frequencies
            .iter()
            .filter(|(_, &count)| count == max_count)
            .map(|(&label, _)| label)
            .collect();
        let best = if candidates.len() == 1 {
            candidates[0].clone()
        } else {
            candidates[rng.gen_range(0..candidates.len())].clone()
        };
        if labels[uindex] != best {
            labels[uindex] = best;
            changed = true;
        }
    }
    changed
}

fn propagate<GraphType, LabelType, RngType>(
    g: &GraphType,
    labels: &mut [LabelType],
    empty_label: Option<LabelType>,
    rng: &mut RngType,
    max_iters: usize,
) -> GraphResult<()>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    LabelType: Clone + Eq + Hash,
    RngType: Rng,
{
    const FUNCTION_PATH: &str = "algo::label_propagation";
    let n = g.num_vertices();
    check_distances_len(labels, n, FUNCTION_PATH)?;

    let mut order: Vec<usize> = (0..n).collect();
    for _iteration in 0..max_iters {
        order.shuffle(rng);
        // Labels written earlier in a sweep are already visible to later vertices.
        let changed = propagate_once(g, labels, &order, empty_label.as_ref(), rng);
        if !changed {
            break;
        }
    }
    Ok(())
}



/// # Label propagation
///
/// ## Description
/// Community detection by iterated majority voting: each round, every vertex  (in  a
/// freshly shuffled order) adopts the most frequent label among  its  out-neighbors,
/// breaking ties uniformly at random. Rounds repeat until no label changes or
/// `max_iters` rounds have run.
///
/// ## Arguments
/// * `g` : `&GraphType` - the graph.
/// * `labels` : `&mut [LabelType]` - in/out; seeded by the caller (typically with  one
/// distinct label per vertex), updated in place.
/// * `rng` : `&mut RngType` - randomness for the shuffles and tie-breaks; seed it  for
/// reproducible runs.
/// * `max_iters` : `usize` - upper bound on the number of rounds.
///
/// ## Returns
/// * `GraphResult<()>` - `Err(GraphError)` with kind
/// [`OutOfRange`][crate::GraphErrorKind::OutOfRange] if `labels` is undersized.
///
/// ## Complexity
/// Time: O(max_iters · (|V| + |E|)). Space: O(|V|).
pub fn label_propagation<GraphType, LabelType, RngType>(
    g: &GraphType,
    labels: &mut [LabelType],
    rng: &mut RngType,
    max_iters: usize,
) -> GraphResult<()>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    LabelType: Clone + Eq + Hash,
    RngType: Rng,
{
    propagate(g, labels, None, rng, max_iters)
}



/// # Label propagation with an unlabelled sentinel
///
/// ## Description
/// Like [`label_propagation`], except vertices whose label  equals  `empty_label`  are
/// treated as unlabelled: they cast no vote and are not counted in neighbor  tallies.
/// An unlabelled vertex acquiring its first label counts as  a  change  for  the
/// convergence test.
pub fn label_propagation_with_empty<GraphType, LabelType, RngType>(
    g: &GraphType,
    labels: &mut [LabelType],
    empty_label: LabelType,
    rng: &mut RngType,
    max_iters: usize,
) -> GraphResult<()>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    LabelType: Clone + Eq + Hash,
    RngType: Rng,
{
    propagate(g, labels, Some(empty_label), rng, max_iters)
}
