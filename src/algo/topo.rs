//! Kahn topological sort and AOE critical path analysis

use super::{AlgoError, AlgoResult};
use crate::graph::{Graph, VertexId, Weight};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::debug;

/// Kahn's algorithm. Zero-in-degree vertices are seeded and dequeued in
/// ascending id order, so the ordering is deterministic.
///
/// Returns `CycleDetected` if any vertex never reaches in-degree zero; a
/// partial ordering is never returned.
pub fn topo_sort_kahn(graph: &Graph) -> AlgoResult<Vec<VertexId>> {
    let mut in_degree: FxHashMap<VertexId, usize> = FxHashMap::default();
    for id in graph.vertex_ids() {
        in_degree.entry(id).or_insert(0);
        for edge in graph.out_edges(id) {
            *in_degree.entry(edge.to()).or_insert(0) += 1;
        }
    }

    let mut queue: VecDeque<VertexId> = graph
        .vertex_ids()
        .into_iter()
        .filter(|id| in_degree.get(id) == Some(&0))
        .collect();

    let mut order = Vec::with_capacity(graph.vertex_count());
    while let Some(v) = queue.pop_front() {
        order.push(v);
        for edge in graph.out_edges(v) {
            if let Some(degree) = in_degree.get_mut(&edge.to()) {
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(edge.to());
                }
            }
        }
    }

    if order.len() < graph.vertex_count() {
        return Err(AlgoError::CycleDetected);
    }
    Ok(order)
}

/// Result of AOE (activity-on-edge) critical path analysis.
///
/// `critical` holds the vertices whose earliest and latest event times
/// coincide, in ascending id order. `makespan` is the largest earliest
/// event time, i.e. the total project duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalPath {
    pub earliest: FxHashMap<VertexId, Weight>,
    pub latest: FxHashMap<VertexId, Weight>,
    pub critical: Vec<VertexId>,
    pub makespan: Weight,
}

/// AOE critical path over a weighted DAG.
///
/// Edge weights are activity durations and must be non-negative; cyclic
/// input yields `CycleDetected`.
pub fn critical_path(graph: &Graph) -> AlgoResult<CriticalPath> {
    for edge in graph.edges() {
        if edge.weight() < 0 {
            return Err(AlgoError::NegativeWeight {
                from: edge.from(),
                to: edge.to(),
                weight: edge.weight(),
            });
        }
    }

    let order = topo_sort_kahn(graph)?;

    // Forward pass: earliest event time is the longest path from a source.
    let mut earliest: FxHashMap<VertexId, Weight> = FxHashMap::default();
    for &v in &order {
        let ve = earliest.get(&v).copied().unwrap_or(0);
        earliest.entry(v).or_insert(0);
        for edge in graph.out_edges(v) {
            let candidate = ve + edge.weight();
            let slot = earliest.entry(edge.to()).or_insert(0);
            if candidate > *slot {
                *slot = candidate;
            }
        }
    }

    let makespan = earliest.values().copied().max().unwrap_or(0);

    // Backward pass in reverse topological order: a sink's latest time is
    // its own earliest time, everything else takes min(vl(to) - weight).
    let mut latest: FxHashMap<VertexId, Weight> = FxHashMap::default();
    for &v in order.iter().rev() {
        let ve = earliest.get(&v).copied().unwrap_or(0);
        let mut vl = None;
        for edge in graph.out_edges(v) {
            let to_vl = latest
                .get(&edge.to())
                .copied()
                .unwrap_or_else(|| earliest.get(&edge.to()).copied().unwrap_or(0));
            let candidate = to_vl - edge.weight();
            vl = Some(match vl {
                Some(current) if current <= candidate => current,
                _ => candidate,
            });
        }
        latest.insert(v, vl.unwrap_or(ve));
    }

    let mut critical: Vec<VertexId> = order
        .iter()
        .copied()
        .filter(|v| earliest.get(v) == latest.get(v))
        .collect();
    critical.sort();

    debug!(makespan, critical = critical.len(), "critical path complete");
    Ok(CriticalPath {
        earliest,
        latest,
        critical,
        makespan,
    })
}
