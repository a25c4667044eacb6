//! Stable topological ordering of capability graphs
//!
//! Shared by the instance registry (construction order) and the lifecycle
//! manager (init order). Among the nodes whose dependencies are all placed,
//! the one declared first goes next, so the same input always yields the
//! same order.

use beacon_domain::error::{Error, Result};
use beacon_domain::value_objects::Capability;
use petgraph::Direction;
use petgraph::algo::tarjan_scc;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// A node of the dependency graph: a capability and what it depends on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    /// The node
    pub capability: Capability,
    /// Capabilities that must come before it
    pub dependencies: Vec<Capability>,
}

impl GraphNode {
    /// Create a node
    pub fn new(capability: Capability, dependencies: Vec<Capability>) -> Self {
        Self {
            capability,
            dependencies,
        }
    }
}

/// Edges run from a dependency to its dependent; node weights are the
/// declaration index.
type DependencyGraph = StableDiGraph<usize, ()>;

fn build_graph(nodes: &[GraphNode]) -> Result<(DependencyGraph, Vec<NodeIndex>)> {
    let mut graph = DependencyGraph::with_capacity(nodes.len(), 0);
    let indices: Vec<NodeIndex> = (0..nodes.len()).map(|i| graph.add_node(i)).collect();
    let by_capability: HashMap<&Capability, NodeIndex> = nodes
        .iter()
        .zip(&indices)
        .map(|(node, &idx)| (&node.capability, idx))
        .collect();

    for (node, &dependent) in nodes.iter().zip(&indices) {
        for dependency in &node.dependencies {
            let &target = by_capability
                .get(dependency)
                .ok_or_else(|| Error::missing_binding(dependency, node.capability.as_str()))?;
            graph.update_edge(target, dependent, ());
        }
    }
    Ok((graph, indices))
}

/// Order `nodes` so that every node follows its dependencies
///
/// Returns indices into `nodes`. A dependency absent from `nodes` is a
/// [`Error::MissingBinding`] requested by the depending node; a cycle is a
/// [`Error::CyclicDependency`] whose path starts and ends on the same node.
pub fn dependency_order(nodes: &[GraphNode]) -> Result<Vec<usize>> {
    let (graph, indices) = build_graph(nodes)?;

    let mut pending: Vec<usize> = indices
        .iter()
        .map(|&idx| graph.neighbors_directed(idx, Direction::Incoming).count())
        .collect();
    let mut ready: BinaryHeap<Reverse<usize>> = pending
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count == 0)
        .map(|(i, _)| Reverse(i))
        .collect();

    let mut order = Vec::with_capacity(nodes.len());
    while let Some(Reverse(next)) = ready.pop() {
        order.push(next);
        for dependent in graph.neighbors_directed(indices[next], Direction::Outgoing) {
            let position = graph[dependent];
            pending[position] -= 1;
            if pending[position] == 0 {
                ready.push(Reverse(position));
            }
        }
    }

    if order.len() == nodes.len() {
        return Ok(order);
    }

    Err(Error::cyclic_dependency(find_cycle(nodes, &graph)))
}

/// Cycle through the earliest-declared strongly connected component
///
/// The walk starts at the component's first-declared node and follows its
/// first-declared dependency inside the component until a node repeats.
fn find_cycle(nodes: &[GraphNode], graph: &DependencyGraph) -> Vec<Capability> {
    let Some(component) = tarjan_scc(graph)
        .into_iter()
        .filter(|scc| scc.len() > 1 || scc.iter().any(|&n| graph.contains_edge(n, n)))
        .min_by_key(|scc| scc.iter().map(|&n| graph[n]).min())
    else {
        return Vec::new();
    };
    let members: HashSet<NodeIndex> = component.iter().copied().collect();
    let Some(start) = component.iter().copied().min_by_key(|&n| graph[n]) else {
        return Vec::new();
    };

    let mut walk = vec![start];
    let mut current = start;
    loop {
        let Some(next) = graph
            .neighbors_directed(current, Direction::Incoming)
            .filter(|n| members.contains(n))
            .min_by_key(|&n| graph[n])
        else {
            return walk.iter().map(|&n| nodes[graph[n]].capability.clone()).collect();
        };
        if let Some(position) = walk.iter().position(|&n| n == next) {
            let mut cycle: Vec<Capability> = walk[position..]
                .iter()
                .map(|&n| nodes[graph[n]].capability.clone())
                .collect();
            cycle.push(nodes[graph[next]].capability.clone());
            return cycle;
        }
        walk.push(next);
        current = next;
    }
}
