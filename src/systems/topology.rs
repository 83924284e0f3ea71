//! Reconstruction of the spanwise (or longitudinal) segment chain.
//!
//! The geometry oracle reports, for every segment, the section it starts at
//! and the section it ends at, in whatever order the segments were defined.
//! Downstream analyses need them root to tip: segment `k` must end where
//! segment `k + 1` starts.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::debug;

use crate::components::SegmentLink;
use crate::oracle::GeometryOracle;
use crate::utils::{BalanceError, ComponentId};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TopologyError {
    #[error("component has no segments")]
    Empty,

    #[error("root segment {root} out of range ({count} segments)")]
    RootOutOfRange { root: usize, count: usize },

    #[error("segment {segment} is defined more than once")]
    DuplicateSegment { segment: usize },

    #[error("no segment starts at section {section}")]
    MissingLink { section: usize },

    #[error("segments {candidates:?} all start at section {section}")]
    AmbiguousLink {
        section: usize,
        candidates: Vec<usize>,
    },

    #[error("chain returns to section {section}")]
    Cycle { section: usize },
}

/// Index of the segment with the smallest ranking key.
///
/// Ties keep the earliest segment.
pub fn find_root_segment(keys: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &key) in keys.iter().enumerate() {
        match best {
            Some((_, current)) if !(key < current) => {}
            _ => best = Some((i, key)),
        }
    }
    best.map(|(i, _)| i)
}

/// Orders `links` into a connected chain starting with `links[root]`.
///
/// Every step must be unique: when two unused segments start at the section
/// the chain has reached, the geometry is rejected rather than guessed.
pub fn reorder_segments(
    links: &[SegmentLink],
    root: usize,
) -> Result<Vec<SegmentLink>, TopologyError> {
    if links.is_empty() {
        return Err(TopologyError::Empty);
    }
    if root >= links.len() {
        return Err(TopologyError::RootOutOfRange {
            root,
            count: links.len(),
        });
    }

    let mut seen = HashSet::new();
    for link in links {
        if !seen.insert(link.segment) {
            return Err(TopologyError::DuplicateSegment {
                segment: link.segment,
            });
        }
    }

    let mut graph: DiGraph<usize, usize> = DiGraph::new();
    let mut nodes: HashMap<usize, NodeIndex> = HashMap::new();
    for (i, link) in links.iter().enumerate() {
        let inner = *nodes
            .entry(link.inner)
            .or_insert_with(|| graph.add_node(link.inner));
        let outer = *nodes
            .entry(link.outer)
            .or_insert_with(|| graph.add_node(link.outer));
        graph.add_edge(inner, outer, i);
    }

    let mut used = vec![false; links.len()];
    let mut visited: HashSet<usize> = HashSet::new();
    let mut chain = Vec::with_capacity(links.len());

    let first = links[root];
    used[root] = true;
    visited.insert(first.inner);
    if !visited.insert(first.outer) {
        return Err(TopologyError::Cycle {
            section: first.outer,
        });
    }
    chain.push(first);

    while chain.len() < links.len() {
        let section = chain[chain.len() - 1].outer;
        let node = nodes[&section];

        let mut candidates: Vec<usize> = graph
            .edges_directed(node, Direction::Outgoing)
            .map(|edge| *edge.weight())
            .filter(|&i| !used[i])
            .collect();

        let next = match candidates.len() {
            0 => return Err(TopologyError::MissingLink { section }),
            1 => candidates[0],
            _ => {
                candidates.sort_unstable();
                return Err(TopologyError::AmbiguousLink {
                    section,
                    candidates: candidates.iter().map(|&i| links[i].segment).collect(),
                });
            }
        };

        let link = links[next];
        if !visited.insert(link.outer) {
            return Err(TopologyError::Cycle {
                section: link.outer,
            });
        }
        used[next] = true;
        chain.push(link);
    }

    debug!(
        root = first.segment,
        segments = chain.len(),
        "segment chain reconstructed"
    );
    Ok(chain)
}

/// Section ids along the chain, first-seen order, without repeats.
pub fn section_order(chain: &[SegmentLink]) -> Vec<usize> {
    let mut order: Vec<usize> = Vec::with_capacity(chain.len() + 1);
    let sections = chain
        .iter()
        .map(|link| link.inner)
        .chain(chain.last().map(|link| link.outer));
    for section in sections {
        if !order.contains(&section) {
            order.push(section);
        }
    }
    order
}

/// Reads the segment links of a component and puts them in root-to-tip order.
///
/// The root is the segment whose key (computed from the oracle) is smallest.
pub fn ordered_chain<O, F>(
    oracle: &O,
    component: ComponentId,
    mut root_key: F,
) -> Result<Vec<SegmentLink>, BalanceError>
where
    O: GeometryOracle,
    F: FnMut(&O, usize) -> Result<f64, BalanceError>,
{
    let segment_count = oracle.segment_count(component)?;
    let mut links = Vec::with_capacity(segment_count);
    let mut keys = Vec::with_capacity(segment_count);
    for segment in 0..segment_count {
        let (inner, outer) = oracle.segment_sections(component, segment)?;
        links.push(SegmentLink::new(segment, inner, outer));
        keys.push(root_key(oracle, segment)?);
    }

    let inconsistent = |source: TopologyError| BalanceError::GeometryInconsistency {
        component: component.to_string(),
        source,
    };
    let root = find_root_segment(&keys)
        .ok_or_else(|| inconsistent(TopologyError::Empty))?;
    reorder_segments(&links, root).map_err(inconsistent)
}
