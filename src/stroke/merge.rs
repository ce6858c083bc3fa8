//! Fusing strokes that share exact endpoints into longer paths.
//!
//! The fusion decision is delegated to a [`LineMerger`]. The bundled
//! [`NodeMerger`] builds a planar node graph from stroke endpoints and joins
//! strokes through every node touched by exactly two strokes.
//!
//! Endpoints only coincide when their coordinates are identical. Unlike
//! [`concat`](super::concat), no tolerance is applied.

use super::core::Stroke;
use crate::primitives::Point2;
use log::debug;
use num_traits::Float;
use std::collections::HashMap;

/// Output of a [`LineMerger`]: either one fused line or a collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Merged<F> {
    /// Everything fused into a single line.
    Single(Stroke<F>),
    /// Zero or more lines.
    Multi(Vec<Stroke<F>>),
}

impl<F> Merged<F> {
    /// Returns the lines as a collection, wrapping a single line.
    pub fn into_strokes(self) -> Vec<Stroke<F>> {
        match self {
            Merged::Single(stroke) => vec![stroke],
            Merged::Multi(strokes) => strokes,
        }
    }
}

/// A planar line-merge primitive.
///
/// Given polylines, returns polylines in which contiguous inputs have been
/// fused. Implementations decide what counts as contiguous.
pub trait LineMerger<F> {
    /// Fuses `lines` where possible.
    fn merge(&self, lines: &[Stroke<F>]) -> Merged<F>;
}

/// Merges strokes where possible, using [`NodeMerger`].
///
/// The result is always a collection, even when everything fused into a
/// single path.
///
/// # Example
///
/// ```
/// use strokes::{merge_strokes, to_strokes};
///
/// let strokes = to_strokes(vec![
///     vec![[0.0_f64, 0.0], [1.0, 1.0]],
///     vec![[1.0, 1.0], [2.0, 2.0]],
/// ])
/// .unwrap();
///
/// let merged = merge_strokes(&strokes);
/// assert_eq!(merged.len(), 1);
/// assert_eq!(merged[0].len(), 3);
/// ```
pub fn merge_strokes<F: Float>(strokes: &[Stroke<F>]) -> Vec<Stroke<F>> {
    merge_strokes_with(&NodeMerger, strokes)
}

/// Merges strokes where possible, using the given merger.
pub fn merge_strokes_with<F, M>(merger: &M, strokes: &[Stroke<F>]) -> Vec<Stroke<F>>
where
    F: Float,
    M: LineMerger<F> + ?Sized,
{
    let merged = merger.merge(strokes).into_strokes();
    debug!("merged {} strokes into {}", strokes.len(), merged.len());
    merged
}

/// Line merger keyed on exact endpoint coincidence.
///
/// * Strokes are fused through nodes of degree exactly 2. Nodes of degree 1
///   or 3+ end a path.
/// * Strokes may be traversed backwards to fuse. Each fused path is then
///   oriented so that most of its strokes keep their own direction.
/// * Rings where every node has degree 2 come out once, closed.
/// * Consecutive repeated points are dropped before building the graph.
///   Strokes that collapse to a single point (dots, zero-length strokes)
///   have no edge and pass through unchanged.
///
/// Output order follows the lowest input index among each path's strokes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeMerger;

impl<F: Float> LineMerger<F> for NodeMerger {
    fn merge(&self, lines: &[Stroke<F>]) -> Merged<F> {
        let mut graph = NodeGraph::new(lines);
        let mut paths: Vec<(usize, Stroke<F>)> = Vec::new();

        // Dots and zero-length strokes are not part of the graph.
        for (i, line) in lines.iter().enumerate() {
            if graph.ends[i].is_none() {
                paths.push((i, line.clone()));
            }
        }

        // Paths with at least one end on a non-degree-2 node.
        for edge in 0..lines.len() {
            let Some((start, end)) = graph.ends[edge] else {
                continue;
            };
            if graph.visited[edge] {
                continue;
            }
            if graph.degree(start) != 2 {
                paths.push(graph.walk(edge, true));
            } else if graph.degree(end) != 2 {
                paths.push(graph.walk(edge, false));
            }
        }

        // Whatever is left forms isolated rings.
        for edge in 0..lines.len() {
            if graph.ends[edge].is_some() && !graph.visited[edge] {
                paths.push(graph.walk(edge, true));
            }
        }

        paths.sort_by_key(|(order, _)| *order);
        let mut merged: Vec<Stroke<F>> = paths.into_iter().map(|(_, path)| path).collect();

        if merged.len() == 1 {
            if let Some(single) = merged.pop() {
                return Merged::Single(single);
            }
        }
        Merged::Multi(merged)
    }
}

/// Bit pattern of a coordinate, with `-0.0` folded onto `0.0`.
type CoordKey = (u64, i16, i8);

/// Exact node identity of an endpoint.
type NodeKey = (CoordKey, CoordKey);

fn coord_key<F: Float>(v: F) -> CoordKey {
    if v == F::zero() {
        F::zero().integer_decode()
    } else {
        v.integer_decode()
    }
}

fn node_key<F: Float>(p: Point2<F>) -> NodeKey {
    (coord_key(p.x), coord_key(p.y))
}

/// Which end of an edge touches a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum End {
    Start,
    End,
}

/// Copies `points` without consecutive repeats.
fn dedup_points<F: Float>(points: &[Point2<F>]) -> Vec<Point2<F>> {
    let mut run = points.to_vec();
    run.dedup();
    run
}

struct NodeGraph<F> {
    /// Each stroke's points with consecutive repeats removed.
    runs: Vec<Vec<Point2<F>>>,
    /// Node ids of each edge's first and last point; `None` for strokes that
    /// collapse to a single point.
    ends: Vec<Option<(usize, usize)>>,
    /// Incident edge ends per node id. A closed edge appears twice.
    incidence: Vec<Vec<(usize, End)>>,
    visited: Vec<bool>,
}

impl<F: Float> NodeGraph<F> {
    fn new(lines: &[Stroke<F>]) -> Self {
        let mut ids: HashMap<NodeKey, usize> = HashMap::new();
        let mut incidence: Vec<Vec<(usize, End)>> = Vec::new();
        let mut ends = Vec::with_capacity(lines.len());

        let mut node_id = |p: Point2<F>, incidence: &mut Vec<Vec<(usize, End)>>| -> usize {
            *ids.entry(node_key(p)).or_insert_with(|| {
                incidence.push(Vec::new());
                incidence.len() - 1
            })
        };

        let runs: Vec<Vec<Point2<F>>> = lines
            .iter()
            .map(|line| dedup_points(line.points()))
            .collect();

        for (edge, run) in runs.iter().enumerate() {
            if run.len() < 2 {
                ends.push(None);
                continue;
            }
            let start = node_id(run[0], &mut incidence);
            let end = node_id(run[run.len() - 1], &mut incidence);
            incidence[start].push((edge, End::Start));
            incidence[end].push((edge, End::End));
            ends.push(Some((start, end)));
        }

        Self {
            runs,
            ends,
            incidence,
            visited: vec![false; lines.len()],
        }
    }

    #[inline]
    fn degree(&self, node: usize) -> usize {
        self.incidence[node].len()
    }

    /// Follows edges from `edge` through degree-2 nodes until the path ends
    /// or returns to a visited edge.
    ///
    /// Returns the lowest edge index on the path together with the fused
    /// stroke.
    fn walk(&mut self, edge: usize, forward: bool) -> (usize, Stroke<F>) {
        let mut points: Vec<Point2<F>> = Vec::new();
        let mut lowest = edge;
        let mut kept = 0usize;
        let mut flipped = 0usize;

        let mut current = Some((edge, forward));
        while let Some((edge, forward)) = current.take() {
            self.visited[edge] = true;
            lowest = lowest.min(edge);

            let line = &self.runs[edge];
            let skip = usize::from(!points.is_empty());
            if forward {
                kept += 1;
                points.extend(line.iter().skip(skip));
            } else {
                flipped += 1;
                points.extend(line.iter().rev().skip(skip));
            }

            let Some((start, end)) = self.ends[edge] else {
                break;
            };
            let node = if forward { end } else { start };
            if self.degree(node) != 2 {
                break;
            }
            current = self.incidence[node]
                .iter()
                .find(|(next, _)| !self.visited[*next])
                .map(|&(next, at)| (next, at == End::Start));
        }

        if flipped > kept {
            points.reverse();
        }
        (lowest, Stroke::from_points_unchecked(points))
    }
}
