use std::collections::{BTreeMap, BTreeSet, VecDeque};
use tracing::trace;

use crate::core::{DagNode, Edge, LaneIdx, NodeEdge};
use crate::decor::RefIndex;
use crate::layout::{Color, ColorPalette, GraphFragment, NodeSymbol};

/// Incremental lane layout.
///
/// Feed commits with [`Grapher::proceed`] in display order, newest first.
/// The only state carried between calls is the fragment of the previous
/// commit, so one `Grapher` serves exactly one history view.
pub struct Grapher {
    previous: Option<GraphFragment>,
    palette: ColorPalette,
    refs: RefIndex,
}

impl Grapher {
    pub fn new(colors: Vec<Color>, refs: RefIndex) -> Self {
        Self::with_palette(ColorPalette::new(colors), refs)
    }

    pub fn with_palette(palette: ColorPalette, refs: RefIndex) -> Self {
        Self {
            previous: None,
            palette,
            refs,
        }
    }

    /// Fragment produced by the last call to `proceed`
    pub fn previous(&self) -> Option<&GraphFragment> {
        self.previous.as_ref()
    }

    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    /// Forget the previous commit and return every leased color
    pub fn reset(&mut self) {
        self.previous = None;
        self.palette = ColorPalette::new(self.palette.colors().to_vec());
    }

    /// Lay out the next commit
    pub fn proceed(&mut self, node: &DagNode) -> GraphFragment {
        let incoming = self.incoming_lanes();
        let primary = node.primary_parent();
        let mut pending: VecDeque<&str> = node.secondary_parents().collect();
        let mut is_major = self.refs.is_major(&node.id);

        let mut symbol: Option<NodeSymbol> = None;
        let mut inter_edges = Vec::new();
        let mut node_edges = Vec::new();
        let mut occupied = BTreeSet::new();

        for (&lane, edge) in &incoming {
            if edge.target_id == node.id {
                is_major |= edge.color.is_some();
                node_edges.push(NodeEdge::child(edge));
                if symbol.is_some() {
                    // another child converging on a commit that already has its column
                    self.release(edge.color.clone());
                    continue;
                }
                occupied.insert(lane);
                let color = self.carry_color(edge.color.clone(), is_major);
                match primary {
                    Some(parent) => {
                        node_edges.push(NodeEdge::parent(lane, &node.id, parent, color.clone()))
                    }
                    None => self.release(color.clone()),
                }
                symbol = Some(NodeSymbol {
                    lane_index: lane,
                    color,
                });
            } else {
                occupied.insert(lane);
                if let Some(pos) = pending.iter().position(|&p| p == edge.target_id) {
                    pending.remove(pos);
                    let color = self.carry_color(edge.color.clone(), is_major);
                    node_edges.push(NodeEdge::parent(lane, &node.id, &edge.target_id, color));
                }
                inter_edges.push(edge.clone());
            }
        }

        // Nothing above led here: this commit starts a new column
        let symbol = match symbol {
            Some(symbol) => symbol,
            None => {
                let lane = first_free(&occupied, 0);
                occupied.insert(lane);
                let color = self.open_color(is_major);
                match primary {
                    Some(parent) => {
                        node_edges.push(NodeEdge::parent(lane, &node.id, parent, color.clone()))
                    }
                    None => self.release(color.clone()),
                }
                NodeSymbol {
                    lane_index: lane,
                    color,
                }
            }
        };

        let mut lane = 0;
        for parent in pending {
            lane = first_free(&occupied, lane);
            occupied.insert(lane);
            let color = self.open_color(is_major);
            node_edges.push(NodeEdge::parent(lane, &node.id, parent, color));
        }

        node_edges.sort_by_key(|e| e.lane_index);
        let width = span(incoming.keys()).max(span(occupied.iter()));

        trace!(
            commit = %node.id,
            lane = symbol.lane_index,
            lanes_in = incoming.len(),
            passing = inter_edges.len(),
            width,
            "laid out commit"
        );

        let fragment = GraphFragment {
            commit_id: node.id.clone(),
            inter_edges,
            node_edges,
            node: symbol,
            width,
        };
        self.previous = Some(fragment.clone());
        fragment
    }

    /// Lay out a whole sequence, in order
    pub fn layout_all<'a, I>(&mut self, nodes: I) -> Vec<GraphFragment>
    where
        I: IntoIterator<Item = &'a DagNode>,
    {
        nodes.into_iter().map(|node| self.proceed(node)).collect()
    }

    /// Lanes left open by the previous row, by index
    fn incoming_lanes(&self) -> BTreeMap<LaneIdx, Edge> {
        let mut lanes = BTreeMap::new();
        if let Some(prev) = &self.previous {
            for edge in &prev.inter_edges {
                lanes.insert(edge.lane_index, edge.clone());
            }
            for edge in prev.parent_edges() {
                lanes.insert(edge.lane_index, edge.to_incoming());
            }
        }
        lanes
    }

    fn carry_color(&mut self, carried: Option<Color>, is_major: bool) -> Option<Color> {
        match carried {
            Some(color) => Some(color),
            None => self.open_color(is_major),
        }
    }

    fn open_color(&mut self, is_major: bool) -> Option<Color> {
        if is_major {
            self.palette.pop()
        } else {
            None
        }
    }

    fn release(&mut self, color: Option<Color>) {
        if let Some(color) = color {
            self.palette.push(color);
        }
    }
}

/// Lowest lane at or after `from` that nothing occupies
fn first_free(occupied: &BTreeSet<LaneIdx>, from: LaneIdx) -> LaneIdx {
    (from..).find(|lane| !occupied.contains(lane)).unwrap_or(from)
}

/// Number of lanes needed to cover the highest index
fn span<'a>(mut lanes: impl DoubleEndedIterator<Item = &'a LaneIdx>) -> usize {
    lanes.next_back().map_or(0, |&lane| lane + 1)
}
