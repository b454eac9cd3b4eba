//! The node grid.
//!
//! [`Grid`] owns a row-major buffer of [`Node`]s plus the Start/End
//! bookkeeping. It enforces three invariants:
//!
//! - at most one Start and at most one End,
//! - Start and End never share a position,
//! - neither Start nor End is ever a Barrier.
//!
//! Search marks (Visited/Path) are written through
//! [`mark_visited`](Grid::mark_visited) and [`mark_path`](Grid::mark_path),
//! which never touch the three user-placed states.

use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, ParseError, Result};
use crate::geom::{Position, Range};
use crate::node::{Node, NodeState};

/// Maps a position to the position that discovered it during a search.
pub type CameFrom = HashMap<Position, Position>;

/// A rectangular grid of [`Node`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    nodes: Vec<Node>,
    bounds: Range,
    start: Option<Position>,
    end: Option<Position>,
}

impl Grid {
    /// Create a `rows × cols` grid with every node Empty.
    ///
    /// Negative dimensions are treated as zero.
    pub fn new(rows: i32, cols: i32) -> Self {
        let bounds = Range::with_size(rows, cols);
        let nodes = bounds.iter().map(Node::new).collect();
        Self {
            nodes,
            bounds,
            start: None,
            end: None,
        }
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    /// Whether the grid contains the given position.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    pub fn start(&self) -> Option<Position> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Position> {
        self.end
    }

    pub fn has_start_and_end(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    fn index(&self, p: Position) -> Result<usize> {
        self.bounds.index(p).ok_or(Error::OutOfBounds(p))
    }

    /// The node at `p`.
    pub fn node_at(&self, p: Position) -> Result<&Node> {
        let i = self.index(p)?;
        Ok(&self.nodes[i])
    }

    /// Shorthand for `node_at(p)?.state()`.
    pub fn state_at(&self, p: Position) -> Result<NodeState> {
        self.node_at(p).map(Node::state)
    }

    /// Whether `p` is inside the grid and not a barrier.
    pub fn is_traversable(&self, p: Position) -> bool {
        self.bounds
            .index(p)
            .is_some_and(|i| self.nodes[i].is_traversable())
    }

    // -----------------------------------------------------------------------
    // User placement
    // -----------------------------------------------------------------------

    /// Make `p` the Start, demoting any previous Start to Empty.
    pub fn set_start(&mut self, p: Position) -> Result<()> {
        let i = self.index(p)?;
        match self.nodes[i].state() {
            NodeState::Barrier => return Err(Error::Blocked(p)),
            NodeState::End => return Err(Error::SameAsEnd(p)),
            NodeState::Start => return Ok(()),
            _ => {}
        }
        if let Some(old) = self.start.take() {
            let oi = self.index(old)?;
            self.nodes[oi].reset();
        }
        self.nodes[i].set_state(NodeState::Start);
        self.start = Some(p);
        Ok(())
    }

    /// Make `p` the End, demoting any previous End to Empty.
    pub fn set_end(&mut self, p: Position) -> Result<()> {
        let i = self.index(p)?;
        match self.nodes[i].state() {
            NodeState::Barrier => return Err(Error::Blocked(p)),
            NodeState::Start => return Err(Error::SameAsStart(p)),
            NodeState::End => return Ok(()),
            _ => {}
        }
        if let Some(old) = self.end.take() {
            let oi = self.index(old)?;
            self.nodes[oi].reset();
        }
        self.nodes[i].set_state(NodeState::End);
        self.end = Some(p);
        Ok(())
    }

    /// Flip `p` between Barrier and Empty. Start and End are left alone.
    ///
    /// Returns the state the node ended up in.
    pub fn toggle_barrier(&mut self, p: Position) -> Result<NodeState> {
        let i = self.index(p)?;
        let node = &mut self.nodes[i];
        match node.state() {
            NodeState::Start | NodeState::End => {}
            NodeState::Barrier => node.reset(),
            _ => node.set_state(NodeState::Barrier),
        }
        Ok(node.state())
    }

    /// Turn `p` into a Barrier unless it is Start or End. Repeating the call
    /// changes nothing, which is what drag-painting needs.
    pub fn set_barrier(&mut self, p: Position) -> Result<()> {
        let i = self.index(p)?;
        let node = &mut self.nodes[i];
        if !node.is_start() && !node.is_end() {
            node.set_state(NodeState::Barrier);
        }
        Ok(())
    }

    /// Erase a single node to Empty, forgetting Start/End if it was one.
    pub fn clear_node(&mut self, p: Position) -> Result<()> {
        let i = self.index(p)?;
        if self.start == Some(p) {
            self.start = None;
        } else if self.end == Some(p) {
            self.end = None;
        }
        self.nodes[i].reset();
        Ok(())
    }

    /// Drop every Visited/Path mark. Unless `preserve_barriers` is set, also
    /// clear every Barrier and forget Start and End.
    pub fn clear(&mut self, preserve_barriers: bool) {
        if preserve_barriers {
            for n in &mut self.nodes {
                n.clear_search_mark();
            }
        } else {
            for n in &mut self.nodes {
                n.reset();
            }
            self.start = None;
            self.end = None;
        }
    }

    /// Hard clear: every node Empty, no Start or End.
    pub fn reset(&mut self) {
        self.clear(false);
    }

    /// Turn every node into a Barrier, forgetting Start and End.
    pub fn fill_barriers(&mut self) {
        for n in &mut self.nodes {
            n.set_state(NodeState::Barrier);
        }
        self.start = None;
        self.end = None;
    }

    /// Make `p` Empty if it is a Barrier. Used by carving generators.
    pub fn carve(&mut self, p: Position) -> Result<()> {
        let i = self.index(p)?;
        if self.nodes[i].is_barrier() {
            self.nodes[i].reset();
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Search marks
    // -----------------------------------------------------------------------

    /// Mark `p` Visited with the given order. Start, End and Barrier nodes
    /// keep their state; returns whether the node changed.
    pub fn mark_visited(&mut self, p: Position, order: u32) -> Result<bool> {
        self.mark(p, NodeState::Visited(order))
    }

    /// Mark `p` as part of the found path. Same protection as
    /// [`mark_visited`](Self::mark_visited).
    pub fn mark_path(&mut self, p: Position) -> Result<bool> {
        self.mark(p, NodeState::Path)
    }

    fn mark(&mut self, p: Position, state: NodeState) -> Result<bool> {
        let i = self.index(p)?;
        let node = &mut self.nodes[i];
        match node.state() {
            NodeState::Start | NodeState::End | NodeState::Barrier => Ok(false),
            _ => {
                node.set_state(state);
                Ok(true)
            }
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Append the traversable orthogonal neighbours of `p` to `buf`, in the
    /// order up, down, left, right.
    pub fn neighbors_into(&self, p: Position, buf: &mut Vec<Position>) {
        if !self.contains(p) {
            return;
        }
        buf.extend(
            p.neighbors_4()
                .into_iter()
                .filter(|&n| self.is_traversable(n)),
        );
    }

    /// The traversable orthogonal neighbours of `p`, in the order up, down,
    /// left, right.
    pub fn neighbors(&self, p: Position) -> Vec<Position> {
        let mut buf = Vec::with_capacity(4);
        self.neighbors_into(p, &mut buf);
        buf
    }

    /// Walk `came_from` back from `end` to the grid's Start.
    pub fn reconstruct_path(&self, came_from: &CameFrom, end: Position) -> Result<Vec<Position>> {
        let start = self.start.ok_or(Error::InvalidEndpoints)?;
        reconstruct_path(came_from, start, end)
    }

    /// Iterate over nodes in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Count nodes satisfying a predicate.
    pub fn count_fn(&self, mut f: impl FnMut(&Node) -> bool) -> usize {
        self.nodes.iter().filter(|n| f(n)).count()
    }

    pub fn barrier_count(&self) -> usize {
        self.count_fn(Node::is_barrier)
    }

    // -----------------------------------------------------------------------
    // ASCII format
    // -----------------------------------------------------------------------

    /// Parse a grid from its ASCII form (see [`NodeState::rune`]).
    ///
    /// Blank lines and surrounding whitespace on each line are ignored so
    /// that fixtures can be indented.
    pub fn from_ascii(s: &str) -> std::result::Result<Self, ParseError> {
        let lines: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let cols = lines.first().map_or(0, |l| l.chars().count());
        for (line, l) in lines.iter().enumerate() {
            let found = l.chars().count();
            if found != cols {
                return Err(ParseError::InconsistentSize {
                    line,
                    expected: cols,
                    found,
                });
            }
        }

        let mut grid = Self::new(lines.len() as i32, cols as i32);
        for (row, l) in lines.iter().enumerate() {
            for (col, ch) in l.chars().enumerate() {
                let pos = Position::new(row as i32, col as i32);
                let state = NodeState::from_rune(ch).ok_or(ParseError::InvalidRune { ch, pos })?;
                let slot = match state {
                    NodeState::Start => Some(&mut grid.start),
                    NodeState::End => Some(&mut grid.end),
                    _ => None,
                };
                if let Some(slot) = slot {
                    if slot.is_some() {
                        return Err(ParseError::DuplicateEndpoint { ch, pos });
                    }
                    *slot = Some(pos);
                }
                let i = row * cols + col;
                grid.nodes[i].set_state(state);
            }
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cols = self.cols().max(0) as usize;
        if cols == 0 {
            return Ok(());
        }
        for (r, row) in self.nodes.chunks(cols).enumerate() {
            if r > 0 {
                f.write_str("\n")?;
            }
            for n in row {
                write!(f, "{}", n.state().rune())?;
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Walk `came_from` backwards from `end` until a position with no entry is
/// reached, and return the path in start-to-end order.
///
/// Fails with [`Error::NoPath`] when `end` has no entry (and is not `start`)
/// or when the chain does not terminate at `start`.
pub fn reconstruct_path(came_from: &CameFrom, start: Position, end: Position) -> Result<Vec<Position>> {
    if end == start {
        return Ok(vec![start]);
    }
    if !came_from.contains_key(&end) {
        return Err(Error::NoPath(end));
    }

    let mut path = vec![end];
    let mut cur = end;
    while let Some(&prev) = came_from.get(&cur) {
        // A chain longer than the map has a cycle in it.
        if path.len() > came_from.len() {
            return Err(Error::NoPath(end));
        }
        path.push(prev);
        cur = prev;
    }
    if cur != start {
        return Err(Error::NoPath(end));
    }
    path.reverse();
    Ok(path)
}
