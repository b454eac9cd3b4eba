//! A single grid cell: [`Node`] and its [`NodeState`].

use crate::geom::Position;

/// The mutually exclusive state of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeState {
    #[default]
    Empty,
    Start,
    End,
    Barrier,
    /// Expanded by a search. `order` is the 1-based discovery index, kept
    /// only for gradient rendering.
    Visited(u32),
    Path,
}

impl NodeState {
    /// Rune used by the ASCII grid format.
    pub const fn rune(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Start => 'S',
            Self::End => 'E',
            Self::Barrier => '#',
            Self::Visited(_) => 'o',
            Self::Path => '*',
        }
    }

    /// Inverse of [`rune`](Self::rune). Visited runes parse with order 0.
    pub const fn from_rune(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Empty),
            'S' => Some(Self::Start),
            'E' => Some(Self::End),
            '#' => Some(Self::Barrier),
            'o' => Some(Self::Visited(0)),
            '*' => Some(Self::Path),
            _ => None,
        }
    }

    /// Whether the state is a mark left by a search (Visited or Path).
    #[inline]
    pub const fn is_search_mark(self) -> bool {
        matches!(self, Self::Visited(_) | Self::Path)
    }
}

/// A grid cell. The position is fixed at creation; the state is free to
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pos: Position,
    state: NodeState,
}

impl Node {
    /// Create an empty node at `pos`.
    pub const fn new(pos: Position) -> Self {
        Self {
            pos,
            state: NodeState::Empty,
        }
    }

    #[inline]
    pub const fn pos(&self) -> Position {
        self.pos
    }

    #[inline]
    pub const fn state(&self) -> NodeState {
        self.state
    }

    /// Overwrite the state unconditionally. Keeping the single Start/End
    /// invariant is the caller's job; [`Grid`](crate::Grid) does it for
    /// grid-owned nodes.
    #[inline]
    pub fn set_state(&mut self, state: NodeState) {
        self.state = state;
    }

    /// Anything but a barrier can be walked through.
    #[inline]
    pub fn is_traversable(&self) -> bool {
        self.state != NodeState::Barrier
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.state == NodeState::Start
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.state == NodeState::End
    }

    #[inline]
    pub fn is_barrier(&self) -> bool {
        self.state == NodeState::Barrier
    }

    /// The visit order if this node is Visited.
    #[inline]
    pub fn visited_order(&self) -> Option<u32> {
        match self.state {
            NodeState::Visited(order) => Some(order),
            _ => None,
        }
    }

    /// Back to Empty, whatever the state was.
    #[inline]
    pub fn reset(&mut self) {
        self.state = NodeState::Empty;
    }

    /// Drop Visited/Path marks; Start, End and Barrier survive.
    #[inline]
    pub fn clear_search_mark(&mut self) {
        if self.state.is_search_mark() {
            self.state = NodeState::Empty;
        }
    }
}
