use pathviz_core::Position;

/// One unit of observable progress emitted by a running search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepEvent {
    /// `pos` was just expanded; `order` counts expansions from 1. The host
    /// marks the node Visited(order).
    Visiting { pos: Position, order: u32 },
    /// Terminal: the end was reached. `path` runs from start to end
    /// inclusive; the host marks the interior as Path.
    Found(Vec<Position>),
    /// Terminal: the frontier ran dry without reaching the end.
    Exhausted,
}

impl StepEvent {
    /// Whether this event ends the run.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Visiting { .. })
    }
}
