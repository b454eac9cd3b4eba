//! Flood fill over a [`Pather`].

use std::collections::HashSet;

use pathviz_core::Position;

use crate::traits::Pather;

/// Every position reachable from `from` through `pather`'s neighbours,
/// `from` included, in discovery order.
///
/// `from` itself is not checked for traversability.
pub fn flood_fill<P: Pather>(pather: &P, from: Position) -> Vec<Position> {
    let mut seen = HashSet::from([from]);
    let mut result = vec![from];
    let mut stack = vec![from];
    let mut nbuf = Vec::with_capacity(4);

    // Iterative DFS from `from`.
    while let Some(cp) = stack.pop() {
        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);
        for &np in &nbuf {
            if seen.insert(np) {
                stack.push(np);
                result.push(np);
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GridSnapshot;
    use pathviz_core::Grid;

    #[test]
    fn fills_one_component() {
        let grid = Grid::from_ascii(
            "
            ..#..
            ..#..
            ###..
            ",
        )
        .unwrap();
        let snap = GridSnapshot::from_grid(&grid);
        let left = flood_fill(&snap, Position::new(0, 0));
        assert_eq!(left.len(), 4);
        assert_eq!(left[0], Position::new(0, 0));
        let right = flood_fill(&snap, Position::new(2, 4));
        assert_eq!(right.len(), 6);
        assert!(!right.contains(&Position::new(0, 0)));
    }
}
