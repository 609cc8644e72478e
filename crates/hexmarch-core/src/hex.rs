//! Hex coordinate system for the planning grid.
//!
//! Tiles are stored in "odd-r" offset coordinates: rows are horizontal and
//! every odd row is shifted half a hex to the right. Distance math is done in
//! axial coordinates, which the offset form converts to and from losslessly.

use serde::{Deserialize, Serialize};

/// Neighbor offsets `(dx, dy)` for tiles on an even row.
pub const EVEN_ROW_NEIGHBORS: [(i32, i32); 6] =
    [(-1, -1), (0, -1), (1, 0), (0, 1), (-1, 1), (-1, 0)];

/// Neighbor offsets `(dx, dy)` for tiles on an odd row.
pub const ODD_ROW_NEIGHBORS: [(i32, i32); 6] = [(0, -1), (1, -1), (1, 0), (1, 1), (0, 1), (-1, 0)];

/// Select the neighbor table for a row.
///
/// Adjacency on an offset grid depends only on row parity, so this is the one
/// place that parity is inspected.
#[inline]
pub const fn neighbor_offsets(row: i32) -> &'static [(i32, i32); 6] {
    if row & 1 == 0 {
        &EVEN_ROW_NEIGHBORS
    } else {
        &ODD_ROW_NEIGHBORS
    }
}

/// Offset (column, row) coordinate of a tile.
///
/// In this coordinate system:
/// - `x` is the column
/// - `y` is the row
/// - Odd rows are shifted right by half a hex
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct HexCoord {
    /// Column coordinate
    pub x: i32,
    /// Row coordinate
    pub y: i32,
}

impl PartialOrd for HexCoord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HexCoord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Row-major ordering matches the flat tile index
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl HexCoord {
    /// Create a new hex coordinate.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Convert to axial coordinates.
    #[inline]
    pub const fn to_axial(&self) -> Axial {
        offset_to_axial(self.x, self.y)
    }

    /// Build an offset coordinate from axial coordinates.
    #[inline]
    pub const fn from_axial(axial: Axial) -> Self {
        axial_to_offset(axial)
    }

    /// Get all 6 neighboring hexes, ignoring map bounds.
    pub fn neighbors(&self) -> [HexCoord; 6] {
        neighbor_offsets(self.y).map(|(dx, dy)| HexCoord::new(self.x + dx, self.y + dy))
    }

    /// Calculate the distance to another hex (in hex steps).
    pub fn distance(&self, other: &HexCoord) -> u32 {
        hex_distance(self.to_axial(), other.to_axial())
    }

    /// Check if this coordinate is within bounds of a rectangular map.
    pub fn in_bounds(&self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < width && self.y < height
    }
}

impl From<(i32, i32)> for HexCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for HexCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axial hex coordinate, used for distance arithmetic.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Axial {
    pub q: i32,
    pub r: i32,
}

impl Axial {
    #[inline]
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }
}

/// Convert odd-r offset coordinates to axial.
#[inline]
pub const fn offset_to_axial(col: i32, row: i32) -> Axial {
    // `row - (row & 1)` is always even, so the division is exact for
    // negative rows too.
    Axial::new(col - (row - (row & 1)) / 2, row)
}

/// Convert axial coordinates back to odd-r offset.
#[inline]
pub const fn axial_to_offset(axial: Axial) -> HexCoord {
    HexCoord::new(axial.q + (axial.r - (axial.r & 1)) / 2, axial.r)
}

/// Number of hex steps between two axial coordinates.
#[inline]
pub const fn hex_distance(a: Axial, b: Axial) -> u32 {
    let dq = a.q - b.q;
    let dr = a.r - b.r;
    ((dq.abs() + (dq + dr).abs() + dr.abs()) / 2) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let coord = HexCoord::new(3, 5);
        assert_eq!(coord.x, 3);
        assert_eq!(coord.y, 5);
    }

    #[test]
    fn test_offset_to_axial() {
        assert_eq!(offset_to_axial(0, 0), Axial::new(0, 0));
        assert_eq!(offset_to_axial(0, 1), Axial::new(0, 1));
        assert_eq!(offset_to_axial(4, 4), Axial::new(2, 4));
        assert_eq!(offset_to_axial(3, 5), Axial::new(1, 5));
        assert_eq!(offset_to_axial(0, -1), Axial::new(1, -1));
    }

    #[test]
    fn test_axial_roundtrip() {
        for y in -4..8 {
            for x in -4..8 {
                let coord = HexCoord::new(x, y);
                assert_eq!(HexCoord::from_axial(coord.to_axial()), coord);
            }
        }
    }

    #[test]
    fn test_distance_same_hex() {
        let coord = HexCoord::new(5, 5);
        assert_eq!(coord.distance(&coord), 0);
    }

    #[test]
    fn test_distance_known_values() {
        assert_eq!(HexCoord::new(0, 0).distance(&HexCoord::new(4, 4)), 6);
        assert_eq!(HexCoord::new(0, 0).distance(&HexCoord::new(4, 0)), 4);
        assert_eq!(HexCoord::new(0, 0).distance(&HexCoord::new(0, 4)), 4);
        assert_eq!(HexCoord::new(2, 3).distance(&HexCoord::new(0, 0)), 4);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = HexCoord::new(1, 7);
        let b = HexCoord::new(6, 2);
        assert_eq!(a.distance(&b), b.distance(&a));
    }

    #[test]
    fn test_even_row_neighbors() {
        let coord = HexCoord::new(4, 2);
        let neighbors = coord.neighbors();
        assert_eq!(neighbors.len(), 6);
        assert!(neighbors.contains(&HexCoord::new(3, 1)));
        assert!(neighbors.contains(&HexCoord::new(4, 1)));
        assert!(neighbors.contains(&HexCoord::new(5, 2)));
        assert!(neighbors.contains(&HexCoord::new(4, 3)));
        assert!(neighbors.contains(&HexCoord::new(3, 3)));
        assert!(neighbors.contains(&HexCoord::new(3, 2)));
    }

    #[test]
    fn test_odd_row_neighbors() {
        let coord = HexCoord::new(4, 3);
        let neighbors = coord.neighbors();
        assert_eq!(neighbors.len(), 6);
        assert!(neighbors.contains(&HexCoord::new(4, 2)));
        assert!(neighbors.contains(&HexCoord::new(5, 2)));
        assert!(neighbors.contains(&HexCoord::new(5, 3)));
        assert!(neighbors.contains(&HexCoord::new(5, 4)));
        assert!(neighbors.contains(&HexCoord::new(4, 4)));
        assert!(neighbors.contains(&HexCoord::new(3, 3)));
    }

    #[test]
    fn test_neighbors_distinct_for_both_parities() {
        for row in [2, 3] {
            let coord = HexCoord::new(5, row);
            let mut neighbors = coord.neighbors().to_vec();
            neighbors.sort();
            neighbors.dedup();
            assert_eq!(neighbors.len(), 6);
            assert!(!neighbors.contains(&coord));
        }
    }

    #[test]
    fn test_neighbors_at_distance_one() {
        for row in [4, 5, -1] {
            let coord = HexCoord::new(5, row);
            for neighbor in coord.neighbors() {
                assert_eq!(coord.distance(&neighbor), 1, "{} -> {}", coord, neighbor);
            }
        }
    }

    #[test]
    fn test_adjacency_symmetric() {
        for row in [0, 1] {
            let coord = HexCoord::new(6, row + 6);
            for neighbor in coord.neighbors() {
                assert!(
                    neighbor.neighbors().contains(&coord),
                    "{} is adjacent to {} but not the reverse",
                    neighbor,
                    coord
                );
            }
        }
    }

    #[test]
    fn test_neighbor_offsets_parity() {
        assert_eq!(neighbor_offsets(0), &EVEN_ROW_NEIGHBORS);
        assert_eq!(neighbor_offsets(7), &ODD_ROW_NEIGHBORS);
        assert_eq!(neighbor_offsets(-2), &EVEN_ROW_NEIGHBORS);
        assert_eq!(neighbor_offsets(-3), &ODD_ROW_NEIGHBORS);
    }

    #[test]
    fn test_in_bounds() {
        let coord = HexCoord::new(5, 5);
        assert!(coord.in_bounds(10, 10));
        assert!(!coord.in_bounds(5, 5));
        assert!(!HexCoord::new(-1, 0).in_bounds(10, 10));
        assert!(!HexCoord::new(0, -1).in_bounds(10, 10));
    }

    #[test]
    fn test_row_major_ordering() {
        let mut coords = vec![HexCoord::new(2, 1), HexCoord::new(0, 2), HexCoord::new(3, 0)];
        coords.sort();
        assert_eq!(
            coords,
            vec![HexCoord::new(3, 0), HexCoord::new(2, 1), HexCoord::new(0, 2)]
        );
    }

    #[test]
    fn test_display() {
        let coord = HexCoord::new(3, 7);
        assert_eq!(format!("{}", coord), "(3, 7)");
    }
}
