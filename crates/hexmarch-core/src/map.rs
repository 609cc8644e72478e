//! Read-only map snapshots consumed by the searches.
//!
//! A caller builds these from live game state, hands them to a search, and
//! must not mutate them while the search runs. None of them are retained
//! after a call returns.

use crate::error::{PlannerError, Result};
use crate::hex::{neighbor_offsets, HexCoord};
use crate::types::{TerrainId, TileIndex, ZocShape};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Dimensions of a rectangular hex grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    /// Create a grid. Both dimensions must be positive and the tile count
    /// must fit the flat index space.
    pub fn new(width: i64, height: i64) -> Result<Self> {
        let invalid = || PlannerError::InvalidDimensions { width, height };
        if width <= 0 || height <= 0 {
            return Err(invalid());
        }
        let w = i32::try_from(width).map_err(|_| invalid())?;
        let h = i32::try_from(height).map_err(|_| invalid())?;
        (w as usize).checked_mul(h as usize).ok_or_else(invalid)?;
        Ok(Self {
            width: w,
            height: h,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of tiles, `width * height`.
    pub fn map_size(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check if a coordinate is within the grid.
    #[inline]
    pub fn contains(&self, coord: HexCoord) -> bool {
        coord.in_bounds(self.width, self.height)
    }

    /// Flat index of a coordinate, if it is on the grid.
    #[inline]
    pub fn index(&self, coord: HexCoord) -> Option<TileIndex> {
        if self.contains(coord) {
            Some(coord.y as usize * self.width as usize + coord.x as usize)
        } else {
            None
        }
    }

    /// Coordinate of a flat index. The index must be below `map_size()`.
    #[inline]
    pub fn coord(&self, index: TileIndex) -> HexCoord {
        let width = self.width as usize;
        HexCoord::new((index % width) as i32, (index / width) as i32)
    }

    /// Neighbors of a coordinate that lie on the grid.
    pub fn neighbors(&self, coord: HexCoord) -> impl Iterator<Item = HexCoord> + '_ {
        neighbor_offsets(coord.y)
            .iter()
            .map(move |&(dx, dy)| HexCoord::new(coord.x + dx, coord.y + dy))
            .filter(move |c| self.contains(*c))
    }

    /// Iterate over every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = HexCoord> + '_ {
        (0..self.map_size()).map(move |i| self.coord(i))
    }
}

/// Terrain id for every tile of a grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerrainGrid {
    grid: Grid,
    tiles: Vec<TerrainId>,
}

impl TerrainGrid {
    /// Wrap a flat, row-major terrain sequence. Its length must equal the tile count.
    pub fn new(grid: Grid, tiles: Vec<TerrainId>) -> Result<Self> {
        if tiles.len() != grid.map_size() {
            return Err(PlannerError::TerrainLengthMismatch {
                expected: grid.map_size(),
                actual: tiles.len(),
            });
        }
        Ok(Self { grid, tiles })
    }

    /// Create a grid filled with a single terrain (useful for testing).
    pub fn filled(grid: Grid, terrain: TerrainId) -> Self {
        Self {
            grid,
            tiles: vec![terrain; grid.map_size()],
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Terrain at a flat index.
    #[inline]
    pub fn terrain_at(&self, index: TileIndex) -> TerrainId {
        self.tiles[index]
    }

    /// Terrain at a coordinate, if it is on the grid.
    pub fn get(&self, coord: HexCoord) -> Option<TerrainId> {
        self.grid.index(coord).map(|i| self.tiles[i])
    }

    /// Replace the terrain of one tile. Returns false if the coordinate is off the grid.
    pub fn set(&mut self, coord: HexCoord, terrain: TerrainId) -> bool {
        match self.grid.index(coord) {
            Some(i) => {
                self.tiles[i] = terrain;
                true
            }
            None => false,
        }
    }

    /// The flat terrain sequence.
    pub fn tiles(&self) -> &[TerrainId] {
        &self.tiles
    }
}

/// Tiles that can never be entered, whatever their terrain.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockerSet {
    tiles: HashSet<HexCoord>,
}

impl BlockerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, coord: HexCoord) -> bool {
        self.tiles.insert(coord)
    }

    pub fn contains(&self, coord: &HexCoord) -> bool {
        self.tiles.contains(coord)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HexCoord> {
        self.tiles.iter()
    }

    /// Dense per-tile blocked flags for one search. Off-grid blockers are ignored.
    pub fn mask(&self, grid: Grid) -> Vec<bool> {
        let mut blocked = vec![false; grid.map_size()];
        for index in self.iter().filter_map(|c| grid.index(*c)) {
            blocked[index] = true;
        }
        blocked
    }
}

impl FromIterator<HexCoord> for BlockerSet {
    fn from_iter<I: IntoIterator<Item = HexCoord>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<HexCoord> for BlockerSet {
    fn extend<I: IntoIterator<Item = HexCoord>>(&mut self, iter: I) {
        for coord in iter {
            self.insert(coord);
        }
    }
}

/// Hostile Zone of Control flag for every tile of a grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZocMap {
    grid: Grid,
    controlled: Vec<bool>,
}

impl ZocMap {
    /// Wrap a flat, row-major flag sequence. Its length must equal the tile count.
    pub fn new(grid: Grid, controlled: Vec<bool>) -> Result<Self> {
        if controlled.len() != grid.map_size() {
            return Err(PlannerError::ZocLengthMismatch {
                expected: grid.map_size(),
                actual: controlled.len(),
            });
        }
        Ok(Self { grid, controlled })
    }

    /// A map with no controlled tiles.
    pub fn empty(grid: Grid) -> Self {
        Self {
            grid,
            controlled: vec![false; grid.map_size()],
        }
    }

    /// Mark the six hex neighbors of each ZOC-projecting unit.
    ///
    /// Shorthand for [`ZocMap::from_sources_shaped`] with [`ZocShape::Hex`].
    pub fn from_sources(grid: Grid, sources: impl IntoIterator<Item = HexCoord>) -> Self {
        Self::from_sources_shaped(grid, sources, ZocShape::Hex)
    }

    /// Mark the tiles around each ZOC-projecting unit, using `shape` to
    /// decide which tiles count as "around".
    ///
    /// A source's own tile is not marked by that source. Off-grid sources
    /// still project onto their on-grid surroundings.
    pub fn from_sources_shaped(
        grid: Grid,
        sources: impl IntoIterator<Item = HexCoord>,
        shape: ZocShape,
    ) -> Self {
        let mut map = Self::empty(grid);
        for source in sources {
            let marked: Vec<HexCoord> = match shape {
                ZocShape::Hex => source.neighbors().to_vec(),
                ZocShape::OffsetBox => (-1..=1)
                    .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
                    .filter(|&offset| offset != (0, 0))
                    .map(|(dx, dy)| HexCoord::new(source.x + dx, source.y + dy))
                    .collect(),
            };
            for i in marked.into_iter().filter_map(|c| grid.index(c)) {
                map.controlled[i] = true;
            }
        }
        map
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Is the tile at this flat index under hostile control?
    #[inline]
    pub fn is_controlled(&self, index: TileIndex) -> bool {
        self.controlled[index]
    }

    /// Is this coordinate under hostile control? Off-grid tiles are not.
    pub fn get(&self, coord: HexCoord) -> bool {
        self.grid.index(coord).is_some_and(|i| self.controlled[i])
    }

    pub fn set(&mut self, coord: HexCoord, controlled: bool) -> bool {
        match self.grid.index(coord) {
            Some(i) => {
                self.controlled[i] = controlled;
                true
            }
            None => false,
        }
    }

    /// Number of controlled tiles.
    pub fn controlled_count(&self) -> usize {
        self.controlled.iter().filter(|&&c| c).count()
    }
}
