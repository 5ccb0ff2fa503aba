//! Tile grid the play state collides against and draws underneath entities.

use cove_core::{Color, Rect, Vec2};

use crate::error::{PlayError, PlayResult};

/// A single map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    /// Walkable grass.
    Grass,
    /// Walkable sand.
    Sand,
    /// Impassable water.
    Water,
    /// Impassable rock or wall.
    Rock,
}

impl Tile {
    /// Parse a map character: `.` grass, `,` sand, `~` water, `#` rock.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Self::Grass),
            ',' => Some(Self::Sand),
            '~' => Some(Self::Water),
            '#' => Some(Self::Rock),
            _ => None,
        }
    }

    /// Whether entities with static collision are blocked by this tile.
    pub fn is_solid(self) -> bool {
        matches!(self, Self::Water | Self::Rock)
    }

    /// Fill color used when drawing the tile.
    pub fn color(self) -> Color {
        match self {
            Self::Grass => Color::rgb(0x5a, 0x9e, 0x4b),
            Self::Sand => Color::rgb(0xd8, 0xc8, 0x8c),
            Self::Water => Color::rgb(0x3a, 0x6e, 0xb5),
            Self::Rock => Color::rgb(0x55, 0x55, 0x60),
        }
    }
}

/// Rectangular grid of tiles in world units, one unit per tile.
#[derive(Debug, Clone)]
pub struct TileMap {
    name: String,
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

const COOL_ISLAND: &[&str] = &[
    "~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    "~,,,,,,,,,,,,,,,,,,,,,,,,,,~",
    "~,.........................~",
    "~,.........................~",
    "~,...####..................~",
    "~,...####.........~~~......~",
    "~,...............~~~~~.....~",
    "~,................~~~......~",
    "~,.........................~",
    "~,.........................~",
    "~,.......#.................~",
    "~,.........................~",
    "~,.........................~",
    "~,...............####......~",
    "~,.........................~",
    "~,,,,,,,,,,,,,,,,,,,,,,,,,,~",
    "~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
];

impl TileMap {
    /// Build a map from rows of tile characters (see [`Tile::from_char`]).
    ///
    /// Every row must have the same, non-zero length.
    pub fn from_rows(name: impl Into<String>, rows: &[&str]) -> PlayResult<Self> {
        let name = name.into();
        let width = rows.first().map_or(0, |r| r.chars().count());
        if width == 0 {
            return Err(PlayError::InvalidMap(format!("map '{name}' has no tiles")));
        }

        let mut tiles = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let len = row.chars().count();
            if len != width {
                return Err(PlayError::InvalidMap(format!(
                    "map '{name}' row {y} has {len} tiles, expected {width}"
                )));
            }
            for (x, c) in row.chars().enumerate() {
                let tile = Tile::from_char(c).ok_or_else(|| {
                    PlayError::InvalidMap(format!("map '{name}' has unknown tile '{c}' at ({x}, {y})"))
                })?;
                tiles.push(tile);
            }
        }

        Ok(Self {
            name,
            width,
            height: rows.len(),
            tiles,
        })
    }

    /// The island the demo session plays on.
    pub fn cool_island() -> PlayResult<Self> {
        Self::from_rows("Cool Island", COOL_ISLAND)
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Width in tiles.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in tiles.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The tile at `(x, y)`, or `None` outside the map.
    pub fn tile(&self, x: i64, y: i64) -> Option<Tile> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        if x >= self.width || y >= self.height {
            return None;
        }
        self.tiles.get(y * self.width + x).copied()
    }

    /// Whether `(x, y)` blocks movement. Everything outside the map does.
    pub fn is_solid(&self, x: i64, y: i64) -> bool {
        self.tile(x, y).is_none_or(Tile::is_solid)
    }

    /// World-space rectangles of every solid tile.
    pub fn solid_rects(&self) -> Vec<Rect> {
        self.tiles()
            .filter(|(_, tile)| tile.is_solid())
            .map(|(pos, _)| Rect::new(pos.x, pos.y, 1.0, 1.0))
            .collect()
    }

    /// Whether `area` overlaps any solid tile or leaves the map.
    pub fn overlaps_solid(&self, area: &Rect) -> bool {
        let x0 = area.x.floor() as i64;
        let y0 = area.y.floor() as i64;
        let x1 = area.right().floor() as i64;
        let y1 = area.bottom().floor() as i64;
        (y0..=y1).any(|y| {
            (x0..=x1).any(|x| {
                self.is_solid(x, y) && Rect::new(x as f64, y as f64, 1.0, 1.0).intersects(area)
            })
        })
    }

    /// Every tile with its top-left corner, row by row.
    pub fn tiles(&self) -> impl Iterator<Item = (Vec2, Tile)> + '_ {
        self.tiles.iter().enumerate().map(|(i, tile)| {
            let x = (i % self.width) as f64;
            let y = (i / self.width) as f64;
            (Vec2::new(x, y), *tile)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows() {
        let map = TileMap::from_rows("t", &["#.", ".~"]).unwrap();
        assert_eq!(map.width(), 2);
        assert_eq!(map.height(), 2);
        assert_eq!(map.tile(0, 0), Some(Tile::Rock));
        assert_eq!(map.tile(1, 1), Some(Tile::Water));
        assert!(!map.is_solid(1, 0));
    }

    #[test]
    fn outside_is_solid() {
        let map = TileMap::from_rows("t", &["..", ".."]).unwrap();
        assert!(map.is_solid(-1, 0));
        assert!(map.is_solid(2, 0));
        assert!(map.is_solid(0, 5));
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = TileMap::from_rows("t", &["...", ".."]).unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn empty_map_rejected() {
        assert!(TileMap::from_rows("t", &[]).is_err());
        assert!(TileMap::from_rows("t", &[""]).is_err());
    }

    #[test]
    fn unknown_tile_rejected() {
        assert!(TileMap::from_rows("t", &[".x"]).is_err());
    }

    #[test]
    fn overlap_is_strict() {
        let map = TileMap::from_rows("t", &["...", ".#.", "..."]).unwrap();
        // Touching the rock's left edge is not an overlap.
        assert!(!map.overlaps_solid(&Rect::new(0.0, 1.0, 1.0, 1.0)));
        assert!(map.overlaps_solid(&Rect::new(0.5, 1.0, 1.0, 1.0)));
        assert!(!map.overlaps_solid(&Rect::new(0.25, 0.25, 0.5, 0.5)));
    }

    #[test]
    fn solid_rects_cover_solid_tiles() {
        let map = TileMap::from_rows("t", &["#.", ".~"]).unwrap();
        let rects = map.solid_rects();
        assert_eq!(
            rects,
            vec![Rect::new(0.0, 0.0, 1.0, 1.0), Rect::new(1.0, 1.0, 1.0, 1.0)]
        );
    }

    #[test]
    fn cool_island_is_ringed_by_water() {
        let map = TileMap::cool_island().unwrap();
        assert_eq!(map.name(), "Cool Island");
        for x in 0..map.width() as i64 {
            assert!(map.is_solid(x, 0));
            assert!(map.is_solid(x, map.height() as i64 - 1));
        }
        // Scripted moves in the demo end on this tile.
        assert!(!map.is_solid(1, 1));
    }
}
