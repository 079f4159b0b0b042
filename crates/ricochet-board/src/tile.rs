//! Quadrant tile catalog.
//!
//! Every tile is an 8x8 quadrant described in canonical orientation, i.e.
//! as if placed top-left: local x grows eastward from the board's west
//! edge, local y grows northward toward the board's north edge, so local
//! (7, 0) touches the board center. The board builder rotates the layout
//! into the other quadrants.
//!
//! Tile numbers 1 to 4 each carry one target per robot color; together the
//! four numbers cover all sixteen color/symbol pairs, and number 2 also
//! carries the cosmic wildcard. The front (`F`) and back (`B`) side of a
//! number share the target set but differ in wall layout and target
//! placement, so any selection of one tile per number yields a complete
//! board.

use ricochet_core::Color::{self, Blue, Green, Red, Yellow};
use ricochet_core::Direction::{self, East, North, South, West};
use ricochet_core::Symbol::{self, Cosmic, Moon, Pyramid, Saturn, Star};
use ricochet_core::{Error, Result};

/// One quadrant tile in canonical orientation.
///
/// Wall segments are `(local_x, local_y, side)`; targets are
/// `(local_x, local_y, symbol, color)` with `None` marking the cosmic
/// wildcard. Target cells sit inside an L of two perpendicular walls,
/// which the wall list spells out explicitly.
#[derive(Debug)]
pub struct TileDef {
    pub id: &'static str,
    pub number: u8,
    pub walls: &'static [(u8, u8, Direction)],
    pub targets: &'static [(u8, u8, Symbol, Option<Color>)],
}

/// Looks a tile up by id, e.g. `"A3F"`.
pub fn lookup(id: &str) -> Result<&'static TileDef> {
    TILES
        .iter()
        .find(|t| t.id.eq_ignore_ascii_case(id))
        .ok_or_else(|| Error::UnknownTile(id.to_string()))
}

static TILES: [TileDef; 8] = [
    TileDef {
        id: "A1F",
        number: 1,
        walls: &[
            (3, 7, East),
            (0, 5, South),
            // yellow star
            (1, 1, North),
            (1, 1, East),
            // red moon
            (5, 5, South),
            (5, 5, West),
            // green pyramid
            (2, 4, North),
            (2, 4, West),
            // blue saturn
            (6, 2, South),
            (6, 2, East),
        ],
        targets: &[
            (1, 1, Star, Some(Yellow)),
            (5, 5, Moon, Some(Red)),
            (2, 4, Pyramid, Some(Green)),
            (6, 2, Saturn, Some(Blue)),
        ],
    },
    TileDef {
        id: "A1B",
        number: 1,
        walls: &[
            (5, 7, West),
            (0, 2, North),
            (6, 5, North),
            (6, 5, West),
            (2, 2, South),
            (2, 2, East),
            (4, 1, South),
            (4, 1, West),
            (1, 5, North),
            (1, 5, East),
        ],
        targets: &[
            (6, 5, Star, Some(Yellow)),
            (2, 2, Moon, Some(Red)),
            (4, 1, Pyramid, Some(Green)),
            (1, 5, Saturn, Some(Blue)),
        ],
    },
    TileDef {
        id: "A2F",
        number: 2,
        walls: &[
            (2, 7, East),
            (0, 4, South),
            (5, 2, North),
            (5, 2, East),
            (1, 3, South),
            (1, 3, West),
            (6, 6, North),
            (6, 6, West),
            (3, 5, South),
            (3, 5, East),
            // cosmic
            (4, 3, North),
            (4, 3, West),
        ],
        targets: &[
            (5, 2, Moon, Some(Yellow)),
            (1, 3, Saturn, Some(Red)),
            (6, 6, Star, Some(Green)),
            (3, 5, Pyramid, Some(Blue)),
            (4, 3, Cosmic, None),
        ],
    },
    TileDef {
        id: "A2B",
        number: 2,
        walls: &[
            (6, 7, West),
            (0, 1, North),
            (2, 5, South),
            (2, 5, West),
            (6, 1, North),
            (6, 1, West),
            (1, 2, North),
            (1, 2, East),
            (5, 4, South),
            (5, 4, East),
            (3, 2, South),
            (3, 2, East),
        ],
        targets: &[
            (2, 5, Moon, Some(Yellow)),
            (6, 1, Saturn, Some(Red)),
            (1, 2, Star, Some(Green)),
            (5, 4, Pyramid, Some(Blue)),
            (3, 2, Cosmic, None),
        ],
    },
    TileDef {
        id: "A3F",
        number: 3,
        walls: &[
            (4, 7, East),
            (0, 3, South),
            (2, 2, North),
            (2, 2, East),
            (6, 5, South),
            (6, 5, West),
            (1, 6, South),
            (1, 6, East),
            (5, 1, North),
            (5, 1, West),
        ],
        targets: &[
            (2, 2, Saturn, Some(Yellow)),
            (6, 5, Pyramid, Some(Red)),
            (1, 6, Moon, Some(Green)),
            (5, 1, Star, Some(Blue)),
        ],
    },
    TileDef {
        id: "A3B",
        number: 3,
        walls: &[
            (1, 7, West),
            (0, 6, North),
            (5, 5, South),
            (5, 5, East),
            (2, 3, North),
            (2, 3, West),
            (6, 2, North),
            (6, 2, East),
            (3, 6, South),
            (3, 6, West),
        ],
        targets: &[
            (5, 5, Saturn, Some(Yellow)),
            (2, 3, Pyramid, Some(Red)),
            (6, 2, Moon, Some(Green)),
            (3, 6, Star, Some(Blue)),
        ],
    },
    TileDef {
        id: "A4F",
        number: 4,
        walls: &[
            (6, 7, East),
            (0, 2, South),
            (1, 4, South),
            (1, 4, East),
            (5, 6, South),
            (5, 6, West),
            (3, 2, North),
            (3, 2, East),
            (6, 3, North),
            (6, 3, West),
        ],
        targets: &[
            (1, 4, Pyramid, Some(Yellow)),
            (5, 6, Star, Some(Red)),
            (3, 2, Saturn, Some(Green)),
            (6, 3, Moon, Some(Blue)),
        ],
    },
    TileDef {
        id: "A4B",
        number: 4,
        walls: &[
            (2, 7, West),
            (0, 5, North),
            (6, 6, North),
            (6, 6, East),
            (1, 1, South),
            (1, 1, East),
            (4, 5, North),
            (4, 5, West),
            (2, 3, South),
            (2, 3, West),
        ],
        targets: &[
            (6, 6, Pyramid, Some(Yellow)),
            (1, 1, Star, Some(Red)),
            (4, 5, Saturn, Some(Green)),
            (2, 3, Moon, Some(Blue)),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup("a3f").unwrap().id, "A3F");
        assert!(matches!(lookup("A9F"), Err(Error::UnknownTile(_))));
    }

    #[test]
    fn every_target_has_its_wall_corner() {
        for tile in &TILES {
            for &(x, y, _, _) in tile.targets {
                let sides: Vec<Direction> = tile
                    .walls
                    .iter()
                    .filter(|&&(wx, wy, _)| (wx, wy) == (x, y))
                    .map(|&(_, _, side)| side)
                    .collect();
                assert_eq!(sides.len(), 2, "{}: target ({x},{y})", tile.id);
                // perpendicular pair, not a straight double wall
                assert_ne!(
                    sides[0].index() % 2,
                    sides[1].index() % 2,
                    "{}: target ({x},{y})",
                    tile.id
                );
            }
        }
    }

    #[test]
    fn numbers_cover_all_color_symbol_pairs() {
        for side in ["F", "B"] {
            let mut pairs = Vec::new();
            let mut cosmic = 0;
            for number in 1..=4 {
                let tile = lookup(&format!("A{number}{side}")).unwrap();
                assert_eq!(tile.number, number as u8);
                for &(_, _, symbol, color) in tile.targets {
                    match color {
                        Some(color) => pairs.push((symbol, color)),
                        None => cosmic += 1,
                    }
                }
            }
            pairs.sort_by_key(|&(s, c)| (s as u8, c as u8));
            pairs.dedup();
            assert_eq!(pairs.len(), 16);
            assert_eq!(cosmic, 1);
        }
    }

    #[test]
    fn layouts_stay_inside_the_quadrant() {
        for tile in &TILES {
            for &(x, y, _) in tile.walls {
                assert!(x < 8 && y < 8, "{}: wall ({x},{y})", tile.id);
            }
            for &(x, y, _, _) in tile.targets {
                assert!(x < 8 && y < 8, "{}: target ({x},{y})", tile.id);
                // local (7,0) touches the walled-off board center
                assert!(!(x == 7 && y == 0), "{}: target on center", tile.id);
            }
        }
    }
}
