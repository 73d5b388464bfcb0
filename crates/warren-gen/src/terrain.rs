//! Weighted random terrain fill.

use std::fmt;

use rand::Rng;
use rand::RngExt;
use rand::seq::IndexedRandom;

use warren_core::{Coord, GridCell, Maze};

use crate::MazeGen;

/// Errors from [`MazeGen::random_terrain`].
#[derive(Debug, Clone, PartialEq)]
pub enum TerrainError {
    /// Wall density outside `[0, 1]`.
    InvalidDensity(f32),
    /// The pool has no wall cells but the density requires drawing some.
    NoWallTiles,
    /// The pool has no passage cells but the density requires drawing some.
    NoPassageTiles,
}

impl fmt::Display for TerrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDensity(d) => {
                write!(f, "wall density must be within [0, 1], got {d}")
            }
            Self::NoWallTiles => write!(f, "cell pool contains no wall cells"),
            Self::NoPassageTiles => write!(f, "cell pool contains no passage cells"),
        }
    }
}

impl std::error::Error for TerrainError {}

impl<R: Rng> MazeGen<R> {
    /// Fill the maze with cells drawn at random from `pool`.
    ///
    /// The pool is partitioned by the wall flag. Each grid cell first flips
    /// a coin weighted by `wall_density`, then draws from the matching
    /// subset with probability proportional to cell weight; a subset whose
    /// weights are all zero falls back to a uniform draw.
    ///
    /// Fails with [`TerrainError::InvalidDensity`] when `wall_density` lies
    /// outside `[0, 1]`, and with [`TerrainError::NoWallTiles`] /
    /// [`TerrainError::NoPassageTiles`] when a subset the density can
    /// select from is empty. The maze is untouched on failure.
    pub fn random_terrain<C>(
        &mut self,
        maze: &mut Maze<C>,
        pool: &[C],
        wall_density: f32,
    ) -> Result<(), TerrainError>
    where
        C: GridCell + Clone,
    {
        if !(0.0..=1.0).contains(&wall_density) {
            return Err(TerrainError::InvalidDensity(wall_density));
        }
        let walls: Vec<&C> = pool.iter().filter(|c| c.is_wall()).collect();
        let passages: Vec<&C> = pool.iter().filter(|c| !c.is_wall()).collect();
        if wall_density > 0.0 && walls.is_empty() {
            return Err(TerrainError::NoWallTiles);
        }
        if wall_density < 1.0 && passages.is_empty() {
            return Err(TerrainError::NoPassageTiles);
        }

        for row in 0..maze.height() {
            for col in 0..maze.width() {
                let subset = if self.rng.random_bool(wall_density as f64) {
                    &walls
                } else {
                    &passages
                };
                let drawn = match subset.choose_weighted(&mut self.rng, |c| c.weight()) {
                    Ok(cell) => Some(cell),
                    // All weights zero in this subset: uniform draw.
                    Err(_) => subset.choose(&mut self.rng),
                };
                if let Some(&cell) = drawn {
                    *maze.get_unchecked_mut(Coord::new(row, col)) = cell.clone();
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use warren_core::{Color, Tile};

    fn seeded() -> MazeGen<StdRng> {
        MazeGen::with_rng(StdRng::seed_from_u64(0x5EED))
    }

    fn pool() -> Vec<Tile> {
        vec![
            Tile::wall('#', Color::Red).with_weight(5.0),
            Tile::wall('~', Color::Blue).with_weight(16.0),
            Tile::passage(' ', Color::Gray).with_weight(20.0),
            Tile::passage('T', Color::Green).with_weight(3.0),
        ]
    }

    #[test]
    fn density_zero_yields_no_walls() {
        let mut maze = Maze::<Tile>::new(20, 20).unwrap();
        seeded().random_terrain(&mut maze, &pool(), 0.0).unwrap();
        assert!(maze.iter().all(|(_, c)| !c.is_wall()));
    }

    #[test]
    fn density_one_yields_no_passages() {
        let mut maze = Maze::<Tile>::new(20, 20).unwrap();
        seeded().random_terrain(&mut maze, &pool(), 1.0).unwrap();
        assert!(maze.iter().all(|(_, c)| c.is_wall()));
    }

    #[test]
    fn rejects_density_outside_unit_interval() {
        let mut maze = Maze::<Tile>::new(5, 5).unwrap();
        assert_eq!(
            seeded().random_terrain(&mut maze, &pool(), -0.1),
            Err(TerrainError::InvalidDensity(-0.1))
        );
        assert_eq!(
            seeded().random_terrain(&mut maze, &pool(), 1.5),
            Err(TerrainError::InvalidDensity(1.5))
        );
    }

    #[test]
    fn rejects_missing_required_subset() {
        let mut maze = Maze::<Tile>::new(5, 5).unwrap();
        let no_walls = vec![Tile::passage(' ', Color::White)];
        let no_passages = vec![Tile::wall('#', Color::Red)];
        assert_eq!(
            seeded().random_terrain(&mut maze, &no_walls, 0.5),
            Err(TerrainError::NoWallTiles)
        );
        assert_eq!(
            seeded().random_terrain(&mut maze, &no_passages, 0.5),
            Err(TerrainError::NoPassageTiles)
        );
        // A density that never touches the missing subset is fine.
        assert!(seeded().random_terrain(&mut maze, &no_walls, 0.0).is_ok());
        assert!(seeded().random_terrain(&mut maze, &no_passages, 1.0).is_ok());
    }

    #[test]
    fn zero_weights_fall_back_to_uniform() {
        let mut maze = Maze::<Tile>::new(10, 10).unwrap();
        let zero = vec![
            Tile::wall('#', Color::Red).with_weight(0.0),
            Tile::passage(' ', Color::White).with_weight(0.0),
        ];
        seeded().random_terrain(&mut maze, &zero, 0.5).unwrap();
        // Every cell was still drawn from the pool.
        assert!(
            maze.iter()
                .all(|(_, c)| c.glyph() == '#' || c.glyph() == ' ')
        );
    }

    #[test]
    fn draws_only_from_the_pool() {
        let mut maze = Maze::<Tile>::new(15, 15).unwrap();
        let pool = pool();
        seeded().random_terrain(&mut maze, &pool, 0.4).unwrap();
        assert!(maze.iter().all(|(_, c)| pool.contains(c)));
    }
}
