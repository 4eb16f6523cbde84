//! Text layouts for pursuit boards.
//!
//! ```text
//! %%%%%%%
//! %P...G%
//! %.%%%.%
//! %.....%
//! %%%%%%%
//! ```
//!
//! `%` is a wall, `.` a pellet, `P` the runner, `G` a chaser and a space an
//! empty floor cell. Rows are read top to bottom; chasers are numbered in
//! reading order starting at agent 1.

use thiserror::Error;
use tracing::debug;

/// A cell on the board. `y` grows downwards (row index in the layout text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn manhattan(&self, other: &Pos) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Errors raised while parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("Layout is empty")]
    Empty,

    #[error("Row {row} has width {found}, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Unknown tile '{tile}' at row {row}, column {col}")]
    UnknownTile { tile: char, row: usize, col: usize },

    #[error("Layout needs exactly one runner 'P', found {0}")]
    RunnerCount(usize),

    #[error("Layout has no pellets")]
    NoPellets,

    #[error("Unknown layout '{0}'")]
    UnknownLayout(String),
}

/// Walls of a board. Positions outside the grid count as walls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    walls: Vec<bool>,
}

impl Grid {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_wall(&self, pos: Pos) -> bool {
        if pos.x >= self.width || pos.y >= self.height {
            return true;
        }
        self.walls[pos.y * self.width + pos.x]
    }
}

/// A parsed layout: the grid plus starting positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub grid: Grid,
    pub runner: Pos,
    pub chasers: Vec<Pos>,
    pub pellets: Vec<Pos>,
}

impl Layout {
    /// Parse a layout from text. Leading and trailing blank lines are ignored.
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .skip_while(|line| line.trim().is_empty())
            .collect();
        let rows: Vec<&str> = match rows.iter().rposition(|line| !line.trim().is_empty()) {
            Some(last) => rows[..=last].to_vec(),
            None => return Err(LayoutError::Empty),
        };

        let width = rows[0].chars().count();
        let height = rows.len();
        let mut walls = Vec::with_capacity(width * height);
        let mut runners = Vec::new();
        let mut chasers = Vec::new();
        let mut pellets = Vec::new();

        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(LayoutError::Ragged {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, tile) in row.chars().enumerate() {
                let pos = Pos::new(x, y);
                walls.push(tile == '%');
                match tile {
                    '%' | ' ' => {}
                    '.' => pellets.push(pos),
                    'P' => runners.push(pos),
                    'G' => chasers.push(pos),
                    _ => return Err(LayoutError::UnknownTile { tile, row: y, col: x }),
                }
            }
        }

        if runners.len() != 1 {
            return Err(LayoutError::RunnerCount(runners.len()));
        }
        if pellets.is_empty() {
            return Err(LayoutError::NoPellets);
        }

        debug!(
            width,
            height,
            pellets = pellets.len(),
            chasers = chasers.len(),
            "Parsed layout"
        );

        Ok(Self {
            grid: Grid {
                width,
                height,
                walls,
            },
            runner: runners[0],
            chasers,
            pellets,
        })
    }

    /// Look up one of the built-in layouts by name.
    pub fn builtin(name: &str) -> Result<Self, LayoutError> {
        let text = BUILTIN
            .iter()
            .find(|(builtin, _)| *builtin == name)
            .map(|(_, text)| *text)
            .ok_or_else(|| LayoutError::UnknownLayout(name.to_string()))?;
        Self::parse(text)
    }

    /// Number of agents on this layout (runner plus chasers).
    pub fn num_agents(&self) -> usize {
        1 + self.chasers.len()
    }
}

const TINY: &str = "
%%%%%%
%P..G%
%%%%%%
";

const CORRIDOR: &str = "
%%%%%%%
%P...G%
%.%%%.%
%.....%
%%%%%%%
";

const OPEN: &str = "
%%%%%%%%%
%P.....G%
%.%%.%%.%
%.......%
%.%%.%%.%
%G.....%%
%%%%%%%%%
";

const TRAPPED: &str = "
%%%%%%%%
%G.P..G%
%%%%%%%%
";

const BUILTIN: [(&str, &str); 4] = [
    ("tiny", TINY),
    ("corridor", CORRIDOR),
    ("open", OPEN),
    ("trapped", TRAPPED),
];

/// Names accepted by [`Layout::builtin`].
pub const BUILTIN_NAMES: [&str; 4] = ["tiny", "corridor", "open", "trapped"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_corridor() {
        let layout = Layout::builtin("corridor").unwrap();
        assert_eq!(layout.grid.width(), 7);
        assert_eq!(layout.grid.height(), 5);
        assert_eq!(layout.runner, Pos::new(1, 1));
        assert_eq!(layout.chasers, vec![Pos::new(5, 1)]);
        assert_eq!(layout.pellets.len(), 10);
        assert_eq!(layout.num_agents(), 2);
        assert!(layout.grid.is_wall(Pos::new(0, 0)));
        assert!(layout.grid.is_wall(Pos::new(2, 2)));
        assert!(!layout.grid.is_wall(Pos::new(1, 2)));
        assert!(layout.grid.is_wall(Pos::new(7, 1)));
    }

    #[test]
    fn test_every_builtin_parses() {
        for name in BUILTIN_NAMES {
            let layout = Layout::builtin(name).unwrap();
            assert!(layout.num_agents() >= 2, "{}", name);
        }
    }

    #[test]
    fn test_chasers_in_reading_order() {
        let layout = Layout::builtin("open").unwrap();
        assert_eq!(layout.chasers, vec![Pos::new(7, 1), Pos::new(1, 5)]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Layout::parse("\n  \n"), Err(LayoutError::Empty));
        assert_eq!(
            Layout::parse("%%%\n%P.%\n%%%"),
            Err(LayoutError::Ragged {
                row: 1,
                expected: 3,
                found: 4
            })
        );
        assert_eq!(
            Layout::parse("%%%%\n%Px%\n%%%%"),
            Err(LayoutError::UnknownTile {
                tile: 'x',
                row: 1,
                col: 2
            })
        );
        assert_eq!(
            Layout::parse("%%%%\n%..%\n%%%%"),
            Err(LayoutError::RunnerCount(0))
        );
        assert_eq!(
            Layout::parse("%%%%\n%PG%\n%%%%"),
            Err(LayoutError::NoPellets)
        );
    }

    #[test]
    fn test_unknown_builtin() {
        let err = Layout::builtin("maze").unwrap_err();
        assert_eq!(err, LayoutError::UnknownLayout("maze".to_string()));
        assert!(err.to_string().contains("maze"));
    }

    #[test]
    fn test_manhattan() {
        assert_eq!(Pos::new(1, 1).manhattan(&Pos::new(4, 3)), 5);
        assert_eq!(Pos::new(4, 3).manhattan(&Pos::new(1, 1)), 5);
    }
}
