use std::{
    collections::HashSet,
    fmt,
    io::{Stdout, Write},
};

use crossterm::{
    cursor, queue,
    style::{self, Color, Stylize},
    terminal::{self, ClearType},
};

use crate::maze::{Direction, Grid, Position};

/// What a single terminal tile of the drawn maze shows.
///
/// A `rows` x `cols` grid is drawn as `(2 * rows + 1) x (2 * cols + 1)` tiles: cells sit at
/// odd coordinates, walls and passages between them, posts at even/even.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Empty,
    Start,
    Goal,
    /// Part of the found path.
    Route,
}

impl Tile {
    /// The width of each tile when rendered, in character widths.
    pub const TILE_WIDTH: u16 = 2;

    fn plain(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Empty => ' ',
            Tile::Start => 'S',
            Tile::Goal => 'G',
            Tile::Route => '.',
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Tile::Wall => "⬜".with(Color::White),
            Tile::Empty => "  ".with(Color::Reset),
            Tile::Start => "🟩".with(Color::Green),
            Tile::Goal => "🟥".with(Color::Red),
            Tile::Route => "🟨".with(Color::Yellow),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Tile::TILE_WIDTH as usize,
                "Each tile must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Lays out the tiles for `grid` with `path` highlighted.
pub fn layout(grid: &Grid, path: &[Position]) -> Vec<Vec<Tile>> {
    let on_path: HashSet<Position> = path.iter().copied().collect();
    let steps: HashSet<(Position, Position)> = path
        .windows(2)
        .flat_map(|pair| [(pair[0], pair[1]), (pair[1], pair[0])])
        .collect();
    let goal = (grid.rows() - 1, grid.cols() - 1);

    let cell_tile = |pos: Position| {
        if pos == (0, 0) {
            Tile::Start
        } else if pos == goal {
            Tile::Goal
        } else if on_path.contains(&pos) {
            Tile::Route
        } else {
            Tile::Empty
        }
    };
    // Passage between `pos` and its neighbor on `dir`; boundary walls have no neighbor
    let wall_tile = |pos: Position, dir: Direction| {
        if grid.has_wall(pos, dir) {
            return Tile::Wall;
        }
        match grid.neighbor(pos, dir) {
            Some(next) if steps.contains(&(pos, next)) => Tile::Route,
            _ => Tile::Empty,
        }
    };

    let height = grid.rows() * 2 + 1;
    let width = grid.cols() * 2 + 1;
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| match (y % 2, x % 2) {
                    (1, 1) => cell_tile((y / 2, x / 2)),
                    // Left wall of the cell to the right, or right wall of the last cell
                    (1, 0) if x == width - 1 => wall_tile((y / 2, x / 2 - 1), Direction::Right),
                    (1, 0) => wall_tile((y / 2, x / 2), Direction::Left),
                    (0, 1) if y == height - 1 => wall_tile((y / 2 - 1, x / 2), Direction::Bottom),
                    (0, 1) => wall_tile((y / 2, x / 2), Direction::Top),
                    _ => Tile::Wall,
                })
                .collect()
        })
        .collect()
}

/// Plain ASCII drawing, one character per tile.
pub fn render_plain(grid: &Grid, path: &[Position]) -> String {
    layout(grid, path)
        .into_iter()
        .map(|row| row.into_iter().map(Tile::plain).collect::<String>() + "\n")
        .collect()
}

pub struct Renderer {
    /// Standard output handle to write to the terminal
    stdout: Stdout,
    /// Print ASCII instead of styled glyphs
    plain: bool,
    /// Height of the last frame, so the cursor can be parked below it
    last_height: u16,
}

impl Renderer {
    pub fn new(plain: bool) -> Self {
        Self {
            stdout: std::io::stdout(),
            plain,
            last_height: 0,
        }
    }

    /// Redraws the whole maze from the top-left corner of the terminal.
    pub fn draw(&mut self, grid: &Grid, path: &[Position]) -> std::io::Result<()> {
        queue!(
            self.stdout,
            cursor::Hide,
            cursor::MoveTo(0, 0),
            terminal::Clear(ClearType::FromCursorDown)
        )?;
        if self.plain {
            for line in render_plain(grid, path).lines() {
                queue!(self.stdout, style::Print(line), style::Print("\r\n"))?;
            }
        } else {
            for row in layout(grid, path) {
                for tile in row {
                    queue!(self.stdout, style::Print(tile))?;
                }
                queue!(self.stdout, style::Print("\r\n"))?;
            }
        }
        self.last_height = u16::try_from(grid.rows() * 2 + 1).unwrap_or(u16::MAX);
        self.stdout.flush()
    }

    /// Prints a line of text below the last drawn frame.
    pub fn print_line(&mut self, text: &str) -> std::io::Result<()> {
        queue!(self.stdout, style::Print(text), style::Print("\r\n"))?;
        self.stdout.flush()
    }

    /// Restores the cursor once drawing is over.
    pub fn finish(&mut self) -> std::io::Result<()> {
        queue!(self.stdout, cursor::MoveTo(0, self.last_height), cursor::Show)?;
        self.stdout.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_walled_single_cell() {
        let grid = Grid::create_empty(1, 1).unwrap();
        assert_eq!(render_plain(&grid, &[(0, 0)]), "###\n#S#\n###\n");
    }

    #[test]
    fn test_render_corridor_with_path() {
        let mut grid = Grid::create_empty(2, 2).unwrap();
        grid.remove_wall(0, 0, Direction::Right);
        grid.remove_wall(0, 1, Direction::Bottom);
        grid.remove_wall(1, 0, Direction::Right);
        let path = [(0, 0), (0, 1), (1, 1)];
        let expected = "\
#####
#S..#
###.#
#  G#
#####
";
        assert_eq!(render_plain(&grid, &path), expected);
    }

    #[test]
    fn test_layout_size() {
        let grid = Grid::create_empty(3, 5).unwrap();
        let tiles = layout(&grid, &[]);
        assert_eq!(tiles.len(), 7);
        assert!(tiles.iter().all(|row| row.len() == 11));
    }

    #[test]
    fn test_glyphs_are_two_columns_wide() {
        for tile in [Tile::Wall, Tile::Empty, Tile::Start, Tile::Goal, Tile::Route] {
            // Display asserts the width in debug builds
            let _ = tile.to_string();
        }
    }
}
