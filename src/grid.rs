use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

/// The current classification of a cell. Identity (row, col) never changes;
/// only the role does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Empty,
    Wall,
    Start,
    Goal,
    Frontier,
    Visited,
    Path,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
}

/// A rectangular arena of cells, row-major. The cell count is fixed at
/// construction; searches read roles and neighbors but never write them.
#[derive(Debug, Clone)]
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
    cells: Vec<Vec<Role>>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        Ok(Grid {
            rows,
            cols,
            cells: vec![vec![Role::Empty; cols]; rows],
        })
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Position must be in bounds; see `contains`.
    pub fn role_of(&self, pos: Position) -> Role {
        self.cells[pos.row][pos.col]
    }

    /// Position must be in bounds; see `contains`.
    pub fn set_role(&mut self, pos: Position, role: Role) {
        self.cells[pos.row][pos.col] = role;
    }

    /// In-bounds, non-Wall orthogonal neighbors of `pos`, always in
    /// {down, up, right, left} order. The order decides which equal-cost
    /// predecessor wins during a search, so it is part of the contract.
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        let mut neighbors = Vec::with_capacity(4);
        let (row, col) = (pos.row as i64, pos.col as i64);

        for (dr, dc) in &[(1, 0), (-1, 0), (0, 1), (0, -1)] {
            let nr = row + dr;
            let nc = col + dc;

            if nr >= 0 && nr < self.rows as i64 && nc >= 0 && nc < self.cols as i64 {
                let next = Position::new(nr as usize, nc as usize);
                if self.role_of(next) != Role::Wall {
                    neighbors.push(next);
                }
            }
        }
        neighbors
    }

    /// Stamp every cell in the listed rows and columns as Wall. The demo
    /// driver passes the perimeter rows/columns to fence the arena.
    pub fn apply_border_walls(&mut self, wall_rows: &[usize], wall_cols: &[usize]) {
        for &row in wall_rows {
            if row < self.rows {
                for col in 0..self.cols {
                    self.cells[row][col] = Role::Wall;
                }
            }
        }
        for &col in wall_cols {
            if col < self.cols {
                for row in 0..self.rows {
                    self.cells[row][col] = Role::Wall;
                }
            }
        }
    }

    /// Print a visual representation of the grid.
    pub fn print_grid(&self) {
        println!("Legend: S=Start, G=Goal, #=Wall, o=Frontier, x=Visited, *=Path, .=Empty");

        // Column numbers header
        print!("   ");
        for col in 0..self.cols {
            print!("{} ", col % 10);
        }
        println!();

        for row in 0..self.rows {
            print!("{:2} ", row);
            for col in 0..self.cols {
                let ch = match self.cells[row][col] {
                    Role::Empty => '.',
                    Role::Wall => '#',
                    Role::Start => 'S',
                    Role::Goal => 'G',
                    Role::Frontier => 'o',
                    Role::Visited => 'x',
                    Role::Path => '*',
                };
                print!("{} ", ch);
            }
            println!();
        }
        println!();
    }
}
