use macroquad::rand;

use crate::config::Config;
use crate::grid::Cell;

/// Board geometry: outer window dimensions, a boundary margin framing the
/// playable interior, and the block size every position is aligned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pub outer_width: i32,
    pub outer_height: i32,
    pub cell_size: i32,
    pub margin: i32,
}

impl Board {
    pub fn from_config(config: &Config) -> Self {
        Self {
            outer_width: config.outer_width,
            outer_height: config.outer_height,
            cell_size: config.cell_size,
            margin: config.boundary_margin,
        }
    }

    /// A cell counts as interior only strictly inside the margin frame;
    /// a cell touching the boundary line is out of bounds.
    pub fn is_interior(&self, cell: Cell) -> bool {
        self.margin < cell.x
            && cell.x < self.outer_width - self.margin - self.cell_size
            && self.margin < cell.y
            && cell.y < self.outer_height - self.margin - self.cell_size
    }

    /// Uniformly random interior cell. Both coordinate bounds are inclusive,
    /// so the half-open `gen_range` gets +1 on the upper end.
    pub fn random_interior_cell(&self) -> Cell {
        let lo_x = (self.margin + self.cell_size) / self.cell_size;
        let hi_x = (self.outer_width - self.margin - self.cell_size) / self.cell_size;
        let lo_y = (self.margin + self.cell_size) / self.cell_size;
        let hi_y = (self.outer_height - self.margin - self.cell_size) / self.cell_size;
        Cell::new(
            rand::gen_range(lo_x, hi_x + 1) * self.cell_size,
            rand::gen_range(lo_y, hi_y + 1) * self.cell_size,
        )
    }

    /// Center of the board, where the snake spawns.
    pub fn center(&self) -> Cell {
        Cell::new(self.outer_width / 2, self.outer_height / 2)
    }
}
