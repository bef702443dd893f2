use crate::grid::{Cell, Direction};

/// The snake body, head first, plus its current movement direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    pub body: Vec<Cell>,
    pub direction: Direction,
}

impl Snake {
    /// Lay out `length` segments starting at `head`, trailing away from the
    /// movement direction.
    pub fn new(head: Cell, direction: Direction, length: usize, cell_size: i32) -> Self {
        let (dx, dy) = direction.delta();
        let body = (0..length as i32)
            .map(|i| Cell::new(head.x - dx * cell_size * i, head.y - dy * cell_size * i))
            .collect();
        Self { body, direction }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Cell the head would move into on the next tick.
    pub fn next_head(&self, cell_size: i32) -> Cell {
        self.head().step(self.direction, cell_size)
    }

    /// Apply a direction change, rejecting an exact reversal. Returns whether
    /// the change took. Accepted changes only affect the next computed head.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(self.direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// True iff `new_head` lands on any current segment. The tail still
    /// counts: collision is tested before tail removal, so moving into the
    /// cell the tail is vacating this tick ends the game.
    pub fn self_collides(&self, new_head: Cell) -> bool {
        self.body.contains(&new_head)
    }

    pub fn push_head(&mut self, new_head: Cell) {
        self.body.insert(0, new_head);
    }

    pub fn drop_tail(&mut self) {
        self.body.pop();
    }
}
