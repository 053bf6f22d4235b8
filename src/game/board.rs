pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Contents of one board slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Empty,
    Red,
    Yellow,
}

/// The 6×7 grid. Row 0 is the top (last to fill), row 5 the bottom.
///
/// Gravity invariant: in every column the empty slots are contiguous from the
/// top, because the only mutation is `drop_piece`, which always fills the
/// lowest empty slot. A column is therefore full iff its top slot is taken.
///
/// `Copy` gives the cheap value snapshots the heuristic uses for look-ahead;
/// a copied board shares no storage with the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    slots: [[Slot; COLS]; ROWS],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
}

impl Board {
    /// Create a new empty board.
    pub fn new() -> Self {
        Board {
            slots: [[Slot::Empty; COLS]; ROWS],
        }
    }

    /// Read a slot. Out-of-range coordinates read as `Empty` rather than
    /// failing; the windowed scans rely on this when probing neighbors near
    /// the edges.
    pub fn slot(&self, row: usize, col: usize) -> Slot {
        if row < ROWS && col < COLS {
            self.slots[row][col]
        } else {
            Slot::Empty
        }
    }

    /// Check if a column can take no further piece. Out-of-range columns are
    /// treated as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.slots[0][col] != Slot::Empty
    }

    /// Check if the whole board is full (the tie condition).
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// The columns that can still take a piece, in ascending order.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Drop a piece into a column; returns the row where it landed.
    /// Fails without mutating the board if the column is out of range or full.
    pub fn drop_piece(&mut self, col: usize, slot: Slot) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }
        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull);
        }

        // Lowest empty slot in this column
        for row in (0..ROWS).rev() {
            if self.slots[row][col] == Slot::Empty {
                self.slots[row][col] = slot;
                return Ok(row);
            }
        }

        unreachable!("column cannot be full if is_column_full returned false");
    }

    /// Check whether `slot` appears in four consecutive cells along any row,
    /// column, or diagonal. Scans every in-bounds window of four and returns
    /// on the first match.
    pub fn has_four_in_a_row(&self, slot: Slot) -> bool {
        if slot == Slot::Empty {
            return false;
        }

        // Horizontal
        for row in 0..ROWS {
            for col in 0..=COLS - 4 {
                if (0..4).all(|i| self.slots[row][col + i] == slot) {
                    return true;
                }
            }
        }

        // Vertical
        for col in 0..COLS {
            for row in 0..=ROWS - 4 {
                if (0..4).all(|i| self.slots[row + i][col] == slot) {
                    return true;
                }
            }
        }

        // Diagonal, descending (row and column both increasing)
        for row in 0..=ROWS - 4 {
            for col in 0..=COLS - 4 {
                if (0..4).all(|i| self.slots[row + i][col + i] == slot) {
                    return true;
                }
            }
        }

        // Diagonal, ascending (row decreasing while column increases)
        for row in 3..ROWS {
            for col in 0..=COLS - 4 {
                if (0..4).all(|i| self.slots[row - i][col + i] == slot) {
                    return true;
                }
            }
        }

        false
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
