use glam::DVec2;
use tiny_core::constants::GRID_CELL_SIDE;
use tiny_core::{Result, SimError};

/// Uniform cell index over the periodic box.
///
/// Every cell holds at most one particle index. When several particles fall
/// into the same cell only the last one published is kept, so dense packings
/// can hide a few pairs from the neighbor scan. With unit cells and unit
/// radii this rarely happens for non-overlapping particles.
#[derive(Debug, Clone)]
pub struct SpatialGrid {
    cols: usize,
    rows: usize,
    box_width: f64,
    box_height: f64,
    cell_width: f64,
    cell_height: f64,
    cells: Vec<Option<usize>>,
}

impl SpatialGrid {
    /// Grid covering a `box_width` x `box_height` box with nominal unit cells.
    /// Box dimensions must be positive.
    ///
    /// Fails instead of aborting when the cell count overflows or the cell
    /// array cannot be allocated.
    pub fn new(box_width: f64, box_height: f64) -> Result<Self> {
        let (cols, rows) = Self::dimensions_for(box_width, box_height);
        let cell_count = cols.checked_mul(rows).ok_or_else(|| {
            SimError::InvalidConfig(format!(
                "box {box_width}x{box_height} needs more grid cells than fit in memory"
            ))
        })?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(cell_count)?;
        cells.resize(cell_count, None);

        Ok(Self {
            cols,
            rows,
            box_width,
            box_height,
            cell_width: box_width / cols as f64,
            cell_height: box_height / rows as f64,
            cells,
        })
    }

    /// Column and row counts a box of this size gets
    pub fn dimensions_for(box_width: f64, box_height: f64) -> (usize, usize) {
        let cols = (box_width / GRID_CELL_SIDE).ceil().max(1.0) as usize;
        let rows = (box_height / GRID_CELL_SIDE).ceil().max(1.0) as usize;
        (cols, rows)
    }

    /// Largest particle count the grid accepts
    pub fn capacity(&self) -> usize {
        self.cols * self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Cell `(col, row)` containing `position`. Positions on or past the box
    /// edge wrap around.
    pub fn cell_of(&self, position: DVec2) -> (usize, usize) {
        let nx = position.x / self.box_width + 0.5;
        let ny = position.y / self.box_height + 0.5;
        let col = ((nx * self.cols as f64).floor() as i64).rem_euclid(self.cols as i64);
        let row = ((ny * self.rows as f64).floor() as i64).rem_euclid(self.rows as i64);
        (col as usize, row as usize)
    }

    /// Make `index` the representative of its cell, replacing any previous one
    pub fn publish(&mut self, col: usize, row: usize, index: usize) {
        let cell = row * self.cols + col;
        self.cells[cell] = Some(index);
    }

    pub fn occupant(&self, col: usize, row: usize) -> Option<usize> {
        self.cells[row * self.cols + col]
    }

    /// Number of cells to scan in each direction to cover `range`
    pub fn search_radius(&self, range: f64) -> usize {
        (range / self.cell_width.min(self.cell_height)).ceil().max(0.0) as usize
    }

    /// Occupants of the square block of cells within `radius` of `(col, row)`.
    ///
    /// The block wraps around the box; when it is wider than the grid every
    /// cell is visited exactly once.
    pub fn neighbors(
        &self,
        col: usize,
        row: usize,
        radius: usize,
    ) -> impl Iterator<Item = usize> + '_ {
        let (col_start, col_span) = wrapped_span(col, radius, self.cols);
        let (row_start, row_span) = wrapped_span(row, radius, self.rows);
        (0..row_span).flat_map(move |dy| {
            let row_offset = ((row_start + dy) % self.rows) * self.cols;
            (0..col_span).filter_map(move |dx| self.cells[row_offset + (col_start + dx) % self.cols])
        })
    }
}

/// First cell and cell count of a wrapped window `center ± radius`
fn wrapped_span(center: usize, radius: usize, count: usize) -> (usize, usize) {
    let span = radius.saturating_mul(2).saturating_add(1);
    if span >= count {
        (0, count)
    } else {
        ((center + count - radius) % count, span)
    }
}
