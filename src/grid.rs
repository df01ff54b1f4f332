//! Arithmetic splitting for sheets laid out on a uniform grid.
//!
//! No pixels are read: cells are placed at multiples of `cell + padding`
//! starting at the top-left corner, and only cells that fit entirely inside
//! the image are returned. Boxes come back in reading order with `row`,
//! `column` and a row-major `id` already set.

use crate::bounds::{BoundingBox, SpriteId};
use crate::error::{Result, SplitError};
use serde::{Deserialize, Serialize};

/// Fixed cell size with padding between cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellLayout {
    pub cell_width: usize,
    pub cell_height: usize,
    #[serde(default)]
    pub h_padding: usize,
    #[serde(default)]
    pub v_padding: usize,
}

impl CellLayout {
    pub fn new(cell_width: usize, cell_height: usize) -> Self {
        Self {
            cell_width,
            cell_height,
            h_padding: 0,
            v_padding: 0,
        }
    }

    pub fn with_padding(mut self, h_padding: usize, v_padding: usize) -> Self {
        self.h_padding = h_padding;
        self.v_padding = v_padding;
        self
    }

    /// Cells that fit along an axis of `extent` pixels; padding is only
    /// required between cells.
    fn fit(extent: usize, cell: usize, padding: usize) -> usize {
        if extent < cell {
            0
        } else {
            (extent - cell) / (cell + padding) + 1
        }
    }

    pub fn columns(&self, width: usize) -> usize {
        Self::fit(width, self.cell_width, self.h_padding)
    }

    pub fn rows(&self, height: usize) -> usize {
        Self::fit(height, self.cell_height, self.v_padding)
    }
}

/// Split a `width x height` image into cells of a fixed size.
pub fn split_fixed(width: usize, height: usize, layout: CellLayout) -> Result<Vec<BoundingBox>> {
    if layout.cell_width == 0 || layout.cell_height == 0 {
        return Err(SplitError::InvalidGrid {
            width,
            height,
            reason: format!(
                "cell size {}x{} is empty",
                layout.cell_width, layout.cell_height
            ),
        });
    }

    let columns = layout.columns(width);
    let rows = layout.rows(height);
    let step_x = layout.cell_width + layout.h_padding;
    let step_y = layout.cell_height + layout.v_padding;

    let mut cells = Vec::with_capacity(rows * columns);
    for row in 0..rows {
        for column in 0..columns {
            let mut cell = BoundingBox::new(
                column * step_x,
                row * step_y,
                layout.cell_width,
                layout.cell_height,
            )?
            .with_cell(row, column);
            cell.id = SpriteId(cells.len() as u32);
            cells.push(cell);
        }
    }
    Ok(cells)
}

/// Split a `width x height` image into `rows x columns` equal cells.
///
/// Remainder pixels on the right and bottom edges are not covered.
pub fn split_rows_columns(
    width: usize,
    height: usize,
    rows: usize,
    columns: usize,
) -> Result<Vec<BoundingBox>> {
    if rows == 0 || columns == 0 {
        return Err(SplitError::InvalidGrid {
            width,
            height,
            reason: format!("{rows} rows x {columns} columns"),
        });
    }
    if columns > width || rows > height {
        return Err(SplitError::InvalidGrid {
            width,
            height,
            reason: format!("{rows} rows x {columns} columns leave empty cells"),
        });
    }
    let (cell_width, cell_height) = (width / columns, height / rows);
    let mut cells = Vec::with_capacity(rows * columns);
    for row in 0..rows {
        for column in 0..columns {
            let mut cell =
                BoundingBox::new(column * cell_width, row * cell_height, cell_width, cell_height)?
                    .with_cell(row, column);
            cell.id = SpriteId(cells.len() as u32);
            cells.push(cell);
        }
    }
    Ok(cells)
}
