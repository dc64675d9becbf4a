//! Grid layout for arranging widgets in a row/column grid.
//!
//! `GridLayout` sizes each column to its widest item and each row to its
//! tallest item, then centers every item in its cell at its preferred size.
//! Items are identified by a caller-chosen key, so the layout never holds
//! the widgets themselves.
//!
//! # Example
//!
//! ```
//! use horizon_suggest::geometry::{Point, Size};
//! use horizon_suggest::widget::layout::GridLayout;
//!
//! let mut layout = GridLayout::new();
//! layout.add_widget_at("entry", 0, 0);
//! layout.add_widget_at("label", 1, 0);
//! layout.add_widget_at("button", 1, 1);
//!
//! let placed = layout.calculate(Point::ZERO, |key| match key {
//!     "entry" => Size::new(200.0, 26.0),
//!     _ => Size::new(80.0, 30.0),
//! });
//! assert_eq!(placed.len(), 3);
//! ```

use crate::geometry::{Point, Rect, Size};

/// Default spacing between rows and columns.
pub const DEFAULT_SPACING: f32 = 4.0;

#[derive(Debug, Clone)]
struct GridCell<K> {
    key: K,
    row: usize,
    col: usize,
}

/// A grid of widgets at explicit row/column positions.
#[derive(Debug, Clone)]
pub struct GridLayout<K> {
    cells: Vec<GridCell<K>>,
    horizontal_spacing: f32,
    vertical_spacing: f32,
    margin: f32,
}

impl<K: Copy + PartialEq> GridLayout<K> {
    /// Create a new empty grid layout.
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            horizontal_spacing: DEFAULT_SPACING,
            vertical_spacing: DEFAULT_SPACING,
            margin: 0.0,
        }
    }

    /// Add a widget at the specified row and column, replacing any occupant.
    pub fn add_widget_at(&mut self, key: K, row: usize, col: usize) {
        self.cells.retain(|cell| !(cell.row == row && cell.col == col) && cell.key != key);
        self.cells.push(GridCell { key, row, col });
    }

    /// Set the spacing between columns and between rows.
    pub fn set_spacing(&mut self, spacing: f32) {
        self.horizontal_spacing = spacing.max(0.0);
        self.vertical_spacing = spacing.max(0.0);
    }

    /// Set the margin around the whole grid.
    pub fn set_margin(&mut self, margin: f32) {
        self.margin = margin.max(0.0);
    }

    pub fn row_count(&self) -> usize {
        self.cells.iter().map(|c| c.row + 1).max().unwrap_or(0)
    }

    pub fn column_count(&self) -> usize {
        self.cells.iter().map(|c| c.col + 1).max().unwrap_or(0)
    }

    fn track_sizes(&self, hint: &impl Fn(K) -> Size) -> (Vec<f32>, Vec<f32>) {
        let mut col_widths = vec![0.0f32; self.column_count()];
        let mut row_heights = vec![0.0f32; self.row_count()];
        for cell in &self.cells {
            let size = hint(cell.key);
            col_widths[cell.col] = col_widths[cell.col].max(size.width);
            row_heights[cell.row] = row_heights[cell.row].max(size.height);
        }
        (col_widths, row_heights)
    }

    /// The total size the grid needs.
    pub fn size_hint(&self, hint: impl Fn(K) -> Size) -> Size {
        let (cols, rows) = self.track_sizes(&hint);
        let span = |sizes: &[f32], spacing: f32| {
            sizes.iter().sum::<f32>() + spacing * sizes.len().saturating_sub(1) as f32
        };
        Size::new(
            span(&cols, self.horizontal_spacing) + self.margin * 2.0,
            span(&rows, self.vertical_spacing) + self.margin * 2.0,
        )
    }

    /// Compute the geometry of every item, with the grid's top-left at `origin`.
    pub fn calculate(&self, origin: Point, hint: impl Fn(K) -> Size) -> Vec<(K, Rect)> {
        let (col_widths, row_heights) = self.track_sizes(&hint);
        let col_positions = positions(&col_widths, self.horizontal_spacing, origin.x + self.margin);
        let row_positions = positions(&row_heights, self.vertical_spacing, origin.y + self.margin);

        self.cells
            .iter()
            .map(|cell| {
                let size = hint(cell.key);
                let x = col_positions[cell.col] + (col_widths[cell.col] - size.width) / 2.0;
                let y = row_positions[cell.row] + (row_heights[cell.row] - size.height) / 2.0;
                (cell.key, Rect::new(x, y, size.width, size.height))
            })
            .collect()
    }
}

impl<K: Copy + PartialEq> Default for GridLayout<K> {
    fn default() -> Self {
        Self::new()
    }
}

fn positions(sizes: &[f32], spacing: f32, start: f32) -> Vec<f32> {
    let mut pos = start;
    sizes
        .iter()
        .map(|size| {
            let current = pos;
            pos += size + spacing;
            current
        })
        .collect()
}
