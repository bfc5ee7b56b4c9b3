//! Grid layout geometry - where each cell sits on the input surface.
//!
//! Touch input reports raw surface coordinates, so resolving a touch to a
//! cell needs the rendered geometry of the grid: a time-label column on the
//! left, a day-header row on top, and a uniform `days x hours` cell area
//! below and to the right of them. This module models that geometry
//! independently of any rendering tree so hit testing stays portable and
//! unit-testable.

use serde::{Deserialize, Serialize};

use crate::constants::{HEADER_HEIGHT, TIME_LABEL_WIDTH, TIME_LABEL_WIDTH_COMPACT};
use crate::error::{GridError, GridResult};
use crate::grid::GridConfig;
use crate::types::{Cell, SurfacePoint};

/// Axis-aligned bounds of one rendered cell, in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellRect {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl CellRect {
    #[inline]
    pub fn contains(&self, point: SurfacePoint) -> bool {
        point.x >= self.min_x && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}

/// The rendered geometry of a grid, fixed at construction.
///
/// `origin` is the surface position of the component's top-left corner
/// (label column and header row included). Cell columns and rows divide the
/// remaining area uniformly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    config: GridConfig,
    origin: SurfacePoint,
    label_width: f32,
    header_height: f32,
    cell_width: f32,
    cell_height: f32,
}

impl GridLayout {
    /// Layout with the default label-column and header metrics.
    pub fn new(
        config: GridConfig,
        origin: SurfacePoint,
        width: f32,
        height: f32,
    ) -> GridResult<Self> {
        Self::with_metrics(config, origin, width, height, TIME_LABEL_WIDTH, HEADER_HEIGHT)
    }

    /// Layout with the narrow label column used on small viewports.
    pub fn compact(
        config: GridConfig,
        origin: SurfacePoint,
        width: f32,
        height: f32,
    ) -> GridResult<Self> {
        Self::with_metrics(
            config,
            origin,
            width,
            height,
            TIME_LABEL_WIDTH_COMPACT,
            HEADER_HEIGHT,
        )
    }

    /// Layout with explicit label-column width and header-row height.
    pub fn with_metrics(
        config: GridConfig,
        origin: SurfacePoint,
        width: f32,
        height: f32,
        label_width: f32,
        header_height: f32,
    ) -> GridResult<Self> {
        let cell_area_width = width - label_width;
        let cell_area_height = height - header_height;
        if cell_area_width <= 0.0 || cell_area_height <= 0.0 {
            return Err(GridError::DegenerateLayout {
                width: cell_area_width,
                height: cell_area_height,
            });
        }

        Ok(Self {
            config,
            origin,
            label_width,
            header_height,
            cell_width: cell_area_width / config.days() as f32,
            cell_height: cell_area_height / config.hour_count() as f32,
        })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn cell_width(&self) -> f32 {
        self.cell_width
    }

    pub fn cell_height(&self) -> f32 {
        self.cell_height
    }

    /// Surface bounds of `cell`, or `None` if it is outside the grid.
    pub fn cell_bounds(&self, cell: Cell) -> Option<CellRect> {
        if !self.config.contains(cell) {
            return None;
        }
        let row = (cell.hour - self.config.hour_min()) as f32;
        let col = cell.day as f32;
        let min_x = self.origin.x + self.label_width + col * self.cell_width;
        let min_y = self.origin.y + self.header_height + row * self.cell_height;
        Some(CellRect {
            min_x,
            min_y,
            max_x: min_x + self.cell_width,
            max_y: min_y + self.cell_height,
        })
    }

    /// Closed-form point-to-cell lookup.
    ///
    /// Points over the label column, the header row, or outside the
    /// component resolve to `None`.
    pub fn cell_at(&self, point: SurfacePoint) -> Option<Cell> {
        let rel_x = point.x - self.origin.x - self.label_width;
        let rel_y = point.y - self.origin.y - self.header_height;
        if rel_x < 0.0 || rel_y < 0.0 {
            return None;
        }

        let col = (rel_x / self.cell_width) as u8;
        let row = (rel_y / self.cell_height) as u8;
        if rel_x >= self.config.days() as f32 * self.cell_width
            || rel_y >= self.config.hour_count() as f32 * self.cell_height
        {
            return None;
        }

        Some(Cell::new(col, self.config.hour_min() + row))
    }
}
