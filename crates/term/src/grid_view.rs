//! GridRenderer: paints an engine's cell buffer into a pixel surface.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Each cell is a `cell_size`-pixel square with a 1-pixel border on its top
//! and left, plus one closing border row/column, so a `w x h` grid needs a
//! `(cell_size+1)*w+1` by `(cell_size+1)*h+1` surface.

use anyhow::{anyhow, Result};

use crate::core::{CellBufferView, ViewError};
use crate::fb::{Rgb, Surface};
use crate::types::{index, Grid, CELL_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub grid: Rgb,
    pub dead: Rgb,
    pub alive: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            grid: Rgb::new(0xCC, 0xCC, 0xCC),
            dead: Rgb::new(0xFF, 0xFF, 0xFF),
            alive: Rgb::new(0x00, 0x00, 0x00),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Edge length of a painted cell in pixels.
    pub cell_size: u16,
    pub palette: Palette,
    /// Redraw the gridline mesh on every frame pass, not just at startup.
    pub redraw_gridlines: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            palette: Palette::default(),
            redraw_gridlines: false,
        }
    }
}

/// Largest surface edge in pixels (2048 terminal rows or columns).
pub const MAX_SURFACE_EXTENT: u16 = 4096;

/// Surface extent along one axis for `cells` cells, or `None` past
/// [`MAX_SURFACE_EXTENT`].
pub fn surface_extent(cells: u16, cell_size: u16) -> Option<u16> {
    cell_size
        .checked_add(1)?
        .checked_mul(cells)?
        .checked_add(1)
        .filter(|&extent| extent <= MAX_SURFACE_EXTENT)
}

#[derive(Debug, Clone, Default)]
pub struct GridRenderer {
    config: RenderConfig,
}

impl GridRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// `(width, height)` in pixels, or `None` if either edge is too large.
    pub fn surface_size(&self, grid: Grid) -> Option<(u16, u16)> {
        Some((
            surface_extent(grid.width, self.config.cell_size)?,
            surface_extent(grid.height, self.config.cell_size)?,
        ))
    }

    /// Allocate a surface for `grid`, cleared to the dead color.
    pub fn new_surface(&self, grid: Grid) -> Result<Surface> {
        let (w, h) = self.surface_size(grid).ok_or_else(|| {
            anyhow!(
                "{}x{} grid at cell size {} does not fit a terminal surface",
                grid.width,
                grid.height,
                self.config.cell_size
            )
        })?;
        Ok(Surface::new(w, h, self.config.palette.dead))
    }

    /// Pixel origin of the cell at `(row, column)`.
    #[inline]
    pub fn cell_origin(&self, row: u16, column: u16) -> (u16, u16) {
        let stride = self.config.cell_size + 1;
        (column * stride + 1, row * stride + 1)
    }

    /// Draw the static border mesh. Idempotent.
    pub fn draw_gridlines(&self, grid: Grid, surface: &mut Surface) {
        let stride = self.config.cell_size + 1;
        let color = self.config.palette.grid;
        for i in 0..=grid.width {
            surface.vline(i * stride, color);
        }
        for j in 0..=grid.height {
            surface.hline(j * stride, color);
        }
    }

    /// Paint every cell once.
    ///
    /// Fails without touching `surface` if `view` is shorter than `grid`.
    pub fn render(
        &self,
        view: &CellBufferView<'_>,
        grid: Grid,
        surface: &mut Surface,
    ) -> Result<(), ViewError> {
        if view.len() < grid.len() {
            return Err(ViewError::OutOfBounds {
                requested: grid.len(),
                available: view.len(),
            });
        }
        let size = self.config.cell_size;
        let palette = self.config.palette;

        for row in 0..grid.height {
            for column in 0..grid.width {
                let state = view[index(row, column, grid.width)];
                let color = if state.is_empty() {
                    palette.dead
                } else {
                    palette.alive
                };
                let (x, y) = self.cell_origin(row, column);
                surface.fill_rect(x, y, size, size, color);
            }
        }
        Ok(())
    }

    /// One steady-state frame pass.
    pub fn frame(
        &self,
        view: &CellBufferView<'_>,
        grid: Grid,
        surface: &mut Surface,
    ) -> Result<(), ViewError> {
        if self.config.redraw_gridlines {
            self.draw_gridlines(grid, surface);
        }
        self.render(view, grid, surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CellState;

    fn grid(w: u16, h: u16) -> Grid {
        Grid::new(w, h).unwrap()
    }

    #[test]
    fn surface_is_55_by_55_for_9x9_at_cell_size_5() {
        // (5 + 1) * 9 + 1
        let r = GridRenderer::default();
        assert_eq!(r.surface_size(grid(9, 9)), Some((55, 55)));
        let s = r.new_surface(grid(9, 9)).unwrap();
        assert_eq!((s.width(), s.height()), (55, 55));
    }

    #[test]
    fn surface_size_uses_width_for_x_and_height_for_y() {
        let r = GridRenderer::default();
        assert_eq!(r.surface_size(grid(10, 3)), Some((61, 19)));
    }

    #[test]
    fn oversized_surface_is_rejected() {
        let r = GridRenderer::default();
        assert_eq!(r.surface_size(grid(u16::MAX, 2)), None);
        assert!(r.new_surface(grid(20_000, 2)).is_err());
    }

    #[test]
    fn surface_edges_are_capped() {
        // 6 * 682 + 1 = 4093 fits, 6 * 683 + 1 = 4099 does not.
        assert_eq!(surface_extent(682, CELL_SIZE), Some(4093));
        assert_eq!(surface_extent(683, CELL_SIZE), None);
        let r = GridRenderer::default();
        assert_eq!(r.surface_size(grid(10_922, 10_922)), None);
        assert!(r.new_surface(grid(10_922, 10_922)).is_err());
    }

    #[test]
    fn cell_origin_skips_border() {
        let r = GridRenderer::default();
        assert_eq!(r.cell_origin(0, 0), (1, 1));
        assert_eq!(r.cell_origin(0, 1), (7, 1));
        assert_eq!(r.cell_origin(2, 3), (19, 13));
    }

    #[test]
    fn gridlines_fall_between_cells() {
        let r = GridRenderer::default();
        let g = grid(2, 2);
        let mut s = r.new_surface(g).unwrap();
        r.draw_gridlines(g, &mut s);
        let p = Palette::default();

        for i in [0u16, 6, 12] {
            assert_eq!(s.get(i, 3), Some(p.grid));
            assert_eq!(s.get(3, i), Some(p.grid));
        }
        assert_eq!(s.get(1, 1), Some(p.dead));
        assert_eq!(s.get(5, 5), Some(p.dead));
    }

    #[test]
    fn render_leaves_gridlines_untouched() {
        let r = GridRenderer::default();
        let g = grid(3, 3);
        let mut s = r.new_surface(g).unwrap();
        r.draw_gridlines(g, &mut s);
        let before = s.clone();

        let cells = vec![CellState::Occupied; 9];
        let view = CellBufferView::acquire(&cells, 9).unwrap();
        r.render(&view, g, &mut s).unwrap();

        let p = Palette::default();
        for y in 0..s.height() {
            for x in 0..s.width() {
                if x % 6 == 0 || y % 6 == 0 {
                    assert_eq!(s.get(x, y), before.get(x, y));
                } else {
                    assert_eq!(s.get(x, y), Some(p.alive));
                }
            }
        }
    }

    #[test]
    fn short_view_is_rejected_without_painting() {
        let r = GridRenderer::default();
        let g = grid(3, 3);
        let mut s = r.new_surface(g).unwrap();
        let before = s.clone();

        let cells = vec![CellState::Occupied; 4];
        let view = CellBufferView::acquire(&cells, 4).unwrap();
        assert_eq!(
            r.render(&view, g, &mut s),
            Err(ViewError::OutOfBounds {
                requested: 9,
                available: 4
            })
        );
        assert_eq!(s, before);
        assert!(r.frame(&view, g, &mut s).is_err());
    }

    #[test]
    fn frame_redraws_gridlines_only_when_enabled() {
        let g = grid(2, 2);
        let cells = vec![CellState::Empty; 4];
        let view = CellBufferView::acquire(&cells, 4).unwrap();
        let p = Palette::default();

        let plain = GridRenderer::default();
        let mut s = plain.new_surface(g).unwrap();
        plain.frame(&view, g, &mut s).unwrap();
        assert_eq!(s.get(0, 0), Some(p.dead));

        let meshed = GridRenderer::new(RenderConfig {
            redraw_gridlines: true,
            ..RenderConfig::default()
        });
        let mut s = meshed.new_surface(g).unwrap();
        meshed.frame(&view, g, &mut s).unwrap();
        assert_eq!(s.get(0, 0), Some(p.grid));
    }
}
