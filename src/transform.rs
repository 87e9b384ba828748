//! Per-pixel color transforms, applied in parallel one column per task.

use enough::Stop;
use rayon::prelude::*;

use crate::error::BmpError;
use crate::grid::{Pixel, PixelGrid};

/// The four supported pixel operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transform {
    /// Every channel becomes `255 - channel`.
    Invert,
    /// All three channels set to the pixel's original red value.
    GrayFromRed,
    /// All three channels set to the pixel's original green value.
    GrayFromGreen,
    /// All three channels set to the pixel's original blue value.
    GrayFromBlue,
}

impl Transform {
    /// Apply in place.
    ///
    /// One parallel task per column; each task is the sole writer of its
    /// contiguous column slice, and every task has joined before this
    /// returns, so the grid is safe to serialize immediately. The result
    /// is identical for any worker count.
    ///
    /// Column work is pure pixel arithmetic and cannot fail; cancellation
    /// is honored at the entry point, before the fan-out.
    pub fn apply(self, grid: &mut PixelGrid, stop: &dyn Stop) -> Result<(), BmpError> {
        stop.check()?;
        let height = grid.height();
        if height == 0 || grid.width() == 0 {
            return Ok(());
        }
        grid.pixels_mut()
            .par_chunks_mut(height)
            .for_each(|column| self.apply_to_column(column));
        Ok(())
    }

    /// One column, bottom to top. The source channel of a grayscale
    /// operation is read into a local before any channel is written, so
    /// the write order can never observe an already-overwritten value.
    fn apply_to_column(self, column: &mut [Pixel]) {
        match self {
            Self::Invert => {
                for px in column {
                    px.blue = u8::MAX - px.blue;
                    px.green = u8::MAX - px.green;
                    px.red = u8::MAX - px.red;
                }
            }
            Self::GrayFromRed => {
                for px in column {
                    *px = Pixel::splat(px.red);
                }
            }
            Self::GrayFromGreen => {
                for px in column {
                    *px = Pixel::splat(px.green);
                }
            }
            Self::GrayFromBlue => {
                for px in column {
                    *px = Pixel::splat(px.blue);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enough::Unstoppable;

    fn test_grid() -> PixelGrid {
        let mut grid = PixelGrid::allocate(5, 4).unwrap();
        for x in 0..5 {
            for y in 0..4 {
                let v = (x * 31 + y * 7) as u8;
                grid.set(x, y, Pixel::new(v, v.wrapping_add(40), v.wrapping_add(80)));
            }
        }
        grid
    }

    #[test]
    fn invert_twice_is_identity() {
        let original = test_grid();
        let mut grid = original.clone();
        Transform::Invert.apply(&mut grid, &Unstoppable).unwrap();
        assert_ne!(grid, original);
        Transform::Invert.apply(&mut grid, &Unstoppable).unwrap();
        assert_eq!(grid, original);
    }

    #[test]
    fn grayscale_is_a_fixed_point() {
        let mut grid = test_grid();
        Transform::GrayFromRed.apply(&mut grid, &Unstoppable).unwrap();
        let once = grid.clone();
        Transform::GrayFromRed.apply(&mut grid, &Unstoppable).unwrap();
        assert_eq!(grid, once);
    }

    #[test]
    fn grayscale_reads_source_channel_before_writing() {
        let mut grid = PixelGrid::allocate(1, 1).unwrap();
        grid.set(0, 0, Pixel::new(10, 20, 30));
        Transform::GrayFromBlue.apply(&mut grid, &Unstoppable).unwrap();
        assert_eq!(grid.get(0, 0), Pixel::splat(10));
    }

    #[test]
    fn empty_grid_is_a_no_op() {
        let mut grid = PixelGrid::allocate(0, 7).unwrap();
        Transform::Invert.apply(&mut grid, &Unstoppable).unwrap();
        let mut grid = PixelGrid::allocate(7, 0).unwrap();
        Transform::Invert.apply(&mut grid, &Unstoppable).unwrap();
    }
}
