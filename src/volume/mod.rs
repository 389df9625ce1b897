//! This module defines the in-memory voxel volume, built once from
//! the typed voxel buffer of a NIfTI-1 file and read-only afterwards.
//!
//! #### Note on grid indexing
//!
//! The grid is allocated with shape `[dim.z, dim.y, dim.x]` and filled
//! in file order (x fastest), but it is *addressed* as `grid[y][z][x]`:
//! the voxel's y coordinate selects along the axis sized by `dim.z`, and
//! its z coordinate along the axis sized by `dim.y`. Slice orientation
//! depends on this convention, which lives in [`GRID_AXES`] and
//! [`grid_index`] only.
//!
//! [`GRID_AXES`]: ./constant.GRID_AXES.html
//! [`grid_index`]: ./fn.grid_index.html

pub mod element;

pub use self::element::{DataElement, VoxelBuffer};

use crate::error::{NiftiError, Result};
use ndarray::{Array3, ArrayView3};
use std::fmt;

/// A spatial axis of the volume, named after the voxel coordinate
/// moving along it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// First coordinate, fastest varying in the file
    X,
    /// Second coordinate
    Y,
    /// Third coordinate
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.pad(name)
    }
}

/// The coordinate addressing each grid axis, in grid axis order.
pub const GRID_AXES: [Axis; 3] = [Axis::Y, Axis::Z, Axis::X];

/// A voxel position in the volume.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Voxel {
    /// x coordinate
    pub x: usize,
    /// y coordinate
    pub y: usize,
    /// z coordinate
    pub z: usize,
}

impl Voxel {
    /// Create a new voxel position.
    pub fn new(x: usize, y: usize, z: usize) -> Self {
        Voxel { x, y, z }
    }

    /// Get the coordinate along the given axis.
    pub fn get(&self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Copy of this position with the coordinate along `axis` replaced.
    pub fn with(mut self, axis: Axis, value: usize) -> Self {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
        self
    }
}

impl From<(usize, usize, usize)> for Voxel {
    fn from((x, y, z): (usize, usize, usize)) -> Self {
        Voxel::new(x, y, z)
    }
}

/// Grid index of a voxel position, following [`GRID_AXES`].
///
/// [`GRID_AXES`]: ./constant.GRID_AXES.html
pub fn grid_index(voxel: Voxel) -> [usize; 3] {
    [
        voxel.get(GRID_AXES[0]),
        voxel.get(GRID_AXES[1]),
        voxel.get(GRID_AXES[2]),
    ]
}

/// Position of the grid axis addressed by the given coordinate.
fn grid_axis_of(axis: Axis) -> usize {
    match GRID_AXES.iter().position(|a| *a == axis) {
        Some(i) => i,
        None => unreachable!("every axis addresses a grid axis"),
    }
}

/// A 3-D voxel volume fully contained in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct Volume {
    dim: [u16; 3],
    grid: Array3<f64>,
}

impl Volume {
    /// Reshape a flat voxel buffer into a volume of the given `[x, y, z]`
    /// dimensions. Voxels past the first `x * y * z` (further time points
    /// or statistic components) are left out.
    ///
    /// # Errors
    ///
    /// - `NiftiError::IncompleteVolume` if the buffer is too short.
    pub fn from_voxels(voxels: &VoxelBuffer, dim: [u16; 3]) -> Result<Self> {
        let [x, y, z] = dim;
        let (x, y, z) = (usize::from(x), usize::from(y), usize::from(z));
        let expected = x.saturating_mul(y).saturating_mul(z);
        if voxels.len() < expected {
            return Err(NiftiError::IncompleteVolume {
                expected,
                got: voxels.len(),
            });
        }
        let values: Vec<f64> = voxels.iter_f64().take(expected).collect();
        let grid = Array3::from_shape_vec((z, y, x), values).map_err(|_| {
            NiftiError::IncompleteVolume {
                expected,
                got: voxels.len(),
            }
        })?;
        debug!("Built volume grid of shape {:?}", grid.shape());
        Ok(Volume { dim, grid })
    }

    /// Get the voxel counts along x, y and z.
    pub fn dim(&self) -> [u16; 3] {
        self.dim
    }

    /// Voxel count along the given axis, as declared by the header.
    pub fn dim_of(&self, axis: Axis) -> usize {
        let i = match axis {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        };
        usize::from(self.dim[i])
    }

    /// Number of valid values for the given coordinate, which is the
    /// length of the grid axis that coordinate addresses.
    pub fn extent_of(&self, axis: Axis) -> usize {
        self.grid.shape()[grid_axis_of(axis)]
    }

    /// Ensure that `index` is a valid coordinate along `axis`.
    ///
    /// # Errors
    ///
    /// - `NiftiError::OutOfRange` otherwise.
    pub fn check(&self, axis: Axis, index: usize) -> Result<()> {
        let extent = self.extent_of(axis);
        if index < extent {
            Ok(())
        } else {
            Err(NiftiError::OutOfRange {
                axis,
                index,
                extent,
            })
        }
    }

    /// Fetch a single voxel's value.
    ///
    /// # Errors
    ///
    /// - `NiftiError::OutOfRange` if the position is outside the grid.
    pub fn get(&self, voxel: Voxel) -> Result<f64> {
        for axis in &GRID_AXES {
            self.check(*axis, voxel.get(*axis))?;
        }
        Ok(self.grid[grid_index(voxel)])
    }

    /// Fetch a voxel known to be inside the grid.
    pub(crate) fn sample(&self, voxel: Voxel) -> f64 {
        self.grid[grid_index(voxel)]
    }

    /// Obtain a view of the underlying grid, in allocation order
    /// `[z][y][x]`.
    pub fn grid(&self) -> ArrayView3<'_, f64> {
        self.grid.view()
    }
}
