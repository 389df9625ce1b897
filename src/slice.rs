//! Extraction of 2-D anatomical slices from a volume.
//!
//! Each [`Direction`] fixes one coordinate at the reference voxel and
//! walks the other two in a fixed order, producing the slice in row-major
//! order (outer loop = rows, inner loop = columns):
//!
//! | Direction | Fixed | Rows          | Columns       |
//! |-----------|-------|---------------|---------------|
//! | anterior  | y     | z ascending   | x ascending   |
//! | posterior | y     | z descending  | x descending  |
//! | left      | x     | y descending  | z ascending   |
//! | right     | x     | y ascending   | z ascending   |
//! | foot      | z     | y ascending   | x ascending   |
//! | head      | z     | y descending  | x ascending   |
//!
//! [`Direction`]: ./enum.Direction.html

use crate::error::Result;
use crate::volume::{Axis, Volume, Voxel};
use either::Either;
use ndarray::Array2;
use std::fmt;
use std::iter::Rev;
use std::ops::Range;
use std::str::FromStr;

/// Anatomical viewing direction of a slice.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Seen from above (`h`)
    Head,
    /// Seen from below (`f`)
    Foot,
    /// Seen from the front (`a`)
    Anterior,
    /// Seen from the back (`p`)
    Posterior,
    /// Seen from the left (`l`)
    Left,
    /// Seen from the right (`r`)
    Right,
}

/// Directions rendered when none are requested.
pub const DEFAULT_DIRECTIONS: [Direction; 3] =
    [Direction::Head, Direction::Right, Direction::Anterior];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Order {
    Ascending,
    Descending,
}

impl Order {
    fn range(self, len: usize) -> Either<Range<usize>, Rev<Range<usize>>> {
        match self {
            Order::Ascending => Either::Left(0..len),
            Order::Descending => Either::Right((0..len).rev()),
        }
    }
}

/// Walk over the volume for one direction.
#[derive(Debug, Copy, Clone)]
struct Traversal {
    fixed: Axis,
    rows: (Axis, Order),
    cols: (Axis, Order),
}

impl Direction {
    /// All six directions.
    pub const ALL: [Direction; 6] = [
        Direction::Head,
        Direction::Foot,
        Direction::Anterior,
        Direction::Posterior,
        Direction::Left,
        Direction::Right,
    ];

    /// The single-letter tag of this direction.
    pub fn tag(self) -> char {
        match self {
            Direction::Head => 'h',
            Direction::Foot => 'f',
            Direction::Anterior => 'a',
            Direction::Posterior => 'p',
            Direction::Left => 'l',
            Direction::Right => 'r',
        }
    }

    /// Resolve a single-letter tag.
    pub fn from_tag(tag: char) -> Option<Direction> {
        Direction::ALL.iter().copied().find(|d| d.tag() == tag)
    }

    /// The coordinate held constant by this direction.
    pub fn fixed_axis(self) -> Axis {
        self.traversal().fixed
    }

    fn traversal(self) -> Traversal {
        use self::Order::*;
        use crate::volume::Axis::*;
        let (fixed, rows, cols) = match self {
            Direction::Anterior => (Y, (Z, Ascending), (X, Ascending)),
            Direction::Posterior => (Y, (Z, Descending), (X, Descending)),
            Direction::Left => (X, (Y, Descending), (Z, Ascending)),
            Direction::Right => (X, (Y, Ascending), (Z, Ascending)),
            Direction::Foot => (Z, (Y, Ascending), (X, Ascending)),
            Direction::Head => (Z, (Y, Descending), (X, Ascending)),
        };
        Traversal { fixed, rows, cols }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Head => "head",
            Direction::Foot => "foot",
            Direction::Anterior => "anterior",
            Direction::Posterior => "posterior",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.pad(name)
    }
}

/// Error returned when parsing an unknown direction name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError(String);

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown direction `{}`", self.0)
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Parse either a full direction name or its single-letter tag.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        let mut chars = lower.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(d) = Direction::from_tag(c) {
                return Ok(d);
            }
        }
        Direction::ALL
            .iter()
            .copied()
            .find(|d| d.to_string() == lower)
            .ok_or_else(|| ParseDirectionError(s.to_string()))
    }
}

/// A 2-D slice of a volume, flattened in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    direction: Direction,
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Slice {
    /// The direction this slice was extracted for.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of rows and columns.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of samples, `rows * cols`.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the slice holds no samples.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The samples in row-major order.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Move the samples out of the slice.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Consume the slice into a 2-D array of shape `(rows, cols)`.
    pub fn into_ndarray(self) -> Result<Array2<f64>> {
        Ok(Array2::from_shape_vec((self.rows, self.cols), self.data)?)
    }
}

/// Make sure every coordinate in `0..len` is valid along `axis`.
fn check_span(volume: &Volume, axis: Axis, len: usize) -> Result<()> {
    match len.checked_sub(1) {
        Some(last) => volume.check(axis, last),
        None => Ok(()),
    }
}

/// Extract the slice seen from `direction` through the reference voxel.
///
/// Rows and columns run over the header's voxel counts. Every index is
/// validated against the grid before any sample is read, so a mismatch
/// between the two never yields a partial slice.
///
/// # Errors
///
/// - `NiftiError::OutOfRange` if the fixed coordinate, or any coordinate
/// walked by the traversal, lies outside the grid.
pub fn extract(direction: Direction, volume: &Volume, voxel: Voxel) -> Result<Slice> {
    let t = direction.traversal();
    volume.check(t.fixed, voxel.get(t.fixed))?;

    let (row_axis, row_order) = t.rows;
    let (col_axis, col_order) = t.cols;
    let rows = volume.dim_of(row_axis);
    let cols = volume.dim_of(col_axis);
    check_span(volume, row_axis, rows)?;
    check_span(volume, col_axis, cols)?;

    let mut data = Vec::with_capacity(rows * cols);
    for r in row_order.range(rows) {
        let row_voxel = voxel.with(row_axis, r);
        for c in col_order.range(cols) {
            data.push(volume.sample(row_voxel.with(col_axis, c)));
        }
    }
    debug_assert_eq!(data.len(), rows * cols);

    Ok(Slice {
        direction,
        rows,
        cols,
        data,
    })
}

/// Slices extracted at one reference voxel, one per direction, kept in
/// the order the directions were requested.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedSlices {
    voxel: Voxel,
    slices: Vec<Slice>,
}

impl RenderedSlices {
    /// Extract every requested direction at the given voxel. Repeated
    /// directions keep a single slice. The whole batch fails on the first
    /// direction that cannot be extracted.
    pub fn extract<I>(volume: &Volume, voxel: Voxel, directions: I) -> Result<Self>
    where
        I: IntoIterator<Item = Direction>,
    {
        let mut out = RenderedSlices {
            voxel,
            slices: Vec::new(),
        };
        for direction in directions {
            let slice = extract(direction, volume, voxel).map_err(|e| {
                warn!("Failed to extract {} slice at {:?}: {}", direction, voxel, e);
                e
            })?;
            out.insert(slice);
        }
        Ok(out)
    }

    fn insert(&mut self, slice: Slice) {
        match self
            .slices
            .iter_mut()
            .find(|s| s.direction == slice.direction)
        {
            Some(existing) => *existing = slice,
            None => self.slices.push(slice),
        }
    }

    /// The reference voxel of these slices.
    pub fn voxel(&self) -> Voxel {
        self.voxel
    }

    /// Get the slice for the given direction, if it was rendered.
    pub fn get(&self, direction: Direction) -> Option<&Slice> {
        self.slices.iter().find(|s| s.direction == direction)
    }

    /// Iterate over the slices in request order.
    pub fn iter(&self) -> std::slice::Iter<'_, Slice> {
        self.slices.iter()
    }

    /// Number of rendered directions.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether no direction was rendered.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Move the slices out, in request order.
    pub fn into_slices(self) -> Vec<Slice> {
        self.slices
    }
}

impl<'a> IntoIterator for &'a RenderedSlices {
    type Item = &'a Slice;
    type IntoIter = std::slice::Iter<'a, Slice>;

    fn into_iter(self) -> Self::IntoIter {
        self.slices.iter()
    }
}

/// Parse a comma separated list of directions, such as `"h,r,a"`.
pub fn parse_directions(tags: &str) -> std::result::Result<Vec<Direction>, ParseDirectionError> {
    tags.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}
