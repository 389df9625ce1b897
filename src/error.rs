//! Types for error handling go here.

use crate::volume::Axis;
use std::io::Error as IOError;

quick_error! {
    /// Error type for all error kinds in this crate.
    #[derive(Debug)]
    pub enum NiftiError {
        /// An empty buffer was given where data was required.
        InvalidInput {
            display("No input data")
        }
        /// The header size magic did not match either byte order,
        /// or the buffer is too short to hold a header.
        NotNifti1 {
            display("This does not look like a NIfTI-1 file")
        }
        /// The header declares a number of dimensions other than 3.
        UnsupportedDimensionality(dims: u16) {
            display("Cannot handle {} dimensional images", dims)
        }
        /// A spatial dimension of the volume is zero.
        InconsistentDim(index: u8, value: u16) {
            display("Inconsistent value `{}` in header field dim[{}]", value, index)
        }
        /// Attempted to read the volume outside its boundaries.
        OutOfRange { axis: Axis, index: usize, extent: usize } {
            display("Index {} along {} is out of range (extent {})", index, axis, extent)
        }
        /// The pixel region holds fewer voxels than the header describes.
        IncompleteVolume { expected: usize, got: usize } {
            display("Incomplete volume: expected {} voxels, got {}", expected, got)
        }
        /// A slice could not be shaped into a 2-D array.
        Shape(err: ndarray::ShapeError) {
            from()
            source(err)
            display("Invalid slice shape: {}", err)
        }
        /// I/O Error, including failures of the gzip transform
        Io(err: IOError) {
            from()
            source(err)
            display("{}", err)
        }
    }
}

/// Alias type for results originated from this crate.
pub type Result<T> = ::std::result::Result<T, NiftiError>;
