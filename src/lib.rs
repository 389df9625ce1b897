//! Decoding of NIfTI-1 volumes and extraction of anatomical slices.
//!
//! A NIfTI-1 file (optionally gzip-compressed) is decoded from memory into
//! a 3-D volume, from which 2-D slices are taken along the six anatomical
//! viewing directions: head, foot, anterior, posterior, left and right.
//!
//! # Example
//!
//! ```no_run
//! use nifti_slice::{Direction, InMemNiftiObject};
//! # fn run(bytes: &[u8]) -> nifti_slice::Result<()> {
//! let obj = InMemNiftiObject::from_bytes(bytes)?;
//! let [x, y, z] = obj.header().dim;
//! let slices = obj.render(x as usize / 2, y as usize / 2, z as usize / 2)?;
//! let axial = slices.get(Direction::Head).unwrap();
//! println!("{:?}", axial.shape());
//! # Ok(())
//! # }
//! ```
//!
//! Only single-file objects with exactly three dimensions are supported.
//! Intensity scaling and orientation matrices are not applied.
#![deny(missing_debug_implementations)]
#![warn(missing_docs, unused_extern_crates, trivial_casts, unused_results)]

#[macro_use]
extern crate quick_error;
#[macro_use]
extern crate num_derive;
#[macro_use]
extern crate log;

pub mod compression;
pub mod error;
pub mod header;
pub mod object;
pub mod slice;
pub mod typedef;
pub mod volume;
mod util;

pub use byteordered::Endianness;
pub use compression::{decompress, is_compressed};
pub use error::{NiftiError, Result};
pub use header::{looks_like_nifti1, NiftiHeader};
pub use object::{InMemNiftiObject, ReaderOptions};
pub use slice::{extract, Direction, RenderedSlices, Slice};
pub use typedef::NiftiType;
pub use volume::{Axis, DataElement, Volume, Voxel, VoxelBuffer};
