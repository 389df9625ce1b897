//! This module defines the `NiftiHeader` struct, which holds the
//! subset of NIFTI-1 header fields needed to locate and shape the
//! voxel data of a single 3-D volume.

use crate::error::{NiftiError, Result};
use crate::typedef::NiftiType;
use crate::util::FieldReader;
use byteordered::Endianness;
use std::ops::Range;

/// Size of a NIFTI-1 header, in bytes.
pub const HEADER_SIZE: usize = 348;
/// Smallest offset of voxel data in a single-file NIFTI-1 object
/// (header plus the 4-byte extender).
pub const MIN_VOX_OFFSET: f32 = 352.;
/// Magic code for full NIFTI-1 files (extention ".nii[.gz]").
pub const MAGIC_CODE_NIP1: &[u8; 3] = b"n+1";

/// `sizeof_hdr` as seen when read in the wrong byte order.
const HEADER_SIZE_SWAPPED: u32 = 0x5C01_0000;
const MAGIC_OFFSET: usize = 4;

/// The decoded NIFTI-1 header of a 3-D volume.
///
/// A fresh value is produced on every decode, and only
/// exactly three-dimensional images are accepted.
///
/// # Example
///
/// ```no_run
/// use nifti_slice::NiftiHeader;
/// # fn run(bytes: &[u8]) -> nifti_slice::Result<()> {
/// let header = NiftiHeader::from_bytes(bytes)?;
/// println!("{:?}", header.dim);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NiftiHeader {
    /// Voxel counts along x, y and z
    pub dim: [u16; 3],
    /// Number of time points
    pub time_length: u16,
    /// Number of statistic components
    pub stat_length: u16,
    /// Datatype code of each voxel
    pub datatype: u16,
    /// Number of bits per voxel
    pub bitpix: u16,
    /// Offset to the voxel data, never below 352
    pub vox_offset: f32,
    /// Byte order of the header fields and voxel data
    pub endianness: Endianness,
}

impl NiftiHeader {
    /// Decode the header at the start of an uncompressed NIFTI-1 buffer.
    ///
    /// # Errors
    ///
    /// - `NiftiError::NotNifti1` if the buffer is shorter than a header or
    /// `sizeof_hdr` is not 348 in either byte order.
    /// - `NiftiError::UnsupportedDimensionality` if `dim[0]` is not 3.
    /// - `NiftiError::InconsistentDim` if a spatial dimension is zero.
    pub fn from_bytes(buffer: &[u8]) -> Result<NiftiHeader> {
        if buffer.len() < HEADER_SIZE {
            return Err(NiftiError::NotNifti1);
        }
        let buffer = &buffer[..HEADER_SIZE];

        let endianness = match FieldReader::new(buffer, Endianness::Little).u32_at(0)? {
            s if s == HEADER_SIZE as u32 => Endianness::Little,
            HEADER_SIZE_SWAPPED => Endianness::Big,
            _ => return Err(NiftiError::NotNifti1),
        };
        let r = FieldReader::new(buffer, endianness);

        let ndims = r.u16_at(40)?;
        if ndims != 3 {
            return Err(NiftiError::UnsupportedDimensionality(ndims));
        }

        let mut dim = [0u16; 3];
        for (i, d) in dim.iter_mut().enumerate() {
            *d = r.u16_at(42 + i * 2)?;
            if *d == 0 {
                return Err(NiftiError::InconsistentDim(i as u8 + 1, *d));
            }
        }

        let header = NiftiHeader {
            dim,
            time_length: r.u16_at(48)?,
            stat_length: r.u16_at(50)?,
            datatype: r.u16_at(70)?,
            bitpix: r.u16_at(72)?,
            vox_offset: r.f32_at(108)?.max(MIN_VOX_OFFSET),
            endianness,
        };
        debug!("Decoded header: {:?}", header);
        Ok(header)
    }

    /// Get the data type of the voxels. Unsupported codes are
    /// reported as `NiftiType::Uint8`.
    pub fn data_type(&self) -> NiftiType {
        NiftiType::from_code(self.datatype)
    }

    /// Total number of voxel elements in the file, across time points and
    /// statistic components. Zero extents in those two fields count as 1.
    /// Saturates at `usize::MAX`.
    pub fn voxel_count(&self) -> usize {
        let [x, y, z] = self.dim;
        saturating_product(&[x, y, z, self.time_length, self.stat_length])
    }

    /// Number of voxel elements in the first 3-D volume. Saturates at
    /// `usize::MAX`.
    pub fn volume_voxel_count(&self) -> usize {
        saturating_product(&self.dim)
    }

    /// Byte range of the voxel data in the uncompressed file. Its length
    /// follows the element width of the data type, not `bitpix`.
    pub fn image_range(&self) -> Range<usize> {
        self.range_of(self.voxel_count())
    }

    /// Byte range of the first 3-D volume, ignoring further time points and
    /// statistic components.
    pub fn volume_range(&self) -> Range<usize> {
        self.range_of(self.volume_voxel_count())
    }

    fn range_of(&self, count: usize) -> Range<usize> {
        let start = self.vox_offset as usize;
        let len = count.saturating_mul(self.data_type().size_of());
        start..start.saturating_add(len)
    }
}

fn saturating_product(extents: &[u16]) -> usize {
    extents
        .iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(usize::from(d.max(1))))
        .unwrap_or(usize::MAX)
}

/// Check whether the buffer carries the `n+1` magic of a single-file
/// NIFTI-1 object. Never fails: short buffers are simply not NIFTI-1.
pub fn looks_like_nifti1(buffer: &[u8]) -> bool {
    buffer.len() >= HEADER_SIZE
        && &buffer[MAGIC_OFFSET..MAGIC_OFFSET + MAGIC_CODE_NIP1.len()] == MAGIC_CODE_NIP1
}
