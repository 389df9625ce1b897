//! Module for decoding complete NIFTI-1 objects held in memory and
//! rendering their anatomical slices.

use crate::compression::decompress_if_needed;
use crate::error::{NiftiError, Result};
use crate::header::NiftiHeader;
use crate::slice::{self, Direction, RenderedSlices, Slice, DEFAULT_DIRECTIONS};
use crate::volume::{Volume, Voxel, VoxelBuffer};
use std::borrow::Cow;

/// Options and flags which can be used to configure how a NIfTI object
/// is read and which slices it renders.
///
/// # Example
///
/// ```no_run
/// use nifti_slice::{Direction, ReaderOptions};
/// # fn run(bytes: &[u8]) -> nifti_slice::Result<()> {
/// let obj = ReaderOptions::new()
///     .directions(vec![Direction::Foot, Direction::Left])
///     .read_bytes(bytes)?;
/// let slices = obj.render(10, 20, 30)?;
/// assert_eq!(slices.len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderOptions {
    sniff_gzip: bool,
    directions: Vec<Direction>,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        ReaderOptions {
            sniff_gzip: true,
            directions: DEFAULT_DIRECTIONS.to_vec(),
        }
    }
}

impl ReaderOptions {
    /// Create a new set of options with the defaults: gzip input is
    /// detected and inflated, and head, right and anterior slices are
    /// rendered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether to look for gzip compression before decoding. When
    /// disabled, the buffer is always read as an uncompressed file.
    pub fn sniff_gzip(&mut self, sniff_gzip: bool) -> &mut Self {
        self.sniff_gzip = sniff_gzip;
        self
    }

    /// Set the directions rendered by `InMemNiftiObject::render`, in order.
    pub fn directions<I>(&mut self, directions: I) -> &mut Self
    where
        I: IntoIterator<Item = Direction>,
    {
        self.directions = directions.into_iter().collect();
        self
    }

    /// Decode a full NIFTI-1 object from a buffer, which may be
    /// gzip-compressed.
    ///
    /// # Errors
    ///
    /// - `NiftiError::InvalidInput` if the buffer is empty.
    /// - `NiftiError::Io` if the gzip stream cannot be inflated.
    /// - any header decoding error (see `NiftiHeader::from_bytes`).
    /// - `NiftiError::IncompleteVolume` if the voxel data is truncated.
    pub fn read_bytes(&self, buffer: &[u8]) -> Result<InMemNiftiObject> {
        if buffer.is_empty() {
            return Err(NiftiError::InvalidInput);
        }
        let data = if self.sniff_gzip {
            decompress_if_needed(buffer)?
        } else {
            Cow::Borrowed(buffer)
        };

        let header = NiftiHeader::from_bytes(&data)?;
        // further time points and statistic components are never read
        let range = header.volume_range();
        let end = range.end.min(data.len());
        let start = range.start.min(end);
        if range.end > data.len() {
            debug!(
                "Voxel data ends at {} but buffer holds {} bytes",
                range.end,
                data.len()
            );
        }

        let voxels = VoxelBuffer::from_bytes(header.datatype, &data[start..end], header.endianness);
        let volume = Volume::from_voxels(&voxels, header.dim)?;

        Ok(InMemNiftiObject {
            header,
            volume,
            directions: self.directions.clone(),
        })
    }
}

/// Data type for a NIFTI object that is fully contained in memory,
/// ready for slice extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct InMemNiftiObject {
    header: NiftiHeader,
    volume: Volume,
    directions: Vec<Direction>,
}

impl InMemNiftiObject {
    /// Decode a NIFTI-1 object from a buffer with the default options.
    pub fn from_bytes(buffer: &[u8]) -> Result<Self> {
        ReaderOptions::new().read_bytes(buffer)
    }

    /// Obtain a reference to the NIFTI header.
    pub fn header(&self) -> &NiftiHeader {
        &self.header
    }

    /// Obtain a reference to the object's volume.
    pub fn volume(&self) -> &Volume {
        &self.volume
    }

    /// Move the volume out of the object, discarding the header.
    pub fn into_volume(self) -> Volume {
        self.volume
    }

    /// The directions rendered by `render`.
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    /// Extract a single slice through the given voxel.
    pub fn extract(&self, direction: Direction, voxel: Voxel) -> Result<Slice> {
        slice::extract(direction, &self.volume, voxel)
    }

    /// Extract one slice per configured direction, all through the voxel
    /// at `(x, y, z)`.
    pub fn render(&self, x: usize, y: usize, z: usize) -> Result<RenderedSlices> {
        self.render_directions(Voxel::new(x, y, z), self.directions.iter().copied())
    }

    /// Extract one slice per given direction, all through `voxel`.
    pub fn render_directions<I>(&self, voxel: Voxel, directions: I) -> Result<RenderedSlices>
    where
        I: IntoIterator<Item = Direction>,
    {
        let slices = RenderedSlices::extract(&self.volume, voxel, directions)?;
        debug!("Rendered {} slices at {:?}", slices.len(), voxel);
        Ok(slices)
    }
}
