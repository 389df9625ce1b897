use byteordered::{ByteOrdered, Endianness};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;

/// Description of a synthetic single-file NIfTI-1 object.
#[derive(Debug, Clone)]
pub struct TestImage {
    pub ndims: u16,
    pub dim: [u16; 3],
    pub time_length: u16,
    pub stat_length: u16,
    pub datatype: u16,
    pub bitpix: u16,
    pub vox_offset: f32,
    pub endianness: Endianness,
    pub data: Vec<u8>,
}

impl Default for TestImage {
    fn default() -> Self {
        TestImage {
            ndims: 3,
            dim: [4, 4, 4],
            time_length: 1,
            stat_length: 1,
            datatype: 2,
            bitpix: 8,
            vox_offset: 352.,
            endianness: Endianness::Little,
            data: (0..64).collect(),
        }
    }
}

fn write_at<F>(buf: &mut [u8], offset: usize, e: Endianness, f: F)
where
    F: FnOnce(&mut ByteOrdered<&mut [u8], Endianness>) -> std::io::Result<()>,
{
    let mut w = ByteOrdered::runtime(&mut buf[offset..], e);
    f(&mut w).unwrap();
}

impl TestImage {
    /// Serialize the object, header first and voxel data at `vox_offset`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let e = self.endianness;
        let offset = (self.vox_offset as usize).max(352);
        let mut buf = vec![0u8; offset];
        write_at(&mut buf, 0, e, |w| w.write_i32(348));
        buf[4..7].copy_from_slice(b"n+1");
        buf[344..348].copy_from_slice(b"n+1\0");
        write_at(&mut buf, 40, e, |w| w.write_u16(self.ndims));
        for (i, d) in self.dim.iter().enumerate() {
            write_at(&mut buf, 42 + i * 2, e, |w| w.write_u16(*d));
        }
        write_at(&mut buf, 48, e, |w| w.write_u16(self.time_length));
        write_at(&mut buf, 50, e, |w| w.write_u16(self.stat_length));
        write_at(&mut buf, 70, e, |w| w.write_u16(self.datatype));
        write_at(&mut buf, 72, e, |w| w.write_u16(self.bitpix));
        write_at(&mut buf, 108, e, |w| w.write_f32(self.vox_offset));
        buf.extend_from_slice(&self.data);
        buf
    }

    /// Serialize the object and gzip it, as in a `.nii.gz` file.
    #[allow(dead_code)]
    pub fn to_gz_bytes(&self) -> Vec<u8> {
        gzip(&self.to_bytes())
    }
}

#[allow(dead_code)]
pub fn gzip(data: &[u8]) -> Vec<u8> {
    let mut e = GzEncoder::new(Vec::new(), Compression::default());
    e.write_all(data).unwrap();
    e.finish().unwrap()
}

/// Encode 16-bit voxel values with the given byte order.
#[allow(dead_code)]
pub fn i16_bytes(values: &[i16], e: Endianness) -> Vec<u8> {
    let mut out = Vec::new();
    {
        let mut w = ByteOrdered::runtime(&mut out, e);
        for v in values {
            w.write_i16(*v).unwrap();
        }
    }
    out
}

/// The 4x4x4 volume of sequential bytes: `grid[i][j][k] == 16i + 4j + k`.
#[allow(dead_code)]
pub fn sequential_4x4x4() -> Vec<u8> {
    TestImage::default().to_bytes()
}
