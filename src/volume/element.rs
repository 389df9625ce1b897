//! This module defines the data element API, which turns the raw pixel
//! region of a NIfTI-1 file into a typed voxel buffer.
use crate::typedef::NiftiType;
use byteordered::Endianness;
use bytemuck::Pod;
use num_traits::AsPrimitive;

/// Trait type for characterizing a NIfTI data element, implemented for
/// primitive numeric types which are used by the crate to represent voxel
/// values.
pub trait DataElement: Pod + AsPrimitive<f64> {
    /// The `datatype` mapped to the type T
    const DATA_TYPE: NiftiType;

    /// Reverse the byte order of the value.
    fn swap_bytes(self) -> Self;

    /// Reinterpret raw bytes as a sequence of elements stored with the given
    /// byte order. Trailing bytes which do not fill an element are ignored.
    fn from_raw_bytes(bytes: &[u8], endianness: Endianness) -> Vec<Self> {
        let width = std::mem::size_of::<Self>();
        let usable = bytes.len() - bytes.len() % width;
        let mut out: Vec<Self> = bytemuck::pod_collect_to_vec(&bytes[..usable]);
        if width > 1 && endianness != Endianness::native() {
            for v in out.iter_mut() {
                *v = v.swap_bytes();
            }
        }
        out
    }
}

macro_rules! impl_int_element {
    ($t: ty, $dt: ident) => {
        impl DataElement for $t {
            const DATA_TYPE: NiftiType = NiftiType::$dt;
            fn swap_bytes(self) -> Self {
                <$t>::swap_bytes(self)
            }
        }
    };
}

impl_int_element!(u8, Uint8);
impl_int_element!(i8, Int8);
impl_int_element!(u16, Uint16);
impl_int_element!(i16, Int16);
impl_int_element!(u32, Uint32);
impl_int_element!(i32, Int32);

impl DataElement for f32 {
    const DATA_TYPE: NiftiType = NiftiType::Float32;
    fn swap_bytes(self) -> Self {
        f32::from_bits(self.to_bits().swap_bytes())
    }
}

impl DataElement for f64 {
    const DATA_TYPE: NiftiType = NiftiType::Float64;
    fn swap_bytes(self) -> Self {
        f64::from_bits(self.to_bits().swap_bytes())
    }
}

fn widen<T: DataElement>(value: &T) -> f64 {
    value.as_()
}

/// A flat, homogeneous sequence of voxel values, tagged by element type.
#[derive(Debug, Clone, PartialEq)]
pub enum VoxelBuffer {
    /// unsigned 8-bit voxels
    Uint8(Vec<u8>),
    /// signed 8-bit voxels
    Int8(Vec<i8>),
    /// unsigned 16-bit voxels
    Uint16(Vec<u16>),
    /// signed 16-bit voxels
    Int16(Vec<i16>),
    /// unsigned 32-bit voxels
    Uint32(Vec<u32>),
    /// signed 32-bit voxels
    Int32(Vec<i32>),
    /// single precision voxels
    Float32(Vec<f32>),
    /// double precision voxels
    Float64(Vec<f64>),
}

impl VoxelBuffer {
    /// Interpret the pixel region of a file according to a header
    /// datatype code. Unknown codes are read as unsigned bytes.
    pub fn from_bytes(datatype: u16, bytes: &[u8], endianness: Endianness) -> VoxelBuffer {
        Self::with_type(NiftiType::from_code(datatype), bytes, endianness)
    }

    /// Interpret raw bytes as voxels of the given type.
    pub fn with_type(data_type: NiftiType, bytes: &[u8], endianness: Endianness) -> VoxelBuffer {
        use VoxelBuffer::*;
        match data_type {
            NiftiType::Uint8 => Uint8(bytes.to_vec()),
            NiftiType::Int8 => Int8(i8::from_raw_bytes(bytes, endianness)),
            NiftiType::Uint16 => Uint16(u16::from_raw_bytes(bytes, endianness)),
            NiftiType::Int16 => Int16(i16::from_raw_bytes(bytes, endianness)),
            NiftiType::Uint32 => Uint32(u32::from_raw_bytes(bytes, endianness)),
            NiftiType::Int32 => Int32(i32::from_raw_bytes(bytes, endianness)),
            NiftiType::Float32 => Float32(f32::from_raw_bytes(bytes, endianness)),
            NiftiType::Float64 => Float64(f64::from_raw_bytes(bytes, endianness)),
        }
    }

    /// Get the element type of this buffer.
    pub fn data_type(&self) -> NiftiType {
        use VoxelBuffer::*;
        match self {
            Uint8(_) => u8::DATA_TYPE,
            Int8(_) => i8::DATA_TYPE,
            Uint16(_) => u16::DATA_TYPE,
            Int16(_) => i16::DATA_TYPE,
            Uint32(_) => u32::DATA_TYPE,
            Int32(_) => i32::DATA_TYPE,
            Float32(_) => f32::DATA_TYPE,
            Float64(_) => f64::DATA_TYPE,
        }
    }

    /// Number of voxels in the buffer.
    pub fn len(&self) -> usize {
        use VoxelBuffer::*;
        match self {
            Uint8(v) => v.len(),
            Int8(v) => v.len(),
            Uint16(v) => v.len(),
            Int16(v) => v.len(),
            Uint32(v) => v.len(),
            Int32(v) => v.len(),
            Float32(v) => v.len(),
            Float64(v) => v.len(),
        }
    }

    /// Whether the buffer holds no voxels.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fetch the voxel at the given linear index as a double precision
    /// value, regardless of the element type.
    pub fn get_f64(&self, index: usize) -> Option<f64> {
        use VoxelBuffer::*;
        match self {
            Uint8(v) => v.get(index).map(widen),
            Int8(v) => v.get(index).map(widen),
            Uint16(v) => v.get(index).map(widen),
            Int16(v) => v.get(index).map(widen),
            Uint32(v) => v.get(index).map(widen),
            Int32(v) => v.get(index).map(widen),
            Float32(v) => v.get(index).map(widen),
            Float64(v) => v.get(index).copied(),
        }
    }

    /// Iterate over all voxels in linear order as double precision values.
    pub fn iter_f64(&self) -> Box<dyn Iterator<Item = f64> + '_> {
        use VoxelBuffer::*;
        match self {
            Uint8(v) => Box::new(v.iter().map(widen)),
            Int8(v) => Box::new(v.iter().map(widen)),
            Uint16(v) => Box::new(v.iter().map(widen)),
            Int16(v) => Box::new(v.iter().map(widen)),
            Uint32(v) => Box::new(v.iter().map(widen)),
            Int32(v) => Box::new(v.iter().map(widen)),
            Float32(v) => Box::new(v.iter().map(widen)),
            Float64(v) => Box::new(v.iter().copied()),
        }
    }
}
