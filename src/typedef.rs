//! This module contains the voxel data types understood by the decoder.
//! Primitive datatype codes from the header can be converted to these
//! types, with unsupported codes falling back to `Uint8`.

use num_traits::FromPrimitive;

/// Data type for representing a NIFTI value type in a volume.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, FromPrimitive)]
pub enum NiftiType {
    /// unsigned char.
    // NIFTI_TYPE_UINT8           2
    Uint8 = 2,
    /// signed short.
    // NIFTI_TYPE_INT16           4
    Int16 = 4,
    /// signed int.
    // NIFTI_TYPE_INT32           8
    Int32 = 8,
    /// 32 bit float.
    // NIFTI_TYPE_FLOAT32        16
    Float32 = 16,
    /// 64 bit float = double.
    // NIFTI_TYPE_FLOAT64        64
    Float64 = 64,
    /// signed char.
    // NIFTI_TYPE_INT8          256
    Int8 = 256,
    /// unsigned short.
    // NIFTI_TYPE_UINT16        512
    Uint16 = 512,
    /// unsigned int.
    // NIFTI_TYPE_UINT32        768
    Uint32 = 768,
}

impl NiftiType {
    /// Resolve a header datatype code. Codes outside of the supported
    /// set are read as unsigned bytes instead of being rejected.
    pub fn from_code(code: u16) -> NiftiType {
        NiftiType::from_u16(code).unwrap_or_else(|| {
            warn!("Unsupported datatype code {}, reading voxels as u8", code);
            NiftiType::Uint8
        })
    }

    /// Retrieve the size of an element of this data type, in bytes.
    pub fn size_of(self) -> usize {
        use NiftiType::*;
        match self {
            Int8 | Uint8 => 1,
            Int16 | Uint16 => 2,
            Int32 | Uint32 | Float32 => 4,
            Float64 => 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NiftiType;

    #[test]
    fn known_codes() {
        assert_eq!(NiftiType::from_code(2), NiftiType::Uint8);
        assert_eq!(NiftiType::from_code(4), NiftiType::Int16);
        assert_eq!(NiftiType::from_code(8), NiftiType::Int32);
        assert_eq!(NiftiType::from_code(16), NiftiType::Float32);
        assert_eq!(NiftiType::from_code(64), NiftiType::Float64);
        assert_eq!(NiftiType::from_code(256), NiftiType::Int8);
        assert_eq!(NiftiType::from_code(512), NiftiType::Uint16);
        assert_eq!(NiftiType::from_code(768), NiftiType::Uint32);
    }

    #[test]
    fn unknown_codes_fall_back_to_u8() {
        assert_eq!(NiftiType::from_code(9999), NiftiType::Uint8);
        assert_eq!(NiftiType::from_code(0), NiftiType::Uint8);
        // complex64 exists in NIfTI-1 but is not decoded here
        assert_eq!(NiftiType::from_code(32), NiftiType::Uint8);
    }

    #[test]
    fn element_sizes() {
        assert_eq!(NiftiType::Int8.size_of(), 1);
        assert_eq!(NiftiType::Uint16.size_of(), 2);
        assert_eq!(NiftiType::Float32.size_of(), 4);
        assert_eq!(NiftiType::Float64.size_of(), 8);
    }
}
