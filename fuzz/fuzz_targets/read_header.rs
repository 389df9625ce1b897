#![no_main]
use libfuzzer_sys::fuzz_target;
use nifti_slice::{looks_like_nifti1, NiftiHeader};

fuzz_target!(|data: &[u8]| {
    let _ = looks_like_nifti1(data);
    if let Ok(header) = NiftiHeader::from_bytes(data) {
        let _ = header.data_type();
        let _ = header.voxel_count();
        let _ = header.image_range();
        let _ = header.volume_range();
    }
});
