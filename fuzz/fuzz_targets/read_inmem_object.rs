#![no_main]
use libfuzzer_sys::fuzz_target;
use nifti_slice::{Direction, InMemNiftiObject, Voxel};

fuzz_target!(|data: &[u8]| {
    if let Ok(obj) = InMemNiftiObject::from_bytes(data) {
        for d in Direction::ALL.iter() {
            let _ = obj.extract(*d, Voxel::new(0, 0, 0));
        }
    }
});
