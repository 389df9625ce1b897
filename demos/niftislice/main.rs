//! An application for extracting anatomical slices from a NIFTI-1 file.
//!
//! Usage: `niftislice <file.nii[.gz]> [x y z] [directions]`, where
//! `directions` is a comma separated list such as `h,r,a`. The reference
//! voxel defaults to the center of the volume. Any invalid argument or
//! unreadable file aborts the program with a message.

use nifti_slice::slice::parse_directions;
use nifti_slice::{ReaderOptions, Voxel};
use std::env;
use std::fs;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let filename = args.first().expect("Path to NIFTI file is required");
    let bytes = fs::read(filename).expect("Failed to read NIFTI file");

    let mut options = ReaderOptions::new();
    if let Some(tags) = args.get(4) {
        let directions = parse_directions(tags).expect("Invalid direction list");
        let _ = options.directions(directions);
    }
    let obj = options.read_bytes(&bytes).expect("Failed to decode NIFTI file");

    let [dx, dy, dz] = obj.header().dim;
    let voxel = if args.len() >= 4 {
        let coord = |i: usize| -> usize { args[i].parse().expect("Invalid voxel coordinate") };
        Voxel::new(coord(1), coord(2), coord(3))
    } else {
        Voxel::new(usize::from(dx) / 2, usize::from(dy) / 2, usize::from(dz) / 2)
    };

    println!("{:#?}", obj.header());
    let slices = obj
        .render_directions(voxel, obj.directions().iter().copied())
        .expect("Failed to extract slices");
    for s in &slices {
        let (rows, cols) = s.shape();
        let (min, max) = s
            .data()
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        println!(
            "{:>9}: {} x {} samples, range [{}, {}]",
            s.direction(),
            rows,
            cols,
            min,
            max
        );
    }
}
