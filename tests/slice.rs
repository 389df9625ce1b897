use nifti_slice::{extract, Axis, Direction, NiftiError, Volume, Voxel, VoxelBuffer};
use pretty_assertions::assert_eq;

fn sequential(dim: [u16; 3]) -> Volume {
    let n: usize = dim.iter().map(|&d| usize::from(d)).product();
    let voxels = VoxelBuffer::Int32((0..n as i32).collect());
    Volume::from_voxels(&voxels, dim).unwrap()
}

fn values(direction: Direction, volume: &Volume, voxel: Voxel) -> Vec<f64> {
    extract(direction, volume, voxel).unwrap().into_vec()
}

#[test]
fn right_and_left_at_x0() {
    let v = sequential([4, 4, 4]);
    let right = values(Direction::Right, &v, Voxel::new(0, 0, 0));
    // grid[y][z][0] == 16y + 4z, y then z ascending
    let expected: Vec<f64> = (0..4)
        .flat_map(|y| (0..4).map(move |z| f64::from(16 * y + 4 * z)))
        .collect();
    assert_eq!(right, expected);

    let left = values(Direction::Left, &v, Voxel::new(0, 0, 0));
    let expected: Vec<f64> = (0..4)
        .rev()
        .flat_map(|y| (0..4).map(move |z| f64::from(16 * y + 4 * z)))
        .collect();
    assert_eq!(left, expected);
}

#[test]
fn slice_lengths() {
    // dims along y and z must agree for every direction to stay inside the grid
    let v = sequential([5, 3, 3]);
    let voxel = Voxel::new(4, 2, 1);
    let cases = [
        (Direction::Anterior, (3, 5)),
        (Direction::Posterior, (3, 5)),
        (Direction::Left, (3, 3)),
        (Direction::Right, (3, 3)),
        (Direction::Foot, (3, 5)),
        (Direction::Head, (3, 5)),
    ];
    for (d, shape) in cases.iter() {
        let s = extract(*d, &v, voxel).unwrap();
        assert_eq!(s.shape(), *shape, "shape of {}", d);
        assert_eq!(s.len(), shape.0 * shape.1, "length of {}", d);
        assert_eq!(s.direction(), *d);
    }
}

#[test]
fn posterior_reverses_anterior() {
    let v = sequential([5, 3, 3]);
    for y in 0..3 {
        let voxel = Voxel::new(0, y, 0);
        let mut anterior = values(Direction::Anterior, &v, voxel);
        anterior.reverse();
        assert_eq!(values(Direction::Posterior, &v, voxel), anterior);
    }
}

#[test]
fn head_reverses_foot_rows() {
    let v = sequential([5, 3, 3]);
    for z in 0..3 {
        let voxel = Voxel::new(0, 0, z);
        let foot = values(Direction::Foot, &v, voxel);
        let head = values(Direction::Head, &v, voxel);
        let mut foot_rows: Vec<&[f64]> = foot.chunks(5).collect();
        foot_rows.reverse();
        let head_rows: Vec<&[f64]> = head.chunks(5).collect();
        assert_eq!(head_rows, foot_rows);
    }
}

#[test]
fn left_reverses_right_rows() {
    let v = sequential([3, 3, 3]);
    let voxel = Voxel::new(1, 0, 0);
    let right = values(Direction::Right, &v, voxel);
    let left = values(Direction::Left, &v, voxel);
    let mut right_rows: Vec<&[f64]> = right.chunks(3).collect();
    right_rows.reverse();
    assert_eq!(left.chunks(3).collect::<Vec<_>>(), right_rows);
}

#[test]
fn fixed_coordinate_is_validated() {
    let v = sequential([4, 4, 4]);
    let cases = [
        (Direction::Anterior, Voxel::new(0, 4, 0), Axis::Y),
        (Direction::Posterior, Voxel::new(0, 9, 0), Axis::Y),
        (Direction::Left, Voxel::new(4, 0, 0), Axis::X),
        (Direction::Right, Voxel::new(100, 0, 0), Axis::X),
        (Direction::Foot, Voxel::new(0, 0, 4), Axis::Z),
        (Direction::Head, Voxel::new(0, 0, 5), Axis::Z),
    ];
    for (d, voxel, axis) in cases.iter() {
        match extract(*d, &v, *voxel) {
            Err(NiftiError::OutOfRange {
                axis: a, extent: 4, ..
            }) => assert_eq!(a, *axis),
            other => panic!("unexpected result for {}: {:?}", d, other),
        }
    }
}

#[test]
fn traversal_outside_the_grid_is_rejected() {
    // z runs to 3 but addresses the axis sized by dim.y == 2
    let v = sequential([2, 2, 3]);
    match extract(Direction::Anterior, &v, Voxel::new(0, 0, 0)) {
        Err(NiftiError::OutOfRange {
            axis: Axis::Z,
            index: 2,
            extent: 2,
        }) => {}
        other => panic!("unexpected result {:?}", other),
    }
    // y runs to 2 over the axis sized by dim.z == 3, which fits
    let s = extract(Direction::Foot, &v, Voxel::new(0, 0, 0)).unwrap();
    assert_eq!(s.shape(), (2, 2));
}

#[test]
fn slice_as_array() {
    let v = sequential([3, 3, 3]);
    let s = extract(Direction::Foot, &v, Voxel::new(0, 0, 2)).unwrap();
    let a = s.into_ndarray().unwrap();
    assert_eq!(a.shape(), &[3, 3]);
    // row y, column x: grid[y][2][x]
    assert_eq!(a[[1, 2]], f64::from(9 + 2 * 3 + 2));
}
