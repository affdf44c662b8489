use gridscan::{GridBuf, GridCells, GridScanError, GridView};

#[test]
fn view_rejects_invalid_dimensions() {
    let data = [0u8; 4];

    let err = GridView::from_slice(&data, 0, 1).err().unwrap();
    assert_eq!(err, GridScanError::InvalidDimensions { rows: 0, cols: 1 });

    let err = GridView::from_slice(&data, 1, 0).err().unwrap();
    assert_eq!(err, GridScanError::InvalidDimensions { rows: 1, cols: 0 });
}

#[test]
fn view_rejects_invalid_step() {
    let data = [0u8; 8];

    let err = GridView::new(&data, 1, 4, 3).err().unwrap();
    assert_eq!(err, GridScanError::InvalidStride { cols: 4, step: 3 });
}

#[test]
fn view_rejects_small_buffer() {
    let data = [0u8; 3];

    let err = GridView::new(&data, 2, 2, 2).err().unwrap();
    assert_eq!(err, GridScanError::BufferTooSmall { needed: 4, got: 3 });
}

#[test]
fn view_crop_matches_expected_values() {
    let data: Vec<u8> = (0u8..16).collect();
    let view = GridView::from_slice(&data, 4, 4).unwrap();
    assert_eq!(view.step(), 4);

    let sub = view.crop(1, 1, 2, 2).unwrap();
    assert_eq!(sub.rows(), 2);
    assert_eq!(sub.cols(), 2);
    assert_eq!(sub.step(), 4);
    assert_eq!(sub.row(0).unwrap(), &[5u8, 6u8]);
    assert_eq!(sub.row(1).unwrap(), &[9u8, 10u8]);
    assert_eq!(sub.get(0, 0).copied(), Some(5u8));
    assert!(sub.get(2, 0).is_none());

    let err = view.crop(3, 3, 2, 2).err().unwrap();
    assert_eq!(
        err,
        GridScanError::OutOfRange {
            top: 3,
            left: 3,
            rows: 2,
            cols: 2,
            src_rows: 4,
            src_cols: 4,
        }
    );
}

#[test]
fn signed_crop_reverses_a_crop() {
    let data: Vec<u16> = (0u16..20).collect();
    let view = GridView::from_slice(&data, 4, 5).unwrap();

    let sub = view.crop(1, 2, 2, 2).unwrap();
    let back = sub.crop_signed(-1, -2, 4, 5).unwrap();
    assert_eq!(back.rows(), view.rows());
    assert_eq!(back.cols(), view.cols());
    for y in 0..4 {
        for x in 0..5 {
            assert_eq!(back.get(y, x), view.get(y, x));
        }
    }
}

#[test]
fn signed_crop_cannot_escape_the_allocation() {
    let data: Vec<u16> = (0u16..20).collect();
    let view = GridView::from_slice(&data, 4, 5).unwrap();
    let sub = view.crop(1, 2, 2, 2).unwrap();

    // widening further than the original origin is rejected
    assert!(sub.crop_signed(-2, -2, 5, 5).is_err());
    assert!(sub.crop_signed(-1, -3, 4, 5).is_err());
    // a window taller than the allocation is rejected as well
    assert!(sub.crop_signed(-1, -2, 5, 5).is_err());
}

#[test]
fn deep_clone_is_independent_both_ways() {
    let source = GridBuf::from_vec((1i32..=9).collect(), 3, 3).unwrap();
    let copy = source.deep_clone();

    copy.set(0, 0, 42);
    assert_eq!(source.get(0, 0), Some(1));

    source.set(2, 2, -1);
    assert_eq!(copy.get(2, 2), Some(9));
}

#[test]
fn shallow_clone_shares_the_buffer() {
    let a = GridBuf::from_vec(vec![0i32; 6], 2, 3).unwrap();
    let b = a.clone();

    b.set(1, 2, 7);
    assert_eq!(a.get(1, 2), Some(7));
}

#[test]
fn cropped_child_keeps_the_allocation_alive() {
    let parent = GridBuf::from_vec((0u8..12).collect(), 3, 4).unwrap();
    let child = parent.crop(1, 1, 2, 2).unwrap();
    drop(parent);

    assert_eq!(child.get(0, 0), Some(5));
    assert_eq!(child.get(1, 1), Some(10));
}

#[test]
fn buf_signed_crop_reverses_a_crop() {
    let parent = GridBuf::from_vec((0i32..12).collect(), 3, 4).unwrap();
    let child = parent.crop(1, 1, 2, 3).unwrap();
    let back = child.crop_signed(-1, -1, 3, 4).unwrap();
    for y in 0..3 {
        for x in 0..4 {
            assert_eq!(back.get(y, x), parent.get(y, x));
        }
    }
}

#[test]
fn copy_to_requires_matching_shapes() {
    let data = [0u8; 12];
    let mut out = [0u8; 6];
    let src = GridView::from_slice(&data, 3, 4).unwrap();
    let dst = GridCells::from_mut(&mut out, 2, 3).unwrap();

    let err = src.copy_to(dst).err().unwrap();
    assert_eq!(
        err,
        GridScanError::ShapeMismatch {
            expected_rows: 3,
            expected_cols: 4,
            rows: 2,
            cols: 3,
        }
    );
}

#[test]
fn copy_to_skips_row_padding() {
    // 2x2 view with step 3: elements 0,1 / 3,4; padding 2,5 must not leak
    let data: Vec<u8> = (10u8..16).collect();
    let mut out = [0u8; 4];
    let src = GridView::new(&data, 2, 2, 3).unwrap();
    let dst = GridCells::from_mut(&mut out, 2, 2).unwrap();

    src.copy_to(dst).unwrap();
    assert_eq!(out, [10, 11, 13, 14]);
}

#[test]
fn deep_clone_normalizes_the_step() {
    let data: Vec<u8> = (0u8..12).collect();
    let src = GridView::new(&data, 3, 2, 4).unwrap();
    let copy = src.deep_clone();

    assert_eq!(copy.step(), 2);
    assert_eq!(copy.get(0, 1), Some(1));
    assert_eq!(copy.get(2, 0), Some(8));
}

#[test]
fn cells_view_reads_and_writes_in_place() {
    let mut data = [0i32; 6];
    {
        let cells = GridCells::from_mut(&mut data, 2, 3).unwrap();
        cells.fill(3);
        cells.set(1, 2, 9);
        assert_eq!(cells.get(1, 2), Some(9));
        assert_eq!(cells.get(0, 0), Some(3));
        assert!(cells.get(2, 0).is_none());
    }
    assert_eq!(data, [3, 3, 3, 3, 3, 9]);
}

#[test]
fn buf_from_vec_rejects_short_buffers() {
    let err = GridBuf::from_vec(vec![0u8; 5], 2, 3).err().unwrap();
    assert_eq!(err, GridScanError::BufferTooSmall { needed: 6, got: 5 });
}

#[test]
fn buf_fill_and_copy_to() {
    let a = GridBuf::from_vec((0i32..6).collect(), 2, 3).unwrap();
    let b = GridBuf::new(2, 3).unwrap();

    a.copy_to(&b).unwrap();
    assert_eq!(b.get(1, 1), Some(4));

    b.fill(0);
    assert_eq!(b.get(1, 1), Some(0));
    // the fill touched only the copy
    assert_eq!(a.get(1, 1), Some(4));
}
