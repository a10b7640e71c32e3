use super::*;

fn two_by_one() -> FrameRGBA {
    FrameRGBA {
        width: 2,
        height: 1,
        data: vec![10, 20, 30, 255, 64, 0, 0, 128],
        premultiplied: true,
    }
}

#[test]
fn pixel_lookup_is_row_major_and_bounded() {
    let f = two_by_one();
    assert_eq!(f.pixel(0, 0), Some([10, 20, 30, 255]));
    assert_eq!(f.pixel(1, 0), Some([64, 0, 0, 128]));
    assert_eq!(f.pixel(2, 0), None);
    assert_eq!(f.pixel(0, 1), None);
}

#[test]
fn unpremultiply_restores_straight_channels() {
    let mut f = two_by_one();
    f.unpremultiply();
    assert!(!f.premultiplied);
    assert_eq!(f.pixel(0, 0), Some([10, 20, 30, 255]));
    assert_eq!(f.pixel(1, 0), Some([128, 0, 0, 128]));
}
