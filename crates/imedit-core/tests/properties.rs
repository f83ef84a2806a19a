//! Whole-crate properties of the transforms, checked over random buffers.
//!
//! Run with: `cargo test -p imedit-core`

use imedit_core::{
    ColorAdjustment, Operation, PixelBuffer, Rectangle, TransformError, apply_operation, crop,
    grayscale, mirror_horizontal, mirror_vertical, shift_color,
};
use proptest::prelude::*;

/// Random buffer up to 12x12, including empty ones.
fn arb_buffer() -> impl Strategy<Value = PixelBuffer> {
    (0u32..12, 0u32..12).prop_flat_map(|(w, h)| {
        proptest::collection::vec(any::<u8>(), (w * h * 4) as usize)
            .prop_map(move |samples| PixelBuffer::new(w, h, samples).unwrap())
    })
}

/// Random buffer together with a rectangle that fits it.
fn arb_buffer_and_rect() -> impl Strategy<Value = (PixelBuffer, Rectangle)> {
    arb_buffer().prop_flat_map(|buf| {
        let (w, h) = (buf.width(), buf.height());
        (Just(buf), 0..=w, 0..=w, 0..=h, 0..=h).prop_map(|(buf, a, b, c, d)| {
            let rect = Rectangle::new(a.min(b), a.max(b), c.min(d), c.max(d));
            (buf, rect)
        })
    })
}

proptest! {
    #[test]
    fn double_mirror_vertical_is_identity(buf in arb_buffer()) {
        prop_assert_eq!(mirror_vertical(&mirror_vertical(&buf)), buf);
    }

    #[test]
    fn double_mirror_horizontal_is_identity(buf in arb_buffer()) {
        prop_assert_eq!(mirror_horizontal(&mirror_horizontal(&buf)), buf);
    }

    #[test]
    fn shape_is_preserved(buf in arb_buffer(), dr in any::<i32>(), dg in any::<i32>(), db in any::<i32>()) {
        let dims = (buf.width(), buf.height());
        for out in [
            grayscale(&buf),
            shift_color(&buf, ColorAdjustment::rgb(dr, dg, db)),
            mirror_vertical(&buf),
            mirror_horizontal(&buf),
        ] {
            prop_assert_eq!((out.width(), out.height()), dims);
            prop_assert_eq!(out.samples().len(), buf.samples().len());
        }
    }

    #[test]
    fn shift_saturates(buf in arb_buffer(), dr in -2000i32..2000, dg in -2000i32..2000, db in -2000i32..2000) {
        let out = shift_color(&buf, ColorAdjustment::rgb(dr, dg, db));
        for (src, dst) in buf.pixels().iter().zip(out.pixels()) {
            for (c, delta) in [dr, dg, db].into_iter().enumerate() {
                let want = (src[c] as i32 + delta).clamp(0, 255) as u8;
                prop_assert_eq!(dst[c], want);
            }
            prop_assert_eq!(dst[3], src[3]);
        }
    }

    #[test]
    fn grayscale_of_gray_only_touches_alpha(w in 0u32..8, h in 0u32..8, levels in proptest::collection::vec((any::<u8>(), any::<u8>()), 64)) {
        let pixels: Vec<[u8; 4]> = levels
            .iter()
            .take((w * h) as usize)
            .map(|&(v, a)| [v, v, v, a])
            .collect();
        let buf = PixelBuffer::from_pixels(w, h, &pixels).unwrap();
        let out = grayscale(&buf);
        for (src, dst) in buf.pixels().iter().zip(out.pixels()) {
            prop_assert_eq!(*dst, [src[0], src[1], src[2], 255]);
        }
    }

    #[test]
    fn crop_is_contained((buf, rect) in arb_buffer_and_rect()) {
        let out = crop(&buf, rect).unwrap();
        prop_assert_eq!(out.width(), rect.x_right - rect.x_left);
        prop_assert_eq!(out.height(), rect.y_bottom - rect.y_top);
        for y in 0..out.height() {
            for x in 0..out.width() {
                prop_assert_eq!(out.get(x, y), buf.get(x + rect.x_left, y + rect.y_top));
            }
        }
    }

    #[test]
    fn crop_past_the_edge_fails(buf in arb_buffer(), extra in 1u32..5) {
        let rect = Rectangle::new(0, buf.width() + extra, 0, buf.height());
        let is_out_of_bounds = matches!(crop(&buf, rect), Err(TransformError::OutOfBounds { .. }));
        prop_assert!(is_out_of_bounds);
    }

    #[test]
    fn transforms_leave_input_untouched(buf in arb_buffer()) {
        let before = buf.clone();
        for op in [
            Operation::Grayscale,
            Operation::ShiftColor(ColorAdjustment::rgb(40, -40, 7)),
            Operation::MirrorVertical,
            Operation::MirrorHorizontal,
        ] {
            let _ = apply_operation(&buf, &op).unwrap();
            prop_assert_eq!(&buf, &before);
        }
    }
}

#[test]
fn test_buffer_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PixelBuffer>();

    let buf = PixelBuffer::filled(16, 16, [10, 200, 30, 255]).unwrap();
    std::thread::scope(|s| {
        let a = s.spawn(|| grayscale(&buf));
        let b = s.spawn(|| mirror_vertical(&buf));
        assert_eq!(a.join().unwrap().get(0, 0), Some([80, 80, 80, 255]));
        assert_eq!(b.join().unwrap(), buf);
    });
}
