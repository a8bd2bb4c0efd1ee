//! Cursor clip rectangle math.

/// Shrink `(left, top, right, bottom)` by `pad` on every side.
///
/// An axis too small to lose `2 * pad` is left as is, so the result is
/// never inverted.
pub fn inset_bounds(bounds: (i32, i32, i32, i32), pad: i32) -> (i32, i32, i32, i32) {
    let (mut left, mut top, mut right, mut bottom) = bounds;
    if right - left > 2 * pad {
        left += pad;
        right -= pad;
    }
    if bottom - top > 2 * pad {
        top += pad;
        bottom -= pad;
    }
    (left, top, right, bottom)
}
