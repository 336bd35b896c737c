use num_traits::Float;

/// Generic linear interpolation between two values
pub fn lin_interp<T: Float>(v0: T, v1: T, fac: T) -> T {
    v0 + (v1 - v0) * fac
}

/// Generic bilinear interpolation.
/// `fXY` is the value at corner (x index X, y index Y).
pub fn bilin_interp<T: Float>(f00: T, f01: T, f10: T, f11: T, fac_x: T, fac_y: T) -> T {
    let f_y0 = lin_interp(f00, f10, fac_x);
    let f_y1 = lin_interp(f01, f11, fac_x);
    lin_interp(f_y0, f_y1, fac_y)
}

/// Find the bracketing indices and weight of `target` on an ascending axis.
///
/// Returns `None` when the axis has fewer than two values or the target lies
/// outside it (no extrapolation).
pub fn find_grid_indices(coords: &[f64], target: f64) -> Option<(usize, usize, f64)> {
    if coords.len() < 2 {
        return None;
    }
    let last = coords.len() - 1;
    if !(target >= coords[0] && target <= coords[last]) {
        return None;
    }

    // Binary search for insertion point
    let mut left = 0;
    let mut right = last;

    while right - left > 1 {
        let mid = (left + right) / 2;
        if coords[mid] <= target {
            left = mid;
        } else {
            right = mid;
        }
    }

    let weight = (target - coords[left]) / (coords[right] - coords[left]);

    Some((left, right, weight))
}
