use super::interpolate::*;

#[test]
fn test_lin_interp() {
    assert_eq!(lin_interp(1.0, 3.0, 0.5), 2.0);
}

#[test]
fn test_bilin_interp() {
    assert_eq!(bilin_interp(1.0, 2.0, 3.0, 4.0, 0.5, 0.5), 2.5);
}

#[test]
fn test_find_grid_indices_inside() {
    let axis = [0.0, 1.0, 2.0, 4.0];
    assert_eq!(find_grid_indices(&axis, 0.5), Some((0, 1, 0.5)));
    assert_eq!(find_grid_indices(&axis, 3.0), Some((2, 3, 0.5)));
    // Endpoints are inside the axis
    assert_eq!(find_grid_indices(&axis, 0.0), Some((0, 1, 0.0)));
    assert_eq!(find_grid_indices(&axis, 4.0), Some((2, 3, 1.0)));
}

#[test]
fn test_find_grid_indices_outside() {
    let axis = [0.0, 1.0, 2.0];
    assert_eq!(find_grid_indices(&axis, -0.1), None);
    assert_eq!(find_grid_indices(&axis, 2.1), None);
    assert_eq!(find_grid_indices(&axis, f64::NAN), None);
    assert_eq!(find_grid_indices(&[1.0], 1.0), None);
}
