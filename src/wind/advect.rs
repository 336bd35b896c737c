use super::WindField;
use crate::config::Constants;
use crate::vectors::VectorPoint;

/// Move points with the wind for `dt_seconds`.
///
/// Displacements are converted from metres to degrees with the mean length
/// of a degree of latitude, shrinking longitude steps by cos(latitude).
/// Ages are carried unchanged; points where the wind cannot be sampled are
/// dropped. The result is the `previous` set for the next allocation.
pub fn advect_points(
    points: &[VectorPoint],
    field: &WindField,
    dt_seconds: f64,
    constants: &Constants,
) -> Vec<VectorPoint> {
    let metres_per_degree = constants.deg_dist * 1000.0;

    points
        .iter()
        .filter_map(|p| {
            let (u, v) = field.sample(p.lon, p.lat)?;
            let cos_lat = p.lat.to_radians().cos().max(constants.min_cos_lat);
            Some(VectorPoint::with_age(
                p.lon + u * dt_seconds / (metres_per_degree * cos_lat),
                p.lat + v * dt_seconds / metres_per_degree,
                p.age,
            ))
        })
        .collect()
}
