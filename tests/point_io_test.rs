use std::path::Path;
use tempfile::tempdir;
use wind_vectors::data_io::{
    create_writer, create_writer_auto, read_point_set, write_point_set, PointIoError, PointSetFormat,
};
use wind_vectors::vectors::{allocate_vector_points, Region, VectorPoint};

fn sample_points() -> Vec<VectorPoint> {
    vec![
        VectorPoint::with_age(-12.345678901234, 51.5, 3),
        VectorPoint::new(0.1, -0.2),
        VectorPoint::with_age(179.99, -89.5, 42),
    ]
}

#[test]
fn test_json_point_set() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("points.json");

    let mut writer = create_writer(&path, PointSetFormat::Json);
    writer.write_points(&sample_points()[..2]).unwrap();
    writer.write_points(&sample_points()[2..]).unwrap();
    writer.close().unwrap();
    assert!(writer.get_output_path().ends_with("points.json"));

    assert_eq!(read_point_set(&path).unwrap(), sample_points());
}

#[test]
fn test_ascii_point_set() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("points.txt");

    let mut writer = create_writer_auto(&path);
    writer.write_points(&sample_points()).unwrap();
    writer.close().unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("# Wind vector points"));
    assert!(text.contains("# Count: 3"));

    assert_eq!(read_point_set(&path).unwrap(), sample_points());
}

#[test]
fn test_reload_and_reallocate() {
    let temp_dir = tempdir().unwrap();
    let region = Region::new(0.0, 30.0, 0.0, 30.0).unwrap();
    let first = allocate_vector_points(None, &region, 2.0, 5_000, Some(17)).unwrap();

    for name in ["frame.json", "frame.txt"] {
        let path = temp_dir.path().join(name);
        write_point_set(&path, PointSetFormat::from_path(&path), &first).unwrap();
        let loaded = read_point_set(&path).unwrap();

        let second = allocate_vector_points(Some(&loaded), &region, 2.0, 5_000, Some(18)).unwrap();
        assert!(first
            .iter()
            .zip(second.iter())
            .all(|(a, b)| a.lon == b.lon && a.lat == b.lat && b.age == a.age + 1));
    }
}

#[test]
fn test_json_reload_is_bit_exact() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("exact.json");
    let region = Region::new(0.0, 30.0, 0.0, 30.0).unwrap();
    let points = allocate_vector_points(None, &region, 2.0, 5_000, Some(17)).unwrap();

    write_point_set(&path, PointSetFormat::Json, &points).unwrap();
    let loaded = read_point_set(&path).unwrap();

    assert_eq!(loaded.len(), points.len());
    for (a, b) in points.iter().zip(loaded.iter()) {
        assert_eq!(a.lon.to_bits(), b.lon.to_bits());
        assert_eq!(a.lat.to_bits(), b.lat.to_bits());
        assert_eq!(a.age, b.age);
    }
}

#[test]
fn test_format_detection() {
    assert_eq!(PointSetFormat::from_path(Path::new("a.json")), PointSetFormat::Json);
    assert_eq!(PointSetFormat::from_path(Path::new("a.txt")), PointSetFormat::Ascii);
    assert_eq!(PointSetFormat::from_path(Path::new("a")), PointSetFormat::Json);
    assert_eq!("ASCII".parse::<PointSetFormat>().unwrap(), PointSetFormat::Ascii);
    assert!("netcdf".parse::<PointSetFormat>().is_err());
    assert_eq!(PointSetFormat::Ascii.to_string(), "ascii");
    assert_eq!(PointSetFormat::Json.extension(), "json");
}

#[test]
fn test_read_errors() {
    let temp_dir = tempdir().unwrap();

    let missing = read_point_set(&temp_dir.path().join("missing.json"));
    assert!(matches!(missing, Err(PointIoError::Io(_))));

    let bad_json = temp_dir.path().join("bad.json");
    std::fs::write(&bad_json, "{not json").unwrap();
    assert!(matches!(read_point_set(&bad_json), Err(PointIoError::Json(_))));

    let bad_ascii = temp_dir.path().join("bad.txt");
    std::fs::write(&bad_ascii, "1.0 two 3\n").unwrap();
    assert!(matches!(read_point_set(&bad_ascii), Err(PointIoError::Parse(_))));
}
