//! Coordinate parsing for raw crash rows.

/// Parses lat/lon from optional string fields. Returns `None` if either is
/// missing, unparseable, or non-finite.
#[must_use]
pub fn parse_lat_lon(lat: Option<&str>, lon: Option<&str>) -> Option<(f64, f64)> {
    let latitude = lat?.trim().parse::<f64>().ok()?;
    let longitude = lon?.trim().parse::<f64>().ok()?;
    if !latitude.is_finite() || !longitude.is_finite() {
        return None;
    }
    Some((latitude, longitude))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lat_lon() {
        let (la, lo) = parse_lat_lon(Some("43.0"), Some("-107.5")).unwrap();
        assert!((la - 43.0).abs() < f64::EPSILON);
        assert!((lo - -107.5).abs() < f64::EPSILON);
    }

    #[test]
    fn trims_whitespace() {
        assert!(parse_lat_lon(Some(" 43.0 "), Some(" -107.5")).is_some());
    }

    #[test]
    fn rejects_missing() {
        assert!(parse_lat_lon(None, Some("-107.5")).is_none());
        assert!(parse_lat_lon(Some("43.0"), None).is_none());
    }

    #[test]
    fn rejects_unparseable() {
        assert!(parse_lat_lon(Some("n/a"), Some("-107.5")).is_none());
        assert!(parse_lat_lon(Some(""), Some("-107.5")).is_none());
    }

    #[test]
    fn rejects_non_finite() {
        assert!(parse_lat_lon(Some("NaN"), Some("-107.5")).is_none());
        assert!(parse_lat_lon(Some("43.0"), Some("inf")).is_none());
    }
}
