//! GPS coordinate resolution from raw EXIF sub-tags.

use crate::types::{Coordinates, GpsInfo, GpsValue};

/// Resolve the GPS sub-map into signed decimal degrees.
///
/// All four of latitude, latitude ref, longitude, and longitude ref must
/// be present; GPS metadata is optional, so anything missing yields
/// `None` rather than an error.
///
/// The hemisphere sign is a strict equality check against one literal:
/// latitude is negated unless the ref is exactly `"N"`, longitude unless
/// it is exactly `"E"`. A malformed ref therefore flips the sign.
pub fn resolve_coordinates(gps: &GpsInfo) -> Option<Coordinates> {
    let lat_triple = rationals(gps, "GPSLatitude")?;
    let lat_ref = text(gps, "GPSLatitudeRef")?;
    let lon_triple = rationals(gps, "GPSLongitude")?;
    let lon_ref = text(gps, "GPSLongitudeRef")?;

    let mut latitude = to_degrees(lat_triple)?;
    if lat_ref != "N" {
        latitude = -latitude;
    }

    let mut longitude = to_degrees(lon_triple)?;
    if lon_ref != "E" {
        longitude = -longitude;
    }

    Some(Coordinates {
        latitude,
        longitude,
    })
}

/// Convert a degrees/minutes/seconds rational triple to decimal degrees.
fn to_degrees(triple: &[(u32, u32)]) -> Option<f64> {
    if triple.len() < 3 {
        return None;
    }
    let degrees = ratio(triple[0]);
    let minutes = ratio(triple[1]);
    let seconds = ratio(triple[2]);
    Some(degrees + minutes / 60.0 + seconds / 3600.0)
}

fn ratio((num, denom): (u32, u32)) -> f64 {
    f64::from(num) / f64::from(denom)
}

fn rationals<'a>(gps: &'a GpsInfo, key: &str) -> Option<&'a [(u32, u32)]> {
    match gps.get(key)? {
        GpsValue::Rationals(v) => Some(v),
        GpsValue::Text(_) => None,
    }
}

fn text<'a>(gps: &'a GpsInfo, key: &str) -> Option<&'a str> {
    match gps.get(key)? {
        GpsValue::Text(s) => Some(s),
        GpsValue::Rationals(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PITTSBURGH_LAT: [(u32, u32); 3] = [(40, 1), (26, 1), (46, 1)];
    const PITTSBURGH_LON: [(u32, u32); 3] = [(79, 1), (56, 1), (55, 1)];

    fn gps(lat_ref: &str, lon_ref: &str) -> GpsInfo {
        let mut info = GpsInfo::new();
        info.insert(
            "GPSLatitude".to_string(),
            GpsValue::Rationals(PITTSBURGH_LAT.to_vec()),
        );
        info.insert("GPSLatitudeRef".to_string(), GpsValue::Text(lat_ref.to_string()));
        info.insert(
            "GPSLongitude".to_string(),
            GpsValue::Rationals(PITTSBURGH_LON.to_vec()),
        );
        info.insert("GPSLongitudeRef".to_string(), GpsValue::Text(lon_ref.to_string()));
        info
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {} to be close to {}",
            actual,
            expected
        );
    }

    #[test]
    fn test_degree_conversion() {
        let coords = resolve_coordinates(&gps("N", "W")).unwrap();
        assert_close(coords.latitude, 40.446111111111116);
        assert_close(coords.longitude, -79.94861111111112);
    }

    #[test]
    fn test_fractional_rationals() {
        let mut info = gps("N", "E");
        info.insert(
            "GPSLatitude".to_string(),
            GpsValue::Rationals(vec![(40, 1), (26, 1), (4651, 100)]),
        );
        let coords = resolve_coordinates(&info).unwrap();
        assert_close(coords.latitude, 40.0 + 26.0 / 60.0 + 46.51 / 3600.0);
        assert_close(coords.longitude, 79.94861111111112);
    }

    #[test]
    fn test_southern_and_western_hemispheres_negate() {
        let coords = resolve_coordinates(&gps("S", "W")).unwrap();
        assert!(coords.latitude < 0.0);
        assert!(coords.longitude < 0.0);
    }

    #[test]
    fn test_any_unexpected_ref_negates() {
        // Strict equality: only "N"/"E" keep the sign. Even an empty or
        // lowercase ref flips it.
        for unexpected in ["", "n", "North", "NE"] {
            let coords = resolve_coordinates(&gps(unexpected, "E")).unwrap();
            assert!(coords.latitude < 0.0, "ref {:?} should negate", unexpected);
            assert!(coords.longitude > 0.0);
        }
    }

    #[test]
    fn test_missing_field_yields_none() {
        for missing in [
            "GPSLatitude",
            "GPSLatitudeRef",
            "GPSLongitude",
            "GPSLongitudeRef",
        ] {
            let mut info = gps("N", "W");
            info.remove(missing);
            assert!(resolve_coordinates(&info).is_none(), "without {}", missing);
        }
    }

    #[test]
    fn test_empty_sub_map_yields_none() {
        assert!(resolve_coordinates(&GpsInfo::new()).is_none());
    }

    #[test]
    fn test_short_triple_yields_none() {
        let mut info = gps("N", "W");
        info.insert(
            "GPSLatitude".to_string(),
            GpsValue::Rationals(vec![(40, 1), (26, 1)]),
        );
        assert!(resolve_coordinates(&info).is_none());
    }
}
