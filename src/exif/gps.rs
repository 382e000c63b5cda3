// src/exif/gps.rs
//! EXIF GPS tag codec
//!
//! Converts between the sexagesimal rational representation stored in the
//! EXIF GPS tags ("59/1,56/1,24123/1000" plus a one-letter hemisphere
//! reference) and signed decimal degrees.

use super::store::ExifStore;
use crate::error::{GeoError, Result};
use crate::location::sample::GeoCoordinate;

pub const TAG_GPS_LATITUDE: &str = "GPSLatitude";
pub const TAG_GPS_LATITUDE_REF: &str = "GPSLatitudeRef";
pub const TAG_GPS_LONGITUDE: &str = "GPSLongitude";
pub const TAG_GPS_LONGITUDE_REF: &str = "GPSLongitudeRef";

/// Coordinate axis, determining which hemisphere letters apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// The reference letter of the positive hemisphere for this axis.
    pub fn positive_ref(&self) -> &'static str {
        match self {
            Axis::Latitude => "N",
            Axis::Longitude => "E",
        }
    }
}

/// Hemisphere reference written alongside a coordinate tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Pick the hemisphere for a signed value on the given axis.
    /// A value of exactly zero maps to the positive hemisphere.
    pub fn from_value(axis: Axis, value: f64) -> Self {
        match (axis, value >= 0.0) {
            (Axis::Latitude, true) => Hemisphere::North,
            (Axis::Latitude, false) => Hemisphere::South,
            (Axis::Longitude, true) => Hemisphere::East,
            (Axis::Longitude, false) => Hemisphere::West,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Hemisphere::North => "N",
            Hemisphere::South => "S",
            Hemisphere::East => "E",
            Hemisphere::West => "W",
        }
    }
}

/// A degrees/minutes/seconds triple in EXIF rational wire form.
///
/// Seconds are kept in milli-units over a fixed denominator of 1000,
/// which quantizes sub-second precision to 1/1000 of an arc second
/// (roughly 3 cm at the equator).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SexagesimalTriple {
    pub degrees: i64,
    pub minutes: i64,
    pub seconds_milli: f64,
}

impl SexagesimalTriple {
    /// The unsigned decimal-degree magnitude of this triple.
    pub fn to_degrees(&self) -> f64 {
        self.degrees as f64
            + self.minutes as f64 / 60.0
            + self.seconds_milli / 1000.0 / 3600.0
    }

    /// Render the EXIF wire form: three `/`-separated rationals.
    pub fn to_exif_string(&self) -> String {
        format!(
            "{}/1,{}/1,{}/1000",
            self.degrees, self.minutes, self.seconds_milli
        )
    }
}

/// Parse a single EXIF rational ("numerator/denominator") into a float.
///
/// Wrong arity, non-numeric components, and a zero denominator are all
/// malformed input.
pub fn parse_rational(rational: &str) -> Result<f64> {
    let parts: Vec<&str> = rational.split('/').collect();
    if parts.len() != 2 {
        return Err(GeoError::MalformedExif(format!("bad rational '{}'", rational)));
    }

    let numerator: f64 = parts[0]
        .trim()
        .parse()
        .map_err(|_| GeoError::MalformedExif(format!("bad numerator '{}'", parts[0])))?;
    let denominator: f64 = parts[1]
        .trim()
        .parse()
        .map_err(|_| GeoError::MalformedExif(format!("bad denominator '{}'", parts[1])))?;

    if denominator == 0.0 {
        return Err(GeoError::MalformedExif(format!(
            "zero denominator in '{}'",
            rational
        )));
    }

    Ok(numerator / denominator)
}

/// Convert an EXIF degrees/minutes/seconds tag value to unsigned decimal
/// degrees. The tag holds exactly three comma-separated rationals.
pub fn dms_to_degrees(dms: &str) -> Result<f64> {
    let parts: Vec<&str> = dms.split(',').collect();
    if parts.len() != 3 {
        return Err(GeoError::MalformedExif(format!(
            "expected 3 rational components, got {} in '{}'",
            parts.len(),
            dms
        )));
    }

    let degrees = parse_rational(parts[0])?;
    let minutes = parse_rational(parts[1])?;
    let seconds = parse_rational(parts[2])?;

    Ok(degrees + minutes / 60.0 + seconds / 3600.0)
}

/// Decode a coordinate tag plus its hemisphere reference into a signed
/// decimal-degree value.
///
/// The value is positive only when the reference equals the axis's
/// positive letter; an absent or unrecognized reference reads as the
/// negative hemisphere, matching what camera firmware in the wild does.
pub fn decode(dms: &str, reference: Option<&str>, axis: Axis) -> Result<f64> {
    let magnitude = dms_to_degrees(dms)?;

    if reference == Some(axis.positive_ref()) {
        Ok(magnitude)
    } else {
        Ok(-magnitude)
    }
}

/// Encode a signed decimal-degree value as a sexagesimal triple plus
/// hemisphere reference.
///
/// The triple carries the magnitude; the sign lives solely in the
/// hemisphere letter, so decode(encode(x)) round-trips within the
/// 1/1000-arc-second quantization.
pub fn encode(value: f64, axis: Axis) -> (SexagesimalTriple, Hemisphere) {
    let hemisphere = Hemisphere::from_value(axis, value);
    let magnitude = value.abs();

    let degrees = magnitude.floor();
    let minutes = ((magnitude - degrees) * 60.0).floor();
    let seconds_milli =
        ((magnitude - degrees - minutes / 60.0) * 3600.0 * 1000.0).round();

    let triple = SexagesimalTriple {
        degrees: degrees as i64,
        minutes: minutes as i64,
        seconds_milli,
    };

    (triple, hemisphere)
}

/// Read the GPS position from an EXIF store.
///
/// Returns `Ok(None)` when either coordinate tag is absent (no location
/// present is normal, not an error); malformed tag content is an error
/// and never silently becomes a zero coordinate.
pub fn read_location(store: &dyn ExifStore) -> Result<Option<GeoCoordinate>> {
    let lat = store.get_attribute(TAG_GPS_LATITUDE);
    let lon = store.get_attribute(TAG_GPS_LONGITUDE);

    let (lat, lon) = match (lat, lon) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => return Ok(None),
    };

    let lat_ref = store.get_attribute(TAG_GPS_LATITUDE_REF);
    let lon_ref = store.get_attribute(TAG_GPS_LONGITUDE_REF);

    let latitude = decode(&lat, lat_ref.as_deref(), Axis::Latitude)?;
    let longitude = decode(&lon, lon_ref.as_deref(), Axis::Longitude)?;

    Ok(Some(GeoCoordinate::new(latitude, longitude)?))
}

/// Geo-tag an EXIF store with the given position (set/update the four
/// GPS tags). The caller saves the store when it wants persistence.
pub fn apply_location(store: &mut dyn ExifStore, coordinate: GeoCoordinate) {
    let (lat_triple, lat_ref) = encode(coordinate.latitude(), Axis::Latitude);
    let (lon_triple, lon_ref) = encode(coordinate.longitude(), Axis::Longitude);

    store.set_attribute(TAG_GPS_LATITUDE, &lat_triple.to_exif_string());
    store.set_attribute(TAG_GPS_LATITUDE_REF, lat_ref.as_str());
    store.set_attribute(TAG_GPS_LONGITUDE, &lon_triple.to_exif_string());
    store.set_attribute(TAG_GPS_LONGITUDE_REF, lon_ref.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exif::store::TagStore;
    use approx::assert_relative_eq;

    // 1/1000 arc second, the codec's quantization step
    const QUANTUM_DEG: f64 = 1e-3 / 3600.0;

    #[test]
    fn test_parse_rational() {
        assert_eq!(parse_rational("59/1").unwrap(), 59.0);
        assert_eq!(parse_rational("24123/1000").unwrap(), 24.123);
        assert_eq!(parse_rational("-11/1").unwrap(), -11.0);
    }

    #[test]
    fn test_parse_rational_malformed() {
        assert!(matches!(parse_rational("59"), Err(GeoError::MalformedExif(_))));
        assert!(matches!(parse_rational("a/b"), Err(GeoError::MalformedExif(_))));
        assert!(matches!(parse_rational("1/2/3"), Err(GeoError::MalformedExif(_))));
    }

    #[test]
    fn test_zero_denominator_is_malformed_not_zero() {
        assert!(matches!(parse_rational("59/0"), Err(GeoError::MalformedExif(_))));
        assert!(matches!(
            dms_to_degrees("59/1,56/1,24/0"),
            Err(GeoError::MalformedExif(_))
        ));
    }

    #[test]
    fn test_dms_wrong_arity() {
        assert!(matches!(
            dms_to_degrees("59/1,56/1"),
            Err(GeoError::MalformedExif(_))
        ));
        assert!(matches!(
            dms_to_degrees("59/1,56/1,24/1,0/1"),
            Err(GeoError::MalformedExif(_))
        ));
    }

    #[test]
    fn test_decode_oslo() {
        // 59 deg 56' 24.123" N
        let lat = decode("59/1,56/1,24123/1000", Some("N"), Axis::Latitude).unwrap();
        assert_relative_eq!(lat, 59.0 + 56.0 / 60.0 + 24.123 / 3600.0, epsilon = 1e-12);
    }

    #[test]
    fn test_hemisphere_sign_negation() {
        let dms = "33/1,52/1,4000/1000";
        let north = decode(dms, Some("N"), Axis::Latitude).unwrap();
        let south = decode(dms, Some("S"), Axis::Latitude).unwrap();
        assert_eq!(south, -north);

        let east = decode(dms, Some("E"), Axis::Longitude).unwrap();
        let west = decode(dms, Some("W"), Axis::Longitude).unwrap();
        assert_eq!(west, -east);
    }

    #[test]
    fn test_missing_reference_reads_negative() {
        let dms = "10/1,30/1,0/1000";
        assert_eq!(decode(dms, None, Axis::Latitude).unwrap(), -10.5);
    }

    #[test]
    fn test_encode_zero_is_positive_hemisphere() {
        let (_, lat_ref) = encode(0.0, Axis::Latitude);
        let (_, lon_ref) = encode(0.0, Axis::Longitude);
        assert_eq!(lat_ref, Hemisphere::North);
        assert_eq!(lon_ref, Hemisphere::East);
    }

    #[test]
    fn test_encode_negative_value() {
        let (triple, reference) = encode(-33.8678, Axis::Latitude);
        assert_eq!(reference, Hemisphere::South);
        assert_eq!(triple.degrees, 33);
        assert_eq!(triple.minutes, 52);
        // magnitude survives in the triple, sign in the reference
        assert_relative_eq!(triple.to_degrees(), 33.8678, epsilon = QUANTUM_DEG);
    }

    #[test]
    fn test_roundtrip_within_quantization() {
        let values: [f64; 13] = [
            0.0, 0.5, -0.5, 10.123456, -10.123456, 59.940046, -33.867487,
            89.999999, -89.999999, 151.206990, -151.206990, 179.999999, -180.0,
        ];

        for &v in &values {
            let axis = if v.abs() <= 90.0 { Axis::Latitude } else { Axis::Longitude };
            let (triple, reference) = encode(v, axis);
            let decoded =
                decode(&triple.to_exif_string(), Some(reference.as_str()), axis).unwrap();
            assert!(
                (decoded - v).abs() <= QUANTUM_DEG,
                "roundtrip of {} drifted to {}",
                v,
                decoded
            );
        }
    }

    #[test]
    fn test_read_location_absent_tags() {
        let store = TagStore::new();
        assert_eq!(read_location(&store).unwrap(), None);

        // latitude alone is not a location
        let mut store = TagStore::new();
        store.set_attribute(TAG_GPS_LATITUDE, "59/1,56/1,24000/1000");
        store.set_attribute(TAG_GPS_LATITUDE_REF, "N");
        assert_eq!(read_location(&store).unwrap(), None);
    }

    #[test]
    fn test_read_location_malformed_surfaces_error() {
        let mut store = TagStore::new();
        store.set_attribute(TAG_GPS_LATITUDE, "59/0,56/1,24000/1000");
        store.set_attribute(TAG_GPS_LATITUDE_REF, "N");
        store.set_attribute(TAG_GPS_LONGITUDE, "10/1,43/1,0/1000");
        store.set_attribute(TAG_GPS_LONGITUDE_REF, "E");

        assert!(matches!(
            read_location(&store),
            Err(GeoError::MalformedExif(_))
        ));
    }

    #[test]
    fn test_apply_then_read_location() {
        let coordinate = GeoCoordinate::new(-33.867487, 151.206990).unwrap();

        let mut store = TagStore::new();
        apply_location(&mut store, coordinate);

        assert_eq!(store.get_attribute(TAG_GPS_LATITUDE_REF), Some("S".to_string()));
        assert_eq!(store.get_attribute(TAG_GPS_LONGITUDE_REF), Some("E".to_string()));

        let read = read_location(&store).unwrap().unwrap();
        assert_relative_eq!(read.latitude(), -33.867487, epsilon = QUANTUM_DEG);
        assert_relative_eq!(read.longitude(), 151.206990, epsilon = QUANTUM_DEG);
    }
}
