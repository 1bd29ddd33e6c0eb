use std::{fs, path::Path};

use geo::{Coord, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};
use serde_json::Value;
use tracing::debug;

use crate::{
    GeometryError, LoadError,
    geom::{BoundaryRing, GeographicPoint, PointSet},
};

/// Read a GeoJSON FeatureCollection and parse `features[0].geometry`.
pub fn read_first_geometry(path: &Path) -> Result<Geometry<f64>, LoadError> {
    let bytes = fs::read(path)
        .map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
    let value: Value = serde_json::from_slice(&bytes)
        .map_err(|source| LoadError::Json { path: path.to_path_buf(), source })?;

    let geometry = first_geometry(&value)
        .map_err(|source| LoadError::Geometry { path: path.to_path_buf(), source })?;
    debug!(path = %path.display(), kind = geometry_kind(&geometry), "read first feature");
    Ok(geometry)
}

/// Load the site boundary from the first feature of a FeatureCollection.
pub fn load_boundary(path: &Path) -> Result<BoundaryRing, LoadError> {
    let geometry = read_first_geometry(path)?;
    outer_ring(geometry)
        .and_then(BoundaryRing::new)
        .map_err(|source| LoadError::Geometry { path: path.to_path_buf(), source })
}

/// Load point locations from the first feature of a FeatureCollection.
pub fn load_points(path: &Path) -> Result<PointSet, LoadError> {
    let geometry = read_first_geometry(path)?;
    point_coords(geometry)
        .and_then(PointSet::new)
        .map_err(|source| LoadError::Geometry { path: path.to_path_buf(), source })
}

/// Select the boundary polyline from a geometry.
/// - LineString: its coordinates, as-is
/// - Polygon: the exterior (first) ring
/// - MultiLineString: the first line
/// - MultiPolygon: the exterior ring of the first polygon
pub(crate) fn outer_ring(geometry: Geometry<f64>) -> Result<Vec<GeographicPoint>, GeometryError> {
    match geometry {
        Geometry::LineString(line) => Ok(line.0),
        Geometry::Polygon(polygon) => Ok(polygon.into_inner().0.0),
        Geometry::MultiLineString(lines) => Ok(lines.0.into_iter().next().map(|l| l.0).unwrap_or_default()),
        Geometry::MultiPolygon(polygons) => Ok(polygons.0.into_iter().next()
            .map(|p| p.into_inner().0.0)
            .unwrap_or_default()),
        other => Err(GeometryError::WrongKind { kind: geometry_kind(&other), expected: "a boundary" }),
    }
}

/// Select discrete locations from a geometry.
/// - MultiPoint / LineString: their coordinates, in order
/// - Point: a single location
pub(crate) fn point_coords(geometry: Geometry<f64>) -> Result<Vec<GeographicPoint>, GeometryError> {
    match geometry {
        Geometry::MultiPoint(points) => Ok(points.0.into_iter().map(|p| p.0).collect()),
        Geometry::LineString(line) => Ok(line.0),
        Geometry::Point(point) => Ok(vec![point.0]),
        other => Err(GeometryError::WrongKind { kind: geometry_kind(&other), expected: "a point set" }),
    }
}

/// GeoJSON type name of a geometry.
pub(crate) fn geometry_kind(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}

/// Walk `features[0].geometry` of a FeatureCollection.
pub(crate) fn first_geometry(value: &Value) -> Result<Geometry<f64>, GeometryError> {
    let features = value.get("features")
        .ok_or(GeometryError::Missing("features"))?
        .as_array()
        .ok_or_else(|| invalid("features", "expected an array"))?;
    let feature = features.first().ok_or(GeometryError::Missing("features[0]"))?;
    let geometry = feature.get("geometry")
        .filter(|g| !g.is_null())
        .ok_or(GeometryError::Missing("features[0].geometry"))?;
    parse_geometry(geometry)
}

/// Parse a GeoJSON geometry object, keyed on its `type` member.
pub(crate) fn parse_geometry(geometry: &Value) -> Result<Geometry<f64>, GeometryError> {
    let kind = geometry.get("type")
        .ok_or(GeometryError::Missing("geometry.type"))?
        .as_str()
        .ok_or_else(|| invalid("geometry.type", "expected a string"))?;
    let coords = geometry.get("coordinates")
        .ok_or(GeometryError::Missing("geometry.coordinates"))?;

    Ok(match kind {
        "Point" => Geometry::Point(Point(parse_position(coords)?)),
        "MultiPoint" => Geometry::MultiPoint(MultiPoint(
            parse_positions(coords)?.into_iter().map(Point).collect()
        )),
        "LineString" => Geometry::LineString(LineString(parse_positions(coords)?)),
        "MultiLineString" => Geometry::MultiLineString(MultiLineString(
            as_array(coords)?.iter()
                .map(|line| parse_positions(line).map(LineString))
                .collect::<Result<_, _>>()?
        )),
        "Polygon" => Geometry::Polygon(parse_polygon(coords)?),
        "MultiPolygon" => Geometry::MultiPolygon(MultiPolygon(
            as_array(coords)?.iter()
                .map(parse_polygon)
                .collect::<Result<_, _>>()?
        )),
        other => return Err(GeometryError::Unsupported(other.to_string())),
    })
}

/// Parse polygon rings: the first is the exterior, the rest are holes.
/// An empty ring list yields a polygon with an empty exterior.
fn parse_polygon(coords: &Value) -> Result<Polygon<f64>, GeometryError> {
    let mut rings = as_array(coords)?.iter()
        .map(|ring| parse_positions(ring).map(LineString));
    let exterior = rings.next().transpose()?.unwrap_or_else(|| LineString(vec![]));
    let interiors = rings.collect::<Result<Vec<_>, _>>()?;
    Ok(Polygon::new(exterior, interiors))
}

/// Parse `[[x, y], [x, y], ...]`.
fn parse_positions(coords: &Value) -> Result<Vec<Coord<f64>>, GeometryError> {
    as_array(coords)?.iter().map(parse_position).collect()
}

/// Parse `[x, y]` (any extra members such as altitude are ignored).
fn parse_position(position: &Value) -> Result<Coord<f64>, GeometryError> {
    let values = position.as_array()
        .ok_or_else(|| invalid("position", format!("expected [x, y], found {position}")))?;
    if values.len() < 2 {
        return Err(invalid("position", format!("expected at least two numbers, found {position}")))
    }
    let x = values[0].as_f64()
        .ok_or_else(|| invalid("position", format!("x must be a number, found {}", values[0])))?;
    let y = values[1].as_f64()
        .ok_or_else(|| invalid("position", format!("y must be a number, found {}", values[1])))?;
    Ok(Coord { x, y })
}

fn as_array(value: &Value) -> Result<&Vec<Value>, GeometryError> {
    value.as_array().ok_or_else(|| invalid("coordinates", format!("expected an array, found {value}")))
}

fn invalid(what: &'static str, reason: impl Into<String>) -> GeometryError {
    GeometryError::Invalid { what, reason: reason.into() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn collection(geometry: Value) -> Value {
        json!({
            "type": "FeatureCollection",
            "features": [{ "type": "Feature", "properties": {}, "geometry": geometry }],
        })
    }

    fn c(x: f64, y: f64) -> Coord<f64> { Coord { x, y } }

    #[test]
    fn linestring_is_used_directly_as_boundary() {
        let value = collection(json!({
            "type": "LineString",
            "coordinates": [[10.0, 50.0], [10.1, 50.0], [10.1, 50.1]],
        }));
        let ring = outer_ring(first_geometry(&value).unwrap()).unwrap();
        assert_eq!(ring, vec![c(10.0, 50.0), c(10.1, 50.0), c(10.1, 50.1)]);
    }

    #[test]
    fn polygon_boundary_uses_exterior_ring() {
        let value = collection(json!({
            "type": "Polygon",
            "coordinates": [
                [[10.0, 50.0], [10.1, 50.0], [10.1, 50.1]],
                [[10.02, 50.02], [10.05, 50.02], [10.05, 50.05]],
            ],
        }));
        let ring = outer_ring(first_geometry(&value).unwrap()).unwrap();
        // geo closes polygon rings.
        assert_eq!(ring, vec![c(10.0, 50.0), c(10.1, 50.0), c(10.1, 50.1), c(10.0, 50.0)]);
    }

    #[test]
    fn multipolygon_boundary_uses_first_exterior() {
        let value = collection(json!({
            "type": "MultiPolygon",
            "coordinates": [
                [[[1.0, 1.0], [2.0, 1.0], [2.0, 2.0], [1.0, 1.0]]],
                [[[5.0, 5.0], [6.0, 5.0], [6.0, 6.0], [5.0, 5.0]]],
            ],
        }));
        let ring = outer_ring(first_geometry(&value).unwrap()).unwrap();
        assert_eq!(ring.first(), Some(&c(1.0, 1.0)));
        assert_eq!(ring.len(), 4);
    }

    #[test]
    fn multilinestring_boundary_uses_first_line() {
        let value = collection(json!({
            "type": "MultiLineString",
            "coordinates": [[[1.0, 1.0], [2.0, 2.0]], [[3.0, 3.0], [4.0, 4.0]]],
        }));
        let ring = outer_ring(first_geometry(&value).unwrap()).unwrap();
        assert_eq!(ring, vec![c(1.0, 1.0), c(2.0, 2.0)]);
    }

    #[test]
    fn point_kinds_are_not_boundaries() {
        let value = collection(json!({ "type": "MultiPoint", "coordinates": [[1.0, 1.0], [2.0, 2.0]] }));
        assert_eq!(
            outer_ring(first_geometry(&value).unwrap()),
            Err(GeometryError::WrongKind { kind: "MultiPoint", expected: "a boundary" }),
        );
    }

    #[test]
    fn point_sets_from_multipoint_linestring_and_point() {
        let coords = json!([[10.0, 50.0], [10.2, 50.3]]);
        for kind in ["MultiPoint", "LineString"] {
            let value = collection(json!({ "type": kind, "coordinates": coords.clone() }));
            let points = point_coords(first_geometry(&value).unwrap()).unwrap();
            assert_eq!(points, vec![c(10.0, 50.0), c(10.2, 50.3)], "{kind}");
        }

        let value = collection(json!({ "type": "Point", "coordinates": [10.0, 50.0, 12.5] }));
        assert_eq!(point_coords(first_geometry(&value).unwrap()).unwrap(), vec![c(10.0, 50.0)]);

        let value = collection(json!({ "type": "Polygon", "coordinates": [[[1.0, 1.0], [2.0, 1.0], [2.0, 2.0]]] }));
        assert!(matches!(
            point_coords(first_geometry(&value).unwrap()),
            Err(GeometryError::WrongKind { kind: "Polygon", .. })
        ));
    }

    #[test]
    fn empty_coordinates_parse_to_empty_lists() {
        let value = collection(json!({ "type": "LineString", "coordinates": [] }));
        assert!(outer_ring(first_geometry(&value).unwrap()).unwrap().is_empty());

        let value = collection(json!({ "type": "Polygon", "coordinates": [] }));
        assert!(outer_ring(first_geometry(&value).unwrap()).unwrap().is_empty());
    }

    #[test]
    fn missing_structure_is_reported() {
        assert_eq!(first_geometry(&json!({})), Err(GeometryError::Missing("features")));
        assert_eq!(first_geometry(&json!({ "features": [] })), Err(GeometryError::Missing("features[0]")));
        assert_eq!(
            first_geometry(&json!({ "features": [{ "geometry": null }] })),
            Err(GeometryError::Missing("features[0].geometry")),
        );
        assert_eq!(
            first_geometry(&collection(json!({ "type": "LineString" }))),
            Err(GeometryError::Missing("geometry.coordinates")),
        );
        assert_eq!(
            first_geometry(&collection(json!({ "type": "Curve", "coordinates": [] }))),
            Err(GeometryError::Unsupported("Curve".to_string())),
        );
    }

    #[test]
    fn malformed_positions_are_rejected() {
        for coords in [json!([[10.0]]), json!([["a", 1.0]]), json!([10.0, 50.0]), json!("x")] {
            let value = collection(json!({ "type": "LineString", "coordinates": coords }));
            assert!(
                matches!(first_geometry(&value), Err(GeometryError::Invalid { .. })),
                "{coords}",
            );
        }
    }
}
