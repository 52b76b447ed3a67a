//! Filter construction and round-trip helpers for the application layer.
//!
//! This is the boundary between the parsing core and the UI: drawn
//! location models become WKT-embedding spatial filters, attribute
//! metadata decides whether a property takes a geometry or a plain
//! comparison, and [`transform_cql_to_filter`]/[`transform_filter_to_cql`]
//! are the canonical entry points for loading and saving queries.

use crate::ast::{
    ComparisonNode, ComparisonOp, FilterNode, FunctionNode, IsNullNode, SpatialNode, Value,
};
use crate::error::{Error, FilterError};
use crate::metacard::MetacardDefinitions;
use crate::parser::{build_ast, tokenize};
use crate::simplify::simplify;
use crate::writer::write;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A drawn location from the UI map widgets, in the shapes the front end
/// persists. Buffer widths are in meters; a missing or zero buffer means
/// the filter tests intersection instead of distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LocationModel {
    #[serde(rename = "LINE")]
    Line {
        line: Vec<[f64; 2]>,
        #[serde(rename = "lineWidth", default, skip_serializing_if = "Option::is_none")]
        line_width: Option<f64>,
    },
    #[serde(rename = "POLYGON")]
    Polygon {
        polygon: Vec<[f64; 2]>,
        #[serde(
            rename = "polygonBufferWidth",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        polygon_buffer_width: Option<f64>,
    },
    #[serde(rename = "MULTIPOLYGON")]
    MultiPolygon {
        polygon: Vec<Vec<[f64; 2]>>,
        #[serde(
            rename = "polygonBufferWidth",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        polygon_buffer_width: Option<f64>,
    },
    #[serde(rename = "BBOX")]
    Bbox {
        north: f64,
        south: f64,
        east: f64,
        west: f64,
    },
    #[serde(rename = "POINTRADIUS")]
    PointRadius { lat: f64, lon: f64, radius: f64 },
}

impl LocationModel {
    /// Builds the spatial filter for this model on the given property:
    /// DWITHIN when a positive buffer distance is present, INTERSECTS
    /// otherwise.
    pub fn to_filter(&self, property: &str) -> FilterNode {
        match self {
            LocationModel::Line { line, line_width } => {
                buffered(property, line_to_wkt(line), *line_width)
            }
            LocationModel::Polygon {
                polygon,
                polygon_buffer_width,
            } => buffered(property, polygon_to_wkt(polygon), *polygon_buffer_width),
            LocationModel::MultiPolygon {
                polygon,
                polygon_buffer_width,
            } => buffered(
                property,
                multipolygon_to_wkt(polygon),
                *polygon_buffer_width,
            ),
            LocationModel::Bbox {
                north,
                south,
                east,
                west,
            } => SpatialNode::intersects(property, bbox_to_wkt(*north, *south, *east, *west))
                .into(),
            LocationModel::PointRadius { lat, lon, radius } => {
                let wkt = format!("POINT({} {})", lon, lat);
                if *radius > 0.0 {
                    SpatialNode::dwithin(property, wkt, *radius).into()
                } else {
                    SpatialNode::intersects(property, wkt).into()
                }
            }
        }
    }
}

fn buffered(property: &str, wkt: String, width: Option<f64>) -> FilterNode {
    match width.filter(|width| *width > 0.0) {
        Some(distance) => SpatialNode::dwithin(property, wkt, distance).into(),
        None => SpatialNode::intersects(property, wkt).into(),
    }
}

fn coordinates(points: &[[f64; 2]]) -> String {
    points
        .iter()
        .map(|point| format!("{} {}", point[0], point[1]))
        .collect::<Vec<_>>()
        .join(",")
}

fn line_to_wkt(line: &[[f64; 2]]) -> String {
    format!("LINESTRING({})", coordinates(line))
}

// WKT polygon rings repeat the first vertex at the end; the UI models
// store open rings.
fn ring(points: &[[f64; 2]]) -> String {
    let mut closed = points.to_vec();
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if first != last => closed.push(*first),
        _ => {}
    }
    format!("({})", coordinates(&closed))
}

fn polygon_to_wkt(polygon: &[[f64; 2]]) -> String {
    format!("POLYGON({})", ring(polygon))
}

fn multipolygon_to_wkt(polygons: &[Vec<[f64; 2]>]) -> String {
    let rings = polygons
        .iter()
        .map(|polygon| format!("({})", ring(polygon)))
        .collect::<Vec<_>>()
        .join(",");
    format!("MULTIPOLYGON({})", rings)
}

fn bbox_to_wkt(north: f64, south: f64, east: f64, west: f64) -> String {
    polygon_to_wkt(&[[west, south], [west, north], [east, north], [east, south]])
}

/// The value side of [`generate_filter`]: a drawn location for
/// location-typed properties, a scalar for everything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterInput {
    Location(LocationModel),
    Value(Value),
}

impl From<LocationModel> for FilterInput {
    fn from(model: LocationModel) -> Self {
        FilterInput::Location(model)
    }
}

impl From<Value> for FilterInput {
    fn from(value: Value) -> Self {
        FilterInput::Value(value)
    }
}

impl From<&str> for FilterInput {
    fn from(value: &str) -> Self {
        FilterInput::Value(value.into())
    }
}

impl From<String> for FilterInput {
    fn from(value: String) -> Self {
        FilterInput::Value(value.into())
    }
}

impl From<f64> for FilterInput {
    fn from(value: f64) -> Self {
        FilterInput::Value(value.into())
    }
}

impl From<bool> for FilterInput {
    fn from(value: bool) -> Self {
        FilterInput::Value(value.into())
    }
}

/// Builds a filter node for one UI row. Properties declared LOCATION or
/// GEOMETRY dispatch to geometry construction from the drawn model; all
/// other properties produce an `IS NULL` or plain comparison node.
pub fn generate_filter(
    comparator: &str,
    property: &str,
    value: FilterInput,
    definitions: &MetacardDefinitions,
) -> Result<FilterNode, FilterError> {
    if definitions.is_location_attribute(property) {
        return match value {
            FilterInput::Location(model) => Ok(model.to_filter(property)),
            FilterInput::Value(_) => {
                Err(FilterError::ExpectedLocationModel(property.to_string()))
            }
        };
    }

    let value = match value {
        FilterInput::Value(value) => value,
        FilterInput::Location(_) => {
            return Err(FilterError::UnexpectedLocationModel(property.to_string()))
        }
    };

    if comparator.eq_ignore_ascii_case("IS NULL") {
        return Ok(IsNullNode::new(property).into());
    }
    let op = ComparisonOp::from_symbol(comparator)
        .ok_or_else(|| FilterError::UnsupportedComparator(comparator.to_string()))?;
    Ok(ComparisonNode::new(op, property, value).into())
}

/// Builds the functional-predicate shape `name(params...) = true`.
pub fn generate_filter_for_filter_function(
    name: impl Into<String>,
    params: Vec<Value>,
) -> FilterNode {
    ComparisonNode::new(ComparisonOp::Eq, FunctionNode::new(name, params), true).into()
}

/// Builds the "attribute has no value" filter.
pub fn generate_is_empty_filter(property: impl Into<String>) -> FilterNode {
    IsNullNode::new(property).into()
}

/// Parses CQL into the normalized filter tree the UI edits.
pub fn transform_cql_to_filter(cql: &str) -> Result<FilterNode, Error> {
    let tree = build_ast(tokenize(cql)?)?;
    Ok(simplify(tree))
}

/// Serializes a filter tree to the CQL string sent to the backend:
/// normalized, written, wrapped in one outer group, and with the writer's
/// quotes around raw WKT literals stripped.
pub fn transform_filter_to_cql(filter: &FilterNode) -> Result<String, Error> {
    let cql = write(&simplify(filter.clone()))?;
    Ok(sanitize_geometry_cql(&format!("({})", cql)))
}

static QUOTED_POLYGON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"'(POLYGON\(\(.*?\)\))'").unwrap());
static QUOTED_MULTIPOLYGON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"'(MULTIPOLYGON\(\(\(.*?\)\)\))'").unwrap());
static QUOTED_POINT: Lazy<Regex> = Lazy::new(|| Regex::new(r"'(POINT\(.*?\))'").unwrap());
static QUOTED_LINESTRING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"'(LINESTRING\(.*?\))'").unwrap());

/// Strips the single quotes the writer leaves around WKT literals matched
/// by shape. The writer treats raw WKT strings as ordinary string values;
/// CQL requires geometry literals bare, so the quotes are removed here at
/// the boundary to keep the writer's output format stable for persisted
/// queries.
pub fn sanitize_geometry_cql(cql: &str) -> String {
    let cql = QUOTED_POLYGON.replace_all(cql, "$1");
    let cql = QUOTED_MULTIPOLYGON.replace_all(&cql, "$1");
    let cql = QUOTED_POINT.replace_all(&cql, "$1");
    QUOTED_LINESTRING.replace_all(&cql, "$1").into_owned()
}
