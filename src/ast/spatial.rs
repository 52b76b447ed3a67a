use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpatialOp {
    #[serde(rename = "INTERSECTS")]
    Intersects,
    #[serde(rename = "DWITHIN")]
    Dwithin,
    #[serde(rename = "WITHIN")]
    Within,
    #[serde(rename = "CONTAINS")]
    Contains,
}

impl SpatialOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpatialOp::Intersects => "INTERSECTS",
            SpatialOp::Dwithin => "DWITHIN",
            SpatialOp::Within => "WITHIN",
            SpatialOp::Contains => "CONTAINS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GeometryTag {
    #[default]
    #[serde(rename = "GEOMETRY")]
    Geometry,
}

/// A bare WKT literal parsed out of CQL text. The writer emits `value`
/// verbatim and unquoted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryNode {
    #[serde(rename = "type")]
    pub op: GeometryTag,
    pub value: String,
}

impl GeometryNode {
    pub fn new(wkt: impl Into<String>) -> Self {
        Self {
            op: GeometryTag::Geometry,
            value: wkt.into(),
        }
    }
}

/// The geometry argument of a spatial operator. Parsing produces the
/// `Geometry` form; the filter construction helpers produce raw WKT
/// strings, which the writer quotes and `sanitize_geometry_cql` later
/// unquotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpatialOperand {
    Geometry(GeometryNode),
    Wkt(String),
}

impl SpatialOperand {
    pub fn as_wkt(&self) -> &str {
        match self {
            SpatialOperand::Geometry(g) => g.value.as_str(),
            SpatialOperand::Wkt(s) => s.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialNode {
    #[serde(rename = "type")]
    pub op: SpatialOp,
    pub property: String,
    pub value: SpatialOperand,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl SpatialNode {
    pub fn new(op: SpatialOp, property: impl Into<String>, value: SpatialOperand) -> Self {
        Self {
            op,
            property: property.into(),
            value,
            distance: None,
        }
    }

    pub fn intersects(property: impl Into<String>, wkt: impl Into<String>) -> Self {
        Self::new(
            SpatialOp::Intersects,
            property,
            SpatialOperand::Wkt(wkt.into()),
        )
    }

    pub fn dwithin(
        property: impl Into<String>,
        wkt: impl Into<String>,
        distance: f64,
    ) -> Self {
        let mut node = Self::new(SpatialOp::Dwithin, property, SpatialOperand::Wkt(wkt.into()));
        node.distance = Some(distance);
        node
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BboxTag {
    #[default]
    #[serde(rename = "BBOX")]
    Bbox,
}

/// Bounding-box filter; `value` holds `[minx, miny, maxx, maxy]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BboxNode {
    #[serde(rename = "type")]
    pub op: BboxTag,
    pub property: String,
    pub value: [f64; 4],
}

impl BboxNode {
    pub fn new(property: impl Into<String>, value: [f64; 4]) -> Self {
        Self {
            op: BboxTag::Bbox,
            property: property.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spatial_json_omits_missing_distance() {
        let node = SpatialNode::intersects("anyGeo", "POLYGON((1 2,3 4,5 6,1 2))");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "INTERSECTS");
        assert!(json.get("distance").is_none());
    }

    #[test]
    fn test_dwithin_json_includes_distance() {
        let node = SpatialNode::dwithin("anyGeo", "LINESTRING(1 1,2 2)", 5.0);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["distance"], 5.0);
        assert_eq!(json["value"], "LINESTRING(1 1,2 2)");
    }

    #[test]
    fn test_spatial_operand_forms() {
        let parsed = SpatialOperand::Geometry(GeometryNode::new("POINT(1 1)"));
        let raw = SpatialOperand::Wkt("POINT(1 1)".to_string());
        assert_eq!(parsed.as_wkt(), raw.as_wkt());
    }

    #[test]
    fn test_spatial_operand_deserializes_nested_geometry() {
        let json = r#"{"type":"GEOMETRY","value":"POLYGON((1 2,3 4,5 6,1 2))"}"#;
        let operand: SpatialOperand = serde_json::from_str(json).unwrap();
        assert_eq!(
            operand,
            SpatialOperand::Geometry(GeometryNode::new("POLYGON((1 2,3 4,5 6,1 2))"))
        );
    }

    #[test]
    fn test_bbox_json_shape() {
        let node = BboxNode::new("anyGeo", [-1.0, -2.0, 3.0, 4.0]);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["value"], serde_json::json!([-1.0, -2.0, 3.0, 4.0]));
    }
}
