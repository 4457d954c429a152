#![deny(missing_docs)]

//! # Value Types
//!
//! Typed views of the loosely-shaped `type` / `itemType` / `style` / `explode`
//! quadruple that every path parameter, query parameter and body property carries.
//!
//! On the wire the descriptor stays flat:
//!
//! ```json
//! { "type": "array", "itemType": "integer", "style": "form", "explode": true }
//! ```
//!
//! In memory the type pair becomes a single [`DataType`] so an element type
//! can never be attached to a primitive.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Scalar JSON Schema types accepted for headers and array/object elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    /// `string`
    String,
    /// `number`
    Number,
    /// `integer`
    Integer,
    /// `boolean`
    Boolean,
}

impl PrimitiveType {
    /// The JSON Schema keyword for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveType::String => "string",
            PrimitiveType::Number => "number",
            PrimitiveType::Integer => "integer",
            PrimitiveType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The declared type of a parameter or body property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// A scalar value.
    Primitive(PrimitiveType),
    /// An array, with an optional declared element type.
    Array(Option<PrimitiveType>),
    /// An object, with an optional declared value type.
    Object(Option<PrimitiveType>),
}

impl DataType {
    /// The JSON Schema `type` keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Primitive(p) => p.as_str(),
            DataType::Array(_) => "array",
            DataType::Object(_) => "object",
        }
    }

    /// Whether the value needs `style`/`explode` serialization rules.
    pub fn is_composite(&self) -> bool {
        matches!(self, DataType::Array(_) | DataType::Object(_))
    }

    /// Element type of a composite, falling back to `string`.
    ///
    /// Returns `None` for primitives.
    pub fn item_type(&self) -> Option<PrimitiveType> {
        match self {
            DataType::Primitive(_) => None,
            DataType::Array(item) | DataType::Object(item) => {
                Some(item.unwrap_or(PrimitiveType::String))
            }
        }
    }

    fn from_wire(tag: AnyType, item_type: Option<PrimitiveType>) -> Self {
        match tag {
            AnyType::String => DataType::Primitive(PrimitiveType::String),
            AnyType::Number => DataType::Primitive(PrimitiveType::Number),
            AnyType::Integer => DataType::Primitive(PrimitiveType::Integer),
            AnyType::Boolean => DataType::Primitive(PrimitiveType::Boolean),
            AnyType::Array => DataType::Array(item_type),
            AnyType::Object => DataType::Object(item_type),
        }
    }

    fn to_wire(self) -> (AnyType, Option<PrimitiveType>) {
        match self {
            DataType::Primitive(PrimitiveType::String) => (AnyType::String, None),
            DataType::Primitive(PrimitiveType::Number) => (AnyType::Number, None),
            DataType::Primitive(PrimitiveType::Integer) => (AnyType::Integer, None),
            DataType::Primitive(PrimitiveType::Boolean) => (AnyType::Boolean, None),
            DataType::Array(item) => (AnyType::Array, item),
            DataType::Object(item) => (AnyType::Object, item),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serialization style for composite values (OAS 3.0 `style`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParamStyle {
    /// Path: `{id}` -> `1,2,3`
    Simple,
    /// Path: `{.id}` -> `.1.2.3`
    Label,
    /// Path: `{;id}` -> `;id=1,2,3`
    Matrix,
    /// Query / body: `id=1&id=2`
    Form,
    /// Query / body: `id=1%202`
    SpaceDelimited,
    /// Query / body: `id=1|2`
    PipeDelimited,
    /// Query / body: `id[role]=admin`
    DeepObject,
}

impl ParamStyle {
    /// The OpenAPI keyword for this style.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamStyle::Simple => "simple",
            ParamStyle::Label => "label",
            ParamStyle::Matrix => "matrix",
            ParamStyle::Form => "form",
            ParamStyle::SpaceDelimited => "spaceDelimited",
            ParamStyle::PipeDelimited => "pipeDelimited",
            ParamStyle::DeepObject => "deepObject",
        }
    }

    /// Styles permitted for `in: path`.
    pub fn is_path_style(&self) -> bool {
        matches!(
            self,
            ParamStyle::Simple | ParamStyle::Label | ParamStyle::Matrix
        )
    }

    /// Styles permitted for `in: query` and form-encoded body properties.
    pub fn is_query_style(&self) -> bool {
        !self.is_path_style()
    }
}

impl fmt::Display for ParamStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type, element type and serialization hints shared by parameters and body properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireValueSchema", into = "WireValueSchema")]
pub struct ValueSchema {
    /// Declared type.
    pub data_type: DataType,
    /// Explicit style, if the author chose one.
    pub style: Option<ParamStyle>,
    /// Explicit explode flag. Non-boolean input is read as absent.
    pub explode: Option<bool>,
}

impl ValueSchema {
    /// A bare value of the given type with no serialization hints.
    pub fn new(data_type: DataType) -> Self {
        Self {
            data_type,
            style: None,
            explode: None,
        }
    }

    /// Sets the style.
    pub fn with_style(mut self, style: ParamStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Sets the explode flag.
    pub fn with_explode(mut self, explode: bool) -> Self {
        self.explode = Some(explode);
        self
    }
}

/// The bare `type` keyword as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnyType {
    /// `string`
    String,
    /// `number`
    Number,
    /// `integer`
    #[default]
    Integer,
    /// `boolean`
    Boolean,
    /// `array`
    Array,
    /// `object`
    Object,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireValueSchema {
    #[serde(rename = "type")]
    ty: AnyType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    item_type: Option<PrimitiveType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    style: Option<ParamStyle>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_bool",
        skip_serializing_if = "Option::is_none"
    )]
    explode: Option<bool>,
}

impl From<WireValueSchema> for ValueSchema {
    fn from(wire: WireValueSchema) -> Self {
        Self {
            data_type: DataType::from_wire(wire.ty, wire.item_type),
            style: wire.style,
            explode: wire.explode,
        }
    }
}

impl From<ValueSchema> for WireValueSchema {
    fn from(value: ValueSchema) -> Self {
        let (ty, item_type) = value.data_type.to_wire();
        Self {
            ty,
            item_type,
            style: value.style,
            explode: value.explode,
        }
    }
}

/// Accepts any JSON value and keeps it only when it is a boolean.
///
/// Form inputs frequently post `"true"` or `""` for checkboxes; those must
/// fall back to the location default rather than reject the descriptor.
fn deserialize_lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| v.as_bool()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_array_with_item_type() {
        let v: ValueSchema =
            serde_json::from_value(json!({"type": "array", "itemType": "integer"})).unwrap();
        assert_eq!(v.data_type, DataType::Array(Some(PrimitiveType::Integer)));
        assert_eq!(v.data_type.item_type(), Some(PrimitiveType::Integer));
        assert!(v.style.is_none());
        assert!(v.explode.is_none());
    }

    #[test]
    fn test_item_type_defaults_to_string() {
        assert_eq!(DataType::Object(None).item_type(), Some(PrimitiveType::String));
        assert_eq!(
            DataType::Primitive(PrimitiveType::Boolean).item_type(),
            None
        );
    }

    #[test]
    fn test_item_type_on_primitive_is_dropped() {
        let v: ValueSchema =
            serde_json::from_value(json!({"type": "number", "itemType": "integer"})).unwrap();
        assert_eq!(v.data_type, DataType::Primitive(PrimitiveType::Number));
        let back = serde_json::to_value(&v).unwrap();
        assert_eq!(back, json!({"type": "number"}));
    }

    #[test]
    fn test_non_boolean_explode_is_absent() {
        for raw in [json!("true"), json!(1), json!(null), json!({})] {
            let v: ValueSchema =
                serde_json::from_value(json!({"type": "array", "explode": raw})).unwrap();
            assert_eq!(v.explode, None, "explode={raw}");
        }
        let v: ValueSchema =
            serde_json::from_value(json!({"type": "array", "explode": false})).unwrap();
        assert_eq!(v.explode, Some(false));
    }

    #[test]
    fn test_camel_case_styles() {
        let v: ValueSchema =
            serde_json::from_value(json!({"type": "array", "style": "pipeDelimited"})).unwrap();
        assert_eq!(v.style, Some(ParamStyle::PipeDelimited));
        assert!(serde_json::from_value::<ValueSchema>(json!({"type": "array", "style": "csv"}))
            .is_err());
    }

    #[test]
    fn test_style_families() {
        assert!(ParamStyle::Matrix.is_path_style());
        assert!(ParamStyle::DeepObject.is_query_style());
        assert!(!ParamStyle::Simple.is_query_style());
    }

    #[test]
    fn test_wire_shape_is_preserved() {
        let v = ValueSchema::new(DataType::Array(Some(PrimitiveType::Number)))
            .with_style(ParamStyle::SpaceDelimited)
            .with_explode(false);
        assert_eq!(
            serde_json::to_value(&v).unwrap(),
            json!({"type": "array", "itemType": "number", "style": "spaceDelimited", "explode": false})
        );
    }
}
