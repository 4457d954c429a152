#![deny(missing_docs)]

//! # Request Body
//!
//! Builds the Request Body Object for form-encoded model inputs.

use crate::descriptor::RequestBodySpec;
use crate::oas::params::{build_type_schema, resolve_explode, resolve_style, ParamLocation};
use serde_json::{json, Map, Value};

/// Builds `requestBody` for an active body declaration.
///
/// Every property is listed in `required`. Array and object properties get
/// an `encoding` entry; `encoding` is left out when none need one.
pub fn build_request_body(body: &RequestBodySpec) -> Value {
    let mut required = Vec::with_capacity(body.properties.len());
    let mut properties = Map::new();
    let mut encoding = Map::new();

    for prop in &body.properties {
        required.push(json!(prop.field));
        properties.insert(prop.field.clone(), build_type_schema(&prop.value.data_type));

        if prop.value.data_type.is_composite() {
            // form bodies share the query serialization defaults
            encoding.insert(
                prop.field.clone(),
                json!({
                    "style": resolve_style(ParamLocation::Query, &prop.value).as_str(),
                    "explode": resolve_explode(ParamLocation::Query, &prop.value),
                }),
            );
        }
    }

    let mut media = Map::new();
    media.insert(
        "schema".to_string(),
        json!({
            "type": "object",
            "required": required,
            "properties": properties,
        }),
    );
    if !encoding.is_empty() {
        media.insert("encoding".to_string(), Value::Object(encoding));
    }

    let mut content = Map::new();
    content.insert(body.media_type.as_str().to_string(), Value::Object(media));

    json!({
        "required": true,
        "content": content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{
        BodyProperty, DataType, ParamStyle, PrimitiveType, RequestBodyMediaType, ValueSchema,
    };

    fn string_prop(field: &str) -> BodyProperty {
        BodyProperty::new(
            field,
            ValueSchema::new(DataType::Primitive(PrimitiveType::String)),
        )
    }

    #[test]
    fn test_required_list_without_encoding() {
        let body = RequestBodySpec {
            media_type: RequestBodyMediaType::FormUrlEncoded,
            properties: vec![string_prop("a"), string_prop("b")],
        };
        let v = build_request_body(&body);
        let media = &v["content"]["application/x-www-form-urlencoded"];
        assert_eq!(v["required"], true);
        assert_eq!(media["schema"]["type"], "object");
        assert_eq!(media["schema"]["required"], json!(["a", "b"]));
        assert_eq!(media["schema"]["properties"]["a"], json!({"type": "string"}));
        assert!(media.get("encoding").is_none());
    }

    #[test]
    fn test_composite_properties_get_encoding() {
        let body = RequestBodySpec {
            media_type: RequestBodyMediaType::MultipartFormData,
            properties: vec![
                string_prop("name"),
                BodyProperty::new(
                    "scores",
                    ValueSchema::new(DataType::Array(Some(PrimitiveType::Number))),
                ),
                BodyProperty::new(
                    "meta",
                    ValueSchema::new(DataType::Object(None))
                        .with_style(ParamStyle::DeepObject)
                        .with_explode(false),
                ),
            ],
        };
        let v = build_request_body(&body);
        let media = &v["content"]["multipart/form-data"];
        assert_eq!(
            media["schema"]["properties"]["scores"],
            json!({"type": "array", "items": {"type": "number"}})
        );
        assert_eq!(
            media["schema"]["properties"]["meta"],
            json!({"type": "object", "properties": {"type": "string"}})
        );
        assert_eq!(
            media["encoding"],
            json!({
                "scores": {"style": "form", "explode": true},
                "meta": {"style": "deepObject", "explode": false}
            })
        );
        assert!(media["encoding"].get("name").is_none());
    }

    #[test]
    fn test_object_property_uses_default_encoding() {
        let body = RequestBodySpec {
            media_type: RequestBodyMediaType::FormUrlEncoded,
            properties: vec![BodyProperty::new(
                "features",
                ValueSchema::new(DataType::Object(Some(PrimitiveType::Boolean))),
            )],
        };
        let v = build_request_body(&body);
        let media = &v["content"]["application/x-www-form-urlencoded"];
        assert_eq!(
            media["schema"]["properties"]["features"],
            json!({"type": "object", "properties": {"type": "boolean"}})
        );
        assert_eq!(
            media["encoding"],
            json!({"features": {"style": "form", "explode": true}})
        );
    }

    #[test]
    fn test_empty_properties() {
        let body = RequestBodySpec {
            media_type: RequestBodyMediaType::FormUrlEncoded,
            properties: vec![],
        };
        let v = build_request_body(&body);
        let schema = &v["content"]["application/x-www-form-urlencoded"]["schema"];
        assert_eq!(schema["required"], json!([]));
        assert_eq!(schema["properties"], json!({}));
    }
}
