//! Product domain entity

use std::borrow::Cow;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;
use utoipa::openapi::schema::{AdditionalProperties, ObjectBuilder, Schema, Type};
use utoipa::openapi::RefOr;
use utoipa::{PartialSchema, ToSchema};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidProduct {
    #[error("product is missing field `{0}`")]
    MissingField(&'static str),

    #[error("product field `{field}` must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
}

/// Length and width of a product, read from its `dimensions` object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
}

/// A catalog entry.
///
/// The source record is kept as-is, key order included, and is what gets
/// serialized back. The fields the API filters on are read out once when the
/// record is decoded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Product {
    id: i64,
    category: String,
    price: f64,
    dimensions: Dimensions,
    record: Map<String, Value>,
}

impl Product {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn length(&self) -> f64 {
        self.dimensions.length
    }

    pub fn width(&self) -> f64 {
        self.dimensions.width
    }

    /// Any field of the source record, typed or not.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.record.get(key)
    }

    pub fn as_record(&self) -> &Map<String, Value> {
        &self.record
    }
}

impl TryFrom<Map<String, Value>> for Product {
    type Error = InvalidProduct;

    fn try_from(record: Map<String, Value>) -> Result<Self, Self::Error> {
        let id = field(&record, "id")?
            .as_i64()
            .ok_or(InvalidProduct::WrongType {
                field: "id",
                expected: "an integer",
            })?;
        let category = field(&record, "category")?
            .as_str()
            .ok_or(InvalidProduct::WrongType {
                field: "category",
                expected: "a string",
            })?
            .to_string();
        let price = number(&record, "price")?;

        let dims = field(&record, "dimensions")?
            .as_object()
            .ok_or(InvalidProduct::WrongType {
                field: "dimensions",
                expected: "an object",
            })?;
        let dimensions = Dimensions {
            length: number(dims, "length")?,
            width: number(dims, "width")?,
        };

        Ok(Self {
            id,
            category,
            price,
            dimensions,
            record,
        })
    }
}

impl Serialize for Product {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.record.serialize(serializer)
    }
}

fn field<'a>(record: &'a Map<String, Value>, name: &'static str) -> Result<&'a Value, InvalidProduct> {
    record.get(name).ok_or(InvalidProduct::MissingField(name))
}

fn number(record: &Map<String, Value>, name: &'static str) -> Result<f64, InvalidProduct> {
    field(record, name)?
        .as_f64()
        .ok_or(InvalidProduct::WrongType {
            field: name,
            expected: "a number",
        })
}

// The record is free-form beyond the typed fields, so the schemas are spelled
// out instead of derived.
impl PartialSchema for Dimensions {
    fn schema() -> RefOr<Schema> {
        ObjectBuilder::new()
            .property("length", ObjectBuilder::new().schema_type(Type::Number))
            .required("length")
            .property("width", ObjectBuilder::new().schema_type(Type::Number))
            .required("width")
            .additional_properties(Some(AdditionalProperties::FreeForm(true)))
            .into()
    }
}

impl ToSchema for Dimensions {
    fn name() -> Cow<'static, str> {
        Cow::Borrowed("Dimensions")
    }
}

impl PartialSchema for Product {
    fn schema() -> RefOr<Schema> {
        ObjectBuilder::new()
            .property("id", ObjectBuilder::new().schema_type(Type::Integer))
            .required("id")
            .property("category", ObjectBuilder::new().schema_type(Type::String))
            .required("category")
            .property("price", ObjectBuilder::new().schema_type(Type::Number))
            .required("price")
            .property("dimensions", Dimensions::schema())
            .required("dimensions")
            .additional_properties(Some(AdditionalProperties::FreeForm(true)))
            .description(Some(
                "Catalog product. Fields beyond the ones listed are passed through unchanged.",
            ))
            .into()
    }
}

impl ToSchema for Product {
    fn name() -> Cow<'static, str> {
        Cow::Borrowed("Product")
    }
}
