//! The schema record and its canonical JSON form.
//!
//! [`Schema`] keeps one field per keyword. [`Schema::from_value`] and
//! [`Schema::to_value`] are the canonical conversions; cloning, the
//! minimizer's change test, and the "only populated field" checks are all
//! defined against the serialized form, so the conversion is written by hand
//! rather than derived.

use std::fmt;

use indexmap::IndexMap;
use serde_json::{Map, Number, Value};

use crate::value::{self, JsonType, TypeMismatch};

/// JSON Schema draft the document declares via `$schema`.
///
/// The draft only changes a few semantic corners: whether a float with a
/// zero fraction satisfies `type: integer`, and whether
/// `exclusiveMinimum`/`exclusiveMaximum` are booleans or numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Draft {
    Draft3,
    Draft4,
    Draft6,
    Draft7,
}

impl Draft {
    /// Recognize a draft from a `$schema` URI. Unknown URIs get `None`.
    pub fn from_uri(uri: &str) -> Option<Draft> {
        if uri.contains("draft-03") || uri.contains("draft-3") {
            Some(Draft::Draft3)
        } else if uri.contains("draft-04") || uri.contains("draft-4") {
            Some(Draft::Draft4)
        } else if uri.contains("draft-06") || uri.contains("draft-6") {
            Some(Draft::Draft6)
        } else if uri.contains("draft-07") || uri.contains("draft-7") {
            Some(Draft::Draft7)
        } else {
            None
        }
    }

    /// Whether a float with zero fractional part satisfies `type: integer`.
    /// Drafts 3 and 4 say no, 6 and 7 say yes.
    pub fn float_with_zero_fraction_is_integer(self) -> bool {
        matches!(self, Draft::Draft6 | Draft::Draft7)
    }
}

impl Default for Draft {
    fn default() -> Self {
        Draft::Draft7
    }
}

/// A base type named by the `type` keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SchemaType {
    Null,
    Boolean,
    Integer,
    Number,
    String,
    Array,
    Object,
}

impl SchemaType {
    pub fn from_name(name: &str) -> Option<SchemaType> {
        Some(match name {
            "null" => SchemaType::Null,
            "boolean" => SchemaType::Boolean,
            "integer" => SchemaType::Integer,
            "number" => SchemaType::Number,
            "string" => SchemaType::String,
            "array" => SchemaType::Array,
            "object" => SchemaType::Object,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SchemaType::Null => "null",
            SchemaType::Boolean => "boolean",
            SchemaType::Integer => "integer",
            SchemaType::Number => "number",
            SchemaType::String => "string",
            SchemaType::Array => "array",
            SchemaType::Object => "object",
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `type` keyword: one or more base types, in declared order.
///
/// A single type serializes back to the string form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypeSet {
    types: Vec<SchemaType>,
}

impl TypeSet {
    pub fn single(ty: SchemaType) -> TypeSet {
        TypeSet { types: vec![ty] }
    }

    pub fn contains(&self, ty: SchemaType) -> bool {
        self.types.contains(&ty)
    }

    pub fn iter(&self) -> impl Iterator<Item = SchemaType> + '_ {
        self.types.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn to_value(&self) -> Value {
        if let [single] = self.types.as_slice() {
            Value::String(single.as_str().to_owned())
        } else {
            Value::Array(
                self.types
                    .iter()
                    .map(|ty| Value::String(ty.as_str().to_owned()))
                    .collect(),
            )
        }
    }

    fn from_value(value: &Value) -> Result<TypeSet, SchemaError> {
        match value {
            Value::String(name) => SchemaType::from_name(name)
                .map(TypeSet::single)
                .ok_or_else(|| SchemaError::UnknownType(name.clone())),
            Value::Array(names) => {
                let mut types = Vec::with_capacity(names.len());
                for name in names {
                    let name = keyword_str("type", name)?;
                    let ty = SchemaType::from_name(name)
                        .ok_or_else(|| SchemaError::UnknownType(name.to_owned()))?;
                    if !types.contains(&ty) {
                        types.push(ty);
                    }
                }
                Ok(TypeSet { types })
            }
            other => Err(SchemaError::keyword_mismatch(
                "type",
                JsonType::String,
                other,
            )),
        }
    }
}

impl FromIterator<SchemaType> for TypeSet {
    fn from_iter<I: IntoIterator<Item = SchemaType>>(iter: I) -> Self {
        TypeSet {
            types: iter.into_iter().collect(),
        }
    }
}

/// The `items` keyword: one schema for every element, or one per position.
#[derive(Clone, Debug, PartialEq)]
pub enum Items {
    Single(Box<Schema>),
    Positional(Vec<Schema>),
}

/// One entry of the `dependencies` keyword.
#[derive(Clone, Debug, PartialEq)]
pub enum Dependency {
    /// Presence of the key requires these property names.
    Required(Vec<String>),
    /// Presence of the key requires the whole object to match this schema.
    Node(Box<Schema>),
}

/// `exclusiveMinimum`/`exclusiveMaximum`: a boolean modifier of
/// `minimum`/`maximum` in drafts 3/4, a standalone numeric bound in 6/7.
#[derive(Clone, Debug, PartialEq)]
pub enum ExclusiveBound {
    Flag(bool),
    Limit(Number),
}

/// An in-memory JSON Schema.
///
/// Every field is optional; an all-`None` schema accepts every document.
/// Boolean schemas round-trip through [`Schema::valid`]: `true` parses to a
/// schema with `valid: Some(true)` and such a schema serializes back to the
/// bare boolean (its other fields are empty by construction).
///
/// Schemas are immutable after load by convention: rewrites build new
/// values, nothing mutates in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schema {
    pub schema_version: Option<String>,
    pub id: Option<String>,
    /// Document-local `$ref` (a `#`-rooted JSON Pointer). In drafts up to 7
    /// a schema with a reference ignores its sibling keywords.
    pub reference: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub default: Option<Value>,
    /// Literal verdict of a boolean schema.
    pub valid: Option<bool>,
    pub types: Option<TypeSet>,
    pub const_value: Option<Value>,
    pub enum_values: Option<Vec<Value>>,
    pub minimum: Option<Number>,
    pub maximum: Option<Number>,
    pub exclusive_minimum: Option<ExclusiveBound>,
    pub exclusive_maximum: Option<ExclusiveBound>,
    pub multiple_of: Option<Number>,
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub pattern: Option<String>,
    pub format: Option<String>,
    pub content_encoding: Option<String>,
    pub content_media_type: Option<String>,
    pub items: Option<Items>,
    pub allow_additional_items: Option<bool>,
    pub additional_items: Option<Box<Schema>>,
    pub min_items: Option<u64>,
    pub max_items: Option<u64>,
    pub unique_items: Option<bool>,
    pub contains: Option<Box<Schema>>,
    pub properties: Option<IndexMap<String, Schema>>,
    pub pattern_properties: Option<IndexMap<String, Schema>>,
    pub allow_additional_properties: Option<bool>,
    pub additional_properties: Option<Box<Schema>>,
    pub property_names: Option<Box<Schema>>,
    pub required: Option<Vec<String>>,
    pub dependencies: Option<IndexMap<String, Dependency>>,
    pub min_properties: Option<u64>,
    pub max_properties: Option<u64>,
    pub all_of: Option<Vec<Schema>>,
    pub any_of: Option<Vec<Schema>>,
    pub one_of: Option<Vec<Schema>>,
    pub not: Option<Box<Schema>>,
    pub if_schema: Option<Box<Schema>>,
    pub then_schema: Option<Box<Schema>>,
    pub else_schema: Option<Box<Schema>>,
    pub definitions: Option<IndexMap<String, Schema>>,
    /// Keywords this implementation does not recognize, preserved verbatim.
    pub extension_data: Map<String, Value>,
}

/// A schema document could not be converted into a [`Schema`].
#[derive(Debug)]
pub enum SchemaError {
    /// A keyword held a value of the wrong JSON type.
    Keyword {
        keyword: String,
        mismatch: TypeMismatch,
    },
    /// `type` named something that is not a JSON base type.
    UnknownType(String),
    /// A `dependencies` entry was neither a name list nor a schema.
    DependencyShape(String),
    /// The document root was not an object or a boolean.
    InvalidDocument(JsonType),
}

impl SchemaError {
    fn keyword_mismatch(keyword: &str, expected: JsonType, actual: &Value) -> SchemaError {
        SchemaError::Keyword {
            keyword: keyword.to_owned(),
            mismatch: TypeMismatch {
                expected,
                actual: JsonType::of(actual),
            },
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::Keyword { keyword, mismatch } => {
                write!(f, "invalid value for {keyword:?}: {mismatch}")
            }
            SchemaError::UnknownType(name) => write!(f, "unknown JSON type {name:?}"),
            SchemaError::DependencyShape(key) => write!(
                f,
                "dependency {key:?} must be an array of names or a schema"
            ),
            SchemaError::InvalidDocument(actual) => {
                write!(f, "schema must be an object or a boolean, got {actual}")
            }
        }
    }
}

impl std::error::Error for SchemaError {}

fn keyword_str<'a>(keyword: &str, value: &'a Value) -> Result<&'a str, SchemaError> {
    value::as_str(value).map_err(|mismatch| SchemaError::Keyword {
        keyword: keyword.to_owned(),
        mismatch,
    })
}

fn keyword_string(keyword: &str, value: &Value) -> Result<String, SchemaError> {
    keyword_str(keyword, value).map(str::to_owned)
}

fn keyword_bool(keyword: &str, value: &Value) -> Result<bool, SchemaError> {
    value::as_bool(value)
        .copied()
        .map_err(|mismatch| SchemaError::Keyword {
            keyword: keyword.to_owned(),
            mismatch,
        })
}

fn keyword_number(keyword: &str, value: &Value) -> Result<Number, SchemaError> {
    value::as_number(value)
        .cloned()
        .map_err(|mismatch| SchemaError::Keyword {
            keyword: keyword.to_owned(),
            mismatch,
        })
}

/// Non-negative integer keywords also accept floats with a zero fraction
/// (`"minLength": 2.0` is a 2).
fn keyword_size(keyword: &str, value: &Value) -> Result<u64, SchemaError> {
    let number = keyword_number(keyword, value)?;
    if let Some(size) = number.as_u64() {
        return Ok(size);
    }
    if let Some(float) = number.as_f64() {
        if float.trunc() == float && float >= 0.0 && float <= u64::MAX as f64 {
            return Ok(float as u64);
        }
    }
    Err(SchemaError::keyword_mismatch(
        keyword,
        JsonType::Integer,
        value,
    ))
}

fn keyword_schema(value: &Value) -> Result<Box<Schema>, SchemaError> {
    Schema::from_value(value).map(Box::new)
}

fn keyword_schema_list(keyword: &str, value: &Value) -> Result<Vec<Schema>, SchemaError> {
    let items = value::as_array(value).map_err(|mismatch| SchemaError::Keyword {
        keyword: keyword.to_owned(),
        mismatch,
    })?;
    items.iter().map(Schema::from_value).collect()
}

fn keyword_schema_map(
    keyword: &str,
    value: &Value,
) -> Result<IndexMap<String, Schema>, SchemaError> {
    let entries = value::as_object(value).map_err(|mismatch| SchemaError::Keyword {
        keyword: keyword.to_owned(),
        mismatch,
    })?;
    entries
        .iter()
        .map(|(name, child)| Ok((name.clone(), Schema::from_value(child)?)))
        .collect()
}

fn keyword_string_list(keyword: &str, value: &Value) -> Result<Vec<String>, SchemaError> {
    let items = value::as_array(value).map_err(|mismatch| SchemaError::Keyword {
        keyword: keyword.to_owned(),
        mismatch,
    })?;
    items
        .iter()
        .map(|item| keyword_string(keyword, item))
        .collect()
}

fn exclusive_bound(keyword: &str, value: &Value) -> Result<ExclusiveBound, SchemaError> {
    match value {
        Value::Bool(flag) => Ok(ExclusiveBound::Flag(*flag)),
        Value::Number(limit) => Ok(ExclusiveBound::Limit(limit.clone())),
        other => Err(SchemaError::keyword_mismatch(
            keyword,
            JsonType::Float,
            other,
        )),
    }
}

fn dependency(key: &str, value: &Value) -> Result<Dependency, SchemaError> {
    match value {
        Value::Array(names) => {
            let names = names
                .iter()
                .map(|name| keyword_string("dependencies", name))
                .collect::<Result<_, _>>()?;
            Ok(Dependency::Required(names))
        }
        // Draft 3 allowed a single bare property name.
        Value::String(name) => Ok(Dependency::Required(vec![name.clone()])),
        Value::Object(_) | Value::Bool(_) => Ok(Dependency::Node(keyword_schema(value)?)),
        _ => Err(SchemaError::DependencyShape(key.to_owned())),
    }
}

impl Schema {
    pub fn new() -> Schema {
        Schema::default()
    }

    /// The boolean schema `true` or `false`.
    pub fn boolean(valid: bool) -> Schema {
        Schema {
            valid: Some(valid),
            ..Schema::default()
        }
    }

    /// The draft this schema declares, defaulting to draft 7.
    pub fn draft(&self) -> Draft {
        self.schema_version
            .as_deref()
            .and_then(Draft::from_uri)
            .unwrap_or_default()
    }

    /// Build a schema from its JSON form.
    pub fn from_value(value: &Value) -> Result<Schema, SchemaError> {
        match value {
            Value::Bool(valid) => Ok(Schema::boolean(*valid)),
            Value::Object(map) => Schema::from_object(map),
            other => Err(SchemaError::InvalidDocument(JsonType::of(other))),
        }
    }

    fn from_object(map: &Map<String, Value>) -> Result<Schema, SchemaError> {
        let mut schema = Schema::default();
        for (key, value) in map {
            match key.as_str() {
                "$schema" => schema.schema_version = Some(keyword_string(key, value)?),
                "id" | "$id" => schema.id = Some(keyword_string(key, value)?),
                "$ref" => schema.reference = Some(keyword_string(key, value)?),
                "title" => schema.title = Some(keyword_string(key, value)?),
                "description" => schema.description = Some(keyword_string(key, value)?),
                "default" => schema.default = Some(value.clone()),
                "type" => schema.types = Some(TypeSet::from_value(value)?),
                "const" => schema.const_value = Some(value.clone()),
                "enum" => {
                    let members = value::as_array(value).map_err(|mismatch| {
                        SchemaError::Keyword {
                            keyword: key.clone(),
                            mismatch,
                        }
                    })?;
                    schema.enum_values = Some(members.clone());
                }
                "minimum" => schema.minimum = Some(keyword_number(key, value)?),
                "maximum" => schema.maximum = Some(keyword_number(key, value)?),
                "exclusiveMinimum" => {
                    schema.exclusive_minimum = Some(exclusive_bound(key, value)?);
                }
                "exclusiveMaximum" => {
                    schema.exclusive_maximum = Some(exclusive_bound(key, value)?);
                }
                "multipleOf" => schema.multiple_of = Some(keyword_number(key, value)?),
                "minLength" => schema.min_length = Some(keyword_size(key, value)?),
                "maxLength" => schema.max_length = Some(keyword_size(key, value)?),
                "pattern" => schema.pattern = Some(keyword_string(key, value)?),
                "format" => schema.format = Some(keyword_string(key, value)?),
                "contentEncoding" => {
                    schema.content_encoding = Some(keyword_string(key, value)?);
                }
                "contentMediaType" => {
                    schema.content_media_type = Some(keyword_string(key, value)?);
                }
                "items" => {
                    schema.items = Some(match value {
                        Value::Array(positional) => Items::Positional(
                            positional
                                .iter()
                                .map(Schema::from_value)
                                .collect::<Result<_, _>>()?,
                        ),
                        _ => Items::Single(keyword_schema(value)?),
                    });
                }
                "additionalItems" => match value {
                    Value::Bool(allow) => schema.allow_additional_items = Some(*allow),
                    _ => schema.additional_items = Some(keyword_schema(value)?),
                },
                "minItems" => schema.min_items = Some(keyword_size(key, value)?),
                "maxItems" => schema.max_items = Some(keyword_size(key, value)?),
                "uniqueItems" => schema.unique_items = Some(keyword_bool(key, value)?),
                "contains" => schema.contains = Some(keyword_schema(value)?),
                "properties" => schema.properties = Some(keyword_schema_map(key, value)?),
                "patternProperties" => {
                    schema.pattern_properties = Some(keyword_schema_map(key, value)?);
                }
                "additionalProperties" => match value {
                    Value::Bool(allow) => schema.allow_additional_properties = Some(*allow),
                    _ => schema.additional_properties = Some(keyword_schema(value)?),
                },
                "propertyNames" => schema.property_names = Some(keyword_schema(value)?),
                "required" => schema.required = Some(keyword_string_list(key, value)?),
                "dependencies" => {
                    let entries = value::as_object(value).map_err(|mismatch| {
                        SchemaError::Keyword {
                            keyword: key.clone(),
                            mismatch,
                        }
                    })?;
                    let mut dependencies = IndexMap::with_capacity(entries.len());
                    for (name, entry) in entries {
                        dependencies.insert(name.clone(), dependency(name, entry)?);
                    }
                    schema.dependencies = Some(dependencies);
                }
                "minProperties" => schema.min_properties = Some(keyword_size(key, value)?),
                "maxProperties" => schema.max_properties = Some(keyword_size(key, value)?),
                "allOf" => schema.all_of = Some(keyword_schema_list(key, value)?),
                "anyOf" => schema.any_of = Some(keyword_schema_list(key, value)?),
                "oneOf" => schema.one_of = Some(keyword_schema_list(key, value)?),
                "not" => schema.not = Some(keyword_schema(value)?),
                "if" => schema.if_schema = Some(keyword_schema(value)?),
                "then" => schema.then_schema = Some(keyword_schema(value)?),
                "else" => schema.else_schema = Some(keyword_schema(value)?),
                "definitions" | "$defs" => {
                    schema.definitions = Some(keyword_schema_map(key, value)?);
                }
                _ => {
                    schema.extension_data.insert(key.clone(), value.clone());
                }
            }
        }
        Ok(schema)
    }

    /// The canonical JSON form of this schema.
    ///
    /// Keys come out in a fixed declaration order, so two schemas with the
    /// same content always serialize identically. A schema whose `valid`
    /// field is set serializes to the bare boolean.
    pub fn to_value(&self) -> Value {
        if let Some(valid) = self.valid {
            return Value::Bool(valid);
        }
        let mut map = Map::new();
        let mut put = |key: &str, value: Value| {
            map.insert(key.to_owned(), value);
        };
        if let Some(version) = &self.schema_version {
            put("$schema", Value::String(version.clone()));
        }
        if let Some(id) = &self.id {
            put("$id", Value::String(id.clone()));
        }
        if let Some(reference) = &self.reference {
            put("$ref", Value::String(reference.clone()));
        }
        if let Some(title) = &self.title {
            put("title", Value::String(title.clone()));
        }
        if let Some(description) = &self.description {
            put("description", Value::String(description.clone()));
        }
        if let Some(default) = &self.default {
            put("default", default.clone());
        }
        if let Some(types) = &self.types {
            put("type", types.to_value());
        }
        if let Some(const_value) = &self.const_value {
            put("const", const_value.clone());
        }
        if let Some(members) = &self.enum_values {
            put("enum", Value::Array(members.clone()));
        }
        if let Some(minimum) = &self.minimum {
            put("minimum", Value::Number(minimum.clone()));
        }
        if let Some(maximum) = &self.maximum {
            put("maximum", Value::Number(maximum.clone()));
        }
        if let Some(bound) = &self.exclusive_minimum {
            put("exclusiveMinimum", exclusive_bound_value(bound));
        }
        if let Some(bound) = &self.exclusive_maximum {
            put("exclusiveMaximum", exclusive_bound_value(bound));
        }
        if let Some(multiple_of) = &self.multiple_of {
            put("multipleOf", Value::Number(multiple_of.clone()));
        }
        if let Some(min_length) = self.min_length {
            put("minLength", Value::from(min_length));
        }
        if let Some(max_length) = self.max_length {
            put("maxLength", Value::from(max_length));
        }
        if let Some(pattern) = &self.pattern {
            put("pattern", Value::String(pattern.clone()));
        }
        if let Some(format) = &self.format {
            put("format", Value::String(format.clone()));
        }
        if let Some(encoding) = &self.content_encoding {
            put("contentEncoding", Value::String(encoding.clone()));
        }
        if let Some(media_type) = &self.content_media_type {
            put("contentMediaType", Value::String(media_type.clone()));
        }
        if let Some(items) = &self.items {
            let value = match items {
                Items::Single(schema) => schema.to_value(),
                Items::Positional(list) => {
                    Value::Array(list.iter().map(Schema::to_value).collect())
                }
            };
            put("items", value);
        }
        if let Some(schema) = &self.additional_items {
            put("additionalItems", schema.to_value());
        } else if let Some(allow) = self.allow_additional_items {
            put("additionalItems", Value::Bool(allow));
        }
        if let Some(min_items) = self.min_items {
            put("minItems", Value::from(min_items));
        }
        if let Some(max_items) = self.max_items {
            put("maxItems", Value::from(max_items));
        }
        if let Some(unique) = self.unique_items {
            put("uniqueItems", Value::Bool(unique));
        }
        if let Some(contains) = &self.contains {
            put("contains", contains.to_value());
        }
        if let Some(properties) = &self.properties {
            put("properties", schema_map_value(properties));
        }
        if let Some(patterns) = &self.pattern_properties {
            put("patternProperties", schema_map_value(patterns));
        }
        if let Some(schema) = &self.additional_properties {
            put("additionalProperties", schema.to_value());
        } else if let Some(allow) = self.allow_additional_properties {
            put("additionalProperties", Value::Bool(allow));
        }
        if let Some(property_names) = &self.property_names {
            put("propertyNames", property_names.to_value());
        }
        if let Some(required) = &self.required {
            put(
                "required",
                Value::Array(
                    required
                        .iter()
                        .map(|name| Value::String(name.clone()))
                        .collect(),
                ),
            );
        }
        if let Some(dependencies) = &self.dependencies {
            let mut entries = Map::new();
            for (name, entry) in dependencies {
                let value = match entry {
                    Dependency::Required(names) => Value::Array(
                        names.iter().map(|n| Value::String(n.clone())).collect(),
                    ),
                    Dependency::Node(schema) => schema.to_value(),
                };
                entries.insert(name.clone(), value);
            }
            put("dependencies", Value::Object(entries));
        }
        if let Some(min_properties) = self.min_properties {
            put("minProperties", Value::from(min_properties));
        }
        if let Some(max_properties) = self.max_properties {
            put("maxProperties", Value::from(max_properties));
        }
        if let Some(all_of) = &self.all_of {
            put("allOf", Value::Array(all_of.iter().map(Schema::to_value).collect()));
        }
        if let Some(any_of) = &self.any_of {
            put("anyOf", Value::Array(any_of.iter().map(Schema::to_value).collect()));
        }
        if let Some(one_of) = &self.one_of {
            put("oneOf", Value::Array(one_of.iter().map(Schema::to_value).collect()));
        }
        if let Some(not) = &self.not {
            put("not", not.to_value());
        }
        if let Some(if_schema) = &self.if_schema {
            put("if", if_schema.to_value());
        }
        if let Some(then_schema) = &self.then_schema {
            put("then", then_schema.to_value());
        }
        if let Some(else_schema) = &self.else_schema {
            put("else", else_schema.to_value());
        }
        if let Some(definitions) = &self.definitions {
            put("definitions", schema_map_value(definitions));
        }
        for (key, value) in &self.extension_data {
            map.insert(key.clone(), value.clone());
        }
        Value::Object(map)
    }

    /// A deep copy with no identity shared with `self`: serialize, parse back.
    pub fn clone_deep(&self) -> Schema {
        Schema::from_value(&self.to_value()).expect("canonical schema form always reparses")
    }

    /// Whether the serialized form is the empty object `{}`.
    pub fn is_empty(&self) -> bool {
        matches!(self.to_value(), Value::Object(map) if map.is_empty())
    }

    /// Whether the serialized form has exactly one key, `key`.
    pub fn only_key(&self, key: &str) -> bool {
        matches!(self.to_value(), Value::Object(map) if map.len() == 1 && map.contains_key(key))
    }
}

fn exclusive_bound_value(bound: &ExclusiveBound) -> Value {
    match bound {
        ExclusiveBound::Flag(flag) => Value::Bool(*flag),
        ExclusiveBound::Limit(limit) => Value::Number(limit.clone()),
    }
}

fn schema_map_value(map: &IndexMap<String, Schema>) -> Value {
    let mut entries = Map::new();
    for (name, schema) in map {
        entries.insert(name.clone(), schema.to_value());
    }
    Value::Object(entries)
}

impl serde::Serialize for Schema {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.to_value(), serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Schema {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Schema, D::Error> {
        let value = <Value as serde::Deserialize>::deserialize(deserializer)?;
        Schema::from_value(&value).map_err(serde::de::Error::custom)
    }
}
