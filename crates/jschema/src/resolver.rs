//! Document-local `$ref` resolution.
//!
//! References are `#`-rooted JSON Pointers into the same schema document
//! (`#`, `#/definitions/node`, `#/properties/child/items`, …). Resolution
//! walks the typed AST, so a pointer is only resolvable when every segment
//! lands on a schema-valued position. External URIs are not supported here.

use jschema_ast::schema::{Dependency, Items, Schema};

use crate::error::SchemaConstructionError;

pub(crate) fn resolve<'s>(
    root: &'s Schema,
    reference: &str,
) -> Result<&'s Schema, SchemaConstructionError> {
    let pointer = reference
        .strip_prefix('#')
        .ok_or_else(|| SchemaConstructionError::unresolvable(reference))?;
    if pointer.is_empty() {
        return Ok(root);
    }
    let mut current = root;
    let rest = pointer
        .strip_prefix('/')
        .ok_or_else(|| SchemaConstructionError::unresolvable(reference))?;
    let mut segments = rest.split('/');
    while let Some(raw) = segments.next() {
        let segment = unescape(raw);
        current = match step(current, &segment) {
            Some(next) => next,
            None => {
                // Two-segment steps: a keyword followed by a name or index.
                let child = segments
                    .next()
                    .map(|raw| unescape(raw))
                    .and_then(|name| step_into(current, &segment, &name));
                child.ok_or_else(|| SchemaConstructionError::unresolvable(reference))?
            }
        };
    }
    Ok(current)
}

/// Single-segment steps: keywords whose value is itself a schema.
fn step<'s>(schema: &'s Schema, segment: &str) -> Option<&'s Schema> {
    match segment {
        "not" => schema.not.as_deref(),
        "if" => schema.if_schema.as_deref(),
        "then" => schema.then_schema.as_deref(),
        "else" => schema.else_schema.as_deref(),
        "contains" => schema.contains.as_deref(),
        "propertyNames" => schema.property_names.as_deref(),
        "additionalItems" => schema.additional_items.as_deref(),
        "additionalProperties" => schema.additional_properties.as_deref(),
        "items" => match schema.items.as_ref()? {
            Items::Single(single) => Some(single),
            Items::Positional(_) => None,
        },
        _ => None,
    }
}

/// Two-segment steps: `properties/<name>`, `allOf/<index>`, and friends.
fn step_into<'s>(schema: &'s Schema, keyword: &str, name: &str) -> Option<&'s Schema> {
    match keyword {
        "properties" => schema.properties.as_ref()?.get(name),
        "patternProperties" => schema.pattern_properties.as_ref()?.get(name),
        "definitions" | "$defs" => schema.definitions.as_ref()?.get(name),
        "dependencies" => match schema.dependencies.as_ref()?.get(name)? {
            Dependency::Node(node) => Some(node),
            Dependency::Required(_) => None,
        },
        "allOf" => indexed(schema.all_of.as_deref()?, name),
        "anyOf" => indexed(schema.any_of.as_deref()?, name),
        "oneOf" => indexed(schema.one_of.as_deref()?, name),
        "items" => match schema.items.as_ref()? {
            Items::Positional(list) => indexed(list, name),
            Items::Single(_) => None,
        },
        _ => None,
    }
}

fn indexed<'s>(list: &'s [Schema], name: &str) -> Option<&'s Schema> {
    let index: usize = name.parse().ok()?;
    list.get(index)
}

/// JSON Pointer unescaping plus percent-decoding for fragment characters.
fn unescape(segment: &str) -> String {
    let mut buffer = Vec::with_capacity(segment.len());
    let mut bytes = segment.bytes();
    while let Some(byte) = bytes.next() {
        match byte {
            b'%' => {
                let high = bytes.next().and_then(hex_digit);
                let low = bytes.next().and_then(hex_digit);
                if let (Some(high), Some(low)) = (high, low) {
                    buffer.push(high << 4 | low);
                } else {
                    buffer.push(b'%');
                }
            }
            other => buffer.push(other),
        }
    }
    let decoded = String::from_utf8(buffer).unwrap_or_else(|_| segment.to_owned());
    decoded.replace("~1", "/").replace("~0", "~")
}

fn hex_digit(byte: u8) -> Option<u8> {
    (byte as char).to_digit(16).map(|digit| digit as u8)
}
