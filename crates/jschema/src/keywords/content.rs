//! `contentEncoding` and `contentMediaType`.
//!
//! Only `base64` and `application/json` are recognized; decode and parse
//! failures become a plain `false` verdict for the keyword, never an error.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use jschema_ast::schema::Schema;
use serde_json::Value;

use crate::compiler::Context;
use crate::error::SchemaConstructionError;
use crate::node::{BoxedValidator, Validate};

const BASE64: &str = "base64";
const APPLICATION_JSON: &str = "application/json";

pub(crate) struct ContentValidator {
    base64: bool,
    json: bool,
}

impl Validate for ContentValidator {
    fn is_valid(&self, instance: &Value) -> bool {
        let Value::String(text) = instance else {
            return true;
        };
        if self.base64 {
            let Ok(decoded) = STANDARD.decode(text) else {
                return false;
            };
            if self.json {
                let Ok(decoded) = String::from_utf8(decoded) else {
                    return false;
                };
                return serde_json::from_str::<Value>(&decoded).is_ok();
            }
            return true;
        }
        if self.json {
            return serde_json::from_str::<Value>(text).is_ok();
        }
        true
    }
}

pub(crate) fn compile<'s>(
    _ctx: &Context<'s>,
    schema: &'s Schema,
    validators: &mut Vec<BoxedValidator>,
) -> Result<(), SchemaConstructionError> {
    let base64 = schema.content_encoding.as_deref() == Some(BASE64);
    let json = schema.content_media_type.as_deref() == Some(APPLICATION_JSON);
    if base64 || json {
        validators.push(Box::new(ContentValidator { base64, json }));
    }
    Ok(())
}
