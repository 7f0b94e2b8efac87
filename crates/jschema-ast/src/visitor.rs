//! Rebuild traversal over schema fields.
//!
//! [`SchemaVisitor`] exposes one hook per schema field. Scalar hooks return
//! the value unchanged, sub-schema hooks recurse through
//! [`SchemaVisitor::visit_schema`], and collection hooks map that recursion
//! over their elements, so the default traversal produces a copy whose
//! serialization deep-equals the input. Transformations override the hooks
//! they care about and compose by nesting visitors.

use indexmap::IndexMap;
use serde_json::{Map, Number, Value};

use crate::schema::{Dependency, ExclusiveBound, Items, Schema, TypeSet};

macro_rules! scalar_hooks {
    ($($hook:ident => $ty:ty),* $(,)?) => {
        $(
            fn $hook(&mut self, value: &$ty) -> $ty {
                value.clone()
            }
        )*
    };
}

macro_rules! subschema_hooks {
    ($($hook:ident),* $(,)?) => {
        $(
            fn $hook(&mut self, schema: &Schema) -> Schema {
                self.visit_schema(schema)
            }
        )*
    };
}

macro_rules! schema_list_hooks {
    ($($hook:ident),* $(,)?) => {
        $(
            fn $hook(&mut self, schemas: &[Schema]) -> Vec<Schema> {
                schemas.iter().map(|s| self.visit_schema(s)).collect()
            }
        )*
    };
}

macro_rules! schema_map_hooks {
    ($($hook:ident),* $(,)?) => {
        $(
            fn $hook(&mut self, entries: &IndexMap<String, Schema>) -> IndexMap<String, Schema> {
                entries
                    .iter()
                    .map(|(name, s)| (name.clone(), self.visit_schema(s)))
                    .collect()
            }
        )*
    };
}

pub trait SchemaVisitor {
    /// Rebuild `schema`, running every populated field through its hook.
    fn visit_schema(&mut self, schema: &Schema) -> Schema {
        walk_schema(self, schema)
    }

    scalar_hooks!(
        visit_schema_version => String,
        visit_id => String,
        visit_reference => String,
        visit_title => String,
        visit_description => String,
        visit_default => Value,
        visit_valid => bool,
        visit_types => TypeSet,
        visit_const => Value,
        visit_enum => Vec<Value>,
        visit_minimum => Number,
        visit_maximum => Number,
        visit_exclusive_minimum => ExclusiveBound,
        visit_exclusive_maximum => ExclusiveBound,
        visit_multiple_of => Number,
        visit_min_length => u64,
        visit_max_length => u64,
        visit_pattern => String,
        visit_format => String,
        visit_content_encoding => String,
        visit_content_media_type => String,
        visit_allow_additional_items => bool,
        visit_min_items => u64,
        visit_max_items => u64,
        visit_unique_items => bool,
        visit_allow_additional_properties => bool,
        visit_required => Vec<String>,
        visit_min_properties => u64,
        visit_max_properties => u64,
        visit_extension_data => Map<String, Value>,
    );

    subschema_hooks!(
        visit_additional_items,
        visit_contains,
        visit_additional_properties,
        visit_property_names,
        visit_not,
        visit_if,
        visit_then,
        visit_else,
    );

    schema_list_hooks!(visit_all_of, visit_any_of, visit_one_of);

    schema_map_hooks!(visit_properties, visit_pattern_properties, visit_definitions);

    fn visit_items(&mut self, items: &Items) -> Items {
        match items {
            Items::Single(schema) => Items::Single(Box::new(self.visit_schema(schema))),
            Items::Positional(list) => {
                Items::Positional(list.iter().map(|s| self.visit_schema(s)).collect())
            }
        }
    }

    fn visit_dependencies(
        &mut self,
        entries: &IndexMap<String, Dependency>,
    ) -> IndexMap<String, Dependency> {
        entries
            .iter()
            .map(|(name, entry)| {
                let entry = match entry {
                    Dependency::Required(names) => {
                        Dependency::Required(self.visit_dependency_names(names))
                    }
                    Dependency::Node(schema) => {
                        Dependency::Node(Box::new(self.visit_schema(schema)))
                    }
                };
                (name.clone(), entry)
            })
            .collect()
    }

    fn visit_dependency_names(&mut self, names: &[String]) -> Vec<String> {
        names.to_vec()
    }
}

/// The default rebuild: fresh schema, every field routed through its hook.
pub fn walk_schema<V: SchemaVisitor + ?Sized>(visitor: &mut V, schema: &Schema) -> Schema {
    Schema {
        schema_version: schema
            .schema_version
            .as_ref()
            .map(|v| visitor.visit_schema_version(v)),
        id: schema.id.as_ref().map(|v| visitor.visit_id(v)),
        reference: schema.reference.as_ref().map(|v| visitor.visit_reference(v)),
        title: schema.title.as_ref().map(|v| visitor.visit_title(v)),
        description: schema
            .description
            .as_ref()
            .map(|v| visitor.visit_description(v)),
        default: schema.default.as_ref().map(|v| visitor.visit_default(v)),
        valid: schema.valid.map(|v| visitor.visit_valid(&v)),
        types: schema.types.as_ref().map(|v| visitor.visit_types(v)),
        const_value: schema.const_value.as_ref().map(|v| visitor.visit_const(v)),
        enum_values: schema.enum_values.as_ref().map(|v| visitor.visit_enum(v)),
        minimum: schema.minimum.as_ref().map(|v| visitor.visit_minimum(v)),
        maximum: schema.maximum.as_ref().map(|v| visitor.visit_maximum(v)),
        exclusive_minimum: schema
            .exclusive_minimum
            .as_ref()
            .map(|v| visitor.visit_exclusive_minimum(v)),
        exclusive_maximum: schema
            .exclusive_maximum
            .as_ref()
            .map(|v| visitor.visit_exclusive_maximum(v)),
        multiple_of: schema
            .multiple_of
            .as_ref()
            .map(|v| visitor.visit_multiple_of(v)),
        min_length: schema.min_length.map(|v| visitor.visit_min_length(&v)),
        max_length: schema.max_length.map(|v| visitor.visit_max_length(&v)),
        pattern: schema.pattern.as_ref().map(|v| visitor.visit_pattern(v)),
        format: schema.format.as_ref().map(|v| visitor.visit_format(v)),
        content_encoding: schema
            .content_encoding
            .as_ref()
            .map(|v| visitor.visit_content_encoding(v)),
        content_media_type: schema
            .content_media_type
            .as_ref()
            .map(|v| visitor.visit_content_media_type(v)),
        items: schema.items.as_ref().map(|v| visitor.visit_items(v)),
        allow_additional_items: schema
            .allow_additional_items
            .map(|v| visitor.visit_allow_additional_items(&v)),
        additional_items: schema
            .additional_items
            .as_ref()
            .map(|v| Box::new(visitor.visit_additional_items(v))),
        min_items: schema.min_items.map(|v| visitor.visit_min_items(&v)),
        max_items: schema.max_items.map(|v| visitor.visit_max_items(&v)),
        unique_items: schema.unique_items.map(|v| visitor.visit_unique_items(&v)),
        contains: schema
            .contains
            .as_ref()
            .map(|v| Box::new(visitor.visit_contains(v))),
        properties: schema
            .properties
            .as_ref()
            .map(|v| visitor.visit_properties(v)),
        pattern_properties: schema
            .pattern_properties
            .as_ref()
            .map(|v| visitor.visit_pattern_properties(v)),
        allow_additional_properties: schema
            .allow_additional_properties
            .map(|v| visitor.visit_allow_additional_properties(&v)),
        additional_properties: schema
            .additional_properties
            .as_ref()
            .map(|v| Box::new(visitor.visit_additional_properties(v))),
        property_names: schema
            .property_names
            .as_ref()
            .map(|v| Box::new(visitor.visit_property_names(v))),
        required: schema.required.as_ref().map(|v| visitor.visit_required(v)),
        dependencies: schema
            .dependencies
            .as_ref()
            .map(|v| visitor.visit_dependencies(v)),
        min_properties: schema
            .min_properties
            .map(|v| visitor.visit_min_properties(&v)),
        max_properties: schema
            .max_properties
            .map(|v| visitor.visit_max_properties(&v)),
        all_of: schema.all_of.as_ref().map(|v| visitor.visit_all_of(v)),
        any_of: schema.any_of.as_ref().map(|v| visitor.visit_any_of(v)),
        one_of: schema.one_of.as_ref().map(|v| visitor.visit_one_of(v)),
        not: schema.not.as_ref().map(|v| Box::new(visitor.visit_not(v))),
        if_schema: schema
            .if_schema
            .as_ref()
            .map(|v| Box::new(visitor.visit_if(v))),
        then_schema: schema
            .then_schema
            .as_ref()
            .map(|v| Box::new(visitor.visit_then(v))),
        else_schema: schema
            .else_schema
            .as_ref()
            .map(|v| Box::new(visitor.visit_else(v))),
        definitions: schema
            .definitions
            .as_ref()
            .map(|v| visitor.visit_definitions(v)),
        extension_data: visitor.visit_extension_data(&schema.extension_data),
    }
}
