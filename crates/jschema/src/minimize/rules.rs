//! Structural reduction rules.
//!
//! Every rule is a pure schema rewrite that preserves the set of accepted
//! documents. A rule that does not apply returns its input borrowed (the
//! driver uses that as a cheap no-change signal); an applied rewrite
//! returns a fresh deep clone with the change made.

use std::borrow::Cow;

use jschema_ast::equality::deep_equal;
use jschema_ast::schema::Schema;
use serde_json::Value;

pub(crate) trait ReductionRule: Sync {
    fn name(&self) -> &'static str;
    fn reduce<'a>(&self, schema: &'a Schema) -> Cow<'a, Schema>;
}

/// First-occurrence dedup of a schema list under serialized deep equality.
fn dedupe_schemas(list: &[Schema]) -> Option<Vec<Schema>> {
    let mut kept: Vec<(Value, Schema)> = Vec::with_capacity(list.len());
    for member in list {
        let serialized = member.to_value();
        if !kept.iter().any(|(seen, _)| deep_equal(seen, &serialized)) {
            kept.push((serialized, member.clone()));
        }
    }
    if kept.len() == list.len() {
        return None;
    }
    Some(kept.into_iter().map(|(_, member)| member).collect())
}

macro_rules! dedupe_rule {
    ($rule:ident, $field:ident, $name:literal) => {
        pub(crate) struct $rule;

        impl ReductionRule for $rule {
            fn name(&self) -> &'static str {
                $name
            }

            fn reduce<'a>(&self, schema: &'a Schema) -> Cow<'a, Schema> {
                let Some(members) = &schema.$field else {
                    return Cow::Borrowed(schema);
                };
                match dedupe_schemas(members) {
                    Some(deduped) => {
                        let mut reduced = schema.clone_deep();
                        reduced.$field = Some(deduped);
                        Cow::Owned(reduced)
                    }
                    None => Cow::Borrowed(schema),
                }
            }
        }
    };
}

dedupe_rule!(RemoveDuplicateAllOf, all_of, "RemoveDuplicateAllOf");
dedupe_rule!(RemoveDuplicateAnyOf, any_of, "RemoveDuplicateAnyOf");
dedupe_rule!(RemoveDuplicateOneOf, one_of, "RemoveDuplicateOneOf");

pub(crate) struct RemoveDuplicateEnum;

impl ReductionRule for RemoveDuplicateEnum {
    fn name(&self) -> &'static str {
        "RemoveDuplicateEnum"
    }

    fn reduce<'a>(&self, schema: &'a Schema) -> Cow<'a, Schema> {
        let Some(members) = &schema.enum_values else {
            return Cow::Borrowed(schema);
        };
        let mut kept: Vec<Value> = Vec::with_capacity(members.len());
        for member in members {
            if !kept.iter().any(|seen| deep_equal(seen, member)) {
                kept.push(member.clone());
            }
        }
        if kept.len() == members.len() {
            return Cow::Borrowed(schema);
        }
        let mut reduced = schema.clone_deep();
        reduced.enum_values = Some(kept);
        Cow::Owned(reduced)
    }
}

/// `allOf` members that accept everything impose nothing.
pub(crate) struct RemoveEmptySchemaFromAllOf;

impl ReductionRule for RemoveEmptySchemaFromAllOf {
    fn name(&self) -> &'static str {
        "RemoveEmptySchemaFromAllOf"
    }

    fn reduce<'a>(&self, schema: &'a Schema) -> Cow<'a, Schema> {
        let Some(members) = &schema.all_of else {
            return Cow::Borrowed(schema);
        };
        let kept: Vec<&Schema> = members
            .iter()
            .filter(|member| !(member.is_empty() || member.valid == Some(true)))
            .collect();
        if kept.len() == members.len() {
            return Cow::Borrowed(schema);
        }
        let mut reduced = schema.clone_deep();
        reduced.all_of = if kept.is_empty() {
            None
        } else {
            Some(kept.into_iter().cloned().collect())
        };
        Cow::Owned(reduced)
    }
}

/// A `oneOf` holding the empty schema is vacuously satisfiable.
pub(crate) struct RemoveOneOfIfEmptySchemaAllowed;

impl ReductionRule for RemoveOneOfIfEmptySchemaAllowed {
    fn name(&self) -> &'static str {
        "RemoveOneOfIfEmptySchemaAllowed"
    }

    fn reduce<'a>(&self, schema: &'a Schema) -> Cow<'a, Schema> {
        let Some(members) = &schema.one_of else {
            return Cow::Borrowed(schema);
        };
        if !members.iter().any(Schema::is_empty) {
            return Cow::Borrowed(schema);
        }
        let mut reduced = schema.clone_deep();
        reduced.one_of = None;
        Cow::Owned(reduced)
    }
}

/// `enum` is redundant once `const` already pins the value.
pub(crate) struct RemoveEnumIfConst;

impl ReductionRule for RemoveEnumIfConst {
    fn name(&self) -> &'static str {
        "RemoveEnumIfConst"
    }

    fn reduce<'a>(&self, schema: &'a Schema) -> Cow<'a, Schema> {
        let (Some(const_value), Some(members)) = (&schema.const_value, &schema.enum_values) else {
            return Cow::Borrowed(schema);
        };
        if members.len() <= 1 || !members.iter().any(|member| deep_equal(member, const_value)) {
            return Cow::Borrowed(schema);
        }
        let mut reduced = schema.clone_deep();
        reduced.enum_values = None;
        Cow::Owned(reduced)
    }
}

/// Children that are nothing but an `allOf` wrapper flatten into the parent
/// list.
pub(crate) struct PromoteOnlyAllOfInAllOf;

impl ReductionRule for PromoteOnlyAllOfInAllOf {
    fn name(&self) -> &'static str {
        "PromoteOnlyAllOfInAllOf"
    }

    fn reduce<'a>(&self, schema: &'a Schema) -> Cow<'a, Schema> {
        let Some(members) = &schema.all_of else {
            return Cow::Borrowed(schema);
        };
        if !members.iter().any(|member| member.only_key("allOf")) {
            return Cow::Borrowed(schema);
        }
        let mut flattened = Vec::with_capacity(members.len());
        for member in members {
            if member.only_key("allOf") {
                flattened.extend(member.all_of.clone().unwrap_or_default());
            } else {
                flattened.push(member.clone());
            }
        }
        let mut reduced = schema.clone_deep();
        reduced.all_of = if flattened.is_empty() {
            None
        } else {
            Some(flattened)
        };
        Cow::Owned(reduced)
    }
}

/// A lone `allOf` child that only wraps a `oneOf` lifts it into the parent.
pub(crate) struct PromoteAllOfWithOneOfToOneOfIfOneOfIsEmpty;

impl ReductionRule for PromoteAllOfWithOneOfToOneOfIfOneOfIsEmpty {
    fn name(&self) -> &'static str {
        "PromoteAllOfWithOneOfToOneOfIfOneOfIsEmpty"
    }

    fn reduce<'a>(&self, schema: &'a Schema) -> Cow<'a, Schema> {
        if schema.one_of.is_some() {
            return Cow::Borrowed(schema);
        }
        let Some([only]) = schema.all_of.as_deref() else {
            return Cow::Borrowed(schema);
        };
        if !only.only_key("oneOf") {
            return Cow::Borrowed(schema);
        }
        let mut reduced = schema.clone_deep();
        reduced.one_of = only.one_of.clone();
        reduced.all_of = None;
        Cow::Owned(reduced)
    }
}

/// `allOf` members that restate the parent's exact `type` are redundant.
pub(crate) struct RemoveTypeOnlyAllOfIfParentIsSame;

impl ReductionRule for RemoveTypeOnlyAllOfIfParentIsSame {
    fn name(&self) -> &'static str {
        "RemoveTypeOnlyAllOfIfParentIsSame"
    }

    fn reduce<'a>(&self, schema: &'a Schema) -> Cow<'a, Schema> {
        let (Some(types), Some(members)) = (&schema.types, &schema.all_of) else {
            return Cow::Borrowed(schema);
        };
        let parent_type = Schema {
            types: Some(types.clone()),
            ..Schema::default()
        }
        .to_value();
        let redundant = |member: &Schema| {
            member.only_key("type") && deep_equal(&member.to_value(), &parent_type)
        };
        if !members.iter().any(redundant) {
            return Cow::Borrowed(schema);
        }
        let kept: Vec<Schema> = members
            .iter()
            .filter(|member| !redundant(member))
            .cloned()
            .collect();
        let mut reduced = schema.clone_deep();
        reduced.all_of = if kept.is_empty() { None } else { Some(kept) };
        Cow::Owned(reduced)
    }
}

/// The rule battery, in application order.
pub(crate) static RULES: &[&dyn ReductionRule] = &[
    &RemoveDuplicateAllOf,
    &RemoveDuplicateAnyOf,
    &RemoveDuplicateOneOf,
    &RemoveDuplicateEnum,
    &RemoveEmptySchemaFromAllOf,
    &RemoveOneOfIfEmptySchemaAllowed,
    &RemoveEnumIfConst,
    &PromoteOnlyAllOfInAllOf,
    &PromoteAllOfWithOneOfToOneOfIfOneOfIsEmpty,
    &RemoveTypeOnlyAllOfIfParentIsSame,
];
