//! Offline validation of operation documents against a schema SDL.
//!
//! Covers the rules that break when the Hasura metadata drifts from the
//! documents: unknown root types, fields, arguments and input types, input
//! object fields named in literal filters, leaf and composite selection shape,
//! fragment bookkeeping and variable usage. Scalar coercion is left to the
//! server.

use std::collections::{HashMap, HashSet};
use std::fmt;

use async_graphql_parser::types::{
    BaseType, Directive, ExecutableDocument, FragmentDefinition, InputValueDefinition,
    OperationType, Selection, SelectionSet, Type, TypeKind, TypeSystemDefinition,
};
use async_graphql_parser::Positioned;
use async_graphql_value::Value;
use thiserror::Error;

use crate::documents::DocumentInfo;
use crate::operation::OperationKind;

/// Snapshot of the Hasura schema the documents are written against.
pub const BUNDLED_SCHEMA: &str = include_str!("../graphql/schema.graphql");

const BUILTIN_SCALARS: [&str; 5] = ["Int", "Float", "String", "Boolean", "ID"];

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("schema does not parse: {0}")]
    Parse(String),
}

/// One broken rule in one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub operation: String,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.operation, self.message)
    }
}

#[derive(Debug)]
enum TypeDef {
    Scalar,
    Enum,
    /// Field name to named type.
    InputObject(HashMap<String, String>),
    Object {
        fields: HashMap<String, FieldDef>,
        implements: Vec<String>,
    },
    Interface(HashMap<String, FieldDef>),
    Union(Vec<String>),
}

#[derive(Debug)]
struct FieldDef {
    /// Argument name to named type.
    arguments: HashMap<String, String>,
    ty: Type,
}

impl FieldDef {
    fn type_name(&self) -> &str {
        named_type(&self.ty.base)
    }
}

#[derive(Debug)]
pub struct Schema {
    query: Option<String>,
    mutation: Option<String>,
    subscription: Option<String>,
    types: HashMap<String, TypeDef>,
}

impl Schema {
    pub fn parse(sdl: &str) -> Result<Self, SchemaError> {
        let document =
            async_graphql_parser::parse_schema(sdl).map_err(|e| SchemaError::Parse(e.to_string()))?;

        let mut roots = None;
        let mut types = HashMap::new();
        for definition in document.definitions {
            match definition {
                TypeSystemDefinition::Schema(schema) => {
                    let schema = schema.node;
                    roots = Some((
                        schema.query.map(|n| n.node.to_string()),
                        schema.mutation.map(|n| n.node.to_string()),
                        schema.subscription.map(|n| n.node.to_string()),
                    ));
                }
                TypeSystemDefinition::Type(ty) => {
                    let ty = ty.node;
                    let def = match ty.kind {
                        TypeKind::Scalar => TypeDef::Scalar,
                        TypeKind::Enum(_) => TypeDef::Enum,
                        TypeKind::InputObject(input) => TypeDef::InputObject(input_types(&input.fields)),
                        TypeKind::Union(union) => TypeDef::Union(
                            union.members.iter().map(|m| m.node.to_string()).collect(),
                        ),
                        TypeKind::Object(object) => TypeDef::Object {
                            fields: field_defs(object.fields),
                            implements: object.implements.iter().map(|i| i.node.to_string()).collect(),
                        },
                        TypeKind::Interface(interface) => TypeDef::Interface(field_defs(interface.fields)),
                    };
                    types.insert(ty.name.node.to_string(), def);
                }
                TypeSystemDefinition::Directive(_) => {}
            }
        }

        // Without a schema block the conventional root names apply.
        let (query, mutation, subscription) = roots.unwrap_or_else(|| {
            let named = |name: &str| types.contains_key(name).then(|| name.to_string());
            (named("Query"), named("Mutation"), named("Subscription"))
        });

        Ok(Self {
            query,
            mutation,
            subscription,
            types,
        })
    }

    pub fn bundled() -> Result<Self, SchemaError> {
        Self::parse(BUNDLED_SCHEMA)
    }

    pub fn root(&self, kind: OperationKind) -> Option<&str> {
        match kind {
            OperationKind::Query => self.query.as_deref(),
            OperationKind::Mutation => self.mutation.as_deref(),
            OperationKind::Subscription => self.subscription.as_deref(),
        }
    }

    pub fn has_type(&self, name: &str) -> bool {
        self.types.contains_key(name) || BUILTIN_SCALARS.contains(&name)
    }

    fn is_input_type(&self, name: &str) -> bool {
        BUILTIN_SCALARS.contains(&name)
            || matches!(
                self.types.get(name),
                Some(TypeDef::Scalar | TypeDef::Enum | TypeDef::InputObject(_))
            )
    }

    fn is_composite(&self, name: &str) -> bool {
        matches!(
            self.types.get(name),
            Some(TypeDef::Object { .. } | TypeDef::Interface(_) | TypeDef::Union(_))
        )
    }

    fn fields(&self, name: &str) -> Option<&HashMap<String, FieldDef>> {
        match self.types.get(name) {
            Some(TypeDef::Object { fields, .. } | TypeDef::Interface(fields)) => Some(fields),
            _ => None,
        }
    }

    /// Object types a value of `name` can resolve to.
    fn possible_types<'a>(&'a self, name: &'a str) -> HashSet<&'a str> {
        match self.types.get(name) {
            Some(TypeDef::Object { .. }) => HashSet::from([name]),
            Some(TypeDef::Union(members)) => members.iter().map(String::as_str).collect(),
            Some(TypeDef::Interface(_)) => self
                .types
                .iter()
                .filter_map(|(object, def)| match def {
                    TypeDef::Object { implements, .. } if implements.iter().any(|i| i == name) => {
                        Some(object.as_str())
                    }
                    _ => None,
                })
                .collect(),
            _ => HashSet::new(),
        }
    }

    /// A fragment on `on` can be spread where `parent` is expected when the
    /// two share a possible object type.
    fn fragment_applies(&self, on: &str, parent: &str) -> bool {
        on == parent || !self.possible_types(on).is_disjoint(&self.possible_types(parent))
    }

    /// Walks a literal argument value and reports input object keys the
    /// schema does not define. Variables and scalars are not inspected.
    fn check_value(&self, ctx: &mut Context<'_>, location: &str, type_name: &str, value: &Value) {
        match value {
            Value::List(items) => {
                for item in items {
                    self.check_value(ctx, location, type_name, item);
                }
            }
            Value::Object(object) => {
                let Some(TypeDef::InputObject(fields)) = self.types.get(type_name) else {
                    return;
                };
                for (key, value) in object {
                    match fields.get(key.as_str()) {
                        Some(field_type) => self.check_value(ctx, location, field_type, value),
                        None => ctx.report(format!("{location}: input {type_name} has no field {key}")),
                    }
                }
            }
            _ => {}
        }
    }

    /// Checks every registered document.
    pub fn validate_all(&self, documents: &[DocumentInfo]) -> Vec<Violation> {
        documents.iter().flat_map(|doc| self.validate(doc)).collect()
    }

    pub fn validate(&self, info: &DocumentInfo) -> Vec<Violation> {
        let mut ctx = Context {
            operation: info.name,
            violations: Vec::new(),
            used_variables: HashSet::new(),
        };

        let document = match async_graphql_parser::parse_query(info.document) {
            Ok(document) => document,
            Err(err) => {
                ctx.report(format!("document does not parse: {err}"));
                return ctx.violations;
            }
        };

        self.check_document(&mut ctx, info, &document);
        ctx.violations
    }

    fn check_document(&self, ctx: &mut Context<'_>, info: &DocumentInfo, document: &ExecutableDocument) {
        let operations: Vec<_> = document.operations.iter().collect();
        let [(name, operation)] = operations.as_slice() else {
            ctx.report(format!("expected one operation, found {}", operations.len()));
            return;
        };
        let operation = &operation.node;
        directive_variables(&operation.directives, &mut ctx.used_variables);

        if name.map(|n| n.as_str()) != Some(info.name) {
            ctx.report(format!(
                "operation is named {:?}, registered as {}",
                name.map(|n| n.as_str()),
                info.name
            ));
        }
        let kind = match operation.ty {
            OperationType::Query => OperationKind::Query,
            OperationType::Mutation => OperationKind::Mutation,
            OperationType::Subscription => OperationKind::Subscription,
        };
        if kind != info.kind {
            ctx.report(format!("operation is a {kind}, registered as a {}", info.kind));
        }

        // Fragments reachable from the operation, following nested spreads.
        let mut used_fragments = HashSet::new();
        let mut pending = Vec::new();
        collect_spreads(&operation.selection_set.node, &mut pending);
        while let Some(fragment) = pending.pop() {
            if !used_fragments.insert(fragment.clone()) {
                continue;
            }
            match document.fragments.get(fragment.as_str()) {
                Some(definition) => collect_spreads(&definition.node.selection_set.node, &mut pending),
                None => ctx.report(format!("fragment {fragment} is not defined")),
            }
        }
        let mut defined: Vec<_> = document.fragments.keys().map(|n| n.as_str()).collect();
        defined.sort_unstable();
        for fragment in defined {
            if !used_fragments.contains(fragment) {
                ctx.report(format!("fragment {fragment} is defined but never used"));
            }
        }

        let mut declared = HashSet::new();
        for variable in &operation.variable_definitions {
            let variable = &variable.node;
            let type_name = named_type(&variable.var_type.node.base);
            if !self.is_input_type(type_name) {
                ctx.report(format!(
                    "variable ${} has non-input type {type_name}",
                    variable.name.node
                ));
            }
            declared.insert(variable.name.node.to_string());
        }

        match self.root(kind) {
            Some(root) if self.types.contains_key(root) => {
                let root = root.to_string();
                self.check_selection_set(ctx, document, &root, &operation.selection_set.node);
            }
            _ => {
                ctx.report(format!("schema has no {kind} root type"));
                return;
            }
        }

        for (name, fragment) in &document.fragments {
            self.check_fragment(ctx, document, name.as_str(), &fragment.node);
        }

        let mut undeclared: Vec<_> = ctx.used_variables.difference(&declared).cloned().collect();
        undeclared.sort();
        for variable in undeclared {
            ctx.report(format!("variable ${variable} is used but not declared"));
        }
        let mut unused: Vec<_> = declared.difference(&ctx.used_variables).cloned().collect();
        unused.sort();
        for variable in unused {
            ctx.report(format!("variable ${variable} is declared but never used"));
        }
    }

    fn check_fragment(
        &self,
        ctx: &mut Context<'_>,
        document: &ExecutableDocument,
        name: &str,
        fragment: &FragmentDefinition,
    ) {
        directive_variables(&fragment.directives, &mut ctx.used_variables);
        let on = fragment.type_condition.node.on.node.as_str();
        if !self.is_composite(on) {
            ctx.report(format!("fragment {name} is on unknown or leaf type {on}"));
            return;
        }
        self.check_selection_set(ctx, document, on, &fragment.selection_set.node);
    }

    fn check_selection_set(
        &self,
        ctx: &mut Context<'_>,
        document: &ExecutableDocument,
        parent: &str,
        selection_set: &SelectionSet,
    ) {
        for item in &selection_set.items {
            match &item.node {
                Selection::Field(field) => {
                    let field = &field.node;
                    for (_, value) in &field.arguments {
                        referenced_variables(&value.node, &mut ctx.used_variables);
                    }
                    directive_variables(&field.directives, &mut ctx.used_variables);

                    let name = field.name.node.as_str();
                    let has_selection = !field.selection_set.node.items.is_empty();
                    if name == "__typename" {
                        if has_selection {
                            ctx.report(format!("{parent}.__typename cannot have a selection"));
                        }
                        continue;
                    }

                    let Some(fields) = self.fields(parent) else {
                        ctx.report(format!("cannot select {name} on {parent}"));
                        continue;
                    };
                    let Some(def) = fields.get(name) else {
                        ctx.report(format!("field {parent}.{name} does not exist"));
                        continue;
                    };
                    for (argument, value) in &field.arguments {
                        match def.arguments.get(argument.node.as_str()) {
                            Some(argument_type) => {
                                let location = format!("field {parent}.{name} argument {}", argument.node);
                                self.check_value(ctx, &location, argument_type, &value.node);
                            }
                            None => ctx.report(format!(
                                "field {parent}.{name} has no argument {}",
                                argument.node
                            )),
                        }
                    }

                    match (self.is_composite(def.type_name()), has_selection) {
                        (true, true) => {
                            self.check_selection_set(ctx, document, def.type_name(), &field.selection_set.node)
                        }
                        (true, false) => ctx.report(format!(
                            "field {parent}.{name} of type {} needs a selection",
                            def.type_name()
                        )),
                        (false, true) => ctx.report(format!(
                            "leaf field {parent}.{name} cannot have a selection"
                        )),
                        (false, false) => {}
                    }
                }
                Selection::FragmentSpread(spread) => {
                    directive_variables(&spread.node.directives, &mut ctx.used_variables);
                    let fragment = spread.node.fragment_name.node.as_str();
                    // Undefined spreads are reported once at document level.
                    if let Some(definition) = document.fragments.get(fragment) {
                        let on = definition.node.type_condition.node.on.node.as_str();
                        if !self.fragment_applies(on, parent) {
                            ctx.report(format!("fragment {fragment} on {on} is spread inside {parent}"));
                        }
                    }
                }
                Selection::InlineFragment(inline) => {
                    let inline = &inline.node;
                    directive_variables(&inline.directives, &mut ctx.used_variables);
                    let on = inline
                        .type_condition
                        .as_ref()
                        .map(|c| c.node.on.node.as_str())
                        .unwrap_or(parent);
                    if !self.is_composite(on) {
                        ctx.report(format!("inline fragment on unknown or leaf type {on}"));
                        continue;
                    }
                    if !self.fragment_applies(on, parent) {
                        ctx.report(format!("inline fragment on {on} is inside {parent}"));
                        continue;
                    }
                    let on = on.to_string();
                    self.check_selection_set(ctx, document, &on, &inline.selection_set.node);
                }
            }
        }
    }
}

struct Context<'a> {
    operation: &'a str,
    violations: Vec<Violation>,
    used_variables: HashSet<String>,
}

impl Context<'_> {
    fn report(&mut self, message: String) {
        self.violations.push(Violation {
            operation: self.operation.to_string(),
            message,
        });
    }
}

fn field_defs(
    fields: Vec<Positioned<async_graphql_parser::types::FieldDefinition>>,
) -> HashMap<String, FieldDef> {
    fields
        .into_iter()
        .map(|field| {
            let field = field.node;
            let def = FieldDef {
                arguments: input_types(&field.arguments),
                ty: field.ty.node,
            };
            (field.name.node.to_string(), def)
        })
        .collect()
}

fn input_types(values: &[Positioned<InputValueDefinition>]) -> HashMap<String, String> {
    values
        .iter()
        .map(|value| {
            let value = &value.node;
            (value.name.node.to_string(), named_type(&value.ty.node.base).to_string())
        })
        .collect()
}

fn named_type(base: &BaseType) -> &str {
    match base {
        BaseType::Named(name) => name.as_str(),
        BaseType::List(inner) => named_type(&inner.base),
    }
}

fn collect_spreads(selection_set: &SelectionSet, out: &mut Vec<String>) {
    for item in &selection_set.items {
        match &item.node {
            Selection::Field(field) => collect_spreads(&field.node.selection_set.node, out),
            Selection::FragmentSpread(spread) => out.push(spread.node.fragment_name.node.to_string()),
            Selection::InlineFragment(inline) => collect_spreads(&inline.node.selection_set.node, out),
        }
    }
}

fn referenced_variables(value: &Value, out: &mut HashSet<String>) {
    match value {
        Value::Variable(name) => {
            out.insert(name.to_string());
        }
        Value::List(values) => values.iter().for_each(|value| referenced_variables(value, out)),
        Value::Object(fields) => fields.values().for_each(|value| referenced_variables(value, out)),
        _ => {}
    }
}

fn directive_variables(directives: &[Positioned<Directive>], out: &mut HashSet<String>) {
    for directive in directives {
        for (_, value) in &directive.node.arguments {
            referenced_variables(&value.node, out);
        }
    }
}

#[cfg(test)]
mod samples;
