//! Struct synthesis from JSON values

use super::mapper::{kind_name, map_type};
use super::naming::{export_name, is_valid_type_name, with_suffix};
use super::observer::{NoopObserver, SynthesisEvent, SynthesisObserver};
use super::registry::Registry;
use super::types::{Declaration, FieldDescriptor, FieldType};
use crate::codegen::{generator_for, TargetGenerator};
use crate::error::{Error, Result};
use crate::types::{FieldNaming, FieldOrder, JsonObject, NumberPolicy, Target};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default name of the root declaration
pub const DEFAULT_ROOT_NAME: &str = "Data";

/// Default maximum object nesting depth
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Suffix for declarations derived from the first element of an array
const ARRAY_ITEM_SUFFIX: &str = "Item";

/// Options controlling how declarations are synthesized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisOptions {
    /// Name of the root declaration
    pub root_name: String,
    /// Deepest object nesting accepted (the root is depth 0)
    pub max_depth: usize,
    /// Field ordering policy
    pub field_order: FieldOrder,
    /// Number typing policy
    pub number_policy: NumberPolicy,
    /// Identifier naming policy
    pub field_naming: FieldNaming,
    /// Output language
    pub target: Target,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            root_name: DEFAULT_ROOT_NAME.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            field_order: FieldOrder::default(),
            number_policy: NumberPolicy::default(),
            field_naming: FieldNaming::default(),
            target: Target::default(),
        }
    }
}

impl SynthesisOptions {
    /// Set the root declaration name
    #[must_use]
    pub fn with_root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = name.into();
        self
    }

    /// Set maximum depth for nested objects
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the field ordering policy
    #[must_use]
    pub fn with_field_order(mut self, order: FieldOrder) -> Self {
        self.field_order = order;
        self
    }

    /// Set the number typing policy
    #[must_use]
    pub fn with_number_policy(mut self, policy: NumberPolicy) -> Self {
        self.number_policy = policy;
        self
    }

    /// Set the identifier naming policy
    #[must_use]
    pub fn with_field_naming(mut self, naming: FieldNaming) -> Self {
        self.field_naming = naming;
        self
    }

    /// Set the output language
    #[must_use]
    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }
}

/// Walks a JSON value and renders one declaration per object shape.
///
/// Nested types are named after the field that holds them (`address` ->
/// `Address`, `items: [{..}]` -> `ItemsItem`). Two identical shapes under
/// different keys yield two declarations; two different shapes deriving the
/// same name share the first one registered.
pub struct Synthesizer<'a> {
    options: &'a SynthesisOptions,
    generator: &'a dyn TargetGenerator,
    observer: &'a dyn SynthesisObserver,
    /// Declarations currently being built, outermost first
    in_progress: Vec<String>,
}

impl<'a> Synthesizer<'a> {
    /// Create a synthesizer rendering for `options.target`
    pub fn new(options: &'a SynthesisOptions, observer: &'a dyn SynthesisObserver) -> Self {
        Self {
            options,
            generator: generator_for(options.target),
            observer,
            in_progress: Vec::new(),
        }
    }

    /// Render the declaration for `value` under `name`.
    ///
    /// Nested declarations are added to `registry`; the returned text is the
    /// declaration of `value` itself and is not registered.
    pub fn synthesize(
        &mut self,
        value: &Value,
        name: &str,
        registry: &mut Registry,
    ) -> Result<String> {
        let Value::Object(map) = value else {
            return Err(Error::RootNotObject {
                found: kind_name(value),
            });
        };
        if !is_valid_type_name(name) {
            return Err(Error::invalid_type_name(name));
        }
        if self.generator.is_reserved(name) {
            return Err(Error::ReservedTypeName {
                name: name.to_string(),
                target: self.options.target,
            });
        }
        self.synthesize_object(map, name, 0, registry)
    }

    fn synthesize_object(
        &mut self,
        map: &JsonObject,
        name: &str,
        depth: usize,
        registry: &mut Registry,
    ) -> Result<String> {
        if depth > self.options.max_depth {
            return Err(Error::TooDeeplyNested {
                max_depth: self.options.max_depth,
            });
        }
        self.observer
            .on_event(&SynthesisEvent::DeclarationStarted { name, depth });

        self.in_progress.push(name.to_string());
        let declaration = self.build_declaration(map, name, depth, registry);
        self.in_progress.pop();

        Ok(self.generator.render(&declaration?))
    }

    fn build_declaration(
        &mut self,
        map: &JsonObject,
        name: &str,
        depth: usize,
        registry: &mut Registry,
    ) -> Result<Declaration> {
        let mut declaration = Declaration::new(name);

        for (key, value) in self.ordered_entries(map) {
            let base = export_name(key, self.options.field_naming);
            let ty = match value {
                Value::Object(nested) => {
                    FieldType::Named(self.nested(nested, base.clone(), depth, registry)?)
                }
                Value::Array(items) => match items.first() {
                    None => FieldType::array_of(FieldType::Any),
                    Some(Value::Object(first)) => {
                        let item_name = format!("{base}{ARRAY_ITEM_SUFFIX}");
                        let item = self.nested(first, item_name, depth, registry)?;
                        FieldType::array_of(FieldType::Named(item))
                    }
                    Some(first) => {
                        FieldType::array_of(map_type(first, self.options.number_policy))
                    }
                },
                scalar => map_type(scalar, self.options.number_policy),
            };

            let field_name = unique_field_name(&declaration, base);
            if !self.generator.supports_key(key) {
                self.observer.on_event(&SynthesisEvent::KeyUnsupported {
                    declaration: name,
                    field: &field_name,
                    key,
                });
            }
            self.observer.on_event(&SynthesisEvent::FieldProcessed {
                declaration: name,
                field: &field_name,
                key,
                ty: &ty,
            });
            declaration.push(FieldDescriptor::new(field_name, ty, key.as_str()));
        }

        Ok(declaration)
    }

    /// Register the declaration for a nested object and return its name
    fn nested(
        &mut self,
        map: &JsonObject,
        base_name: String,
        depth: usize,
        registry: &mut Registry,
    ) -> Result<String> {
        let type_name = self.available_name(base_name);
        if registry.contains(&type_name) {
            self.observer
                .on_event(&SynthesisEvent::DeclarationReused { name: &type_name });
            return Ok(type_name);
        }

        let text = self.synthesize_object(map, &type_name, depth + 1, registry)?;
        registry.insert(type_name.clone(), text);
        Ok(type_name)
    }

    /// Avoid names of declarations that are still open, e.g. a `data` field
    /// inside the `Data` root, and names the target reserves (`String`)
    fn available_name(&self, base: String) -> String {
        if !self.is_taken(&base) {
            return base;
        }
        let mut n = 2;
        loop {
            let candidate = with_suffix(&base, n);
            if !self.is_taken(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    fn is_taken(&self, name: &str) -> bool {
        self.in_progress.iter().any(|open| open == name) || self.generator.is_reserved(name)
    }

    fn ordered_entries<'v>(&self, map: &'v JsonObject) -> Vec<(&'v String, &'v Value)> {
        let mut entries: Vec<_> = map.iter().collect();
        if self.options.field_order == FieldOrder::Sorted {
            entries.sort_by(|a, b| a.0.cmp(b.0));
        }
        entries
    }
}

fn unique_field_name(declaration: &Declaration, base: String) -> String {
    if !declaration.has_field_name(&base) {
        return base;
    }
    let mut n = 2;
    loop {
        let candidate = with_suffix(&base, n);
        if !declaration.has_field_name(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Synthesize with default options (convenience function)
pub fn synthesize(value: &Value, name: &str, registry: &mut Registry) -> Result<String> {
    let options = SynthesisOptions::default();
    Synthesizer::new(&options, &NoopObserver).synthesize(value, name, registry)
}
