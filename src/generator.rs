//! Request-level code generation
//!
//! Wraps one synthesis run: fresh registry, root declaration, assembled text.

use crate::codegen::generator_for;
use crate::error::Result;
use crate::schema::{Registry, SynthesisObserver, SynthesisOptions, Synthesizer, TracingObserver};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Generated declarations plus the input they were generated from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedOutput {
    /// Every nested declaration followed by the root declaration
    pub struct_code: String,
    /// The decoded input, echoed back
    pub data: Value,
}

/// Generates declarations for JSON documents
#[derive(Clone)]
pub struct Generator {
    options: SynthesisOptions,
    observer: Arc<dyn SynthesisObserver>,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(SynthesisOptions::default())
    }
}

impl Generator {
    /// Create a generator that reports to `tracing`
    pub fn new(options: SynthesisOptions) -> Self {
        Self {
            options,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Replace the observer
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn SynthesisObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Generate the declaration text for `value`
    pub fn generate_code(&self, value: &Value) -> Result<String> {
        let mut registry = Registry::new();
        let root = Synthesizer::new(&self.options, self.observer.as_ref()).synthesize(
            value,
            &self.options.root_name,
            &mut registry,
        )?;

        tracing::debug!(
            root = %self.options.root_name,
            nested = registry.len(),
            "Generated declarations"
        );
        let code = registry.assemble(&root);
        Ok(match generator_for(self.options.target).preamble() {
            Some(preamble) => format!("{preamble}\n{code}"),
            None => code,
        })
    }

    /// Generate declarations and bundle them with the input
    pub fn generate(&self, value: Value) -> Result<GeneratedOutput> {
        let struct_code = self.generate_code(&value)?;
        Ok(GeneratedOutput {
            struct_code,
            data: value,
        })
    }
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
