//! Synthesis events and observers

use super::types::FieldType;

/// Something that happened while synthesizing declarations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthesisEvent<'a> {
    /// A new declaration is being built
    DeclarationStarted { name: &'a str, depth: usize },
    /// A field was added to a declaration
    FieldProcessed {
        declaration: &'a str,
        field: &'a str,
        key: &'a str,
        ty: &'a FieldType,
    },
    /// A nested shape mapped to an already registered name
    DeclarationReused { name: &'a str },
    /// The target cannot bind a field to this key; the field is emitted but
    /// does not round-trip
    KeyUnsupported {
        declaration: &'a str,
        field: &'a str,
        key: &'a str,
    },
}

/// Receives synthesis events
pub trait SynthesisObserver: Send + Sync {
    fn on_event(&self, event: &SynthesisEvent<'_>);
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SynthesisObserver for NoopObserver {
    fn on_event(&self, _event: &SynthesisEvent<'_>) {}
}

/// Forwards events to `tracing` at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SynthesisObserver for TracingObserver {
    fn on_event(&self, event: &SynthesisEvent<'_>) {
        match event {
            SynthesisEvent::DeclarationStarted { name, depth } => {
                tracing::debug!(declaration = %name, depth, "Generating declaration");
            }
            SynthesisEvent::FieldProcessed {
                declaration,
                field,
                key,
                ty,
            } => {
                tracing::debug!(
                    declaration = %declaration,
                    field = %field,
                    key = %key,
                    ty = %ty,
                    "Processed field"
                );
            }
            SynthesisEvent::DeclarationReused { name } => {
                tracing::debug!(declaration = %name, "Reusing registered declaration");
            }
            SynthesisEvent::KeyUnsupported {
                declaration,
                field,
                key,
            } => {
                tracing::warn!(
                    declaration = %declaration,
                    field = %field,
                    key = ?key,
                    "Key cannot be bound by the target, field will not round-trip"
                );
            }
        }
    }
}
