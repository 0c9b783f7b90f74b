//! Schema inference module
//!
//! Derives named struct declarations from a single JSON sample.
//!
//! # Features
//!
//! - **Type Mapping**: Maps JSON leaves to field types
//! - **Nested Objects**: One declaration per nested object, named after its field
//! - **Arrays of Objects**: Element declarations named `<Field>Item`, from the first element
//! - **Deterministic Order**: Source or lexical field order
//! - **Depth Guard**: Rejects input nested deeper than a configured limit

mod mapper;
pub mod naming;
mod observer;
mod registry;
mod synthesizer;
mod types;

pub use mapper::{kind_name, map_type};
pub use observer::{NoopObserver, SynthesisEvent, SynthesisObserver, TracingObserver};
pub use registry::Registry;
pub use synthesizer::{
    synthesize, SynthesisOptions, Synthesizer, DEFAULT_MAX_DEPTH, DEFAULT_ROOT_NAME,
};
pub use types::{Declaration, FieldDescriptor, FieldType};
