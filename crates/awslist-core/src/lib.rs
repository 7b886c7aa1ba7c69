//! Heuristic list-function generation for AWS resource types.
//!
//! For every resource type in a [`Catalog`], the engine infers from the API
//! model which operation lists its instances, which output member holds them,
//! which element member identifies an instance and whether tags, a creation
//! time or an owner filter are available. The resulting [`Resolution`]s are
//! rendered by an [`Emitter`] into one source file per resource type.
//!
//! ```text
//! catalog + model -> candidates -> output field -> resource id -> fragments -> emitter
//! ```

pub mod auxiliary;
pub mod candidates;
pub mod catalog;
pub mod config;
pub mod disambiguate;
pub mod emit;
pub mod error;
pub mod fragment;
pub mod generate;
pub mod naming;
pub mod output_field;
pub mod report;
pub mod resolve;
pub mod resource_id;


pub use catalog::{Catalog, InputValue, NAME_PLACEHOLDER};
pub use config::CodegenConfig;
pub use emit::{Emitter, GoEmitter, RustEmitter, Target};
pub use error::{CodegenError, CodegenResult, ResolveError};
pub use generate::{Generation, Generator};
pub use report::{FailureClass, GeneratedResourceInfo, GenerationReport};
pub use resolve::{Resolution, Resolver};
