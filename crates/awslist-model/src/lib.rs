//! Read-only AWS API metadata graph.
//!
//! This crate loads botocore-style service definitions (`api-2.json` /
//! `service-2.json`, plus an optional `paginators-1.json`) into an immutable
//! graph of services, operations and shapes. Nothing in the graph is mutable
//! after loading, so it can be shared freely between resolutions.

mod definition;
mod error;
mod loader;
mod service;
mod shape;

pub use definition::{
    OperationDefinition, PaginatorsDefinition, ServiceDefinition, ServiceMetadata,
    ShapeDefinition, ShapeTarget,
};
pub use error::{ModelError, ModelResult};
pub use loader::ApiModel;
pub use service::{Operation, Service};
pub use shape::{Shape, ShapeRef, ShapeType, exportable_name};
