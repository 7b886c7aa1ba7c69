//! Per-resource-type resolution.
//!
//! A [`Resolution`] is a pure function of the API model, the catalog and the
//! resource type. It carries everything an emitter needs and never refers
//! back into the model.

use std::collections::BTreeMap;

use awslist_model::{ApiModel, Operation, Service};

use crate::auxiliary::{
    creation_time_fragment, near_misses, owner_filter_fragment, tags_fragment,
};
use crate::candidates::find_candidates;
use crate::catalog::{Catalog, InputValue};
use crate::error::ResolveError;
use crate::fragment::{CreationTimeFragment, OwnerFilterFragment, TagsFragment};
use crate::naming::list_function_name;
use crate::output_field::{ElementKind, OutputField, resolve_output_field};
use crate::report::{Diagnostic, DiagnosticKind, GeneratedResourceInfo};
use crate::resource_id::{ResourceId, resolve_resource_id};

/// Everything inferred for one resource type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Resource type (e.g., `aws_devicefarm_project`).
    pub resource_type: String,
    /// Service package name (e.g., `devicefarm`).
    pub service: String,
    /// List-function name without verb (e.g., `DevicefarmProject`).
    pub function_name: String,
    /// Exported name of the list operation.
    pub operation: String,
    /// Output member holding the instances.
    pub output_field: String,
    /// Whether the operation is paginated.
    pub paginated: bool,
    /// Identifier member of each instance.
    pub resource_id: ResourceId,
    /// Tags extraction.
    pub tags: Option<TagsFragment>,
    /// Creation-time extraction.
    pub creation_time: Option<CreationTimeFragment>,
    /// Owner filter.
    pub owner: Option<OwnerFilterFragment>,
    /// Fixed input parameters of the call.
    pub inputs: BTreeMap<String, InputValue>,
    /// Flags summarizing what is generated.
    pub info: GeneratedResourceInfo,
}

/// Resolves resource types against an API model and a catalog.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    model: &'a ApiModel,
    catalog: &'a Catalog,
}

impl<'a> Resolver<'a> {
    /// Create a resolver.
    #[must_use]
    pub fn new(model: &'a ApiModel, catalog: &'a Catalog) -> Self {
        Self { model, catalog }
    }

    /// Resolve one resource type.
    ///
    /// Non-fatal findings are appended to `diagnostics`, also when resolution
    /// fails after they were found.
    pub fn resolve(
        &self,
        resource_type: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<Resolution, ResolveError> {
        let service_name = self
            .catalog
            .service_of(resource_type)
            .ok_or(ResolveError::UnmappedResourceType)?;
        let Some(service) = self.model.service(service_name) else {
            diagnostics.push(Diagnostic {
                resource_type: resource_type.to_owned(),
                kind: DiagnosticKind::UnknownService {
                    service: service_name.to_owned(),
                },
            });
            return Err(ResolveError::UnknownService(service_name.to_owned()));
        };

        let candidates = find_candidates(resource_type, service, self.catalog)?;
        let found = self.output_field(resource_type, service, &candidates)?;
        let operation = found.operation;

        let input = service.input_shape(operation);
        if let Some(input) = input
            && !input.required.is_empty()
        {
            return Err(ResolveError::RequiredInputFields(input.required.clone()));
        }

        let element = service.list_element(found.field.shape);
        let resource_id = resolve_resource_id(resource_type, service, element, self.catalog)?;

        let (tags, creation_time, owner) = match element {
            Some(element) => {
                diagnostics.extend(near_misses(resource_type, service, element, input));
                (
                    tags_fragment(service, element),
                    creation_time_fragment(resource_type, service, element, diagnostics),
                    owner_filter_fragment(service, element),
                )
            }
            None => (None, None, None),
        };

        let known_tagged = self.catalog.is_tagged(resource_type);
        if known_tagged != tags.is_some() {
            diagnostics.push(Diagnostic {
                resource_type: resource_type.to_owned(),
                kind: DiagnosticKind::TagMismatch {
                    known_tagged,
                    synthesized: tags.is_some(),
                },
            });
        }

        let info = GeneratedResourceInfo {
            resource_type: resource_type.to_owned(),
            tags: known_tagged,
            creation_time: creation_time.is_some(),
            owner: owner.is_some(),
        };

        Ok(Resolution {
            resource_type: resource_type.to_owned(),
            service: service.package_name.clone(),
            function_name: list_function_name(resource_type, &self.catalog.prefix),
            operation: operation.exported_name.clone(),
            output_field: found.field.name.to_owned(),
            paginated: operation.paginated,
            resource_id,
            tags,
            creation_time,
            owner,
            inputs: self.catalog.inputs_of(resource_type),
            info,
        })
    }

    /// Structure pass, then string pass. A string-pass success is reported as
    /// [`ResolveError::StringOutputField`].
    fn output_field(
        &self,
        resource_type: &str,
        service: &'a Service,
        candidates: &[&'a Operation],
    ) -> Result<OutputField<'a>, ResolveError> {
        let err = match resolve_output_field(
            resource_type,
            service,
            candidates,
            ElementKind::Structure,
            self.catalog,
        ) {
            Ok(found) => return Ok(found),
            Err(err) => err,
        };

        match resolve_output_field(
            resource_type,
            service,
            candidates,
            ElementKind::String,
            self.catalog,
        ) {
            Ok(found) => Err(ResolveError::StringOutputField {
                operation: found.operation.exported_name.clone(),
                field: found.field.name.to_owned(),
            }),
            Err(_) => Err(err),
        }
    }
}
