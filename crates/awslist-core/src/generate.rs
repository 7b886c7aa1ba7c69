//! The generation run: resolve every catalogued resource type and render
//! the results.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use awslist_model::ApiModel;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::emit::Emitter;
use crate::error::{CodegenError, CodegenResult, ResolveError};
use crate::report::{GeneratedResourceInfo, GenerationReport};
use crate::resolve::Resolver;

/// File name of the machine-readable summary.
pub const SUMMARY_FILE: &str = "resources.json";

/// Drives resolution and rendering over a whole catalog.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    model: &'a ApiModel,
    catalog: &'a Catalog,
    emitter: &'a dyn Emitter,
}

/// The outcome of a generation run. Nothing has been written yet.
#[derive(Debug, Clone, Default)]
pub struct Generation {
    /// Resource type -> list-function name.
    pub list_functions: BTreeMap<String, String>,
    /// Service -> generated resource infos, sorted by resource type.
    pub resources: BTreeMap<String, Vec<GeneratedResourceInfo>>,
    /// Relative path -> file content.
    pub files: BTreeMap<String, String>,
    /// Counters, skips and diagnostics.
    pub report: GenerationReport,
}

#[derive(Serialize)]
struct Summary<'a> {
    list_functions: &'a BTreeMap<String, String>,
    resources: &'a BTreeMap<String, Vec<GeneratedResourceInfo>>,
}

impl<'a> Generator<'a> {
    /// Create a generator.
    #[must_use]
    pub fn new(model: &'a ApiModel, catalog: &'a Catalog, emitter: &'a dyn Emitter) -> Self {
        Self {
            model,
            catalog,
            emitter,
        }
    }

    /// Resolve and render every resource type of every covered service.
    ///
    /// Services and resource types are processed in sorted order, so two runs
    /// over the same inputs produce identical results. Per-resource-type
    /// failures are logged and reported; only rendering errors abort.
    pub fn run(&self) -> CodegenResult<Generation> {
        let resolver = Resolver::new(self.model, self.catalog);
        let mut generation = Generation::default();
        let mut resolutions = Vec::new();

        for service in self.catalog.covered_services() {
            tracing::info!(service = %service, "generating list functions");
            let mut infos = Vec::new();

            for resource_type in self.catalog.resource_types_of(service) {
                if self.catalog.is_excluded(resource_type) {
                    tracing::info!(resource = %resource_type, "exclude");
                    generation.report.excluded.push(resource_type.to_owned());
                    continue;
                }

                match resolver.resolve(resource_type, &mut generation.report.diagnostics) {
                    Ok(resolution) => {
                        let content = self.emitter.render(&resolution).map_err(|source| {
                            CodegenError::Render {
                                resource_type: resource_type.to_owned(),
                                source,
                            }
                        })?;
                        tracing::debug!(
                            resource = %resource_type,
                            operation = %resolution.operation,
                            output_field = %resolution.output_field,
                            resource_id = %resolution.resource_id.field,
                            "resolved list function"
                        );
                        generation
                            .files
                            .insert(self.emitter.file_name(resource_type), content);
                        generation.list_functions.insert(
                            resource_type.to_owned(),
                            resolution.function_name.clone(),
                        );
                        infos.push(resolution.info.clone());
                        resolutions.push(resolution);
                    }
                    Err(err) => {
                        log_skip(resource_type, &err);
                        generation.report.skip(resource_type, service, err);
                    }
                }
            }

            if !infos.is_empty() {
                infos.sort();
                generation.resources.insert(service.to_owned(), infos);
            }
        }

        resolutions.sort_by(|a, b| a.resource_type.cmp(&b.resource_type));
        let index = self
            .emitter
            .render_index(&resolutions)
            .map_err(|source| CodegenError::Render {
                resource_type: "index".to_owned(),
                source,
            })?;
        if let Some((path, content)) = index {
            generation.files.insert(path, content);
        }

        let summary = Summary {
            list_functions: &generation.list_functions,
            resources: &generation.resources,
        };
        let mut json = serde_json::to_string_pretty(&summary)?;
        json.push('\n');
        generation.files.insert(SUMMARY_FILE.to_owned(), json);

        generation.report.generated = generation.list_functions.len();
        let counts = &generation.report.counts;
        tracing::info!(
            count = counts.required_input_fields,
            "list functions with required fields"
        );
        tracing::info!(count = counts.no_output_field, "unable to find output field name");
        tracing::info!(
            count = counts.no_list_operation_candidate,
            "resources without list operation candidate"
        );
        tracing::info!(count = counts.no_resource_id, "no resource ID found");

        Ok(generation)
    }
}

fn log_skip(resource_type: &str, err: &ResolveError) {
    match err {
        ResolveError::StringOutputField { .. } => {
            tracing::info!(
                resource = %resource_type,
                error = %err,
                "found output field of type string"
            );
        }
        ResolveError::AmbiguousResourceId(_) => {
            tracing::warn!(resource = %resource_type, error = %err, "skipped");
        }
        _ => tracing::error!(resource = %resource_type, error = %err, "skipped"),
    }
}

impl Generation {
    /// Write every generated file below `dir`, creating directories as needed.
    ///
    /// The first failure aborts the write.
    pub fn write_to(&self, dir: &Path) -> CodegenResult<()> {
        for (rel_path, content) in &self.files {
            let full_path = dir.join(rel_path);
            ensure_parent_dir(&full_path)?;
            fs::write(&full_path, content).map_err(|source| CodegenError::Write {
                path: full_path.clone(),
                source,
            })?;
            tracing::debug!(path = %full_path.display(), "wrote");
        }
        tracing::info!(files = self.files.len(), dir = %dir.display(), "code generation complete");
        Ok(())
    }
}

/// Ensure the parent directory of a path exists.
fn ensure_parent_dir(path: &Path) -> CodegenResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| CodegenError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
