//! Discovery and loading of service definitions from a model directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::definition::{PaginatorsDefinition, ServiceDefinition};
use crate::error::{ModelError, ModelResult};
use crate::service::Service;

/// File names recognized as service definitions.
const DEFINITION_FILES: &[&str] = &["api-2.json", "service-2.json"];

/// File name of the paginator definitions next to a service definition.
const PAGINATORS_FILE: &str = "paginators-1.json";

/// The complete metadata model: every loaded service keyed by package name.
#[derive(Debug, Clone, Default)]
pub struct ApiModel {
    services: BTreeMap<String, Service>,
}

impl ApiModel {
    /// Build a model from already loaded services.
    pub fn new(services: impl IntoIterator<Item = Service>) -> ModelResult<Self> {
        let mut map = BTreeMap::new();
        for service in services {
            let name = service.package_name.clone();
            if map.insert(name.clone(), service).is_some() {
                return Err(ModelError::DuplicateService(name));
            }
        }
        Ok(Self { services: map })
    }

    /// Load every service definition below `root`.
    ///
    /// Accepts both `<root>/<service>/<version>/api-2.json` and
    /// `<root>/<service>/api-2.json`. When a service directory holds several
    /// versions, the lexicographically greatest one is loaded.
    pub fn load_dir(root: &Path) -> ModelResult<Self> {
        let mut latest: BTreeMap<PathBuf, PathBuf> = BTreeMap::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let is_definition = entry
                .file_name()
                .to_str()
                .is_some_and(|name| DEFINITION_FILES.contains(&name));
            if !is_definition {
                continue;
            }

            let path = entry.into_path();
            let Some(key) = service_dir(&path) else {
                continue;
            };
            if latest.get(&key).is_none_or(|existing| existing < &path) {
                latest.insert(key, path);
            }
        }

        let mut services = Vec::with_capacity(latest.len());
        for path in latest.values() {
            let service = load_service(path)?;
            tracing::debug!(
                service = %service.package_name,
                version = %service.api_version,
                path = %path.display(),
                "loaded service definition"
            );
            services.push(service);
        }

        tracing::info!(services = services.len(), root = %root.display(), "loaded API model");
        Self::new(services)
    }

    /// Look up a service by package name.
    #[must_use]
    pub fn service(&self, package_name: &str) -> Option<&Service> {
        self.services.get(package_name)
    }

    /// All services in package-name order.
    pub fn services(&self) -> impl Iterator<Item = &Service> {
        self.services.values()
    }

    /// Number of loaded services.
    #[must_use]
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether no service is loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Names of every operation starting with one of `prefixes`, across all
    /// services, skipping tag operations (`ListTagsForResource`, ...).
    #[must_use]
    pub fn operations_with_prefixes(&self, prefixes: &[&str]) -> Vec<String> {
        let mut result = Vec::new();
        for service in self.services() {
            for op in service.operations() {
                let name = &op.exported_name;
                if name.contains("Tags") {
                    continue;
                }
                if prefixes.iter().any(|p| name.starts_with(p)) {
                    result.push(name.clone());
                }
            }
        }
        result
    }
}

/// The directory identifying the service a definition file belongs to.
///
/// Version directories (`2015-06-23`) start with a digit; their parent is the
/// service directory.
fn service_dir(path: &Path) -> Option<PathBuf> {
    let parent = path.parent()?;
    let is_version = parent
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.chars().next())
        .is_some_and(|c| c.is_ascii_digit());
    if is_version {
        parent.parent().map(Path::to_path_buf)
    } else {
        Some(parent.to_path_buf())
    }
}

/// Load one service definition and its sibling paginators, if any.
fn load_service(path: &Path) -> ModelResult<Service> {
    let def: ServiceDefinition = read_json(path)?;

    let paginators_path = path.with_file_name(PAGINATORS_FILE);
    let paginators: PaginatorsDefinition = if paginators_path.is_file() {
        read_json(&paginators_path)?
    } else {
        PaginatorsDefinition::default()
    };

    Ok(Service::from_definition(def, &paginators))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> ModelResult<T> {
    let content = fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ModelError::Json {
        path: path.to_path_buf(),
        source,
    })
}
