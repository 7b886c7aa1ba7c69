//! End-to-end tests for the awslist code generator.
//!
//! Each test writes a small botocore-style model directory and a catalog to a
//! temporary directory, runs the generator over them and inspects the
//! generated files.
//!
//! Run them with:
//! ```text
//! cargo test -p awslist-integration
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

use awslist_core::{Catalog, Generation, Generator, Target};
use awslist_model::ApiModel;
use serde_json::{Value, json};
use tempfile::TempDir;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Catalog used by most tests.
pub const CATALOG: &str = r#"
tagged = ["aws_ami", "aws_lambda_function"]

[services]
aws_ami = "ec2"
aws_cloudwatch_log_group = "cloudwatchlogs"
aws_devicefarm_project = "devicefarm"
aws_devicefarm_run = "devicefarm"
aws_devicefarm_upload = "devicefarm"
aws_ebs_volume = "ec2"
aws_lambda_function = "lambda"
aws_s3_bucket = "s3"

[resource_ids]
aws_ami = "ImageId"
aws_cloudwatch_log_group = "NAME_PLACEHOLDER"
aws_devicefarm_project = "NAME_PLACEHOLDER"
aws_devicefarm_run = "Arn"
aws_ebs_volume = "VolumeId"
aws_lambda_function = "NAME_PLACEHOLDER"
aws_s3_bucket = "Name"

[overrides.operations]
aws_ami = "DescribeImages"
aws_ebs_volume = "DescribeVolumes"

[overrides.inputs.aws_ami]
Owners = ["self"]
"#;

/// A model directory and catalog on disk.
#[derive(Debug)]
pub struct Fixture {
    dir: TempDir,
    /// Root of the model directory.
    pub models: PathBuf,
    /// Parsed catalog.
    pub catalog: Catalog,
}

impl Fixture {
    /// Write the fixture models and parse `catalog`.
    #[must_use]
    pub fn new(catalog: &str) -> Self {
        init_tracing();

        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let models = dir.path().join("models");
        write_service(&models, "devicefarm", "2015-06-23", &devicefarm(), &["ListProjects"]);
        write_service(&models, "lambda", "2015-03-31", &lambda(), &["ListFunctions"]);
        write_service(&models, "ec2", "2016-11-15", &ec2(), &["DescribeVolumes"]);
        write_service(&models, "logs", "2014-03-28", &logs(), &["DescribeLogGroups"]);
        // An outdated version that must lose against 2015-03-31.
        write_service(&models, "lambda", "2014-11-11", &lambda_outdated(), &[]);

        let catalog = Catalog::from_toml_str(catalog).expect("invalid catalog");
        Self {
            dir,
            models,
            catalog,
        }
    }

    /// Load the model directory.
    #[must_use]
    pub fn model(&self) -> ApiModel {
        ApiModel::load_dir(&self.models).expect("failed to load models")
    }

    /// Run the generator for `target`.
    #[must_use]
    pub fn generate(&self, target: Target) -> Generation {
        let model = self.model();
        let emitter = target.emitter();
        Generator::new(&model, &self.catalog, emitter.as_ref())
            .run()
            .expect("generation failed")
    }

    /// A fresh directory below the fixture root.
    #[must_use]
    pub fn out_dir(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new(CATALOG)
    }
}

/// Read every file below `dir`, keyed by file name.
#[must_use]
pub fn read_files(dir: &Path) -> BTreeMap<String, String> {
    let mut files = BTreeMap::new();
    for entry in fs::read_dir(dir).expect("failed to read output dir") {
        let entry = entry.expect("failed to read dir entry");
        let name = entry.file_name().to_string_lossy().into_owned();
        let content = fs::read_to_string(entry.path()).expect("failed to read file");
        files.insert(name, content);
    }
    files
}

fn write_service(root: &Path, name: &str, version: &str, api: &Value, paginated: &[&str]) {
    let dir = root.join(name).join(version);
    fs::create_dir_all(&dir).expect("failed to create model dir");
    fs::write(
        dir.join("api-2.json"),
        serde_json::to_string_pretty(api).expect("invalid api json"),
    )
    .expect("failed to write api-2.json");

    let pagination: serde_json::Map<String, Value> = paginated
        .iter()
        .map(|op| {
            (
                (*op).to_owned(),
                json!({"input_token": "NextToken", "output_token": "NextToken"}),
            )
        })
        .collect();
    fs::write(
        dir.join("paginators-1.json"),
        json!({ "pagination": pagination }).to_string(),
    )
    .expect("failed to write paginators-1.json");
}

fn devicefarm() -> Value {
    json!({
        "version": "2.0",
        "metadata": {
            "apiVersion": "2015-06-23",
            "endpointPrefix": "devicefarm",
            "protocol": "json",
            "serviceFullName": "AWS Device Farm",
            "serviceId": "Device Farm"
        },
        "operations": {
            "ListProjects": {
                "name": "ListProjects",
                "http": {"method": "POST", "requestUri": "/"},
                "input": {"shape": "ListProjectsRequest"},
                "output": {"shape": "ListProjectsResult"}
            },
            "GetProject": {
                "name": "GetProject",
                "input": {"shape": "GetProjectRequest"},
                "output": {"shape": "GetProjectResult"}
            },
            "ListRuns": {
                "name": "ListRuns",
                "input": {"shape": "ListRunsRequest"},
                "output": {"shape": "ListRunsResult"}
            }
        },
        "shapes": {
            "AmazonResourceName": {"type": "string", "max": 1011, "min": 32},
            "Name": {"type": "string", "max": 256, "min": 0},
            "PaginationToken": {"type": "string", "max": 1024, "min": 4},
            "DateTime": {"type": "timestamp"},
            "JobTimeoutMinutes": {"type": "integer"},
            "ListProjectsRequest": {
                "type": "structure",
                "members": {
                    "arn": {"shape": "AmazonResourceName"},
                    "nextToken": {"shape": "PaginationToken"}
                }
            },
            "ListProjectsResult": {
                "type": "structure",
                "members": {
                    "projects": {"shape": "Projects"},
                    "nextToken": {"shape": "PaginationToken"}
                }
            },
            "GetProjectRequest": {
                "type": "structure",
                "required": ["arn"],
                "members": {"arn": {"shape": "AmazonResourceName"}}
            },
            "GetProjectResult": {
                "type": "structure",
                "members": {"project": {"shape": "Project"}}
            },
            "ListRunsRequest": {
                "type": "structure",
                "required": ["arn"],
                "members": {
                    "arn": {"shape": "AmazonResourceName"},
                    "nextToken": {"shape": "PaginationToken"}
                }
            },
            "ListRunsResult": {
                "type": "structure",
                "members": {
                    "runs": {"shape": "Runs"},
                    "nextToken": {"shape": "PaginationToken"}
                }
            },
            "Projects": {"type": "list", "member": {"shape": "Project"}},
            "Runs": {"type": "list", "member": {"shape": "Run"}},
            "Project": {
                "type": "structure",
                "members": {
                    "arn": {"shape": "AmazonResourceName"},
                    "name": {"shape": "Name"},
                    "defaultJobTimeoutMinutes": {"shape": "JobTimeoutMinutes"},
                    "created": {"shape": "DateTime"}
                }
            },
            "Run": {
                "type": "structure",
                "members": {
                    "arn": {"shape": "AmazonResourceName"},
                    "name": {"shape": "Name"}
                }
            }
        }
    })
}

fn lambda() -> Value {
    json!({
        "version": "2.0",
        "metadata": {
            "apiVersion": "2015-03-31",
            "endpointPrefix": "lambda",
            "protocol": "rest-json",
            "serviceFullName": "AWS Lambda",
            "serviceId": "Lambda"
        },
        "operations": {
            "ListFunctions": {
                "name": "ListFunctions",
                "http": {
                    "method": "GET",
                    "requestUri": "/2015-03-31/functions/",
                    "responseCode": 200
                },
                "input": {"shape": "ListFunctionsRequest"},
                "output": {"shape": "ListFunctionsResponse"}
            },
            "GetFunction": {
                "name": "GetFunction",
                "input": {"shape": "GetFunctionRequest"},
                "output": {"shape": "GetFunctionResponse"}
            },
            "ListTags": {
                "name": "ListTags",
                "input": {"shape": "ListTagsRequest"},
                "output": {"shape": "ListTagsResponse"}
            }
        },
        "shapes": {
            "String": {"type": "string"},
            "FunctionName": {"type": "string"},
            "FunctionArn": {"type": "string"},
            "Timestamp": {"type": "string"},
            "MaxListItems": {"type": "integer", "max": 10000, "min": 1},
            "Tags": {"type": "map", "key": {"shape": "String"}, "value": {"shape": "String"}},
            "ListFunctionsRequest": {
                "type": "structure",
                "members": {
                    "Marker": {
                        "shape": "String",
                        "location": "querystring",
                        "locationName": "Marker"
                    },
                    "MaxItems": {
                        "shape": "MaxListItems",
                        "location": "querystring",
                        "locationName": "MaxItems"
                    }
                }
            },
            "ListFunctionsResponse": {
                "type": "structure",
                "members": {
                    "NextMarker": {"shape": "String"},
                    "Functions": {"shape": "FunctionList"}
                }
            },
            "GetFunctionRequest": {
                "type": "structure",
                "required": ["FunctionName"],
                "members": {"FunctionName": {"shape": "FunctionName"}}
            },
            "GetFunctionResponse": {
                "type": "structure",
                "members": {"Tags": {"shape": "Tags"}}
            },
            "ListTagsRequest": {
                "type": "structure",
                "required": ["Resource"],
                "members": {"Resource": {"shape": "FunctionArn"}}
            },
            "ListTagsResponse": {
                "type": "structure",
                "members": {"Tags": {"shape": "Tags"}}
            },
            "FunctionList": {"type": "list", "member": {"shape": "FunctionConfiguration"}},
            "FunctionConfiguration": {
                "type": "structure",
                "members": {
                    "FunctionName": {"shape": "FunctionName"},
                    "FunctionArn": {"shape": "FunctionArn"},
                    "LastModified": {"shape": "Timestamp"},
                    "Handler": {"shape": "String"}
                }
            }
        }
    })
}

fn lambda_outdated() -> Value {
    json!({
        "metadata": {"apiVersion": "2014-11-11", "serviceId": "Lambda"},
        "operations": {},
        "shapes": {}
    })
}

fn ec2() -> Value {
    json!({
        "version": "2.0",
        "metadata": {
            "apiVersion": "2016-11-15",
            "endpointPrefix": "ec2",
            "protocol": "ec2",
            "serviceAbbreviation": "Amazon EC2",
            "serviceFullName": "Amazon Elastic Compute Cloud",
            "serviceId": "EC2"
        },
        "operations": {
            "DescribeImages": {
                "name": "DescribeImages",
                "input": {"shape": "DescribeImagesRequest"},
                "output": {"shape": "DescribeImagesResult"}
            },
            "DescribeVolumes": {
                "name": "DescribeVolumes",
                "input": {"shape": "DescribeVolumesRequest"},
                "output": {"shape": "DescribeVolumesResult"}
            }
        },
        "shapes": {
            "String": {"type": "string"},
            "Integer": {"type": "integer"},
            "DateTime": {"type": "timestamp"},
            "OwnerStringList": {
                "type": "list",
                "member": {"shape": "String", "locationName": "Owner"}
            },
            "DescribeImagesRequest": {
                "type": "structure",
                "members": {
                    "Owners": {"shape": "OwnerStringList", "locationName": "Owner"},
                    "ExecutableUsers": {"shape": "OwnerStringList", "locationName": "ExecutableBy"}
                }
            },
            "DescribeImagesResult": {
                "type": "structure",
                "members": {
                    "Images": {"shape": "ImageList", "locationName": "imagesSet"}
                }
            },
            "ImageList": {"type": "list", "member": {"shape": "Image", "locationName": "item"}},
            "Image": {
                "type": "structure",
                "members": {
                    "ImageId": {"shape": "String", "locationName": "imageId"},
                    "CreationDate": {"shape": "String", "locationName": "creationDate"},
                    "OwnerId": {"shape": "String", "locationName": "imageOwnerId"},
                    "ImageOwnerAlias": {"shape": "String", "locationName": "imageOwnerAlias"},
                    "Tags": {"shape": "TagList", "locationName": "tagSet"}
                }
            },
            "DescribeVolumesRequest": {
                "type": "structure",
                "members": {
                    "MaxResults": {"shape": "Integer", "locationName": "maxResults"},
                    "NextToken": {"shape": "String", "locationName": "nextToken"}
                }
            },
            "DescribeVolumesResult": {
                "type": "structure",
                "members": {
                    "Volumes": {"shape": "VolumeList", "locationName": "volumeSet"},
                    "NextToken": {"shape": "String", "locationName": "nextToken"}
                }
            },
            "VolumeList": {"type": "list", "member": {"shape": "Volume", "locationName": "item"}},
            "Volume": {
                "type": "structure",
                "members": {
                    "VolumeId": {"shape": "String", "locationName": "volumeId"},
                    "CreateTime": {"shape": "DateTime", "locationName": "createTime"},
                    "Size": {"shape": "Integer", "locationName": "size"},
                    "Tags": {"shape": "TagList", "locationName": "tagSet"}
                }
            },
            "TagList": {"type": "list", "member": {"shape": "Tag", "locationName": "item"}},
            "Tag": {
                "type": "structure",
                "members": {
                    "Key": {"shape": "String", "locationName": "key"},
                    "Value": {"shape": "String", "locationName": "value"}
                }
            }
        }
    })
}

fn logs() -> Value {
    json!({
        "version": "2.0",
        "metadata": {
            "apiVersion": "2014-03-28",
            "endpointPrefix": "logs",
            "protocol": "json",
            "serviceFullName": "Amazon CloudWatch Logs",
            "serviceId": "CloudWatch Logs"
        },
        "operations": {
            "DescribeLogGroups": {
                "name": "DescribeLogGroups",
                "input": {"shape": "DescribeLogGroupsRequest"},
                "output": {"shape": "DescribeLogGroupsResponse"}
            }
        },
        "shapes": {
            "LogGroupName": {"type": "string", "max": 512, "min": 1},
            "Arn": {"type": "string"},
            "Timestamp": {"type": "long", "min": 0},
            "NextToken": {"type": "string", "min": 1},
            "DescribeLogGroupsRequest": {
                "type": "structure",
                "members": {
                    "logGroupNamePrefix": {"shape": "LogGroupName"},
                    "nextToken": {"shape": "NextToken"}
                }
            },
            "DescribeLogGroupsResponse": {
                "type": "structure",
                "members": {
                    "logGroups": {"shape": "LogGroups"},
                    "nextToken": {"shape": "NextToken"}
                }
            },
            "LogGroups": {"type": "list", "member": {"shape": "LogGroup"}},
            "LogGroup": {
                "type": "structure",
                "members": {
                    "logGroupName": {"shape": "LogGroupName"},
                    "creationTime": {"shape": "Timestamp"},
                    "arn": {"shape": "Arn"}
                }
            }
        }
    })
}

mod test_failures;
mod test_fragments;
mod test_generate;
