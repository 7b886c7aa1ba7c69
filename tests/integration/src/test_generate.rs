//! End-to-end generation tests.

#[cfg(test)]
mod tests {
    use awslist_core::Target;
    use awslist_core::generate::SUMMARY_FILE;

    use crate::{Fixture, read_files};

    #[test]
    fn test_should_resolve_devicefarm_project_end_to_end() {
        let fixture = Fixture::default();
        let generation = fixture.generate(Target::Go);

        assert_eq!(
            generation.list_functions["aws_devicefarm_project"],
            "DevicefarmProject"
        );
        let code = &generation.files["aws_devicefarm_project.go"];
        assert!(code.starts_with("// Code is generated. DO NOT EDIT.\n"));
        assert!(code.contains(
            "req := client.Devicefarmconn.ListProjectsRequest(&devicefarm.ListProjectsInput{})"
        ));
        assert!(code.contains("p := devicefarm.NewListProjectsPaginator(req)"));
        assert!(code.contains("for _, r := range resp.Projects {"));
        assert!(code.contains("ID:        *r.Name,"));
        assert!(!code.contains("tags"));
        assert!(!code.contains("CreatedAt"));
        assert!(!code.contains("OwnerId"));

        let info = &generation.resources["devicefarm"][0];
        assert_eq!(info.resource_type, "aws_devicefarm_project");
        assert!(!info.tags && !info.creation_time && !info.owner);
    }

    #[test]
    fn test_should_match_list_functions_for_lambda() {
        let fixture = Fixture::default();
        let generation = fixture.generate(Target::Rust);

        let code = &generation.files["aws_lambda_function.rs"];
        assert!(code.contains("pub async fn list_lambda_function(client: &Client)"));
        assert!(code.contains("        .lambda()\n        .list_functions()\n"));
        assert!(code.contains("for r in resp.functions() {"));
        assert!(code.contains("let id = r.function_name().unwrap_or_default().to_owned();"));

        let index = &generation.files["mod.rs"];
        assert!(index.contains("mod aws_lambda_function;"));
        assert!(index.contains("\"aws_lambda_function\" => list_lambda_function(client).await?,"));
    }

    #[test]
    fn test_should_report_failure_counters() {
        let fixture = Fixture::default();
        let generation = fixture.generate(Target::Rust);
        let report = &generation.report;

        assert_eq!(report.generated, 5);
        assert_eq!(report.counts.required_input_fields, 1);
        assert_eq!(report.counts.no_list_operation_candidate, 1);
        assert_eq!(report.counts.no_output_field, 0);
        assert_eq!(report.counts.no_resource_id, 0);

        let skipped: Vec<_> = report
            .skipped
            .iter()
            .map(|s| s.resource_type.as_str())
            .collect();
        assert_eq!(
            skipped,
            vec!["aws_devicefarm_run", "aws_devicefarm_upload", "aws_s3_bucket"]
        );

        let summary = report.to_string();
        assert!(summary.contains("list functions with required fields: 1"));
        assert!(summary.contains("resources without list operation candidate: 1"));
    }

    #[test]
    fn test_should_group_infos_by_service_in_order() {
        let fixture = Fixture::default();
        let generation = fixture.generate(Target::Rust);

        assert_eq!(
            generation.resources.keys().collect::<Vec<_>>(),
            vec!["cloudwatchlogs", "devicefarm", "ec2", "lambda"]
        );
        let ec2: Vec<_> = generation.resources["ec2"]
            .iter()
            .map(|i| i.resource_type.as_str())
            .collect();
        assert_eq!(ec2, vec!["aws_ami", "aws_ebs_volume"]);
    }

    #[test]
    fn test_should_write_files_and_summary() {
        let fixture = Fixture::default();
        let generation = fixture.generate(Target::Go);
        let out = fixture.out_dir("generated");
        generation.write_to(&out).unwrap();

        let files = read_files(&out);
        assert_eq!(
            files.keys().collect::<Vec<_>>(),
            vec![
                "aws_ami.go",
                "aws_cloudwatch_log_group.go",
                "aws_devicefarm_project.go",
                "aws_ebs_volume.go",
                "aws_lambda_function.go",
                SUMMARY_FILE,
            ]
        );

        let summary: serde_json::Value = serde_json::from_str(&files[SUMMARY_FILE]).unwrap();
        assert_eq!(summary["list_functions"]["aws_ami"], "Ami");
        assert_eq!(
            summary["resources"]["ec2"][1],
            serde_json::json!({
                "type": "aws_ebs_volume",
                "tags": false,
                "creation_time": true,
                "owner": false
            })
        );
    }

    #[test]
    fn test_should_produce_identical_output_across_runs() {
        let fixture = Fixture::default();
        let first_dir = fixture.out_dir("first");
        let second_dir = fixture.out_dir("second");

        let first = fixture.generate(Target::Rust);
        first.write_to(&first_dir).unwrap();
        let second = fixture.generate(Target::Rust);
        second.write_to(&second_dir).unwrap();

        assert_eq!(read_files(&first_dir), read_files(&second_dir));
        assert_eq!(first.resources, second.resources);
        assert_eq!(first.report.diagnostics, second.report.diagnostics);
    }

    #[test]
    fn test_should_load_latest_model_version() {
        let fixture = Fixture::default();
        let model = fixture.model();
        let lambda = model.service("lambda").unwrap();
        assert_eq!(lambda.api_version, "2015-03-31");
        assert!(lambda.operation("ListFunctions").unwrap().paginated);

        let operations = model.operations_with_prefixes(&["List"]);
        assert!(operations.contains(&"ListFunctions".to_owned()));
        assert!(!operations.contains(&"ListTags".to_owned()));
    }
}
