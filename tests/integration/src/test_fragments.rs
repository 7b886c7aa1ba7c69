//! Tags, creation-time and owner fragments in generated code.

#[cfg(test)]
mod tests {
    use awslist_core::Target;
    use awslist_core::report::{DiagnosticKind, MemberScope};

    use crate::Fixture;

    #[test]
    fn test_should_parse_string_creation_time_with_millisecond_layout() {
        let fixture = Fixture::default();
        let generation = fixture.generate(Target::Go);
        let code = &generation.files["aws_ami.go"];

        assert!(code.contains("\t\"time\"\n"));
        assert!(code.contains(
            "t, err := time.Parse(\"2006-01-02T15:04:05.000Z0700\", *r.CreationDate)"
        ));
        assert!(code.contains("\t\t\treturn nil, err\n"));
        assert!(code.contains("CreatedAt: &t,"));
    }

    #[test]
    fn test_should_scale_epoch_millis_to_utc() {
        let fixture = Fixture::default();
        let go = fixture.generate(Target::Go);
        assert!(
            go.files["aws_cloudwatch_log_group.go"]
                .contains("t := time.Unix(0, *r.CreationTime * 1000000).UTC()")
        );

        let rust = fixture.generate(Target::Rust);
        let code = &rust.files["aws_cloudwatch_log_group.rs"];
        assert!(code.contains("use chrono::{TimeZone, Utc};"));
        assert!(code.contains(".map(|ms| Utc.timestamp_nanos(ms * 1_000_000));"));
        assert!(code.contains("let id = r.log_group_name().unwrap_or_default().to_owned();"));
    }

    #[test]
    fn test_should_pass_native_timestamps_through() {
        let fixture = Fixture::default();
        let generation = fixture.generate(Target::Go);
        let code = &generation.files["aws_ebs_volume.go"];
        assert!(code.contains("t := *r.CreateTime"));
        assert!(!code.contains("\"time\""));
    }

    #[test]
    fn test_should_filter_by_owner_and_copy_tags() {
        let fixture = Fixture::default();
        let generation = fixture.generate(Target::Go);
        let code = &generation.files["aws_ami.go"];

        assert!(code.contains("if *r.OwnerId != client.AccountID {\n\t\t\tcontinue\n\t\t}"));
        assert!(code.contains("for _, t := range r.Tags {"));
        assert!(code.contains("Tags:      tags,"));
        assert!(code.contains("&ec2.DescribeImagesInput{\n\t\tOwners: []string{\"self\"},\n\t})"));

        let info = &generation.resources["ec2"][0];
        assert!(info.tags && info.creation_time && info.owner);
    }

    #[test]
    fn test_should_report_near_misses_and_tag_mismatches() {
        let fixture = Fixture::default();
        let generation = fixture.generate(Target::Rust);
        let diagnostics = &generation.report.diagnostics;

        let near_misses: Vec<_> = diagnostics
            .iter()
            .filter_map(|d| match &d.kind {
                DiagnosticKind::NearMiss { scope, field, .. } => {
                    Some((d.resource_type.as_str(), *scope, field.as_str()))
                }
                _ => None,
            })
            .collect();
        assert_eq!(
            near_misses,
            vec![
                ("aws_ami", MemberScope::Output, "ImageOwnerAlias"),
                ("aws_ami", MemberScope::Input, "Owners"),
            ]
        );

        let mismatches: Vec<_> = diagnostics
            .iter()
            .filter(|d| matches!(d.kind, DiagnosticKind::TagMismatch { .. }))
            .map(|d| d.resource_type.as_str())
            .collect();
        assert_eq!(mismatches, vec!["aws_ebs_volume", "aws_lambda_function"]);

        let ebs = &generation.resources["ec2"][1];
        assert_eq!(ebs.resource_type, "aws_ebs_volume");
        assert!(!ebs.tags);
        assert!(generation.files["aws_ebs_volume.rs"].contains("tags"));

        let lambda = &generation.resources["lambda"][0];
        assert!(lambda.tags);
        assert!(!lambda.creation_time);
    }
}
