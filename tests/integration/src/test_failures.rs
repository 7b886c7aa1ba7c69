//! Recoverable and fatal failures.

#[cfg(test)]
mod tests {
    use std::fs;

    use awslist_core::{CodegenError, ResolveError, Target};

    use crate::{CATALOG, Fixture};

    #[test]
    fn test_should_abort_when_output_is_not_writable() {
        let fixture = Fixture::default();
        let generation = fixture.generate(Target::Go);
        let blocker = fixture.out_dir("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let err = generation.write_to(&blocker.join("out")).unwrap_err();
        assert!(matches!(err, CodegenError::Write { .. }));
    }

    #[test]
    fn test_should_skip_without_counting_unknown_services() {
        let fixture = Fixture::default();
        let generation = fixture.generate(Target::Rust);

        let s3 = generation
            .report
            .skipped
            .iter()
            .find(|s| s.resource_type == "aws_s3_bucket")
            .unwrap();
        assert_eq!(s3.error, ResolveError::UnknownService("s3".to_owned()));
        assert_eq!(generation.report.counts.total(), 2);
    }

    #[test]
    fn test_should_count_missing_resource_ids() {
        let catalog = CATALOG.replace("aws_ebs_volume = \"VolumeId\"\n", "");
        let fixture = Fixture::new(&catalog);
        let generation = fixture.generate(Target::Rust);

        assert_eq!(generation.report.counts.no_resource_id, 1);
        assert!(!generation.files.contains_key("aws_ebs_volume.rs"));
    }

    #[test]
    fn test_should_fail_on_missing_model_directory() {
        let fixture = Fixture::default();
        let missing = fixture.out_dir("no-models");
        assert!(awslist_model::ApiModel::load_dir(&missing).is_err());
    }
}
