#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use worktally::libs::storage::load_dataset;

    struct StorageTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for StorageTestContext {
        fn setup() -> Self {
            StorageTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn dataset_snapshot_loads_from_json(ctx: &mut StorageTestContext) {
        let path = ctx.temp_dir.path().join("snapshot.json");
        fs::write(
            &path,
            r#"{
                "customers": [{"id": "cust-a", "name": "Acme"}],
                "tasks": [{"id": "task-1", "name": "Design"}],
                "entries": [
                    {"id": "1", "customerId": "cust-a", "durationMinutes": "90", "createdAt": "2024-01-10T12:00:00Z"},
                    {"id": "2", "billable": false, "durationMinutes": 30, "createdAt": "2024-01-11T09:00:00Z"}
                ]
            }"#,
        )
        .unwrap();

        let dataset = load_dataset(&path).unwrap();

        assert_eq!(dataset.customers.len(), 1);
        assert_eq!(dataset.tasks.len(), 1);
        assert_eq!(dataset.entries.len(), 2);
        assert_eq!(dataset.entries[0].duration_minutes, Some(90.0));
        assert!(dataset.entries[0].billable);
        assert!(!dataset.entries[1].billable);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn empty_sections_default_when_omitted(ctx: &mut StorageTestContext) {
        let path = ctx.temp_dir.path().join("snapshot.json");
        fs::write(&path, r#"{"entries": []}"#).unwrap();

        let dataset = load_dataset(&path).unwrap();

        assert!(dataset.customers.is_empty());
        assert!(dataset.tasks.is_empty());
        assert!(dataset.entries.is_empty());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn missing_snapshot_is_an_error(ctx: &mut StorageTestContext) {
        let path = ctx.temp_dir.path().join("nope.json");

        let err = load_dataset(&path).unwrap_err();
        assert!(err.to_string().contains("nope.json"));
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn malformed_snapshot_is_an_error(ctx: &mut StorageTestContext) {
        let path = ctx.temp_dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();

        assert!(load_dataset(&path).is_err());
    }
}
