// tests/integration_tests/idempotence_test.rs
use super::common::{read, setup_flutter_project};
use anyhow::Result;
use opacity_migrate::{Mode, RunOptions, migrate_tree};

#[test]
fn test_second_run_fixes_nothing() -> Result<()> {
    let temp_dir = setup_flutter_project()?;
    let dir = temp_dir.path();
    let options = RunOptions::new(dir.join("lib"), Mode::Write);

    let first = migrate_tree(&options);
    let after_first = read(dir, "lib/screens/home.dart")?;

    let second = migrate_tree(&options);

    assert_eq!(first.fixed_count(), 2);
    assert_eq!(second.fixed_count(), 0);
    assert_eq!(second.total_files(), 3);
    assert_eq!(read(dir, "lib/screens/home.dart")?, after_first);
    Ok(())
}
