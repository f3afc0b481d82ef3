/// Integration tests for the export use case against a real file system
mod test_utilities;

use freeze_export::prelude::*;
use std::fs;
use tempfile::TempDir;
use test_utilities::mocks::*;

const FREEZE_OUTPUT: &str = "requests==2.31.0\nnumpy==1.26.0\n";

fn use_case_on(
    date: &str,
    output: &str,
) -> ExportPackagesUseCase<MockClock, MockPackageLister, FileSystemWriter, MockProgressReporter> {
    ExportPackagesUseCase::new(
        MockClock::on(date),
        MockPackageLister::new(output),
        FileSystemWriter::new(),
        MockProgressReporter::new(),
    )
}

#[test]
fn test_export_happy_path() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("exports");

    let use_case = use_case_on("2024-03-15", FREEZE_OUTPUT);
    let request = ExportRequest::new(output_dir.clone(), None, false);
    let response = use_case.execute(request).unwrap();

    let expected = output_dir.join("python_packages_2024-03-15.txt");
    assert_eq!(response.file_path, expected);
    assert_eq!(fs::read_to_string(&expected).unwrap(), FREEZE_OUTPUT);
    assert_eq!(response.package_count, 2);
    assert_eq!(response.bytes_written, FREEZE_OUTPUT.len());
}

#[test]
fn test_missing_directory_is_created_with_exactly_one_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("nested").join("exports");
    assert!(!output_dir.exists());

    let use_case = use_case_on("2024-03-15", FREEZE_OUTPUT);
    let response = use_case
        .execute(ExportRequest::new(output_dir.clone(), None, false))
        .unwrap();

    assert!(response.directory_created);
    assert!(output_dir.is_dir());
    let entries: Vec<_> = fs::read_dir(&output_dir).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_existing_directory_contents_are_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().to_path_buf();
    fs::write(output_dir.join("notes.md"), "keep me").unwrap();
    fs::write(
        output_dir.join("python_packages_2024-03-14.txt"),
        "old==1.0\n",
    )
    .unwrap();

    let use_case = use_case_on("2024-03-15", FREEZE_OUTPUT);
    let first = use_case
        .execute(ExportRequest::new(output_dir.clone(), None, false))
        .unwrap();
    let second = use_case
        .execute(ExportRequest::new(output_dir.clone(), None, false))
        .unwrap();

    assert!(!first.directory_created);
    assert!(!second.directory_created);
    assert_eq!(
        fs::read_to_string(output_dir.join("notes.md")).unwrap(),
        "keep me"
    );
    assert_eq!(
        fs::read_to_string(output_dir.join("python_packages_2024-03-14.txt")).unwrap(),
        "old==1.0\n"
    );
    assert_eq!(fs::read_dir(&output_dir).unwrap().count(), 3);
}

#[test]
fn test_same_day_export_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().to_path_buf();
    let target = output_dir.join("python_packages_2024-03-15.txt");

    use_case_on("2024-03-15", "a==1.0\nb==2.0\nc==3.0\n")
        .execute(ExportRequest::new(output_dir.clone(), None, false))
        .unwrap();
    use_case_on("2024-03-15", "a==1.1\n")
        .execute(ExportRequest::new(output_dir.clone(), None, false))
        .unwrap();

    assert_eq!(fs::read_to_string(&target).unwrap(), "a==1.1\n");
    assert_eq!(fs::read_dir(&output_dir).unwrap().count(), 1);
}

#[test]
fn test_different_days_produce_separate_files() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().to_path_buf();

    use_case_on("2024-03-15", "a==1.0\n")
        .execute(ExportRequest::new(output_dir.clone(), None, false))
        .unwrap();
    use_case_on("2024-03-16", "a==1.1\n")
        .execute(ExportRequest::new(output_dir.clone(), None, false))
        .unwrap();

    assert_eq!(
        fs::read_to_string(output_dir.join("python_packages_2024-03-15.txt")).unwrap(),
        "a==1.0\n"
    );
    assert_eq!(
        fs::read_to_string(output_dir.join("python_packages_2024-03-16.txt")).unwrap(),
        "a==1.1\n"
    );
}

#[test]
fn test_date_override_wins_over_clock() {
    let temp_dir = TempDir::new().unwrap();

    let use_case = use_case_on("2024-03-15", FREEZE_OUTPUT);
    let request = ExportRequest::new(
        temp_dir.path().to_path_buf(),
        Some(ExportDate::parse("2023-12-31").unwrap()),
        false,
    );
    use_case.execute(request).unwrap();

    assert!(temp_dir
        .path()
        .join("python_packages_2023-12-31.txt")
        .exists());
    assert!(!temp_dir
        .path()
        .join("python_packages_2024-03-15.txt")
        .exists());
}

#[test]
fn test_failed_freeze_writes_no_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("exports");
    let reporter = MockProgressReporter::new();

    let use_case = ExportPackagesUseCase::new(
        MockClock::on("2024-03-15"),
        MockPackageLister::with_failure(),
        FileSystemWriter::new(),
        reporter.clone(),
    );
    let result = use_case.execute(ExportRequest::new(output_dir.clone(), None, false));

    assert!(result.is_err());
    let err = result.unwrap_err().to_string();
    assert!(err.contains("Mock freeze failure"));
    // The directory step runs first, the file step never does
    assert!(output_dir.is_dir());
    assert_eq!(fs::read_dir(&output_dir).unwrap().count(), 0);
    assert!(!reporter
        .get_messages()
        .iter()
        .any(|m| m.starts_with("Completed:")));
}

#[test]
fn test_dry_run_creates_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("exports");
    let reporter = MockProgressReporter::new();

    let use_case = ExportPackagesUseCase::new(
        MockClock::on("2024-03-15"),
        MockPackageLister::new(FREEZE_OUTPUT),
        FileSystemWriter::new(),
        reporter.clone(),
    );
    let response = use_case
        .execute(ExportRequest::new(output_dir.clone(), None, true))
        .unwrap();

    assert!(response.dry_run);
    assert_eq!(response.package_count, 2);
    assert!(!output_dir.exists());

    let messages = reporter.get_messages();
    assert!(messages
        .iter()
        .any(|m| m.starts_with("Completed: 🔎 Dry run: would export 2 package(s)")));
}

#[test]
fn test_output_path_occupied_by_file() {
    let temp_dir = TempDir::new().unwrap();
    let occupied = temp_dir.path().join("exports");
    fs::write(&occupied, "i am a file").unwrap();

    let use_case = use_case_on("2024-03-15", FREEZE_OUTPUT);
    let result = use_case.execute(ExportRequest::new(occupied.clone(), None, false));

    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Path exists but is not a directory"));
    assert_eq!(fs::read_to_string(&occupied).unwrap(), "i am a file");
}

#[test]
fn test_progress_messages_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let reporter = MockProgressReporter::new();

    let use_case = ExportPackagesUseCase::new(
        MockClock::on("2024-03-15"),
        MockPackageLister::new(FREEZE_OUTPUT),
        FileSystemWriter::new(),
        reporter.clone(),
    );
    use_case
        .execute(ExportRequest::new(temp_dir.path().join("out"), None, false))
        .unwrap();

    let messages = reporter.get_messages();
    assert_eq!(messages[0], "📅 Export date: 2024-03-15");
    assert!(messages[1].starts_with("📁 Created output directory:"));
    assert_eq!(messages[2], "Waiting: 📦 Running `pip freeze`...");
    assert!(messages[3].starts_with("Completed: ✅ Exported 2 package(s) to"));
    assert!(messages[3].ends_with("python_packages_2024-03-15.txt"));
}
