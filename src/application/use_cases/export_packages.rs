use crate::application::dto::{ExportRequest, ExportResponse};
use crate::package_export::domain::ExportRecord;
use crate::package_export::services::ExportPlanner;
use crate::ports::outbound::{Clock, ExportWriter, PackageLister, ProgressReporter};
use crate::shared::Result;

/// ExportPackagesUseCase - Core use case for package exports
///
/// Runs the export as a straight line: pick the date, make sure the output
/// directory exists, capture the freeze listing, write it, confirm. The
/// first failing step aborts the run.
///
/// # Type Parameters
/// * `C` - Clock implementation
/// * `PL` - PackageLister implementation
/// * `W` - ExportWriter implementation
/// * `PR` - ProgressReporter implementation
pub struct ExportPackagesUseCase<C, PL, W, PR> {
    clock: C,
    package_lister: PL,
    export_writer: W,
    progress_reporter: PR,
}

impl<C, PL, W, PR> ExportPackagesUseCase<C, PL, W, PR>
where
    C: Clock,
    PL: PackageLister,
    W: ExportWriter,
    PR: ProgressReporter,
{
    /// Creates a new ExportPackagesUseCase with injected dependencies
    pub fn new(clock: C, package_lister: PL, export_writer: W, progress_reporter: PR) -> Self {
        Self {
            clock,
            package_lister,
            export_writer,
            progress_reporter,
        }
    }

    /// Executes the export
    ///
    /// # Arguments
    /// * `request` - Output directory, optional date override and dry-run flag
    ///
    /// # Returns
    /// ExportResponse describing the file that was (or would be) written
    pub fn execute(&self, request: ExportRequest) -> Result<ExportResponse> {
        // Step 1: Compute the export date
        let date = ExportPlanner::resolve_date(self.clock.today(), request.date_override);
        self.progress_reporter.report(&format!("📅 Export date: {}", date));

        // Step 2: Ensure the output directory exists
        let directory_created = if request.dry_run {
            false
        } else {
            let created = self.export_writer.ensure_directory(&request.output_dir)?;
            if created {
                self.progress_reporter.report(&format!(
                    "📁 Created output directory: {}",
                    request.output_dir.display()
                ));
            } else {
                self.progress_reporter.report(&format!(
                    "📁 Using output directory: {}",
                    request.output_dir.display()
                ));
            }
            created
        };

        // Step 3: Capture the freeze listing
        let command = self.package_lister.describe();
        self.progress_reporter.start_waiting(&format!("📦 Running `{}`...", command));
        let payload = self.package_lister.freeze();
        self.progress_reporter.finish_waiting();
        let payload = payload?;

        let record = ExportRecord::new(date, request.output_dir, payload);
        if record.package_count() == 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: `{}` listed no packages; the export file will be empty.",
                command
            ));
        }

        if request.dry_run {
            self.progress_reporter.report_completion(&format!(
                "🔎 Dry run: would export {} package(s) to {}",
                record.package_count(),
                record.file_path().display()
            ));
            return Ok(ExportResponse::from_record(&record, false, true));
        }

        // Step 4: Write the listing verbatim
        self.export_writer.write_file(record.file_path(), record.payload())?;

        // Step 5: Confirm
        self.progress_reporter.report_completion(&format!(
            "✅ Exported {} package(s) to {}",
            record.package_count(),
            record.file_path().display()
        ));

        Ok(ExportResponse::from_record(&record, directory_created, false))
    }
}
