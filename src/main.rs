use freeze_export::cli::Args;
use freeze_export::config::{discover_config, load_config_from_path, Settings};
use freeze_export::prelude::*;
use std::process;

fn main() {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version are reported through clap errors too
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    // Load config: explicit path must exist, otherwise look in the working directory
    let config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&std::env::current_dir()?)?,
    };

    let settings = Settings::resolve(args.output_dir, args.package_manager, config.as_ref());

    // Create adapters (Dependency Injection)
    let use_case = ExportPackagesUseCase::new(
        SystemClock::new(),
        FreezeCommand::new(settings.program, settings.args),
        FileSystemWriter::new(),
        StderrProgressReporter::new(),
    );

    let request = ExportRequest::new(settings.output_dir, args.date, args.dry_run);
    let response = use_case.execute(request)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    }

    Ok(())
}
