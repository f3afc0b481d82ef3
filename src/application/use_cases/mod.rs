/// Use cases module containing application business logic orchestration
mod export_packages;

pub use export_packages::ExportPackagesUseCase;
