mod export_planner;

pub use export_planner::ExportPlanner;
