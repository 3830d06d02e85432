// Read-only views over the record stores

pub mod alert_queries;
pub mod inventory_queries;
pub mod record_queries;
pub mod report_queries;
