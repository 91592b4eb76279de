mod audit_aggregator;

pub use audit_aggregator::AuditAggregator;
