// Domain layer - metric catalog and sample types
pub mod metric;
pub mod sample;
