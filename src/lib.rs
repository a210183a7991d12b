// Client for the streaming Reporting API of microgrid component data
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

pub use application::components_data_batch::ComponentsDataBatch;
pub use application::reporting_service::{ReportingApiClient, SampleStream};
pub use application::reporting_transport::ReportingTransport;
pub use application::request_builder::StreamFilter;
pub use domain::metric::Metric;
pub use domain::sample::{MetricSample, MetricValue};
pub use error::ReportingError;
pub use infrastructure::grpc_transport::GrpcTransport;
