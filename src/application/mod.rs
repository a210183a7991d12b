// Application layer - request construction, batch flattening and the client facade
pub mod components_data_batch;
pub mod reporting_service;
pub mod reporting_transport;
pub mod request_builder;
