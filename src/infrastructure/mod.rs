// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod grpc_transport;
pub mod proto;
pub mod proto_mapper;
