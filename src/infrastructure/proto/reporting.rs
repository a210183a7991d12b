// Types from the `frequenz.api.reporting.v1` package.
// Mirrors the output of prost-build and tonic-build for the upstream .proto files.

/// Time window of the requested data. An unset side is left to the service:
/// no `start` means the earliest available data, no `end` streams indefinitely.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TimeFilter {
    #[prost(message, optional, tag = "1")]
    pub start: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "2")]
    pub end: ::core::option::Option<::prost_types::Timestamp>,
}
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct ResamplingOptions {
    /// Resampling resolution in seconds.
    #[prost(uint32, optional, tag = "1")]
    pub resolution: ::core::option::Option<u32>,
}
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct IncludeOptions {
    #[prost(enumeration = "include_options::FilterOption", optional, tag = "1")]
    pub bounds: ::core::option::Option<i32>,
    #[prost(enumeration = "include_options::FilterOption", optional, tag = "2")]
    pub states: ::core::option::Option<i32>,
}
/// Nested message and enum types in `IncludeOptions`.
pub mod include_options {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum FilterOption {
        Unspecified = 0,
        Exclude = 1,
        Include = 2,
    }
    impl FilterOption {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Self::Unspecified => "FILTER_OPTION_UNSPECIFIED",
                Self::Exclude => "FILTER_OPTION_EXCLUDE",
                Self::Include => "FILTER_OPTION_INCLUDE",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "FILTER_OPTION_UNSPECIFIED" => Some(Self::Unspecified),
                "FILTER_OPTION_EXCLUDE" => Some(Self::Exclude),
                "FILTER_OPTION_INCLUDE" => Some(Self::Include),
                _ => None,
            }
        }
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReceiveMicrogridComponentsDataStreamRequest {
    #[prost(message, repeated, tag = "1")]
    pub microgrid_components:
        ::prost::alloc::vec::Vec<super::common::microgrid::MicrogridComponentIds>,
    #[prost(enumeration = "super::common::metrics::Metric", repeated, tag = "2")]
    pub metrics: ::prost::alloc::vec::Vec<i32>,
    #[prost(message, optional, tag = "3")]
    pub filter: ::core::option::Option<
        receive_microgrid_components_data_stream_request::StreamFilter,
    >,
}
/// Nested message and enum types in `ReceiveMicrogridComponentsDataStreamRequest`.
pub mod receive_microgrid_components_data_stream_request {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct StreamFilter {
        #[prost(message, optional, tag = "1")]
        pub time_filter: ::core::option::Option<super::TimeFilter>,
        #[prost(message, optional, tag = "2")]
        pub resampling_options: ::core::option::Option<super::ResamplingOptions>,
        #[prost(message, optional, tag = "3")]
        pub include_options: ::core::option::Option<super::IncludeOptions>,
    }
}
/// One streamed batch: data of several components of a single microgrid.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReceiveMicrogridComponentsDataStreamResponse {
    #[prost(uint64, tag = "1")]
    pub microgrid_id: u64,
    #[prost(message, repeated, tag = "2")]
    pub components:
        ::prost::alloc::vec::Vec<super::common::microgrid::components::ComponentData>,
}
/// Generated client implementations.
pub mod reporting_client {
    #![allow(
        unused_variables,
        dead_code,
        missing_docs,
        clippy::wildcard_imports,
        clippy::let_unit_value
    )]
    use tonic::codegen::http::Uri;
    use tonic::codegen::*;
    #[derive(Debug, Clone)]
    pub struct ReportingClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl<T> ReportingClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + std::marker::Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + std::marker::Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_origin(inner: T, origin: Uri) -> Self {
            let inner = tonic::client::Grpc::with_origin(inner, origin);
            Self { inner }
        }
        /// Limits the maximum size of a decoded message.
        ///
        /// Default: `4MB`
        #[must_use]
        pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_decoding_message_size(limit);
            self
        }
        /// Streams the data of the requested components as it becomes available.
        pub async fn receive_microgrid_components_data_stream(
            &mut self,
            request: impl tonic::IntoRequest<super::ReceiveMicrogridComponentsDataStreamRequest>,
        ) -> std::result::Result<
            tonic::Response<
                tonic::codec::Streaming<super::ReceiveMicrogridComponentsDataStreamResponse>,
            >,
            tonic::Status,
        > {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/frequenz.api.reporting.v1.Reporting/ReceiveMicrogridComponentsDataStream",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(tonic::GrpcMethod::new(
                "frequenz.api.reporting.v1.Reporting",
                "ReceiveMicrogridComponentsDataStream",
            ));
            self.inner.server_streaming(req, path, codec).await
        }
    }
}
