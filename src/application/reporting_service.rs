// Reporting API client - streams flat metric samples from the Reporting service
use futures::stream::BoxStream;
use futures::StreamExt;
use std::sync::Arc;
use tonic::metadata::{Ascii, MetadataValue};

use crate::application::components_data_batch::ComponentsDataBatch;
use crate::application::reporting_transport::ReportingTransport;
use crate::application::request_builder::{build_request, StreamFilter};
use crate::domain::metric::Metric;
use crate::domain::sample::MetricSample;
use crate::error::{ReportingError, Result};
use crate::infrastructure::proto::reporting::{
    ReceiveMicrogridComponentsDataStreamRequest, ReceiveMicrogridComponentsDataStreamResponse,
};

/// Metadata key the service reads the API key from.
pub const API_KEY_METADATA: &str = "key";

/// Samples of one streaming call. The stream ends when the service closes the
/// call. A transport failure is yielded once as an error, after which the stream
/// ends as well.
pub type SampleStream = BoxStream<'static, Result<MetricSample>>;

#[derive(Clone)]
pub struct ReportingApiClient {
    transport: Arc<dyn ReportingTransport>,
    api_key: Option<MetadataValue<Ascii>>,
}

impl ReportingApiClient {
    /// An empty key is treated like no key, so no metadata is sent.
    pub fn new(transport: Arc<dyn ReportingTransport>, key: Option<&str>) -> Result<Self> {
        let api_key = key
            .filter(|key| !key.is_empty())
            .map(str::parse::<MetadataValue<Ascii>>)
            .transpose()?;
        Ok(Self { transport, api_key })
    }

    /// Stream the data of a single component.
    pub fn stream_single_component(
        &self,
        microgrid_id: u64,
        component_id: u64,
        metrics: &[Metric],
        filter: &StreamFilter,
    ) -> SampleStream {
        self.stream_multi(&[(microgrid_id, vec![component_id])], metrics, filter)
    }

    /// Stream the data of several components, grouped by microgrid.
    pub fn stream_multi(
        &self,
        microgrid_components: &[(u64, Vec<u64>)],
        metrics: &[Metric],
        filter: &StreamFilter,
    ) -> SampleStream {
        let request = build_request(microgrid_components, metrics, filter);
        self.stream_samples(request)
    }

    fn call(
        &self,
        request: ReceiveMicrogridComponentsDataStreamRequest,
    ) -> tonic::Request<ReceiveMicrogridComponentsDataStreamRequest> {
        let mut call = tonic::Request::new(request);
        if let Some(key) = &self.api_key {
            call.metadata_mut().insert(API_KEY_METADATA, key.clone());
        }
        call
    }

    fn stream_samples(&self, request: ReceiveMicrogridComponentsDataStreamRequest) -> SampleStream {
        let transport = self.transport.clone();
        let call = self.call(request);

        let stream = async_stream::stream! {
            tracing::debug!(
                "Opening components data stream for {} microgrid(s)",
                call.get_ref().microgrid_components.len()
            );

            let opened = transport.receive_microgrid_components_data_stream(call).await;
            let mut responses = match opened {
                Ok(responses) => responses,
                Err(status) => {
                    tracing::error!("RPC failed: {}", status);
                    yield Err(ReportingError::Rpc(status));
                    return;
                }
            };

            while let Some(response) = responses.next().await {
                let response = match response {
                    Ok(response) => response,
                    Err(status) => {
                        tracing::error!("RPC failed: {}", status);
                        yield Err(ReportingError::Rpc(status));
                        return;
                    }
                };

                if response == ReceiveMicrogridComponentsDataStreamResponse::default() {
                    tracing::debug!("Received blank response, closing stream");
                    break;
                }

                let batch = ComponentsDataBatch::new(response);
                if batch.is_empty() {
                    tracing::debug!("Skipping empty batch for microgrid {}", batch.microgrid_id());
                    continue;
                }

                for sample in batch.iter() {
                    yield Ok(sample);
                }
            }

            tracing::debug!("Components data stream finished");
        };

        Box::pin(stream)
    }
}
