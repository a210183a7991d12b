// Transport trait for the Reporting API streaming call
use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::infrastructure::proto::reporting::{
    ReceiveMicrogridComponentsDataStreamRequest, ReceiveMicrogridComponentsDataStreamResponse,
};

pub type ResponseStream =
    BoxStream<'static, Result<ReceiveMicrogridComponentsDataStreamResponse, tonic::Status>>;

#[async_trait]
pub trait ReportingTransport: Send + Sync {
    /// Open the server-streaming call. Dropping the returned stream cancels it.
    async fn receive_microgrid_components_data_stream(
        &self,
        request: tonic::Request<ReceiveMicrogridComponentsDataStreamRequest>,
    ) -> Result<ResponseStream, tonic::Status>;
}
