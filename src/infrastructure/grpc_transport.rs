// gRPC transport for the Reporting API, backed by a tonic channel
use async_trait::async_trait;
use futures::StreamExt;
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};

use crate::application::reporting_transport::{ReportingTransport, ResponseStream};
use crate::error::{ReportingError, Result};
use crate::infrastructure::proto::reporting::reporting_client::ReportingClient;
use crate::infrastructure::proto::reporting::ReceiveMicrogridComponentsDataStreamRequest;

/// Where and how to reach the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerUrl {
    pub authority: String,
    pub tls: bool,
}

impl ServerUrl {
    /// Accepts `host:port`, `http://host:port`, `https://host:port` and
    /// `grpc://host:port[?ssl=true|false]`. Plain `grpc://` URLs do not use TLS.
    pub fn parse(url: &str) -> Result<Self> {
        let invalid = |reason: &str| ReportingError::InvalidUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        };

        let (scheme, rest) = match url.split_once("://") {
            Some((scheme, rest)) => (scheme.to_ascii_lowercase(), rest),
            None => ("http".to_string(), url),
        };
        let (authority, query) = match rest.split_once('?') {
            Some((authority, query)) => (authority, Some(query)),
            None => (rest, None),
        };
        let authority = authority.trim_end_matches('/');
        if authority.is_empty() || authority.contains('/') {
            return Err(invalid("expected host:port"));
        }

        let tls = match scheme.as_str() {
            "http" => false,
            "https" => true,
            "grpc" => {
                let mut tls = false;
                for pair in query.unwrap_or_default().split('&').filter(|p| !p.is_empty()) {
                    match pair.split_once('=') {
                        Some(("ssl", "true")) => tls = true,
                        Some(("ssl", "false")) => tls = false,
                        Some(("ssl", _)) => return Err(invalid("ssl must be true or false")),
                        _ => tracing::warn!("Ignoring unsupported URL option {} in {}", pair, url),
                    }
                }
                tls
            }
            _ => return Err(invalid("unsupported scheme")),
        };

        Ok(Self {
            authority: authority.to_string(),
            tls,
        })
    }

    pub fn endpoint(&self) -> Result<Endpoint> {
        let scheme = if self.tls { "https" } else { "http" };
        let uri = format!("{}://{}", scheme, self.authority);
        let invalid = |e: tonic::transport::Error| ReportingError::InvalidUrl {
            url: uri.clone(),
            reason: e.to_string(),
        };

        let endpoint = Endpoint::from_shared(uri.clone()).map_err(invalid)?;
        if self.tls {
            endpoint
                .tls_config(ClientTlsConfig::new().with_native_roots())
                .map_err(invalid)
        } else {
            Ok(endpoint)
        }
    }
}

#[derive(Debug, Clone)]
pub struct GrpcTransport {
    client: ReportingClient<Channel>,
}

impl GrpcTransport {
    /// Create a transport for `server_url`. The channel connects on first use, so
    /// an unreachable server shows up as an RPC error on the stream.
    pub fn new(server_url: &str) -> Result<Self> {
        let url = ServerUrl::parse(server_url)?;
        tracing::info!("Using Reporting service at {} (tls: {})", url.authority, url.tls);
        let channel = url.endpoint()?.connect_lazy();
        Ok(Self {
            client: ReportingClient::new(channel),
        })
    }
}

#[async_trait]
impl ReportingTransport for GrpcTransport {
    async fn receive_microgrid_components_data_stream(
        &self,
        request: tonic::Request<ReceiveMicrogridComponentsDataStreamRequest>,
    ) -> std::result::Result<ResponseStream, tonic::Status> {
        // Clones share the underlying channel
        let mut client = self.client.clone();
        let response = client.receive_microgrid_components_data_stream(request).await?;
        Ok(response.into_inner().boxed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_host_port_is_plaintext() {
        let url = ServerUrl::parse("localhost:50051").unwrap();
        assert_eq!(
            url,
            ServerUrl {
                authority: "localhost:50051".to_string(),
                tls: false
            }
        );
    }

    #[test]
    fn test_grpc_scheme_with_ssl_option() {
        assert!(!ServerUrl::parse("grpc://reporting.example.com:443").unwrap().tls);
        assert!(ServerUrl::parse("grpc://reporting.example.com:443?ssl=true").unwrap().tls);
        assert!(!ServerUrl::parse("grpc://reporting.example.com:443?ssl=false").unwrap().tls);
        assert!(ServerUrl::parse("grpc://reporting.example.com:443?ssl=maybe").is_err());
    }

    #[test]
    fn test_http_schemes() {
        assert!(!ServerUrl::parse("http://127.0.0.1:50051").unwrap().tls);
        let url = ServerUrl::parse("https://reporting.example.com:443/").unwrap();
        assert!(url.tls);
        assert_eq!(url.authority, "reporting.example.com:443");
    }

    #[test]
    fn test_invalid_urls() {
        assert!(matches!(
            ServerUrl::parse("ftp://host:21"),
            Err(ReportingError::InvalidUrl { .. })
        ));
        assert!(ServerUrl::parse("grpc://").is_err());
        assert!(ServerUrl::parse("http://host:1/some/path").is_err());
    }

    #[test]
    fn test_plaintext_endpoint_uri() {
        let endpoint = ServerUrl::parse("localhost:50051").unwrap().endpoint().unwrap();
        assert_eq!(endpoint.uri().scheme_str(), Some("http"));
        assert_eq!(endpoint.uri().authority().unwrap().as_str(), "localhost:50051");
    }

    #[tokio::test]
    async fn test_transport_is_created_without_connecting() {
        assert!(GrpcTransport::new("localhost:1").is_ok());
        assert!(GrpcTransport::new("ftp://localhost:1").is_err());
    }
}
