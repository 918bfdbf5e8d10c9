//! In-process HTTP/1.1 server used by the client tests.
//!
//! Each connection carries one POST. The handler receives the decoded
//! request envelope and returns the status code and raw body to send back.
//! [`StubServer::start_tls`] serves the same exchange behind a self-signed
//! certificate.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use kamrpc_protocol::Request;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_rustls::TlsAcceptor;
use tokio_rustls::rustls::{Certificate, PrivateKey, ServerConfig};

use crate::JsonRpcClient;

type Handler = Arc<dyn Fn(&Request) -> (u16, String) + Send + Sync>;

pub(crate) struct StubServer {
    addr: SocketAddr,
    scheme: &'static str,
    requests: Arc<Mutex<Vec<Request>>>,
    task: JoinHandle<()>,
}

impl StubServer {
    /// Binds to an ephemeral port and starts serving.
    pub(crate) async fn start<F>(handler: F) -> Self
    where
        F: Fn(&Request) -> (u16, String) + Send + Sync + 'static,
    {
        Self::spawn(handler, None).await
    }

    /// Same as [`StubServer::start`], over TLS with a freshly generated
    /// self-signed certificate for `localhost` and `127.0.0.1`.
    pub(crate) async fn start_tls<F>(handler: F) -> Self
    where
        F: Fn(&Request) -> (u16, String) + Send + Sync + 'static,
    {
        let cert =
            rcgen::generate_simple_self_signed(vec!["localhost".into(), "127.0.0.1".into()])
                .unwrap();
        let config = ServerConfig::builder()
            .with_safe_defaults()
            .with_no_client_auth()
            .with_single_cert(
                vec![Certificate(cert.serialize_der().unwrap())],
                PrivateKey(cert.serialize_private_key_der()),
            )
            .unwrap();

        Self::spawn(handler, Some(TlsAcceptor::from(Arc::new(config)))).await
    }

    async fn spawn<F>(handler: F, tls: Option<TlsAcceptor>) -> Self
    where
        F: Fn(&Request) -> (u16, String) + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let handler: Handler = Arc::new(handler);
        let scheme = if tls.is_some() { "https" } else { "http" };

        let recorded = Arc::clone(&requests);
        let task = tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let handler = Arc::clone(&handler);
                let recorded = Arc::clone(&recorded);
                let tls = tls.clone();
                tokio::spawn(async move {
                    let _ = match tls {
                        // A client refusing the certificate aborts the handshake.
                        Some(acceptor) => match acceptor.accept(stream).await {
                            Ok(stream) => serve(stream, handler, recorded).await,
                            Err(e) => Err(e),
                        },
                        None => serve(stream, handler, recorded).await,
                    };
                });
            }
        });

        Self {
            addr,
            scheme,
            requests,
            task,
        }
    }

    /// Handler answering with the request params as the result.
    pub(crate) fn echo_params(req: &Request) -> (u16, String) {
        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "id": req.id,
            "result": req.params,
        });
        (200, body.to_string())
    }

    /// Handler answering `null` with the correct id.
    pub(crate) fn null_result(req: &Request) -> (u16, String) {
        (200, format!(r#"{{"jsonrpc":"2.0","id":{},"result":null}}"#, req.id))
    }

    pub(crate) fn url(&self) -> String {
        format!("{}://{}/RPC", self.scheme, self.addr)
    }

    pub(crate) fn client(&self) -> JsonRpcClient {
        JsonRpcClient::new(&self.url(), false).unwrap()
    }

    /// Requests received so far, in arrival order.
    pub(crate) fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn serve<S>(
    mut stream: S,
    handler: Handler,
    recorded: Arc<Mutex<Vec<Request>>>,
) -> std::io::Result<()>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let end = buf.len().min(header_end + content_length);
    let request: Request = serde_json::from_slice(&buf[header_end..end])
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    recorded.lock().unwrap().push(request.clone());
    let (status, body) = handler(&request);

    let response = format!(
        "HTTP/1.1 {} STUB\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await
}
