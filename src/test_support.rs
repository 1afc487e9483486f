//! In-process HTTP server for prober and loop tests.

use std::convert::Infallible;
use std::net::SocketAddr;

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::ext::ReasonPhrase;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

/// Serve every request with `status` and the given headers until the test ends.
pub async fn spawn_server(
    status: u16,
    headers: &'static [(&'static str, &'static str)],
) -> SocketAddr {
    spawn_server_with_reason(status, None, headers).await
}

/// Like [`spawn_server`], but answers with a custom reason phrase when given.
pub async fn spawn_server_with_reason(
    status: u16,
    reason: Option<&'static [u8]>,
    headers: &'static [(&'static str, &'static str)],
) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let addr = listener.local_addr().expect("Failed to get local addr");
    let status = StatusCode::from_u16(status).expect("valid status code");

    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            tokio::spawn(async move {
                let service = service_fn(move |_req: Request<Incoming>| async move {
                    let mut builder = Response::builder().status(status);
                    for (name, value) in headers {
                        builder = builder.header(*name, *value);
                    }
                    if let Some(reason) = reason {
                        builder = builder.extension(ReasonPhrase::from_static(reason));
                    }
                    Ok::<_, Infallible>(
                        builder
                            .body(Full::new(Bytes::from_static(b"pong")))
                            .expect("valid response"),
                    )
                });
                let _ = http1::Builder::new()
                    .serve_connection(TokioIo::new(stream), service)
                    .await;
            });
        }
    });

    addr
}

/// A URL on a local port that refuses connections.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let addr = listener.local_addr().expect("Failed to get local addr");
    drop(listener);
    format!("http://{addr}/")
}
