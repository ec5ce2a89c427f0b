use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::config::Config;
use crate::files::{listing, resolver};
use crate::files::resolver::Action;
use crate::http::parser::{parse_request, ParseError};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

pub struct Connection {
    stream: TcpStream,
    buffer: Vec<u8>,
    state: ConnectionState,
    config: Arc<Config>,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter, bool), // bool = keep_alive?
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, config: Arc<Config>) -> Self {
        Self {
            stream,
            buffer: Vec::with_capacity(4096),
            state: ConnectionState::Reading,
            config,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    match self.read_request().await? {
                        Some(req) => {
                            self.state = ConnectionState::Processing(req);
                        }
                        None => {
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Processing(req) => {
                    let response = respond(&req.target, &self.config).await;

                    // Access log: method, status, target.
                    tracing::info!(
                        method = %req.method,
                        status = response.status.as_u16(),
                        target = %req.target,
                        "request"
                    );

                    let keep_alive = req.keep_alive();
                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer, keep_alive);
                }

                ConnectionState::Writing(writer, keep_alive) => {
                    writer.write_to_stream(&mut self.stream).await?;

                    if *keep_alive {
                        self.state = ConnectionState::Reading; // go back for next request
                    } else {
                        self.state = ConnectionState::Closed;
                    }
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        loop {
            // Try parsing whatever we already have
            match parse_request(&self.buffer) {
                Ok((request, consumed)) => {
                    self.buffer.drain(..consumed);
                    return Ok(Some(request));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(e) => {
                    // Malformed request → protocol error
                    return Err(anyhow::anyhow!("HTTP parse error: {:?}", e));
                }
            }

            // Read more data
            let mut temp = [0u8; 1024];
            let n = self.stream.read(&mut temp).await?;

            if n == 0 {
                // Client closed connection
                return Ok(None);
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }
    }
}

/// Produces the response for one request target. Every outcome is a
/// complete response; failures never propagate past this point except as
/// their status code.
pub async fn respond(target: &str, cfg: &Config) -> Response {
    match resolver::resolve(target, cfg).await {
        Action::ServeFile { path, content_type } => match tokio::fs::read(&path).await {
            Ok(body) => Response::file(content_type, body),
            Err(_) => Response::not_found(),
        },

        Action::ServeIndex { path } => match tokio::fs::read(&path).await {
            Ok(body) => Response::html(body),
            Err(_) => Response::not_found(),
        },

        Action::ListDirectory { path, display_path } => {
            match listing::render(&path, &display_path, cfg).await {
                Ok(page) => Response::html(page),
                Err(e) => {
                    tracing::error!(error = %e, "directory listing failed");
                    Response::internal_error()
                }
            }
        }

        Action::NotFound => Response::not_found(),
    }
}
