use bytes::{Buf, BufMut, BytesMut};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Serializes a response into wire format. Header order follows the
/// response's ordered header map, so equal responses serialize to equal
/// bytes.
pub fn serialize_response(resp: &Response) -> BytesMut {
    let mut buf = BytesMut::with_capacity(256 + resp.body.len());

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.put_slice(status_line.as_bytes());

    // Headers
    for (k, v) in &resp.headers {
        buf.put_slice(k.as_bytes());
        buf.put_slice(b": ");
        buf.put_slice(v.as_bytes());
        buf.put_slice(b"\r\n");
    }

    // Header/body separator
    buf.put_slice(b"\r\n");

    // Body
    buf.put_slice(&resp.body);

    buf
}

pub struct ResponseWriter {
    buffer: BytesMut,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
        }
    }

    /// Writes the serialized response to the stream. A single attempt:
    /// failures are terminal for the connection, never retried.
    pub async fn write_to_stream(&mut self, stream: &mut TcpStream) -> anyhow::Result<()> {
        while self.buffer.has_remaining() {
            let n = stream.write(self.buffer.chunk()).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.buffer.advance(n);
        }

        Ok(())
    }
}
