//! Bounded-read draining of log streams

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::hcp::client::api_error;
use crate::hcp::TfeClient;

/// Source of log bytes read in bounded chunks
#[allow(async_fn_in_trait)]
pub trait LogReader {
    /// Read up to `buf.len()` bytes into `buf`, returning how many were
    /// written. Zero means the stream is exhausted.
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize>;
}

/// Log stream backed by an HTTP response body
pub struct HttpLogReader {
    response: reqwest::Response,
    pending: Vec<u8>,
    offset: usize,
}

impl HttpLogReader {
    pub fn new(response: reqwest::Response) -> Self {
        Self {
            response,
            pending: Vec::new(),
            offset: 0,
        }
    }
}

impl LogReader for HttpLogReader {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        while self.offset >= self.pending.len() {
            match self.response.chunk().await? {
                Some(chunk) => {
                    self.pending = chunk.to_vec();
                    self.offset = 0;
                }
                None => return Ok(0),
            }
        }

        let available = &self.pending[self.offset..];
        let n = available.len().min(buf.len());
        buf[..n].copy_from_slice(&available[..n]);
        self.offset += n;
        Ok(n)
    }
}

/// Read a log stream to the end and return its text
///
/// Only the bytes each read reports are kept; the read buffer is reused, so
/// anything past `n` is left over from an earlier read. Decoding happens once
/// at the end, so multibyte characters split across reads stay intact.
pub async fn drain_log<R: LogReader>(reader: &mut R) -> Result<String> {
    let mut buffer = [0u8; api::LOG_READ_CHUNK_SIZE];
    let mut collected = Vec::new();

    loop {
        let n = reader.read(&mut buffer).await?;
        if n == 0 {
            break;
        }
        collected.extend_from_slice(&buffer[..n]);
    }

    debug!("Drained {} log bytes", collected.len());
    Ok(String::from_utf8_lossy(&collected).into_owned())
}

impl TfeClient {
    /// Open a streaming read handle on a temporary log URL
    ///
    /// The log-read-url is pre-authenticated, so no token is sent.
    pub async fn open_log(&self, log_read_url: &str) -> Result<HttpLogReader> {
        debug!("Opening log stream: {}", log_read_url);

        let response = self.send(self.get_unauthenticated(log_read_url)).await?;

        if !response.status().is_success() {
            return Err(api_error(response, "fetch log content").await);
        }

        Ok(HttpLogReader::new(response))
    }
}
