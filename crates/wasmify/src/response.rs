use std::io;

use serde::de::DeserializeOwned;

use crate::error::{WasmifyError, WasmifyResult};

/// Growable accumulator for the body of one HTTP exchange.
///
/// Chunks are appended through [`io::Write`] as they arrive off the wire.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResponseBuffer {
    data: Vec<u8>,
}

impl ResponseBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn text(&self) -> WasmifyResult<&str> {
        std::str::from_utf8(&self.data)
            .map_err(|e| WasmifyError::Parse(format!("response body is not UTF-8: {e}")))
    }

    pub fn json<T: DeserializeOwned>(&self) -> WasmifyResult<T> {
        Ok(serde_json::from_slice(&self.data)?)
    }
}

impl io::Write for ResponseBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
