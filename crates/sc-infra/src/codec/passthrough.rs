use anyhow::Result;
use async_trait::async_trait;

use sc_core::ports::CodecPort;

/// Placeholder codec that returns its input unchanged.
///
/// Keeps the stored blobs and the recorded sizes mutually consistent until a
/// real compressor is plugged in behind [`CodecPort`].
// TODO: replace with the real SkyCodec compression algorithm once it lands.
pub struct PassthroughCodec;

#[async_trait]
impl CodecPort for PassthroughCodec {
    async fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(input.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn passthrough_preserves_bytes() {
        let codec = PassthroughCodec;
        let out = codec.compress(b"hello").await.unwrap();
        assert_eq!(out, b"hello");
    }
}
