use std::fmt::{Display, Formatter};

/// Distinguishes the two blobs stored for every artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlobTag {
    /// The bytes exactly as uploaded.
    Original,
    /// The codec output served back on download.
    Transformed,
}

impl BlobTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlobTag::Original => "original",
            BlobTag::Transformed => "transformed",
        }
    }
}

impl Display for BlobTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
