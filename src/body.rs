use bytes::Bytes;

/// In-memory request/response payload.
///
/// Cloning is cheap and yields an independently readable copy; classification
/// and the downstream continuation never contend for one reader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Body {
    content: Bytes,
}

impl Body {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.content
    }

    pub fn into_bytes(self) -> Bytes {
        self.content
    }
}

impl From<Bytes> for Body {
    fn from(content: Bytes) -> Self {
        Self { content }
    }
}

impl From<Vec<u8>> for Body {
    fn from(content: Vec<u8>) -> Self {
        Self {
            content: Bytes::from(content),
        }
    }
}

impl From<String> for Body {
    fn from(content: String) -> Self {
        Self {
            content: Bytes::from(content),
        }
    }
}

impl From<&str> for Body {
    fn from(content: &str) -> Self {
        Self {
            content: Bytes::copy_from_slice(content.as_bytes()),
        }
    }
}

impl From<&[u8]> for Body {
    fn from(content: &[u8]) -> Self {
        Self {
            content: Bytes::copy_from_slice(content),
        }
    }
}
