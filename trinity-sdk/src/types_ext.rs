use crate::{ChatRequest, FileUpload, ACCEPTED_EXTENSIONS};

impl ChatRequest {
    /// Build a request with context inclusion enabled, the default for
    /// conversational use.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            include_context: true,
        }
    }

    #[must_use]
    pub fn with_include_context(mut self, include_context: bool) -> Self {
        self.include_context = include_context;
        self
    }
}

impl Default for ChatRequest {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl From<&str> for ChatRequest {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ChatRequest {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// The lowercased extension of the file name, without the dot.
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        let (_, extension) = self.file_name.rsplit_once('.')?;
        if extension.is_empty() {
            None
        } else {
            Some(extension.to_ascii_lowercase())
        }
    }

    /// Whether the file passes the client-side extension filter.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.extension()
            .is_some_and(|extension| ACCEPTED_EXTENSIONS.contains(&extension.as_str()))
    }
}
