use xinzhi_core::env_non_empty;

/// Source of the chat provider API key, consulted on every chat request.
pub trait CredentialSource: Send + Sync {
    /// Current key, or `None` when unset or blank.
    fn api_key(&self) -> Option<String>;
}

/// Reads the key from an environment variable at call time.
#[derive(Debug, Clone, Copy)]
pub struct EnvCredential {
    var: &'static str,
}

impl EnvCredential {
    #[must_use]
    pub const fn new(var: &'static str) -> Self {
        Self { var }
    }
}

impl CredentialSource for EnvCredential {
    fn api_key(&self) -> Option<String> {
        env_non_empty(self.var)
    }
}

/// Fixed key, mainly for tests and one-shot CLI runs.
#[derive(Clone)]
pub struct StaticCredential(Option<String>);

impl StaticCredential {
    #[must_use]
    pub fn new(key: Option<String>) -> Self {
        Self(key.filter(|k| !k.trim().is_empty()))
    }
}

impl std::fmt::Debug for StaticCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("StaticCredential").field(&self.0.as_ref().map(|_| "***")).finish()
    }
}

impl CredentialSource for StaticCredential {
    fn api_key(&self) -> Option<String> {
        self.0.clone()
    }
}
