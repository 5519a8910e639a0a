use async_trait::async_trait;
use dioxus::prelude::*;
use shared_types::{AppError, Credential};

/// Persistent home of the bearer token.
#[async_trait(?Send)]
pub trait CredentialStore {
    async fn load(&self) -> Result<Option<String>, AppError>;
    async fn save(&self, token: &str) -> Result<(), AppError>;
    async fn remove(&self) -> Result<(), AppError>;
}

/// Session handle passed explicitly to every flow that touches authentication.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionContext<S> {
    store: S,
}

impl<S: CredentialStore> SessionContext<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The stored credential. Storage failures read as "signed out".
    pub async fn credential(&self) -> Option<Credential> {
        match self.store.load().await {
            Ok(raw) => Credential::from_stored(raw),
            Err(err) => {
                tracing::warn!(error = %err, "could not read stored credential");
                None
            }
        }
    }

    pub async fn persist(&self, credential: &Credential) -> Result<(), AppError> {
        self.store.save(credential.expose()).await
    }

    pub async fn clear(&self) {
        if let Err(err) = self.store.remove().await {
            tracing::warn!(error = %err, "could not clear stored credential");
        }
    }
}

/// `localStorage`-backed store, reached through the document bridge.
#[derive(Clone, Debug, PartialEq)]
pub struct BrowserStore {
    key: String,
}

impl BrowserStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn key_literal(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string(&self.key)?)
    }
}

#[async_trait(?Send)]
impl CredentialStore for BrowserStore {
    async fn load(&self) -> Result<Option<String>, AppError> {
        let key = self.key_literal()?;
        document::eval(&format!("return window.localStorage.getItem({key});"))
            .join::<Option<String>>()
            .await
            .map_err(|e| AppError::storage(e.to_string()))
    }

    async fn save(&self, token: &str) -> Result<(), AppError> {
        let key = self.key_literal()?;
        let value = serde_json::to_string(token)?;
        document::eval(&format!(
            "window.localStorage.setItem({key}, {value}); return true;"
        ))
        .join::<bool>()
        .await
        .map(|_| ())
        .map_err(|e| AppError::storage(e.to_string()))
    }

    async fn remove(&self) -> Result<(), AppError> {
        let key = self.key_literal()?;
        document::eval(&format!(
            "window.localStorage.removeItem({key}); return true;"
        ))
        .join::<bool>()
        .await
        .map(|_| ())
        .map_err(|e| AppError::storage(e.to_string()))
    }
}
