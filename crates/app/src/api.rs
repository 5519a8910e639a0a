use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use shared_types::{
    ApiConfig, AppError, Credential, LoginRequest, PassStatusResponse, Profile, RegisterRequest,
    ServerMessage, TokenResponse, UpdateRoleRequest, UserRecord,
};

pub const PROFILE_PATH: &str = "/api/dashboard";
pub const USERS_PATH: &str = "/api/users";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const PASS_STATUS_PATH: &str = "/paso/public_api";

/// Authenticated endpoints plus login and registration.
#[async_trait(?Send)]
pub trait DashboardApi {
    async fn profile(&self, credential: &Credential) -> Result<Profile, AppError>;
    async fn list_users(&self, credential: &Credential) -> Result<Vec<UserRecord>, AppError>;
    async fn update_role(
        &self,
        credential: &Credential,
        user_id: &str,
        role: &str,
    ) -> Result<ServerMessage, AppError>;
    async fn delete_user(
        &self,
        credential: &Credential,
        user_id: &str,
    ) -> Result<ServerMessage, AppError>;
    async fn login(&self, request: &LoginRequest) -> Result<TokenResponse, AppError>;
    async fn register(&self, request: &RegisterRequest) -> Result<TokenResponse, AppError>;
}

/// The public, unauthenticated status endpoint.
#[async_trait(?Send)]
pub trait StatusApi {
    async fn pass_status(&self) -> Result<PassStatusResponse, AppError>;
}

/// REST client for the pass-watch server.
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn user_url(&self, user_id: &str) -> String {
        self.url(&format!("{USERS_PATH}/{user_id}"))
    }

    /// Send a request and decode a JSON body. Non-success statuses become
    /// errors carrying the server's `message` when there is one.
    async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, AppError> {
        let response = request
            .send()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::from_response_body(status.as_u16(), &body));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl DashboardApi for HttpApi {
    async fn profile(&self, credential: &Credential) -> Result<Profile, AppError> {
        let request = self
            .client
            .get(self.url(PROFILE_PATH))
            .bearer_auth(credential.expose());
        Self::send_json(request).await
    }

    async fn list_users(&self, credential: &Credential) -> Result<Vec<UserRecord>, AppError> {
        let request = self
            .client
            .get(self.url(USERS_PATH))
            .bearer_auth(credential.expose());
        Self::send_json(request).await
    }

    async fn update_role(
        &self,
        credential: &Credential,
        user_id: &str,
        role: &str,
    ) -> Result<ServerMessage, AppError> {
        let body = UpdateRoleRequest {
            role: role.to_string(),
        };
        let request = self
            .client
            .patch(self.user_url(user_id))
            .bearer_auth(credential.expose())
            .json(&body);
        Self::send_json(request).await
    }

    async fn delete_user(
        &self,
        credential: &Credential,
        user_id: &str,
    ) -> Result<ServerMessage, AppError> {
        let request = self
            .client
            .delete(self.user_url(user_id))
            .bearer_auth(credential.expose());
        Self::send_json(request).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<TokenResponse, AppError> {
        let request = self.client.post(self.url(LOGIN_PATH)).json(request);
        Self::send_json(request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<TokenResponse, AppError> {
        let request = self.client.post(self.url(REGISTER_PATH)).json(request);
        Self::send_json(request).await
    }
}

#[async_trait(?Send)]
impl StatusApi for HttpApi {
    async fn pass_status(&self) -> Result<PassStatusResponse, AppError> {
        Self::send_json(self.client.get(self.url(PASS_STATUS_PATH))).await
    }
}
