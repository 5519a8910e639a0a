//! In-memory stand-ins for the browser: storage, REST server, dialogs and router.
//!
//! All fakes write to one shared [`Journal`] so tests can assert ordering
//! across them (e.g. "navigated before any request").

use crate::api::{DashboardApi, StatusApi};
use crate::host::{Destination, Navigate, Operator};
use crate::session::{CredentialStore, SessionContext};
use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use shared_types::{
    AppError, Credential, LoginRequest, PassStatusResponse, Profile, RegisterRequest, ServerMessage,
    TokenResponse, UserRecord,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Request(ApiCall),
    Alert(String),
    Confirm(String),
    Prompt(String),
    Navigate(Destination),
    CredentialStored(String),
    CredentialCleared,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    Profile { bearer: String },
    ListUsers { bearer: String },
    UpdateRole { bearer: String, user_id: String, role: String },
    DeleteUser { bearer: String, user_id: String },
    Login { email: String },
    Register { username: String, email: String },
    PassStatus,
}

#[derive(Debug, Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<Event>>>);

impl Journal {
    pub fn record(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn requests(&self) -> Vec<ApiCall> {
        self.0
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Request(call) => Some(call.clone()),
                _ => None,
            })
            .collect()
    }
}

/// Token whose payload carries the given claims JSON.
pub fn token_with_claims(claims_json: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims_json);
    format!("{header}.{payload}.sig")
}

pub fn token_with_role(role: &str) -> String {
    token_with_claims(&format!(r#"{{"id":"u-1","role":"{role}","username":"tester"}}"#))
}

pub fn user(id: &str, username: &str, role: &str) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        username: username.to_string(),
        email: format!("{username}@example.com"),
        role: role.to_string(),
    }
}

#[derive(Debug)]
pub struct MemoryStore {
    journal: Journal,
    value: RefCell<Option<String>>,
    fail_reads: Cell<bool>,
}

impl MemoryStore {
    pub fn new(journal: Journal, token: Option<&str>) -> Self {
        Self {
            journal,
            value: RefCell::new(token.map(str::to_string)),
            fail_reads: Cell::new(false),
        }
    }

    pub fn fail_reads(&self) {
        self.fail_reads.set(true);
    }

    pub fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

#[async_trait(?Send)]
impl CredentialStore for MemoryStore {
    async fn load(&self) -> Result<Option<String>, AppError> {
        if self.fail_reads.get() {
            return Err(AppError::storage("storage disabled"));
        }
        Ok(self.value.borrow().clone())
    }

    async fn save(&self, token: &str) -> Result<(), AppError> {
        self.journal.record(Event::CredentialStored(token.to_string()));
        *self.value.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    async fn remove(&self) -> Result<(), AppError> {
        self.journal.record(Event::CredentialCleared);
        *self.value.borrow_mut() = None;
        Ok(())
    }
}

/// Scripted REST server. Each endpoint returns its configured result.
pub struct FakeApi {
    journal: Journal,
    pub profile: Result<Profile, AppError>,
    pub users: Result<Vec<UserRecord>, AppError>,
    pub mutation: Result<ServerMessage, AppError>,
    pub login: Result<TokenResponse, AppError>,
    pub register: Result<TokenResponse, AppError>,
    pub pass_status: Result<PassStatusResponse, AppError>,
}

impl FakeApi {
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            profile: Err(AppError::unauthorized("Token is missing")),
            users: Ok(Vec::new()),
            mutation: Ok(ServerMessage {
                message: "ok".into(),
            }),
            login: Err(AppError::unauthorized("Invalid credentials")),
            register: Err(AppError::from_response_body(
                400,
                r#"{"message":"Email already exists"}"#,
            )),
            pass_status: Ok(PassStatusResponse::default()),
        }
    }
}

#[async_trait(?Send)]
impl DashboardApi for FakeApi {
    async fn profile(&self, credential: &Credential) -> Result<Profile, AppError> {
        self.journal.record(Event::Request(ApiCall::Profile {
            bearer: credential.expose().to_string(),
        }));
        self.profile.clone()
    }

    async fn list_users(&self, credential: &Credential) -> Result<Vec<UserRecord>, AppError> {
        self.journal.record(Event::Request(ApiCall::ListUsers {
            bearer: credential.expose().to_string(),
        }));
        self.users.clone()
    }

    async fn update_role(
        &self,
        credential: &Credential,
        user_id: &str,
        role: &str,
    ) -> Result<ServerMessage, AppError> {
        self.journal.record(Event::Request(ApiCall::UpdateRole {
            bearer: credential.expose().to_string(),
            user_id: user_id.to_string(),
            role: role.to_string(),
        }));
        self.mutation.clone()
    }

    async fn delete_user(
        &self,
        credential: &Credential,
        user_id: &str,
    ) -> Result<ServerMessage, AppError> {
        self.journal.record(Event::Request(ApiCall::DeleteUser {
            bearer: credential.expose().to_string(),
            user_id: user_id.to_string(),
        }));
        self.mutation.clone()
    }

    async fn login(&self, request: &LoginRequest) -> Result<TokenResponse, AppError> {
        self.journal.record(Event::Request(ApiCall::Login {
            email: request.email.clone(),
        }));
        self.login.clone()
    }

    async fn register(&self, request: &RegisterRequest) -> Result<TokenResponse, AppError> {
        self.journal.record(Event::Request(ApiCall::Register {
            username: request.username.clone(),
            email: request.email.clone(),
        }));
        self.register.clone()
    }
}

#[async_trait(?Send)]
impl StatusApi for FakeApi {
    async fn pass_status(&self) -> Result<PassStatusResponse, AppError> {
        self.journal.record(Event::Request(ApiCall::PassStatus));
        self.pass_status.clone()
    }
}

/// Operator with canned answers, plus a recording router.
pub struct FakeHost {
    journal: Journal,
    pub prompt_answer: Option<String>,
    pub confirm_answer: bool,
}

impl FakeHost {
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            prompt_answer: None,
            confirm_answer: false,
        }
    }
}

#[async_trait(?Send)]
impl Operator for FakeHost {
    async fn alert(&self, message: &str) {
        self.journal.record(Event::Alert(message.to_string()));
    }

    async fn confirm(&self, message: &str) -> bool {
        self.journal.record(Event::Confirm(message.to_string()));
        self.confirm_answer
    }

    async fn prompt(&self, message: &str) -> Option<String> {
        self.journal.record(Event::Prompt(message.to_string()));
        self.prompt_answer.clone()
    }
}

impl Navigate for FakeHost {
    fn navigate(&self, to: Destination) {
        self.journal.record(Event::Navigate(to));
    }
}

/// A full set of fakes sharing one journal.
pub struct Harness {
    pub journal: Journal,
    pub session: SessionContext<MemoryStore>,
    pub api: FakeApi,
    pub host: FakeHost,
}

impl Harness {
    pub fn new(token: Option<&str>) -> Self {
        let journal = Journal::default();
        Self {
            session: SessionContext::new(MemoryStore::new(journal.clone(), token)),
            api: FakeApi::new(journal.clone()),
            host: FakeHost::new(journal.clone()),
            journal,
        }
    }

    pub fn signed_in_as(role: &str) -> Self {
        Self::new(Some(&token_with_role(role)))
    }

    pub fn stored_token(&self) -> Option<String> {
        self.session.store().value()
    }
}
