use crate::api::DashboardApi;
use crate::host::{Destination, Navigate};
use crate::session::{CredentialStore, SessionContext};
use dioxus::prelude::*;
use shared_types::{AppError, Credential, LoginRequest, RegisterRequest, Role, TokenResponse};

/// Which navigation regions are displayed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavVisibility {
    pub authenticated_options: bool,
    pub unauthenticated_options: bool,
    pub admin_link: bool,
}

impl NavVisibility {
    /// Signed-in state follows credential presence; the admin link follows the
    /// role in the token's own claims.
    pub fn for_credential(credential: Option<&Credential>) -> Self {
        match credential {
            None => NavVisibility {
                authenticated_options: false,
                unauthenticated_options: true,
                admin_link: false,
            },
            Some(credential) => NavVisibility {
                authenticated_options: true,
                unauthenticated_options: false,
                admin_link: Role::from_credential(credential).is_admin(),
            },
        }
    }
}

/// Global navigation state, recomputed from storage on every page load.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub nav: Signal<NavVisibility>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            nav: Signal::new(NavVisibility::for_credential(None)),
        }
    }

    pub fn apply(&mut self, credential: Option<&Credential>) {
        self.nav.set(NavVisibility::for_credential(credential));
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Exchange email and password for a credential, store it, and follow the
/// server's redirect. Nothing is stored on failure.
pub async fn sign_in<S, A, N>(
    session: &SessionContext<S>,
    api: &A,
    nav: &N,
    request: LoginRequest,
) -> Result<Credential, AppError>
where
    S: CredentialStore,
    A: DashboardApi + ?Sized,
    N: Navigate + ?Sized,
{
    let response = api.login(&request).await?;
    let credential = establish(session, nav, response).await?;
    tracing::info!("signed in");
    Ok(credential)
}

/// Create an account. The server answers with a token, handled exactly like
/// a login.
pub async fn sign_up<S, A, N>(
    session: &SessionContext<S>,
    api: &A,
    nav: &N,
    request: RegisterRequest,
) -> Result<Credential, AppError>
where
    S: CredentialStore,
    A: DashboardApi + ?Sized,
    N: Navigate + ?Sized,
{
    let response = api.register(&request).await?;
    let credential = establish(session, nav, response).await?;
    tracing::info!(username = %request.username, "account created");
    Ok(credential)
}

/// Store an issued token, then go where the server said.
async fn establish<S, N>(
    session: &SessionContext<S>,
    nav: &N,
    response: TokenResponse,
) -> Result<Credential, AppError>
where
    S: CredentialStore,
    N: Navigate + ?Sized,
{
    let credential = Credential::new(response.token);
    session.persist(&credential).await?;
    tracing::debug!(redirect = %response.redirect_url, "credential stored");
    nav.navigate(Destination::from_path(&response.redirect_url));
    Ok(credential)
}

/// Forget the credential and return to the public root.
pub async fn sign_out<S, N>(session: &SessionContext<S>, nav: &N)
where
    S: CredentialStore,
    N: Navigate + ?Sized,
{
    session.clear().await;
    tracing::info!("signed out");
    nav.navigate(Destination::Root);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{token_with_claims, token_with_role, ApiCall, Event, Harness};
    use pretty_assertions::assert_eq;
    use shared_types::AppErrorKind;

    #[test]
    fn no_credential_shows_public_options_only() {
        assert_eq!(
            NavVisibility::for_credential(None),
            NavVisibility {
                authenticated_options: false,
                unauthenticated_options: true,
                admin_link: false,
            }
        );
    }

    #[test]
    fn admin_claim_shows_admin_link() {
        let credential = Credential::new(token_with_role("admin"));
        let vis = NavVisibility::for_credential(Some(&credential));
        assert!(vis.authenticated_options);
        assert!(!vis.unauthenticated_options);
        assert!(vis.admin_link);
    }

    #[test]
    fn non_admin_or_missing_claims_hide_admin_link() {
        for token in [
            token_with_role("user"),
            token_with_role("Admin"),
            token_with_claims(r#"{"id":"u-1"}"#),
            "not-a-token".to_string(),
        ] {
            let credential = Credential::new(token);
            let vis = NavVisibility::for_credential(Some(&credential));
            assert!(vis.authenticated_options, "credential present means signed in");
            assert!(!vis.admin_link);
        }
    }

    #[tokio::test]
    async fn sign_out_clears_and_goes_home() {
        let h = Harness::signed_in_as("user");

        sign_out(&h.session, &h.host).await;

        assert_eq!(h.stored_token(), None);
        assert_eq!(
            h.journal.events(),
            vec![Event::CredentialCleared, Event::Navigate(Destination::Root)]
        );
    }

    #[tokio::test]
    async fn sign_in_stores_token_and_follows_redirect() {
        let mut h = Harness::new(None);
        let token = token_with_role("admin");
        h.api.login = Ok(TokenResponse {
            token: token.clone(),
            redirect_url: "/dashboard".into(),
        });

        let request = LoginRequest {
            email: "root@example.com".into(),
            password: "hunter2".into(),
        };
        let credential = sign_in(&h.session, &h.api, &h.host, request).await.unwrap();

        assert_eq!(credential.expose(), token);
        assert_eq!(h.stored_token(), Some(token.clone()));
        assert_eq!(
            h.journal.events(),
            vec![
                Event::Request(ApiCall::Login {
                    email: "root@example.com".into()
                }),
                Event::CredentialStored(token),
                Event::Navigate(Destination::Dashboard),
            ]
        );
    }

    #[tokio::test]
    async fn failed_sign_in_stores_nothing() {
        let h = Harness::new(None);
        let request = LoginRequest {
            email: "nobody@example.com".into(),
            password: "wrong".into(),
        };

        let err = sign_in(&h.session, &h.api, &h.host, request).await.unwrap_err();

        assert_eq!(err.message, "Invalid credentials");
        assert_eq!(h.stored_token(), None);
        assert_eq!(h.journal.events().len(), 1);
    }

    fn registration(email: &str) -> RegisterRequest {
        RegisterRequest {
            username: "ana".into(),
            email: email.into(),
            password: "s3cret".into(),
        }
    }

    #[tokio::test]
    async fn sign_up_stores_token_and_goes_home() {
        let mut h = Harness::new(None);
        let token = token_with_claims(r#"{"id":"9","exp":1700000000}"#);
        h.api.register = Ok(TokenResponse {
            token: token.clone(),
            redirect_url: "/".into(),
        });

        let credential = sign_up(&h.session, &h.api, &h.host, registration("ana@example.com"))
            .await
            .unwrap();

        assert_eq!(credential.expose(), token);
        assert_eq!(h.stored_token(), Some(token.clone()));
        assert_eq!(
            h.journal.events(),
            vec![
                Event::Request(ApiCall::Register {
                    username: "ana".into(),
                    email: "ana@example.com".into(),
                }),
                Event::CredentialStored(token),
                Event::Navigate(Destination::Root),
            ]
        );
        // No role claim yet: signed in, but no admin link.
        let vis = NavVisibility::for_credential(Some(&credential));
        assert!(vis.authenticated_options);
        assert!(!vis.admin_link);
    }

    #[tokio::test]
    async fn duplicate_email_stores_nothing_and_surfaces_message() {
        let h = Harness::new(None);

        let err = sign_up(&h.session, &h.api, &h.host, registration("taken@example.com"))
            .await
            .unwrap_err();

        assert_eq!(err.kind, AppErrorKind::BadRequest);
        assert_eq!(err.message, "Email already exists");
        assert_eq!(h.stored_token(), None);
        assert_eq!(
            h.journal.requests(),
            vec![ApiCall::Register {
                username: "ana".into(),
                email: "taken@example.com".into(),
            }]
        );
    }
}
