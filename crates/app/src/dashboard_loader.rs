use crate::api::DashboardApi;
use crate::host::{Destination, Navigate, Operator};
use crate::session::{CredentialStore, SessionContext};
use shared_types::{AppError, Credential, Profile, Role, UserRecord};

pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired or unauthorized. Please login again.";

/// What the dashboard route renders after loading.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView {
    /// The page navigated away; render nothing meaningful.
    Redirected(Destination),
    Ready(DashboardData),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub profile: Profile,
    pub role: Role,
    /// Only fetched for admins.
    pub users: Option<Result<Vec<UserRecord>, AppError>>,
}

impl DashboardData {
    pub fn shows_admin_section(&self) -> bool {
        self.role.is_admin()
    }
}

/// Return the stored credential, or send the visitor to the login view.
pub async fn guard_session<S, N>(session: &SessionContext<S>, nav: &N) -> Option<Credential>
where
    S: CredentialStore,
    N: Navigate + ?Sized,
{
    let credential = session.credential().await;
    if credential.is_none() {
        tracing::info!("no stored credential, redirecting to login");
        nav.navigate(Destination::Login);
    }
    credential
}

/// Fetch the profile. Any failure ends the session: alert, clear, go home.
pub async fn load_profile<S, A, H>(
    session: &SessionContext<S>,
    api: &A,
    host: &H,
    credential: &Credential,
) -> Option<Profile>
where
    S: CredentialStore,
    A: DashboardApi + ?Sized,
    H: Operator + Navigate + ?Sized,
{
    match api.profile(credential).await {
        Ok(profile) => Some(profile),
        Err(err) => {
            tracing::warn!(error = %err, "profile load failed, ending session");
            host.alert(SESSION_EXPIRED_MESSAGE).await;
            session.clear().await;
            host.navigate(Destination::Root);
            None
        }
    }
}

/// Full dashboard load: guard, profile, then the user list for admins only.
pub async fn load_dashboard<S, A, H>(
    session: &SessionContext<S>,
    api: &A,
    host: &H,
) -> DashboardView
where
    S: CredentialStore,
    A: DashboardApi + ?Sized,
    H: Operator + Navigate + ?Sized,
{
    let Some(credential) = guard_session(session, host).await else {
        return DashboardView::Redirected(Destination::Login);
    };

    let Some(profile) = load_profile(session, api, host, &credential).await else {
        return DashboardView::Redirected(Destination::Root);
    };

    let role = profile.role();
    let users = if role.is_admin() {
        let result = api.list_users(&credential).await;
        if let Err(err) = &result {
            tracing::warn!(error = %err, "could not load user list");
        }
        Some(result)
    } else {
        None
    };

    DashboardView::Ready(DashboardData {
        profile,
        role,
        users,
    })
}
