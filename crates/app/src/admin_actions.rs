use crate::api::DashboardApi;
use crate::host::Operator;
use crate::session::{CredentialStore, SessionContext};
use shared_types::{AppError, ServerMessage};

pub const EDIT_ROLE_PROMPT: &str = "Enter new role for user (user/admin):";
pub const DELETE_CONFIRM: &str = "Are you sure you want to delete this user?";
const NOT_SIGNED_IN: &str = "Your session has ended. Please login again.";

/// Result of an edit or delete, which the caller must settle.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// The operator cancelled; nothing was sent.
    Aborted,
    Completed { message: String },
    Failed { reason: String },
}

impl ActionOutcome {
    fn from_response(result: Result<ServerMessage, AppError>) -> Self {
        match result {
            Ok(body) => ActionOutcome::Completed {
                message: body.message,
            },
            Err(err) if err.is_transport() => ActionOutcome::Failed {
                reason: format!("Request failed: {}", err.message),
            },
            Err(err) => ActionOutcome::Failed {
                reason: err.message,
            },
        }
    }

    /// Tell the operator how it went. Returns true when the view should be refetched.
    pub async fn report<O: Operator + ?Sized>(&self, operator: &O) -> bool {
        match self {
            ActionOutcome::Aborted => false,
            ActionOutcome::Completed { message } => {
                operator.alert(message).await;
                true
            }
            ActionOutcome::Failed { reason } => {
                operator.alert(reason).await;
                false
            }
        }
    }
}

/// Ask for a new role and send it. The value goes out as typed; the server
/// owns role validation.
pub async fn edit_user_role<S, A, O>(
    session: &SessionContext<S>,
    api: &A,
    operator: &O,
    user_id: &str,
) -> ActionOutcome
where
    S: CredentialStore,
    A: DashboardApi + ?Sized,
    O: Operator + ?Sized,
{
    let role = match operator.prompt(EDIT_ROLE_PROMPT).await {
        Some(role) if !role.is_empty() => role,
        _ => return ActionOutcome::Aborted,
    };

    let Some(credential) = session.credential().await else {
        return ActionOutcome::Failed {
            reason: NOT_SIGNED_IN.to_string(),
        };
    };

    let outcome = ActionOutcome::from_response(api.update_role(&credential, user_id, &role).await);
    tracing::info!(user_id, role = %role, ?outcome, "role update finished");
    outcome
}

/// Confirm, then delete.
pub async fn delete_user<S, A, O>(
    session: &SessionContext<S>,
    api: &A,
    operator: &O,
    user_id: &str,
) -> ActionOutcome
where
    S: CredentialStore,
    A: DashboardApi + ?Sized,
    O: Operator + ?Sized,
{
    if !operator.confirm(DELETE_CONFIRM).await {
        return ActionOutcome::Aborted;
    }

    let Some(credential) = session.credential().await else {
        return ActionOutcome::Failed {
            reason: NOT_SIGNED_IN.to_string(),
        };
    };

    let outcome = ActionOutcome::from_response(api.delete_user(&credential, user_id).await);
    tracing::info!(user_id, ?outcome, "user delete finished");
    outcome
}
