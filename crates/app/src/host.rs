use crate::routes::Route;
use async_trait::async_trait;
use dioxus::prelude::*;

/// Fixed navigation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Login,
    Root,
    Dashboard,
}

impl Destination {
    pub fn path(&self) -> &'static str {
        match self {
            Destination::Login => "/login",
            Destination::Root => "/",
            Destination::Dashboard => "/dashboard",
        }
    }

    /// Resolve a server-supplied redirect. Anything unrecognized lands on the root.
    pub fn from_path(path: &str) -> Self {
        match path {
            "/login" => Destination::Login,
            "/dashboard" => Destination::Dashboard,
            _ => Destination::Root,
        }
    }
}

impl From<Destination> for Route {
    fn from(dest: Destination) -> Self {
        match dest {
            Destination::Login => Route::Login {},
            Destination::Root => Route::Home {},
            Destination::Dashboard => Route::Dashboard {},
        }
    }
}

/// Blocking dialogs shown to the operator.
#[async_trait(?Send)]
pub trait Operator {
    async fn alert(&self, message: &str);
    async fn confirm(&self, message: &str) -> bool;
    /// `None` when the operator cancels.
    async fn prompt(&self, message: &str) -> Option<String>;
}

pub trait Navigate {
    fn navigate(&self, to: Destination);
}

/// Dialogs through the browser's native `alert`/`confirm`/`prompt`, navigation
/// through the router.
#[derive(Clone, Copy)]
pub struct BrowserHost {
    navigator: Navigator,
}

impl BrowserHost {
    pub fn new(navigator: Navigator) -> Self {
        Self { navigator }
    }
}

fn js_string(message: &str) -> String {
    serde_json::to_string(message).unwrap_or_else(|_| "\"\"".to_string())
}

#[async_trait(?Send)]
impl Operator for BrowserHost {
    async fn alert(&self, message: &str) {
        let script = format!("window.alert({}); return true;", js_string(message));
        if let Err(err) = document::eval(&script).join::<bool>().await {
            tracing::warn!(error = %err, "alert dialog failed");
        }
    }

    async fn confirm(&self, message: &str) -> bool {
        let script = format!("return window.confirm({});", js_string(message));
        document::eval(&script).join::<bool>().await.unwrap_or(false)
    }

    async fn prompt(&self, message: &str) -> Option<String> {
        let script = format!("return window.prompt({});", js_string(message));
        document::eval(&script)
            .join::<Option<String>>()
            .await
            .ok()
            .flatten()
    }
}

impl Navigate for BrowserHost {
    fn navigate(&self, to: Destination) {
        tracing::debug!(path = to.path(), "navigating");
        self.navigator.push(Route::from(to));
    }
}
