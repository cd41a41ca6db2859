use dioxus::prelude::*;

const JS_LOAD_ID_TOKEN: &str = r#"(function(){
    try { return localStorage.getItem("enigma_id_token") || ""; }
    catch(e) { return ""; }
})()"#;

/// Whether a user is currently signed in, as seen by one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSignal {
    Present,
    Absent,
}

impl SessionSignal {
    /// A blank or missing id token counts as signed out.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(token) if !token.trim().is_empty() => SessionSignal::Present,
            _ => SessionSignal::Absent,
        }
    }

    pub fn is_present(self) -> bool {
        self == SessionSignal::Present
    }
}

/// Token worth restoring from storage. Blank entries are left behind.
fn restorable(saved: Option<&str>) -> Option<String> {
    saved
        .filter(|token| SessionSignal::from_token(Some(*token)).is_present())
        .map(str::to_owned)
}

/// Copies the stored id token into the `Signal<Option<String>>` context once
/// the page is mounted. The app root owns that context.
#[component]
pub fn SessionBootstrap() -> Element {
    let mut id_token = use_context::<Signal<Option<String>>>();

    use_effect(move || {
        spawn(async move {
            let stored = match document::eval(JS_LOAD_ID_TOKEN).await {
                Ok(stored) => stored,
                Err(err) => {
                    tracing::debug!("session: storage unreadable: {err:?}");
                    return;
                }
            };
            if let Some(token) = restorable(stored.as_str()) {
                id_token.set(Some(token));
            }
        });
    });

    rsx! {}
}

/// Read the session from context, degrading to signed out when the app
/// root never provided one.
pub fn use_session() -> SessionSignal {
    match try_use_context::<Signal<Option<String>>>() {
        Some(id_token) => SessionSignal::from_token(id_token().as_deref()),
        None => {
            tracing::warn!("missing session context, treating visitor as signed out");
            SessionSignal::Absent
        }
    }
}
