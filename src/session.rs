//! Client-side session: the tab's belief about who is signed in,
//! derived from a locally stored token. The session value plus its
//! dispatcher travel through context; async operations live here as
//! free functions so pages can drive them from callbacks.

pub mod storage;

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use yew::prelude::*;

use crate::api_client::auth::{self, Credentials, RegisterRequest, RegisteredUser};
use crate::api_client::dashboard;

/// The signed-in user as this client knows it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl SessionUser {
    /// The token endpoint returns no profile, so the signed-in user is
    /// reconstructed from the submitted email with placeholder id and
    /// display name. Swap this for a profile fetch once the API grows
    /// one; until then the record is not authoritative.
    pub fn placeholder(email: &str) -> Self {
        Self {
            id: "1".to_string(),
            name: "User".to_string(),
            email: email.to_string(),
        }
    }

    /// First letter of the display name, for avatar badges
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

/// Current session. `token` presence is the whole authentication check;
/// nothing validates the token client-side.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<SessionUser>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    /// Result of the startup storage read
    Hydrated(Session),
    SignedIn { token: String, user: SessionUser },
    SignedOut,
}

/// Reducible session state. `hydrating` is true only between provider
/// mount and the synchronous storage read, so guards can hold off on
/// redirecting until the stored session has been considered.
#[derive(Clone, PartialEq)]
pub struct SessionState {
    pub session: Session,
    pub hydrating: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            session: Session::default(),
            hydrating: true,
        }
    }
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: SessionAction) -> Rc<Self> {
        let next = match action {
            SessionAction::Hydrated(session) => SessionState {
                session,
                hydrating: false,
            },
            SessionAction::SignedIn { token, user } => SessionState {
                session: Session {
                    token: Some(token),
                    user: Some(user),
                },
                hydrating: false,
            },
            SessionAction::SignedOut => SessionState {
                session: Session::default(),
                hydrating: false,
            },
        };
        Rc::new(next)
    }
}

/// Session value + dispatcher, as provided through context
pub type SessionHandle = UseReducerHandle<SessionState>;

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let state = use_reducer(SessionState::default);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let session = storage::load();
            log::debug!(
                "Session hydrated from storage (authenticated: {})",
                session.is_authenticated()
            );
            state.dispatch(SessionAction::Hydrated(session));
            || ()
        });
    }

    html! {
        <ContextProvider<SessionHandle> context={state}>
            {props.children.clone()}
        </ContextProvider<SessionHandle>>
    }
}

#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("use_session called outside SessionProvider")
}

/// Exchange credentials for a token, persist the session, and update
/// state. A failed exchange propagates the error and leaves both state
/// and storage untouched.
pub async fn login(session: SessionHandle, credentials: Credentials) -> Result<(), String> {
    let token = auth::login(&credentials).await?;
    let user = SessionUser::placeholder(&credentials.email);

    storage::persist(&token.access_token, &user);
    session.dispatch(SessionAction::SignedIn {
        token: token.access_token,
        user,
    });
    log::info!("Signed in as {}", credentials.email);
    Ok(())
}

/// Register a new account. Does not sign in; the caller routes the user
/// to the login page afterwards.
pub async fn signup(data: RegisterRequest) -> Result<RegisteredUser, String> {
    auth::register(&data).await
}

/// Clear storage and in-memory state. Purely local; the token is not
/// revoked server-side.
pub fn logout(session: &SessionHandle) {
    storage::clear();
    dashboard::invalidate_summary();
    session.dispatch(SessionAction::SignedOut);
    log::info!("Signed out");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: SessionState, action: SessionAction) -> SessionState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn initial_state_is_unauthenticated_and_hydrating() {
        let state = SessionState::default();
        assert!(state.hydrating);
        assert!(!state.session.is_authenticated());
    }

    #[test]
    fn hydration_with_empty_storage_settles_unauthenticated() {
        let state = reduce(
            SessionState::default(),
            SessionAction::Hydrated(Session::default()),
        );
        assert!(!state.hydrating);
        assert!(!state.session.is_authenticated());
    }

    #[test]
    fn signing_in_sets_token_and_user() {
        let state = reduce(
            SessionState::default(),
            SessionAction::SignedIn {
                token: "jwt".to_string(),
                user: SessionUser::placeholder("a@b.example"),
            },
        );
        assert!(state.session.is_authenticated());
        assert_eq!(state.session.user.unwrap().email, "a@b.example");
    }

    #[test]
    fn signing_out_clears_everything() {
        let signed_in = reduce(
            SessionState::default(),
            SessionAction::SignedIn {
                token: "jwt".to_string(),
                user: SessionUser::placeholder("a@b.example"),
            },
        );
        let state = reduce(signed_in, SessionAction::SignedOut);
        assert!(!state.session.is_authenticated());
        assert!(state.session.token.is_none());
        assert!(state.session.user.is_none());
    }

    #[test]
    fn authentication_is_token_presence_alone() {
        let session = Session {
            token: Some("long-expired-jwt".to_string()),
            user: None,
        };
        // No validity check: any stored token counts
        assert!(session.is_authenticated());
    }

    #[test]
    fn placeholder_user_mirrors_the_submitted_email() {
        let user = SessionUser::placeholder("me@example.com");
        assert_eq!(user.email, "me@example.com");
        assert_eq!(user.id, "1");
        assert_eq!(user.name, "User");
        assert_eq!(user.initial(), "U");
    }
}
