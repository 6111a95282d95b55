use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::session::use_session;

/// Query string carried to the login page so it can send the user back
/// to the page they originally asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

#[derive(Properties, PartialEq)]
pub struct RequireSessionProps {
    pub children: Children,
}

/// Gate for protected routes. Renders children only with a session
/// present; otherwise bounces to the login page, remembering the
/// requested path. Renders nothing while the stored session is still
/// being read, so a signed-in reload does not flash through login.
#[function_component(RequireSession)]
pub fn require_session(props: &RequireSessionProps) -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("router context missing");
    let location = use_location();

    let authenticated = session.session.is_authenticated();
    let hydrating = session.hydrating;
    let current_path = location.map(|l| l.path().to_string());

    use_effect_with(
        (authenticated, hydrating, current_path),
        move |(authenticated, hydrating, current_path)| {
            if !hydrating && !authenticated {
                log::debug!("No session; redirecting to login");
                let query = LoginQuery {
                    next: current_path.clone(),
                };
                if navigator.push_with_query(&Route::Login, &query).is_err() {
                    navigator.push(&Route::Login);
                }
            }
            || ()
        },
    );

    if hydrating || !authenticated {
        return html! {};
    }

    html! { <>{props.children.clone()}</> }
}
