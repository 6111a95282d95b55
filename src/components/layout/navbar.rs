use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::session::{self, use_session};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
    #[prop_or_default]
    pub on_refresh: Option<Callback<()>>,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("router context missing");

    let user = session.session.user.clone();
    let on_sign_out = {
        let session = session.clone();
        Callback::from(move |_| {
            session::logout(&session);
            navigator.push(&Route::Login);
        })
    };

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-none lg:hidden">
                <label aria-label="open sidebar" class="btn btn-square btn-ghost" for="app-drawer">
                    <i class="fas fa-bars text-xl"></i>
                </label>
            </div>
            <div class="flex-1 px-4">
                <h1 class="text-xl font-bold" id="page-title">{ &props.title }</h1>
            </div>
            <div class="flex-none gap-2">
                {if let Some(on_refresh) = &props.on_refresh {
                    let on_refresh = on_refresh.clone();
                    html! {
                        <button
                            class="btn btn-ghost btn-circle"
                            title="Refresh"
                            onclick={Callback::from(move |_| on_refresh.emit(()))}
                        >
                            <i class="fas fa-rotate-right"></i>
                        </button>
                    }
                } else {
                    html! {}
                }}
                <div class="dropdown dropdown-end">
                    <div tabindex="0" role="button" class="btn btn-ghost btn-circle avatar placeholder">
                        <div class="bg-primary text-primary-content w-10 rounded-full">
                            <span>{user.as_ref().map(|u| u.initial()).unwrap_or_else(|| "?".to_string())}</span>
                        </div>
                    </div>
                    <ul tabindex="0" class="menu dropdown-content bg-base-100 rounded-box z-50 mt-3 w-60 p-2 shadow">
                        {if let Some(user) = &user {
                            html! {
                                <li class="menu-title">
                                    <span>{&user.name}</span>
                                    <span class="text-xs font-normal">{&user.email}</span>
                                </li>
                            }
                        } else {
                            html! {}
                        }}
                        <li><Link<Route> to={Route::Profile}><i class="fas fa-user w-4"></i>{"Profile"}</Link<Route>></li>
                        <li>
                            <a onclick={on_sign_out}>
                                <i class="fas fa-right-from-bracket w-4"></i>{"Sign out"}
                            </a>
                        </li>
                    </ul>
                </div>
            </div>
        </div>
    }
}
