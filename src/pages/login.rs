use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::auth::Credentials;
use crate::components::guard::LoginQuery;
use crate::router::Route;
use crate::session::{self, use_session};

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("router context missing");
    let location = use_location();
    let form_ref = use_node_ref();
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    // Where to land after a successful sign-in
    let destination = location
        .and_then(|l| l.query::<LoginQuery>().ok())
        .and_then(|q| q.next)
        .as_deref()
        .and_then(Route::recognize)
        .unwrap_or(Route::Home);

    // Already signed in: skip the form entirely
    {
        let navigator = navigator.clone();
        let destination = destination.clone();
        let authenticated = session.session.is_authenticated();
        let hydrating = session.hydrating;
        use_effect_with((authenticated, hydrating), move |(authenticated, hydrating)| {
            if *authenticated && !hydrating {
                navigator.push(&destination);
            }
            || ()
        });
    }

    let onsubmit = {
        let session = session.clone();
        let navigator = navigator.clone();
        let destination = destination.clone();
        let form_ref = form_ref.clone();
        let error = error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(form) = form_ref.cast::<web_sys::HtmlFormElement>() else {
                return;
            };
            let form_data = web_sys::FormData::new_with_form(&form).unwrap();
            let email = form_data.get("email").as_string().unwrap_or_default();
            let password = form_data.get("password").as_string().unwrap_or_default();
            if email.is_empty() || password.is_empty() {
                return;
            }

            error.set(None);
            submitting.set(true);

            let session = session.clone();
            let navigator = navigator.clone();
            let destination = destination.clone();
            let error = error.clone();
            let submitting = submitting.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match session::login(session, Credentials { email, password }).await {
                    Ok(()) => navigator.push(&destination),
                    Err(err) => {
                        log::warn!("Login failed: {}", err);
                        error.set(Some(
                            "Login failed. Please check your credentials.".to_string(),
                        ));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content w-full max-w-md">
                <div class="card bg-base-100 shadow-xl w-full">
                    <div class="card-body">
                        <div class="text-center mb-4">
                            <div class="inline-flex w-14 h-14 rounded-xl bg-primary items-center justify-center text-primary-content text-2xl mb-3">
                                <i class="fas fa-chart-line"></i>
                            </div>
                            <h1 class="text-2xl font-bold">{"Welcome Back"}</h1>
                            <p class="text-gray-500">{"Sign in to your wealth dashboard."}</p>
                        </div>

                        {if let Some(message) = &*error {
                            html! {
                                <div class="alert alert-error text-sm mb-2">
                                    <i class="fas fa-exclamation-circle"></i>
                                    <span>{message}</span>
                                </div>
                            }
                        } else {
                            html! {}
                        }}

                        <form ref={form_ref} {onsubmit} class="space-y-4">
                            <div class="form-control">
                                <label class="label"><span class="label-text">{"Email Address"}</span></label>
                                <input type="email" name="email" class="input input-bordered w-full" placeholder="you@example.com" required={true} />
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">{"Password"}</span></label>
                                <input type="password" name="password" class="input input-bordered w-full" placeholder="********" required={true} />
                            </div>
                            <button type="submit" class="btn btn-primary w-full" disabled={*submitting}>
                                {if *submitting {
                                    html! { <span class="loading loading-spinner loading-sm"></span> }
                                } else {
                                    html! { {"Sign In"} }
                                }}
                            </button>
                        </form>

                        <p class="text-center text-sm text-gray-500 mt-4">
                            {"Don't have an account? "}
                            <Link<Route> to={Route::Signup} classes="link link-primary">{"Create Account"}</Link<Route>>
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
