use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::auth::RegisterRequest;
use crate::common::toast::ToastContext;
use crate::router::Route;
use crate::session;

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let navigator = use_navigator().expect("router context missing");
    let toast_ctx = use_context::<ToastContext>().unwrap();
    let form_ref = use_node_ref();
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let onsubmit = {
        let navigator = navigator.clone();
        let toast_ctx = toast_ctx.clone();
        let form_ref = form_ref.clone();
        let error = error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(form) = form_ref.cast::<web_sys::HtmlFormElement>() else {
                return;
            };
            let form_data = web_sys::FormData::new_with_form(&form).unwrap();
            let name = form_data
                .get("name")
                .as_string()
                .unwrap_or_default()
                .trim()
                .to_string();
            let email = form_data.get("email").as_string().unwrap_or_default();
            let password = form_data.get("password").as_string().unwrap_or_default();
            if name.is_empty() || email.is_empty() || password.is_empty() {
                return;
            }

            error.set(None);
            submitting.set(true);

            let navigator = navigator.clone();
            let toast_ctx = toast_ctx.clone();
            let error = error.clone();
            let submitting = submitting.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match session::signup(RegisterRequest {
                    name,
                    email,
                    password,
                })
                .await
                {
                    Ok(user) => {
                        // Registration does not sign the user in; hand off
                        // to the login form
                        toast_ctx.show_success(format!("Account created for {}", user.email));
                        navigator.push(&Route::Login);
                    }
                    Err(err) => {
                        log::warn!("Signup failed: {}", err);
                        error.set(Some(err));
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
                            <h1 class="text-2xl font-bold">{"Create Account"}</h1>
                            <p class="text-gray-500">{"Start your wealth journey today."}</p>
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
                                <label class="label"><span class="label-text">{"Full Name"}</span></label>
                                <input type="text" name="name" class="input input-bordered w-full" placeholder="Arjun Kumar" required={true} />
                            </div>
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
                                    html! { {"Create Account"} }
                                }}
                            </button>
                        </form>

                        <p class="text-center text-sm text-gray-500 mt-4">
                            {"Already have an account? "}
                            <Link<Route> to={Route::Login} classes="link link-primary">{"Sign In"}</Link<Route>>
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
