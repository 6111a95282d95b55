use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::common::toast::ToastContext;
use crate::components::layout::layout::Layout;
use crate::router::Route;
use crate::session::{self, use_session};
use crate::settings;

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("router context missing");
    let toast_ctx = use_context::<ToastContext>().unwrap();

    let host_ref = use_node_ref();
    let port_ref = use_node_ref();

    let user = session.session.user.clone();
    let current = settings::get_settings();

    let on_sign_out = {
        let session = session.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            session::logout(&session);
            navigator.push(&Route::Login);
        })
    };

    let on_save_connection = {
        let host_ref = host_ref.clone();
        let port_ref = port_ref.clone();
        let toast_ctx = toast_ctx.clone();

        Callback::from(move |_| {
            let host = host_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value().trim().to_string())
                .unwrap_or_default();
            let port = port_ref
                .cast::<HtmlInputElement>()
                .and_then(|i| i.value().trim().parse::<u16>().ok());

            if host.is_empty() {
                toast_ctx.show_warning("API host cannot be empty".to_string());
                return;
            }
            let Some(port) = port else {
                toast_ctx.show_warning("Enter a valid API port".to_string());
                return;
            };

            settings::update_settings(|s| {
                s.api_host = host;
                s.api_port = port;
            });
            if settings::get_settings().save_to_storage().is_err() {
                toast_ctx.show_error("Failed to save connection settings".to_string());
                return;
            }

            log::info!(
                "Connection settings updated: {}",
                settings::get_settings().api_base_url()
            );
            toast_ctx.show_success("Connection settings saved".to_string());
        })
    };

    html! {
        <Layout title="Profile">
            <div class="max-w-4xl mx-auto">
                <div class="mb-6">
                    <h2 class="text-2xl font-bold">{"Profile & Settings"}</h2>
                    <p class="text-gray-500">{"Manage your account and connection."}</p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    <div class="space-y-4">
                        <div class="card bg-base-100 shadow">
                            <div class="card-body items-center text-center">
                                <div class="avatar placeholder mb-2">
                                    <div class="bg-primary/10 text-primary w-20 rounded-full">
                                        <span class="text-2xl font-bold">
                                            {user.as_ref().map(|u| u.initial()).unwrap_or_else(|| "?".to_string())}
                                        </span>
                                    </div>
                                </div>
                                <h3 class="font-bold text-lg">
                                    {user.as_ref().map(|u| u.name.clone()).unwrap_or_default()}
                                </h3>
                                <p class="text-sm text-gray-500">
                                    {user.as_ref().map(|u| u.email.clone()).unwrap_or_default()}
                                </p>
                            </div>
                        </div>

                        <button class="btn btn-block" onclick={on_sign_out}>
                            <i class="fas fa-right-from-bracket"></i>
                            {" Sign Out"}
                        </button>
                    </div>

                    <div class="md:col-span-2 space-y-6">
                        <div class="card bg-base-100 shadow">
                            <div class="card-body">
                                <h3 class="card-title">{"Connection Settings"}</h3>
                                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4 mt-2">
                                    <div class="form-control">
                                        <label class="label"><span class="label-text">{"API Host"}</span></label>
                                        <input
                                            ref={host_ref}
                                            type="text"
                                            class="input input-bordered w-full"
                                            value={current.api_host.clone()}
                                        />
                                    </div>
                                    <div class="form-control">
                                        <label class="label"><span class="label-text">{"API Port"}</span></label>
                                        <input
                                            ref={port_ref}
                                            type="number"
                                            min="1"
                                            max="65535"
                                            class="input input-bordered w-full"
                                            value={current.api_port.to_string()}
                                        />
                                    </div>
                                </div>
                                <p class="text-xs text-gray-500 mt-2">
                                    {format!("Currently talking to {}", current.api_base_url())}
                                </p>
                                <div class="card-actions justify-end mt-2">
                                    <button class="btn btn-primary btn-sm" onclick={on_save_connection}>
                                        {"Save"}
                                    </button>
                                </div>
                            </div>
                        </div>

                        <div class="card bg-base-100 shadow opacity-60">
                            <div class="card-body">
                                <h3 class="card-title">{"Notifications"}</h3>
                                <p class="text-sm text-gray-500">{"Currently unavailable in demo mode."}</p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </Layout>
    }
}
