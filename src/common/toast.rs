use yew::prelude::*;

use crate::settings;

#[derive(Clone, Copy, PartialEq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    fn alert_class(self) -> &'static str {
        match self {
            ToastLevel::Info => "alert-info",
            ToastLevel::Success => "alert-success",
            ToastLevel::Warning => "alert-warning",
            ToastLevel::Error => "alert-error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastLevel::Info => "fas fa-info-circle",
            ToastLevel::Success => "fas fa-check-circle",
            ToastLevel::Warning => "fas fa-exclamation-triangle",
            ToastLevel::Error => "fas fa-exclamation-circle",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub level: ToastLevel,
}

#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub add_toast: Callback<(String, ToastLevel)>,
    pub remove_toast: Callback<usize>,
}

impl ToastContext {
    pub fn show_info(&self, message: String) {
        self.add_toast.emit((message, ToastLevel::Info));
    }

    pub fn show_success(&self, message: String) {
        self.add_toast.emit((message, ToastLevel::Success));
    }

    pub fn show_warning(&self, message: String) {
        self.add_toast.emit((message, ToastLevel::Warning));
    }

    pub fn show_error(&self, message: String) {
        self.add_toast.emit((message, ToastLevel::Error));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_state(Vec::<Toast>::new);
    let next_id = use_state(|| 0usize);

    let remove_toast = {
        let toasts = toasts.clone();
        Callback::from(move |id: usize| {
            let mut remaining = (*toasts).clone();
            remaining.retain(|t| t.id != id);
            toasts.set(remaining);
        })
    };

    let add_toast = {
        let toasts = toasts.clone();
        let next_id = next_id.clone();

        Callback::from(move |(message, level): (String, ToastLevel)| {
            let id = *next_id;
            next_id.set(id + 1);

            let mut current = (*toasts).clone();
            current.push(Toast { id, message, level });
            toasts.set(current);

            // Auto-dismiss after the configured duration
            let duration = settings::get_settings().toast_duration_ms;
            let toasts = toasts.clone();
            gloo_timers::callback::Timeout::new(duration, move || {
                let mut remaining = (*toasts).clone();
                remaining.retain(|t| t.id != id);
                toasts.set(remaining);
            })
            .forget();
        })
    };

    let context = ToastContext {
        add_toast,
        remove_toast: remove_toast.clone(),
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                {for (*toasts).iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let remove_toast = remove_toast.clone();
                        Callback::from(move |_| remove_toast.emit(id))
                    };

                    html! {
                        <div key={id} class={classes!("alert", toast.level.alert_class(), "shadow-lg")}>
                            <i class={toast.level.icon()}></i>
                            <span>{&toast.message}</span>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}
