use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Failure banner shown in place of a view that could not load, with an
/// optional retry hook.
#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="alert alert-error my-8 max-w-2xl mx-auto">
            <i class="fas fa-triangle-exclamation text-xl"></i>
            <div>
                <h3 class="font-bold">{"Could not load this view"}</h3>
                <div class="text-sm">{&props.message}</div>
            </div>
            {if let Some(on_retry) = &props.on_retry {
                let on_retry = on_retry.clone();
                html! {
                    <button
                        class="btn btn-sm"
                        onclick={Callback::from(move |_| on_retry.emit(()))}
                    >
                        {"Try Again"}
                    </button>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
