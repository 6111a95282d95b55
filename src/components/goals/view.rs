use yew::prelude::*;

use super::goal_modal::GoalModal;
use crate::api_client::goal::{self, Goal, NewGoal};
use crate::common::currency::format_inr;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRender;
use crate::common::toast::ToastContext;

#[function_component(Goals)]
pub fn goals() -> Html {
    let (fetch_state, refetch) = use_fetch_with_refetch(goal::get_goals);
    let show_modal = use_state(|| false);
    let toast_ctx = use_context::<ToastContext>().unwrap();

    let open_modal = {
        let show_modal = show_modal.clone();
        Callback::from(move |_| show_modal.set(true))
    };
    let close_modal = {
        let show_modal = show_modal.clone();
        Callback::from(move |_| show_modal.set(false))
    };

    let on_submit = {
        let show_modal = show_modal.clone();
        let refetch = refetch.clone();
        let toast_ctx = toast_ctx.clone();

        Callback::from(move |request: NewGoal| {
            let show_modal = show_modal.clone();
            let refetch = refetch.clone();
            let toast_ctx = toast_ctx.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match goal::create_goal(request).await {
                    Ok(goal) => {
                        toast_ctx.show_success(format!("Goal '{}' created", goal.name));
                        show_modal.set(false);
                        refetch.emit(());
                    }
                    Err(err) => toast_ctx.show_error(err),
                }
            });
        })
    };

    let render = {
        let open_modal = open_modal.clone();
        Callback::from(move |goals: Vec<Goal>| {
            if goals.is_empty() {
                return html! {
                    <div class="text-center py-12 text-gray-500">
                        <p>{"No goals set yet."}</p>
                        <button class="btn btn-primary btn-sm mt-4" onclick={open_modal.clone()}>
                            {"Create your first goal"}
                        </button>
                    </div>
                };
            }

            html! {
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    { for goals.iter().map(goal_card) }
                </div>
            }
        })
    };

    html! {
        <>
            <div class="flex justify-between items-center mb-6 gap-4">
                <div>
                    <h2 class="text-2xl font-bold">{"Financial Goals"}</h2>
                    <p class="text-gray-500">{"Track and achieve your savings targets."}</p>
                </div>
                <button class="btn btn-primary btn-sm" onclick={open_modal.clone()}>
                    <i class="fas fa-plus"></i>
                    {" New Goal"}
                </button>
            </div>

            <FetchRender<Vec<Goal>>
                state={(*fetch_state).clone()}
                render={render}
                on_retry={Some(refetch.clone())}
            />

            <GoalModal show={*show_modal} on_close={close_modal} on_submit={on_submit} />
        </>
    }
}

fn goal_card(goal: &Goal) -> Html {
    let progress = goal.progress_percent();
    let deadline = match &goal.deadline {
        Some(deadline) => format!("By {}", deadline.format("%d %b %Y")),
        None => "No deadline".to_string(),
    };
    let (icon_class, percent_class) = if goal.completed {
        ("bg-success/20 text-success", "text-success")
    } else {
        ("bg-primary/10 text-primary", "text-primary")
    };

    html! {
        <div key={goal.id.clone()} class="card bg-base-100 shadow hover:shadow-md transition-shadow">
            <div class="card-body">
                <div class="flex items-start justify-between">
                    <div class="flex items-center gap-3">
                        <div class={classes!("p-3", "rounded-xl", icon_class)}>
                            <i class="fas fa-bullseye text-xl"></i>
                        </div>
                        <div>
                            <h3 class="font-bold">{&goal.name}</h3>
                            <p class="text-xs text-gray-500">{deadline}</p>
                        </div>
                    </div>
                    {if goal.completed {
                        html! { <i class="fas fa-circle-check text-success"></i> }
                    } else {
                        html! { <i class="far fa-circle text-gray-300"></i> }
                    }}
                </div>

                <div class="mt-4">
                    <div class="flex justify-between text-sm mb-2">
                        <span class="font-medium">{format_inr(goal.current_amount)}</span>
                        <span class="text-gray-400">{format!("of {}", format_inr(goal.target_amount))}</span>
                    </div>
                    <progress
                        class={classes!("progress", if goal.completed { "progress-success" } else { "progress-primary" })}
                        value={progress.to_string()}
                        max="100"
                    />
                    <div class="text-right mt-1">
                        <span class={classes!("text-xs", "font-bold", percent_class)}>
                            {format!("{}%", progress)}
                        </span>
                    </div>
                </div>
            </div>
        </div>
    }
}
