use chrono::NaiveDate;
use rust_decimal::Decimal;
use yew::prelude::*;

use crate::api_client::goal::NewGoal;
use crate::common::toast::ToastContext;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub show: bool,
    pub on_close: Callback<()>,
    pub on_submit: Callback<NewGoal>,
}

#[function_component(GoalModal)]
pub fn goal_modal(props: &Props) -> Html {
    let form_ref = use_node_ref();
    let toast_ctx = use_context::<ToastContext>().unwrap();

    let on_submit = {
        let on_submit = props.on_submit.clone();
        let form_ref = form_ref.clone();
        let toast_ctx = toast_ctx.clone();

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
            let target_raw = form_data.get("target_amount").as_string().unwrap_or_default();
            let current_raw = form_data.get("current_amount").as_string().unwrap_or_default();
            let deadline_raw = form_data.get("deadline").as_string().unwrap_or_default();

            if name.is_empty() {
                toast_ctx.show_warning("Goal name is required".to_string());
                return;
            }
            let Ok(target_amount) = target_raw.trim().parse::<Decimal>() else {
                toast_ctx.show_warning("Enter a valid target amount".to_string());
                return;
            };
            if target_amount <= Decimal::ZERO {
                toast_ctx.show_warning("Target amount must be greater than zero".to_string());
                return;
            }

            // Optional fields only travel when filled in
            let current_amount = current_raw.trim().parse::<Decimal>().ok();
            let deadline = NaiveDate::parse_from_str(deadline_raw.trim(), "%Y-%m-%d").ok();

            on_submit.emit(NewGoal {
                name,
                target_amount,
                current_amount,
                deadline,
            });
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <dialog class={classes!("modal", props.show.then_some("modal-open"))} id="goal_modal">
            <div class="modal-box w-11/12 max-w-xl">
                <h3 class="font-bold text-lg">{"New Goal"}</h3>
                <form ref={form_ref} onsubmit={on_submit} class="py-4 space-y-4">
                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Name"}</span></label>
                        <input type="text" name="name" class="input input-bordered w-full" placeholder="e.g. Emergency Fund" required={true} />
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Target Amount"}</span></label>
                            <input type="number" step="0.01" min="0" name="target_amount" class="input input-bordered w-full" placeholder="0.00" required={true} />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Starting Amount"}</span></label>
                            <input type="number" step="0.01" min="0" name="current_amount" class="input input-bordered w-full" placeholder="Optional" />
                        </div>
                    </div>

                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Deadline"}</span></label>
                        <input type="date" name="deadline" class="input input-bordered w-full" />
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn" onclick={on_close.clone()}>{"Cancel"}</button>
                        <button type="submit" class="btn btn-primary">{"Save Goal"}</button>
                    </div>
                </form>
            </div>
            <form class="modal-backdrop" method="dialog">
                <button onclick={on_close}>{"close"}</button>
            </form>
        </dialog>
    }
}
