use rust_decimal::Decimal;
use yew::prelude::*;

use crate::api_client::transaction::{NewTransaction, TransactionKind};
use crate::common::toast::ToastContext;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub show: bool,
    pub on_close: Callback<()>,
    pub on_submit: Callback<NewTransaction>,
}

#[function_component(TransactionModal)]
pub fn transaction_modal(props: &Props) -> Html {
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

            let kind_value = form_data.get("type").as_string().unwrap_or_default();
            let kind = if kind_value == "income" {
                TransactionKind::Income
            } else {
                TransactionKind::Expense
            };
            let amount_raw = form_data.get("amount").as_string().unwrap_or_default();
            let category = form_data.get("category").as_string().unwrap_or_default();
            let description = form_data.get("description").as_string().unwrap_or_default();

            // The backend validates too, but malformed submissions should
            // never leave the browser
            let Ok(amount) = amount_raw.trim().parse::<Decimal>() else {
                toast_ctx.show_warning("Enter a valid amount".to_string());
                return;
            };
            if amount <= Decimal::ZERO {
                toast_ctx.show_warning("Amount must be greater than zero".to_string());
                return;
            }
            let category = category.trim().to_string();
            if category.is_empty() {
                toast_ctx.show_warning("Category is required".to_string());
                return;
            }

            let description = description.trim().to_string();
            on_submit.emit(NewTransaction {
                amount,
                kind,
                category,
                description: (!description.is_empty()).then_some(description.clone()),
            });
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <dialog class={classes!("modal", props.show.then_some("modal-open"))} id="transaction_modal">
            <div class="modal-box w-11/12 max-w-xl">
                <h3 class="font-bold text-lg">{"Add Transaction"}</h3>
                <form ref={form_ref} onsubmit={on_submit} class="py-4 space-y-4">
                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Type"}</span></label>
                            <select name="type" class="select select-bordered w-full">
                                <option value="expense">{"Expense"}</option>
                                <option value="income">{"Income"}</option>
                            </select>
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Amount"}</span></label>
                            <input type="number" step="0.01" min="0" name="amount" class="input input-bordered w-full" placeholder="0.00" required={true} />
                        </div>
                    </div>

                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Category"}</span></label>
                        <input type="text" name="category" class="input input-bordered w-full" placeholder="e.g. Food" required={true} />
                    </div>

                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Description"}</span></label>
                        <input type="text" name="description" class="input input-bordered w-full" placeholder="Optional note" />
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn" onclick={on_close.clone()}>{"Cancel"}</button>
                        <button type="submit" class="btn btn-primary">{"Save Transaction"}</button>
                    </div>
                </form>
            </div>
            <form class="modal-backdrop" method="dialog">
                <button onclick={on_close}>{"close"}</button>
            </form>
        </dialog>
    }
}
