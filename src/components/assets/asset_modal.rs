use chrono::NaiveDate;
use rust_decimal::Decimal;
use yew::prelude::*;

use crate::api_client::asset::Asset;
use crate::common::toast::ToastContext;

/// Fields shared by the create and edit flows; the view decides which
/// endpoint they feed.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetFormData {
    pub name: String,
    pub kind: String,
    pub current_value: Decimal,
    pub purchase_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub show: bool,
    #[prop_or_default]
    pub editing: Option<Asset>,
    pub on_close: Callback<()>,
    pub on_submit: Callback<AssetFormData>,
}

#[function_component(AssetModal)]
pub fn asset_modal(props: &Props) -> Html {
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
            let kind = form_data
                .get("type")
                .as_string()
                .unwrap_or_default()
                .trim()
                .to_string();
            let value_raw = form_data.get("current_value").as_string().unwrap_or_default();
            let date_raw = form_data.get("purchase_date").as_string().unwrap_or_default();
            let notes = form_data.get("notes").as_string().unwrap_or_default();

            if name.is_empty() || kind.is_empty() {
                toast_ctx.show_warning("Name and type are required".to_string());
                return;
            }
            let Ok(current_value) = value_raw.trim().parse::<Decimal>() else {
                toast_ctx.show_warning("Enter a valid current value".to_string());
                return;
            };
            if current_value < Decimal::ZERO {
                toast_ctx.show_warning("Current value cannot be negative".to_string());
                return;
            }

            let notes = notes.trim().to_string();
            on_submit.emit(AssetFormData {
                name,
                kind,
                current_value,
                purchase_date: NaiveDate::parse_from_str(date_raw.trim(), "%Y-%m-%d").ok(),
                notes: (!notes.is_empty()).then_some(notes),
            });
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    let editing = props.editing.as_ref();
    let title = if editing.is_some() { "Edit Asset" } else { "Add Asset" };
    // Remount the form whenever the target changes so stale input
    // values never leak between create and edit
    let form_key = editing
        .map(|a| a.id.clone())
        .unwrap_or_else(|| "new".to_string());

    html! {
        <dialog class={classes!("modal", props.show.then_some("modal-open"))} id="asset_modal">
            <div class="modal-box w-11/12 max-w-xl" key={form_key}>
                <h3 class="font-bold text-lg">{title}</h3>
                <form ref={form_ref} onsubmit={on_submit} class="py-4 space-y-4">
                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Name"}</span></label>
                            <input
                                type="text"
                                name="name"
                                class="input input-bordered w-full"
                                placeholder="e.g. Index Fund"
                                value={editing.map(|a| a.name.clone())}
                                required={true}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Type"}</span></label>
                            <input
                                type="text"
                                name="type"
                                class="input input-bordered w-full"
                                placeholder="e.g. stock, real_estate"
                                value={editing.map(|a| a.kind.clone())}
                                required={true}
                            />
                        </div>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Current Value"}</span></label>
                            <input
                                type="number"
                                step="0.01"
                                min="0"
                                name="current_value"
                                class="input input-bordered w-full"
                                placeholder="0.00"
                                value={editing.map(|a| a.current_value.to_string())}
                                required={true}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Purchase Date"}</span></label>
                            <input
                                type="date"
                                name="purchase_date"
                                class="input input-bordered w-full"
                                value={editing.and_then(|a| a.purchase_date.map(|d| d.format("%Y-%m-%d").to_string()))}
                            />
                        </div>
                    </div>

                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Notes"}</span></label>
                        <input
                            type="text"
                            name="notes"
                            class="input input-bordered w-full"
                            placeholder="Optional"
                            value={editing.and_then(|a| a.notes.clone())}
                        />
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn" onclick={on_close.clone()}>{"Cancel"}</button>
                        <button type="submit" class="btn btn-primary">{"Save Asset"}</button>
                    </div>
                </form>
            </div>
            <form class="modal-backdrop" method="dialog">
                <button onclick={on_close}>{"close"}</button>
            </form>
        </dialog>
    }
}
