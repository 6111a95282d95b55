use yew::prelude::*;

use super::asset_modal::{AssetFormData, AssetModal};
use crate::api_client::asset::{self, Asset, AssetPatch, NewAsset};
use crate::common::currency::format_inr;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRender;
use crate::common::toast::ToastContext;

#[function_component(Assets)]
pub fn assets() -> Html {
    let (fetch_state, refetch) = use_fetch_with_refetch(asset::get_assets);
    let show_modal = use_state(|| false);
    // Asset being edited; None means the modal creates
    let editing = use_state(|| None::<Asset>);
    let toast_ctx = use_context::<ToastContext>().unwrap();

    let open_create = {
        let show_modal = show_modal.clone();
        let editing = editing.clone();
        Callback::from(move |_| {
            editing.set(None);
            show_modal.set(true);
        })
    };

    let open_edit = {
        let show_modal = show_modal.clone();
        let editing = editing.clone();
        Callback::from(move |asset: Asset| {
            editing.set(Some(asset));
            show_modal.set(true);
        })
    };

    let close_modal = {
        let show_modal = show_modal.clone();
        Callback::from(move |_| show_modal.set(false))
    };

    let on_submit = {
        let show_modal = show_modal.clone();
        let editing = editing.clone();
        let refetch = refetch.clone();
        let toast_ctx = toast_ctx.clone();

        Callback::from(move |form: AssetFormData| {
            let show_modal = show_modal.clone();
            let refetch = refetch.clone();
            let toast_ctx = toast_ctx.clone();
            let editing_id = editing.as_ref().map(|a| a.id.clone());

            wasm_bindgen_futures::spawn_local(async move {
                let result = match editing_id {
                    Some(id) => {
                        let patch = AssetPatch {
                            name: Some(form.name),
                            kind: Some(form.kind),
                            current_value: Some(form.current_value),
                            purchase_date: form.purchase_date,
                            notes: form.notes,
                        };
                        asset::update_asset(&id, patch).await
                    }
                    None => {
                        asset::create_asset(NewAsset {
                            name: form.name,
                            kind: form.kind,
                            current_value: form.current_value,
                            purchase_date: form.purchase_date,
                            notes: form.notes,
                        })
                        .await
                    }
                };

                match result {
                    Ok(asset) => {
                        toast_ctx.show_success(format!("Saved '{}'", asset.name));
                        show_modal.set(false);
                        refetch.emit(());
                    }
                    Err(err) => toast_ctx.show_error(err),
                }
            });
        })
    };

    let on_delete = {
        let refetch = refetch.clone();
        let toast_ctx = toast_ctx.clone();

        Callback::from(move |asset: Asset| {
            let confirmed = web_sys::window()
                .and_then(|w| {
                    w.confirm_with_message(&format!("Delete asset '{}'?", asset.name))
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            let refetch = refetch.clone();
            let toast_ctx = toast_ctx.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match asset::delete_asset(&asset.id).await {
                    Ok(()) => {
                        toast_ctx.show_success(format!("Deleted '{}'", asset.name));
                        refetch.emit(());
                    }
                    Err(err) => toast_ctx.show_error(err),
                }
            });
        })
    };

    let render = {
        let open_edit = open_edit.clone();
        let on_delete = on_delete.clone();

        Callback::from(move |assets: Vec<Asset>| {
            if assets.is_empty() {
                return html! {
                    <div class="alert alert-info">
                        <i class="fas fa-info-circle"></i>
                        <span>{"No assets tracked yet. Add your first holding."}</span>
                    </div>
                };
            }

            html! {
                <div class="card bg-base-100 shadow">
                    <div class="card-body overflow-x-auto">
                        <table class="table table-zebra">
                            <thead>
                                <tr>
                                    <th>{"Name"}</th>
                                    <th>{"Type"}</th>
                                    <th class="text-right">{"Current Value"}</th>
                                    <th>{"Purchased"}</th>
                                    <th>{"Notes"}</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                { for assets.iter().map(|asset| asset_row(asset, &open_edit, &on_delete)) }
                            </tbody>
                        </table>
                    </div>
                </div>
            }
        })
    };

    html! {
        <>
            <div class="flex justify-between items-center mb-6 gap-4">
                <div>
                    <h2 class="text-2xl font-bold">{"Assets"}</h2>
                    <p class="text-gray-500">{"Your tracked holdings and valuables."}</p>
                </div>
                <button class="btn btn-primary btn-sm" onclick={open_create}>
                    <i class="fas fa-plus"></i>
                    {" Add Asset"}
                </button>
            </div>

            <FetchRender<Vec<Asset>>
                state={(*fetch_state).clone()}
                render={render}
                on_retry={Some(refetch.clone())}
            />

            <AssetModal
                show={*show_modal}
                editing={(*editing).clone()}
                on_close={close_modal}
                on_submit={on_submit}
            />
        </>
    }
}

fn asset_row(asset: &Asset, open_edit: &Callback<Asset>, on_delete: &Callback<Asset>) -> Html {
    let on_edit_click = {
        let open_edit = open_edit.clone();
        let asset = asset.clone();
        Callback::from(move |_| open_edit.emit(asset.clone()))
    };
    let on_delete_click = {
        let on_delete = on_delete.clone();
        let asset = asset.clone();
        Callback::from(move |_| on_delete.emit(asset.clone()))
    };

    html! {
        <tr key={asset.id.clone()}>
            <td class="font-medium">{&asset.name}</td>
            <td><span class="badge badge-ghost">{&asset.kind}</span></td>
            <td class="text-right font-mono">{format_inr(asset.current_value)}</td>
            <td class="whitespace-nowrap">
                {asset
                    .purchase_date
                    .map(|d| d.format("%d %b %Y").to_string())
                    .unwrap_or_else(|| "-".to_string())}
            </td>
            <td class="max-w-xs truncate">
                {asset.notes.clone().unwrap_or_default()}
            </td>
            <td class="whitespace-nowrap text-right">
                <button class="btn btn-ghost btn-xs" title="Edit" onclick={on_edit_click}>
                    <i class="fas fa-pen"></i>
                </button>
                <button class="btn btn-ghost btn-xs text-error" title="Delete" onclick={on_delete_click}>
                    <i class="fas fa-trash"></i>
                </button>
            </td>
        </tr>
    }
}
