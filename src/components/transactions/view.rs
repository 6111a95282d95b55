use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::transaction_modal::TransactionModal;
use crate::api_client::transaction::{self, NewTransaction, Transaction, TransactionKind};
use crate::common::currency::format_inr;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRender;
use crate::common::toast::ToastContext;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
enum KindFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl KindFilter {
    fn matches(self, kind: TransactionKind) -> bool {
        match self {
            Self::All => true,
            Self::Income => kind == TransactionKind::Income,
            Self::Expense => kind == TransactionKind::Expense,
        }
    }

    fn from_value(value: &str) -> Self {
        match value {
            "income" => Self::Income,
            "expense" => Self::Expense,
            _ => Self::All,
        }
    }
}

#[function_component(Transactions)]
pub fn transactions() -> Html {
    let (fetch_state, refetch) = use_fetch_with_refetch(transaction::get_transactions);
    let filter = use_state(KindFilter::default);
    let show_modal = use_state(|| false);
    let toast_ctx = use_context::<ToastContext>().unwrap();

    let on_filter_change = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                filter.set(KindFilter::from_value(&select.value()));
            }
        })
    };

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

        Callback::from(move |request: NewTransaction| {
            let show_modal = show_modal.clone();
            let refetch = refetch.clone();
            let toast_ctx = toast_ctx.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match transaction::create_transaction(request).await {
                    Ok(_) => {
                        toast_ctx.show_success("Transaction added".to_string());
                        show_modal.set(false);
                        refetch.emit(());
                    }
                    Err(err) => toast_ctx.show_error(err),
                }
            });
        })
    };

    let render = {
        let filter = *filter;
        Callback::from(move |transactions: Vec<Transaction>| {
            let visible: Vec<Transaction> = transactions
                .into_iter()
                .filter(|t| filter.matches(t.kind))
                .collect();

            if visible.is_empty() {
                return html! {
                    <div class="alert alert-info">
                        <i class="fas fa-info-circle"></i>
                        <span>{"No transactions found."}</span>
                    </div>
                };
            }

            html! {
                <div class="card bg-base-100 shadow">
                    <div class="card-body overflow-x-auto">
                        <table class="table table-zebra">
                            <thead>
                                <tr>
                                    <th>{"Date"}</th>
                                    <th>{"Description"}</th>
                                    <th>{"Category"}</th>
                                    <th class="text-right">{"Amount"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for visible.iter().map(render_row) }
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
                    <h2 class="text-2xl font-bold">{"Transactions"}</h2>
                    <p class="text-gray-500">{"Manage your income and expenses."}</p>
                </div>
                <div class="flex gap-2">
                    <select class="select select-bordered select-sm" onchange={on_filter_change}>
                        <option value="all" selected={*filter == KindFilter::All}>{"All Transactions"}</option>
                        <option value="income" selected={*filter == KindFilter::Income}>{"Income"}</option>
                        <option value="expense" selected={*filter == KindFilter::Expense}>{"Expense"}</option>
                    </select>
                    <button class="btn btn-primary btn-sm" onclick={open_modal}>
                        <i class="fas fa-plus"></i>
                        {" Add Transaction"}
                    </button>
                </div>
            </div>

            <FetchRender<Vec<Transaction>>
                state={(*fetch_state).clone()}
                render={render}
                on_retry={Some(refetch.clone())}
            />

            <TransactionModal
                show={*show_modal}
                on_close={close_modal}
                on_submit={on_submit}
            />
        </>
    }
}

fn render_row(transaction: &Transaction) -> Html {
    let (sign, amount_class) = match transaction.kind {
        TransactionKind::Income => ("+", "text-success"),
        TransactionKind::Expense => ("-", "text-error"),
    };

    html! {
        <tr key={transaction.id.clone()}>
            <td class="whitespace-nowrap">{transaction.date.format("%d %b %Y").to_string()}</td>
            <td class="font-medium">
                {transaction.description.clone().unwrap_or_else(|| "-".to_string())}
            </td>
            <td>
                <span class="badge badge-ghost">{&transaction.category}</span>
            </td>
            <td class={classes!("text-right", "font-mono", "font-bold", amount_class)}>
                {format!("{} {}", sign, format_inr(transaction.amount))}
            </td>
        </tr>
    }
}
