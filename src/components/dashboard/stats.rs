use rust_decimal::Decimal;
use yew::prelude::*;

use crate::api_client::dashboard::DashboardSummary;
use crate::common::currency::format_inr;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub summary: DashboardSummary,
}

#[function_component(Stats)]
pub fn stats(props: &Props) -> Html {
    let summary = &props.summary;
    let net_worth_class = if summary.net_worth >= Decimal::ZERO {
        "text-primary"
    } else {
        "text-error"
    };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Net Worth"}</div>
                    <div class={classes!("stat-value", net_worth_class)}>{format_inr(summary.net_worth)}</div>
                    <div class="stat-desc">{"Income minus expenses"}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Monthly Income"}</div>
                    <div class="stat-value text-success">{format_inr(summary.monthly_income)}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Monthly Expenses"}</div>
                    <div class="stat-value text-error">{format_inr(summary.monthly_expenses)}</div>
                </div>
            </div>
        </div>
    }
}
