use yew::prelude::*;

use super::chart::{CategoryChart, NetWorthChart};
use super::stats::Stats;
use crate::api_client::dashboard::{self, DashboardSummary};
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRender;
use crate::session::use_session;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let (fetch_state, refetch) = use_fetch_with_refetch(dashboard::get_summary);
    let session = use_session();

    let render = {
        let session_user = session.session.user.clone();

        Callback::from(move |summary: DashboardSummary| {
            // Prefer the server-reported name, fall back to the session's
            let name = summary
                .user_name
                .clone()
                .or_else(|| session_user.as_ref().map(|u| u.name.clone()));

            html! {
                <>
                    <div class="mb-6">
                        <h2 class="text-2xl font-bold">{"Financial Overview"}</h2>
                        <p class="text-gray-500">
                            {match &name {
                                Some(name) => format!("Welcome back, {}. Here is your wealth summary.", name),
                                None => "Here is your wealth summary.".to_string(),
                            }}
                        </p>
                    </div>

                    <Stats summary={summary.clone()} />

                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 mt-6">
                        <div class="card bg-base-100 shadow">
                            <div class="card-body">
                                <h2 class="card-title">{"Net Worth Trend"}</h2>
                                {match summary.monthly_series.as_ref().filter(|s| !s.is_empty()) {
                                    Some(series) => html! { <NetWorthChart series={series.clone()} /> },
                                    None => html! {
                                        <div class="text-center py-12 text-gray-500">
                                            {"No trend data available yet."}
                                        </div>
                                    },
                                }}
                            </div>
                        </div>
                        <div class="card bg-base-100 shadow">
                            <div class="card-body">
                                <h2 class="card-title">{"Spending by Category"}</h2>
                                {if summary.category_expenses.is_empty() {
                                    html! {
                                        <div class="alert alert-info">
                                            <i class="fas fa-info-circle"></i>
                                            <span>{"No spending data yet. Log an expense to see the breakdown."}</span>
                                        </div>
                                    }
                                } else {
                                    html! { <CategoryChart slices={summary.category_expenses.clone()} /> }
                                }}
                            </div>
                        </div>
                    </div>
                </>
            }
        })
    };

    html! {
        <FetchRender<DashboardSummary>
            state={(*fetch_state).clone()}
            render={render}
            on_retry={Some(refetch)}
        />
    }
}
