use yew::prelude::*;

use crate::api_client::dashboard::invalidate_summary;
use crate::components::dashboard::Dashboard;
use crate::components::layout::layout::Layout;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let refresh_trigger = use_state(|| 0);

    let on_refresh = {
        let refresh_trigger = refresh_trigger.clone();
        Callback::from(move |_| {
            log::debug!("Dashboard page refresh triggered");
            // A manual refresh should bypass the cached aggregate
            invalidate_summary();
            refresh_trigger.set(*refresh_trigger + 1);
        })
    };

    html! {
        <Layout title="Dashboard" on_refresh={Some(on_refresh)}>
            <Dashboard key={*refresh_trigger} />
        </Layout>
    }
}
