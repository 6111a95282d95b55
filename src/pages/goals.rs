use yew::prelude::*;

use crate::components::goals::Goals;
use crate::components::layout::layout::Layout;

#[function_component(GoalsPage)]
pub fn goals_page() -> Html {
    let refresh_trigger = use_state(|| 0);

    let on_refresh = {
        let refresh_trigger = refresh_trigger.clone();
        Callback::from(move |_| {
            log::debug!("Goals page refresh triggered");
            refresh_trigger.set(*refresh_trigger + 1);
        })
    };

    html! {
        <Layout title="Goals" on_refresh={Some(on_refresh)}>
            <Goals key={*refresh_trigger} />
        </Layout>
    }
}
