use yew::prelude::*;

use crate::components::assets::Assets;
use crate::components::layout::layout::Layout;

#[function_component(AssetsPage)]
pub fn assets_page() -> Html {
    let refresh_trigger = use_state(|| 0);

    let on_refresh = {
        let refresh_trigger = refresh_trigger.clone();
        Callback::from(move |_| {
            log::debug!("Assets page refresh triggered");
            refresh_trigger.set(*refresh_trigger + 1);
        })
    };

    html! {
        <Layout title="Assets" on_refresh={Some(on_refresh)}>
            <Assets key={*refresh_trigger} />
        </Layout>
    }
}
