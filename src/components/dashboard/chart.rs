use plotly::common::Mode;
use plotly::{Layout, Scatter};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::api_client::dashboard::ChartSlice;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct NetWorthChartProps {
    pub series: Vec<ChartSlice>,
}

/// Net worth over the server-reported monthly series.
#[function_component(NetWorthChart)]
pub fn net_worth_chart(props: &NetWorthChartProps) -> Html {
    let container_ref = use_node_ref();
    let series = props.series.clone();

    use_effect_with(
        (container_ref.clone(), series),
        move |(container_ref, series)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id("chart-net-worth");

                let labels: Vec<String> = series.iter().map(|p| p.name.clone()).collect();
                let values: Vec<f64> = series.iter().map(|p| p.value).collect();

                let trace = Scatter::new(labels, values)
                    .mode(Mode::LinesMarkers)
                    .name("Net Worth")
                    .line(plotly::common::Line::new().color("rgb(29, 78, 216)").width(3.0));

                let layout = Layout::new()
                    .x_axis(plotly::layout::Axis::new().show_grid(false))
                    .y_axis(plotly::layout::Axis::new().show_grid(true))
                    .height(300);

                let trace_json = serde_json::to_string(&trace).unwrap();
                let trace_js = js_sys::JSON::parse(&trace_json).unwrap();
                let data_js = js_sys::Array::new();
                data_js.push(&trace_js);

                let layout_json = serde_json::to_string(&layout).unwrap();
                let layout_js = js_sys::JSON::parse(&layout_json).unwrap();

                newPlot("chart-net-worth", data_js.into(), layout_js);
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} style="width:100%; height:300px;"></div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CategoryChartProps {
    pub slices: Vec<ChartSlice>,
}

/// Donut of expense totals per category. Callers handle the empty case;
/// this component assumes at least one slice.
#[function_component(CategoryChart)]
pub fn category_chart(props: &CategoryChartProps) -> Html {
    let container_ref = use_node_ref();
    let slices = props.slices.clone();

    use_effect_with(
        (container_ref.clone(), slices),
        move |(container_ref, slices)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id("chart-categories");

                let labels: Vec<String> = slices.iter().map(|s| s.name.clone()).collect();
                let values: Vec<f64> = slices.iter().map(|s| s.value).collect();

                let trace = serde_json::json!([{
                    "type": "pie",
                    "labels": labels,
                    "values": values,
                    "hole": 0.45,
                    "textinfo": "percent",
                }]);
                let layout = serde_json::json!({
                    "height": 300,
                    "margin": {"t": 10, "r": 10, "l": 10, "b": 10},
                    "showlegend": true,
                });

                let trace_js = js_sys::JSON::parse(&trace.to_string()).unwrap();
                let layout_js = js_sys::JSON::parse(&layout.to_string()).unwrap();

                newPlot("chart-categories", trace_js, layout_js);
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} style="width:100%; height:300px;"></div>
    }
}
