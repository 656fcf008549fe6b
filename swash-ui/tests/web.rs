//! DOM behavior tests, run with `wasm-pack test --headless --firefox swash-ui`

#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use js_sys::{Function, Object, Reflect};
use swash_ui::{api, loading, nav, notify, refresh, search, shortcuts, tiles, tooltips};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlButtonElement, HtmlElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn set_body(html: &str) {
    let body = swash_ui::dom::document().unwrap().body().unwrap();
    body.set_inner_html(html);
}

fn first(selector: &str) -> Element {
    swash_ui::dom::document()
        .unwrap()
        .query_selector(selector)
        .unwrap()
        .unwrap()
}

fn row_hidden(row: &Element) -> bool {
    row.dyn_ref::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value("display")
        .unwrap()
        == "none"
}

const TABLE: &str = r#"
<div class="container-fluid">
    <input type="text" placeholder="Search orders...">
    <table>
        <thead><tr><th>Service</th></tr></thead>
        <tbody>
            <tr><td>John Doe</td><td>Dry Cleaning</td></tr>
            <tr><td>Jane Smith</td><td>Laundry</td></tr>
            <tr><td>Bob Johnson</td><td>Alterations</td></tr>
        </tbody>
    </table>
</div>"#;

#[wasm_bindgen_test]
fn search_leaves_only_the_matching_row() {
    set_body(TABLE);
    let input = first("input");

    assert_eq!(search::filter_table_for(&input, "LAUNDRY"), 1);

    let rows = swash_ui::dom::query_all("tbody tr");
    let hidden: Vec<bool> = rows.iter().map(row_hidden).collect();
    assert_eq!(hidden, vec![true, false, true]);

    assert_eq!(search::filter_table_for(&input, ""), 3);
    assert!(rows.iter().all(|row| !row_hidden(row)));
}

#[wasm_bindgen_test]
fn escape_clears_search_and_restores_rows() {
    set_body(TABLE);
    assert_eq!(search::attach(), 1);

    let input: web_sys::HtmlInputElement = first("input").dyn_into().unwrap();
    input.set_value("bob");
    input
        .dispatch_event(&web_sys::Event::new("input").unwrap())
        .unwrap();
    let rows = swash_ui::dom::query_all("tbody tr");
    assert_eq!(rows.iter().filter(|r| !row_hidden(r)).count(), 1);

    assert_eq!(shortcuts::clear_text_inputs(), 1);
    assert_eq!(input.value(), "");
    assert!(rows.iter().all(|row| !row_hidden(row)));
}

#[wasm_bindgen_test]
fn nav_highlighting_is_idempotent() {
    set_body(
        r#"<nav class="sidebar">
            <a class="nav-link active" href="/">Dashboard</a>
            <a class="nav-link" href="/orders">Orders</a>
            <a class="nav-link" href="/valets">Valets</a>
        </nav>"#,
    );

    let snapshot = || -> Vec<bool> {
        swash_ui::dom::query_all(".nav-link")
            .iter()
            .map(|link| link.class_list().contains("active"))
            .collect()
    };

    assert_eq!(nav::highlight_for("/orders"), 1);
    let once = snapshot();
    assert_eq!(nav::highlight_for("/orders"), 1);
    assert_eq!(snapshot(), once);
    assert_eq!(once, vec![false, true, false]);
}

#[wasm_bindgen_test]
async fn notification_expires() {
    set_body("");
    let alert = notify::show("Saved", notify::NotificationKind::Success).unwrap();

    assert!(alert.parent_node().is_some());
    assert!(alert.class_name().contains("alert-success"));

    TimeoutFuture::new(notify::NOTIFICATION_TTL_MS + 250).await;
    assert!(alert.parent_node().is_none());
}

#[wasm_bindgen_test]
fn notification_can_be_dismissed() {
    set_body("");
    let first_alert = notify::show("one", notify::NotificationKind::Info).unwrap();
    let second_alert = notify::show("two", notify::NotificationKind::Error).unwrap();
    assert_eq!(swash_ui::dom::query_all(".alert").len(), 2);

    let close: HtmlElement = first_alert
        .query_selector(".btn-close")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    close.click();

    assert!(first_alert.parent_node().is_none());
    assert!(second_alert.parent_node().is_some());
    assert!(second_alert.class_name().contains("alert-danger"));
}

#[wasm_bindgen_test]
fn counters_update_by_data_attribute() {
    set_body(
        r#"<h4 data-stat="dailyOrders">0</h4>
           <h4 data-stat="monthlyRevenue">$0</h4>
           <h4 data-stat="pendingIssues">0</h4>"#,
    );

    let reports = refresh::ReportsSummary {
        daily_orders: 45,
        monthly_revenue: 12_500,
        active_customers: 234,
        pending_issues: 3,
    };

    assert_eq!(refresh::update_cards(&reports), 3);
    assert_eq!(
        first(r#"[data-stat="monthlyRevenue"]"#).text_content().unwrap(),
        "$12,500"
    );
    assert_eq!(
        first(r#"[data-stat="dailyOrders"]"#).text_content().unwrap(),
        "45"
    );
}

#[wasm_bindgen_test]
fn loading_state_restores_the_label() {
    set_body(r#"<button id="save">Save</button>"#);
    let button: HtmlButtonElement = first("#save").dyn_into().unwrap();

    loading::set_loading_state(&button, true);
    assert!(button.disabled());
    assert!(button.inner_html().contains("Loading..."));

    loading::set_loading_state(&button, true);
    loading::set_loading_state(&button, false);
    assert!(!button.disabled());
    assert_eq!(button.text_content().unwrap(), "Save");
    assert!(button.dataset().get("originalText").is_none());
}

#[wasm_bindgen_test]
fn loading_state_keeps_label_of_disabled_button() {
    set_body(r#"<button id="save" disabled>Save</button>"#);
    let button: HtmlButtonElement = first("#save").dyn_into().unwrap();

    loading::set_loading_state(&button, true);
    loading::set_loading_state(&button, false);

    assert_eq!(button.text_content().unwrap(), "Save");
}

#[wasm_bindgen_test]
fn ctrl_k_focuses_first_text_input() {
    set_body(
        r#"<input type="checkbox">
           <input type="text" id="first" placeholder="Search customers...">
           <input type="text" id="second">"#,
    );
    shortcuts::install();

    let init = KeyboardEventInit::new();
    init.set_key("k");
    init.set_ctrl_key(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    let doc = swash_ui::dom::document().unwrap();
    doc.dispatch_event(&event).unwrap();

    let focused = doc.active_element().unwrap();
    assert_eq!(focused.id(), "first");
}

#[wasm_bindgen_test]
fn tiles_are_wired_with_their_labels() {
    set_body(
        r#"<a class="tile-link" href="/orders"><i></i><span> Orders </span></a>
           <a class="tile-link" href="/sms"><span>Sms</span></a>"#,
    );

    assert_eq!(tiles::attach(), 2);
    assert_eq!(tiles::tile_label(&first(r#"a[href="/orders"]"#)), "Orders");

    let tile: HtmlElement = first(r#"a[href="/sms"]"#).dyn_into().unwrap();
    tile.add_event_listener_with_callback(
        "click",
        &Function::new_with_args("event", "event.preventDefault();"),
    )
    .unwrap();
    tile.click();
}

#[wasm_bindgen_test]
fn tooltips_need_bootstrap() {
    set_body(r#"<span data-bs-toggle="tooltip" title="Hi">?</span>"#);
    let window = swash_ui::dom::window().unwrap();

    assert_eq!(tooltips::activate(), 0);

    let tooltip = Function::new_with_args("el", "el.dataset.tooltipReady = 'yes';");
    let bootstrap = Object::new();
    Reflect::set(&bootstrap, &"Tooltip".into(), &tooltip).unwrap();
    Reflect::set(&window, &"bootstrap".into(), &bootstrap).unwrap();

    let activated = tooltips::activate();
    Reflect::delete_property(&window, &"bootstrap".into()).unwrap();

    assert_eq!(activated, 1);
    assert_eq!(
        first("[data-bs-toggle]").get_attribute("data-tooltip-ready").as_deref(),
        Some("yes")
    );
}

#[wasm_bindgen_test]
fn request_options_read_from_javascript() {
    let raw = js_sys::eval(
        r#"({ method: "post", headers: { "X-Trace": "1" }, body: { id: 7 } })"#,
    )
    .unwrap();

    let options = api::RequestOptions::from_js(&raw).unwrap();
    assert_eq!(options.method, api::HttpMethod::Post);
    assert_eq!(options.headers, vec![("X-Trace".to_string(), "1".to_string())]);
    assert_eq!(options.body.as_deref(), Some(r#"{"id":7}"#));

    assert_eq!(
        api::RequestOptions::from_js(&JsValue::UNDEFINED).unwrap(),
        api::RequestOptions::default()
    );
    assert!(api::RequestOptions::from_js(&js_sys::eval(r#"({ method: "TRACE" })"#).unwrap()).is_err());
}
