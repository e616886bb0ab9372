use crate::host::blank_page;
use arcjail_motd::dom;
use arcjail_motd::model::ServerResponse;
use arcjail_motd::notifications::{Notifier, PopupKind};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

fn popups(class: &str) -> Vec<HtmlElement> {
    let doc = dom::document().expect("document");
    let found = doc.get_elements_by_class_name(class);
    (0..found.length())
        .filter_map(|i| found.item(i))
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn quick() -> Notifier {
    Notifier {
        fade_after_ms: 20,
        remove_after_ms: 60,
    }
}

#[wasm_bindgen_test]
async fn popup_fades_then_leaves() {
    blank_page();
    quick()
        .show(PopupKind::Notify, "Purchased Health kit")
        .expect("popup shown");
    let shown = popups("popup-notification");
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].text_content().as_deref(), Some("Purchased Health kit"));
    assert_eq!(shown[0].style().get_property_value("opacity").ok().as_deref(), Some("1"));

    TimeoutFuture::new(35).await;
    assert_eq!(shown[0].style().get_property_value("opacity").ok().as_deref(), Some("0"));

    TimeoutFuture::new(60).await;
    assert!(popups("popup-notification").is_empty());
}

#[wasm_bindgen_test]
async fn response_popups_show_notify_before_error() {
    blank_page();
    let response = ServerResponse {
        popup_notify: Some("Item given".into()),
        popup_error: Some("Inventory full".into()),
        ..Default::default()
    };
    quick().surface(&response);

    let body = dom::document().expect("document").body().expect("body");
    let text = body.inner_html();
    let notify = text.find("Item given").expect("notify popup");
    let error = text.find("Inventory full").expect("error popup");
    assert!(notify < error);

    TimeoutFuture::new(100).await;
    assert!(popups("popup-error").is_empty());
}

#[wasm_bindgen_test]
fn empty_popup_text_is_ignored() {
    blank_page();
    let response = ServerResponse {
        popup_error: Some(String::new()),
        ..Default::default()
    };
    quick().surface(&response);
    assert!(popups("popup-error").is_empty());
}
