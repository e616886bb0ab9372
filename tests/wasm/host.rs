//! Host page fixtures: bare DOM nodes plus a scripted `motdPlayer` object.

use arcjail_motd::channel::MotdPlayer;
use arcjail_motd::dom;
use gloo_timers::future::TimeoutFuture;
use js_sys::{Function, JSON, Object, Reflect};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, HtmlInputElement};

#[derive(Default)]
struct Traffic {
    retargeted: Vec<String>,
    posted: Vec<Value>,
    replies: VecDeque<Value>,
}

/// Stand-in for the host's `motdPlayer`: every retarget succeeds, posts are
/// recorded and answered from a queue. An empty queue leaves a post unanswered.
#[derive(Clone, Default)]
pub struct FakePlayer {
    traffic: Rc<RefCell<Traffic>>,
}

impl FakePlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, response: Value) {
        self.traffic.borrow_mut().replies.push_back(response);
    }

    pub fn retargeted(&self) -> Vec<String> {
        self.traffic.borrow().retargeted.clone()
    }

    pub fn posted(&self) -> Vec<Value> {
        self.traffic.borrow().posted.clone()
    }

    pub fn actions(&self) -> Vec<String> {
        self.posted()
            .iter()
            .filter_map(|p| p["action"].as_str().map(str::to_string))
            .collect()
    }

    pub fn motd_player(&self) -> MotdPlayer {
        let object = Object::new();

        let traffic = self.traffic.clone();
        let retarget = Closure::<dyn FnMut(String, Function, Function)>::new(
            move |name: String, on_ready: Function, _on_error: Function| {
                traffic.borrow_mut().retargeted.push(name);
                on_ready.call0(&JsValue::NULL).expect("on_ready");
            },
        );
        Reflect::set(&object, &"retarget".into(), retarget.as_ref()).expect("set retarget");
        retarget.forget();

        let traffic = self.traffic.clone();
        let post = Closure::<dyn FnMut(JsValue, Function, Function)>::new(
            move |payload: JsValue, on_success: Function, _on_error: Function| {
                let payload: Value =
                    serde_wasm_bindgen::from_value(payload).expect("payload is plain data");
                let reply = {
                    let mut traffic = traffic.borrow_mut();
                    traffic.posted.push(payload);
                    traffic.replies.pop_front()
                };
                if let Some(reply) = reply {
                    let data = JSON::parse(&reply.to_string()).expect("reply json");
                    on_success.call1(&JsValue::NULL, &data).expect("on_success");
                }
            },
        );
        Reflect::set(&object, &"post".into(), post.as_ref()).expect("set post");
        post.forget();

        object.unchecked_into()
    }
}

pub fn blank_page() {
    let body = dom::document().expect("document").body().expect("body");
    body.set_inner_html("");
}

/// Empties `<body>` and adds the given host nodes. Divs start with placeholder
/// text so binding can be seen clearing them.
pub fn host_page(divs: &[&str], inputs: &[&str], buttons: &[&str]) {
    blank_page();
    let doc = dom::document().expect("document");
    let body = doc.body().expect("body");
    for (tag, ids) in [("div", divs), ("input", inputs), ("button", buttons)] {
        for id in ids {
            let el = doc.create_element(tag).expect("create node");
            el.set_id(id);
            if tag == "div" {
                el.set_text_content(Some("loading"));
            }
            body.append_child(&el).expect("append node");
        }
    }
}

pub fn node(id: &str) -> Element {
    dom::document()
        .expect("document")
        .get_element_by_id(id)
        .unwrap_or_else(|| panic!("#{id} exists"))
}

pub fn text(id: &str) -> String {
    node(id).text_content().unwrap_or_default()
}

pub fn by_class(parent: &Element, class: &str) -> Vec<HtmlElement> {
    let found = parent.get_elements_by_class_name(class);
    (0..found.length())
        .filter_map(|i| found.item(i))
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn tiles(id: &str) -> Vec<HtmlElement> {
    by_class(&node(id), "item-container")
}

pub fn popup_count(class: &str) -> u32 {
    dom::document()
        .expect("document")
        .get_elements_by_class_name(class)
        .length()
}

pub fn set_input(id: &str, value: &str) {
    node(id)
        .dyn_into::<HtmlInputElement>()
        .expect("input element")
        .set_value(value);
}

pub fn click(id: &str) {
    node(id)
        .dyn_into::<HtmlElement>()
        .expect("html element")
        .click();
}

/// Lets yew render and run effects.
pub async fn settle() {
    TimeoutFuture::new(30).await;
}
