use crate::dom::js_error_message;
use crate::state::{Tooltip, tooltip_position};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

/// What the `item-stats` box currently shows. Content outlives visibility so
/// the box does not empty itself while fading out.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HoverState {
    pub tooltip: Option<Tooltip>,
    pub visible: bool,
}

impl HoverState {
    pub fn apply(&self, hovered: Option<Tooltip>) -> Self {
        match hovered {
            Some(tooltip) => Self {
                tooltip: Some(tooltip),
                visible: true,
            },
            None => Self {
                tooltip: self.tooltip.clone(),
                visible: false,
            },
        }
    }
}

impl Reducible for HoverState {
    /// `Some` on mouseover, `None` on mouseout.
    type Action = Option<Tooltip>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// Tooltip body, rendered into whatever node hosts it.
#[derive(Properties, PartialEq, Clone)]
pub struct TooltipBodyProps {
    pub tooltip: Tooltip,
}

#[function_component(TooltipBody)]
pub fn tooltip_body(props: &TooltipBodyProps) -> Html {
    let tip = &props.tooltip;
    html! {
        <>
            { if let Some(reason) = &tip.reason {
                html! { <><span class={reason.class}>{ reason.text.clone() }</span><br/><br/></> }
            } else { html! {} } }
            <span class="name">{ tip.caption.clone() }</span>
            <br/><br/>
            <span class="description">{ tip.description.clone() }</span>
            <br/><br/>
            <ul>
                { for tip.stats.iter().map(|line| html! { <li>{ line.clone() }</li> }) }
            </ul>
            <br/>
            { if let Some(price) = &tip.price {
                html! { <span class="price">{ price.clone() }</span> }
            } else { html! {} } }
        </>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ItemStatsProps {
    /// The page's `#item-stats` node.
    pub host: Element,
    pub hover: HoverState,
    pub offset_x: i32,
    pub offset_y: i32,
}

/// Fills `#item-stats`, toggles its `visible` class and keeps it next to the
/// pointer wherever the pointer moves on the page.
#[function_component(ItemStats)]
pub fn item_stats(props: &ItemStatsProps) -> Html {
    // Follow the pointer
    {
        let host = props.host.clone();
        let (offset_x, offset_y) = (props.offset_x, props.offset_y);
        use_effect_with((), move |_| {
            let document = web_sys::window().and_then(|w| w.document());
            let listener = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                let Some(el) = host.dyn_ref::<HtmlElement>() else { return };
                let (top, left) = tooltip_position(e.screen_x(), e.screen_y(), offset_x, offset_y);
                let style = el.style();
                let moved = style
                    .set_property("top", &format!("{top}px"))
                    .and_then(|()| style.set_property("left", &format!("{left}px")));
                if let Err(err) = moved {
                    log::warn!("could not move tooltip: {}", js_error_message(&err));
                }
            }) as Box<dyn FnMut(web_sys::MouseEvent)>);
            if let Some(doc) = &document {
                if let Err(err) = doc
                    .add_event_listener_with_callback("mousemove", listener.as_ref().unchecked_ref())
                {
                    log::warn!("tooltip will not follow the pointer: {}", js_error_message(&err));
                }
            }
            move || {
                if let Some(doc) = document {
                    if let Err(err) = doc.remove_event_listener_with_callback(
                        "mousemove",
                        listener.as_ref().unchecked_ref(),
                    ) {
                        log::warn!("mousemove listener left attached: {}", js_error_message(&err));
                    }
                }
                drop(listener);
            }
        });
    }

    {
        let host = props.host.clone();
        use_effect_with(props.hover.visible, move |visible| {
            let classes = host.class_list();
            let toggled = if *visible {
                classes.add_1("visible")
            } else {
                classes.remove_1("visible")
            };
            if let Err(err) = toggled {
                log::warn!("could not toggle tooltip visibility: {}", js_error_message(&err));
            }
            || ()
        });
    }

    let body = match &props.hover.tooltip {
        Some(tooltip) => html! { <TooltipBody tooltip={tooltip.clone()} /> },
        None => html! {},
    };
    yew::create_portal(body, props.host.clone())
}
