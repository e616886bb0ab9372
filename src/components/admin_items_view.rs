use super::economy_updates;
use super::item_grid::ItemGrid;
use super::item_stats::{HoverState, ItemStats};
use crate::config::MotdConfig;
use crate::controller::Controller;
use crate::dom;
use crate::error::{ChannelError, MotdError};
use crate::model::{EconomyState, Request, ServerResponse, WireId};
use crate::notifications::{Notifier, PopupKind};
use crate::state::{TileMode, Tooltip};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct AdminNodes {
    pub item_stats: Element,
    pub inventory_container: Element,
    pub view_steamid: HtmlInputElement,
    pub view_submit: HtmlElement,
    pub give_steamid: HtmlInputElement,
    pub give_class_id: HtmlInputElement,
    pub give_instance_id: HtmlInputElement,
    pub give_amount: HtmlInputElement,
    pub give_submit: HtmlElement,
}

impl AdminNodes {
    pub fn bind(document: &Document) -> Result<Self, MotdError> {
        Ok(Self {
            item_stats: dom::bind_element(document, "item-stats")?,
            inventory_container: dom::bind_element(document, "inventory-container")?,
            view_steamid: dom::bind_input(document, "view-inventory-steamid")?,
            view_submit: dom::bind_html(document, "view-inventory-submit")?,
            give_steamid: dom::bind_input(document, "give-item-steamid")?,
            give_class_id: dom::bind_input(document, "give-item-classid")?,
            give_instance_id: dom::bind_input(document, "give-item-instanceid")?,
            give_amount: dom::bind_input(document, "give-item-amount")?,
            give_submit: dom::bind_html(document, "give-item-submit")?,
        })
    }

    /// Reads the give-item form. `Err` carries the text of the local error popup.
    fn give_item_request(&self) -> Result<Request, String> {
        let amount = parse_amount(&self.give_amount.value())
            .ok_or_else(|| "Amount must be a positive whole number".to_string())?;
        Ok(Request::GiveItem {
            steamid: self.give_steamid.value().trim().to_string(),
            class_id: WireId::Text(self.give_class_id.value().trim().to_string()),
            instance_id: WireId::Text(self.give_instance_id.value().trim().to_string()),
            amount,
        })
    }
}

pub fn parse_amount(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok().filter(|amount| *amount > 0)
}

#[hook]
fn use_click(target: &HtmlElement, on_click: Callback<()>) {
    let target = target.clone();
    use_effect_with((), move |_| {
        let listener = Closure::wrap(Box::new(move |_: web_sys::Event| on_click.emit(()))
            as Box<dyn FnMut(web_sys::Event)>);
        if let Err(err) =
            target.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
        {
            log::error!("could not listen for clicks: {}", dom::js_error_message(&err));
        }
        move || {
            if let Err(err) = target
                .remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            {
                log::warn!("click listener left attached: {}", dom::js_error_message(&err));
            }
            drop(listener);
        }
    });
}

#[derive(Properties, PartialEq, Clone)]
pub struct AdminItemsScreenProps {
    pub controller: Controller,
    pub config: Rc<MotdConfig>,
    pub nodes: AdminNodes,
}

/// Offline item management: look up a player's inventory, grant items.
#[function_component(AdminItemsScreen)]
pub fn admin_items_screen(props: &AdminItemsScreenProps) -> Html {
    let economy = use_reducer(EconomyState::default);
    let hover = use_reducer(HoverState::default);
    let config = &props.config;
    let notifier = Notifier::from_config(config);

    {
        let controller = props.controller.clone();
        let channel = config.channels.admin_items.clone();
        use_effect_with((), move |_| {
            controller.start(&channel, None, Callback::noop());
            || ()
        });
    }

    let on_view = {
        let controller = props.controller.clone();
        let input = props.nodes.view_steamid.clone();
        let on_response = economy_updates(&economy, notifier);
        Callback::from(move |()| {
            let request = Request::ViewInventory {
                steamid: input.value().trim().to_string(),
            };
            controller.send(&request, ChannelError::Request, on_response.clone());
        })
    };
    use_click(&props.nodes.view_submit, on_view);

    let on_give = {
        let controller = props.controller.clone();
        let nodes = props.nodes.clone();
        Callback::from(move |()| match nodes.give_item_request() {
            Ok(request) => {
                log::info!("granting items: {request:?}");
                let on_response =
                    Callback::from(move |resp: ServerResponse| notifier.surface(&resp));
                controller.send(&request, ChannelError::Request, on_response);
            }
            Err(reason) => {
                log::warn!("give-item not sent: {reason}");
                if let Err(err) = notifier.show(PopupKind::Error, &reason) {
                    log::error!("popup `{reason}` not shown: {err}");
                }
            }
        })
    };
    use_click(&props.nodes.give_submit, on_give);

    let on_hover = {
        let hover = hover.dispatcher();
        Callback::from(move |tip: Option<Tooltip>| hover.dispatch(tip))
    };

    let nodes = &props.nodes;
    let grid = if economy.inventory_received {
        yew::create_portal(
            html! {
                <ItemGrid
                    items={economy.inventory_items.clone()}
                    mode={TileMode::Admin}
                    row_length={config.admin_row_length}
                    icon_base_url={AttrValue::from(config.icon_base_url.clone())}
                    {on_hover} />
            },
            nodes.inventory_container.clone(),
        )
    } else {
        html! {}
    };

    html! {
        <>
            { grid }
            <ItemStats
                host={nodes.item_stats.clone()}
                hover={(*hover).clone()}
                offset_x={config.tooltip_offset_x}
                offset_y={config.tooltip_offset_y} />
        </>
    }
}
