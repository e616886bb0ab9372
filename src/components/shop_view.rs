use super::category_bar::CategoryBar;
use super::item_grid::ItemGrid;
use super::item_stats::{HoverState, ItemStats};
use super::{economy_updates, select_category};
use crate::config::MotdConfig;
use crate::controller::Controller;
use crate::dom;
use crate::error::{ChannelError, MotdError};
use crate::model::{EconomyState, Request};
use crate::notifications::Notifier;
use crate::state::{ListKind, TileMode, Tooltip};
use crate::util::balance_text;
use std::rc::Rc;
use web_sys::{Document, Element};
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct ShopNodes {
    pub current_account: Element,
    pub categories_shop: Element,
    pub categories_inventory: Element,
    pub items_container: Element,
    pub inventory_container: Element,
    pub item_stats: Element,
}

impl ShopNodes {
    pub fn bind(document: &Document) -> Result<Self, MotdError> {
        Ok(Self {
            current_account: dom::bind_element(document, "current-account")?,
            categories_shop: dom::bind_element(document, "categories-shop")?,
            categories_inventory: dom::bind_element(document, "categories-inventory")?,
            items_container: dom::bind_element(document, "items-container")?,
            inventory_container: dom::bind_element(document, "inventory-container")?,
            item_stats: dom::bind_element(document, "item-stats")?,
        })
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ShopScreenProps {
    pub controller: Controller,
    pub config: Rc<MotdConfig>,
    pub nodes: ShopNodes,
}

/// Shop and inventory side by side. Buying and using both re-render from the
/// full response.
#[function_component(ShopScreen)]
pub fn shop_screen(props: &ShopScreenProps) -> Html {
    let economy = use_reducer(EconomyState::default);
    let hover = use_reducer(HoverState::default);
    let config = &props.config;

    let on_response = economy_updates(&economy, Notifier::from_config(config));

    {
        let controller = props.controller.clone();
        let channel = config.channels.shop.clone();
        let on_response = on_response.clone();
        use_effect_with((), move |_| {
            controller.start(&channel, Some(Request::Update), on_response);
            || ()
        });
    }

    let on_activate = {
        let controller = props.controller.clone();
        Callback::from(move |request: Request| {
            log::info!("{} requested", request.action());
            controller.send(&request, ChannelError::Purchase, on_response.clone());
        })
    };
    let on_hover = {
        let hover = hover.dispatcher();
        Callback::from(move |tip: Option<Tooltip>| hover.dispatch(tip))
    };

    let nodes = &props.nodes;
    let stats = html! {
        <ItemStats
            host={nodes.item_stats.clone()}
            hover={(*hover).clone()}
            offset_x={config.tooltip_offset_x}
            offset_y={config.tooltip_offset_y} />
    };
    if economy.version == 0 {
        return html! { <>{ stats }</> };
    }

    let all_caption = config.all_caption.clone().map(AttrValue::from);
    let icon_base_url = AttrValue::from(config.icon_base_url.clone());
    let balance = economy
        .account_formatted
        .as_deref()
        .map(balance_text)
        .unwrap_or_default();

    html! {
        <>
            { stats }
            { yew::create_portal(html! { { balance } }, nodes.current_account.clone()) }
            { yew::create_portal(html! {
                <CategoryBar
                    categories={economy.categories.clone()}
                    list={ListKind::Shop}
                    active={economy.active(ListKind::Shop).clone()}
                    on_select={select_category(&economy, ListKind::Shop)}
                    all_caption={all_caption.clone()} />
            }, nodes.categories_shop.clone()) }
            { yew::create_portal(html! {
                <CategoryBar
                    categories={economy.categories.clone()}
                    list={ListKind::Inventory}
                    active={economy.active(ListKind::Inventory).clone()}
                    on_select={select_category(&economy, ListKind::Inventory)}
                    {all_caption} />
            }, nodes.categories_inventory.clone()) }
            { yew::create_portal(html! {
                <ItemGrid
                    items={economy.shop_items.clone()}
                    filter={economy.active_shop.clone()}
                    mode={TileMode::Shop { account: economy.account }}
                    row_length={config.row_length}
                    icon_base_url={icon_base_url.clone()}
                    on_hover={on_hover.clone()}
                    on_activate={on_activate.clone()} />
            }, nodes.items_container.clone()) }
            { yew::create_portal(html! {
                <ItemGrid
                    items={economy.inventory_items.clone()}
                    filter={economy.active_inventory.clone()}
                    mode={TileMode::Inventory}
                    row_length={config.row_length}
                    {icon_base_url}
                    {on_hover}
                    {on_activate} />
            }, nodes.inventory_container.clone()) }
        </>
    }
}
