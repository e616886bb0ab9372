use super::account_view::{AccountNodes, AccountScreen};
use super::admin_items_view::{AdminItemsScreen, AdminNodes};
use super::inventory_view::{InventoryNodes, InventoryScreen};
use super::shop_view::{ShopNodes, ShopScreen};
use crate::config::MotdConfig;
use crate::controller::Controller;
use crate::error::MotdError;
use std::rc::Rc;
use std::str::FromStr;
use web_sys::Document;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Account,
    Shop,
    Inventory,
    AdminItems,
}

impl FromStr for Screen {
    type Err = MotdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "account" => Ok(Screen::Account),
            "shop" => Ok(Screen::Shop),
            "inventory" => Ok(Screen::Inventory),
            "su-offline-items" | "admin-items" => Ok(Screen::AdminItems),
            other => Err(MotdError::UnknownScreen(other.to_string())),
        }
    }
}

/// Host nodes of one screen, looked up (and emptied) before anything renders.
#[derive(Clone, Debug, PartialEq)]
pub enum ScreenBinding {
    Account(AccountNodes),
    Shop(ShopNodes),
    Inventory(InventoryNodes),
    AdminItems(AdminNodes),
}

impl ScreenBinding {
    pub fn bind(screen: Screen, document: &Document) -> Result<Self, MotdError> {
        Ok(match screen {
            Screen::Account => ScreenBinding::Account(AccountNodes::bind(document)?),
            Screen::Shop => ScreenBinding::Shop(ShopNodes::bind(document)?),
            Screen::Inventory => ScreenBinding::Inventory(InventoryNodes::bind(document)?),
            Screen::AdminItems => ScreenBinding::AdminItems(AdminNodes::bind(document)?),
        })
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ScreenRootProps {
    pub binding: ScreenBinding,
    pub controller: Controller,
    pub config: Rc<MotdConfig>,
}

#[function_component(ScreenRoot)]
pub fn screen_root(props: &ScreenRootProps) -> Html {
    let controller = props.controller.clone();
    let config = props.config.clone();
    match &props.binding {
        ScreenBinding::Account(nodes) => html! {
            <AccountScreen
                {controller}
                channel_name={AttrValue::from(config.channels.account.clone())}
                nodes={nodes.clone()} />
        },
        ScreenBinding::Shop(nodes) => html! {
            <ShopScreen {controller} {config} nodes={nodes.clone()} />
        },
        ScreenBinding::Inventory(nodes) => html! {
            <InventoryScreen {controller} {config} nodes={nodes.clone()} />
        },
        ScreenBinding::AdminItems(nodes) => html! {
            <AdminItemsScreen {controller} {config} nodes={nodes.clone()} />
        },
    }
}
