use crate::controller::Controller;
use crate::dom;
use crate::error::MotdError;
use crate::model::{Request, ServerResponse};
use web_sys::{Document, Element};
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct AccountNodes {
    pub current_account: Element,
}

impl AccountNodes {
    pub fn bind(document: &Document) -> Result<Self, MotdError> {
        Ok(Self {
            current_account: dom::bind_element(document, "current-account")?,
        })
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct AccountScreenProps {
    pub controller: Controller,
    pub channel_name: AttrValue,
    pub nodes: AccountNodes,
}

/// Balance-only screen. Shows the server's `account` text verbatim.
#[function_component(AccountScreen)]
pub fn account_screen(props: &AccountScreenProps) -> Html {
    let account = use_state(|| None::<String>);

    {
        let controller = props.controller.clone();
        let channel_name = props.channel_name.clone();
        let account = account.clone();
        use_effect_with((), move |_| {
            let on_response = Callback::from(move |resp: ServerResponse| {
                if let Some(value) = resp.account {
                    account.set(Some(value.to_string()));
                }
            });
            controller.start(&channel_name, Some(Request::Init), on_response);
            || ()
        });
    }

    let text = (*account).clone().unwrap_or_default();
    yew::create_portal(html! { { text } }, props.nodes.current_account.clone())
}
