pub mod account_view;
pub mod admin_items_view;
pub mod app;
pub mod category_bar;
pub mod inventory_view;
pub mod item_grid;
pub mod item_stats;
pub mod shop_view;

use crate::model::{EconomyAction, EconomyState, ServerResponse};
use crate::notifications::Notifier;
use crate::state::{CategoryFilter, ListKind};
use yew::prelude::*;

/// Popups first, then the whole response goes into the reducer in one step.
pub(crate) fn economy_updates(
    economy: &UseReducerHandle<EconomyState>,
    notifier: Notifier,
) -> Callback<ServerResponse> {
    let dispatcher = economy.dispatcher();
    Callback::from(move |resp: ServerResponse| {
        notifier.surface(&resp);
        dispatcher.dispatch(EconomyAction::ApplyResponse(resp));
    })
}

pub(crate) fn select_category(
    economy: &UseReducerHandle<EconomyState>,
    list: ListKind,
) -> Callback<CategoryFilter> {
    let dispatcher = economy.dispatcher();
    Callback::from(move |filter: CategoryFilter| {
        dispatcher.dispatch(EconomyAction::SelectCategory { list, filter })
    })
}
