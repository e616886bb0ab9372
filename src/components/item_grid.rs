use crate::model::{Item, Request};
use crate::state::{Badge, CategoryFilter, TileMode, TileSlot, Tooltip, layout_tiles};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ItemGridProps {
    pub items: Vec<Item>,
    #[prop_or_default]
    pub filter: CategoryFilter,
    pub mode: TileMode,
    pub row_length: usize,
    pub icon_base_url: AttrValue,
    /// `Some` on mouseover, `None` on mouseout.
    pub on_hover: Callback<Option<Tooltip>>,
    #[prop_or_default]
    pub on_activate: Callback<Request>,
}

#[function_component(ItemGrid)]
pub fn item_grid(props: &ItemGridProps) -> Html {
    let slots = layout_tiles(&props.items, &props.filter, props.row_length);
    html! {
        <>
            { for slots.into_iter().enumerate().map(|(pos, slot)| match slot {
                TileSlot::RowBreak => html! { <div key={format!("clear-{pos}")} class="clear"></div> },
                TileSlot::Tile(index) => render_tile(props, index),
            }) }
        </>
    }
}

fn render_tile(props: &ItemGridProps, index: usize) -> Html {
    let item = &props.items[index];
    let mode = props.mode;

    let blocked_class = mode
        .blocking_reason(item)
        .and_then(|_| mode.blocked_class());
    let style = format!(
        "background-image: url(\"{}{}\")",
        props.icon_base_url, item.icon
    );

    let onclick = mode.action(item).map(|request| {
        let cb = props.on_activate.clone();
        Callback::from(move |_: MouseEvent| cb.emit(request.clone()))
    });
    let onmouseover = {
        let cb = props.on_hover.clone();
        let tooltip = Tooltip::for_item(item, mode);
        Callback::from(move |_: MouseEvent| cb.emit(Some(tooltip.clone())))
    };
    let onmouseout = {
        let cb = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| cb.emit(None))
    };

    let badge = match mode.badge(item) {
        Badge::Price {
            text,
            too_expensive,
        } => html! {
            <div class={classes!("price-tag", too_expensive.then_some("too-expensive"))}>{ text }</div>
        },
        Badge::Amount(text) => html! { <div class="amount">{ text }</div> },
    };

    html! {
        <div
            key={format!("item-{index}")}
            class={classes!("item-container", blocked_class)}
            style={style}
            {onclick}
            {onmouseover}
            {onmouseout}>
            { badge }
        </div>
    }
}
