use crate::model::Category;
use crate::state::{CategoryFilter, ListKind, visible_categories};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CategoryBarProps {
    pub categories: Vec<Category>,
    pub list: ListKind,
    pub active: CategoryFilter,
    pub on_select: Callback<CategoryFilter>,
    /// Leading button that resets the filter. Omitted when `None`.
    #[prop_or_default]
    pub all_caption: Option<AttrValue>,
}

#[function_component(CategoryBar)]
pub fn category_bar(props: &CategoryBarProps) -> Html {
    let button = |caption: AttrValue, filter: CategoryFilter, active: bool| {
        let cb = props.on_select.clone();
        let onclick = Callback::from(move |_: MouseEvent| cb.emit(filter.clone()));
        html! {
            <input
                type="button"
                value={caption}
                class={classes!("category-button", active.then_some("active"))}
                {onclick} />
        }
    };

    let all = props.all_caption.clone().map(|caption| {
        button(
            caption,
            CategoryFilter::All,
            props.active == CategoryFilter::All,
        )
    });

    html! {
        <>
            { all.unwrap_or_default() }
            { for visible_categories(&props.categories, props.list).map(|category| {
                button(
                    AttrValue::from(category.caption.clone()),
                    CategoryFilter::Only(category.id.clone()),
                    props.active.selects(category),
                )
            }) }
        </>
    }
}
