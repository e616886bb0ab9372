use crate::model::{Category, Item, WireId};

/// Active category of one item list. Starts at "all" and is never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(WireId),
}

impl CategoryFilter {
    pub fn admits(&self, item: &Item) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(id) => item.category_id.as_ref() == Some(id),
        }
    }

    pub fn selects(&self, category: &Category) -> bool {
        matches!(self, CategoryFilter::Only(id) if *id == category.id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListKind {
    Shop,
    Inventory,
}

/// Categories offered in the button bar of `list`.
/// The shop bar skips categories flagged `hide_from_shop`.
pub fn visible_categories(
    categories: &[Category],
    list: ListKind,
) -> impl Iterator<Item = &Category> {
    categories
        .iter()
        .filter(move |c| list == ListKind::Inventory || !c.hide_from_shop)
}
