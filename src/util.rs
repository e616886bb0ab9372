// Small text helpers shared by the screens

/// Balance label shown in `#current-account` on the shop and inventory screens.
pub fn balance_text(formatted: &str) -> String {
    format!("{formatted}c")
}

/// Popup and reason fields count only when they carry text.
pub fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}
