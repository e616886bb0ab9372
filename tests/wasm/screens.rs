use crate::host::{
    FakePlayer, by_class, click, host_page, node, popup_count, set_input, settle, text, tiles,
};
use serde_json::json;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

const SHOP_NODES: [&str; 6] = [
    "current-account",
    "categories-shop",
    "categories-inventory",
    "items-container",
    "inventory-container",
    "item-stats",
];

const ADMIN_INPUTS: [&str; 5] = [
    "view-inventory-steamid",
    "give-item-steamid",
    "give-item-classid",
    "give-item-instanceid",
    "give-item-amount",
];

fn mount(screen: &str, player: &FakePlayer) {
    arcjail_motd::mount(screen, player.motd_player(), JsValue::UNDEFINED).expect("mount");
}

#[wasm_bindgen_test]
async fn account_screen_shows_account_verbatim() {
    host_page(&["current-account"], &[], &[]);
    let player = FakePlayer::new();
    player.reply(json!({"account": "1,250"}));
    mount("account", &player);
    settle().await;

    assert_eq!(player.retargeted(), vec!["json-account"]);
    assert_eq!(player.actions(), vec!["init"]);
    assert_eq!(text("current-account"), "1,250");
}

#[wasm_bindgen_test]
async fn shop_buys_from_shop_grid_and_uses_from_inventory() {
    host_page(&SHOP_NODES, &[], &[]);
    let player = FakePlayer::new();
    player.reply(json!({
        "account": 300,
        "account_formatted": "300",
        "categories": [{"id": "medical", "caption": "Medical"}],
        "shop_items": [
            {"class_id": "kit", "instance_id": "small", "price": 100, "category_id": "medical"},
            {"class_id": "knife", "instance_id": "default", "price": 500, "category_id": "medical"}
        ],
        "inventory_items": [
            {"class_id": "radio", "instance_id": "default", "amount": 2, "category_id": "medical"}
        ]
    }));
    mount("shop", &player);
    settle().await;

    assert_eq!(player.retargeted(), vec!["json-shop"]);
    assert_eq!(player.actions(), vec!["update"]);
    assert_eq!(text("current-account"), "300c");
    assert_eq!(tiles("items-container").len(), 2);
    assert_eq!(tiles("inventory-container").len(), 1);
    assert_eq!(by_class(&node("categories-shop"), "category-button").len(), 1);
    assert!(!text("item-stats").contains("loading"));

    player.reply(json!({"account": 200, "account_formatted": "200", "popup_notify": "Bought"}));
    tiles("items-container")[0].click();
    settle().await;
    let posted = player.posted();
    assert_eq!(posted[1]["action"], "buy");
    assert_eq!(posted[1]["class_id"], "kit");
    assert_eq!(posted[1]["instance_id"], "small");
    assert_eq!(text("current-account"), "200c");
    assert_eq!(popup_count("popup-notification"), 1);

    // 500 is now out of reach
    tiles("items-container")[1].click();
    settle().await;
    assert_eq!(player.actions(), vec!["update", "buy"]);

    tiles("inventory-container")[0].click();
    settle().await;
    let posted = player.posted();
    assert_eq!(posted[2]["action"], "use");
    assert_eq!(posted[2]["class_id"], "radio");
}

fn inventory_reply() -> serde_json::Value {
    json!({
        "account": 40,
        "account_formatted": "40",
        "categories": [
            {"id": "medical", "caption": "Medical"},
            {"id": "weapons", "caption": "Weapons"}
        ],
        "inventory_items": [
            {"class_id": "kit", "instance_id": "small", "amount": 1, "category_id": "medical"},
            {"class_id": "knife", "instance_id": "default", "amount": 3, "category_id": "weapons"}
        ]
    })
}

#[wasm_bindgen_test]
async fn inventory_renders_without_category_node() {
    host_page(&["current-account", "inventory-container", "item-stats"], &[], &[]);
    let player = FakePlayer::new();
    player.reply(inventory_reply());
    mount("inventory", &player);
    settle().await;

    assert_eq!(player.retargeted(), vec!["json-shop"]);
    assert_eq!(player.actions(), vec!["update"]);
    assert_eq!(text("current-account"), "40c");
    assert_eq!(tiles("inventory-container").len(), 2);
}

#[wasm_bindgen_test]
async fn inventory_category_bar_filters_when_present() {
    host_page(
        &["current-account", "categories-inventory", "inventory-container", "item-stats"],
        &[],
        &[],
    );
    let player = FakePlayer::new();
    player.reply(inventory_reply());
    mount("inventory", &player);
    settle().await;

    let buttons = by_class(&node("categories-inventory"), "category-button");
    assert_eq!(buttons.len(), 2);
    buttons[1].click();
    settle().await;

    let shown = tiles("inventory-container");
    assert_eq!(shown.len(), 1);
    assert!(shown[0].text_content().unwrap_or_default().contains("x3"));
    assert_eq!(
        by_class(&node("categories-inventory"), "active").len(),
        1,
        "only the weapons button is active"
    );
}

#[wasm_bindgen_test]
async fn admin_rejects_bad_amount_locally() {
    host_page(
        &["item-stats", "inventory-container"],
        &ADMIN_INPUTS,
        &["view-inventory-submit", "give-item-submit"],
    );
    let player = FakePlayer::new();
    mount("su-offline-items", &player);
    settle().await;
    assert_eq!(player.retargeted(), vec!["ajax-su-offline-items"]);
    assert!(player.posted().is_empty());

    set_input("give-item-steamid", "STEAM_1:0:42");
    set_input("give-item-classid", "healthkit");
    set_input("give-item-instanceid", "small");
    set_input("give-item-amount", "0");
    click("give-item-submit");
    settle().await;
    assert!(player.posted().is_empty());
    assert_eq!(popup_count("popup-error"), 1);

    set_input("give-item-amount", " 2 ");
    player.reply(json!({"popup_notify": "Item given"}));
    click("give-item-submit");
    settle().await;
    let posted = player.posted();
    assert_eq!(posted.len(), 1);
    assert_eq!(posted[0]["action"], "give-item");
    assert_eq!(posted[0]["steamid"], "STEAM_1:0:42");
    assert_eq!(posted[0]["class_id"], "healthkit");
    assert_eq!(posted[0]["instance_id"], "small");
    assert_eq!(posted[0]["amount"].as_f64(), Some(2.0));
    assert_eq!(popup_count("popup-notification"), 1);
    // A popup-only answer leaves the grid unrendered
    assert_eq!(node("inventory-container").child_element_count(), 0);
}

#[wasm_bindgen_test]
async fn admin_grid_appears_after_view_inventory() {
    host_page(
        &["item-stats", "inventory-container"],
        &ADMIN_INPUTS,
        &["view-inventory-submit", "give-item-submit"],
    );
    let player = FakePlayer::new();
    mount("admin-items", &player);
    settle().await;
    assert_eq!(node("inventory-container").child_element_count(), 0);

    set_input("view-inventory-steamid", "STEAM_1:1:7");
    player.reply(json!({
        "inventory_items": [{"class_id": "healthkit", "instance_id": "small", "amount": 2}]
    }));
    click("view-inventory-submit");
    settle().await;

    assert_eq!(player.actions(), vec!["view-inventory"]);
    assert_eq!(player.posted()[0]["steamid"], "STEAM_1:1:7");
    let shown = tiles("inventory-container");
    assert_eq!(shown.len(), 1);
    assert!(shown[0].text_content().unwrap_or_default().contains("x2"));

    // Read-only tiles
    shown[0].click();
    settle().await;
    assert_eq!(player.posted().len(), 1);
}

#[wasm_bindgen_test]
fn mount_fails_before_touching_the_channel() {
    host_page(&["current-account"], &[], &[]);
    let player = FakePlayer::new();
    assert!(arcjail_motd::mount("shop", player.motd_player(), JsValue::UNDEFINED).is_err());
    assert!(arcjail_motd::mount("casino", player.motd_player(), JsValue::UNDEFINED).is_err());
    assert!(player.retargeted().is_empty());
}
