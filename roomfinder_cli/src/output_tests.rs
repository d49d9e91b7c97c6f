use super::*;

use roomfinder_lib::types::BookingStatus;

fn load_bookings_fixture() -> Vec<Booking> {
    let json_str = include_str!("../../roomfinder_api/tests/fixtures/bookings_flat.json");
    let resp: serde_json::Value = serde_json::from_str(json_str).unwrap();
    serde_json::from_value(resp["bookings"].clone()).unwrap()
}

fn load_properties_fixture() -> Vec<Property> {
    let json_str = include_str!("../../roomfinder_api/tests/fixtures/properties.json");
    let resp: serde_json::Value = serde_json::from_str(json_str).unwrap();
    serde_json::from_value(resp["data"]["properties"].clone()).unwrap()
}

fn load_configs_fixture() -> Vec<RevenueConfig> {
    let json_str = include_str!("../../roomfinder_api/tests/fixtures/revenue_configs.json");
    let resp: serde_json::Value = serde_json::from_str(json_str).unwrap();
    serde_json::from_value(resp["configs"].clone()).unwrap()
}

// -- formatting helpers --

#[test]
fn money_keeps_two_decimals() {
    assert_eq!(format_money(480.0, "EUR"), "480.00 EUR");
    assert_eq!(format_money(75.5, "USD"), "75.50 USD");
}

#[test]
fn fee_label_shows_band_or_floor() {
    assert_eq!(format_fee(10.0, 1.0, Some(50.0)), "10% (1.00-50.00)");
    assert_eq!(format_fee(5.0, 0.5, None), "5% (min 0.50)");
}

#[test]
fn truncate_leaves_short_text_alone() {
    assert_eq!(truncate("short", 60), "short");
}

#[test]
fn truncate_cuts_long_text() {
    assert_eq!(truncate("abcdefgh", 5), "abcde...");
}

// -- row builders --

#[test]
fn booking_rows_map_fixture() {
    let rows = build_booking_rows(&load_bookings_fixture());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "b1");
    assert_eq!(rows[0].property, "Harbour Loft");
    assert_eq!(rows[0].check_in, "2026-02-10");
    assert_eq!(rows[0].total, "480.00 EUR");
    assert_eq!(rows[0].status, BookingStatus::Confirmed.to_string());
}

#[test]
fn property_rows_fall_back_for_sparse_listings() {
    let rows = build_property_rows(&load_properties_fixture());
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].kind, "apartment");
    assert_eq!(rows[0].rating, "4.7 (12)");
    // The sparse listing has no city, kind, or rating.
    assert_eq!(rows[1].city, "");
    assert_eq!(rows[1].kind, "");
    assert_eq!(rows[1].rating, "-");
}

#[test]
fn config_rows_mark_single_active() {
    let rows = build_config_rows(&load_configs_fixture());
    assert_eq!(rows[0].active, "yes");
    assert_eq!(rows[0].host_fee, "10% (1.00-50.00)");
    assert_eq!(rows[0].guest_fee, "5% (min 0.50)");
    assert_eq!(rows[1].active, "no");
}

#[test]
fn booking_rows_empty_input() {
    assert!(build_booking_rows(&[]).is_empty());
}

// -- pagination footer --

#[test]
fn pagination_line_mid_page() {
    let meta = PageMeta::new(3, 10, 97, 10);
    assert_eq!(
        pagination_line(&meta, "bookings"),
        "21 to 30 of 97 | < 1 2 [3] 4 5 >"
    );
}

#[test]
fn pagination_line_first_and_last_page() {
    let first = PageMeta::new(1, 3, 25, 10);
    assert_eq!(pagination_line(&first, "reviews"), "1 to 10 of 25 | · [1] 2 3 >");

    let last = PageMeta::new(3, 3, 25, 10);
    assert_eq!(pagination_line(&last, "reviews"), "21 to 25 of 25 | < 1 2 [3] ·");
}

#[test]
fn pagination_line_empty_set() {
    let meta = PageMeta::new(1, 1, 0, 10);
    assert_eq!(pagination_line(&meta, "favorites"), "No favorites found | · [1] ·");
}
