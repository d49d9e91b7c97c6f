use url::Url;

use roomfinder_api::{ListQuery, NotificationQuery, Query};

#[test]
fn list_query_defaults_to_first_page() {
    let url = Url::parse("https://example.com/favorites").unwrap();
    assert_eq!(
        ListQuery::default().add_to_url(&url).to_string(),
        "https://example.com/favorites?page=1"
    );
}

#[test]
fn list_query_sets_page_and_limit() {
    let url = Url::parse("https://example.com/favorites").unwrap();
    assert_eq!(
        ListQuery::default()
            .with_page(4)
            .with_limit(50)
            .add_to_url(&url)
            .to_string(),
        "https://example.com/favorites?page=4&limit=50"
    );
}

#[test]
fn notification_query_unread_flag() {
    let url = Url::parse("https://example.com/notifications").unwrap();
    assert_eq!(
        NotificationQuery::default()
            .unread_only()
            .add_to_url(&url)
            .to_string(),
        "https://example.com/notifications?page=1&unread=true"
    );
}
