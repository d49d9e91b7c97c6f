use url::Url;

use super::common::{Query, QueryCommon};

/// Query for the notification feed.
#[derive(Default)]
pub struct NotificationQuery {
    pub common: QueryCommon,
    pub unread_only: bool,
}

impl Query for NotificationQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if self.unread_only {
            url.query_pairs_mut().append_pair("unread", "true");
        }
        url
    }
}

impl NotificationQuery {
    pub fn unread_only(mut self) -> Self {
        self.unread_only = true;
        self
    }
}
