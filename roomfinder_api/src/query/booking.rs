use url::Url;

use crate::types::BookingStatus;

use super::common::{Query, QueryCommon};

/// Query for guest and host booking listings. The status filter string is
/// the same one the dashboard's display filter uses, so server-side counts
/// and the local sub-filter always agree.
#[derive(Default)]
pub struct BookingQuery {
    pub common: QueryCommon,
    pub status: Option<BookingStatus>,
}

impl Query for BookingQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(status) = self.status {
            url.query_pairs_mut()
                .append_pair("status", status.to_string().as_str());
        }
        url
    }
}

impl BookingQuery {
    pub fn with_status(mut self, status: BookingStatus) -> Self {
        self.status = Some(status);
        self
    }
}
