use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use std::future::{ready, Ready};

pub const QUESTIONS_PER_PAGE: usize = 10;

/// `?page=` query parameter. Anything that is not an integer resolves to the
/// first page, and extraction never fails.
#[derive(Debug, Default)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    /// Takes the first `page` value; other or repeated keys are ignored.
    pub fn from_query_string(query: &str) -> Self {
        let page = web::Query::<Vec<(String, String)>>::from_query(query)
            .ok()
            .and_then(|pairs| {
                pairs
                    .into_inner()
                    .into_iter()
                    .find(|(key, _)| key == "page")
                    .map(|(_, value)| value)
            });
        Self { page }
    }

    pub fn page_number(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|page| page.trim().parse::<i64>().ok())
            .unwrap_or(1)
    }
}

impl FromRequest for PageQuery {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(PageQuery::from_query_string(req.query_string())))
    }
}

/// Returns the window of `items` for the given 1-based page. Windows that fall
/// outside the sequence shrink to whatever remains, possibly nothing.
pub fn paginate<T>(page: i64, items: &[T]) -> &[T] {
    let size = QUESTIONS_PER_PAGE as i64;
    let start = page.saturating_sub(1).saturating_mul(size).max(0);
    let end = page.saturating_mul(size).max(0);

    let len = items.len();
    let start = usize::try_from(start).unwrap_or(usize::MAX).min(len);
    let end = usize::try_from(end).unwrap_or(usize::MAX).min(len);

    if start >= end {
        return &[];
    }
    &items[start..end]
}
