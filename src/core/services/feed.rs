use log::{error, warn};

use crate::core::models::common::{OrderBy, Pagination};
use crate::core::models::content::Content;
use crate::core::ports::gateway::Gateway;
use crate::error::Error;

pub const PER_PAGE: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTicket {
    seq: u64,
    pub pagination: Pagination,
    pub order_by: OrderBy,
}

#[derive(Debug)]
pub struct Feed {
    order_by: OrderBy,
    per_page: i64,
    page: i64,
    seq: u64,
    contents: Vec<Content>,
    has_next: bool,
    error: Option<String>,
}

impl Feed {
    pub fn new(order_by: OrderBy) -> Self {
        Self::with_per_page(order_by, PER_PAGE)
    }

    pub fn with_per_page(order_by: OrderBy, per_page: i64) -> Self {
        Self {
            order_by,
            per_page,
            page: 1,
            seq: 0,
            contents: Vec::new(),
            has_next: true,
            error: None,
        }
    }

    pub fn contents(&self) -> &[Content] {
        &self.contents
    }

    pub fn has_next(&self) -> bool {
        self.has_next
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // Tickets issued before the newest one are stale and their completions
    // get discarded.
    pub fn begin_load(&mut self) -> Option<PageTicket> {
        if !self.has_next || self.error.is_some() {
            return None;
        }
        self.seq += 1;
        Some(PageTicket {
            seq: self.seq,
            pagination: Pagination::new(self.page, self.per_page),
            order_by: self.order_by,
        })
    }

    pub fn complete_load(&mut self, ticket: PageTicket, result: Result<Vec<Content>, Error>) -> Result<usize, Error> {
        if ticket.seq != self.seq {
            warn!("discarding stale page {} of {} feed", ticket.pagination.page, self.order_by);
            return Ok(0);
        }
        match result {
            Ok(items) => {
                if (items.len() as i64) < self.per_page {
                    self.has_next = false;
                }
                self.page += 1;
                let added = items.len();
                self.contents.extend(items);
                Ok(added)
            }
            Err(e) => {
                error!("failed to fetch page {} of {} feed: {}", ticket.pagination.page, self.order_by, e);
                self.has_next = false;
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub async fn load_next<G>(&mut self, gateway: &mut G) -> Result<usize, Error>
    where
        G: Gateway,
    {
        let ticket = match self.begin_load() {
            Some(ticket) => ticket,
            None => return Ok(0),
        };
        let result = gateway.contents(ticket.pagination, ticket.order_by).await;
        self.complete_load(ticket, result)
    }
}
