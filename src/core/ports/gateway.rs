use crate::core::models::common::{OrderBy, Pagination};
use crate::core::models::content::{Content, IikaeCreate};
use crate::error::Error;

pub trait Gateway {
    async fn contents(&mut self, pagination: Pagination, order_by: OrderBy) -> Result<Vec<Content>, Error>;
    async fn content(&mut self, content_id: &str) -> Result<Content, Error>;
    async fn create_iikae(&mut self, draft: &IikaeCreate) -> Result<Content, Error>;
    async fn cast_vote(&mut self, paraphrase_id: &str) -> Result<(), Error>;
}
