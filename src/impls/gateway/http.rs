use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

use crate::core::models::common::{OrderBy, Pagination};
use crate::core::models::content::{Content, IikaeCreate};
use crate::core::ports::gateway::Gateway;
use crate::error::Error;

#[derive(Debug, Deserialize)]
struct GetContentsResponse {
    contents: Vec<Content>,
}

#[derive(Debug, Deserialize)]
struct PostIikaeResponse {
    content: Content,
}

#[derive(Debug, Serialize)]
struct VoteRequest<'a> {
    paraphrase_id: &'a str,
}

pub struct HttpGateway {
    endpoint: String,
    client: Client,
}

impl HttpGateway {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_owned(),
            client: Client::new(),
        }
    }

    fn checked(resp: Response) -> Result<Response, Error> {
        if !resp.status().is_success() {
            return Err(Error::ServerError(resp.status()));
        }
        Ok(resp)
    }
}

impl Gateway for HttpGateway {
    async fn contents(&mut self, pagination: Pagination, order_by: OrderBy) -> Result<Vec<Content>, Error> {
        let resp = self
            .client
            .get(format!("{}/contents/", self.endpoint))
            .query(&[
                ("page", pagination.page.to_string()),
                ("per_page", pagination.per_page.to_string()),
                ("order_by", order_by.as_str().to_owned()),
            ])
            .send()
            .await?;
        let body: GetContentsResponse = Self::checked(resp)?.json().await?;
        Ok(body.contents)
    }

    async fn content(&mut self, content_id: &str) -> Result<Content, Error> {
        let resp = self
            .client
            .get(format!("{}/contents/{}/", self.endpoint, content_id))
            .send()
            .await?;
        let content = Self::checked(resp)?.json().await?;
        Ok(content)
    }

    async fn create_iikae(&mut self, draft: &IikaeCreate) -> Result<Content, Error> {
        let resp = self
            .client
            .post(format!("{}/iikae/", self.endpoint))
            .json(draft)
            .send()
            .await?;
        let body: PostIikaeResponse = Self::checked(resp)?.json().await?;
        Ok(body.content)
    }

    async fn cast_vote(&mut self, paraphrase_id: &str) -> Result<(), Error> {
        let resp = self
            .client
            .post(format!("{}/vote/", self.endpoint))
            .json(&VoteRequest { paraphrase_id })
            .send()
            .await?;
        Self::checked(resp)?;
        Ok(())
    }
}
