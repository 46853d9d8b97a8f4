use log::{error, warn};

use crate::core::models::content::Content;
use crate::core::ports::gateway::Gateway;
use crate::core::ports::selection::SelectionStore;
use crate::error::Error;

#[derive(Debug)]
pub struct Ballot {
    content: Content,
    selected: Option<String>,
    completed: bool,
    fresh: bool,
}

impl Ballot {
    pub fn load<S>(content: Content, store: &mut S) -> Result<Self, Error>
    where
        S: SelectionStore,
    {
        let saved = store.get(&content.content_id)?;
        Ok(Self {
            completed: saved.is_some(),
            selected: saved,
            fresh: false,
            content,
        })
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    fn delta(&self, paraphrase_id: &str) -> i64 {
        if self.fresh && self.selected.as_deref() == Some(paraphrase_id) {
            1
        } else {
            0
        }
    }

    pub fn vote_count(&self, paraphrase_id: &str) -> i64 {
        let server = self.content.paraphrase(paraphrase_id).map(|p| p.vote_count).unwrap_or(0);
        server + self.delta(paraphrase_id)
    }

    pub fn percentage(&self, paraphrase_id: &str) -> i64 {
        let total = self.content.total_votes() + if self.fresh { 1 } else { 0 };
        if total == 0 {
            return 0;
        }
        (self.vote_count(paraphrase_id) as f64 / total as f64 * 100.0).round() as i64
    }

    pub async fn record_vote<G, S>(&mut self, gateway: &mut G, store: &mut S, paraphrase_id: &str) -> Result<(), Error>
    where
        G: Gateway,
        S: SelectionStore,
    {
        if self.completed {
            return Err(Error::BusinessError("voting already completed".into()));
        }
        if self.content.paraphrase(paraphrase_id).is_none() {
            return Err(Error::BusinessError(format!("no such paraphrase: {}", paraphrase_id)));
        }
        self.selected = Some(paraphrase_id.to_owned());
        if let Err(e) = gateway.cast_vote(paraphrase_id).await {
            error!("vote error: {}", e);
            self.selected = None;
            return Err(e);
        }
        if let Err(e) = store.set(&self.content.content_id, paraphrase_id) {
            warn!("failed to save vote selection: {}", e);
        }
        self.completed = true;
        self.fresh = true;
        Ok(())
    }
}
