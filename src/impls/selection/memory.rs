use std::collections::HashMap;

use crate::core::ports::selection::SelectionStore;
use crate::error::Error;

#[derive(Debug, Default)]
pub struct MemoryStore {
    votes: HashMap<String, String>,
}

impl SelectionStore for MemoryStore {
    fn get(&mut self, content_id: &str) -> Result<Option<String>, Error> {
        Ok(self.votes.get(content_id).cloned())
    }

    fn set(&mut self, content_id: &str, paraphrase_id: &str) -> Result<(), Error> {
        self.votes.insert(content_id.to_owned(), paraphrase_id.to_owned());
        Ok(())
    }
}
