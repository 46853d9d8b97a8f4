use crate::error::Error;

pub trait SelectionStore {
    fn get(&mut self, content_id: &str) -> Result<Option<String>, Error>;
    fn set(&mut self, content_id: &str, paraphrase_id: &str) -> Result<(), Error>;
}
