use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paraphrase {
    pub paraphrase_id: String,
    pub content: String,
    pub vote_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub content_id: String,
    pub who: String,
    pub what: String,
    pub detail: String,
    pub paraphrases: Vec<Paraphrase>,
}

impl Content {
    pub fn total_votes(&self) -> i64 {
        self.paraphrases.iter().map(|p| p.vote_count).sum()
    }

    pub fn paraphrase(&self, paraphrase_id: &str) -> Option<&Paraphrase> {
        self.paraphrases.iter().find(|p| p.paraphrase_id == paraphrase_id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IikaeCreate {
    pub who: String,
    pub what: String,
    pub detail: String,
}
