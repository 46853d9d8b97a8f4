use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderBy {
    #[default]
    Latest,
    Ranking,
}

impl OrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderBy::Latest => "latest",
            OrderBy::Ranking => "ranking",
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderBy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latest" => Ok(OrderBy::Latest),
            "ranking" => Ok(OrderBy::Ranking),
            _ => Err(Error::BusinessError(format!("unknown order: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub per_page: i64,
}

impl Pagination {
    pub fn new(page: i64, per_page: i64) -> Self {
        Self { page, per_page }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_order_by_round_trip() {
        assert_eq!("latest".parse::<OrderBy>().unwrap(), OrderBy::Latest);
        assert_eq!("ranking".parse::<OrderBy>().unwrap(), OrderBy::Ranking);
        assert!("hottest".parse::<OrderBy>().is_err());
        assert_eq!(OrderBy::Ranking.as_str(), "ranking");
    }
}
