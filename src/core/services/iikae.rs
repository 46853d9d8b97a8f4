use crate::core::models::content::{Content, IikaeCreate};
use crate::core::ports::gateway::Gateway;
use crate::error::Error;

pub const MAX_WHO_LEN: usize = 100;
pub const MAX_WHAT_LEN: usize = 100;
pub const MAX_DETAIL_LEN: usize = 200;

pub fn validate(draft: &IikaeCreate) -> Result<(), Error> {
    if draft.who.trim().is_empty() || draft.what.trim().is_empty() || draft.detail.trim().is_empty() {
        return Err(Error::BusinessError("all fields are required".into()));
    }
    if draft.who.chars().count() > MAX_WHO_LEN
        || draft.what.chars().count() > MAX_WHAT_LEN
        || draft.detail.chars().count() > MAX_DETAIL_LEN
    {
        return Err(Error::BusinessError("text length is too long".into()));
    }
    Ok(())
}

pub async fn submit<G>(gateway: &mut G, draft: &IikaeCreate) -> Result<Content, Error>
where
    G: Gateway,
{
    validate(draft)?;
    gateway.create_iikae(draft).await
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::models::common::{OrderBy, Pagination};
    use crate::core::models::content::Paraphrase;

    fn draft(who: &str, what: &str, detail: &str) -> IikaeCreate {
        IikaeCreate {
            who: who.into(),
            what: what.into(),
            detail: detail.into(),
        }
    }

    struct FakeGateway {
        submissions: usize,
    }

    impl Gateway for FakeGateway {
        async fn contents(&mut self, _pagination: Pagination, _order_by: OrderBy) -> Result<Vec<Content>, Error> {
            unreachable!()
        }

        async fn content(&mut self, _content_id: &str) -> Result<Content, Error> {
            unreachable!()
        }

        async fn create_iikae(&mut self, draft: &IikaeCreate) -> Result<Content, Error> {
            self.submissions += 1;
            Ok(Content {
                content_id: "c1".into(),
                who: draft.who.clone(),
                what: draft.what.clone(),
                detail: draft.detail.clone(),
                paraphrases: vec![Paraphrase {
                    paraphrase_id: "p1".into(),
                    content: "最近お財布がダイエット中なんです".into(),
                    vote_count: 0,
                }],
            })
        }

        async fn cast_vote(&mut self, _paraphrase_id: &str) -> Result<(), Error> {
            unreachable!()
        }
    }

    #[tokio::test]
    async fn test_blank_field_issues_no_call() {
        let mut gateway = FakeGateway { submissions: 0 };
        for bad in [
            draft("", "カツラずれてますよ", "ゴルフで気まずい"),
            draft("会社のお偉いさん", "   ", "ゴルフで気まずい"),
            draft("会社のお偉いさん", "カツラずれてますよ", "\n\t"),
        ] {
            assert!(submit(&mut gateway, &bad).await.is_err());
        }
        assert_eq!(gateway.submissions, 0);
    }

    #[tokio::test]
    async fn test_too_long_field_issues_no_call() {
        let mut gateway = FakeGateway { submissions: 0 };
        let long = "あ".repeat(MAX_WHO_LEN + 1);
        assert!(submit(&mut gateway, &draft(&long, "what", "detail")).await.is_err());
        let long = "a".repeat(MAX_DETAIL_LEN + 1);
        assert!(submit(&mut gateway, &draft("who", "what", &long)).await.is_err());
        assert_eq!(gateway.submissions, 0);
    }

    #[tokio::test]
    async fn test_valid_draft_returns_new_content() {
        let mut gateway = FakeGateway { submissions: 0 };
        let created = submit(&mut gateway, &draft("会社のお偉いさん", "カツラずれてますよ", "ゴルフで気まずい"))
            .await
            .unwrap();
        assert_eq!(gateway.submissions, 1);
        assert_eq!(created.content_id, "c1");
        assert_eq!(created.paraphrases[0].vote_count, 0);
    }

    #[test]
    fn test_boundary_lengths_are_valid() {
        assert!(validate(&draft(&"あ".repeat(MAX_WHO_LEN), &"a".repeat(MAX_WHAT_LEN), &"b".repeat(MAX_DETAIL_LEN))).is_ok());
    }
}
