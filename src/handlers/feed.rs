use crate::core::models::common::OrderBy;
use crate::core::ports::gateway::Gateway;
use crate::core::ports::selection::SelectionStore;
use crate::core::services::ballot::Ballot;
use crate::core::services::feed::Feed;
use crate::error::Error;
use crate::handlers::render_card;

pub async fn list<G, S>(gateway: &mut G, store: &mut S, order_by: OrderBy, pages: i64) -> Result<(), Error>
where
    G: Gateway,
    S: SelectionStore,
{
    let mut feed = Feed::new(order_by);
    for _ in 0..pages {
        if !feed.has_next() {
            break;
        }
        if feed.load_next(gateway).await.is_err() {
            break;
        }
    }
    for content in feed.contents() {
        let ballot = Ballot::load(content.clone(), store)?;
        println!("----------");
        render_card(&ballot);
    }
    if let Some(e) = feed.error() {
        println!("ごめんね😭エラーだ ({})", e);
    } else if feed.has_next() {
        println!("----------");
        println!("(続きは --pages {} で見れるよ)", pages + 1);
    }
    Ok(())
}
