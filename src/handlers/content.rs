use log::error;

use crate::core::ports::gateway::Gateway;
use crate::core::ports::selection::SelectionStore;
use crate::core::services::ballot::Ballot;
use crate::error::Error;
use crate::handlers::render_card;

pub async fn detail<G, S>(gateway: &mut G, store: &mut S, content_id: &str) -> Result<(), Error>
where
    G: Gateway,
    S: SelectionStore,
{
    match gateway.content(content_id).await {
        Ok(content) => {
            let ballot = Ballot::load(content, store)?;
            render_card(&ballot);
        }
        Err(e) => {
            error!("failed to fetch content {}: {}", content_id, e);
            println!("ごめんね😭エラーだ");
        }
    }
    Ok(())
}

pub async fn vote<G, S>(gateway: &mut G, store: &mut S, content_id: &str, paraphrase_id: &str) -> Result<(), Error>
where
    G: Gateway,
    S: SelectionStore,
{
    let content = match gateway.content(content_id).await {
        Ok(content) => content,
        Err(e) => {
            error!("failed to fetch content {}: {}", content_id, e);
            println!("ごめんね😭エラーだ");
            return Ok(());
        }
    };
    let mut ballot = Ballot::load(content, store)?;
    match ballot.record_vote(gateway, store, paraphrase_id).await {
        Ok(()) => render_card(&ballot),
        Err(Error::BusinessError(msg)) => {
            println!("{}", msg);
            render_card(&ballot);
        }
        Err(_) => {
            // voting is best-effort, the item stays open for another try
            println!("投票エラー。もう一度試してみてね");
            render_card(&ballot);
        }
    }
    Ok(())
}
