use log::error;

use crate::core::models::content::IikaeCreate;
use crate::core::ports::gateway::Gateway;
use crate::core::ports::selection::SelectionStore;
use crate::core::services::ballot::Ballot;
use crate::core::services::iikae;
use crate::error::Error;
use crate::handlers::render_card;

pub async fn submit<G, S>(gateway: &mut G, store: &mut S, draft: IikaeCreate) -> Result<(), Error>
where
    G: Gateway,
    S: SelectionStore,
{
    match iikae::submit(gateway, &draft).await {
        Ok(content) => {
            let ballot = Ballot::load(content, store)?;
            render_card(&ballot);
            Ok(())
        }
        // validation failures never reach the network and are the caller's problem
        Err(e @ Error::BusinessError(_)) => Err(e),
        Err(e) => {
            error!("iikae error: {}", e);
            println!("ごめん、何かエラーが起きたみたい。もう一度試してみてね😭");
            Ok(())
        }
    }
}
