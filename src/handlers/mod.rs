pub mod content;
pub mod feed;
pub mod iikae;

use crate::core::services::ballot::Ballot;

pub(crate) fn render_card(ballot: &Ballot) {
    let content = ballot.content();
    println!("[{}]", content.content_id);
    println!("{} に「{}」と言いたい", content.who, content.what);
    if !content.detail.is_empty() {
        println!("{}", content.detail);
    }
    if !ballot.completed() {
        println!("↓ 好きな言い換えに投票してね！");
    }
    for paraphrase in &content.paraphrases {
        let heart = if ballot.selected() == Some(paraphrase.paraphrase_id.as_str()) {
            "♥"
        } else {
            " "
        };
        if ballot.completed() {
            println!(
                "  {} [{}] {}  {}% [{} 票]",
                heart,
                paraphrase.paraphrase_id,
                paraphrase.content,
                ballot.percentage(&paraphrase.paraphrase_id),
                ballot.vote_count(&paraphrase.paraphrase_id)
            );
        } else {
            println!("  {} [{}] {}", heart, paraphrase.paraphrase_id, paraphrase.content);
        }
    }
}
