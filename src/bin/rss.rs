use portfolio_site::{
    content::all_content,
    logging::init_logger,
    rss::{build_channel, FEED_PATH},
};
use std::fs::File;

#[tokio::main]
async fn main() {
    init_logger();

    let items = all_content().expect("Should be able to load content");
    let count = items.len();
    let channel = build_channel(items);

    let file = File::create(FEED_PATH).expect("Should be able to create RSS feed file");
    channel
        .pretty_write_to(file, b' ', 2)
        .expect("Should be able to write RSS feed");
    tracing::info!(count, path = FEED_PATH, "wrote feed");
}
