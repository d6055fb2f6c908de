use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use ugc_core::{
    clock::SystemClock,
    repositories::Pagination,
    score::ScoringParams,
    usecases::{self, ItemQuery},
    util::sort::SortOrder,
};
use ugc_db_inmem::InMemoryDb;

use crate::{config::Config, fixture::Fixture, json};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (defaults to ugcdb.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// JSON file with the items to load
    #[arg(long, value_name = "FILE")]
    fixture: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List all items
    List {
        /// Sort order: time, top or hot
        #[arg(long)]
        order: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u64,
    },
    /// Search the content of all items
    Search {
        text: String,
        /// Sort order: time, top or hot
        #[arg(long)]
        order: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u64,
    },
    /// List the items of an author, newest first
    Author { author: String },
    /// Show an item with its ratings, comments and scores
    Show { item: String },
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    log::debug!("{cfg:?}");

    let db = InMemoryDb::new();
    Fixture::load_from_file(&args.fixture)?.import(&db)?;

    let clock = SystemClock;
    let params = &cfg.scores;
    match args.command {
        Command::List { order, page } => {
            let order = sort_order(order.as_deref());
            let query = ItemQuery {
                order,
                pagination: Pagination::page(page, cfg.listing.page_size),
                ..Default::default()
            };
            let items = usecases::query_items(&db, &clock, params, &query)?;
            print_json(&scored_items(&db, &clock, params, items, order)?)
        }
        Command::Search { text, order, page } => {
            let order = sort_order(order.as_deref());
            let pagination = Pagination::page(page, cfg.listing.search_page_size);
            let items = usecases::search_items(&db, &clock, params, &text, order, pagination)?;
            print_json(&scored_items(&db, &clock, params, items, order)?)
        }
        Command::Author { author } => {
            let items = usecases::items_of_author(&db, &author)?;
            let items: Vec<json::Item> = items.into_iter().map(Into::into).collect();
            print_json(&items)
        }
        Command::Show { item } => {
            let details = usecases::load_item_details(&db, &item)?;
            let scores = usecases::scores_of_item(&db, &clock, params, &details.item)?;
            print_json(&json::ItemDetailsView::new(details, scores))
        }
    }
}

fn sort_order(param: Option<&str>) -> SortOrder {
    let order = SortOrder::from_param(param);
    if let Some(param) = param {
        if param.parse::<SortOrder>().is_err() {
            log::warn!("Unknown sort order '{param}', sorting by {order}");
        }
    }
    order
}

// The scores have just been refreshed while sorting, so this only reads the cache.
fn scored_items(
    db: &InMemoryDb,
    clock: &SystemClock,
    params: &ScoringParams,
    items: Vec<ugc_core::entities::Item>,
    order: SortOrder,
) -> Result<Vec<json::Item>> {
    let mut scored = Vec::with_capacity(items.len());
    for item in items {
        let score = match order {
            SortOrder::Time => None,
            _ => order.score_of(&usecases::scores_of_item(db, clock, params, &item)?),
        };
        scored.push(json::Item::with_score(item, score));
    }
    Ok(scored)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_list_command() {
        let args = Args::try_parse_from([
            "ugcdb", "--fixture", "items.json", "list", "--order", "hot", "--page", "2",
        ])
        .unwrap();
        assert!(args.config.is_none());
        assert!(matches!(
            args.command,
            Command::List { order: Some(ref o), page: 2 } if o == "hot"
        ));
    }

    #[test]
    fn fixture_is_required() {
        assert!(Args::try_parse_from(["ugcdb", "show", "foo"]).is_err());
    }

    #[test]
    fn unknown_sort_order_falls_back_to_time() {
        assert_eq!(sort_order(Some("best")), SortOrder::Time);
        assert_eq!(sort_order(Some("top")), SortOrder::Top);
        assert_eq!(sort_order(None), SortOrder::Time);
    }
}
