//! Paging and filtering against a live PostgreSQL database
//!
//! Run with `DATABASE_URL=postgres://... cargo test -- --ignored`

mod common;

use common::{cleanup_schema, inventory, setup_pool};
use inventory_store::prelude::*;

async fn seed_team_assets(assets: &GenericRepository<Asset>) -> Vec<i64> {
    let mut ids = Vec::new();
    for (index, created_by) in ["a", "b", "c", "d", "e"].iter().enumerate() {
        let mut asset = Asset::new(&format!("TAG-{index}"), created_by);
        asset.owner = Some("user1".to_string());
        asset.team_asset = Some(*created_by != "e");
        ids.push(assets.insert(&mut asset).await.unwrap());
    }

    let mut other = Asset::new("TAG-OTHER", "z");
    other.owner = Some("user2".to_string());
    other.team_asset = Some(true);
    ids.push(assets.insert(&mut other).await.unwrap());

    ids
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_paged_team_assets_descending_by_creator() {
    let schema = "inventory_test_paging";
    let pool = setup_pool(schema).await;
    let assets = inventory(&pool).assets();
    seed_team_assets(&assets).await;

    let query = AssetQuery {
        owner: Some("user1".to_string()),
        team_asset: Some(true),
        ..AssetQuery::default()
    };
    let page_info = PageInfo::new(2, 2, OrderBy::parse("-CreatedBy").unwrap()).unwrap();

    let page = assets.paged_query(&page_info, Some(&query)).await.unwrap();

    assert_eq!(page.total_count(), 4);
    assert_eq!(page.total_pages(), 2);
    assert!(!page.has_next());
    assert!(page.has_previous());
    let creators: Vec<_> = page
        .result()
        .iter()
        .map(|asset| asset.audit.created_by.clone().unwrap())
        .collect();
    assert_eq!(creators, vec!["b", "a"]);

    cleanup_schema(&pool, schema).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_empty_query_matches_no_query() {
    let schema = "inventory_test_empty_query";
    let pool = setup_pool(schema).await;
    let assets = inventory(&pool).assets();
    seed_team_assets(&assets).await;

    let everything = assets.query(None).await.unwrap();
    let blank_filters = AssetQuery {
        tag: Some("   ".to_string()),
        ..AssetQuery::default()
    };
    let unfiltered = assets.query(Some(&blank_filters)).await.unwrap();

    assert_eq!(everything.len(), 6);
    assert_eq!(everything.len(), unfiltered.len());

    cleanup_schema(&pool, schema).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_or_query_matches_either_condition() {
    let schema = "inventory_test_or_query";
    let pool = setup_pool(schema).await;
    let assets = inventory(&pool).assets();
    seed_team_assets(&assets).await;

    let query = AssetQuery {
        logical_operator: LogicalOperator::Or,
        owner: Some("user2".to_string()),
        team_asset: Some(false),
        ..AssetQuery::default()
    };
    let found = assets.query(Some(&query)).await.unwrap();

    let mut tags: Vec<_> = found.into_iter().map(|asset| asset.tag).collect();
    tags.sort();
    assert_eq!(tags, vec!["TAG-4", "TAG-OTHER"]);

    cleanup_schema(&pool, schema).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_page_past_the_end_is_empty() {
    let schema = "inventory_test_page_past_end";
    let pool = setup_pool(schema).await;
    let assets = inventory(&pool).assets();
    seed_team_assets(&assets).await;

    let page_info = PageInfo::new(10, 5, OrderBy::ascending("Tag").unwrap()).unwrap();
    let page = assets.paged_query(&page_info, None).await.unwrap();

    assert_eq!(page.total_count(), 6);
    assert!(page.is_empty());

    cleanup_schema(&pool, schema).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_pages_do_not_overlap_when_sort_values_tie() {
    let schema = "inventory_test_paging_ties";
    let pool = setup_pool(schema).await;
    let assets = inventory(&pool).assets();
    seed_team_assets(&assets).await;

    // Every asset shares the same creation date, so only the id orders them
    let order_by = OrderBy::parse("+CreationDate").unwrap();
    let mut seen = Vec::new();
    for page_number in 1..=3 {
        let page_info = PageInfo::new(page_number, 2, order_by.clone()).unwrap();
        let page = assets.paged_query(&page_info, None).await.unwrap();
        seen.extend(page.result().iter().map(|asset| asset.id.unwrap()));
    }

    let mut sorted = seen.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(seen.len(), 6);
    assert_eq!(seen, sorted);

    cleanup_schema(&pool, schema).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_unknown_order_column_is_rejected() {
    let schema = "inventory_test_bad_order";
    let pool = setup_pool(schema).await;
    let assets = inventory(&pool).assets();

    let page_info = PageInfo::new(1, 10, OrderBy::ascending("Colour").unwrap()).unwrap();
    let err = assets.paged_query(&page_info, None).await.unwrap_err();

    assert!(err.is_validation());

    cleanup_schema(&pool, schema).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_repeated_query_returns_same_rows() {
    let schema = "inventory_test_repeated_query";
    let pool = setup_pool(schema).await;
    let assets = inventory(&pool).assets();
    seed_team_assets(&assets).await;

    let query = AssetQuery {
        owner: Some("user1".to_string()),
        team_asset: Some(true),
        ..AssetQuery::default()
    };
    let ids = |found: Vec<Asset>| {
        let mut ids: Vec<_> = found.into_iter().filter_map(|asset| asset.id).collect();
        ids.sort();
        ids
    };

    let first = ids(assets.query(Some(&query)).await.unwrap());
    let second = ids(assets.query(Some(&query)).await.unwrap());

    assert_eq!(first.len(), 4);
    assert_eq!(first, second);

    cleanup_schema(&pool, schema).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_page_length_follows_remaining_rows() {
    let schema = "inventory_test_page_length";
    let pool = setup_pool(schema).await;
    let assets = inventory(&pool).assets();
    seed_team_assets(&assets).await;

    let page_size = 2;
    for page_number in 1..=4 {
        let page_info =
            PageInfo::new(page_number, page_size, OrderBy::parse("Tag").unwrap()).unwrap();
        let page = assets.paged_query(&page_info, None).await.unwrap();

        let expected = (page.total_count() - page_info.offset()).clamp(0, i64::from(page_size));
        assert_eq!(page.total_count(), 6);
        assert_eq!(page.len() as i64, expected, "page {}", page_number);
    }

    cleanup_schema(&pool, schema).await;
}
