use sea_orm::DbErr;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

use crate::data::{team::TeamStore, EntityFields, LocalizedStore};

/// Tests that the team store round-trips entity rows without a category.
///
/// Expected: Ok with category_id always None
#[tokio::test]
async fn inserts_without_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let row = TeamStore::insert_entity(
        db,
        EntityFields {
            image: Some("team_images/a.png".to_string()),
            category_id: Some(9),
        },
    )
    .await?;

    let found = TeamStore::find_entity(db, row.id).await?.unwrap();
    assert_eq!(found.image.as_deref(), Some("team_images/a.png"));
    assert!(found.category_id.is_none());

    Ok(())
}

/// Tests upserting and listing team member translations.
///
/// Expected: Ok with one row per locale, latest document winning
#[tokio::test]
async fn upserts_translations_per_locale() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_team_member(db).await?;

    TeamStore::upsert_translation(db, member.id, "en", &json!({"name": "Amira"})).await?;
    TeamStore::upsert_translation(db, member.id, "ar", &json!({"name": "أميرة"})).await?;
    TeamStore::upsert_translation(db, member.id, "en", &json!({"name": "Amira Haddad"})).await?;

    let translations = TeamStore::list_translations(db, member.id).await?;
    assert_eq!(translations.len(), 2);
    let en = translations.iter().find(|t| t.language == "en").unwrap();
    assert_eq!(en.document["name"], "Amira Haddad");

    Ok(())
}

/// Tests searching team members by name.
///
/// Expected: Ok with only the matching member
#[tokio::test]
async fn searches_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_team_member(db).await?;
    TeamStore::upsert_translation(db, member.id, "en", &json!({"name": "Amira Haddad"})).await?;

    let other = factory::create_team_member(db).await?;
    TeamStore::upsert_translation(db, other.id, "en", &json!({"name": "Omar Farouk"})).await?;

    let (rows, total) = TeamStore::search_entities(db, "en", "amira", 1, 10).await?;
    assert_eq!(total, 1);
    assert_eq!(rows[0].id, member.id);

    Ok(())
}

/// Tests that new members join the end of the display order.
///
/// Expected: Ok with sequential order numbers starting at 1
#[tokio::test]
async fn insert_assigns_the_next_order_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = TeamStore::insert_entity(db, EntityFields::default()).await?;
    let second = TeamStore::insert_entity(db, EntityFields::default()).await?;

    assert_eq!(first.order_number, Some(1));
    assert_eq!(second.order_number, Some(2));

    Ok(())
}

/// Tests that listing follows explicit display positions, not insertion
/// order.
///
/// Expected: Ok with the repositioned member listed first
#[tokio::test]
async fn lists_by_display_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = TeamStore::insert_entity(db, EntityFields::default()).await?;
    let second = TeamStore::insert_entity(db, EntityFields::default()).await?;

    TeamStore::set_order_numbers(db, &[(second.id, 1), (first.id, 2)]).await?;

    let (rows, total) = TeamStore::list_entities(db, 1, 10).await?;
    assert_eq!(total, 2);
    assert_eq!(rows[0].id, second.id);
    assert_eq!(rows[1].id, first.id);

    Ok(())
}

/// Tests that reorder assignments for unknown ids change nothing.
///
/// Expected: Ok with the existing position intact
#[tokio::test]
async fn reorder_skips_unknown_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = TeamStore::insert_entity(db, EntityFields::default()).await?;

    TeamStore::set_order_numbers(db, &[(member.id + 99, 5)]).await?;

    let found = TeamStore::find_entity(db, member.id).await?.unwrap();
    assert_eq!(found.order_number, Some(1));

    Ok(())
}
