use super::*;
use crate::data::{team::TeamStore, EntityFields};

fn team_content<'a>(
    db: &'a DatabaseConnection,
    blobs: &'a BlobStore,
) -> ContentService<'a, TeamStore> {
    ContentService::new(db, blobs, "en")
}

/// Tests that a bulk reorder flips the rendered list order.
///
/// Expected: Ok with positions and list order following the request
#[tokio::test]
async fn reorder_changes_the_list_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let blobs = blobs();

    let first = TeamStore::insert_entity(db, EntityFields::default()).await?;
    let second = TeamStore::insert_entity(db, EntityFields::default()).await?;

    team_content(db, &blobs)
        .reorder(&[(second.id, 1), (first.id, 2)])
        .await?;

    let (items, _) = team_content(db, &blobs).list("en", 1, 10).await?;
    assert_eq!(items[0]["id"], second.id);
    assert_eq!(items[0]["order_number"], 1);
    assert_eq!(items[1]["id"], first.id);
    assert_eq!(items[1]["order_number"], 2);

    Ok(())
}

/// Tests that members untouched by a reorder keep their positions.
///
/// Expected: Ok with only the named member moved
#[tokio::test]
async fn reorder_leaves_unnamed_members_in_place() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let blobs = blobs();

    let first = TeamStore::insert_entity(db, EntityFields::default()).await?;
    let second = TeamStore::insert_entity(db, EntityFields::default()).await?;
    let third = TeamStore::insert_entity(db, EntityFields::default()).await?;

    team_content(db, &blobs).reorder(&[(third.id, 0)]).await?;

    let (items, _) = team_content(db, &blobs).list("en", 1, 10).await?;
    assert_eq!(items[0]["id"], third.id);
    assert_eq!(items[1]["id"], first.id);
    assert_eq!(items[2]["id"], second.id);

    Ok(())
}
