use super::*;

/// Tests that delete removes the row and every translation.
///
/// Expected: Ok with nothing left behind
#[tokio::test]
async fn deletes_row_and_translations() -> Result<(), AppError> {
    let test = TestBuilder::new().with_service_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let blobs = blobs();

    let row = factory::create_service(db).await?;
    factory::create_service_translation(db, row.id, "en").await?;
    factory::create_service_translation(db, row.id, "ar").await?;

    content(db, &blobs).delete(row.id).await?;

    assert!(ServiceStore::find_entity(db, row.id).await?.is_none());
    assert!(ServiceStore::list_translations(db, row.id).await?.is_empty());

    Ok(())
}

/// Tests delete on an unknown id.
///
/// Expected: NotFound
#[tokio::test]
async fn unknown_id_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_service_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let blobs = blobs();

    let err = content(db, &blobs).delete(42).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    Ok(())
}
