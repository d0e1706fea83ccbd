use super::*;

/// Tests that upsert inserts on first write and overwrites on the second.
///
/// Expected: Ok with a single row holding the latest document
#[tokio::test]
async fn upsert_overwrites_existing_locale() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_service_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = factory::create_service(db).await?;

    ServiceStore::upsert_translation(
        db,
        service.id,
        "en",
        &json!({"sec_one_heading_one": "First"}),
    )
    .await?;
    ServiceStore::upsert_translation(
        db,
        service.id,
        "en",
        &json!({"sec_one_heading_one": "Second"}),
    )
    .await?;

    let translations = ServiceStore::list_translations(db, service.id).await?;
    assert_eq!(translations.len(), 1);
    assert_eq!(translations[0].document["sec_one_heading_one"], "Second");

    Ok(())
}

/// Tests that get_translation filters by locale.
///
/// Expected: Ok with the matching locale only
#[tokio::test]
async fn get_translation_filters_by_locale() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_service_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = factory::create_service(db).await?;
    factory::create_service_translation(db, service.id, "en").await?;
    factory::create_service_translation(db, service.id, "ar").await?;

    let en = ServiceStore::get_translation(db, service.id, "en").await?;
    assert_eq!(en.unwrap().language, "en");

    let ru = ServiceStore::get_translation(db, service.id, "ru").await?;
    assert!(ru.is_none());

    Ok(())
}

/// Tests that delete_translations is scoped to one entity.
///
/// Expected: Ok with the sibling entity's rows intact
#[tokio::test]
async fn delete_translations_is_scoped_to_the_entity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_service_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_service(db).await?;
    let second = factory::create_service(db).await?;
    factory::create_service_translation(db, first.id, "en").await?;
    factory::create_service_translation(db, first.id, "ar").await?;
    factory::create_service_translation(db, second.id, "en").await?;

    ServiceStore::delete_translations(db, first.id).await?;

    assert!(ServiceStore::list_translations(db, first.id).await?.is_empty());
    assert_eq!(ServiceStore::list_translations(db, second.id).await?.len(), 1);

    Ok(())
}
