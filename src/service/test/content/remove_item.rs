use super::*;
use test_utils::factory::service::create_service_translation_with_document;

async fn seed_two_locales(db: &DatabaseConnection) -> Result<i32, AppError> {
    let row = factory::create_service(db).await?;
    create_service_translation_with_document(
        db,
        row.id,
        "en",
        json!({
            "sec_one_heading_one": "Family Law",
            "faqs": [{"question": "Q0"}, {"question": "Q1"}]
        }),
    )
    .await?;
    create_service_translation_with_document(
        db,
        row.id,
        "ar",
        json!({
            "sec_one_heading_one": "عنوان",
            "faqs": [{"question": "س0"}]
        }),
    )
    .await?;
    Ok(row.id)
}

/// Tests that removal applies to every locale holding the slot and
/// renumbers the remainder.
///
/// Expected: Ok with the English list shifted and the Arabic list empty
#[tokio::test]
async fn removes_the_item_from_every_locale() -> Result<(), AppError> {
    let test = TestBuilder::new().with_service_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let blobs = blobs();
    let id = seed_two_locales(db).await?;

    content(db, &blobs)
        .remove_section_item(id, SectionKey::Faqs, 0)
        .await?;

    let en = ServiceStore::get_translation(db, id, "en").await?.unwrap();
    let faqs = en.document["faqs"].as_array().unwrap();
    assert_eq!(faqs.len(), 1);
    assert_eq!(faqs[0]["question"], "Q1");

    let ar = ServiceStore::get_translation(db, id, "ar").await?.unwrap();
    assert!(ar.document["faqs"].as_array().unwrap().is_empty());

    Ok(())
}

/// Tests that a slot present in only one locale still removes there.
///
/// Expected: Ok with the Arabic document untouched
#[tokio::test]
async fn removes_when_only_one_locale_holds_the_slot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_service_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let blobs = blobs();
    let id = seed_two_locales(db).await?;

    content(db, &blobs)
        .remove_section_item(id, SectionKey::Faqs, 1)
        .await?;

    let en = ServiceStore::get_translation(db, id, "en").await?.unwrap();
    assert_eq!(en.document["faqs"].as_array().unwrap().len(), 1);

    let ar = ServiceStore::get_translation(db, id, "ar").await?.unwrap();
    assert_eq!(ar.document["faqs"].as_array().unwrap().len(), 1);

    Ok(())
}

/// Tests that a slot missing from every locale fails without mutating.
///
/// Expected: NotFound with all documents unchanged
#[tokio::test]
async fn missing_slot_everywhere_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_service_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let blobs = blobs();
    let id = seed_two_locales(db).await?;

    let err = content(db, &blobs)
        .remove_section_item(id, SectionKey::Faqs, 5)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let en = ServiceStore::get_translation(db, id, "en").await?.unwrap();
    assert_eq!(en.document["faqs"].as_array().unwrap().len(), 2);

    Ok(())
}

/// Tests removal against an entity with no translations at all.
///
/// Expected: NotFound
#[tokio::test]
async fn no_translations_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_service_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let blobs = blobs();

    let row = factory::create_service(db).await?;

    let err = content(db, &blobs)
        .remove_section_item(row.id, SectionKey::Faqs, 0)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    Ok(())
}
