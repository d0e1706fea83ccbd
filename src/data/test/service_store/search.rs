use super::*;
use test_utils::factory::service::create_service_translation_with_document;

/// Tests case-insensitive substring matching on the heading field.
///
/// Expected: Ok with only the matching service
#[tokio::test]
async fn matches_heading_substring_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_service_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let matching = factory::create_service(db).await?;
    create_service_translation_with_document(
        db,
        matching.id,
        "en",
        json!({"sec_one_heading_one": "Family Law Advice"}),
    )
    .await?;

    let other = factory::create_service(db).await?;
    create_service_translation_with_document(
        db,
        other.id,
        "en",
        json!({"sec_one_heading_one": "Corporate Contracts"}),
    )
    .await?;

    let (rows, total) = ServiceStore::search_entities(db, "en", "FAMILY law", 1, 10).await?;
    assert_eq!(total, 1);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, matching.id);

    Ok(())
}

/// Tests that search only considers the requested locale's documents.
///
/// Expected: Ok with no matches for the other locale
#[tokio::test]
async fn search_is_scoped_to_the_requested_locale() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_service_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = factory::create_service(db).await?;
    create_service_translation_with_document(
        db,
        service.id,
        "ar",
        json!({"sec_one_heading_one": "Family Law Advice"}),
    )
    .await?;

    let (rows, total) = ServiceStore::search_entities(db, "en", "family", 1, 10).await?;
    assert_eq!(total, 0);
    assert!(rows.is_empty());

    Ok(())
}

/// Tests pagination of search results.
///
/// Expected: Ok with the page size honored and a full total
#[tokio::test]
async fn search_paginates_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_service_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for i in 0..3 {
        let service = factory::create_service(db).await?;
        create_service_translation_with_document(
            db,
            service.id,
            "en",
            json!({"sec_one_heading_one": format!("Family Law {i}")}),
        )
        .await?;
    }

    let (rows, total) = ServiceStore::search_entities(db, "en", "family", 1, 2).await?;
    assert_eq!(total, 3);
    assert_eq!(rows.len(), 2);

    let (rows, _) = ServiceStore::search_entities(db, "en", "family", 2, 2).await?;
    assert_eq!(rows.len(), 1);

    Ok(())
}
