use super::*;
use test_utils::factory::service::create_service_translation_with_document;

/// Tests that a missing locale falls back to the default locale's document.
///
/// Expected: Ok with English content under the requested locale
#[tokio::test]
async fn falls_back_to_default_locale() -> Result<(), AppError> {
    let test = TestBuilder::new().with_service_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let blobs = blobs();

    let row = factory::create_service(db).await?;
    create_service_translation_with_document(
        db,
        row.id,
        "en",
        json!({"sec_one_heading_one": "English Heading"}),
    )
    .await?;

    let detail = content(db, &blobs).get(row.id, "ru").await?;
    assert_eq!(detail["sec_one_heading_one"], "English Heading");

    Ok(())
}

/// Tests that an available requested locale wins over the default.
///
/// Expected: Ok with the Arabic document rendered
#[tokio::test]
async fn prefers_the_requested_locale_when_available() -> Result<(), AppError> {
    let test = TestBuilder::new().with_service_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let blobs = blobs();

    let row = factory::create_service(db).await?;
    create_service_translation_with_document(
        db,
        row.id,
        "en",
        json!({"sec_one_heading_one": "English Heading"}),
    )
    .await?;
    create_service_translation_with_document(
        db,
        row.id,
        "ar",
        json!({"sec_one_heading_one": "عنوان عربي"}),
    )
    .await?;

    let detail = content(db, &blobs).get(row.id, "ar").await?;
    assert_eq!(detail["sec_one_heading_one"], "عنوان عربي");

    Ok(())
}

/// Tests list rendering: resolved URLs, `old_image` exposure, and the
/// category placeholder for uncategorized rows.
///
/// Expected: Ok with stored paths surfaced only as `old_image`
#[tokio::test]
async fn list_rendering_exposes_old_image_and_urls() -> Result<(), AppError> {
    let test = TestBuilder::new().with_service_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let blobs = blobs();

    let row = factory::create_service(db).await?;
    create_service_translation_with_document(
        db,
        row.id,
        "en",
        json!({
            "sec_one_heading_one": "Family Law",
            "sec_two": [{"title": "Consultation", "image": "services_images/a.png"}]
        }),
    )
    .await?;

    let (items, pagination) = content(db, &blobs).list("en", 1, 10).await?;
    assert_eq!(pagination.total, 1);

    let item = &items[0];
    assert_eq!(item["id"], row.id);
    assert_eq!(item["category"], "");
    assert_eq!(
        item["sec_two"][0]["image"],
        json!("https://cdn.example.com/storage/services_images/a.png")
    );
    assert_eq!(item["sec_two"][0]["old_image"], json!("services_images/a.png"));

    // Detail context omits the raw stored path.
    let detail = content(db, &blobs).get(row.id, "en").await?;
    assert!(detail["sec_two"][0].get("old_image").is_none());

    Ok(())
}

/// Tests that an empty page is reported as not found.
///
/// Expected: NotFound
#[tokio::test]
async fn empty_list_page_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_service_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let blobs = blobs();

    let err = content(db, &blobs).list("en", 1, 10).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    Ok(())
}

/// Tests that search rejects blank queries before touching the database.
///
/// Expected: validation error on the query field
#[tokio::test]
async fn search_rejects_blank_queries() -> Result<(), AppError> {
    let test = TestBuilder::new().with_service_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let blobs = blobs();

    let err = content(db, &blobs).search("en", "  ", 1, 10).await.unwrap_err();
    assert!(matches!(err, AppError::ValidationErr(_)));

    Ok(())
}

/// Tests that search renders matches the same way as list.
///
/// Expected: Ok with the matching item rendered and counted
#[tokio::test]
async fn search_renders_matching_entities() -> Result<(), AppError> {
    let test = TestBuilder::new().with_service_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let blobs = blobs();

    let row = factory::create_service(db).await?;
    create_service_translation_with_document(
        db,
        row.id,
        "en",
        json!({"sec_one_heading_one": "Family Law Advice"}),
    )
    .await?;

    let (items, pagination) = content(db, &blobs).search("en", "family", 1, 10).await?;
    assert_eq!(pagination.total, 1);
    assert_eq!(items[0]["id"], row.id);
    assert_eq!(items[0]["sec_one_heading_one"], "Family Law Advice");

    Ok(())
}
