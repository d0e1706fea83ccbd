use super::*;
use test_utils::factory::service::create_service_translation_with_document;

async fn seed_default_doc(db: &DatabaseConnection) -> Result<i32, AppError> {
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
    Ok(row.id)
}

/// Tests that editing another locale carries section images forward from
/// the default locale's document.
///
/// Expected: Ok with the stored path copied into the Arabic document
#[tokio::test]
async fn carries_images_forward_from_the_default_document() -> Result<(), AppError> {
    let test = TestBuilder::new().with_service_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let blobs = blobs();
    let id = seed_default_doc(db).await?;

    content(db, &blobs)
        .update(
            id,
            "ar",
            payload(json!({
                "sec_one_heading_one": "عنوان",
                "sec_two": [{"title": "استشارة"}]
            })),
            Attachments::default(),
        )
        .await?;

    let ar = ServiceStore::get_translation(db, id, "ar").await?.unwrap();
    assert_eq!(ar.document["sec_two"][0]["image"], json!("services_images/a.png"));

    // The default document is untouched when nothing new was uploaded.
    let en = ServiceStore::get_translation(db, id, "en").await?.unwrap();
    assert_eq!(en.document["sec_two"][0]["image"], json!("services_images/a.png"));

    Ok(())
}

/// Tests that a new section upload lands in both the edited and the
/// default locale's documents.
///
/// Expected: Ok with the same fresh path stored in both documents
#[tokio::test]
async fn new_upload_syncs_the_default_document() -> Result<(), AppError> {
    let test = TestBuilder::new().with_service_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let blobs = blobs();
    let id = seed_default_doc(db).await?;

    let mut attachments = Attachments::default();
    attachments
        .section_images
        .insert((SectionKey::SecTwo, 0), png());

    content(db, &blobs)
        .update(
            id,
            "ar",
            payload(json!({
                "sec_one_heading_one": "عنوان",
                "sec_two": [{"title": "استشارة"}]
            })),
            attachments,
        )
        .await?;

    let ar = ServiceStore::get_translation(db, id, "ar").await?.unwrap();
    let stored = ar.document["sec_two"][0]["image"].as_str().unwrap().to_string();
    assert!(stored.starts_with("services_images/"));
    assert_ne!(stored, "services_images/a.png");

    let en = ServiceStore::get_translation(db, id, "en").await?.unwrap();
    assert_eq!(en.document["sec_two"][0]["image"].as_str(), Some(stored.as_str()));

    Ok(())
}

/// Tests that a submitted image value never overrides the stored path.
///
/// Expected: Ok with the resubmitted URL discarded
#[tokio::test]
async fn submitted_image_values_are_not_trusted() -> Result<(), AppError> {
    let test = TestBuilder::new().with_service_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let blobs = blobs();
    let id = seed_default_doc(db).await?;

    content(db, &blobs)
        .update(
            id,
            "en",
            payload(json!({
                "sec_one_heading_one": "Family Law",
                "sec_two": [{
                    "title": "Consultation",
                    "image": "https://cdn.example.com/storage/services_images/a.png"
                }]
            })),
            Attachments::default(),
        )
        .await?;

    let en = ServiceStore::get_translation(db, id, "en").await?.unwrap();
    assert_eq!(en.document["sec_two"][0]["image"], json!("services_images/a.png"));

    Ok(())
}

/// Tests replacing the entity-level image on update.
///
/// Expected: Ok with a fresh stored path on the row
#[tokio::test]
async fn replaces_the_entity_image() -> Result<(), AppError> {
    let test = TestBuilder::new().with_service_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let blobs = blobs();
    let id = seed_default_doc(db).await?;
    let before = ServiceStore::find_entity(db, id).await?.unwrap();

    let mut attachments = Attachments::default();
    attachments.entity_image = Some(png());

    content(db, &blobs)
        .update(
            id,
            "en",
            payload(json!({"sec_one_heading_one": "Family Law"})),
            attachments,
        )
        .await?;

    let after = ServiceStore::find_entity(db, id).await?.unwrap();
    assert_ne!(after.image, before.image);
    assert!(after.image.unwrap().starts_with("services_images/"));

    Ok(())
}

/// Tests that a rejected upload leaves the current entity image in place.
///
/// Expected: StorageErr with the row and the stored file untouched
#[tokio::test]
async fn failed_upload_keeps_the_existing_entity_image() -> Result<(), AppError> {
    let test = TestBuilder::new().with_service_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dir = std::env::temp_dir().join(format!(
        "lexcms_content_test_{:08x}",
        rand::random::<u32>()
    ));
    let blobs = BlobStore::new(dir.clone(), "https://cdn.example.com");
    let service = content(db, &blobs);

    let id = service
        .create(
            "en",
            payload(json!({"sec_one_heading_one": "Family Law"})),
            attachments_with_image(),
        )
        .await?;
    let stored = ServiceStore::find_entity(db, id).await?.unwrap().image.unwrap();

    let mut attachments = Attachments::default();
    attachments.entity_image = Some(UploadedFile {
        content_type: "application/pdf".to_string(),
        bytes: vec![1],
    });

    let err = service
        .update(
            id,
            "en",
            payload(json!({"sec_one_heading_one": "Family Law"})),
            attachments,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::StorageErr(_)));

    let after = ServiceStore::find_entity(db, id).await?.unwrap();
    assert_eq!(after.image.as_deref(), Some(stored.as_str()));
    assert!(dir.join(&stored).exists());

    Ok(())
}

/// Tests update on an unknown id.
///
/// Expected: NotFound before any validation or write
#[tokio::test]
async fn unknown_id_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_service_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let blobs = blobs();

    let err = content(db, &blobs)
        .update(999, "en", payload(json!({})), Attachments::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    Ok(())
}

/// Tests that update still requires the localized heading.
///
/// Expected: validation error naming the heading field
#[tokio::test]
async fn update_requires_the_heading() -> Result<(), AppError> {
    let test = TestBuilder::new().with_service_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let blobs = blobs();
    let id = seed_default_doc(db).await?;

    let err = content(db, &blobs)
        .update(id, "en", payload(json!({"sec_two": []})), Attachments::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ValidationErr(_)));

    Ok(())
}
