use super::*;

/// Tests updating both fields of a camper.
///
/// Expected: Ok(Some(camper)) with both fields changed
#[tokio::test]
async fn updates_all_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::camper::create_camper(db).await?;

    let repo = CamperRepository::new(db);
    let params = UpdateCamperParams::new(Some("Jordan".to_string()), Some(16)).unwrap();
    let updated = repo.update(created.id, &params).await?.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Jordan");
    assert_eq!(updated.age, 16);

    let db_camper = entity::prelude::Camper::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_camper.name, "Jordan");
    assert_eq!(db_camper.age, 16);

    Ok(())
}

/// Tests that fields omitted from the update keep their value.
///
/// Expected: Ok(Some(camper)) with only the age changed
#[tokio::test]
async fn keeps_omitted_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::camper::CamperFactory::new(db)
        .name("Alex")
        .age(10)
        .build()
        .await?;

    let repo = CamperRepository::new(db);
    let params = UpdateCamperParams::new(None, Some(11)).unwrap();
    let updated = repo.update(created.id, &params).await?.unwrap();

    assert_eq!(updated.name, "Alex");
    assert_eq!(updated.age, 11);

    Ok(())
}

/// Tests an update that changes nothing.
///
/// Expected: Ok(Some(camper)) equal to the stored row
#[tokio::test]
async fn empty_update_returns_current_camper() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::camper::create_camper(db).await?;

    let repo = CamperRepository::new(db);
    let updated = repo
        .update(created.id, &UpdateCamperParams::default())
        .await?
        .unwrap();

    assert_eq!(updated.name, created.name);
    assert_eq!(updated.age, created.age);

    Ok(())
}

/// Tests updating a camper that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_camper() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CamperRepository::new(db);
    let params = UpdateCamperParams::new(Some("Jordan".to_string()), None).unwrap();
    let updated = repo.update(999, &params).await?;

    assert!(updated.is_none());

    Ok(())
}
