use super::*;

/// Tests finding an existing camper.
///
/// Expected: Ok(Some(camper))
#[tokio::test]
async fn returns_existing_camper() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::camper::CamperFactory::new(db)
        .name("Alex")
        .age(14)
        .build()
        .await?;

    let repo = CamperRepository::new(db);
    let camper = repo.find_by_id(created.id).await?;

    assert!(camper.is_some());
    let camper = camper.unwrap();
    assert_eq!(camper.id, created.id);
    assert_eq!(camper.name, "Alex");
    assert_eq!(camper.age, 14);

    Ok(())
}

/// Tests finding a camper that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_camper() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CamperRepository::new(db);
    let camper = repo.find_by_id(999).await?;

    assert!(camper.is_none());

    Ok(())
}
