use super::*;

/// Tests creating a camper from validated params.
///
/// Verifies that the repository inserts the row and returns the camper with a
/// generated id usable for lookup.
///
/// Expected: Ok with camper created
#[tokio::test]
async fn creates_camper() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CamperRepository::new(db);
    let params = CreateCamperParams::new("Alex".to_string(), 12).unwrap();
    let camper = repo.create(&params).await?;

    assert!(camper.id > 0);
    assert_eq!(camper.name, "Alex");
    assert_eq!(camper.age, 12);

    let db_camper = entity::prelude::Camper::find_by_id(camper.id).one(db).await?;
    assert!(db_camper.is_some());
    assert_eq!(db_camper.unwrap().name, "Alex");

    Ok(())
}

/// Tests that consecutive inserts receive distinct ids.
///
/// Expected: Ok with two different ids
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CamperRepository::new(db);
    let first = repo
        .create(&CreateCamperParams::new("Alex".to_string(), 12).unwrap())
        .await?;
    let second = repo
        .create(&CreateCamperParams::new("Sam".to_string(), 8).unwrap())
        .await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
