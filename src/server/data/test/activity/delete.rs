use super::*;

/// Tests deleting an activity.
///
/// Expected: Ok(1) and the row is gone
#[tokio::test]
async fn deletes_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::activity::create_activity(db).await?;

    let repo = ActivityRepository::new(db);
    let rows = repo.delete(activity.id).await?;

    assert_eq!(rows, 1);
    let db_activity = entity::prelude::Activity::find_by_id(activity.id)
        .one(db)
        .await?;
    assert!(db_activity.is_none());

    Ok(())
}

/// Tests deleting an activity that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_missing_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ActivityRepository::new(db);
    let rows = repo.delete(999).await?;

    assert_eq!(rows, 0);

    Ok(())
}

/// Tests that deleting an activity cascades to its signups only.
///
/// Verifies that signups for other activities and the campers themselves survive.
///
/// Expected: Ok with exactly the activity's signups removed
#[tokio::test]
async fn cascades_to_owned_signups() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camper = factory::camper::create_camper(db).await?;
    let doomed = factory::activity::create_activity(db).await?;
    let kept = factory::activity::create_activity(db).await?;
    factory::signup::create_signup(db, camper.id, doomed.id).await?;
    factory::signup::create_signup(db, camper.id, doomed.id).await?;
    let survivor = factory::signup::create_signup(db, camper.id, kept.id).await?;

    let repo = ActivityRepository::new(db);
    repo.delete(doomed.id).await?;

    let remaining = entity::prelude::Signup::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, survivor.id);
    assert!(entity::prelude::Camper::find_by_id(camper.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
