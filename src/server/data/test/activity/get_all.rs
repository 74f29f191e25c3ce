use super::*;

/// Tests listing activities.
///
/// Expected: Ok with activities ordered by id
#[tokio::test]
async fn returns_activities_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let archery = factory::activity::ActivityFactory::new(db)
        .name("Archery")
        .difficulty(3)
        .build()
        .await?;
    let canoeing = factory::activity::ActivityFactory::new(db)
        .name("Canoeing")
        .build()
        .await?;

    let repo = ActivityRepository::new(db);
    let activities = repo.get_all().await?;

    assert_eq!(activities.len(), 2);
    assert_eq!(activities[0].id, archery.id);
    assert_eq!(activities[0].difficulty, 3);
    assert_eq!(activities[1].id, canoeing.id);

    Ok(())
}
