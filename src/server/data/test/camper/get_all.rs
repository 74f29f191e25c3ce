use super::*;

/// Tests listing campers from an empty table.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list_when_no_campers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CamperRepository::new(db);
    let campers = repo.get_all().await?;

    assert!(campers.is_empty());

    Ok(())
}

/// Tests listing several campers.
///
/// Verifies that every camper is returned in id order.
///
/// Expected: Ok with all campers ordered by id
#[tokio::test]
async fn returns_campers_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::camper::CamperFactory::new(db).name("Zoe").build().await?;
    let second = factory::camper::CamperFactory::new(db).name("Alex").build().await?;

    let repo = CamperRepository::new(db);
    let campers = repo.get_all().await?;

    let ids: Vec<i32> = campers.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(campers[0].name, "Zoe");

    Ok(())
}
