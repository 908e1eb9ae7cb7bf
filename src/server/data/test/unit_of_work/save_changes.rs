use super::*;

fn param(addon_type: AddonType, value: &str) -> UpsertAddonParam {
    UpsertAddonParam {
        guild_id: 555,
        addon_type,
        value: value.to_string(),
    }
}

/// Tests that saved changes become visible outside the unit of work.
///
/// Expected: all four records readable through the pool after commit
#[tokio::test]
async fn commits_all_pending_changes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let unit_of_work = UnitOfWork::begin(db).await?;
    for addon_type in AddonType::ALL {
        unit_of_work.addons().upsert(param(addon_type, "on")).await?;
    }
    unit_of_work.save_changes().await?;

    let count = Addon::find().count(db).await?;
    assert_eq!(count, 4);

    Ok(())
}

/// Tests that dropping a unit of work discards its changes.
///
/// Expected: no records persisted
#[tokio::test]
async fn discards_changes_when_dropped() -> Result<(), AppError> {
    let test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    {
        let unit_of_work = UnitOfWork::begin(db).await?;
        unit_of_work
            .addons()
            .upsert(param(AddonType::Economy, "on"))
            .await?;
        unit_of_work
            .addons()
            .upsert(param(AddonType::Leveling, "classic"))
            .await?;
    }

    let count = Addon::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests that repositories of one unit of work see each other's pending writes.
///
/// Expected: a second upsert of the same key updates rather than duplicates
#[tokio::test]
async fn repositories_share_the_transaction() -> Result<(), AppError> {
    let test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let unit_of_work = UnitOfWork::begin(db).await?;
    let first = unit_of_work
        .addons()
        .upsert(param(AddonType::Economy, "on"))
        .await?;
    let second = unit_of_work
        .addons()
        .upsert(param(AddonType::Economy, "off"))
        .await?;
    unit_of_work.save_changes().await?;

    assert_eq!(first.id, second.id);
    let stored = Addon::find_by_id(first.id).one(db).await?.unwrap();
    assert_eq!(stored.value, "off");

    Ok(())
}
