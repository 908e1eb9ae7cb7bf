use super::*;

/// Tests inserting a single record.
///
/// Expected: Ok(model) with generated ID, stored in database
#[tokio::test]
async fn add_inserts_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Addon).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = repository(db);

    let created = repo.add(new_addon("100", "Economy", "on")).await?;

    assert_eq!(created.guild_id, "100");
    assert_eq!(created.addon_type, "Economy");
    assert_eq!(created.value, "on");
    assert_eq!(repo.find_by_id(created.id).await?, Some(created));

    Ok(())
}

/// Tests inserting several records at once.
///
/// Expected: Ok(3) and three stored records
#[tokio::test]
async fn add_range_inserts_all_records() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Addon).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = repository(db);

    let inserted = repo
        .add_range(vec![
            new_addon("100", "TicTacToe", "on"),
            new_addon("100", "Economy", "on"),
            new_addon("100", "Leveling", "classic"),
        ])
        .await?;

    assert_eq!(inserted, 3);
    assert_eq!(repo.get_all().await?.len(), 3);

    Ok(())
}

/// Tests inserting an empty batch.
///
/// Expected: Ok(0) with nothing stored
#[tokio::test]
async fn add_range_with_no_records_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Addon).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = repository(db);

    let inserted = repo
        .add_range(Vec::<entity::addon::ActiveModel>::new())
        .await?;

    assert_eq!(inserted, 0);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}

/// Tests updating an existing record.
///
/// Expected: Ok(model) with the new value and the same ID
#[tokio::test]
async fn update_writes_set_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Addon).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = repository(db);

    let created = factory::create_guild_addon(db, "100", "Economy", "on").await?;

    let mut active = created.clone().into_active_model();
    active.value = ActiveValue::Set("off".to_string());
    let updated = repo.update(active).await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.value, "off");

    Ok(())
}

/// Tests inserting with a conflict clause when no record holds the key yet.
///
/// Expected: Ok(model) inserted as given
#[tokio::test]
async fn add_or_update_inserts_new_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = repository(db);

    let stored = repo
        .add_or_update(new_addon("100", "Economy", "on"), value_on_conflict())
        .await?;

    assert_eq!(stored.value, "on");
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}

/// Tests that a conflicting key updates only the listed columns of the existing record.
///
/// Expected: Ok(model) with the original ID and the new value; no second record
#[tokio::test]
async fn add_or_update_overwrites_conflicting_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = repository(db);

    let first = repo.add(new_addon("100", "Economy", "on")).await?;
    let stored = repo
        .add_or_update(new_addon("100", "Economy", "off"), value_on_conflict())
        .await?;

    assert_eq!(stored.id, first.id);
    assert_eq!(stored.value, "off");
    assert_eq!(stored.created_at, first.created_at);
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}

fn value_on_conflict() -> OnConflict {
    OnConflict::columns([entity::addon::Column::GuildId, entity::addon::Column::AddonType])
        .update_columns([entity::addon::Column::Value])
        .to_owned()
}
