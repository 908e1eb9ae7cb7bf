use super::*;

/// Tests finding a record by primary key.
///
/// Expected: Ok(Some(model)) matching the inserted record
#[tokio::test]
async fn find_by_id_returns_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Addon).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_addon(db).await?;

    let found = repository(db).find_by_id(created.id).await?;

    assert_eq!(found, Some(created));

    Ok(())
}

/// Tests finding a primary key that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_by_id_returns_none_for_missing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Addon).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = repository(db).find_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests listing all records.
///
/// Expected: Ok with every inserted record
#[tokio::test]
async fn get_all_returns_every_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Addon).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_addon(db).await?;
    factory::create_addon(db).await?;
    factory::create_addon(db).await?;

    let all = repository(db).get_all().await?;

    assert_eq!(all.len(), 3);

    Ok(())
}

/// Tests listing records from an empty table.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn get_all_returns_empty_for_empty_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Addon).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let all = repository(db).get_all().await?;

    assert!(all.is_empty());

    Ok(())
}

/// Tests filtering records with a column expression.
///
/// Expected: Ok with only the records of the requested guild
#[tokio::test]
async fn find_where_filters_records() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Addon).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_addon(db, "100", "Economy", "on").await?;
    factory::create_guild_addon(db, "100", "Leveling", "classic").await?;
    factory::create_guild_addon(db, "200", "Economy", "off").await?;

    let matching = repository(db)
        .find_where(entity::addon::Column::GuildId.eq("100"))
        .await?;

    assert_eq!(matching.len(), 2);
    assert!(matching.iter().all(|addon| addon.guild_id == "100"));

    Ok(())
}
