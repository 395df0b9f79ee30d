use super::*;

/// Tests adding roles skips ones already in the group.
///
/// Expected: only new roles counted, roles sorted ascending
#[tokio::test]
async fn add_roles_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RoleGroup)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoleGroupRepository::new(db);

    assert_eq!(repo.add_roles(1, "colors", &[30, 10]).await?, 2);
    assert_eq!(repo.add_roles(1, "colors", &[10, 20]).await?, 1);
    assert_eq!(repo.get_roles(1, "colors").await?, vec![10, 20, 30]);

    Ok(())
}

/// Tests group names are distinct, sorted and scoped to the guild.
///
/// Expected: names of guild 1 only
#[tokio::test]
async fn lists_group_names() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RoleGroup)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::role_group::RoleGroupFactory::new(db)
        .guild_id("2")
        .name("elsewhere")
        .build()
        .await?;

    let repo = RoleGroupRepository::new(db);
    repo.add_roles(1, "pronouns", &[1, 2]).await?;
    repo.add_roles(1, "colors", &[3]).await?;

    assert_eq!(repo.get_group_names(1).await?, vec!["colors", "pronouns"]);

    Ok(())
}

/// Tests removing some roles, then the whole group.
///
/// Expected: group shrinks, then disappears from the name list
#[tokio::test]
async fn removes_roles_and_groups() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RoleGroup)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoleGroupRepository::new(db);
    repo.add_roles(1, "colors", &[1, 2, 3]).await?;

    assert_eq!(repo.remove_roles(1, "colors", &[2, 9]).await?, 1);
    assert_eq!(repo.get_roles(1, "colors").await?, vec![1, 3]);

    assert_eq!(repo.delete_group(1, "colors").await?, 2);
    assert!(repo.get_group_names(1).await?.is_empty());
    assert!(repo.get_roles(1, "colors").await?.is_empty());

    Ok(())
}
