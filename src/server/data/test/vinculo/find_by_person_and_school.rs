use super::*;

/// Tests resolving a person's vinculo at a specific school.
///
/// Verifies that a person linked to two schools resolves to the vinculo of the
/// requested one.
///
/// Expected: Ok(Some) with the matching vinculo
#[tokio::test]
async fn resolves_vinculo_for_school() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_school(db).await?;
    let second = factory::create_school(db).await?;
    let person = PersonFactory::new(db).build().await?;
    VinculoFactory::new(db, first.id)
        .person_id(person.id)
        .build()
        .await?;
    let expected = VinculoFactory::new(db, second.id)
        .person_id(person.id)
        .build()
        .await?;

    let result = VinculoRepository::new(db)
        .find_by_person_and_school(person.id, second.id)
        .await?;

    assert_eq!(result.map(|v| v.id), Some(expected.id));

    Ok(())
}

/// Tests resolving a person with no vinculo at the school.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::create_school(db).await?;
    let person = PersonFactory::new(db).build().await?;

    let result = VinculoRepository::new(db)
        .find_by_person_and_school(person.id, school.id)
        .await?;

    assert!(result.is_none());

    Ok(())
}
