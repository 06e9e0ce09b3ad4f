use super::*;

/// Tests listing a school's administrators.
///
/// Verifies that both administrator roles are included, teachers are not,
/// and admins of other schools are left out.
///
/// Expected: Ok with the two administrators and their contact rows
#[tokio::test]
async fn returns_admins_of_school() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::create_school(db).await?;
    let other_school = factory::create_school(db).await?;

    let person = PersonFactory::new(db)
        .first_name("Marta")
        .email("marta@example.com")
        .build()
        .await?;
    let principal = VinculoFactory::new(db, school.id)
        .role("administrador")
        .person_id(person.id)
        .build()
        .await?;
    let clerk = VinculoFactory::new(db, school.id)
        .role("administrativo")
        .build()
        .await?;
    factory::helpers::create_teacher(db, school.id).await?;
    VinculoFactory::new(db, other_school.id)
        .role("administrador")
        .build()
        .await?;

    let admins = VinculoRepository::new(db).get_school_admins(school.id).await?;

    let mut ids: Vec<_> = admins.iter().map(|(v, _, _)| v.id).collect();
    ids.sort();
    let mut expected = vec![principal.id, clerk.id];
    expected.sort();
    assert_eq!(ids, expected);

    let (_, marta, contact) = admins
        .iter()
        .find(|(v, _, _)| v.id == principal.id)
        .unwrap();
    assert_eq!(marta.first_name, "Marta");
    assert_eq!(
        contact.as_ref().and_then(|c| c.email.as_deref()),
        Some("marta@example.com")
    );

    Ok(())
}

/// Tests listing administrators when no admin role exists yet.
///
/// Expected: Ok with empty Vec
#[tokio::test]
async fn returns_empty_without_admin_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::create_school(db).await?;
    factory::helpers::create_teacher(db, school.id).await?;

    let admins = VinculoRepository::new(db).get_school_admins(school.id).await?;

    assert!(admins.is_empty());

    Ok(())
}
