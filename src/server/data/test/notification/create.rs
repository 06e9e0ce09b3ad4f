use super::*;

/// Tests creating a notification for several recipients.
///
/// Verifies that one unread recipient row is written per distinct recipient,
/// collapsing duplicates in the input.
///
/// Expected: Ok with the notification and two recipient rows
#[tokio::test]
async fn creates_one_row_per_distinct_recipient() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (school, sender, recipient) = sender_and_recipient(db).await?;
    let second = factory::helpers::create_teacher(db, school.id).await?;

    let notification = NotificationRepository::new(db)
        .create(
            params(school.id, sender.id, vec![recipient.id, second.id, recipient.id]),
            Utc::now(),
        )
        .await?;

    assert_eq!(notification.kind, "comunicacion");
    assert_eq!(notification.sender_vinculo_id, sender.id);

    let recipients = entity::prelude::NotificationRecipient::find().all(db).await?;
    assert_eq!(recipients.len(), 2);
    assert!(recipients.iter().all(|r| !r.read && r.read_at.is_none()));

    Ok(())
}

/// Tests creating a notification with no recipients.
///
/// Expected: Ok with the notification stored and no recipient rows
#[tokio::test]
async fn creates_notification_without_recipients() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (school, sender, _) = sender_and_recipient(db).await?;

    NotificationRepository::new(db)
        .create(params(school.id, sender.id, Vec::new()), Utc::now())
        .await?;

    assert_eq!(entity::prelude::Notification::find().count(db).await?, 1);
    assert_eq!(entity::prelude::NotificationRecipient::find().count(db).await?, 0);

    Ok(())
}
