use super::*;

/// Tests marking a notification read, then unread again.
///
/// Verifies that `read_at` is stamped when read and cleared when unread.
///
/// Expected: Ok with the flag and timestamp toggled
#[tokio::test]
async fn toggles_read_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (school, sender, recipient) = sender_and_recipient(db).await?;
    let notification = NotificationFactory::new(db, school.id, sender.id).build().await?;
    factory::notification::create_recipient(db, notification.id, recipient.id, false).await?;
    let now = Utc.with_ymd_and_hms(2025, 4, 2, 10, 30, 0).unwrap();

    let repo = NotificationRepository::new(db);
    let row = repo
        .find_recipient(notification.id, recipient.id)
        .await?
        .unwrap();

    let read = repo.set_read(row, true, now).await?;
    assert!(read.read);
    assert_eq!(read.read_at, Some(now));

    let unread = repo.set_read(read, false, now).await?;
    assert!(!unread.read);
    assert_eq!(unread.read_at, None);

    Ok(())
}

/// Tests looking up a recipient row for a vinculo the notification was not sent to.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_recipient_returns_none_for_stranger() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (school, sender, recipient) = sender_and_recipient(db).await?;
    let notification = NotificationFactory::new(db, school.id, sender.id).build().await?;

    let row = NotificationRepository::new(db)
        .find_recipient(notification.id, recipient.id)
        .await?;

    assert!(row.is_none());

    Ok(())
}
