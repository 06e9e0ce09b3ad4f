use super::*;

/// Tests fetching an inbox.
///
/// Verifies that items come newest first, are capped at the limit and only
/// include notifications addressed to the recipient.
///
/// Expected: Ok with the two newest notifications
#[tokio::test]
async fn returns_newest_first_up_to_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (school, sender, recipient) = sender_and_recipient(db).await?;
    let base = Utc.with_ymd_and_hms(2025, 4, 1, 9, 0, 0).unwrap();

    let mut created = Vec::new();
    for offset in 0..3 {
        let notification = NotificationFactory::new(db, school.id, sender.id)
            .created_at(base + Duration::hours(offset))
            .build()
            .await?;
        factory::notification::create_recipient(db, notification.id, recipient.id, false).await?;
        created.push(notification);
    }
    let not_mine = NotificationFactory::new(db, school.id, sender.id)
        .created_at(base + Duration::days(1))
        .build()
        .await?;
    factory::notification::create_recipient(db, not_mine.id, sender.id, false).await?;

    let inbox = NotificationRepository::new(db)
        .get_inbox(recipient.id, false, 2)
        .await?;

    let ids: Vec<_> = inbox.iter().map(|(_, n)| n.id).collect();
    assert_eq!(ids, vec![created[2].id, created[1].id]);

    Ok(())
}

/// Tests fetching only unread notifications.
///
/// Expected: Ok with the read notification left out and the unread count matching
#[tokio::test]
async fn filters_unread() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (school, sender, recipient) = sender_and_recipient(db).await?;
    let read = NotificationFactory::new(db, school.id, sender.id).build().await?;
    let unread = NotificationFactory::new(db, school.id, sender.id).build().await?;
    factory::notification::create_recipient(db, read.id, recipient.id, true).await?;
    factory::notification::create_recipient(db, unread.id, recipient.id, false).await?;

    let repo = NotificationRepository::new(db);
    let inbox = repo.get_inbox(recipient.id, true, 10).await?;

    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0].1.id, unread.id);
    assert_eq!(repo.count_unread(recipient.id).await?, 1);

    Ok(())
}
