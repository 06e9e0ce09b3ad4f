use super::*;

/// Tests counting recipients and reads per sent notification.
///
/// Expected: Ok with totals and read counts per notification
#[tokio::test]
async fn counts_total_and_read() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (school, sender, recipient) = sender_and_recipient(db).await?;
    let second = factory::helpers::create_teacher(db, school.id).await?;
    let notification = NotificationFactory::new(db, school.id, sender.id).build().await?;
    factory::notification::create_recipient(db, notification.id, recipient.id, true).await?;
    factory::notification::create_recipient(db, notification.id, second.id, false).await?;

    let repo = NotificationRepository::new(db);
    let sent = repo.get_sent_by(sender.id, None).await?;
    let counts = repo
        .count_recipients(sent.iter().map(|n| n.id).collect())
        .await?;

    assert_eq!(sent.len(), 1);
    let entry = counts.get(&notification.id).copied().unwrap_or_default();
    assert_eq!(entry.total, 2);
    assert_eq!(entry.read, 1);

    Ok(())
}
