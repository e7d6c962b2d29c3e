mod common;

use beyondsmart_api::entities::notification::NotificationKind;
use beyondsmart_api::entities::user::UserRole;
use beyondsmart_api::errors::ServiceError;

#[tokio::test]
async fn fan_out_creates_one_row_per_recipient() {
    let state = common::test_state().await;
    let (admin, _) = common::seed_user(&state, "boss", UserRole::Admin, "pw-admin-123").await;
    let (keeper, _) = common::seed_user(&state, "keeper", UserRole::Warehouse, "pw-wh-12345").await;
    let (rep, _) = common::seed_user(&state, "rep", UserRole::Sales, "pw-sales-123").await;

    let delivered = state
        .services
        .notifications
        .notify_roles(
            &[UserRole::Admin, UserRole::Warehouse],
            NotificationKind::LowStock,
            "Low stock",
            "Smart glass is down to 3",
            None,
        )
        .await
        .unwrap();
    assert_eq!(delivered, 2);

    for user_id in [admin.id, keeper.id] {
        let inbox = state
            .services
            .notifications
            .list_for_user(user_id, true)
            .await
            .unwrap();
        assert_eq!(inbox.len(), 1);
        assert!(!inbox[0].read);
    }

    let sales_inbox = state
        .services
        .notifications
        .list_for_user(rep.id, false)
        .await
        .unwrap();
    assert!(sales_inbox.is_empty());
}

#[tokio::test]
async fn duplicate_roles_do_not_duplicate_rows() {
    let state = common::test_state().await;
    let (keeper, _) = common::seed_user(&state, "solo", UserRole::Warehouse, "pw-wh-12345").await;

    let delivered = state
        .services
        .notifications
        .notify_roles(
            &[UserRole::Warehouse, UserRole::Warehouse],
            NotificationKind::General,
            "Heads up",
            "Stocktake on Friday",
            None,
        )
        .await
        .unwrap();
    assert_eq!(delivered, 1);
    assert_eq!(
        state
            .services
            .notifications
            .unread_count(keeper.id)
            .await
            .unwrap(),
        1
    );
}

#[tokio::test]
async fn read_state_is_per_user() {
    let state = common::test_state().await;
    let (first, _) = common::seed_user(&state, "first", UserRole::Sales, "pw-sales-123").await;
    let (second, _) = common::seed_user(&state, "second", UserRole::Sales, "pw-sales-123").await;

    state
        .services
        .notifications
        .notify_roles(
            &[UserRole::Sales],
            NotificationKind::General,
            "Team note",
            "Quarterly targets posted",
            None,
        )
        .await
        .unwrap();

    let first_inbox = state
        .services
        .notifications
        .list_for_user(first.id, false)
        .await
        .unwrap();
    state
        .services
        .notifications
        .mark_read(first.id, first_inbox[0].id)
        .await
        .unwrap();

    assert_eq!(
        state.services.notifications.unread_count(first.id).await.unwrap(),
        0
    );
    assert_eq!(
        state
            .services
            .notifications
            .unread_count(second.id)
            .await
            .unwrap(),
        1
    );
}

#[tokio::test]
async fn marking_someone_elses_notification_fails() {
    let state = common::test_state().await;
    let (owner, _) = common::seed_user(&state, "owner", UserRole::Sales, "pw-sales-123").await;
    let (intruder, _) = common::seed_user(&state, "intruder", UserRole::Hr, "pw-hr-12345").await;

    state
        .services
        .notifications
        .notify_roles(
            &[UserRole::Sales],
            NotificationKind::General,
            "Private",
            "Only for sales",
            None,
        )
        .await
        .unwrap();

    let inbox = state
        .services
        .notifications
        .list_for_user(owner.id, false)
        .await
        .unwrap();
    let err = state
        .services
        .notifications
        .mark_read(intruder.id, inbox[0].id)
        .await
        .expect_err("cross-user read");
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn mark_all_read_only_touches_the_callers_rows() {
    let state = common::test_state().await;
    let (first, _) = common::seed_user(&state, "bulk1", UserRole::Finance, "pw-fin-12345").await;
    let (second, _) = common::seed_user(&state, "bulk2", UserRole::Finance, "pw-fin-12345").await;

    for body in ["one", "two", "three"] {
        state
            .services
            .notifications
            .notify_roles(
                &[UserRole::Finance],
                NotificationKind::General,
                "Bulk",
                body,
                None,
            )
            .await
            .unwrap();
    }

    let affected = state
        .services
        .notifications
        .mark_all_read(first.id)
        .await
        .unwrap();
    assert_eq!(affected, 3);
    assert_eq!(
        state.services.notifications.unread_count(first.id).await.unwrap(),
        0
    );
    assert_eq!(
        state
            .services
            .notifications
            .unread_count(second.id)
            .await
            .unwrap(),
        3
    );
}

#[tokio::test]
async fn empty_role_list_delivers_nothing() {
    let state = common::test_state().await;
    common::seed_user(&state, "nobody", UserRole::Sales, "pw-sales-123").await;

    let delivered = state
        .services
        .notifications
        .notify_roles(&[], NotificationKind::General, "Void", "Unroutable", None)
        .await
        .unwrap();
    assert_eq!(delivered, 0);
}
