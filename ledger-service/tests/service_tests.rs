use chrono::{Duration, Local};
use common::decimal::{dec, Amount};
use common::error::Error;
use common::model::account::OperationKind;
use ledger_service::LedgerService;

#[tokio::test]
async fn test_create_and_get_account() {
    let service = LedgerService::new();

    let created = service.create_account("111", "Alice").await.unwrap();
    let retrieved = service.get_account("111").await.unwrap();

    assert_eq!(retrieved.id, created.id);
    assert_eq!(retrieved.identifier, "111");
    assert_eq!(retrieved.name, "Alice");

    let missing = service.get_account("999").await;
    match missing {
        Err(Error::CustomerNotFound(_)) => (),
        _ => panic!("Expected CustomerNotFound error"),
    }
}

#[tokio::test]
async fn test_duplicate_create_leaves_single_account() {
    let service = LedgerService::new();

    service.create_account("111", "Alice").await.unwrap();
    let result = service.create_account("111", "Impostor").await;

    match result {
        Err(Error::CustomerAlreadyExists(_)) => (),
        _ => panic!("Expected CustomerAlreadyExists error"),
    }

    let account = service.get_account("111").await.unwrap();
    assert_eq!(account.name, "Alice");
}

#[tokio::test]
async fn test_balance_is_sum_of_deposits() {
    let service = LedgerService::new();
    service.create_account("111", "Alice").await.unwrap();

    let amounts = [dec!(100), dec!(250.50), dec!(0.49), dec!(1000)];
    for amount in amounts {
        service
            .deposit("111", "salary".to_string(), amount)
            .await
            .unwrap();
    }

    let expected: Amount = amounts.iter().copied().sum();
    assert_eq!(service.balance("111").await.unwrap(), expected);
}

#[tokio::test]
async fn test_withdraw_boundary() {
    let service = LedgerService::new();
    service.create_account("111", "Alice").await.unwrap();
    service
        .deposit("111", "salary".to_string(), dec!(1000))
        .await
        .unwrap();

    // Exceeding the balance fails and must not mutate the statement
    let result = service.withdraw("111", dec!(1500)).await;
    match result {
        Err(Error::InsufficientFunds(_)) => (),
        _ => panic!("Expected InsufficientFunds error"),
    }
    assert_eq!(service.statement("111").await.unwrap().len(), 1);

    // Withdrawing exactly the balance succeeds and zeroes it
    service.withdraw("111", dec!(1000)).await.unwrap();
    assert_eq!(service.balance("111").await.unwrap(), dec!(0));

    let statement = service.statement("111").await.unwrap();
    assert_eq!(statement.len(), 2);
    assert_eq!(statement[0].kind, OperationKind::Credit);
    assert_eq!(statement[1].kind, OperationKind::Debit);
}

#[tokio::test]
async fn test_negative_deposit_is_not_validated() {
    // Amount sign is deliberately unchecked; a negative credit lowers the
    // balance.
    let service = LedgerService::new();
    service.create_account("111", "Alice").await.unwrap();

    service
        .deposit("111", "correction".to_string(), dec!(-50))
        .await
        .unwrap();

    assert_eq!(service.balance("111").await.unwrap(), dec!(-50));
}

#[tokio::test]
async fn test_statement_preserves_insertion_order() {
    let service = LedgerService::new();
    service.create_account("111", "Alice").await.unwrap();

    service
        .deposit("111", "first".to_string(), dec!(10))
        .await
        .unwrap();
    service
        .deposit("111", "second".to_string(), dec!(20))
        .await
        .unwrap();
    service.withdraw("111", dec!(5)).await.unwrap();

    let statement = service.statement("111").await.unwrap();
    assert_eq!(statement.len(), 3);
    assert_eq!(statement[0].description.as_deref(), Some("first"));
    assert_eq!(statement[1].description.as_deref(), Some("second"));
    assert_eq!(statement[2].kind, OperationKind::Debit);
    assert!(statement[2].description.is_none());
}

#[tokio::test]
async fn test_statement_on_filters_by_day() {
    let service = LedgerService::new();
    service.create_account("111", "Alice").await.unwrap();
    service
        .deposit("111", "salary".to_string(), dec!(1000))
        .await
        .unwrap();

    let today = Local::now().date_naive();
    let entries = service.statement_on("111", today).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].amount, dec!(1000));

    let yesterday = today - Duration::days(1);
    let entries = service.statement_on("111", yesterday).await.unwrap();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn test_rename_changes_only_name() {
    let service = LedgerService::new();
    let created = service.create_account("111", "Alice").await.unwrap();
    service
        .deposit("111", "salary".to_string(), dec!(100))
        .await
        .unwrap();

    let renamed = service.rename("111", "Alice B.").await.unwrap();

    assert_eq!(renamed.name, "Alice B.");
    assert_eq!(renamed.id, created.id);
    assert_eq!(renamed.statement.len(), 1);
}

#[tokio::test]
async fn test_delete_account() {
    let service = LedgerService::new();
    service.create_account("111", "Alice").await.unwrap();
    service.create_account("222", "Bob").await.unwrap();

    let remaining = service.delete_account("111").await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].identifier, "222");

    let resolved = service.get_account("111").await;
    match resolved {
        Err(Error::CustomerNotFound(_)) => (),
        _ => panic!("Expected CustomerNotFound error"),
    }
}
