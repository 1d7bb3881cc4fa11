//! TransactionService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};

    use async_trait::async_trait;

    use ledger_types::{
        AppError, CreateTransactionRequest, IdGenerator, MethodRegistry, RecordStore, ScanFilter,
        StoreError, Transaction, TransactionId, UpdateTransactionRequest,
    };

    use crate::TransactionService;

    /// Simple in-memory store for testing the service layer.
    #[derive(Default)]
    pub struct MockStore {
        records: Mutex<HashMap<TransactionId, Transaction>>,
        puts: AtomicUsize,
        fail_writes: bool,
    }

    impl MockStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_records(records: Vec<Transaction>) -> Self {
            let store = Self::new();
            store
                .records
                .lock()
                .unwrap()
                .extend(records.into_iter().map(|r| (r.id, r)));
            store
        }

        fn failing() -> Self {
            Self {
                fail_writes: true,
                ..Self::default()
            }
        }

        fn put_count(&self) -> usize {
            self.puts.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RecordStore for MockStore {
        async fn get(&self, id: TransactionId) -> Result<Option<Transaction>, StoreError> {
            Ok(self.records.lock().unwrap().get(&id).cloned())
        }

        async fn put(&self, record: &Transaction) -> Result<(), StoreError> {
            if self.fail_writes {
                return Err(StoreError::Database("connection reset".into()));
            }
            self.puts.fetch_add(1, Ordering::SeqCst);
            self.records
                .lock()
                .unwrap()
                .insert(record.id, record.clone());
            Ok(())
        }

        async fn scan(&self, filter: Option<ScanFilter>) -> Result<Vec<Transaction>, StoreError> {
            Ok(self
                .records
                .lock()
                .unwrap()
                .values()
                .filter(|r| filter.as_ref().is_none_or(|f| f.matches(r)))
                .cloned()
                .collect())
        }

        async fn delete(&self, id: TransactionId) -> Result<(), StoreError> {
            self.records.lock().unwrap().remove(&id);
            Ok(())
        }
    }

    /// Hands out 1, 2, 3, ...
    struct SequenceIds(AtomicI64);

    impl IdGenerator for SequenceIds {
        fn next_id(&self) -> TransactionId {
            TransactionId::new(self.0.fetch_add(1, Ordering::SeqCst) + 1)
        }
    }

    fn service(store: MockStore) -> TransactionService<MockStore> {
        TransactionService::with_parts(
            store,
            MethodRegistry::default(),
            Box::new(SequenceIds(AtomicI64::new(0))),
        )
    }

    pub fn record(id: i64, amount: f64, method_code: i64) -> Transaction {
        Transaction {
            id: TransactionId::new(id),
            amount,
            counterparty_name: "Acme Corp".to_string(),
            date: "2023-09-01T12:00:00.000Z".to_string(),
            method_code,
            method_name: None,
            note: "Test".to_string(),
            status: "Posted".to_string(),
        }
    }

    fn create_request(amount: f64) -> CreateTransactionRequest {
        CreateTransactionRequest {
            amount: Some(amount),
            counterparty_name: Some("Hooper".to_string()),
            date: Some("2023-09-01T12:00:00.000Z".to_string()),
            note: Some("Test".to_string()),
            status: Some("Completed".to_string()),
            method_code: None,
            method_name: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_get_transaction_derives_method_name() {
        let mut stale = record(1, 100.0, 56);
        stale.method_name = Some("Fee".to_string());
        let service = service(MockStore::with_records(vec![stale]));

        let tx = service
            .get_transaction(TransactionId::new(1))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(tx.amount, 100.0);
        assert_eq!(tx.method_name.as_deref(), Some("Wire"));
    }

    #[tokio::test]
    async fn test_get_missing_transaction_is_none() {
        let service = service(MockStore::new());

        let result = service.get_transaction(TransactionId::new(404)).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_list_transactions() {
        let service = service(MockStore::with_records(vec![
            record(1, 10.0, 12),
            record(2, -3.0, 91),
            record(3, 1.0, 13),
        ]));

        let mut txs = service.list_transactions().await.unwrap();
        txs.sort_by_key(|t| t.id);

        let names: Vec<_> = txs.iter().map(|t| t.method_name.as_deref()).collect();
        assert_eq!(
            names,
            vec![Some("Card Purchase"), Some("Outgoing"), Some("Outgoing")]
        );
    }

    #[tokio::test]
    async fn test_list_transactions_empty_store() {
        let service = service(MockStore::new());

        assert!(service.list_transactions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_transactions_by_method_filters_on_code() {
        let service = service(MockStore::with_records(vec![
            record(1, 10.0, 56),
            record(2, 20.0, 12),
            record(3, 30.0, 56),
        ]));

        let mut txs = service.list_transactions_by_method("Wire").await.unwrap();
        txs.sort_by_key(|t| t.id);

        assert_eq!(txs.len(), 2);
        assert!(txs.iter().all(|t| t.method_code == 56));
        assert!(txs.iter().all(|t| t.method_name.as_deref() == Some("Wire")));
    }

    #[tokio::test]
    async fn test_list_transactions_by_unknown_method_fails() {
        let service = service(MockStore::with_records(vec![record(1, 10.0, 56)]));

        let result = service.list_transactions_by_method("Bogus").await;

        assert!(matches!(result, Err(AppError::InvalidMethodName(ref n)) if n == "Bogus"));
    }

    #[tokio::test]
    async fn test_account_balance_sums_amounts() {
        let service = service(MockStore::with_records(vec![
            record(1, 100.0, 12),
            record(2, 50.0, 34),
        ]));

        assert_eq!(service.get_account_balance().await.unwrap(), 150.0);
    }

    #[tokio::test]
    async fn test_account_balance_empty_store_is_zero() {
        let service = service(MockStore::new());

        let balance = service.get_account_balance().await.unwrap();
        assert_eq!(balance, 0.0);
        assert!(!balance.is_sign_negative());
    }

    #[tokio::test]
    async fn test_account_balance_with_negative_amounts() {
        let service = service(MockStore::with_records(vec![
            record(1, 100.0, 12),
            record(2, -150.0, 78),
        ]));

        assert_eq!(service.get_account_balance().await.unwrap(), -50.0);
    }

    #[test]
    fn test_method_mapping() {
        let service = service(MockStore::new());

        let mapping: Vec<_> = service
            .get_method_mapping()
            .into_iter()
            .map(|m| (m.method_code, m.method_name))
            .collect();

        assert_eq!(
            mapping,
            vec![
                (12, "Card Purchase".to_string()),
                (34, "ACH".to_string()),
                (56, "Wire".to_string()),
                (78, "Fee".to_string()),
            ]
        );
    }

    #[test]
    fn test_method_name_lookup() {
        let service = service(MockStore::new());

        assert_eq!(service.get_method_name(34), "ACH");
        assert_eq!(service.get_method_name(90), "Unknown");
        assert_eq!(service.get_method_name(1), "Unknown");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Create
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_create_positive_amount_infers_incoming() {
        let service = service(MockStore::new());

        let tx = service.create_transaction(create_request(100.0)).await.unwrap();

        assert_eq!(tx.id, TransactionId::new(1));
        assert_eq!(tx.method_code, 90);
        assert_eq!(tx.method_name.as_deref(), Some("Incoming"));
        assert_eq!(tx.counterparty_name, "Hooper");
    }

    #[tokio::test]
    async fn test_create_negative_amount_infers_outgoing() {
        let service = service(MockStore::new());

        let tx = service.create_transaction(create_request(-5.0)).await.unwrap();

        assert_eq!(tx.method_code, 91);
        assert_eq!(tx.method_name.as_deref(), Some("Outgoing"));
    }

    #[tokio::test]
    async fn test_create_with_method_code_derives_name() {
        let service = service(MockStore::new());

        let tx = service
            .create_transaction(CreateTransactionRequest {
                method_code: Some(34),
                ..create_request(-20.0)
            })
            .await
            .unwrap();

        assert_eq!(tx.method_code, 34);
        assert_eq!(tx.method_name.as_deref(), Some("ACH"));
    }

    #[tokio::test]
    async fn test_create_with_method_name_overrides_code() {
        let service = service(MockStore::new());

        let tx = service
            .create_transaction(CreateTransactionRequest {
                method_code: Some(12),
                method_name: Some("Wire".to_string()),
                ..create_request(-20.0)
            })
            .await
            .unwrap();

        assert_eq!(tx.method_code, 56);
        assert_eq!(tx.method_name.as_deref(), Some("Wire"));
    }

    #[tokio::test]
    async fn test_create_with_unknown_method_name_fails() {
        let store = MockStore::new();
        let service = service(store);

        let result = service
            .create_transaction(CreateTransactionRequest {
                method_name: Some("Barter".to_string()),
                ..create_request(10.0)
            })
            .await;

        assert!(matches!(result, Err(AppError::InvalidMethodName(_))));
        assert_eq!(service.store().put_count(), 0);
    }

    #[tokio::test]
    async fn test_create_with_unregistered_code_is_labeled_outgoing() {
        let service = service(MockStore::new());

        let tx = service
            .create_transaction(CreateTransactionRequest {
                method_code: Some(77),
                ..create_request(10.0)
            })
            .await
            .unwrap();

        assert_eq!(tx.method_code, 77);
        assert_eq!(tx.method_name.as_deref(), Some("Outgoing"));
    }

    #[tokio::test]
    async fn test_create_persists_record() {
        let service = service(MockStore::new());

        let created = service.create_transaction(create_request(42.0)).await.unwrap();
        let fetched = service.get_transaction(created.id).await.unwrap().unwrap();

        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_missing_field_fails() {
        let service = service(MockStore::new());

        let result = service
            .create_transaction(CreateTransactionRequest {
                note: None,
                ..create_request(10.0)
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(service.store().put_count(), 0);
    }

    #[tokio::test]
    async fn test_create_falsy_fields_fail() {
        let service = service(MockStore::new());

        let zero_amount = service.create_transaction(create_request(0.0)).await;
        let empty_status = service
            .create_transaction(CreateTransactionRequest {
                status: Some(String::new()),
                ..create_request(10.0)
            })
            .await;

        assert!(matches!(zero_amount, Err(AppError::Validation(_))));
        assert!(matches!(empty_status, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_store_failure_surfaces_cause() {
        let service = service(MockStore::failing());

        let err = service
            .create_transaction(create_request(10.0))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Store(_)));
        assert!(err.to_string().contains("connection reset"));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Update
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_update_note_and_status() {
        let service = service(MockStore::with_records(vec![record(1, 10.0, 12)]));

        let tx = service
            .update_transaction(UpdateTransactionRequest::new(
                TransactionId::new(1),
                Some("Reimbursed".to_string()),
                Some("Cleared".to_string()),
            ))
            .await
            .unwrap();

        assert_eq!(tx.note, "Reimbursed");
        assert_eq!(tx.status, "Cleared");
        assert_eq!(tx.amount, 10.0);
        assert_eq!(tx.method_name.as_deref(), Some("Card Purchase"));

        let stored = service
            .get_transaction(TransactionId::new(1))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored, tx);
    }

    #[tokio::test]
    async fn test_update_omitted_field_keeps_value() {
        let service = service(MockStore::with_records(vec![record(1, 10.0, 12)]));

        let tx = service
            .update_transaction(UpdateTransactionRequest::new(
                TransactionId::new(1),
                None,
                Some("Cleared".to_string()),
            ))
            .await
            .unwrap();

        assert_eq!(tx.note, "Test");
        assert_eq!(tx.status, "Cleared");
    }

    #[tokio::test]
    async fn test_update_disallowed_field_fails_before_write() {
        let service = service(MockStore::with_records(vec![record(1, 10.0, 12)]));
        let req: UpdateTransactionRequest =
            serde_json::from_value(serde_json::json!({ "ID": 1, "Amount": 5 })).unwrap();

        let err = service.update_transaction(req).await.unwrap_err();

        assert!(matches!(err, AppError::FieldNotAllowed(ref f) if f == "Amount"));
        assert_eq!(err.to_string(), "Updates to the Amount field are not allowed.");
        assert_eq!(service.store().put_count(), 0);
    }

    #[tokio::test]
    async fn test_update_missing_transaction_fails() {
        let service = service(MockStore::new());

        let result = service
            .update_transaction(UpdateTransactionRequest::new(
                TransactionId::new(9),
                Some("x".to_string()),
                None,
            ))
            .await;

        assert!(matches!(result, Err(AppError::NotFound(id)) if id == TransactionId::new(9)));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Delete
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_delete_existing_transaction() {
        let service = service(MockStore::with_records(vec![record(1, 10.0, 12)]));

        let deleted = service
            .delete_transaction(Some(TransactionId::new(1)))
            .await
            .unwrap();

        assert_eq!(deleted.id, TransactionId::new(1));
        assert!(
            service
                .get_transaction(TransactionId::new(1))
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_delete_missing_transaction_still_succeeds() {
        let service = service(MockStore::new());

        let deleted = service
            .delete_transaction(Some(TransactionId::new(1)))
            .await
            .unwrap();

        assert_eq!(deleted.id, TransactionId::new(1));
    }

    #[tokio::test]
    async fn test_delete_without_id_fails() {
        let service = service(MockStore::new());

        assert!(matches!(
            service.delete_transaction(None).await,
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            service.delete_transaction(Some(TransactionId::new(0))).await,
            Err(AppError::Validation(_))
        ));
    }
}
