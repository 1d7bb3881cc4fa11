//! Transaction Application Service
//!
//! Orchestrates domain rules through the record store port.
//! Contains NO infrastructure logic - pure business orchestration.

use ledger_types::{
    AppError, ClockIdGenerator, CreateTransactionRequest, DeletedTransaction, DomainError,
    IdGenerator, MethodMapping, MethodRegistry, RecordStore, ScanFilter, Transaction,
    TransactionId, UpdateTransactionRequest,
};

/// Application service for ledger operations.
///
/// Generic over `S: RecordStore` - the adapter is injected at compile time.
/// The method registry and id generator are injected at construction too, so
/// the service itself holds no mutable state.
pub struct TransactionService<S: RecordStore> {
    store: S,
    registry: MethodRegistry,
    ids: Box<dyn IdGenerator>,
}

impl<S: RecordStore> TransactionService<S> {
    /// Creates a service with the built-in registry and clock-derived ids.
    pub fn new(store: S) -> Self {
        Self::with_parts(store, MethodRegistry::default(), Box::new(ClockIdGenerator))
    }

    /// Creates a service with an explicit registry and id generator.
    pub fn with_parts(store: S, registry: MethodRegistry, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            store,
            registry,
            ids,
        }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the method registry.
    pub fn registry(&self) -> &MethodRegistry {
        &self.registry
    }

    fn with_method_name(&self, mut tx: Transaction) -> Transaction {
        tx.method_name = Some(self.registry.name_for_code(Some(tx.method_code)).to_string());
        tx
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────────

    /// Gets a transaction by ID. A missing record is `None`, not an error.
    pub async fn get_transaction(&self, id: TransactionId) -> Result<Option<Transaction>, AppError> {
        let record = self.store.get(id).await?;
        Ok(record.map(|tx| self.with_method_name(tx)))
    }

    /// Lists every transaction in store order.
    pub async fn list_transactions(&self) -> Result<Vec<Transaction>, AppError> {
        let records = self.store.scan(None).await?;
        Ok(records
            .into_iter()
            .map(|tx| self.with_method_name(tx))
            .collect())
    }

    /// Lists transactions whose method code matches a registered method name.
    pub async fn list_transactions_by_method(
        &self,
        method_name: &str,
    ) -> Result<Vec<Transaction>, AppError> {
        let code = self.registry.code_for_name(method_name)?;

        let records = self.store.scan(Some(ScanFilter::MethodCode(code))).await?;
        Ok(records
            .into_iter()
            .map(|tx| self.with_method_name(tx))
            .collect())
    }

    /// Sums the amount of every transaction.
    pub async fn get_account_balance(&self) -> Result<f64, AppError> {
        let records = self.store.scan(None).await?;
        Ok(records.iter().fold(0.0, |acc, tx| acc + tx.amount))
    }

    /// Lists the registered payment methods.
    pub fn get_method_mapping(&self) -> Vec<MethodMapping> {
        self.registry.all_mappings()
    }

    /// Looks up the name of a registered method code, or "Unknown".
    pub fn get_method_name(&self, method_code: i64) -> &'static str {
        self.registry
            .registered_name(method_code)
            .unwrap_or("Unknown")
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Validates, labels and stores a new transaction.
    pub async fn create_transaction(
        &self,
        req: CreateTransactionRequest,
    ) -> Result<Transaction, AppError> {
        let (Some(amount), Some(counterparty_name), Some(date), Some(note), Some(status)) = (
            req.amount.filter(|a| *a != 0.0 && !a.is_nan()),
            non_empty(req.counterparty_name),
            non_empty(req.date),
            non_empty(req.note),
            non_empty(req.status),
        ) else {
            return Err(DomainError::ValidationError(
                "All fields are required to create a transaction.".into(),
            )
            .into());
        };

        let method_code = match (req.method_code.filter(|c| *c != 0), non_empty(req.method_name)) {
            (_, Some(name)) => self.registry.code_for_name(&name)?,
            (Some(code), None) => code,
            (None, None) => {
                let code = self.registry.infer_code_for_amount(amount);
                tracing::debug!(amount, method_code = code, "Inferred method code from amount");
                code
            }
        };

        let tx = self.with_method_name(Transaction {
            id: self.ids.next_id(),
            amount,
            counterparty_name,
            date,
            method_code,
            method_name: None,
            note,
            status,
        });

        self.store.put(&tx).await?;
        tracing::info!(id = %tx.id, method_code, "Created transaction");

        Ok(tx)
    }

    /// Updates the Note and/or Status of an existing transaction.
    ///
    /// The read and the write are separate store calls; a concurrent writer
    /// between them is not detected.
    pub async fn update_transaction(
        &self,
        req: UpdateTransactionRequest,
    ) -> Result<Transaction, AppError> {
        if let Some(field) = req.disallowed_field() {
            return Err(DomainError::FieldNotAllowed(field.to_string()).into());
        }

        let mut tx = self
            .store
            .get(req.id)
            .await?
            .ok_or(DomainError::TransactionNotFound(req.id))?;

        tx.apply_patch(req.note, req.status);
        let tx = self.with_method_name(tx);

        self.store.put(&tx).await?;
        tracing::info!(id = %tx.id, "Updated transaction");

        Ok(tx)
    }

    /// Deletes a transaction. Succeeds whether or not the record existed.
    pub async fn delete_transaction(
        &self,
        id: Option<TransactionId>,
    ) -> Result<DeletedTransaction, AppError> {
        let id = id.filter(|id| id.value() != 0).ok_or_else(|| {
            DomainError::ValidationError("ID is required to delete a transaction.".into())
        })?;

        self.store.delete(id).await?;
        tracing::info!(%id, "Deleted transaction");

        Ok(DeletedTransaction { id })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
