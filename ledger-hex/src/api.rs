//! Inbound operation contract.
//!
//! The transport layer drives the service through this trait so it does not
//! need to know which record store the service was built with.

use std::sync::Arc;

use async_trait::async_trait;

use ledger_types::{
    AppError, CreateTransactionRequest, DeletedTransaction, MethodMapping, RecordStore,
    Transaction, TransactionId, UpdateTransactionRequest,
};

use crate::TransactionService;

/// The ledger operations exposed to clients.
#[async_trait]
pub trait LedgerApi: Send + Sync + 'static {
    async fn get_transaction(&self, id: TransactionId) -> Result<Option<Transaction>, AppError>;

    async fn list_transactions(&self) -> Result<Vec<Transaction>, AppError>;

    async fn list_transactions_by_method(
        &self,
        method_name: &str,
    ) -> Result<Vec<Transaction>, AppError>;

    async fn get_account_balance(&self) -> Result<f64, AppError>;

    fn get_method_mapping(&self) -> Vec<MethodMapping>;

    fn get_method_name(&self, method_code: i64) -> &'static str;

    async fn create_transaction(
        &self,
        req: CreateTransactionRequest,
    ) -> Result<Transaction, AppError>;

    async fn update_transaction(
        &self,
        req: UpdateTransactionRequest,
    ) -> Result<Transaction, AppError>;

    async fn delete_transaction(
        &self,
        id: Option<TransactionId>,
    ) -> Result<DeletedTransaction, AppError>;
}

/// Shared handle to the ledger operations.
pub type SharedLedger = Arc<dyn LedgerApi>;

#[async_trait]
impl<S: RecordStore> LedgerApi for TransactionService<S> {
    async fn get_transaction(&self, id: TransactionId) -> Result<Option<Transaction>, AppError> {
        TransactionService::get_transaction(self, id).await
    }

    async fn list_transactions(&self) -> Result<Vec<Transaction>, AppError> {
        TransactionService::list_transactions(self).await
    }

    async fn list_transactions_by_method(
        &self,
        method_name: &str,
    ) -> Result<Vec<Transaction>, AppError> {
        TransactionService::list_transactions_by_method(self, method_name).await
    }

    async fn get_account_balance(&self) -> Result<f64, AppError> {
        TransactionService::get_account_balance(self).await
    }

    fn get_method_mapping(&self) -> Vec<MethodMapping> {
        TransactionService::get_method_mapping(self)
    }

    fn get_method_name(&self, method_code: i64) -> &'static str {
        TransactionService::get_method_name(self, method_code)
    }

    async fn create_transaction(
        &self,
        req: CreateTransactionRequest,
    ) -> Result<Transaction, AppError> {
        TransactionService::create_transaction(self, req).await
    }

    async fn update_transaction(
        &self,
        req: UpdateTransactionRequest,
    ) -> Result<Transaction, AppError> {
        TransactionService::update_transaction(self, req).await
    }

    async fn delete_transaction(
        &self,
        id: Option<TransactionId>,
    ) -> Result<DeletedTransaction, AppError> {
        TransactionService::delete_transaction(self, id).await
    }
}
