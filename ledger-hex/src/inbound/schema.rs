//! GraphQL schema: query and mutation roots.
//!
//! Argument and field names follow the PascalCase wire format of the records.

use async_graphql::{
    Context, EmptySubscription, ErrorExtensions, Object, Result, Schema, extensions::Tracing,
};

use ledger_types::{
    AppError, CreateTransactionRequest, DeletedTransaction, MethodMapping, Transaction,
    TransactionId, UpdateTransactionRequest,
};

use crate::api::SharedLedger;

pub type LedgerSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the executable schema around a ledger handle.
pub fn build_schema(ledger: SharedLedger) -> LedgerSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(ledger)
        .extension(Tracing)
        .finish()
}

/// Wrapper to attach an error code to AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.0.code();
        async_graphql::Error::new(self.0.to_string()).extend_with(|_, ext| ext.set("code", code))
    }
}

fn gql(err: AppError) -> async_graphql::Error {
    ApiError(err).extend()
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Fetches one transaction, or null if the ID is unknown.
    async fn get_transaction(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "ID")] id: TransactionId,
    ) -> Result<Option<Transaction>> {
        let ledger = ctx.data::<SharedLedger>()?;
        ledger.get_transaction(id).await.map_err(gql)
    }

    async fn list_transactions(&self, ctx: &Context<'_>) -> Result<Vec<Transaction>> {
        let ledger = ctx.data::<SharedLedger>()?;
        ledger.list_transactions().await.map_err(gql)
    }

    /// Transactions paid with the named method.
    async fn list_transactions_by_method(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "MethodName")] method_name: String,
    ) -> Result<Vec<Transaction>> {
        let ledger = ctx.data::<SharedLedger>()?;
        ledger
            .list_transactions_by_method(&method_name)
            .await
            .map_err(gql)
    }

    /// Sum of all transaction amounts.
    async fn get_account_balance(&self, ctx: &Context<'_>) -> Result<f64> {
        let ledger = ctx.data::<SharedLedger>()?;
        ledger.get_account_balance().await.map_err(gql)
    }

    /// Registered payment methods, in registry order. Each entry is
    /// `{ MethodCode, MethodName }`.
    async fn get_method_mapping(&self, ctx: &Context<'_>) -> Result<Vec<MethodMapping>> {
        let ledger = ctx.data::<SharedLedger>()?;
        Ok(ledger.get_method_mapping())
    }

    /// Name of a registered method code, or "Unknown".
    async fn get_method_name(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "MethodCode")] method_code: i64,
    ) -> Result<String> {
        let ledger = ctx.data::<SharedLedger>()?;
        Ok(ledger.get_method_name(method_code).to_string())
    }
}

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Records a new transaction. The method is inferred from the amount when
    /// neither `MethodCode` nor `MethodName` is given.
    #[allow(clippy::too_many_arguments)]
    async fn create_transaction(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "Amount")] amount: f64,
        #[graphql(name = "CounterpartyName")] counterparty_name: String,
        #[graphql(name = "Date")] date: String,
        #[graphql(name = "Note")] note: String,
        #[graphql(name = "Status")] status: String,
        #[graphql(name = "MethodCode")] method_code: Option<i64>,
        #[graphql(name = "MethodName")] method_name: Option<String>,
    ) -> Result<Transaction> {
        let ledger = ctx.data::<SharedLedger>()?;
        let req = CreateTransactionRequest {
            amount: Some(amount),
            counterparty_name: Some(counterparty_name),
            date: Some(date),
            note: Some(note),
            status: Some(status),
            method_code,
            method_name,
        };
        ledger.create_transaction(req).await.map_err(gql)
    }

    /// Changes the Note and/or Status of a transaction.
    async fn update_transaction(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "ID")] id: TransactionId,
        #[graphql(name = "Note")] note: Option<String>,
        #[graphql(name = "Status")] status: Option<String>,
    ) -> Result<Transaction> {
        let ledger = ctx.data::<SharedLedger>()?;
        ledger
            .update_transaction(UpdateTransactionRequest::new(id, note, status))
            .await
            .map_err(gql)
    }

    async fn delete_transaction(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "ID")] id: TransactionId,
    ) -> Result<DeletedTransaction> {
        let ledger = ctx.data::<SharedLedger>()?;
        ledger.delete_transaction(Some(id)).await.map_err(gql)
    }
}
