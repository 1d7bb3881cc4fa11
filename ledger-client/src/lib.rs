//! # Ledger Client SDK
//!
//! A typed Rust client for the ledger GraphQL API.

use ledger_types::{DeletedTransaction, MethodMapping, Transaction, TransactionId};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The server answered with a GraphQL `errors` entry.
    #[error("GraphQL error ({code}): {message}")]
    GraphQl { code: String, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Response has no data for field `{0}`")]
    MissingData(String),
}

const TRANSACTION_FIELDS: &str =
    "ID Amount CounterpartyName Date MethodCode MethodName Note Status";

/// Input for [`LedgerClient::create_transaction`].
#[derive(Debug, Clone, Default)]
pub struct NewTransaction {
    pub amount: f64,
    pub counterparty_name: String,
    pub date: String,
    pub note: String,
    pub status: String,
    pub method_code: Option<i64>,
    pub method_name: Option<String>,
}

/// Ledger API client.
pub struct LedgerClient {
    base_url: String,
    http: Client,
}

impl LedgerClient {
    /// Creates a new client for a server root such as `http://localhost:4000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    fn graphql_url(&self) -> String {
        format!("{}/graphql", self.base_url)
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Fetches one transaction, `None` if the ID is unknown.
    pub async fn get_transaction(
        &self,
        id: TransactionId,
    ) -> Result<Option<Transaction>, ClientError> {
        let query = format!(
            "query($id: Int!) {{ getTransaction(ID: $id) {{ {TRANSACTION_FIELDS} }} }}"
        );
        self.execute(&query, json!({ "id": id }), "getTransaction")
            .await
    }

    pub async fn list_transactions(&self) -> Result<Vec<Transaction>, ClientError> {
        let query = format!("{{ listTransactions {{ {TRANSACTION_FIELDS} }} }}");
        self.execute(&query, Value::Null, "listTransactions").await
    }

    pub async fn list_transactions_by_method(
        &self,
        method_name: &str,
    ) -> Result<Vec<Transaction>, ClientError> {
        let query = format!(
            "query($name: String!) {{ listTransactionsByMethod(MethodName: $name) {{ {TRANSACTION_FIELDS} }} }}"
        );
        self.execute(
            &query,
            json!({ "name": method_name }),
            "listTransactionsByMethod",
        )
        .await
    }

    pub async fn get_account_balance(&self) -> Result<f64, ClientError> {
        self.execute("{ getAccountBalance }", Value::Null, "getAccountBalance")
            .await
    }

    pub async fn get_method_mapping(&self) -> Result<Vec<MethodMapping>, ClientError> {
        self.execute(
            "{ getMethodMapping { MethodCode MethodName } }",
            Value::Null,
            "getMethodMapping",
        )
        .await
    }

    pub async fn get_method_name(&self, method_code: i64) -> Result<String, ClientError> {
        self.execute(
            "query($code: Int!) { getMethodName(MethodCode: $code) }",
            json!({ "code": method_code }),
            "getMethodName",
        )
        .await
    }

    /// Records a new transaction.
    pub async fn create_transaction(
        &self,
        input: &NewTransaction,
    ) -> Result<Transaction, ClientError> {
        let query = format!(
            "mutation($amount: Float!, $counterparty: String!, $date: String!, $note: String!, \
             $status: String!, $code: Int, $name: String) {{ \
             createTransaction(Amount: $amount, CounterpartyName: $counterparty, Date: $date, \
             Note: $note, Status: $status, MethodCode: $code, MethodName: $name) \
             {{ {TRANSACTION_FIELDS} }} }}"
        );
        let variables = json!({
            "amount": input.amount,
            "counterparty": input.counterparty_name,
            "date": input.date,
            "note": input.note,
            "status": input.status,
            "code": input.method_code,
            "name": input.method_name,
        });
        self.execute(&query, variables, "createTransaction").await
    }

    /// Changes the note and/or status of a transaction.
    pub async fn update_transaction(
        &self,
        id: TransactionId,
        note: Option<&str>,
        status: Option<&str>,
    ) -> Result<Transaction, ClientError> {
        let query = format!(
            "mutation($id: Int!, $note: String, $status: String) {{ \
             updateTransaction(ID: $id, Note: $note, Status: $status) {{ {TRANSACTION_FIELDS} }} }}"
        );
        self.execute(
            &query,
            json!({ "id": id, "note": note, "status": status }),
            "updateTransaction",
        )
        .await
    }

    pub async fn delete_transaction(
        &self,
        id: TransactionId,
    ) -> Result<DeletedTransaction, ClientError> {
        self.execute(
            "mutation($id: Int!) { deleteTransaction(ID: $id) { ID } }",
            json!({ "id": id }),
            "deleteTransaction",
        )
        .await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
        field: &str,
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .post(self.graphql_url())
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        decode_field(serde_json::from_str(&body)?, field)
    }
}

/// Pulls `data.<field>` out of a GraphQL response body, surfacing the first
/// error entry if there is one.
fn decode_field<T: DeserializeOwned>(mut body: Value, field: &str) -> Result<T, ClientError> {
    if let Some(err) = body
        .get("errors")
        .and_then(Value::as_array)
        .and_then(|errors| errors.first())
    {
        let message = err
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let code = err
            .pointer("/extensions/code")
            .and_then(Value::as_str)
            .unwrap_or("UNKNOWN")
            .to_string();
        return Err(ClientError::GraphQl { code, message });
    }

    let value = body
        .get_mut("data")
        .and_then(|data| data.get_mut(field))
        .map(Value::take)
        .ok_or_else(|| ClientError::MissingData(field.to_string()))?;
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = LedgerClient::new("http://localhost:4000");
        assert_eq!(client.base_url, "http://localhost:4000");
        assert_eq!(client.graphql_url(), "http://localhost:4000/graphql");
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = LedgerClient::new("http://localhost:4000/");
        assert_eq!(client.base_url, "http://localhost:4000");
    }

    #[test]
    fn test_decode_field_reads_data() {
        let body = json!({ "data": { "getAccountBalance": 42.5 } });

        let balance: f64 = decode_field(body, "getAccountBalance").unwrap();

        assert_eq!(balance, 42.5);
    }

    #[test]
    fn test_decode_field_null_as_none() {
        let body = json!({ "data": { "getTransaction": null } });

        let tx: Option<Transaction> = decode_field(body, "getTransaction").unwrap();

        assert!(tx.is_none());
    }

    #[test]
    fn test_decode_field_surfaces_error_code() {
        let body = json!({
            "data": null,
            "errors": [{
                "message": "Transaction not found: 9",
                "extensions": { "code": "NOT_FOUND" }
            }]
        });

        let err = decode_field::<Transaction>(body, "updateTransaction").unwrap_err();

        match err {
            ClientError::GraphQl { code, message } => {
                assert_eq!(code, "NOT_FOUND");
                assert_eq!(message, "Transaction not found: 9");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_field_missing() {
        let body = json!({ "data": {} });

        let err = decode_field::<f64>(body, "getAccountBalance").unwrap_err();

        assert!(matches!(err, ClientError::MissingData(f) if f == "getAccountBalance"));
    }
}
