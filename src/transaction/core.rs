//! Defines the core data model for transactions.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    Error,
    store::{Collection, Record, iso_date},
};

/// The categories offered when creating a transaction, in display order.
///
/// Categories are free text, so stored transactions may use others.
pub const CATEGORIES: [&str; 11] = [
    "Alimentação",
    "Transporte",
    "Moradia",
    "Saúde",
    "Educação",
    "Lazer",
    "Compras",
    "Salário",
    "Freelance",
    "Investimentos",
    "Outros",
];

/// Whether money came in or went out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Money earned.
    #[serde(rename = "receita")]
    Income,
    /// Money spent.
    #[serde(rename = "despesa")]
    Expense,
}

impl TransactionKind {
    /// The value used in forms, query strings and stored data.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Income => "receita",
            TransactionKind::Expense => "despesa",
        }
    }

    /// The name shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Income => "Receita",
            TransactionKind::Expense => "Despesa",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TransactionKind {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "receita" => Ok(TransactionKind::Income),
            "despesa" => Ok(TransactionKind::Expense),
            other => Err(Error::InvalidField {
                field: "tipo",
                value: other.to_owned(),
            }),
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// The amount is never negative, the direction of the money is given by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: i64,
    /// A text description of what the transaction was for.
    #[serde(rename = "descricao")]
    pub description: String,
    /// The amount of money spent or earned in this transaction.
    #[serde(rename = "valor")]
    pub amount: f64,
    /// Whether the money came in or went out.
    #[serde(rename = "tipo")]
    pub kind: TransactionKind,
    /// The free-text category, usually one of [CATEGORIES].
    #[serde(rename = "categoria")]
    pub category: String,
    /// When the transaction happened.
    #[serde(rename = "data", with = "iso_date")]
    pub date: Date,
}

impl Transaction {
    /// The amount with the sign given by the kind: positive for income and
    /// negative for expenses.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

impl Record for Transaction {
    const COLLECTION: Collection = Collection::Transactions;

    fn id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::Error;

    use super::{Transaction, TransactionKind};

    #[test]
    fn deserializes_browser_export() {
        let json = r#"{
            "id": 1717000000000,
            "descricao": "Mercado",
            "valor": 152.3,
            "tipo": "despesa",
            "categoria": "Alimentação",
            "data": "2024-05-29"
        }"#;

        let transaction: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(
            transaction,
            Transaction {
                id: 1717000000000,
                description: "Mercado".to_owned(),
                amount: 152.3,
                kind: TransactionKind::Expense,
                category: "Alimentação".to_owned(),
                date: date!(2024 - 05 - 29),
            }
        );
    }

    #[test]
    fn serializes_with_stored_field_names() {
        let transaction = Transaction {
            id: 1,
            description: "Salário".to_owned(),
            amount: 5000.0,
            kind: TransactionKind::Income,
            category: "Salário".to_owned(),
            date: date!(2025 - 01 - 05),
        };

        let value = serde_json::to_value(&transaction).unwrap();

        assert_eq!(value["tipo"], "receita");
        assert_eq!(value["data"], "2025-01-05");
        assert_eq!(value["descricao"], "Salário");
    }

    #[test]
    fn signed_amount_follows_kind() {
        let mut transaction = Transaction {
            id: 1,
            description: "Aluguel".to_owned(),
            amount: 1200.0,
            kind: TransactionKind::Expense,
            category: "Moradia".to_owned(),
            date: date!(2025 - 01 - 05),
        };
        assert_eq!(transaction.signed_amount(), -1200.0);

        transaction.kind = TransactionKind::Income;
        assert_eq!(transaction.signed_amount(), 1200.0);
    }

    #[test]
    fn parses_kind() {
        assert_eq!("receita".parse(), Ok(TransactionKind::Income));
        assert_eq!("despesa".parse(), Ok(TransactionKind::Expense));
        assert_eq!(
            "lucro".parse::<TransactionKind>(),
            Err(Error::InvalidField {
                field: "tipo",
                value: "lucro".to_owned()
            })
        );
    }
}
