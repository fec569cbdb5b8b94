//! Defines the core data model for fixed-income positions (CDBs).

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    Error,
    store::{Collection, Record, iso_date},
};

/// How a position's yield is set. Only shown to the user, the estimate
/// treats every type the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateType {
    /// A rate agreed up front.
    #[serde(rename = "prefixado")]
    FixedRate,
    /// A percentage of the benchmark rate.
    #[serde(rename = "posfixado")]
    FloatingRate,
    /// A fixed rate on top of an inflation index.
    #[serde(rename = "hibrido")]
    Hybrid,
}

impl RateType {
    /// Every rate type, in the order offered by the create form.
    pub const ALL: [RateType; 3] = [RateType::FloatingRate, RateType::FixedRate, RateType::Hybrid];

    /// The value used in forms and stored data.
    pub fn as_str(self) -> &'static str {
        match self {
            RateType::FixedRate => "prefixado",
            RateType::FloatingRate => "posfixado",
            RateType::Hybrid => "hibrido",
        }
    }

    /// The name shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            RateType::FixedRate => "Pré-fixado",
            RateType::FloatingRate => "Pós-fixado",
            RateType::Hybrid => "Híbrido",
        }
    }
}

impl FromStr for RateType {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        RateType::ALL
            .into_iter()
            .find(|rate_type| rate_type.as_str() == text)
            .ok_or_else(|| Error::InvalidField {
                field: "tipo",
                value: text.to_owned(),
            })
    }
}

/// A certificate of deposit held at a bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cdb {
    /// The ID of the position.
    pub id: i64,
    /// The name of the product.
    #[serde(rename = "nome")]
    pub name: String,
    /// The issuing bank.
    #[serde(rename = "banco")]
    pub bank: String,
    /// How much money was put in.
    #[serde(rename = "valorInvestido")]
    pub invested_amount: f64,
    /// The yield as a percentage of the benchmark rate, e.g. 120 for 120% of CDI.
    #[serde(rename = "taxaCdi")]
    pub benchmark_rate: f64,
    /// The day the money was invested.
    #[serde(rename = "dataInicio", with = "iso_date")]
    pub start_date: Date,
    /// The day the position matures.
    #[serde(rename = "dataVencimento", with = "iso_date")]
    pub maturity_date: Date,
    /// How the yield is set.
    #[serde(rename = "tipo")]
    pub rate_type: RateType,
}

impl Record for Cdb {
    const COLLECTION: Collection = Collection::Cdbs;

    fn id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::{Cdb, RateType};

    #[test]
    fn deserializes_browser_export() {
        let json = r#"{
            "id": 42,
            "nome": "CDB Liquidez",
            "banco": "Banco Inter",
            "valorInvestido": 5000,
            "taxaCdi": 110,
            "dataInicio": "2025-01-02",
            "dataVencimento": "2027-01-02",
            "tipo": "posfixado"
        }"#;

        let cdb: Cdb = serde_json::from_str(json).unwrap();

        assert_eq!(cdb.rate_type, RateType::FloatingRate);
        assert_eq!(cdb.benchmark_rate, 110.0);
        assert_eq!(cdb.maturity_date, date!(2027 - 01 - 02));
    }

    #[test]
    fn parses_rate_type_from_form_value() {
        assert_eq!("hibrido".parse(), Ok(RateType::Hybrid));
        assert!("variavel".parse::<RateType>().is_err());
    }
}
