use serde::{Deserialize, Serialize};

/// Fields missing from a request body decode to their zero values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certificate {
    pub id: i64,
    #[serde(rename = "labname")]
    pub lab_name: String,
    #[serde(rename = "medicinename")]
    pub medicine_name: String,
    pub country: String,
    #[serde(rename = "noofparticipants")]
    pub participants: i64,
    pub placebo: bool,
    #[serde(rename = "participantbelongsto")]
    pub participant_belongs_to: String,
    #[serde(rename = "currencytype")]
    pub currency_type: String,
    #[serde(rename = "premiumamount")]
    pub premium_amount: f64,
    pub category: String,
}
