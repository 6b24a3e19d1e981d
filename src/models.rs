use mongodb::bson::Bson;
use serde::{de, Deserialize, Deserializer, Serialize};

/// A player as exposed over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
pub struct Player {
    pub uuid: String,
    pub lcoins: i64,
}

/// A player as stored in the `players` collection. The score field is
/// capitalised in storage but lowercase on the wire; both names are relied on
/// by existing data and clients.
///
/// Legacy documents may lack either field; those read as empty/zero.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerDocument {
    #[serde(default)]
    pub uuid: String,

    #[serde(rename = "Lcoins", default, deserialize_with = "whole_number")]
    pub lcoins: i64,
}

/// Accepts any BSON integer, a double with no fractional part, or null.
fn whole_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Bson::deserialize(deserializer)? {
        Bson::Int32(n) => Ok(n.into()),
        Bson::Int64(n) => Ok(n),
        Bson::Double(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
            Ok(f as i64)
        }
        Bson::Null => Ok(0),
        other => Err(de::Error::custom(format!(
            "expected a whole number score, got {}",
            other
        ))),
    }
}

impl From<PlayerDocument> for Player {
    fn from(doc: PlayerDocument) -> Self {
        Self {
            uuid: doc.uuid,
            lcoins: doc.lcoins,
        }
    }
}
