use serde::{Deserialize, Serialize};

/// 다루는 물리량 종류(단위 계열)를 나타낸다. 변환은 같은 계열 안에서만 가능하다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityKind {
    Temperature,
    Volume,
}

impl QuantityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuantityKind::Temperature => "temperature",
            QuantityKind::Volume => "volume",
        }
    }
}

impl std::fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
