use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    #[default]
    Ok,
    Suspect,
    Bad,
}

impl Quality {
    pub const ALL: [Quality; 3] = [Quality::Ok, Quality::Suspect, Quality::Bad];

    pub fn label(self) -> &'static str {
        match self {
            Quality::Ok => "ok",
            Quality::Suspect => "suspect",
            Quality::Bad => "bad",
        }
    }

    /// Display rank: bad outranks suspect outranks ok.
    pub fn rank(self) -> u8 {
        match self {
            Quality::Ok => 0,
            Quality::Suspect => 1,
            Quality::Bad => 2,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub name: String,
    pub value: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub quality: Quality,
}

impl Metric {
    pub fn blank() -> Self {
        Self {
            name: String::new(),
            value: 0.0,
            unit: String::new(),
            quality: Quality::Ok,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_roundtrips_lowercase() {
        assert_eq!(serde_json::to_string(&Quality::Suspect).unwrap(), "\"suspect\"");
        let q: Quality = serde_json::from_str("\"bad\"").unwrap();
        assert_eq!(q, Quality::Bad);
    }

    #[test]
    fn quality_defaults_to_ok() {
        let m: Metric = serde_json::from_str(r#"{"name":"ph","value":7.0}"#).unwrap();
        assert_eq!(m.quality, Quality::Ok);
        assert_eq!(m.unit, "");
    }

    #[test]
    fn bad_outranks_everything() {
        assert!(Quality::Bad.rank() > Quality::Suspect.rank());
        assert!(Quality::Suspect.rank() > Quality::Ok.rank());
    }
}
