use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A CCSDS Orbit Ephemeris Message as served by the upstream feed.
///
/// The XML root is `<ndm>`; the interesting blocks live several levels
/// down (`oem > header`, `oem > body > segment > metadata|data`). The
/// accessors below hide that nesting from callers.
#[derive(Debug, Clone, Deserialize)]
pub struct OemDocument {
    pub oem: Oem,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Oem {
    #[serde(rename = "@version")]
    pub version: Option<String>,
    pub header: OemHeader,
    pub body: OemBody,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct OemHeader {
    pub creation_date: Option<String>,
    pub originator: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OemBody {
    pub segment: OemSegment,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OemSegment {
    pub metadata: OemMetadata,
    pub data: OemData,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct OemMetadata {
    pub object_name: String,
    pub object_id: String,
    pub center_name: String,
    pub ref_frame: String,
    pub time_system: String,
    pub start_time: Option<String>,
    pub stop_time: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OemData {
    #[serde(rename = "COMMENT", default)]
    pub comments: Vec<String>,
    #[serde(rename = "stateVector", default)]
    pub state_vectors: Vec<StateVector>,
}

/// One row of the trajectory table: a timestamped position/velocity pair.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct StateVector {
    pub epoch: String,
    pub x: VectorComponent,
    pub y: VectorComponent,
    pub z: VectorComponent,
    pub x_dot: VectorComponent,
    pub y_dot: VectorComponent,
    pub z_dot: VectorComponent,
}

/// A scalar XML leaf carrying a `units` attribute, e.g.
/// `<X units="km">-4945.2048</X>`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VectorComponent {
    #[serde(rename = "@units")]
    pub units: Option<String>,
    #[serde(rename = "$text")]
    pub value: f64,
}

impl StateVector {
    pub fn position_km(&self) -> [f64; 3] {
        [self.x.value, self.y.value, self.z.value]
    }

    pub fn velocity_km_s(&self) -> [f64; 3] {
        [self.x_dot.value, self.y_dot.value, self.z_dot.value]
    }
}

impl OemDocument {
    pub fn header(&self) -> &OemHeader {
        &self.oem.header
    }

    pub fn metadata(&self) -> &OemMetadata {
        &self.oem.body.segment.metadata
    }

    pub fn comments(&self) -> &[String] {
        &self.oem.body.segment.data.comments
    }

    pub fn state_vectors(&self) -> &[StateVector] {
        &self.oem.body.segment.data.state_vectors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ndm>
  <oem id="CCSDS_OEM_VERS" version="2.0">
    <header>
      <CREATION_DATE>2024-048T20:31:20.746Z</CREATION_DATE>
      <ORIGINATOR>JSC</ORIGINATOR>
    </header>
    <body>
      <segment>
        <metadata>
          <OBJECT_NAME>ISS</OBJECT_NAME>
          <OBJECT_ID>1998-067-A</OBJECT_ID>
          <CENTER_NAME>EARTH</CENTER_NAME>
          <REF_FRAME>EME2000</REF_FRAME>
          <TIME_SYSTEM>UTC</TIME_SYSTEM>
          <START_TIME>2024-047T12:00:00.000Z</START_TIME>
          <STOP_TIME>2024-062T12:00:00.000Z</STOP_TIME>
        </metadata>
        <data>
          <COMMENT>Units are in kg and m^2</COMMENT>
          <COMMENT>MASS=459154.20</COMMENT>
          <stateVector>
            <EPOCH>2024-047T12:00:00.000Z</EPOCH>
            <X units="km">-4945.2048353747998</X>
            <Y units="km">-3625.9704508664002</Y>
            <Z units="km">2944.7433487284001</Z>
            <X_DOT units="km/s">1.19203952554</X_DOT>
            <Y_DOT units="km/s">4.8689510260129997</Y_DOT>
            <Z_DOT units="km/s">7.9586487618499996</Z_DOT>
          </stateVector>
          <stateVector>
            <EPOCH>2024-047T12:04:00.000Z</EPOCH>
            <X units="km">-4417.0476661689996</X>
            <Y units="km">-2432.2029214833</Y>
            <Z units="km">4571.4371730342996</Z>
            <X_DOT units="km/s">3.1818959991</X_DOT>
            <Y_DOT units="km/s">5.0177469789139998</Y_DOT>
            <Z_DOT units="km/s">5.3711396576390003</Z_DOT>
          </stateVector>
        </data>
      </segment>
    </body>
  </oem>
</ndm>"#;

    #[test]
    fn parses_nested_blocks() {
        let document: OemDocument = quick_xml::de::from_str(SAMPLE).unwrap();

        assert_eq!(document.oem.version.as_deref(), Some("2.0"));
        assert_eq!(document.header().originator, "JSC");
        assert_eq!(document.metadata().object_name, "ISS");
        assert_eq!(document.metadata().center_name, "EARTH");
        assert_eq!(document.comments().len(), 2);
        assert_eq!(document.comments()[1], "MASS=459154.20");
    }

    #[test]
    fn parses_state_vector_components() {
        let document: OemDocument = quick_xml::de::from_str(SAMPLE).unwrap();
        let vectors = document.state_vectors();

        assert_eq!(vectors.len(), 2);
        assert_eq!(vectors[0].epoch, "2024-047T12:00:00.000Z");
        assert_eq!(vectors[0].x.units.as_deref(), Some("km"));
        assert_eq!(vectors[0].x.value, -4945.2048353747998);
        assert_eq!(vectors[1].x_dot.units.as_deref(), Some("km/s"));
        assert_eq!(vectors[1].velocity_km_s()[2], 5.3711396576390003);
    }

    #[test]
    fn state_vector_serializes_with_text_key() {
        let document: OemDocument = quick_xml::de::from_str(SAMPLE).unwrap();
        let json = serde_json::to_value(&document.state_vectors()[0]).unwrap();

        assert_eq!(json["EPOCH"], "2024-047T12:00:00.000Z");
        assert_eq!(json["X"]["@units"], "km");
        assert_eq!(json["X"]["$text"], -4945.2048353747998);
    }

    #[test]
    fn rejects_non_numeric_component() {
        let broken = SAMPLE.replace("-4945.2048353747998", "not-a-number");
        assert!(quick_xml::de::from_str::<OemDocument>(&broken).is_err());
    }
}
