use serde::{Deserialize, Serialize};

/// Field sentinels used when a structured record omits a value.
///
/// The wire contract predates this service: downstream consumers (and the
/// on-chain metadata) expect the Spanish sentinel strings, so they are kept
/// verbatim rather than modeled as `Option`s. Scoring stays total because a
/// record is always fully populated.
pub const NO_HEADLINE: &str = "Sin titular";
pub const NO_DATE: &str = "Sin fecha";
pub const NO_AUTHOR: &str = "Sin autor";
pub const NO_LOCATION: &str = "Sin lugar";
pub const NO_CATEGORY: &str = "Sin categoría";
pub const NO_SOURCE: &str = "Sin fuente";

/// Verdict over a news item. Serialized with the Spanish wire strings the
/// rest of the platform consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Posiblemente Verdadera")]
    LikelyTrue,
    #[serde(rename = "Posiblemente Falsa")]
    LikelyFalse,
    #[serde(rename = "No concluyente")]
    Inconclusive,
}

/// How a verdict was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    /// Remote oracle replied with a parseable verdict.
    #[serde(rename = "GROQ")]
    Oracle,
    /// Local keyword scorer over a structured record.
    #[serde(rename = "FALLBACK_ESTRUCTURADO")]
    HeuristicStructured,
    /// Local keyword scorer over free text.
    #[serde(rename = "FALLBACK_SIMPLE")]
    HeuristicPlain,
}

/// Shape of the input as determined by the structure classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputKind {
    #[serde(rename = "ESTRUCTURADA")]
    Structured,
    #[serde(rename = "TEXTO_SIMPLE")]
    PlainText,
}

/// Self-reported confidence of the oracle's analysis (extended schema only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    #[serde(rename = "Alta")]
    High,
    #[serde(rename = "Media")]
    Medium,
    #[serde(rename = "Baja")]
    Low,
}

/// Pre-computed semantic analysis optionally attached to a structured record.
/// Every field is optional; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SemanticAnalysis {
    #[serde(
        rename = "entidades_nombradas",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub named_entities: Vec<String>,
    #[serde(rename = "sentimiento", default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<String>,
    #[serde(
        rename = "veracidad_estimada",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub veracity_estimate: Option<String>,
    #[serde(
        rename = "intencion_comunicativa",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub intent: Option<String>,
    #[serde(rename = "resumen", default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// A structured news record with every field populated (sentinel defaults
/// applied by the extractor).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsRecord {
    #[serde(rename = "titular")]
    pub headline: String,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "autor")]
    pub author: String,
    #[serde(rename = "lugar")]
    pub location: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "fuente")]
    pub source: String,
    #[serde(rename = "cuerpo")]
    pub body: String,
    #[serde(rename = "analisis_semantico")]
    pub semantic_analysis: SemanticAnalysis,
}

impl NewsRecord {
    /// Whether the record carries a real source (not the missing sentinel).
    pub fn has_source(&self) -> bool {
        self.source != NO_SOURCE
    }

    /// Whether the record carries a real date (not the missing sentinel).
    pub fn has_date(&self) -> bool {
        self.date != NO_DATE
    }
}

/// Record fields echoed back alongside a structured heuristic verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordMetadata {
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "autor")]
    pub author: String,
    #[serde(rename = "lugar")]
    pub location: String,
    #[serde(rename = "entidades")]
    pub entities: Vec<String>,
}

/// Outcome of one verification. Created once per request and never mutated
/// afterwards; the anchoring layer only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    #[serde(rename = "veredicto")]
    pub verdict: Verdict,
    /// Credibility score in [0, 100].
    pub score: u8,
    #[serde(rename = "razonamiento")]
    pub reasoning: String,
    #[serde(rename = "fuenteCoincidente")]
    pub matched_source: Option<String>,
    #[serde(rename = "metodo")]
    pub method: Method,
    #[serde(rename = "tipo_input")]
    pub input_kind: InputKind,
    #[serde(
        rename = "entidades_identificadas",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub entities: Option<Vec<String>>,
    #[serde(
        rename = "categoria_verificada",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub verified_category: Option<String>,
    #[serde(
        rename = "confianza_analisis",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub confidence: Option<Confidence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<RecordMetadata>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_uses_spanish_wire_strings() {
        assert_eq!(
            serde_json::to_string(&Verdict::LikelyTrue).unwrap(),
            "\"Posiblemente Verdadera\""
        );
        assert_eq!(
            serde_json::to_string(&Verdict::Inconclusive).unwrap(),
            "\"No concluyente\""
        );
        let parsed: Verdict = serde_json::from_str("\"Posiblemente Falsa\"").unwrap();
        assert_eq!(parsed, Verdict::LikelyFalse);
    }

    #[test]
    fn method_and_kind_wire_strings() {
        assert_eq!(serde_json::to_string(&Method::Oracle).unwrap(), "\"GROQ\"");
        assert_eq!(
            serde_json::to_string(&Method::HeuristicStructured).unwrap(),
            "\"FALLBACK_ESTRUCTURADO\""
        );
        assert_eq!(
            serde_json::to_string(&InputKind::PlainText).unwrap(),
            "\"TEXTO_SIMPLE\""
        );
    }

    #[test]
    fn semantic_analysis_ignores_unknown_keys() {
        let parsed: SemanticAnalysis = serde_json::from_str(
            r#"{"entidades_nombradas":["Ministerio"],"sentimiento":"neutral","campo_raro":1}"#,
        )
        .unwrap();
        assert_eq!(parsed.named_entities, vec!["Ministerio"]);
        assert_eq!(parsed.sentiment.as_deref(), Some("neutral"));
        assert!(parsed.summary.is_none());
    }

    #[test]
    fn result_serializes_optional_extras_only_when_present() {
        let result = VerificationResult {
            verdict: Verdict::Inconclusive,
            score: 50,
            reasoning: "Análisis básico realizado.".into(),
            matched_source: None,
            method: Method::HeuristicPlain,
            input_kind: InputKind::PlainText,
            entities: None,
            verified_category: None,
            confidence: None,
            metadata: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("entidades_identificadas").is_none());
        assert!(json.get("confianza_analisis").is_none());
        // fuenteCoincidente is part of the base schema and always present
        assert!(json.get("fuenteCoincidente").unwrap().is_null());
        assert_eq!(json["metodo"], "FALLBACK_SIMPLE");
    }
}
