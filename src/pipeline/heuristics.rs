//! Deterministic keyword-based credibility scorer.
//!
//! This is the local fallback used whenever the oracle is unreachable or
//! replies with something unparseable. Both entry points are pure functions
//! of their input: same record or text in, bit-identical result out.
//!
//! The two paths deliberately do NOT share a scoring formula. Plain text
//! starts from a fresh base of 50 with weights 10/−15 and an implicit
//! min/max clamp; structured records compose additively on top of
//! 50 + category bonus with weights 8/−12 plus source/date bonuses and an
//! explicit [15, 95] clamp. This asymmetry is inherited scoring policy,
//! preserved as-is (see DESIGN.md).

use super::types::{
    InputKind, Method, NewsRecord, RecordMetadata, Verdict, VerificationResult,
};

/// Credibility-positive keywords for free text.
const POSITIVE_PLAIN: &[&str] = &[
    "elecciones",
    "presidente",
    "gobierno",
    "ministerio",
    "congreso",
    "ley",
    "decreto",
    "anuncio",
    "confirmado",
    "oficial",
];

/// Credibility-positive keywords for structured records.
const POSITIVE_STRUCTURED: &[&str] = &[
    "gobierno",
    "ministerio",
    "oficial",
    "confirmado",
    "aprobado",
    "ley",
    "decreto",
    "anuncio",
    "presidente",
    "congreso",
];

/// Credibility-negative keywords, shared by both paths.
const NEGATIVE: &[&str] = &[
    "alienígenas",
    "ovni",
    "milagro",
    "fantasma",
    "bruja",
    "conspiración",
    "secreto",
    "misterio",
    "paranormal",
];

/// Per-category relevance keywords for structured records. Categories not
/// listed here contribute no category bonus.
const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Educación",
        &["ley", "educativa", "ministerio", "gobierno", "reforma", "currículo"],
    ),
    (
        "Política",
        &["presidente", "gobierno", "congreso", "ley", "decreto", "anuncio"],
    ),
    (
        "Economía",
        &["economía", "inversión", "crecimiento", "ministerio", "finanzas"],
    ),
    ("Salud", &["salud", "hospital", "médico", "vacuna", "tratamiento"]),
    (
        "Tecnología",
        &["tecnología", "digital", "innovación", "startup", "app"],
    ),
];

const DEFAULT_REASONING: &str = "Análisis básico realizado.";
const SOURCE_NOTE: &str = " Incluye fuente verificable.";

/// Count how many DISTINCT keywords occur in `text` (already lowercased).
/// Presence, not frequency: a keyword repeated ten times counts once.
fn count_distinct(text: &str, keywords: &[&str]) -> u32 {
    keywords.iter().filter(|k| text.contains(*k)).count() as u32
}

fn category_keywords(category: &str) -> &'static [&'static str] {
    CATEGORY_KEYWORDS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, words)| *words)
        .unwrap_or(&[])
}

/// Score free text: base 50, +10 per distinct positive keyword capped at 85,
/// or −15 per distinct negative keyword floored at 15. Negative evidence
/// dominates mixed signals.
pub fn score_plain_text(text: &str) -> VerificationResult {
    let lower = text.to_lowercase();
    let positives = count_distinct(&lower, POSITIVE_PLAIN);
    let negatives = count_distinct(&lower, NEGATIVE);

    let (score, verdict, reasoning) = if positives > 0 && negatives == 0 {
        (
            (50 + 10 * positives as i32).min(85),
            Verdict::LikelyTrue,
            format!("Contiene {positives} indicadores de credibilidad."),
        )
    } else if negatives > 0 {
        (
            (50 - 15 * negatives as i32).max(15),
            Verdict::LikelyFalse,
            format!("Contiene {negatives} indicadores de baja credibilidad."),
        )
    } else {
        (50, Verdict::Inconclusive, DEFAULT_REASONING.to_string())
    };

    VerificationResult {
        verdict,
        score: score as u8,
        reasoning,
        matched_source: None,
        method: Method::HeuristicPlain,
        input_kind: InputKind::PlainText,
        entities: None,
        verified_category: None,
        confidence: None,
        metadata: None,
    }
}

/// Score a structured record: category relevance, credibility keywords over
/// headline + body, and bonuses for a verifiable source and a dated item.
pub fn score_structured(record: &NewsRecord) -> VerificationResult {
    let text = format!("{} {}", record.headline, record.body).to_lowercase();

    let category_matches = count_distinct(&text, category_keywords(&record.category));
    let positives = count_distinct(&text, POSITIVE_STRUCTURED);
    let negatives = count_distinct(&text, NEGATIVE);

    let mut base = 50 + 5 * category_matches as i32;
    let (verdict, mut reasoning) = if positives > 0 && negatives == 0 {
        base += 8 * positives as i32;
        (
            Verdict::LikelyTrue,
            format!(
                "Contiene {positives} indicadores de credibilidad y {category_matches} \
                 términos relevantes de la categoría {}.",
                record.category
            ),
        )
    } else if negatives > 0 {
        base -= 12 * negatives as i32;
        (
            Verdict::LikelyFalse,
            format!("Contiene {negatives} indicadores de baja credibilidad."),
        )
    } else {
        (Verdict::Inconclusive, DEFAULT_REASONING.to_string())
    };

    if record.has_source() {
        base += 5;
        reasoning.push_str(SOURCE_NOTE);
    }
    if record.has_date() {
        base += 3;
    }

    let score = base.clamp(15, 95) as u8;

    VerificationResult {
        verdict,
        score,
        reasoning,
        matched_source: record.has_source().then(|| record.source.clone()),
        method: Method::HeuristicStructured,
        input_kind: InputKind::Structured,
        entities: None,
        verified_category: None,
        confidence: None,
        metadata: Some(RecordMetadata {
            category: record.category.clone(),
            date: record.date.clone(),
            author: record.author.clone(),
            location: record.location.clone(),
            entities: record.semantic_analysis.named_entities.clone(),
        }),
    }
}
