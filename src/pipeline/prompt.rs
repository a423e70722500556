//! Prompt builders for the fact-checking oracle.
//!
//! Plain text asks for the base verdict schema; structured records enumerate
//! every field and ask for the extended schema (entities, verified category,
//! confidence). The oracle is instructed to answer with JSON only, but the
//! parser still treats the reply as free-form text.

use super::types::NewsRecord;

pub const SYSTEM_PROMPT: &str = "Eres un verificador de hechos experto en noticias bolivianas.";

/// Prompt for free-form text, requesting the base verdict schema.
pub fn build_plain_text_prompt(text: &str) -> String {
    format!(
        r#"
Eres un verificador de hechos boliviano. Evalúa la siguiente noticia o declaración y responde SOLO con este JSON (sin ninguna explicación externa ni texto adicional):

{{
  "veredicto": "Posiblemente Verdadera" | "Posiblemente Falsa" | "No concluyente",
  "score": número entre 0 y 100,
  "razonamiento": explicación breve en español,
  "fuenteCoincidente": url si la conoces o null
}}

Texto a evaluar:
"""{text}"""
"#
    )
}

/// Prompt for a structured record, requesting the extended verdict schema.
pub fn build_structured_prompt(record: &NewsRecord) -> String {
    let semantic = serde_json::to_string(&record.semantic_analysis)
        .unwrap_or_else(|_| "{}".to_string());

    format!(
        r#"
Eres un verificador de hechos boliviano experto. Analiza la siguiente noticia estructurada y responde SOLO con este JSON (sin explicaciones externas):

{{
  "veredicto": "Posiblemente Verdadera" | "Posiblemente Falsa" | "No concluyente",
  "score": número entre 0 y 100,
  "razonamiento": explicación breve en español,
  "fuenteCoincidente": url si la conoces o null,
  "entidades_identificadas": ["lista", "de", "entidades"],
  "categoria_verificada": "categoría de la noticia",
  "confianza_analisis": "Alta" | "Media" | "Baja"
}}

Noticia a evaluar:
- Titular: {headline}
- Fecha: {date}
- Autor: {author}
- Lugar: {location}
- Categoría: {category}
- Fuente: {source}
- Cuerpo: {body}
- Análisis semántico previo: {semantic}
"#,
        headline = record.headline,
        date = record.date,
        author = record.author,
        location = record.location,
        category = record.category,
        source = record.source,
        body = record.body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::extract::extract;
    use serde_json::json;

    #[test]
    fn plain_prompt_embeds_the_text() {
        let prompt = build_plain_text_prompt("El gobierno confirmó la ley");
        assert!(prompt.contains(r#""""El gobierno confirmó la ley""""#));
        assert!(prompt.contains("\"veredicto\""));
        assert!(!prompt.contains("entidades_identificadas"));
    }

    #[test]
    fn structured_prompt_enumerates_every_field() {
        let record = extract(&json!({
            "noticia": {
                "titular": "Nueva ley",
                "fecha": "2025-03-10",
                "autor": "Redacción",
                "lugar": "La Paz",
                "categoria": "Política",
                "fuente": "ABI",
                "cuerpo": "El congreso aprobó la norma.",
                "analisis_semantico": {"entidades_nombradas": ["Congreso"]}
            }
        }));
        let prompt = build_structured_prompt(&record);
        assert!(prompt.contains("- Titular: Nueva ley"));
        assert!(prompt.contains("- Fecha: 2025-03-10"));
        assert!(prompt.contains("- Autor: Redacción"));
        assert!(prompt.contains("- Lugar: La Paz"));
        assert!(prompt.contains("- Categoría: Política"));
        assert!(prompt.contains("- Fuente: ABI"));
        assert!(prompt.contains("- Cuerpo: El congreso aprobó la norma."));
        assert!(prompt.contains(r#"{"entidades_nombradas":["Congreso"]}"#));
        assert!(prompt.contains("confianza_analisis"));
    }

    #[test]
    fn structured_prompt_shows_sentinels_for_missing_fields() {
        let record = extract(&json!({"titular": "Solo titular"}));
        let prompt = build_structured_prompt(&record);
        assert!(prompt.contains("- Fecha: Sin fecha"));
        assert!(prompt.contains("- Fuente: Sin fuente"));
        assert!(prompt.contains("- Análisis semántico previo: {}"));
    }
}
