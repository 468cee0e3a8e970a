//! Prompt templates for paper analysis.
//!
//! Two variants (full and quick), each with a branch for whether extraction
//! produced text. The templates demand raw JSON with a fixed shape; the
//! matching Rust types live in [`crate::report`].

use crate::classify::PaperId;

/// System instruction sent with every model call.
pub const SYSTEM_PROMPT: &str = "You are Paperlens, an expert AI research copilot. \
CRITICAL: You MUST respond with ONLY valid JSON. NO markdown. NO code blocks. \
NO ```json. NO ``` at all. Just pure JSON starting with { and ending with }.";

const FULL_HEADER: &str = "You are Paperlens, an AI research copilot that helps \
researchers read academic papers faster and more intelligently.";

/// Literal instruction used only on the fetch-failure branch; tests key off
/// its presence and absence.
pub const URL_FALLBACK_INSTRUCTION: &str = "IMPORTANT: You must analyze the ACTUAL \
paper at this URL. If you cannot access the URL directly, use your knowledge of \
the paper if you know it, but be accurate about the specific paper at this URL.";

const ELI12_FULL_INSTRUCTION: &str = "\n\nIMPORTANT: Explain Like I'm 12 Mode\n\
When providing the summary and key insights, also include simplified versions \
that explain technical concepts using language a 12-year-old could understand. \
Use analogies and everyday examples, avoid jargon, and keep it engaging while \
staying accurate.";

const ELI12_QUICK_INSTRUCTION: &str = " Use simple language that anyone can \
understand - avoid technical jargon and use everyday analogies.";

// The {source_id} placeholder is substituted with str::replace; format! would
// require escaping every brace in the JSON skeleton.
const REPORT_FORMAT: &str = r##"CRITICAL: Respond with ONLY raw JSON. Do NOT use markdown code blocks. Do NOT use ```json. Start directly with { and end with }. Use this EXACT format:

{
  "title": "[Extract exact paper title]",
  "authors": "[REQUIRED: First author's name] et al." or "[Full author list if 3 or fewer authors]",
  "source_id": "{source_id}",
  "scores": {
    "methodological_rigor": [Score 1-10],
    "data_quality": [Score 1-10],
    "innovation_level": [Score 1-10]
  },
  "summary": {
    "technical": "[2-3 paragraph summary of the paper in technical language]",
    "simplified": "[2-3 paragraph summary explaining the paper in plain language with analogies and simple terms]"
  },
  "key_insights": [
    {
      "insight": "[Brief insight category like 'key_findings', 'methodology_strength', 'data_concern', 'innovation_highlight']",
      "level": "[Either 'Insight' or 'Flaw']",
      "description": "[Technical description of the insight]",
      "simplified_description": "[Plain-language explanation of the insight]",
      "color": "[#3b82f6 for Insight, #ef4444 for Flaw]"
    }
  ]
}

## SCORING GUIDELINES:

**Methodological Rigor (1-10):**
- 9-10: Rigorous experimental design, proper controls, statistical significance testing
- 7-8: Good methodology with minor limitations
- 5-6: Adequate methodology but notable weaknesses
- 1-4: Poor methodology, significant flaws

**Data Quality (1-10):**
- 9-10: Large, diverse, high-quality datasets with proper validation
- 7-8: Good data quality with some limitations
- 5-6: Adequate data but concerns about size/diversity/quality
- 1-4: Poor data quality, small samples, or questionable sources

**Innovation Level (1-10):**
- 9-10: Groundbreaking novel approach, paradigm-shifting insights
- 7-8: Significant innovation building on existing work
- 5-6: Moderate innovation, incremental improvements
- 1-4: Limited novelty, primarily reproduces existing work

## KEY INSIGHTS GUIDELINES:
- Provide 2-4 key insights
- Mix of "Insight" (positive findings) and "Flaw" (limitations or concerns)
- Each insight should be specific and actionable
- Simplified versions should use analogies and plain language

Focus on accuracy and providing actionable insights that help researchers quickly understand the paper's value, methodology, and limitations."##;

const QUICK_FORMAT: &str = r#"Return ONLY a JSON object with this structure:

{
  "title": "[Paper title]",
  "quick_summary": "[2-3 sentence summary of what the paper does and why it matters]",
  "main_finding": "[One key result with specific numbers/metrics if available]",
  "relevance": "[Why should researchers care about this work?]"
}

Keep it concise but informative - perfect for busy researchers who need to quickly assess whether this paper is relevant to their work."#;

/// Build the full-analysis prompt.
///
/// With extracted text, the text is embedded verbatim; without it, the model
/// is told to rely on its prior knowledge of the URL while staying accurate
/// to the specific paper. The simplified-explanation directive interpolates
/// as an empty string when off.
pub fn full_analysis_prompt(
    url: &str,
    id: Option<&PaperId>,
    paper_text: Option<&str>,
    simplified: bool,
) -> String {
    let source_id = id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "[Unknown source]".to_string());
    let eli12 = if simplified { ELI12_FULL_INSTRUCTION } else { "" };
    let format_block = REPORT_FORMAT.replace("{source_id}", &source_id);

    match paper_text {
        Some(text) => format!(
            "{FULL_HEADER}\n\nPlease analyze this academic paper:{eli12}\n\n\
             PAPER CONTENT:\n{text}\n\n{format_block}"
        ),
        None => format!(
            "{FULL_HEADER}\n\nPlease analyze the academic paper at this URL: {url}\n\n\
             {URL_FALLBACK_INSTRUCTION}{eli12}\n\n{format_block}"
        ),
    }
}

/// Build the quick-summary prompt. Only called when extraction succeeded;
/// the no-text quick path is answered locally without a model call.
pub fn quick_summary_prompt(url: &str, paper_text: &str, simplified: bool) -> String {
    let eli12 = if simplified { ELI12_QUICK_INSTRUCTION } else { "" };
    format!(
        "Please provide a quick 2-minute summary of the academic paper at: {url}{eli12}\n\n\
         PAPER CONTENT:\n{paper_text}\n\n{QUICK_FORMAT}"
    )
}
