//! Prompt templates for essays and questionnaires

use crate::Thinker;

pub const ESSAY_SYSTEM: &str = "You are a knowledgeable philosophy researcher specializing in the study of meaning and purpose in human existence.";

pub const QUESTIONNAIRE_SYSTEM: &str = "You are an expert in psychological measurement and philosophy, specializing in creating valid questionnaires that capture philosophical concepts about meaning and purpose.";

pub fn essay_prompt(thinker: &Thinker) -> String {
    let mut prompt = format!(
        "Write a comprehensive 1-page essay (approximately 500-600 words) about {name}'s ideas \
         and philosophy regarding the meaning of life and human existence.\n\
         \n\
         The essay should include:\n\
         1. A brief introduction to the thinker and their general philosophical approach\n\
         2. Their specific views on meaning in life\n\
         3. Key concepts and arguments they developed about meaning\n\
         4. How their ideas relate to or differ from other philosophical perspectives\n\
         5. The relevance and implications of their views on meaning for contemporary understanding\n\
         \n\
         Write in an academic but accessible style, suitable for research purposes.\n\
         Focus on their most important contributions to the philosophy of meaning.",
        name = thinker.name
    );
    if !thinker.themes.is_empty() {
        prompt.push_str(&format!(
            "\nPay particular attention to: {}.",
            thinker.themes.join(", ")
        ));
    }
    prompt
}

/// Standard meaning-in-life instruments offered as structural templates
pub fn standard_questionnaires() -> serde_json::Value {
    serde_json::json!({
        "MLQ": {
            "name": "Meaning in Life Questionnaire (MLQ)",
            "structure": "1. PRESENCE OF MEANING (5 items): how much respondents feel their lives have meaning. \
                Examples: I understand my life's meaning; My life has a clear sense of purpose.\n\
                2. SEARCH FOR MEANING (5 items): how much respondents are actively seeking meaning. \
                Examples: I am looking for something that makes my life feel meaningful; I am seeking a purpose or mission for my life.\n\
                Response scale: 1 (Absolutely untrue) to 7 (Absolutely true)"
        },
        "PIL": {
            "name": "Purpose in Life Test (PIL)",
            "structure": "Dimensions: life satisfaction and excitement, goal-directedness, death acceptance, \
                freedom, self-realization, meaningfulness.\n\
                Examples: I am usually: (a) bored (b) neutral (c) excited about life; \
                My life is: (a) empty and without purpose (b) routine (c) full of good things.\n\
                Response format: 7-point bipolar scales"
        },
        "MAPS": {
            "name": "Multidimensional Assessment of Purpose in Life (MAPS)",
            "structure": "Dimensions: purpose awareness, purpose engagement, purpose alignment, purpose meaningfulness.\n\
                Examples: I have a clear sense of my purpose in life; I actively work toward my life purpose; \
                My daily activities align with my life purpose.\n\
                Response scale: 1 (Strongly disagree) to 7 (Strongly agree)"
        }
    })
}

pub fn questionnaire_prompt(thinker: &str, essay: &str) -> String {
    let templates = serde_json::to_string_pretty(&standard_questionnaires()).unwrap_or_default();
    format!(
        "Based on the following thinker's ideas about meaning, create a comprehensive questionnaire \
         that captures their unique perspective on meaning in life.\n\
         \n\
         THINKER: {thinker}\n\
         \n\
         THINKER'S IDEAS ABOUT MEANING:\n\
         {essay}\n\
         \n\
         STANDARD QUESTIONNAIRE STRUCTURES TO USE AS TEMPLATES:\n\
         {templates}\n\
         \n\
         TASK: Create a questionnaire that:\n\
         1. Reflects {thinker}'s specific views on meaning and purpose\n\
         2. Uses the structural elements from the standard questionnaires (scales, response formats, etc.)\n\
         3. Includes 15-20 items that capture different aspects of their philosophy\n\
         4. Has clear instructions and response scales\n\
         5. Is suitable for research purposes\n\
         \n\
         REQUIREMENTS:\n\
         - Include a title and brief description\n\
         - Provide clear instructions for respondents\n\
         - Use appropriate response scales (e.g., 1-7 Likert scales)\n\
         - Group items into logical dimensions if applicable\n\
         - Make items clear and accessible\n\
         - Ensure items directly relate to {thinker}'s philosophical views\n\
         \n\
         FORMAT: Return the questionnaire in a clear, structured format with:\n\
         - Title\n\
         - Description\n\
         - Instructions\n\
         - Items grouped by dimensions (if applicable)\n\
         - Response scale explanation"
    )
}
