//! Wire contract for generated cold-email packages.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A generated cold-email package.
///
/// This is the exact shape the model is constrained to by the response
/// schema. Deserializing the model's text into it is the structural
/// contract check; output that does not fit is surfaced with the raw text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedEmail {
    /// Cold email subject line.
    pub subject: String,
    /// Full email body formatted in HTML.
    pub body_html: String,
    /// One-sentence summary of the core value offered to this lead.
    pub value_proposition: String,
    /// Simulated profile of the targeted lead.
    pub lead_profile: LeadProfile,
}

/// Simulated buyer persona for the targeted industry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadProfile {
    /// Job title of the person being targeted.
    pub role: String,
    /// Main business issue the product solves for this lead.
    pub primary_challenge: String,
    /// Plausible annual revenue figure for the lead's company.
    pub predicted_annual_revenue_usd: String,
}

/// Gemini response schema pinning generation to the [`GeneratedEmail`] shape.
///
/// Uses Gemini's uppercase type names. The field descriptions steer the
/// model; the `required` lists make every field mandatory at both nesting
/// levels.
pub fn email_schema(product_name: &str) -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "subject": {
                "type": "STRING",
                "description": "A compelling, personalized cold email subject line (10 words max)."
            },
            "body_html": {
                "type": "STRING",
                "description": "The full, professional cold email body formatted in HTML with paragraph breaks, ready to send. End with a placeholder for the sender's name."
            },
            "value_proposition": {
                "type": "STRING",
                "description": format!("A one-sentence summary of the core value provided by {}.", product_name)
            },
            "lead_profile": {
                "type": "OBJECT",
                "description": "A brief, simulated profile of the target lead.",
                "properties": {
                    "role": {
                        "type": "STRING",
                        "description": "The job title of the person being targeted (e.g., 'Marketing Director')."
                    },
                    "primary_challenge": {
                        "type": "STRING",
                        "description": format!("The main business issue this lead faces that {} solves.", product_name)
                    },
                    "predicted_annual_revenue_usd": {
                        "type": "STRING",
                        "description": "A plausible annual revenue figure for the lead's company (e.g., '$5M - $10M')."
                    }
                },
                "required": ["role", "primary_challenge", "predicted_annual_revenue_usd"]
            }
        },
        "required": ["subject", "body_html", "value_proposition", "lead_profile"]
    })
}
