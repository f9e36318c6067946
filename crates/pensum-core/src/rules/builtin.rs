use crate::error::PensumError;
use crate::rules::schema::RuleSetDef;

const SUBJECTS_JSON: &str = include_str!("../../../../rules/subjects.json");
const SOLUTION_TYPES_JSON: &str = include_str!("../../../../rules/solution-types.json");
const THEORY_BUCKETS_JSON: &str = include_str!("../../../../rules/theory-buckets.json");

/// Document-level subject taxonomy.
pub const SUBJECTS: &str = "subjects";
/// Solution-template categories.
pub const SOLUTION_TYPES: &str = "solution-types";
/// Coarse buckets for theory names.
pub const THEORY_BUCKETS: &str = "theory-buckets";

/// Available predefined rule sets.
pub const PRESETS: &[&str] = &[SUBJECTS, SOLUTION_TYPES, THEORY_BUCKETS];

/// Load a predefined rule set by name.
pub fn load_preset(name: &str) -> Result<RuleSetDef, PensumError> {
    let json = match name {
        SUBJECTS => SUBJECTS_JSON,
        SOLUTION_TYPES => SOLUTION_TYPES_JSON,
        THEORY_BUCKETS => THEORY_BUCKETS_JSON,
        _ => {
            return Err(PensumError::RulesetInvalid(format!(
                "unknown preset '{}'. Available: {}",
                name,
                PRESETS.join(", ")
            )))
        }
    };
    crate::rules::parse_ruleset_str(json)
}
