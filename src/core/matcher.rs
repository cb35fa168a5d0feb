//! Template matching against classified input fields.

use log::debug;
use std::collections::BTreeMap;

use super::classify::detect_type;
use super::Template;

/// Score every template against the input fields and return the name of the
/// best match, if any.
///
/// A template earns one point per input field whose detected type agrees
/// with the expected type the template records under the same name; fields
/// the template does not mention are ignored. A single disagreement
/// invalidates the template outright and its partial score is discarded.
/// Among valid templates the strictly highest score wins, and on ties the
/// template that reached the score first (in `templates` order, which is
/// store file order) keeps it. The winner must score above zero, so a
/// template with no overlapping fields never matches.
pub fn find_best_match<'a>(
    input_fields: &BTreeMap<String, String>,
    templates: &'a [Template],
) -> Option<&'a str> {
    let mut best_match = None;
    let mut max_score = 0;

    for template in templates {
        let mut score = 0;
        let mut valid = true;

        for (field_name, value) in input_fields {
            if let Some(expected_type) = template.fields.get(field_name) {
                let actual_type = detect_type(value);
                if actual_type == *expected_type {
                    score += 1;
                } else {
                    valid = false;
                    break;
                }
            }
        }

        if !valid {
            debug!("template '{}' rejected on type mismatch", template.name);
            continue;
        }

        debug!("template '{}' scored {}", template.name, score);
        if score > max_score {
            max_score = score;
            best_match = Some(template.name.as_str());
        }
    }

    best_match
}
