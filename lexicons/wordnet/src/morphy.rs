//! Base-form reduction for inflected English words.

use std::collections::HashMap;

use crate::dictionary::PartOfSpeech;

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

fn rules(pos: PartOfSpeech) -> &'static [(&'static str, &'static str)] {
    match pos {
        PartOfSpeech::Noun => NOUN_RULES,
        PartOfSpeech::Verb => VERB_RULES,
        PartOfSpeech::Adjective | PartOfSpeech::AdjectiveSatellite => ADJECTIVE_RULES,
        PartOfSpeech::Adverb => &[],
    }
}

fn apply_rules(forms: &[String], pos: PartOfSpeech) -> Vec<String> {
    let mut out = Vec::new();
    for form in forms {
        for (suffix, replacement) in rules(pos) {
            if let Some(stem) = form.strip_suffix(suffix) {
                let candidate = format!("{stem}{replacement}");
                if !out.contains(&candidate) {
                    out.push(candidate);
                }
            }
        }
    }
    out
}

fn filter_forms(forms: &[String], is_indexed: &impl Fn(&str) -> bool) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for form in forms {
        if is_indexed(form) && !out.contains(form) {
            out.push(form.clone());
        }
    }
    out
}

/// Indexed base forms of `form` for one part of speech, most direct first.
///
/// Exceptions (irregular forms) take precedence over the detachment rules.
/// Rules are applied repeatedly until some round yields an indexed form.
pub fn morphy(
    form: &str,
    pos: PartOfSpeech,
    exceptions: Option<&HashMap<String, Vec<String>>>,
    is_indexed: impl Fn(&str) -> bool,
) -> Vec<String> {
    if let Some(bases) = exceptions.and_then(|e| e.get(form)) {
        let mut forms = vec![form.to_string()];
        forms.extend(bases.iter().cloned());
        return filter_forms(&forms, &is_indexed);
    }

    let mut forms = apply_rules(&[form.to_string()], pos);

    let mut first_round = vec![form.to_string()];
    first_round.extend(forms.iter().cloned());
    let results = filter_forms(&first_round, &is_indexed);
    if !results.is_empty() {
        return results;
    }

    while !forms.is_empty() {
        forms = apply_rules(&forms, pos);
        let results = filter_forms(&forms, &is_indexed);
        if !results.is_empty() {
            return results;
        }
    }

    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indexed<'a>(words: &'a [&'a str]) -> impl Fn(&str) -> bool + 'a {
        move |w: &str| words.iter().any(|x| *x == w)
    }

    #[test]
    fn exact_form_comes_first() {
        let forms = morphy("runs", PartOfSpeech::Verb, None, indexed(&["runs", "run"]));
        assert_eq!(forms, vec!["runs", "run"]);
    }

    #[test]
    fn detaches_regular_suffixes() {
        assert_eq!(
            morphy("dogs", PartOfSpeech::Noun, None, indexed(&["dog"])),
            vec!["dog"]
        );
        assert_eq!(
            morphy("churches", PartOfSpeech::Noun, None, indexed(&["church"])),
            vec!["church"]
        );
        assert_eq!(
            morphy("running", PartOfSpeech::Verb, None, indexed(&["run"])),
            Vec::<String>::new()
        );
        assert_eq!(
            morphy("walking", PartOfSpeech::Verb, None, indexed(&["walk"])),
            vec!["walk"]
        );
        assert_eq!(
            morphy("larger", PartOfSpeech::Adjective, None, indexed(&["large"])),
            vec!["large"]
        );
    }

    #[test]
    fn exceptions_override_rules() {
        let exceptions = HashMap::from([("ran".to_string(), vec!["run".to_string()])]);
        let forms = morphy("ran", PartOfSpeech::Verb, Some(&exceptions), indexed(&["run"]));
        assert_eq!(forms, vec!["run"]);
    }

    #[test]
    fn repeated_rounds_reach_deeper_stems() {
        // "boxeses" -> "boxes" (not indexed) -> "box"
        let forms = morphy("boxeses", PartOfSpeech::Noun, None, indexed(&["box"]));
        assert_eq!(forms, vec!["box"]);
    }

    #[test]
    fn adverbs_have_no_rules() {
        assert!(morphy("quickly", PartOfSpeech::Adverb, None, indexed(&["quick"])).is_empty());
    }
}
