//! Boundary rule engine
//!
//! An ordered table of pattern/rewrite pairs. Each rule is applied as a
//! single global replace over the whole text unit and sees the output of the
//! rules before it, so the table order is part of the behaviour: the specific
//! punctuation rules come first and the broad catch-all comes last.
//!
//! All patterns are compiled once, on first use, and are read-only afterwards.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::markers::{CLOSING, OPENING, PARAGRAPH, TERMINAL};

/// A named pattern and the template that re-emits it with a break marker
#[derive(Debug)]
pub struct Rule {
    /// Stable identifier, used in logs and tests
    pub name: &'static str,
    pattern: Regex,
    template: &'static str,
}

impl Rule {
    fn new(name: &'static str, pattern: &str, template: &'static str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("boundary rule pattern must compile"),
            template,
        }
    }

    /// Apply this rule to every non-overlapping match in `text`
    pub fn apply(&self, text: String) -> String {
        match self.pattern.replace_all(&text, self.template) {
            Cow::Borrowed(_) => text,
            Cow::Owned(rewritten) => rewritten,
        }
    }

    /// The source of the compiled pattern
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

/// Break inserted before the starter group, after the gap
const AFTER_GAP: &str = "${1}${2}\n${3}";

/// Break inserted directly between the periods and the starter
const AFTER_PERIODS: &str = "${1}\n${2}";

/// Number of boundary rules in [`RULES`]
pub const RULE_COUNT: usize = 6;

/// The boundary rules, in application order
pub static RULES: LazyLock<[Rule; RULE_COUNT]> = LazyLock::new(|| {
    // Spaces and paragraph markers between a terminator and the next sentence
    let gap = format!("[ {PARAGRAPH}]+");
    // Optional opening quotes or brackets followed by an uppercase letter
    let starter = format!("[{OPENING}]*\\p{{Lu}}");

    [
        Rule::new(
            "non_period_end",
            &format!("([?!])({gap})({starter})"),
            AFTER_GAP,
        ),
        Rule::new(
            "multi_dot_starter",
            &format!("(\\.\\.+)({gap})({starter})"),
            AFTER_GAP,
        ),
        Rule::new(
            "attached_period",
            &format!("(\\w+\\.+)({starter})"),
            AFTER_PERIODS,
        ),
        Rule::new(
            "end_inside_quotes",
            &format!("([{TERMINAL}] *[{CLOSING}]+)({gap})([{OPENING}]* *\\p{{Lu}})"),
            AFTER_GAP,
        ),
        Rule::new(
            "punct_quote_upper",
            &format!("([{TERMINAL}])({gap})([{OPENING}]+ *\\p{{Lu}})"),
            AFTER_GAP,
        ),
        Rule::new(
            "punct_link",
            &format!("([{TERMINAL}])([^\\S\\n]+)((?:http|www)\\S*)"),
            AFTER_GAP,
        ),
    ]
});

/// The boundary rules, in application order
pub fn rules() -> &'static [Rule] {
    RULES.as_slice()
}

/// Run every boundary rule over `text`, in order
pub fn apply_rules(text: String) -> String {
    rules().iter().fold(text, |text, rule| {
        let before = text.len();
        let text = rule.apply(text);
        if text.len() != before {
            log::trace!("rule {} inserted {} break(s)", rule.name, text.len() - before);
        }
        text
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str) -> &'static Rule {
        rules()
            .iter()
            .find(|r| r.name == name)
            .unwrap_or_else(|| panic!("no rule named {name}"))
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<_> = rules().iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            [
                "non_period_end",
                "multi_dot_starter",
                "attached_period",
                "end_inside_quotes",
                "punct_quote_upper",
                "punct_link",
            ]
        );
    }

    #[test]
    fn test_non_period_end() {
        let r = rule("non_period_end");
        assert_eq!(r.apply("Really? Yes.".into()), "Really? \nYes.");
        assert_eq!(r.apply("Stop! «Now»".into()), "Stop! \n«Now»");
        assert_eq!(r.apply("Why? because".into()), "Why? because");
    }

    #[test]
    fn test_non_period_end_across_paragraph() {
        let r = rule("non_period_end");
        assert_eq!(
            r.apply("Done!\u{2029}Next".into()),
            "Done!\u{2029}\nNext"
        );
    }

    #[test]
    fn test_non_period_end_any_script_uppercase() {
        let r = rule("non_period_end");
        assert_eq!(r.apply("Да? Нет.".into()), "Да? \nНет.");
        assert_eq!(r.apply("Ja? Ärger.".into()), "Ja? \nÄrger.");
    }

    #[test]
    fn test_multi_dot_starter() {
        let r = rule("multi_dot_starter");
        assert_eq!(r.apply("Wait... Then".into()), "Wait... \nThen");
        assert_eq!(r.apply("Wait.. \"Then".into()), "Wait.. \n\"Then");
        assert_eq!(r.apply("Wait... then".into()), "Wait... then");
        assert_eq!(r.apply("Wait. Then".into()), "Wait. Then");
    }

    #[test]
    fn test_attached_period() {
        let r = rule("attached_period");
        assert_eq!(
            r.apply("at Centraal.There we".into()),
            "at Centraal.\nThere we"
        );
        assert_eq!(r.apply("end.\"Next".into()), "end.\n\"Next");
        assert_eq!(r.apply("e.g. lowercase".into()), "e.g. lowercase");
    }

    #[test]
    fn test_end_inside_quotes() {
        let r = rule("end_inside_quotes");
        assert_eq!(
            r.apply("He said \"Stop!\" Then he left.".into()),
            "He said \"Stop!\" \nThen he left."
        );
        assert_eq!(
            r.apply("(It was late.) The end.".into()),
            "(It was late.) \nThe end."
        );
        assert_eq!(
            r.apply("“Go.”  ‘Now’".into()),
            "“Go.”  \n‘Now’"
        );
        assert_eq!(
            r.apply("He said \"stop!\" then left.".into()),
            "He said \"stop!\" then left."
        );
    }

    #[test]
    fn test_punct_quote_upper_requires_opening() {
        let r = rule("punct_quote_upper");
        assert_eq!(r.apply("Ended. \"Begin".into()), "Ended. \n\"Begin");
        assert_eq!(r.apply("Ended. ( Begin".into()), "Ended. \n( Begin");
        assert_eq!(r.apply("Ended. Begin".into()), "Ended. Begin");
    }

    #[test]
    fn test_punct_link() {
        let r = rule("punct_link");
        assert_eq!(
            r.apply("See more. http://example.com".into()),
            "See more. \nhttp://example.com"
        );
        assert_eq!(
            r.apply("See more! www.example.com".into()),
            "See more! \nwww.example.com"
        );
        assert_eq!(r.apply("See more. example.com".into()), "See more. example.com");
    }

    #[test]
    fn test_apply_rules_without_matches_is_identity() {
        let text = "no punctuation at all here";
        assert_eq!(apply_rules(text.to_string()), text);
        assert_eq!(apply_rules(String::new()), "");
    }

    #[test]
    fn test_apply_rules_plain_period_is_left_to_resolver() {
        // A bare ". Upper" is a resolver decision, not a rule decision
        assert_eq!(
            apply_rules("Mr. Smith arrived. He left.".to_string()),
            "Mr. Smith arrived. He left."
        );
    }

    #[test]
    fn test_earlier_rule_shields_later_rule() {
        // Rule 1 already placed the break; rule 5 must not add a second one
        let out = apply_rules("Why? \"Because\"".to_string());
        assert_eq!(out, "Why? \n\"Because\"");
        assert_eq!(out.matches('\n').count(), 1);
    }

    #[test]
    fn test_unmatched_brackets_are_untouched() {
        let text = "((( ]]] \"\" ''";
        assert_eq!(apply_rules(text.to_string()), text);
    }

    #[test]
    fn test_rules_only_insert_breaks() {
        let text = "One! Two... Three. \"Four\" five.Six? (Seven.) Eight. http://x.y";
        let out = apply_rules(text.to_string());
        assert_eq!(out.replace('\n', ""), text);
        assert!(out.matches('\n').count() >= 5);
    }
}
