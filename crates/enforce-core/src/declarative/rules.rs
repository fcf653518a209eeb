//! Declarative rule implementations.
//!
//! Converts domain model definitions into [`PartialRule`] implementations.

use crate::clause::Clause;
use crate::rule::PartialRule;
use crate::value::Value;
use regex::Regex;

use super::model::PatternRuleDef;

/// A partial rule defined in a `[[patterns]]` section.
#[derive(Debug, Clone)]
pub struct PatternRule {
    def: PatternRuleDef,
}

impl PatternRule {
    /// Creates the rule from its validated definition.
    #[must_use]
    pub fn new(def: PatternRuleDef) -> Self {
        Self { def }
    }
}

impl PartialRule for PatternRule {
    fn name(&self) -> &str {
        self.def.name().as_str()
    }

    fn description(&self) -> &str {
        self.def
            .description()
            .unwrap_or_else(|| self.def.pattern().as_str())
    }

    fn pattern(&self) -> &Regex {
        self.def.pattern().regex()
    }

    fn evaluate(&self, value: &Value, _clause: &Clause) -> bool {
        self.def.check().holds(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declarative::model::{Check, Pattern, RuleName};

    fn rule(check: Check, description: Option<&str>) -> PatternRule {
        PatternRule::new(PatternRuleDef::new(
            RuleName::new("is-one").unwrap(),
            Pattern::new("^is one$", true).unwrap(),
            description.map(str::to_string),
            check,
        ))
    }

    #[test]
    fn evaluates_its_check() {
        let rule = rule(Check::Equals(Value::from(1)), None);
        let clause = Clause::parse("Is One").unwrap();

        assert!(rule.pattern().is_match(clause.text()));
        assert!(rule.evaluate(&Value::from(1), &clause));
        assert!(!rule.evaluate(&Value::from(2), &clause));
    }

    #[test]
    fn describes_itself() {
        let plain = rule(Check::Equals(Value::Null), None);
        assert_eq!(plain.name(), "is-one");
        assert_eq!(plain.code(), "");
        assert_eq!(plain.description(), "^is one$");

        let described = rule(Check::Equals(Value::Null), Some("equals one"));
        assert_eq!(described.description(), "equals one");
    }
}
