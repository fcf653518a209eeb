//! Validation dispatcher.

use crate::clause::{Clause, RuleDefinition};
use crate::config::ValidatorConfig;
use crate::error::{EnforceError, FormatFailure, FormatReason, ValidationFailure};
use crate::primitive::is_instance_of;
use crate::registry::{PartialRuleRegistry, Snapshot, WholeRuleRegistry};
use crate::rule::{FnRule, PartialRule, PartialRuleBox, WholeRule};
use crate::value::{ClassRef, Value};

use regex::Regex;
use std::sync::Arc;
use tracing::debug;

/// The parameter under test: its name and value.
#[derive(Debug, Clone, Copy)]
pub struct Param<'a> {
    name: &'a str,
    value: &'a Value,
}

impl<'a> Param<'a> {
    /// Creates a parameter.
    #[must_use]
    pub fn new(name: &'a str, value: &'a Value) -> Self {
        Self { name, value }
    }

    /// Returns the parameter name.
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Returns the parameter value.
    #[must_use]
    pub fn value(&self) -> &'a Value {
        self.value
    }
}

/// A class reference supplied for a class check, with its readable label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassArg {
    label: String,
    class: ClassRef,
}

impl ClassArg {
    /// Creates a class argument.
    #[must_use]
    pub fn new(label: impl Into<String>, class: ClassRef) -> Self {
        Self {
            label: label.into(),
            class,
        }
    }

    /// Creates a class argument for `T`.
    #[must_use]
    pub fn of<T: std::any::Any>(label: impl Into<String>) -> Self {
        Self::new(label, ClassRef::of::<T>())
    }

    /// Returns the label used in error messages.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the class tag.
    #[must_use]
    pub fn class(&self) -> ClassRef {
        self.class
    }
}

/// Builder for configuring a [`Validator`].
#[derive(Default)]
pub struct ValidatorBuilder {
    whole_rules: Vec<WholeRule>,
    partial_rules: Vec<PartialRuleBox>,
    config: ValidatorConfig,
}

impl ValidatorBuilder {
    /// Creates a new builder with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a whole rule.
    #[must_use]
    pub fn whole_rule(mut self, rule: WholeRule) -> Self {
        self.whole_rules.push(rule);
        self
    }

    /// Adds several whole rules.
    #[must_use]
    pub fn whole_rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = WholeRule>,
    {
        self.whole_rules.extend(rules);
        self
    }

    /// Appends a partial rule.
    #[must_use]
    pub fn partial_rule<R: PartialRule + 'static>(mut self, rule: R) -> Self {
        self.partial_rules.push(Arc::new(rule));
        self
    }

    /// Appends a shared partial rule.
    #[must_use]
    pub fn partial_rule_box(mut self, rule: PartialRuleBox) -> Self {
        self.partial_rules.push(rule);
        self
    }

    /// Appends several shared partial rules, keeping their order.
    #[must_use]
    pub fn partial_rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = PartialRuleBox>,
    {
        self.partial_rules.extend(rules);
        self
    }

    /// Sets the validator configuration.
    #[must_use]
    pub fn config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the validator.
    #[must_use]
    pub fn build(self) -> Validator {
        let mut whole = WholeRuleRegistry::new(self.config.phrase_case);
        for rule in self.whole_rules {
            whole.insert(rule);
        }

        Validator {
            whole,
            partial: PartialRuleRegistry::from_rules(self.partial_rules),
        }
    }
}

/// Resolves rule strings against its registries and checks values.
///
/// Use [`Validator::builder()`] to construct an instance.
#[derive(Debug)]
pub struct Validator {
    whole: WholeRuleRegistry,
    partial: PartialRuleRegistry,
}

impl Validator {
    /// Creates a new builder for configuring a validator.
    #[must_use]
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    /// Returns the whole-rule registry.
    #[must_use]
    pub fn whole_rules(&self) -> &WholeRuleRegistry {
        &self.whole
    }

    /// Returns a snapshot of the partial rules in priority order.
    #[must_use]
    pub fn partial_rules(&self) -> Snapshot {
        self.partial.snapshot()
    }

    /// Appends a partial rule from a pattern and an evaluator.
    ///
    /// The rule has the lowest priority; earlier rules matching the same
    /// clause text keep winning.
    pub fn register<F>(&self, pattern: Regex, evaluator: F)
    where
        F: Fn(&Value, &Clause) -> bool + Send + Sync + 'static,
    {
        self.register_rule(FnRule::new(pattern, evaluator));
    }

    /// Appends a partial rule.
    pub fn register_rule<R: PartialRule + 'static>(&self, rule: R) {
        self.register_rule_box(Arc::new(rule));
    }

    /// Appends a shared partial rule.
    pub fn register_rule_box(&self, rule: PartialRuleBox) {
        debug!(rule = rule.name(), "registering partial rule");
        self.partial.register(rule);
    }

    /// Validates `param` against `rule`.
    ///
    /// # Errors
    ///
    /// Returns [`EnforceError::Validation`] if the value breaks the rule and
    /// [`EnforceError::Format`] if the rule string cannot be resolved.
    pub fn validate(&self, param: Param<'_>, rule: &str) -> Result<(), EnforceError> {
        self.dispatch(param, rule, None)
    }

    /// Validates that `param` is an instance of `class`.
    ///
    /// `rule` must be exactly `a {}` or `an {}` (an `as ` prefix is allowed).
    ///
    /// # Errors
    ///
    /// Returns [`EnforceError::Format`] for any other rule shape and
    /// [`EnforceError::Validation`] if the value is not an instance of `class`.
    pub fn validate_instance(
        &self,
        param: Param<'_>,
        rule: &str,
        class: &ClassArg,
    ) -> Result<(), EnforceError> {
        self.dispatch(param, rule, Some(class))
    }

    fn dispatch(
        &self,
        param: Param<'_>,
        rule: &str,
        class: Option<&ClassArg>,
    ) -> Result<(), EnforceError> {
        let name = param.name();
        let value = param.value();

        let definition = RuleDefinition::parse(rule)
            .map_err(|e| FormatFailure::new(name, FormatReason::from(e)))?;

        if let Some(class) = class {
            return check_instance(name, value, rule, &definition, class);
        }
        if definition.has_placeholder() {
            return Err(FormatFailure::new(
                name,
                FormatReason::MissingClassReference {
                    rule: rule.to_string(),
                },
            )
            .into());
        }

        let type_clause = definition.type_clause();
        let Some(type_rule) = self.whole.resolve(type_clause.text()) else {
            debug!(param = name, clause = type_clause.text(), "unknown type clause");
            return Err(FormatFailure::new(
                name,
                FormatReason::UnknownType {
                    clause: type_clause.text().to_string(),
                },
            )
            .into());
        };
        if !type_rule.test(value) {
            debug!(param = name, clause = type_clause.text(), "type clause failed");
            return Err(ValidationFailure::new(name, definition.declared()).into());
        }

        if value.is_void() {
            debug!(param = name, "value not supplied, skipping modifiers");
            return Ok(());
        }

        let partial = self.partial.snapshot();
        for clause in definition.modifiers() {
            let outcome = match self.whole.resolve(clause.text()) {
                Some(whole) => Some(whole.test(value)),
                None => partial.search(value, clause),
            };
            match outcome {
                Some(true) => {}
                Some(false) => {
                    debug!(param = name, clause = clause.text(), "modifier clause failed");
                    return Err(ValidationFailure::new(name, definition.declared()).into());
                }
                None => {
                    debug!(param = name, clause = clause.text(), "unknown modifier clause");
                    return Err(FormatFailure::new(
                        name,
                        FormatReason::UnknownModifier {
                            clause: clause.text().to_string(),
                        },
                    )
                    .into());
                }
            }
        }

        Ok(())
    }
}

fn check_instance(
    name: &str,
    value: &Value,
    rule: &str,
    definition: &RuleDefinition,
    class: &ClassArg,
) -> Result<(), EnforceError> {
    let Some(article) = definition.class_article() else {
        return Err(FormatFailure::new(
            name,
            FormatReason::ClassShape {
                rule: rule.to_string(),
            },
        )
        .into());
    };

    if is_instance_of(value, class.class()) {
        return Ok(());
    }

    debug!(param = name, class = class.class().name(), "class check failed");
    Err(ValidationFailure::new(name, vec![format!("{article} {}", class.label())]).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PhraseCase;
    use crate::primitive::Primitive;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Post;
    struct Comment;

    /// A validator with just enough rules to exercise the dispatcher.
    fn validator() -> Validator {
        Validator::builder()
            .whole_rule(WholeRule::new("a string", |v| Primitive::String.test(v)))
            .whole_rule(WholeRule::new("an optional string", |v| {
                Primitive::Void.test(v) || Primitive::String.test(v)
            }))
            .whole_rule(WholeRule::new("a number", |v| Primitive::Number.test(v)))
            .whole_rule(WholeRule::new("a value", |v| !v.is_void()))
            .partial_rule(FnRule::new(Regex::new("^short$").unwrap(), |v, _| {
                v.as_str().is_some_and(|s| s.len() < 5)
            }))
            .build()
    }

    fn check(validator: &Validator, value: &Value, rule: &str) -> Result<(), EnforceError> {
        validator.validate(Param::new("param", value), rule)
    }

    #[test]
    fn passes_silently() {
        let v = validator();
        assert!(check(&v, &Value::from("abc"), "a string, short").is_ok());
    }

    #[test]
    fn type_mismatch_is_validation_failure() {
        let err = check(&validator(), &Value::from(1), "a string, short").unwrap_err();
        let EnforceError::Validation(failure) = err else {
            panic!("expected validation failure");
        };
        assert_eq!(failure.name(), "param");
        assert_eq!(failure.rules(), ["a string", "short"]);
    }

    #[test]
    fn failing_modifier_lists_all_declared_rules() {
        let err = check(&validator(), &Value::from("abcdef"), "as a string, short").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "'param' must be a string, short");
    }

    #[test]
    fn unknown_type_is_format_failure() {
        let err = check(&validator(), &Value::from("x"), "a widget").unwrap_err();
        let EnforceError::Format(failure) = err else {
            panic!("expected format failure");
        };
        assert_eq!(
            failure.reason(),
            &FormatReason::UnknownType {
                clause: "a widget".into()
            }
        );
    }

    #[test]
    fn unknown_modifier_is_format_failure() {
        let err = check(&validator(), &Value::from("x"), "a string, tall").unwrap_err();
        assert!(err.is_format());
        assert_eq!(err.name(), "param");
    }

    #[test]
    fn void_skips_modifiers_even_when_unknown() {
        let v = validator();
        assert!(check(&v, &Value::Void, "an optional string, tall, shorter").is_ok());
    }

    #[test]
    fn void_fails_required_type_before_short_circuit() {
        let err = check(&validator(), &Value::Void, "a string").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn whole_rules_resolve_modifiers_first() {
        let v = validator();
        assert!(check(&v, &Value::from("x"), "a string, a value").is_ok());
        assert!(check(&v, &Value::from("x"), "a string, a number")
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn stops_at_first_failing_modifier() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let v = validator();
        v.register(Regex::new("^counted$").unwrap(), move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });

        let err = check(&v, &Value::from("toolong"), "a string, short, counted").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert!(check(&v, &Value::from("ok"), "a string, short, counted").is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn registered_rule_has_lowest_priority() {
        let v = validator();
        v.register(Regex::new("^short$").unwrap(), |_, _| true);
        let err = check(&v, &Value::from("abcdef"), "a string, short").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(v.partial_rules().rules().len(), 2);
    }

    #[test]
    fn invalid_inline_regex_is_format_failure() {
        let err = check(&validator(), &Value::from("x"), "a string, matches /(/i").unwrap_err();
        let EnforceError::Format(failure) = err else {
            panic!("expected format failure");
        };
        assert!(matches!(
            failure.reason(),
            FormatReason::InvalidPattern { .. }
        ));
    }

    #[test]
    fn phrase_case_is_configurable() {
        let v = Validator::builder()
            .config(ValidatorConfig {
                phrase_case: PhraseCase::Insensitive,
            })
            .whole_rule(WholeRule::new("a string", |v| Primitive::String.test(v)))
            .build();
        assert!(check(&v, &Value::from("x"), "A String").is_ok());
        assert!(check(&validator(), &Value::from("x"), "A String")
            .unwrap_err()
            .is_format());
    }

    #[test]
    fn class_check_passes_for_instance() {
        let post = Value::instance(Post);
        let class = ClassArg::of::<Post>("Post");
        let v = validator();
        assert!(v
            .validate_instance(Param::new("post", &post), "a {}", &class)
            .is_ok());
        assert!(v
            .validate_instance(Param::new("post", &post), "as an {}", &class)
            .is_ok());
    }

    #[test]
    fn class_check_failure_synthesizes_rule() {
        let comment = Value::instance(Comment);
        let class = ClassArg::of::<Post>("Post");
        let err = validator()
            .validate_instance(Param::new("post", &comment), "a {}", &class)
            .unwrap_err();
        assert_eq!(err.to_string(), "'post' must be a Post");
    }

    #[test]
    fn class_check_rejects_other_shapes() {
        let post = Value::instance(Post);
        let class = ClassArg::of::<Post>("Post");
        let v = validator();
        for rule in ["a {}, short", "a string", "the {}", "a"] {
            let err = v
                .validate_instance(Param::new("post", &post), rule, &class)
                .unwrap_err();
            assert!(err.is_format(), "{rule}");
        }
    }

    #[test]
    fn placeholder_without_class_is_format_failure() {
        let err = check(&validator(), &Value::instance(Post), "a {}").unwrap_err();
        let EnforceError::Format(failure) = err else {
            panic!("expected format failure");
        };
        assert!(matches!(
            failure.reason(),
            FormatReason::MissingClassReference { .. }
        ));
    }
}
