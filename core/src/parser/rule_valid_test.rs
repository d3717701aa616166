// Tests with valid programs for each rule in the grammar.

use crate::parser::{LispyParser, Rule};
use pest::Parser;
use pest::iterators::Pair;

fn contains_rule(pair: Pair<Rule>, target: Rule) -> bool {
    if pair.as_rule() == target {
        return true;
    }
    for inner in pair.into_inner() {
        if contains_rule(inner, target) {
            return true;
        }
    }
    false
}

fn count_rule(pair: Pair<Rule>, target: Rule) -> usize {
    let here = usize::from(pair.as_rule() == target);
    here + pair
        .into_inner()
        .map(|inner| count_rule(inner, target))
        .sum::<usize>()
}

macro_rules! rule_examples {
    ( $($rule:ident => [$($expr:expr),* $(,)?]),* $(,)? ) => {
        $(
            #[test]
            fn $rule() {
                let inputs = vec![$($expr),*];
                for input in inputs {
                    let result = LispyParser::parse(Rule::lispy, input)
                        .unwrap_or_else(|e| panic!("Failed to parse '{}': {}", input, e));
                    let root = result.into_iter().next().unwrap();
                    assert!(
                        contains_rule(root.clone(), Rule::$rule),
                        "Expected to find rule {:?} in parse tree for input '{}'",
                        Rule::$rule,
                        input
                    );
                }
            }
        )*
    };
}

rule_examples! {
    number => ["+ 42 1", "- -99", "* 3. 2", "* 3.1 2"],
    operator => ["+ 1", "- 1", "* 1", "/ 1", "% 1", "^ 1"],
    expr => ["+ 1", "+ (* 2 3)", "+ 1 (- (^ 2 2) 1)"],
    lispy => ["+ 1 2", "  ^ 2 3  "],
}

#[test]
fn test_operator_count_matches_forms() {
    let input = "+ 1 (* 2 (- 3 4)) (/ 8 2)";
    let root = LispyParser::parse(Rule::lispy, input)
        .unwrap()
        .next()
        .unwrap();
    assert_eq!(count_rule(root.clone(), Rule::operator), 4);
    assert_eq!(count_rule(root, Rule::number), 6);
}
