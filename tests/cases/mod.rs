pub struct TestCase {
    pub name: &'static str,
    pub input: &'static str,
    pub leaves: u64,
    pub result: &'static str,
}

pub static TEST_CASES: &[TestCase] = &[
    TestCase {
        name: "nested_addition",
        input: "+ 1 (* 2 3)",
        leaves: 6,
        result: "7",
    },
    TestCase {
        name: "division_by_zero",
        input: "/ 10 0",
        leaves: 4,
        result: "Error: Division by zero.",
    },
    TestCase {
        name: "power",
        input: "^ 2 3",
        leaves: 4,
        result: "8",
    },
    TestCase {
        name: "single_operand",
        input: "- 5",
        leaves: 3,
        result: "5",
    },
    TestCase {
        name: "remainder_by_zero",
        input: "% 7 (- 2 2)",
        leaves: 6,
        result: "Error: Division by zero.",
    },
    TestCase {
        name: "out_of_range_literal",
        input: "* 2 100000000000000000000",
        leaves: 4,
        result: "Error: Invalid number.",
    },
    TestCase {
        name: "negative_exponent",
        input: "^ 10 -2",
        leaves: 4,
        result: "Error: Invalid exponent.",
    },
    TestCase {
        name: "zero_exponent",
        input: "^ 0 0",
        leaves: 4,
        result: "1",
    },
    TestCase {
        name: "left_fold",
        input: "- 100 (/ 50 5 2) 1 (% 9 4)",
        leaves: 11,
        result: "93",
    },
    TestCase {
        name: "trailing_dot",
        input: "+ 12. 3",
        leaves: 4,
        result: "15",
    },
    TestCase {
        name: "multiline",
        input: "+ 1\n  (* 2\n     3)",
        leaves: 6,
        result: "7",
    },
];
