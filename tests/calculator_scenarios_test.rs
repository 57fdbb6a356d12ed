//! Calculator Scenario Tests
//!
//! End-to-end action sequences through the public reducer API:
//! - Documented scenarios (5 + 3 =, delete, division by zero)
//! - Chained operations evaluate left to right
//! - Identity and constant laws for Unknown and Clear
//! - Overwrite mode after evaluation

use calc_tui::calculator::{
    format_operand, reduce, reduce_all, Action, CalculatorState, Operation,
};

// ============================================================================
// Test Helpers
// ============================================================================

fn press(labels: &str) -> Vec<Action> {
    labels
        .split_whitespace()
        .flat_map(|word| match word {
            "AC" => vec![Action::Clear],
            "DEL" => vec![Action::DeleteDigit],
            "=" => vec![Action::Evaluate],
            _ => match Operation::from_symbol(word) {
                Some(op) => vec![Action::choose(op)],
                None => word.chars().map(Action::add_digit).collect(),
            },
        })
        .collect()
}

fn run(labels: &str) -> CalculatorState {
    reduce_all(&press(labels))
}

fn sample_states() -> Vec<CalculatorState> {
    ["", "5", "5 +", "5 + 3", "5 + 3 =", "0.5 * 2 DEL", "10 / 0 ="]
        .iter()
        .map(|labels| run(labels))
        .collect()
}

// ============================================================================
// Documented Scenarios
// ============================================================================

#[test]
fn test_five_plus_three() {
    let state = run("5 + 3 =");
    assert_eq!(state.current_operand.as_deref(), Some("8"));
    assert_eq!(state.previous_operand, None);
    assert_eq!(state.operation, None);
    assert!(state.overwrite);
}

#[test]
fn test_delete_after_two_digits() {
    let state = run("1 2 DEL");
    assert_eq!(state.current_operand.as_deref(), Some("1"));
}

#[test]
fn test_division_by_zero_is_infinity() {
    let state = CalculatorState::new()
        .with_previous("10")
        .with_operation(Operation::Divide)
        .with_current("0");
    let state = reduce(&state, &Action::Evaluate);
    assert_eq!(state.current_operand.as_deref(), Some("Infinity"));
    assert_eq!(format_operand(state.current_operand.as_deref()).as_deref(), Some("∞"));
}

#[test]
fn test_format_us_grouping() {
    assert_eq!(format_operand(Some("1234.5")).as_deref(), Some("1,234.5"));
}

// ============================================================================
// Laws
// ============================================================================

#[test]
fn test_unknown_action_is_identity_for_all_states() {
    for state in sample_states() {
        assert_eq!(reduce(&state, &Action::Unknown), state);
    }
}

#[test]
fn test_clear_is_constant_for_all_states() {
    for state in sample_states() {
        assert_eq!(reduce(&state, &Action::Clear), CalculatorState::default());
    }
}

#[test]
fn test_leading_zero_not_duplicated() {
    let state = run("0");
    assert_eq!(reduce(&state, &Action::add_digit('0')), state);
}

#[test]
fn test_at_most_one_decimal_point() {
    for labels in ["1.2.", "..", "3.1415.9", ". 5 ."] {
        let state = run(labels);
        let operand = state.current_operand.unwrap();
        assert_eq!(operand.matches('.').count(), 1, "{}", labels);
    }
}

#[test]
fn test_evaluate_then_digit_overwrites() {
    let state = run("5 + 3 = 4");
    assert_eq!(state.current_operand.as_deref(), Some("4"));
    assert!(!state.overwrite);
}

// ============================================================================
// Chaining and Operator Changes
// ============================================================================

#[test]
fn test_chained_operations_evaluate_left_to_right() {
    let state = run("5 + 3 * 2 =");
    assert_eq!(state.current_operand.as_deref(), Some("16"));
}

#[test]
fn test_change_pending_operator() {
    let state = run("5 + -");
    assert_eq!(state.previous_operand.as_deref(), Some("5"));
    assert_eq!(state.operation, Some(Operation::Subtract));
    assert_eq!(state.current_operand, None);
}

#[test]
fn test_operation_on_result_continues_calculation() {
    let state = run("6 * 7 = - 2 =");
    assert_eq!(state.current_operand.as_deref(), Some("40"));
}

#[test]
fn test_operator_first_is_ignored() {
    let state = run("+ 4");
    assert_eq!(state.current_operand.as_deref(), Some("4"));
    assert_eq!(state.operation, None);
}

#[test]
fn test_delete_after_evaluate_clears_result() {
    let state = run("2 + 2 = DEL");
    assert!(state.is_empty());
}

#[test]
fn test_decimal_arithmetic() {
    let state = run("0.1 + 0.2 =");
    assert_eq!(state.current_operand.as_deref(), Some("0.30000000000000004"));
}

#[test]
fn test_negative_result_formats() {
    let state = run("1000 - 2500 =");
    assert_eq!(state.current_operand.as_deref(), Some("-1500"));
    assert_eq!(
        format_operand(state.current_operand.as_deref()).as_deref(),
        Some("-1,500")
    );
}

#[test]
fn test_lone_decimal_point_operand_evaluates_to_empty() {
    let state = run(". + 1 =");
    assert_eq!(state.current_operand.as_deref(), Some(""));
    assert!(state.overwrite);
}

#[test]
fn test_infinite_result_does_not_chain() {
    let state = run("10 / 0 = + 1");
    assert_eq!(state.previous_operand.as_deref(), Some("Infinity"));
    assert_eq!(format_operand(state.previous_operand.as_deref()).as_deref(), Some("∞"));

    // Non-finite operands do not parse, so the result is empty.
    let state = reduce(&state, &Action::Evaluate);
    assert_eq!(state.current_operand.as_deref(), Some(""));
    assert_eq!(state.previous_operand, None);
    assert!(state.overwrite);
}

// ============================================================================
// Serialized Actions
// ============================================================================

#[test]
fn test_replay_serialized_actions() {
    let json = r#"[
        {"type": "add-digit", "payload": {"digit": "9"}},
        {"type": "choose-operation", "payload": {"operation": "/"}},
        {"type": "add-digit", "payload": {"digit": "4"}},
        {"type": "percent"},
        {"type": "evaluate"}
    ]"#;
    let actions: Vec<Action> = serde_json::from_str(json).unwrap();
    assert_eq!(actions[3], Action::Unknown);

    let state = reduce_all(&actions);
    assert_eq!(state.current_operand.as_deref(), Some("2.25"));
}
