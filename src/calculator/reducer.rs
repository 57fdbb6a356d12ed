//! The state-transition function.

use super::action::{is_digit_char, Action};
use super::evaluate::evaluate;
use super::state::{CalculatorState, Operation};

/// Compute the state that follows `state` after `action`.
///
/// Total and pure: every input produces a state, nothing is mutated, and
/// unrecognized actions return the state unchanged.
pub fn reduce(state: &CalculatorState, action: &Action) -> CalculatorState {
    match *action {
        Action::AddDigit { digit } => add_digit(state, digit),
        Action::ChooseOperation { operation } => choose_operation(state, operation),
        Action::Clear => CalculatorState::default(),
        Action::DeleteDigit => delete_digit(state),
        Action::Evaluate => evaluate_pending(state),
        Action::Unknown => state.clone(),
    }
}

/// Fold a sequence of actions over the empty state.
pub fn reduce_all<'a, I>(actions: I) -> CalculatorState
where
    I: IntoIterator<Item = &'a Action>,
{
    actions
        .into_iter()
        .fold(CalculatorState::default(), |state, action| {
            reduce(&state, action)
        })
}

impl CalculatorState {
    /// Consume the state and return its successor.
    pub fn apply(self, action: &Action) -> CalculatorState {
        reduce(&self, action)
    }
}

fn add_digit(state: &CalculatorState, digit: char) -> CalculatorState {
    if !is_digit_char(digit) {
        return state.clone();
    }

    if state.overwrite {
        return CalculatorState {
            current_operand: Some(digit.to_string()),
            overwrite: false,
            ..state.clone()
        };
    }

    let current = state.current_operand.as_deref();
    if digit == '0' && current == Some("0") {
        return state.clone();
    }
    if digit == '.' && current.is_some_and(|operand| operand.contains('.')) {
        return state.clone();
    }

    let mut operand = current.unwrap_or_default().to_string();
    operand.push(digit);
    CalculatorState {
        current_operand: Some(operand),
        ..state.clone()
    }
}

fn choose_operation(state: &CalculatorState, operation: Operation) -> CalculatorState {
    if state.current_operand.is_none() && state.previous_operand.is_none() {
        return state.clone();
    }

    if state.current_operand.is_none() && state.operation.is_some() {
        return CalculatorState {
            operation: Some(operation),
            ..state.clone()
        };
    }

    if state.previous_operand.is_none() {
        return CalculatorState {
            previous_operand: state.current_operand.clone(),
            operation: Some(operation),
            current_operand: None,
            ..state.clone()
        };
    }

    CalculatorState {
        previous_operand: Some(evaluate(state)),
        operation: Some(operation),
        current_operand: None,
        ..state.clone()
    }
}

fn delete_digit(state: &CalculatorState) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            overwrite: false,
            current_operand: None,
            ..state.clone()
        };
    }

    let Some(current) = state.current_operand.as_deref() else {
        return state.clone();
    };

    let mut chars = current.chars();
    chars.next_back();
    let remaining = chars.as_str();
    CalculatorState {
        current_operand: (!remaining.is_empty()).then(|| remaining.to_string()),
        ..state.clone()
    }
}

fn evaluate_pending(state: &CalculatorState) -> CalculatorState {
    if state.operation.is_none()
        || state.current_operand.is_none()
        || state.previous_operand.is_none()
    {
        return state.clone();
    }

    CalculatorState {
        current_operand: Some(evaluate(state)),
        previous_operand: None,
        operation: None,
        overwrite: true,
    }
}
