//! Thin bridge between operator text and the machine's expression evaluator.
//!
//! The evaluator is a black box: text in, value-or-failure out, never a
//! panic. What the bits mean is the caller's choice — `p` prints the signed
//! reading, while `w` keeps the raw unsigned bit pattern because that is
//! what gets compared against memory and registers later.

use crate::machine::Machine;

/// Evaluate `expr` as an unsigned machine word.
pub fn eval(machine: &dyn Machine, expr: &str) -> Option<u64> {
    let text = expr.trim();
    if text.is_empty() {
        return None;
    }
    machine.evaluate(text)
}

/// Evaluate `expr` and reinterpret the resulting bits as signed.
pub fn eval_signed(machine: &dyn Machine, expr: &str) -> Option<i64> {
    eval(machine, expr).map(|value| value as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::testing::FakeMachine;

    #[test]
    fn blank_text_never_reaches_the_evaluator() {
        let machine = FakeMachine::with_exprs(&[("", 1)]);
        assert_eq!(eval(&machine, "   "), None);
        assert_eq!(eval(&machine, ""), None);
    }

    #[test]
    fn signed_reading_reinterprets_the_same_bits() {
        let machine = FakeMachine::with_exprs(&[("big", u64::MAX), ("two", 2)]);
        assert_eq!(eval(&machine, "big"), Some(u64::MAX));
        assert_eq!(eval_signed(&machine, "big"), Some(-1));
        assert_eq!(eval_signed(&machine, " two "), Some(2));
    }

    #[test]
    fn failure_is_reported_as_none() {
        let machine = FakeMachine::default();
        assert_eq!(eval(&machine, "???"), None);
        assert_eq!(eval_signed(&machine, "???"), None);
    }
}
