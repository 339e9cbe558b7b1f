//! Restricted arithmetic
//!
//! Only digits, `+ - * / ( ) .` and spaces are accepted. Anything else is
//! rejected before parsing. Grammar:
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := factor (('*' | '/') factor)*
//! factor := ('+' | '-') factor | number | '(' expr ')'
//! ```

/// Evaluator seam used by the dispatcher
pub trait Calculator: Send + Sync {
    /// `None` when the expression is not acceptable or has no value
    fn evaluate(&self, expression: &str) -> Option<f64>;
}

/// Recursive-descent evaluator over the restricted character set
#[derive(Debug, Clone, Copy, Default)]
pub struct ArithmeticCalculator;

/// Characters an expression may contain
pub fn is_allowed(expression: &str) -> bool {
    expression
        .chars()
        .all(|c| c.is_ascii_digit() || "+-*/(). ".contains(c) || c.is_whitespace())
}

impl Calculator for ArithmeticCalculator {
    fn evaluate(&self, expression: &str) -> Option<f64> {
        let expression = expression.trim();
        if expression.is_empty() || !is_allowed(expression) {
            return None;
        }

        let mut parser = Parser {
            chars: expression.chars().collect(),
            pos: 0,
        };
        let value = parser.expr()?;
        parser.skip_whitespace();
        if parser.pos != parser.chars.len() || !value.is_finite() {
            return None;
        }
        Some(value)
    }
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn eat(&mut self, c: char) -> bool {
        self.skip_whitespace();
        if self.peek() == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expr(&mut self) -> Option<f64> {
        let mut value = self.term()?;
        loop {
            if self.eat('+') {
                value += self.term()?;
            } else if self.eat('-') {
                value -= self.term()?;
            } else {
                return Some(value);
            }
        }
    }

    fn term(&mut self) -> Option<f64> {
        let mut value = self.factor()?;
        loop {
            if self.eat('*') {
                value *= self.factor()?;
            } else if self.eat('/') {
                let divisor = self.factor()?;
                if divisor == 0.0 {
                    return None;
                }
                value /= divisor;
            } else {
                return Some(value);
            }
        }
    }

    fn factor(&mut self) -> Option<f64> {
        if self.eat('+') {
            return self.factor();
        }
        if self.eat('-') {
            return self.factor().map(|v| -v);
        }
        if self.eat('(') {
            let value = self.expr()?;
            return self.eat(')').then_some(value);
        }
        self.number()
    }

    /// Digits and dots, no whitespace inside a literal
    fn number(&mut self) -> Option<f64> {
        self.skip_whitespace();
        let start = self.pos;
        let mut dots = 0;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.pos += 1;
            } else if c == '.' {
                dots += 1;
                self.pos += 1;
            } else {
                break;
            }
        }
        let literal: String = self.chars[start..self.pos].iter().collect();
        if literal.is_empty() || literal == "." || dots > 1 {
            return None;
        }
        literal.parse().ok()
    }
}

/// Render a result the way people say it: integral values without decimals
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
