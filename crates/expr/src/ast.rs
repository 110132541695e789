use std::fmt;

/// A node of a parsed formula.
///
/// Named constants are folded into [`Node::Number`] while parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Number(f64),
    Variable,
    Unary(UnaryOp, Box<Node>),
    Binary(BinaryOp, Box<Node>, Box<Node>),
    Call(Function, Box<Node>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Plus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

/// Associativity of a binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Assoc {
    Left,
    Right,
}

/// Binding power of unary `-` and `+`: above `*` and `/`, below `^`.
pub(crate) const UNARY_PRECEDENCE: usize = 4;

/// Binding power of operands and calls, used when printing.
const ATOM_PRECEDENCE: usize = 99;

impl BinaryOp {
    pub(crate) fn precedence(self) -> (usize, Assoc) {
        match self {
            BinaryOp::Add | BinaryOp::Sub => (2, Assoc::Left),
            BinaryOp::Mul | BinaryOp::Div => (3, Assoc::Left),
            BinaryOp::Pow => (5, Assoc::Right),
        }
    }

    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Sub => lhs - rhs,
            BinaryOp::Mul => lhs * rhs,
            BinaryOp::Div => lhs / rhs,
            BinaryOp::Pow => lhs.powf(rhs),
        }
    }

    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
            BinaryOp::Pow => '^',
        }
    }
}

/// Built-in single-argument functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    /// Base-10 logarithm.
    Log,
    /// Natural logarithm.
    Ln,
    Sqrt,
    Exp,
    Abs,
}

impl Function {
    /// Looks up a function by the name used in formulas.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Function::Sin),
            "cos" => Some(Function::Cos),
            "tan" => Some(Function::Tan),
            "log" => Some(Function::Log),
            "ln" => Some(Function::Ln),
            "sqrt" => Some(Function::Sqrt),
            "exp" => Some(Function::Exp),
            "abs" => Some(Function::Abs),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Log => "log",
            Function::Ln => "ln",
            Function::Sqrt => "sqrt",
            Function::Exp => "exp",
            Function::Abs => "abs",
        }
    }

    /// Applies the function, returning NaN outside its real domain.
    #[must_use]
    pub fn apply(self, arg: f64) -> f64 {
        match self {
            Function::Sin => arg.sin(),
            Function::Cos => arg.cos(),
            Function::Tan => arg.tan(),
            // `ln(0)` would otherwise be -inf.
            Function::Log if arg <= 0.0 => f64::NAN,
            Function::Ln if arg <= 0.0 => f64::NAN,
            Function::Log => arg.log10(),
            Function::Ln => arg.ln(),
            Function::Sqrt => arg.sqrt(),
            Function::Exp => arg.exp(),
            Function::Abs => arg.abs(),
        }
    }
}

impl Node {
    /// Evaluates the tree with the variable bound to `x`.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Node::Number(value) => *value,
            Node::Variable => x,
            Node::Unary(UnaryOp::Neg, operand) => -operand.eval(x),
            Node::Unary(UnaryOp::Plus, operand) => operand.eval(x),
            Node::Binary(op, lhs, rhs) => op.apply(lhs.eval(x), rhs.eval(x)),
            Node::Call(func, arg) => func.apply(arg.eval(x)),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn printer(node: &Node) -> (String, usize) {
            match node {
                Node::Number(value) => (format!("{value}"), ATOM_PRECEDENCE),
                Node::Variable => ("x".to_string(), ATOM_PRECEDENCE),
                Node::Unary(op, operand) => {
                    let (inner, prec) = printer(operand);
                    let sign = if *op == UnaryOp::Neg { "-" } else { "+" };
                    if prec < UNARY_PRECEDENCE {
                        (format!("{sign}({inner})"), UNARY_PRECEDENCE)
                    } else {
                        (format!("{sign}{inner}"), UNARY_PRECEDENCE)
                    }
                }
                Node::Binary(op, lhs, rhs) => {
                    let (prec, assoc) = op.precedence();
                    let (lhs, lhs_prec) = printer(lhs);
                    let (rhs, rhs_prec) = printer(rhs);
                    // A unary operand on the left of `^` needs parens: `(-2)^2`.
                    let lhs = if lhs_prec < prec || (lhs_prec == prec && assoc != Assoc::Left) {
                        format!("({lhs})")
                    } else {
                        lhs
                    };
                    let rhs = if rhs_prec < prec || (rhs_prec == prec && assoc != Assoc::Right)
                    {
                        format!("({rhs})")
                    } else {
                        rhs
                    };
                    (format!("{lhs} {} {rhs}", op.symbol()), prec)
                }
                Node::Call(func, arg) => {
                    (format!("{}({})", func.name(), printer(arg).0), ATOM_PRECEDENCE)
                }
            }
        }

        write!(f, "{}", printer(self).0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn num(value: f64) -> Box<Node> {
        Box::new(Node::Number(value))
    }

    fn var() -> Box<Node> {
        Box::new(Node::Variable)
    }

    #[test]
    fn evaluates_nested_tree() {
        // 3 * x^2 - 1
        let tree = Node::Binary(
            BinaryOp::Sub,
            Box::new(Node::Binary(
                BinaryOp::Mul,
                num(3.0),
                Box::new(Node::Binary(BinaryOp::Pow, var(), num(2.0))),
            )),
            num(1.0),
        );
        assert_relative_eq!(tree.eval(2.0), 11.0);
        assert_relative_eq!(tree.eval(-1.0), 2.0);
    }

    #[test]
    fn log_is_base_ten_and_ln_is_natural() {
        assert_relative_eq!(Function::Log.apply(1000.0), 3.0, epsilon = 1e-12);
        assert_relative_eq!(Function::Ln.apply(std::f64::consts::E), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn out_of_domain_is_nan() {
        assert!(Function::Sqrt.apply(-1.0).is_nan());
        assert!(Function::Log.apply(0.0).is_nan());
        assert!(Function::Ln.apply(-2.0).is_nan());
        assert!(Function::Ln.apply(0.0).is_nan());
    }

    #[test]
    fn division_by_zero_follows_ieee() {
        assert_eq!(BinaryOp::Div.apply(1.0, 0.0), f64::INFINITY);
        assert_eq!(BinaryOp::Div.apply(-1.0, 0.0), f64::NEG_INFINITY);
        assert!(BinaryOp::Div.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn function_names_round_trip() {
        for name in ["sin", "cos", "tan", "log", "ln", "sqrt", "exp", "abs"] {
            let func = Function::from_name(name).expect("known function");
            assert_eq!(func.name(), name);
        }
        assert_eq!(Function::from_name("sinh"), None);
    }

    #[test]
    fn display_adds_only_needed_parens() {
        let power_of_neg = Node::Binary(
            BinaryOp::Pow,
            Box::new(Node::Unary(UnaryOp::Neg, num(2.0))),
            num(2.0),
        );
        assert_eq!(power_of_neg.to_string(), "(-2) ^ 2");

        let neg_of_power = Node::Unary(
            UnaryOp::Neg,
            Box::new(Node::Binary(BinaryOp::Pow, num(2.0), num(2.0))),
        );
        assert_eq!(neg_of_power.to_string(), "-2 ^ 2");

        let right_nested_sub = Node::Binary(
            BinaryOp::Sub,
            var(),
            Box::new(Node::Binary(BinaryOp::Sub, num(1.0), var())),
        );
        assert_eq!(right_nested_sub.to_string(), "x - (1 - x)");

        let call = Node::Call(
            Function::Sqrt,
            Box::new(Node::Binary(BinaryOp::Add, var(), num(1.0))),
        );
        assert_eq!(call.to_string(), "sqrt(x + 1)");
    }
}
