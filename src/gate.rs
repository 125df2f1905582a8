use std::fmt;

use crate::expr::Expr;
use crate::types::Lit;

/// Gate combining one literal with the output of another function.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rule {
    And,
    Or,
    Nand,
    Nor,
}

impl Rule {
    /// All rules, in the order the connection checker tries them.
    pub const ALL: [Rule; 4] = [Rule::And, Rule::Or, Rule::Nand, Rule::Nor];

    pub fn is_inverting(self) -> bool {
        matches!(self, Rule::Nand | Rule::Nor)
    }

    /// Symbol of the underlying non-inverting operator.
    pub fn operator(self) -> char {
        match self {
            Rule::And | Rule::Nand => '&',
            Rule::Or | Rule::Nor => '|',
        }
    }

    /// Build the gate expression `lit OP input`.
    pub fn apply(self, lit: Lit, input: &Expr) -> Expr {
        let lit = Expr::lit(lit);
        let input = input.clone();
        match self {
            Rule::And => Expr::and(lit, input),
            Rule::Or => Expr::or(lit, input),
            Rule::Nand => Expr::not(Expr::and(lit, input)),
            Rule::Nor => Expr::not(Expr::or(lit, input)),
        }
    }

    /// Gate output for given inputs.
    pub fn eval(self, lit: bool, input: bool) -> bool {
        match self {
            Rule::And => lit && input,
            Rule::Or => lit || input,
            Rule::Nand => !(lit && input),
            Rule::Nor => !(lit || input),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rule::And => "AND",
            Rule::Or => "OR",
            Rule::Nand => "NAND",
            Rule::Nor => "NOR",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Var;

    #[test]
    fn test_apply_matches_eval() {
        let x = Lit::positive(Var::new(1));
        let y = Expr::lit(Lit::positive(Var::new(2)));
        for rule in Rule::ALL {
            let gate = rule.apply(x, &y);
            for assignment in 0..4u64 {
                let expected = rule.eval(assignment & 1 == 1, assignment & 2 == 2);
                assert_eq!(gate.eval(assignment), expected, "{} on {:02b}", rule, assignment);
            }
        }
    }

    #[test]
    fn test_rule_shape() {
        assert!(!Rule::And.is_inverting());
        assert!(Rule::Nor.is_inverting());
        assert_eq!(Rule::Nand.operator(), '&');
        assert_eq!(Rule::Or.operator(), '|');
        assert_eq!(Rule::Nor.to_string(), "NOR");
    }
}
