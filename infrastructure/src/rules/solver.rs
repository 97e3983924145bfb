//! Depth-first SLD resolution over a clause database
//!
//! Only existence of a proof matters to callers, so the search stops at the
//! first solution. Bindings live in a persistent-by-clone substitution; the
//! rule files are small enough that copying on each branch is not a concern.

use super::term::{Clause, CompareOp, Goal, Literal, Program, Term};
use casewise_domain::FactSet;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Default resolution depth limit
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Faults raised while proving a goal
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    /// Calling a predicate that has no clauses and was never declared dynamic
    #[error("Unknown procedure: {0}")]
    UnknownProcedure(String),

    #[error("Arguments are not sufficiently instantiated in {0}")]
    Instantiation(String),

    #[error("Type error: {0}")]
    Type(String),

    #[error("Resolution depth limit of {0} exceeded")]
    DepthExceeded(usize),
}

type Key = (String, usize);

#[derive(Debug, Clone, Default)]
struct Bindings(HashMap<usize, Term>);

impl Bindings {
    fn walk(&self, term: &Term) -> Term {
        let mut current = term.clone();
        while let Term::Var(i) = current {
            match self.0.get(&i) {
                Some(bound) => current = bound.clone(),
                None => break,
            }
        }
        current
    }

    fn unify(&mut self, a: &Term, b: &Term) -> bool {
        let a = self.walk(a);
        let b = self.walk(b);
        match (a, b) {
            (Term::Var(x), Term::Var(y)) if x == y => true,
            (Term::Var(x), other) | (other, Term::Var(x)) => {
                self.0.insert(x, other);
                true
            }
            (Term::Atom(x), Term::Atom(y)) => x == y,
            (Term::Int(x), Term::Int(y)) => x == y,
            (Term::Float(x), Term::Float(y)) => x == y,
            _ => false,
        }
    }
}

/// Clause database indexed by predicate name and arity
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    clauses: HashMap<Key, Vec<Clause>>,
    dynamic: HashSet<Key>,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a parsed rule source
    pub fn consult(&mut self, program: Program) {
        self.dynamic.extend(program.dynamic);
        for clause in program.clauses {
            self.add_clause(clause);
        }
    }

    /// Assert every fact as a ground clause about the subject
    pub fn assert_facts(&mut self, facts: &FactSet) {
        for fact in facts {
            self.add_clause(Clause::fact(Goal::from(fact)));
        }
    }

    pub fn add_clause(&mut self, clause: Clause) {
        let key = (clause.head.name.clone(), clause.head.arity());
        self.clauses.entry(key).or_default().push(clause);
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.values().map(Vec::len).sum()
    }

    /// Whether the goal has at least one proof
    pub fn prove(&self, goal: &Goal, max_depth: usize) -> Result<bool, InferenceError> {
        let next_var = goal
            .args
            .iter()
            .filter_map(|t| match t {
                Term::Var(i) => Some(i + 1),
                _ => None,
            })
            .max()
            .unwrap_or(0);

        let mut search = Search {
            kb: self,
            max_depth,
            next_var,
        };
        search.solve(&[Literal::Call(goal.clone())], &Bindings::default(), 0)
    }
}

struct Search<'a> {
    kb: &'a KnowledgeBase,
    max_depth: usize,
    next_var: usize,
}

impl Search<'_> {
    fn solve(
        &mut self,
        goals: &[Literal],
        bindings: &Bindings,
        depth: usize,
    ) -> Result<bool, InferenceError> {
        let Some((first, rest)) = goals.split_first() else {
            return Ok(true);
        };
        if depth > self.max_depth {
            return Err(InferenceError::DepthExceeded(self.max_depth));
        }

        match first {
            Literal::Call(goal) => self.call(goal, rest, bindings, depth),
            Literal::Not(goal) => {
                if self.solve(&[Literal::Call(goal.clone())], bindings, depth + 1)? {
                    Ok(false)
                } else {
                    self.solve(rest, bindings, depth + 1)
                }
            }
            Literal::Compare(op, left, right) => {
                if compare(*op, &bindings.walk(left), &bindings.walk(right))? {
                    self.solve(rest, bindings, depth + 1)
                } else {
                    Ok(false)
                }
            }
            Literal::Unify(left, right) => {
                let mut next = bindings.clone();
                if next.unify(left, right) {
                    self.solve(rest, &next, depth + 1)
                } else {
                    Ok(false)
                }
            }
            Literal::NotUnify(left, right) => {
                let mut trial = bindings.clone();
                if trial.unify(left, right) {
                    Ok(false)
                } else {
                    self.solve(rest, bindings, depth + 1)
                }
            }
        }
    }

    fn call(
        &mut self,
        goal: &Goal,
        rest: &[Literal],
        bindings: &Bindings,
        depth: usize,
    ) -> Result<bool, InferenceError> {
        let kb = self.kb;
        let key = (goal.name.clone(), goal.arity());
        let Some(candidates) = kb.clauses.get(&key) else {
            if kb.dynamic.contains(&key) {
                return Ok(false);
            }
            return Err(InferenceError::UnknownProcedure(goal.indicator()));
        };

        for clause in candidates {
            let offset = self.next_var;
            self.next_var += clause.var_count;

            let head = clause.head.offset(offset);
            let mut next = bindings.clone();
            let matched = head
                .args
                .iter()
                .zip(&goal.args)
                .all(|(h, g)| next.unify(h, g));
            if !matched {
                continue;
            }

            let mut goals: Vec<Literal> = clause.body.iter().map(|l| l.offset(offset)).collect();
            goals.extend_from_slice(rest);
            if self.solve(&goals, &next, depth + 1)? {
                return Ok(true);
            }
        }

        Ok(false)
    }
}

fn compare(op: CompareOp, left: &Term, right: &Term) -> Result<bool, InferenceError> {
    let expr = || format!("{} {} {}", left, op.symbol(), right);
    let ordering = match (left, right) {
        (Term::Var(_), _) | (_, Term::Var(_)) => {
            return Err(InferenceError::Instantiation(expr()));
        }
        (Term::Int(a), Term::Int(b)) => a.cmp(b),
        (Term::Int(a), Term::Float(b)) => cmp_float(*a as f64, *b, &expr)?,
        (Term::Float(a), Term::Int(b)) => cmp_float(*a, *b as f64, &expr)?,
        (Term::Float(a), Term::Float(b)) => cmp_float(*a, *b, &expr)?,
        _ => {
            return Err(InferenceError::Type(format!(
                "expected numbers in {}",
                expr()
            )));
        }
    };
    Ok(op.holds(ordering))
}

fn cmp_float(a: f64, b: f64, expr: &dyn Fn() -> String) -> Result<Ordering, InferenceError> {
    a.partial_cmp(&b)
        .ok_or_else(|| InferenceError::Type(format!("undefined comparison in {}", expr())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::parser::{parse_goal, parse_program};
    use casewise_domain::FactSet;

    fn kb(source: &str) -> KnowledgeBase {
        let mut kb = KnowledgeBase::new();
        kb.consult(parse_program(source).unwrap());
        kb
    }

    fn holds(kb: &KnowledgeBase, goal: &str) -> Result<bool, InferenceError> {
        kb.prove(&parse_goal(goal).unwrap(), DEFAULT_MAX_DEPTH)
    }

    #[test]
    fn test_conjunction() {
        let kb = kb("a(user). b(user). both(X) :- a(X), b(X). neither(X) :- a(X), c(X). c(bob).");
        assert_eq!(holds(&kb, "both(user)"), Ok(true));
        assert_eq!(holds(&kb, "neither(user)"), Ok(false));
    }

    #[test]
    fn test_backtracking_over_clauses() {
        let kb = kb(
            "n(user, 1). n(user, 5). big(X) :- n(X, N), N > 3.\n\
             either(X) :- n(X, 9).\neither(X) :- n(X, 5).",
        );
        assert_eq!(holds(&kb, "big(user)"), Ok(true));
        assert_eq!(holds(&kb, "either(user)"), Ok(true));
    }

    #[test]
    fn test_mixed_numeric_comparison() {
        let kb = kb("b(user, 0.08). drunk(X) :- b(X, B), B > 0.03. over(X) :- b(X, B), B >= 1.");
        assert_eq!(holds(&kb, "drunk(user)"), Ok(true));
        assert_eq!(holds(&kb, "over(user)"), Ok(false));
    }

    #[test]
    fn test_negation_as_failure() {
        let kb = kb(":- dynamic p/1.\nq(user).\nr(X) :- q(X), \\+ p(X).");
        assert_eq!(holds(&kb, "r(user)"), Ok(true));
    }

    #[test]
    fn test_not_unify() {
        let kb = kb("d(user, minor). deduct(X) :- d(X, D), D \\= no. none(X) :- d(X, D), D = no.");
        assert_eq!(holds(&kb, "deduct(user)"), Ok(true));
        assert_eq!(holds(&kb, "none(user)"), Ok(false));
    }

    #[test]
    fn test_dynamic_predicate_without_clauses_fails() {
        let kb = kb(":- dynamic rent_paid/1.\nok(X) :- rent_paid(X).");
        assert_eq!(holds(&kb, "ok(user)"), Ok(false));
    }

    #[test]
    fn test_unknown_procedure_is_a_fault() {
        let kb = kb("ok(X) :- missing(X).");
        assert_eq!(
            holds(&kb, "ok(user)"),
            Err(InferenceError::UnknownProcedure("missing/1".to_string()))
        );
        assert_eq!(
            holds(&kb, "nothing(user)"),
            Err(InferenceError::UnknownProcedure("nothing/1".to_string()))
        );
    }

    #[test]
    fn test_comparison_on_atom_is_type_error() {
        let kb = kb("s(user, fast). over(X) :- s(X, S), S > 10.");
        assert!(matches!(holds(&kb, "over(user)"), Err(InferenceError::Type(_))));
    }

    #[test]
    fn test_unbound_comparison_is_instantiation_error() {
        let kb = kb("odd(X) :- Y > 1, a(X, Y). a(user, 2).");
        assert!(matches!(
            holds(&kb, "odd(user)"),
            Err(InferenceError::Instantiation(_))
        ));
    }

    #[test]
    fn test_left_recursion_hits_depth_limit() {
        let kb = kb("loop(X) :- loop(X).");
        assert_eq!(
            holds(&kb, "loop(user)"),
            Err(InferenceError::DepthExceeded(DEFAULT_MAX_DEPTH))
        );
    }

    #[test]
    fn test_variables_are_renamed_apart() {
        let kb = kb("p(X, X). same(X) :- p(X, Y), p(Y, a).");
        assert_eq!(holds(&kb, "same(a)"), Ok(true));
        assert_eq!(holds(&kb, "same(b)"), Ok(false));
    }

    #[test]
    fn test_assert_facts() {
        let facts = FactSet::builder()
            .flag("rent_paid")
            .int("days_since_vacate", 40)
            .build();
        let mut kb = kb("late(X) :- days_since_vacate(X, D), D > 30.");
        kb.assert_facts(&facts);
        assert_eq!(kb.clause_count(), 3);
        assert_eq!(holds(&kb, "rent_paid(user)"), Ok(true));
        assert_eq!(holds(&kb, "late(user)"), Ok(true));
    }
}
