//! Rule language syntax tree
//!
//! Terms are flat: atoms, numbers and variables. Compound terms only appear
//! as goals (predicate calls), which is all the domain rule files need.

use casewise_domain::{Fact, FactValue, SUBJECT};

/// A flat term
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Atom(String),
    Int(i64),
    Float(f64),
    /// Clause-local variable index; renamed apart at resolution time
    Var(usize),
}

impl Term {
    pub fn atom(name: impl Into<String>) -> Self {
        Term::Atom(name.into())
    }

    /// Shift variable indices by `offset` (renaming a clause apart)
    pub(crate) fn offset(&self, offset: usize) -> Term {
        match self {
            Term::Var(i) => Term::Var(i + offset),
            other => other.clone(),
        }
    }
}

impl From<&FactValue> for Term {
    fn from(value: &FactValue) -> Self {
        match value {
            FactValue::Atom(s) => Term::Atom(s.clone()),
            FactValue::Int(n) => Term::Int(*n),
            FactValue::Float(n) => Term::Float(*n),
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Atom(s) => write!(f, "{}", s),
            Term::Int(n) => write!(f, "{}", n),
            Term::Float(n) => write!(f, "{:?}", n),
            Term::Var(i) => write!(f, "_G{}", i),
        }
    }
}

/// A predicate call: `name(args...)`
#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    pub name: String,
    pub args: Vec<Term>,
}

impl Goal {
    pub fn new(name: impl Into<String>, args: Vec<Term>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    pub fn arity(&self) -> usize {
        self.args.len()
    }

    /// `name/arity` indicator used in error messages
    pub fn indicator(&self) -> String {
        format!("{}/{}", self.name, self.args.len())
    }

    pub(crate) fn offset(&self, offset: usize) -> Goal {
        Goal {
            name: self.name.clone(),
            args: self.args.iter().map(|t| t.offset(offset)).collect(),
        }
    }
}

impl From<&Fact> for Goal {
    fn from(fact: &Fact) -> Self {
        let mut args = Vec::with_capacity(fact.arity());
        args.push(Term::atom(SUBJECT));
        args.extend(fact.args.iter().map(Term::from));
        Goal::new(fact.predicate.clone(), args)
    }
}

/// Arithmetic comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Ne,
}

impl CompareOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Lt => "<",
            CompareOp::Gt => ">",
            CompareOp::Le => "=<",
            CompareOp::Ge => ">=",
            CompareOp::Eq => "=:=",
            CompareOp::Ne => "=\\=",
        }
    }

    pub(crate) fn holds(&self, ordering: std::cmp::Ordering) -> bool {
        use std::cmp::Ordering::*;
        match self {
            CompareOp::Lt => ordering == Less,
            CompareOp::Gt => ordering == Greater,
            CompareOp::Le => ordering != Greater,
            CompareOp::Ge => ordering != Less,
            CompareOp::Eq => ordering == Equal,
            CompareOp::Ne => ordering != Equal,
        }
    }
}

/// One element of a clause body
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Call(Goal),
    /// Negation as failure: `\+ goal`
    Not(Goal),
    Compare(CompareOp, Term, Term),
    Unify(Term, Term),
    NotUnify(Term, Term),
}

impl Literal {
    pub(crate) fn offset(&self, offset: usize) -> Literal {
        match self {
            Literal::Call(g) => Literal::Call(g.offset(offset)),
            Literal::Not(g) => Literal::Not(g.offset(offset)),
            Literal::Compare(op, a, b) => Literal::Compare(*op, a.offset(offset), b.offset(offset)),
            Literal::Unify(a, b) => Literal::Unify(a.offset(offset), b.offset(offset)),
            Literal::NotUnify(a, b) => Literal::NotUnify(a.offset(offset), b.offset(offset)),
        }
    }
}

/// `head :- body.` (a fact has an empty body)
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub head: Goal,
    pub body: Vec<Literal>,
    /// Number of distinct variables in the clause
    pub var_count: usize,
}

impl Clause {
    /// Ground clause with no body
    pub fn fact(head: Goal) -> Self {
        Self {
            head,
            body: Vec::new(),
            var_count: 0,
        }
    }
}

/// A parsed rule source
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub clauses: Vec<Clause>,
    /// `name/arity` pairs declared with `:- dynamic`
    pub dynamic: Vec<(String, usize)>,
}
