//! Rule source parser
//!
//! Parses the Prolog subset used by the domain rule files:
//!
//! ```text
//! % comment
//! :- dynamic rent_paid/1, notice_given/1.
//! eviction_invalid(X) :- rent_paid(X), notice_given(X).
//! eviction_allowed(X) :- rent_unpaid_months(X, M), M >= 2.
//! landlord_can_deduct(X) :- property_damage(X, D), D \= no.
//! consumer_complaint_possible(X) :- product_defective(X), \+ refund_allowed(X).
//! ```

use super::term::{Clause, CompareOp, Goal, Literal, Program, Term};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("line {line}: {message}")]
pub struct RuleParseError {
    pub line: usize,
    pub message: String,
}

impl RuleParseError {
    fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Tok {
    Atom(String),
    Var(String),
    Int(i64),
    Float(f64),
    LParen,
    RParen,
    Comma,
    Dot,
    Neck,
    Not,
    Slash,
    Compare(CompareOp),
    Unify,
    NotUnify,
}

impl Tok {
    fn describe(&self) -> String {
        match self {
            Tok::Atom(s) => format!("atom '{}'", s),
            Tok::Var(s) => format!("variable '{}'", s),
            Tok::Int(n) => format!("number {}", n),
            Tok::Float(n) => format!("number {}", n),
            Tok::LParen => "'('".to_string(),
            Tok::RParen => "')'".to_string(),
            Tok::Comma => "','".to_string(),
            Tok::Dot => "'.'".to_string(),
            Tok::Neck => "':-'".to_string(),
            Tok::Not => "'\\+'".to_string(),
            Tok::Slash => "'/'".to_string(),
            Tok::Compare(op) => format!("'{}'", op.symbol()),
            Tok::Unify => "'='".to_string(),
            Tok::NotUnify => "'\\='".to_string(),
        }
    }
}

fn tokenize(source: &str) -> Result<Vec<(Tok, usize)>, RuleParseError> {
    let chars: Vec<char> = source.chars().collect();
    let mut tokens = Vec::new();
    let mut line = 1;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        match c {
            '\n' => {
                line += 1;
                i += 1;
            }
            c if c.is_whitespace() => i += 1,
            '%' => {
                while i < chars.len() && chars[i] != '\n' {
                    i += 1;
                }
            }
            c if c.is_ascii_lowercase() => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                tokens.push((Tok::Atom(chars[start..i].iter().collect()), line));
            }
            c if c.is_ascii_uppercase() || c == '_' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                tokens.push((Tok::Var(chars[start..i].iter().collect()), line));
            }
            c if c.is_ascii_digit() || (c == '-' && next.is_some_and(|n| n.is_ascii_digit())) => {
                let (tok, end) = lex_number(&chars, i, line)?;
                tokens.push((tok, line));
                i = end;
            }
            '\'' => {
                let (atom, end, lines) = lex_quoted(&chars, i, line)?;
                tokens.push((Tok::Atom(atom), line));
                line += lines;
                i = end;
            }
            '(' => {
                tokens.push((Tok::LParen, line));
                i += 1;
            }
            ')' => {
                tokens.push((Tok::RParen, line));
                i += 1;
            }
            ',' => {
                tokens.push((Tok::Comma, line));
                i += 1;
            }
            '.' => {
                tokens.push((Tok::Dot, line));
                i += 1;
            }
            '/' => {
                tokens.push((Tok::Slash, line));
                i += 1;
            }
            ':' if next == Some('-') => {
                tokens.push((Tok::Neck, line));
                i += 2;
            }
            '\\' if next == Some('+') => {
                tokens.push((Tok::Not, line));
                i += 2;
            }
            '\\' if next == Some('=') => {
                tokens.push((Tok::NotUnify, line));
                i += 2;
            }
            '=' => {
                let rest: String = chars[i..chars.len().min(i + 3)].iter().collect();
                if rest.starts_with("=:=") {
                    tokens.push((Tok::Compare(CompareOp::Eq), line));
                    i += 3;
                } else if rest.starts_with("=\\=") {
                    tokens.push((Tok::Compare(CompareOp::Ne), line));
                    i += 3;
                } else if rest.starts_with("=<") {
                    tokens.push((Tok::Compare(CompareOp::Le), line));
                    i += 2;
                } else {
                    tokens.push((Tok::Unify, line));
                    i += 1;
                }
            }
            '<' => {
                tokens.push((Tok::Compare(CompareOp::Lt), line));
                i += 1;
            }
            '>' if next == Some('=') => {
                tokens.push((Tok::Compare(CompareOp::Ge), line));
                i += 2;
            }
            '>' => {
                tokens.push((Tok::Compare(CompareOp::Gt), line));
                i += 1;
            }
            other => {
                return Err(RuleParseError::new(
                    line,
                    format!("unexpected character '{}'", other),
                ));
            }
        }
    }

    Ok(tokens)
}

fn lex_number(chars: &[char], start: usize, line: usize) -> Result<(Tok, usize), RuleParseError> {
    let mut i = start;
    if chars[i] == '-' {
        i += 1;
    }
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }

    let mut is_float = false;
    // A '.' only belongs to the number when a digit follows; otherwise it ends the clause
    if i + 1 < chars.len() && chars[i] == '.' && chars[i + 1].is_ascii_digit() {
        is_float = true;
        i += 1;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
    }
    if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
        let mut j = i + 1;
        if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
            j += 1;
        }
        if j < chars.len() && chars[j].is_ascii_digit() {
            is_float = true;
            i = j;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
        }
    }

    let text: String = chars[start..i].iter().collect();
    let tok = if is_float {
        text.parse::<f64>()
            .map(Tok::Float)
            .map_err(|_| RuleParseError::new(line, format!("invalid number '{}'", text)))?
    } else {
        text.parse::<i64>()
            .map(Tok::Int)
            .map_err(|_| RuleParseError::new(line, format!("invalid number '{}'", text)))?
    };
    Ok((tok, i))
}

/// Returns the atom text, the index after the closing quote and the number
/// of newlines consumed.
fn lex_quoted(
    chars: &[char],
    start: usize,
    line: usize,
) -> Result<(String, usize, usize), RuleParseError> {
    let mut out = String::new();
    let mut lines = 0;
    let mut i = start + 1;

    while i < chars.len() {
        match chars[i] {
            '\\' if i + 1 < chars.len() => {
                out.push(chars[i + 1]);
                i += 2;
            }
            '\'' if chars.get(i + 1) == Some(&'\'') => {
                out.push('\'');
                i += 2;
            }
            '\'' => return Ok((out, i + 1, lines)),
            c => {
                if c == '\n' {
                    lines += 1;
                }
                out.push(c);
                i += 1;
            }
        }
    }

    Err(RuleParseError::new(line, "unterminated quoted atom"))
}

struct Parser {
    tokens: Vec<(Tok, usize)>,
    pos: usize,
    vars: HashMap<String, usize>,
    var_count: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Tok> {
        self.tokens.get(self.pos).map(|(t, _)| t)
    }

    fn peek_at(&self, offset: usize) -> Option<&Tok> {
        self.tokens.get(self.pos + offset).map(|(t, _)| t)
    }

    fn line(&self) -> usize {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map(|(_, l)| *l)
            .unwrap_or(1)
    }

    fn next(&mut self) -> Result<Tok, RuleParseError> {
        let line = self.line();
        let tok = self
            .tokens
            .get(self.pos)
            .map(|(t, _)| t.clone())
            .ok_or_else(|| RuleParseError::new(line, "unexpected end of input"))?;
        self.pos += 1;
        Ok(tok)
    }

    fn expect(&mut self, expected: Tok) -> Result<(), RuleParseError> {
        let line = self.line();
        let tok = self.next()?;
        if tok == expected {
            Ok(())
        } else {
            Err(RuleParseError::new(
                line,
                format!("expected {}, found {}", expected.describe(), tok.describe()),
            ))
        }
    }

    fn program(&mut self) -> Result<Program, RuleParseError> {
        let mut program = Program::default();
        while self.peek().is_some() {
            if self.peek() == Some(&Tok::Neck) {
                self.pos += 1;
                program.dynamic.extend(self.directive()?);
            } else {
                program.clauses.push(self.clause()?);
            }
        }
        Ok(program)
    }

    fn directive(&mut self) -> Result<Vec<(String, usize)>, RuleParseError> {
        let line = self.line();
        match self.next()? {
            Tok::Atom(name) if name == "dynamic" => {}
            other => {
                return Err(RuleParseError::new(
                    line,
                    format!("unsupported directive starting with {}", other.describe()),
                ));
            }
        }

        let mut specs = Vec::new();
        loop {
            let line = self.line();
            let name = match self.next()? {
                Tok::Atom(name) => name,
                other => {
                    return Err(RuleParseError::new(
                        line,
                        format!("expected predicate name, found {}", other.describe()),
                    ));
                }
            };
            self.expect(Tok::Slash)?;
            let line = self.line();
            let arity = match self.next()? {
                Tok::Int(n) if n >= 0 => n as usize,
                other => {
                    return Err(RuleParseError::new(
                        line,
                        format!("expected arity, found {}", other.describe()),
                    ));
                }
            };
            specs.push((name, arity));

            match self.next()? {
                Tok::Comma => continue,
                Tok::Dot => return Ok(specs),
                other => {
                    return Err(RuleParseError::new(
                        self.line(),
                        format!("expected ',' or '.', found {}", other.describe()),
                    ));
                }
            }
        }
    }

    fn clause(&mut self) -> Result<Clause, RuleParseError> {
        self.vars.clear();
        self.var_count = 0;

        let head = self.goal()?;
        let mut body = Vec::new();

        let line = self.line();
        match self.next()? {
            Tok::Dot => {}
            Tok::Neck => {
                loop {
                    body.push(self.literal()?);
                    let line = self.line();
                    match self.next()? {
                        Tok::Comma => continue,
                        Tok::Dot => break,
                        other => {
                            return Err(RuleParseError::new(
                                line,
                                format!("expected ',' or '.', found {}", other.describe()),
                            ));
                        }
                    }
                }
            }
            other => {
                return Err(RuleParseError::new(
                    line,
                    format!("expected ':-' or '.', found {}", other.describe()),
                ));
            }
        }

        Ok(Clause {
            head,
            body,
            var_count: self.var_count,
        })
    }

    fn goal(&mut self) -> Result<Goal, RuleParseError> {
        let line = self.line();
        let name = match self.next()? {
            Tok::Atom(name) => name,
            other => {
                return Err(RuleParseError::new(
                    line,
                    format!("expected predicate name, found {}", other.describe()),
                ));
            }
        };

        let mut args = Vec::new();
        if self.peek() == Some(&Tok::LParen) {
            self.pos += 1;
            loop {
                args.push(self.term()?);
                let line = self.line();
                match self.next()? {
                    Tok::Comma => continue,
                    Tok::RParen => break,
                    other => {
                        return Err(RuleParseError::new(
                            line,
                            format!("expected ',' or ')', found {}", other.describe()),
                        ));
                    }
                }
            }
        }

        Ok(Goal::new(name, args))
    }

    fn term(&mut self) -> Result<Term, RuleParseError> {
        let line = self.line();
        if matches!(self.peek(), Some(Tok::Atom(_))) && self.peek_at(1) == Some(&Tok::LParen) {
            return Err(RuleParseError::new(
                line,
                "nested compound terms are not supported",
            ));
        }

        match self.next()? {
            Tok::Atom(name) => Ok(Term::Atom(name)),
            Tok::Int(n) => Ok(Term::Int(n)),
            Tok::Float(n) => Ok(Term::Float(n)),
            Tok::Var(name) => Ok(Term::Var(self.variable(&name))),
            other => Err(RuleParseError::new(
                line,
                format!("expected a term, found {}", other.describe()),
            )),
        }
    }

    fn variable(&mut self, name: &str) -> usize {
        // Every '_' is a distinct variable
        if name == "_" {
            let index = self.var_count;
            self.var_count += 1;
            return index;
        }
        if let Some(&index) = self.vars.get(name) {
            return index;
        }
        let index = self.var_count;
        self.vars.insert(name.to_string(), index);
        self.var_count += 1;
        index
    }

    fn literal(&mut self) -> Result<Literal, RuleParseError> {
        if self.peek() == Some(&Tok::Not) {
            self.pos += 1;
            return Ok(Literal::Not(self.goal()?));
        }

        if matches!(self.peek(), Some(Tok::Atom(_))) && self.peek_at(1) == Some(&Tok::LParen) {
            return Ok(Literal::Call(self.goal()?));
        }

        let line = self.line();
        let left = self.term()?;
        match self.peek().cloned() {
            Some(Tok::Compare(op)) => {
                self.pos += 1;
                Ok(Literal::Compare(op, left, self.term()?))
            }
            Some(Tok::Unify) => {
                self.pos += 1;
                Ok(Literal::Unify(left, self.term()?))
            }
            Some(Tok::NotUnify) => {
                self.pos += 1;
                Ok(Literal::NotUnify(left, self.term()?))
            }
            _ => match left {
                Term::Atom(name) => Ok(Literal::Call(Goal::new(name, Vec::new()))),
                other => Err(RuleParseError::new(
                    line,
                    format!("'{}' is not callable", other),
                )),
            },
        }
    }
}

/// Parse a complete rule source
pub fn parse_program(source: &str) -> Result<Program, RuleParseError> {
    let tokens = tokenize(source)?;
    Parser {
        tokens,
        pos: 0,
        vars: HashMap::new(),
        var_count: 0,
    }
    .program()
}

/// Parse a single goal such as `eviction_invalid(user)`
pub fn parse_goal(source: &str) -> Result<Goal, RuleParseError> {
    let tokens = tokenize(source)?;
    let mut parser = Parser {
        tokens,
        pos: 0,
        vars: HashMap::new(),
        var_count: 0,
    };
    let goal = parser.goal()?;
    if parser.peek() == Some(&Tok::Dot) {
        parser.pos += 1;
    }
    if let Some(tok) = parser.peek() {
        return Err(RuleParseError::new(
            parser.line(),
            format!("unexpected {} after goal", tok.describe()),
        ));
    }
    Ok(goal)
}
