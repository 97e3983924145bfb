//! In-process rule engine
//!
//! A small Horn-clause interpreter for the Prolog subset the domain rule
//! files are written in.

pub mod loader;
pub mod parser;
pub mod solver;
pub mod term;

pub use loader::{BundledRuleLoader, DirectoryRuleLoader, RuleLoadError, RuleSourceLoader};
pub use parser::{RuleParseError, parse_goal, parse_program};
pub use solver::{DEFAULT_MAX_DEPTH, InferenceError, KnowledgeBase};
pub use term::{Clause, CompareOp, Goal, Literal, Program, Term};
