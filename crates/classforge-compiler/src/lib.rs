//! Default fragment compiler for classforge.
//!
//! [`FragmentParser`] implements [`FragmentCompiler`] for the fragment
//! grammar: C-style field and method declarations over `int`/`bool`
//! values:
//!
//! ```
//! use classforge_compiler::FragmentParser;
//! use classforge_core::{ClassDefinition, FragmentCompiler};
//!
//! let compiler = FragmentParser::new();
//! let owner = ClassDefinition::draft("Point");
//! let field = compiler.compile_field(&owner, "int x = 1;").unwrap();
//! assert_eq!(field.name, "x");
//!
//! let method = compiler
//!     .compile_method(&owner, "int getSum() { return x + y; }")
//!     .unwrap();
//! assert_eq!(method.name, "getSum");
//! ```

mod context;
mod cursor;
mod lexer;
mod parser;
mod token;

pub use context::{IMPLICIT_IMPORT, ResolutionContext};
pub use lexer::{Lexer, tokenize};
pub use parser::{parse_field_fragment, parse_method_fragment};
pub use token::{Token, TokenKind, lookup_keyword};

use classforge_core::{
    ClassDefinition, FieldMember, FragmentCompiler, MethodMember, SyntaxError,
};

/// The default [`FragmentCompiler`]: a lexer + Pratt parser over the
/// fragment grammar, plus the process-wide resolution context.
#[derive(Debug, Default)]
pub struct FragmentParser {
    context: ResolutionContext,
}

impl FragmentParser {
    /// Create a fragment parser with an empty resolution context.
    pub fn new() -> Self {
        Self::default()
    }

    /// The resolution context (imports and lookup sources).
    pub fn context(&self) -> &ResolutionContext {
        &self.context
    }
}

impl FragmentCompiler for FragmentParser {
    fn compile_field(
        &self,
        _owner: &ClassDefinition,
        source: &str,
    ) -> Result<FieldMember, SyntaxError> {
        parse_field_fragment(source)
    }

    fn compile_method(
        &self,
        _owner: &ClassDefinition,
        source: &str,
    ) -> Result<MethodMember, SyntaxError> {
        parse_method_fragment(source)
    }

    fn add_lookup_source(&mut self, token: &str) -> Result<(), SyntaxError> {
        self.context.add_lookup_source(token)
    }

    fn declare_import(&mut self, namespace: &str) -> Result<(), SyntaxError> {
        self.context.declare_import(namespace)
    }
}
