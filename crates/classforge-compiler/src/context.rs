//! Process-wide resolution context for fragment compilation.
//!
//! Mirrors the external-symbol side channel of the registry API: imported
//! namespaces and external lookup sources are recorded here, per compiler,
//! not per class definition.

use rustc_hash::FxHashSet;

use classforge_core::SyntaxError;

/// The namespace that is always available without being imported.
///
/// Declaring it is a no-op rather than a duplicate-registration error.
pub const IMPLICIT_IMPORT: &str = "core";

/// Imported namespaces and registered lookup sources.
#[derive(Debug, Default)]
pub struct ResolutionContext {
    imports: FxHashSet<String>,
    lookup_sources: FxHashSet<String>,
}

impl ResolutionContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an imported namespace.
    ///
    /// The implicit namespace is silently accepted; any other namespace
    /// may be declared only once.
    pub fn declare_import(&mut self, namespace: &str) -> Result<(), SyntaxError> {
        let namespace = namespace.trim();
        if namespace.eq_ignore_ascii_case(IMPLICIT_IMPORT) {
            return Ok(());
        }
        if !self.imports.insert(namespace.to_string()) {
            return Err(SyntaxError::DuplicateImport(namespace.to_string()));
        }
        Ok(())
    }

    /// Register an external lookup source token.
    pub fn add_lookup_source(&mut self, token: &str) -> Result<(), SyntaxError> {
        let token = token.trim();
        if !self.lookup_sources.insert(token.to_string()) {
            return Err(SyntaxError::DuplicateLookupSource(token.to_string()));
        }
        Ok(())
    }

    /// Whether a namespace is visible (imported or implicit).
    pub fn is_imported(&self, namespace: &str) -> bool {
        let namespace = namespace.trim();
        namespace.eq_ignore_ascii_case(IMPLICIT_IMPORT) || self.imports.contains(namespace)
    }

    /// Whether a lookup source token has been registered.
    pub fn has_lookup_source(&self, token: &str) -> bool {
        self.lookup_sources.contains(token.trim())
    }

    /// Number of explicitly imported namespaces.
    pub fn import_count(&self) -> usize {
        self.imports.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn implicit_namespace_is_a_noop() {
        let mut ctx = ResolutionContext::new();
        ctx.declare_import(IMPLICIT_IMPORT).unwrap();
        ctx.declare_import(" CORE ").unwrap();
        assert_eq!(ctx.import_count(), 0);
        assert!(ctx.is_imported("core"));
    }

    #[test]
    fn duplicate_import_rejected() {
        let mut ctx = ResolutionContext::new();
        ctx.declare_import("geom").unwrap();
        assert!(ctx.is_imported("geom"));
        assert_eq!(
            ctx.declare_import(" geom ").unwrap_err(),
            SyntaxError::DuplicateImport("geom".to_string())
        );
    }

    #[test]
    fn duplicate_lookup_source_rejected() {
        let mut ctx = ResolutionContext::new();
        ctx.add_lookup_source("host-symbols").unwrap();
        assert!(ctx.has_lookup_source("host-symbols"));
        assert_eq!(
            ctx.add_lookup_source("host-symbols").unwrap_err(),
            SyntaxError::DuplicateLookupSource("host-symbols".to_string())
        );
    }
}
