//! Export surface - the symbols this distribution commits to making public.
//!
//! The surface is declarative. It records which names the package
//! surfaces and which deferred module is expected to define each one,
//! without loading or resolving anything. A consumer imports a symbol
//! explicitly from its defining module when it is needed; listing and
//! lookup here never trigger that import.
//!
//! Key principle: declaration is cheap, resolution is deferred.

use serde::Serialize;
use thiserror::Error;

/// What kind of item a declared symbol is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    /// A type defined in a deferred module
    Type,

    /// A free function defined in a deferred module
    Function,

    /// A metadata marker backed by the record itself
    Metadata,
}

/// A single declared public symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PublicSymbol {
    /// Exported name
    pub name: &'static str,

    /// Item kind
    pub kind: SymbolKind,

    /// Deferred module expected to define the symbol.
    /// `None` for metadata markers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<&'static str>,
}

impl PublicSymbol {
    /// Declare a type surfaced from a deferred module.
    pub const fn ty(name: &'static str, module: &'static str) -> Self {
        PublicSymbol {
            name,
            kind: SymbolKind::Type,
            module: Some(module),
        }
    }

    /// Declare a function surfaced from a deferred module.
    pub const fn function(name: &'static str, module: &'static str) -> Self {
        PublicSymbol {
            name,
            kind: SymbolKind::Function,
            module: Some(module),
        }
    }

    /// Declare a metadata marker.
    pub const fn metadata(name: &'static str) -> Self {
        PublicSymbol {
            name,
            kind: SymbolKind::Metadata,
            module: None,
        }
    }

    /// Whether resolution of this symbol is deferred to a collaborator module.
    pub const fn is_deferred(&self) -> bool {
        self.module.is_some()
    }

    /// Render the explicit-import form for a deferred symbol.
    ///
    /// Metadata markers live on the record and have no import form.
    pub fn import_hint(&self) -> Option<String> {
        self.module
            .map(|module| format!("use opencowork::{}::{};", module, self.name))
    }
}

/// Declared public symbols, in surface order.
pub const PUBLIC_SYMBOLS: [PublicSymbol; 7] = [
    PublicSymbol::ty("OpenCoworkClient", "client"),
    PublicSymbol::function("create_client", "client"),
    PublicSymbol::ty("OpenCoworkMain", "entry"),
    PublicSymbol::metadata("version"),
    PublicSymbol::metadata("author"),
    PublicSymbol::metadata("email"),
    PublicSymbol::metadata("description"),
];

/// Problems detected in the declared surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// The same name is declared more than once.
    #[error("duplicate public symbol `{name}`")]
    DuplicateSymbol { name: &'static str },

    /// A symbol was declared with an empty name.
    #[error("public symbol with an empty name")]
    EmptyName,

    /// A type or function symbol names no defining module.
    #[error("symbol `{name}` has no defining module")]
    Unanchored { name: &'static str },
}

/// The declared export surface of the distribution.
#[derive(Debug, Clone, Copy)]
pub struct ExportSurface {
    symbols: &'static [PublicSymbol],
}

impl ExportSurface {
    /// The surface declared by this distribution.
    pub const fn declared() -> Self {
        ExportSurface::with_symbols(&PUBLIC_SYMBOLS)
    }

    /// A surface over an explicit symbol set.
    pub const fn with_symbols(symbols: &'static [PublicSymbol]) -> Self {
        ExportSurface { symbols }
    }

    /// Declared symbols, in order.
    pub fn iter(&self) -> impl Iterator<Item = &'static PublicSymbol> {
        self.symbols.iter()
    }

    /// Declared names, in order.
    pub fn names(&self) -> Vec<&'static str> {
        self.symbols.iter().map(|s| s.name).collect()
    }

    /// Number of declared symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the surface declares nothing.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Look up a declared symbol by name.
    ///
    /// This is a lookup in the declaration only; whether the name actually
    /// resolves in its deferred module is not checked here.
    pub fn get(&self, name: &str) -> Option<&'static PublicSymbol> {
        self.symbols.iter().find(|s| s.name == name)
    }

    /// Check whether a name is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Symbols whose definitions are deferred to collaborator modules.
    pub fn deferred(&self) -> impl Iterator<Item = &'static PublicSymbol> {
        self.symbols.iter().filter(|s| s.is_deferred())
    }

    /// Metadata markers backed by the record.
    pub fn markers(&self) -> impl Iterator<Item = &'static PublicSymbol> {
        self.symbols
            .iter()
            .filter(|s| s.kind == SymbolKind::Metadata)
    }

    /// Validate the surface invariants.
    ///
    /// Listing and lookup never fail, so this is the one place drift in
    /// the manifest becomes an error: duplicate names, empty names, and
    /// type/function symbols with no module to resolve from.
    pub fn validate(&self) -> Result<(), SurfaceError> {
        for (i, sym) in self.symbols.iter().enumerate() {
            if sym.name.is_empty() {
                return Err(SurfaceError::EmptyName);
            }

            if self.symbols[..i].iter().any(|s| s.name == sym.name) {
                return Err(SurfaceError::DuplicateSymbol { name: sym.name });
            }

            match sym.kind {
                SymbolKind::Metadata => {}
                SymbolKind::Type | SymbolKind::Function => {
                    if sym.module.map_or(true, str::is_empty) {
                        return Err(SurfaceError::Unanchored { name: sym.name });
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_names_in_order() {
        let surface = ExportSurface::declared();
        assert_eq!(
            surface.names(),
            vec![
                "OpenCoworkClient",
                "create_client",
                "OpenCoworkMain",
                "version",
                "author",
                "email",
                "description",
            ]
        );
    }

    #[test]
    fn test_declared_surface_is_valid() {
        assert_eq!(ExportSurface::declared().validate(), Ok(()));
    }

    #[test]
    fn test_lookup() {
        let surface = ExportSurface::declared();

        let client = surface.get("OpenCoworkClient").unwrap();
        assert_eq!(client.kind, SymbolKind::Type);
        assert_eq!(client.module, Some("client"));

        assert!(surface.contains("create_client"));
        assert!(!surface.contains("ToolExecutor"));
        assert!(surface.get("load_config").is_none());
    }

    #[test]
    fn test_deferred_and_marker_split() {
        let surface = ExportSurface::declared();
        assert_eq!(surface.deferred().count(), 3);
        assert_eq!(surface.markers().count(), 4);
        assert_eq!(surface.len(), 7);
        assert!(!surface.is_empty());
    }

    #[test]
    fn test_import_hints() {
        let surface = ExportSurface::declared();

        let client = surface.get("OpenCoworkClient").unwrap();
        assert_eq!(
            client.import_hint().as_deref(),
            Some("use opencowork::client::OpenCoworkClient;")
        );

        let main = surface.get("OpenCoworkMain").unwrap();
        assert_eq!(
            main.import_hint().as_deref(),
            Some("use opencowork::entry::OpenCoworkMain;")
        );

        let marker = surface.get("version").unwrap();
        assert_eq!(marker.import_hint(), None);
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        const DUPED: [PublicSymbol; 2] = [
            PublicSymbol::ty("OpenCoworkClient", "client"),
            PublicSymbol::ty("OpenCoworkClient", "client"),
        ];
        let surface = ExportSurface::with_symbols(&DUPED);
        assert_eq!(
            surface.validate(),
            Err(SurfaceError::DuplicateSymbol {
                name: "OpenCoworkClient"
            })
        );
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        const UNNAMED: [PublicSymbol; 1] = [PublicSymbol::metadata("")];
        let surface = ExportSurface::with_symbols(&UNNAMED);
        assert_eq!(surface.validate(), Err(SurfaceError::EmptyName));
    }

    #[test]
    fn test_validate_rejects_unanchored_symbol() {
        const FLOATING: [PublicSymbol; 1] = [PublicSymbol::ty("OpenCoworkClient", "")];
        let surface = ExportSurface::with_symbols(&FLOATING);
        assert_eq!(
            surface.validate(),
            Err(SurfaceError::Unanchored {
                name: "OpenCoworkClient"
            })
        );
    }
}
