//! Symbol kinds and tree nodes.

use smol_str::SmolStr;

use crate::base::Span;

/// Kind of a document symbol.
///
/// Mirrors the LSP symbol kind set so provider shims can pass kinds
/// through unchanged. Only [`SymbolKind::is_documentable`] matters to the
/// docstring resolver; every other kind is walked but never scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    File,
    Module,
    Namespace,
    Package,
    Class,
    Method,
    Property,
    Field,
    Constructor,
    Enum,
    Interface,
    Function,
    Variable,
    Constant,
    String,
    Number,
    Boolean,
    Array,
    Object,
    Key,
    Null,
    EnumMember,
    Struct,
    Event,
    Operator,
    TypeParameter,
}

impl SymbolKind {
    /// Whether a symbol of this kind can carry a docstring in its own body.
    ///
    /// Children of non-documentable symbols are still visited; this only
    /// gates scanning the symbol's own body.
    pub const fn is_documentable(self) -> bool {
        matches!(
            self,
            SymbolKind::Function | SymbolKind::Method | SymbolKind::Class
        )
    }

    /// Convert to the LSP symbol kind number.
    pub const fn to_lsp_index(self) -> u32 {
        match self {
            SymbolKind::File => 1,
            SymbolKind::Module => 2,
            SymbolKind::Namespace => 3,
            SymbolKind::Package => 4,
            SymbolKind::Class => 5,
            SymbolKind::Method => 6,
            SymbolKind::Property => 7,
            SymbolKind::Field => 8,
            SymbolKind::Constructor => 9,
            SymbolKind::Enum => 10,
            SymbolKind::Interface => 11,
            SymbolKind::Function => 12,
            SymbolKind::Variable => 13,
            SymbolKind::Constant => 14,
            SymbolKind::String => 15,
            SymbolKind::Number => 16,
            SymbolKind::Boolean => 17,
            SymbolKind::Array => 18,
            SymbolKind::Object => 19,
            SymbolKind::Key => 20,
            SymbolKind::Null => 21,
            SymbolKind::EnumMember => 22,
            SymbolKind::Struct => 23,
            SymbolKind::Event => 24,
            SymbolKind::Operator => 25,
            SymbolKind::TypeParameter => 26,
        }
    }

    /// Convert from the LSP symbol kind number.
    pub const fn from_lsp_index(index: u32) -> Option<Self> {
        Some(match index {
            1 => SymbolKind::File,
            2 => SymbolKind::Module,
            3 => SymbolKind::Namespace,
            4 => SymbolKind::Package,
            5 => SymbolKind::Class,
            6 => SymbolKind::Method,
            7 => SymbolKind::Property,
            8 => SymbolKind::Field,
            9 => SymbolKind::Constructor,
            10 => SymbolKind::Enum,
            11 => SymbolKind::Interface,
            12 => SymbolKind::Function,
            13 => SymbolKind::Variable,
            14 => SymbolKind::Constant,
            15 => SymbolKind::String,
            16 => SymbolKind::Number,
            17 => SymbolKind::Boolean,
            18 => SymbolKind::Array,
            19 => SymbolKind::Object,
            20 => SymbolKind::Key,
            21 => SymbolKind::Null,
            22 => SymbolKind::EnumMember,
            23 => SymbolKind::Struct,
            24 => SymbolKind::Event,
            25 => SymbolKind::Operator,
            26 => SymbolKind::TypeParameter,
            _ => return None,
        })
    }
}

/// One node of a document's symbol outline.
///
/// The span covers the symbol's full extent, signature and body included.
/// The tree is borrowed read-only for the duration of one resolution call;
/// hosts may discard and rebuild it on every document change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSymbol {
    /// The symbol's name as reported by the provider.
    pub name: SmolStr,
    /// What kind of declaration this is.
    pub kind: SymbolKind,
    /// Full extent of the symbol in the document.
    pub span: Span,
    /// Nested symbols, in document order.
    pub children: Vec<DocumentSymbol>,
}

impl DocumentSymbol {
    /// Create a leaf symbol.
    pub fn new(name: impl Into<SmolStr>, kind: SymbolKind, span: Span) -> Self {
        Self {
            name: name.into(),
            kind,
            span,
            children: Vec::new(),
        }
    }

    /// Attach children, in document order.
    pub fn with_children(mut self, children: Vec<DocumentSymbol>) -> Self {
        self.children = children;
        self
    }
}
