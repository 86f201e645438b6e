//! Keyword recognition
//!
//! C++03 keyword set. Spellings added by C++11 (`decltype`, `nullptr`,
//! `static_assert`, ...) lex as identifiers. The alternative operator
//! spellings (`and`, `bitor`, ...) are operators, not keywords, see
//! [`is_alternative_operator`].

use std::fmt;

macro_rules! keywords {
    ($($variant:ident => $text:literal,)*) => {
        /// C++ keyword
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Keyword {
            $($variant,)*
        }

        impl Keyword {
            /// All keywords, in alphabetical order of their spelling
            pub const ALL: &'static [Keyword] = &[$(Keyword::$variant,)*];

            /// Look a spelling up in the keyword table
            pub fn lookup(s: &str) -> Option<Keyword> {
                match s {
                    $($text => Some(Keyword::$variant),)*
                    _ => None,
                }
            }

            /// Source spelling
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Keyword::$variant => $text,)*
                }
            }
        }
    };
}

keywords! {
    Asm => "asm",
    Auto => "auto",
    Bool => "bool",
    Break => "break",
    Case => "case",
    Catch => "catch",
    Char => "char",
    Class => "class",
    Const => "const",
    ConstCast => "const_cast",
    Continue => "continue",
    Default => "default",
    Delete => "delete",
    Do => "do",
    Double => "double",
    DynamicCast => "dynamic_cast",
    Else => "else",
    Enum => "enum",
    Explicit => "explicit",
    Export => "export",
    Extern => "extern",
    False => "false",
    Float => "float",
    For => "for",
    Friend => "friend",
    Goto => "goto",
    If => "if",
    Inline => "inline",
    Int => "int",
    Long => "long",
    Mutable => "mutable",
    Namespace => "namespace",
    New => "new",
    Operator => "operator",
    Private => "private",
    Protected => "protected",
    Public => "public",
    Register => "register",
    ReinterpretCast => "reinterpret_cast",
    Return => "return",
    Short => "short",
    Signed => "signed",
    Sizeof => "sizeof",
    Static => "static",
    StaticCast => "static_cast",
    Struct => "struct",
    Switch => "switch",
    Template => "template",
    This => "this",
    Throw => "throw",
    True => "true",
    Try => "try",
    Typedef => "typedef",
    Typeid => "typeid",
    Typename => "typename",
    Union => "union",
    Unsigned => "unsigned",
    Using => "using",
    Virtual => "virtual",
    Void => "void",
    Volatile => "volatile",
    WcharT => "wchar_t",
    While => "while",
}

/// How a line starting with a given keyword is classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadingKeywordRule {
    /// Setup command only when a `typedef` follows later on the line
    SetupIfTypedef,
    /// Always a query
    Query,
    /// Always a setup command
    Setup,
}

impl Keyword {
    /// Decision table for lines whose first significant token is this keyword
    pub fn leading_rule(self) -> LeadingKeywordRule {
        match self {
            Keyword::Bool
            | Keyword::Char
            | Keyword::Const
            | Keyword::Double
            | Keyword::Float
            | Keyword::Int
            | Keyword::Long
            | Keyword::Short
            | Keyword::Signed
            | Keyword::Unsigned
            | Keyword::Void
            | Keyword::Volatile
            | Keyword::WcharT => LeadingKeywordRule::SetupIfTypedef,
            Keyword::Sizeof
            | Keyword::ConstCast
            | Keyword::StaticCast
            | Keyword::DynamicCast
            | Keyword::ReinterpretCast => LeadingKeywordRule::Query,
            _ => LeadingKeywordRule::Setup,
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `and`, `or`, `not` and friends lex as operators
pub fn is_alternative_operator(s: &str) -> bool {
    matches!(
        s,
        "and"
            | "and_eq"
            | "bitand"
            | "bitor"
            | "compl"
            | "not"
            | "not_eq"
            | "or"
            | "or_eq"
            | "xor"
            | "xor_eq"
    )
}

/// Directive names recognised after `#`
pub fn is_directive(s: &str) -> bool {
    matches!(
        s,
        "define"
            | "elif"
            | "else"
            | "endif"
            | "error"
            | "if"
            | "ifdef"
            | "ifndef"
            | "include"
            | "include_next"
            | "line"
            | "pragma"
            | "undef"
            | "warning"
    )
}
