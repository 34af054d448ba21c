use crate::error::ParseError;

/// How repeated keys and delimiter-carrying values materialize in the tree.
///
/// A policy is fixed when a parser is built and holds for that parser's
/// whole life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Arrays come from explicit `[]` paths; a repeated bare key overwrites
    /// (last write wins), matching plain query-string semantics.
    #[default]
    Brackets,
    /// A repeated bare key folds its values into a list instead of
    /// overwriting.
    FlattenAsArray,
    /// A value containing `,` splits into a list of scalars; repeated keys
    /// still overwrite.
    ComaSeparated,
}

impl CollisionPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Brackets => "brackets",
            Self::FlattenAsArray => "flatten-as-array",
            Self::ComaSeparated => "coma-separated",
        }
    }
}

impl core::fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for CollisionPolicy {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "brackets" => Ok(Self::Brackets),
            "flatten-as-array" | "flatten_as_array" => Ok(Self::FlattenAsArray),
            "coma-separated" | "coma_separated" => Ok(Self::ComaSeparated),
            _ => Err(ParseError::InvalidPolicy),
        }
    }
}
