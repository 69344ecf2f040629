//! Formatting options for generated facade source

/// Quote style for module specifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    /// Single quotes: `'react'`
    #[default]
    Single,
    /// Double quotes: `"react"`
    Double,
}

impl QuoteStyle {
    /// Quote `value`, escaping backslashes and the quote character.
    pub fn quote(self, value: &str) -> String {
        let q = match self {
            Self::Single => '\'',
            Self::Double => '"',
        };
        let mut out = String::with_capacity(value.len() + 2);
        out.push(q);
        for c in value.chars() {
            if c == q || c == '\\' {
                out.push('\\');
            }
            out.push(c);
        }
        out.push(q);
        out
    }
}

/// Indentation style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentStyle {
    /// Tabs
    Tabs,
    /// Spaces with specified width
    Spaces(u8),
}

impl Default for IndentStyle {
    fn default() -> Self {
        IndentStyle::Spaces(2)
    }
}

impl IndentStyle {
    /// One level of indentation.
    pub fn unit(self) -> String {
        match self {
            Self::Tabs => "\t".to_string(),
            Self::Spaces(width) => " ".repeat(width as usize),
        }
    }
}

/// Formatting options for facade generation
///
/// The defaults produce the layout of the published `react.ts` facade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Use semicolons at end of statements
    pub use_semicolons: bool,
    /// Quote style for module specifiers
    pub quote_style: QuoteStyle,
    /// Indentation inside the default export object
    pub indent: IndentStyle,
    /// Add a trailing comma after the last spread
    pub trailing_commas: bool,
    /// Terminate the file with a newline
    pub final_newline: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            use_semicolons: true,
            quote_style: QuoteStyle::default(),
            indent: IndentStyle::default(),
            trailing_commas: false,
            final_newline: false,
        }
    }
}

impl FormatOptions {
    /// Statement terminator.
    pub(crate) fn semi(&self) -> &'static str {
        if self.use_semicolons { ";" } else { "" }
    }
}
