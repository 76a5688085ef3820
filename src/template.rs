use crate::err::TemplateError;
use serde::Deserialize;

const OPEN: char = '{';
const CLOSE: char = '}';

/// A name written between delimiters, like `passed` in `{passed}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placeholder(String);

impl Placeholder {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// The literal text of a template, split around its interpolation points.
///
/// For a template like `"Passed: {passed}, Failed: {failed}"` this holds
/// ```text
/// fragments:    ["Passed: ", ", Failed: ", ""]
/// placeholders: [passed, failed]
/// ```
///
/// There is always exactly one fragment more than placeholders,
/// a template ending with a placeholder gets a trailing empty fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragments {
    fragments: Vec<String>,
    placeholders: Vec<Placeholder>,
}

impl Fragments {
    pub fn parse<T: AsRef<str>>(template: T) -> Result<Self, TemplateError> {
        let template = template.as_ref();

        Self::validate_delimiters(template)?;

        let mut fragments = Vec::new();
        let mut placeholders = Vec::new();
        let mut chars = template.char_indices().peekable();

        // Keep track of the current literal string,
        // it gets pushed when an opening delimiter is found
        let mut literal = String::new();

        while let Some((i, ch)) = chars.next() {
            match ch {
                OPEN => {
                    if matches!(chars.peek(), Some((_, OPEN))) {
                        // Double opening delimiter - escape sequence
                        chars.next();
                        literal.push(OPEN);
                        continue;
                    }

                    fragments.push(std::mem::take(&mut literal));

                    let mut content = String::new();

                    for (_, next_ch) in chars.by_ref() {
                        if next_ch == CLOSE {
                            break;
                        }

                        content.push(next_ch);
                    }

                    let name = content.trim();

                    if name.is_empty() {
                        return Err(TemplateError::EmptyPlaceholder(i));
                    }

                    placeholders.push(Placeholder::new(name));
                }

                CLOSE => {
                    // Validation guarantees a lone closing delimiter
                    // is always part of an escape sequence
                    chars.next();
                    literal.push(CLOSE);
                }

                _ => literal.push(ch),
            }
        }

        // Hanging literal, possibly empty
        fragments.push(literal);

        Ok(Self {
            fragments,
            placeholders,
        })
    }

    /// Builds the sequence from already split parts,
    /// which is the shape a tagged template call receives.
    pub fn from_parts<S: Into<String>>(
        fragments: impl IntoIterator<Item = S>,
        placeholders: impl IntoIterator<Item = Placeholder>,
    ) -> Result<Self, TemplateError> {
        let fragments: Vec<String> = fragments.into_iter().map(Into::into).collect();
        let placeholders: Vec<Placeholder> = placeholders.into_iter().collect();

        if fragments.len() != placeholders.len() + 1 {
            return Err(TemplateError::FragmentMismatch {
                expected: placeholders.len() + 1,
                actual: fragments.len(),
                placeholders: placeholders.len(),
            });
        }

        Ok(Self {
            fragments,
            placeholders,
        })
    }

    /// All the literal fragments concatenated, in order, with no separator.
    pub fn joined(&self) -> String {
        self.fragments.concat()
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }

    fn validate_delimiters(input: &str) -> Result<(), TemplateError> {
        let mut depth = 0;
        let mut chars = input.chars().peekable();

        while let Some(ch) = chars.next() {
            match ch {
                OPEN => {
                    if depth == 0 && chars.peek() == Some(&OPEN) {
                        chars.next();
                    } else {
                        depth += 1;
                        if depth > 1 {
                            // Nested placeholders are never closed properly
                            return Err(TemplateError::MissingClosedDelimiter(CLOSE));
                        }
                    }
                }
                CLOSE => {
                    if depth == 0 {
                        if chars.peek() == Some(&CLOSE) {
                            chars.next();
                        } else {
                            return Err(TemplateError::MissingOpenDelimiter(OPEN));
                        }
                    } else {
                        depth -= 1;
                    }
                }
                _ => {}
            }
        }

        if depth > 0 {
            return Err(TemplateError::MissingClosedDelimiter(CLOSE));
        }

        Ok(())
    }
}

impl Default for Fragments {
    /// `Passed: {passed}, Failed: {failed}`
    fn default() -> Self {
        Self {
            fragments: vec![
                "Passed: ".to_owned(),
                ", Failed: ".to_owned(),
                String::new(),
            ],
            placeholders: vec![Placeholder::new("passed"), Placeholder::new("failed")],
        }
    }
}

impl<'de> Deserialize<'de> for Fragments {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Fragments::parse(&s).map_err(serde::de::Error::custom)
    }
}
