//! Record model.
//!
//! A source line such as `"12";"";"7"` becomes a [`Record`]: an ordered list of
//! positional [`Field`]s, one per delimiter-separated segment.
//!
//! ```text
//! "12";"";"7"  ──parse(';')──▶  [ (0, "12"), (1, ""), (2, "7") ]
//!                                            ^ empty, never used for grouping
//! ```
//!
//! Field values keep their quotes, so joining the fields back with the same
//! delimiter reproduces the source line byte for byte.
//!
//! Records compare and hash by content. The input collaborator relies on this
//! to collapse duplicate lines before grouping.

use crate::error::{Error, Result};
use regex::Regex;

/// Delimiter used by the default [`RecordFormat`].
pub const DEFAULT_DELIMITER: char = ';';

/// The quoted-empty marker. A field holding exactly this value is empty.
pub const EMPTY_VALUE: &str = "\"\"";

/// A single positional value within a record.
///
/// Two fields are equal only if both the position and the value match, so the
/// same value in different columns never links two records.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    position: usize,
    value: String,
}

impl Field {
    pub fn new(position: usize, value: impl Into<String>) -> Self {
        Field { position, value: value.into() }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Raw segment text, quotes included.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// True when the value is the quoted-empty marker `""`.
    pub fn is_empty(&self) -> bool {
        self.value == EMPTY_VALUE
    }
}

/// One validated input line decomposed into positional fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    fields: Vec<Field>,
}

impl Record {
    /// Split `line` on `delimiter`, giving each segment its positional index.
    ///
    /// No validation happens here; callers filter with
    /// [`RecordFormat::is_valid_syntax`] first.
    pub fn parse(line: &str, delimiter: char) -> Self {
        let fields = line.split(delimiter).enumerate().map(|(position, value)| Field::new(position, value)).collect();
        Record { fields }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Fields that can take part in grouping, in position order.
    pub fn non_empty_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| !f.is_empty())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Re-join the field values with `delimiter` in positional order.
    pub fn join(&self, delimiter: char) -> String {
        let mut out = String::with_capacity(self.fields.iter().map(|f| f.value.len() + 1).sum());
        for (idx, field) in self.fields.iter().enumerate() {
            if idx > 0 {
                out.push(delimiter);
            }
            out.push_str(&field.value);
        }
        out
    }
}

/// Line grammar for one delimiter.
///
/// A valid line is one or more `"<digits>"` segments (digits optional)
/// separated by the delimiter, with nothing else on the line:
///
/// ```text
/// ^("[0-9]*"D)*"[0-9]*"$        D = escaped delimiter
/// ```
#[derive(Debug, Clone)]
pub struct RecordFormat {
    delimiter: char,
    pattern: Regex,
}

impl RecordFormat {
    /// Build the grammar for `delimiter`.
    ///
    /// Quotes and digits are rejected since they would make segment boundaries
    /// ambiguous.
    pub fn new(delimiter: char) -> Result<Self> {
        if delimiter == '"' || delimiter.is_ascii_digit() {
            return Err(Error::InvalidDelimiter(delimiter));
        }
        if delimiter == DEFAULT_DELIMITER {
            return Ok(Self::default());
        }

        let escaped = regex::escape(delimiter.encode_utf8(&mut [0; 4]));
        let pattern = Regex::new(&format!(r#"^("[0-9]*"{escaped})*"[0-9]*"$"#))?;
        Ok(RecordFormat { delimiter, pattern })
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// True when `line` matches the record grammar.
    pub fn is_valid_syntax(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }

    /// Parse `line` with this format's delimiter.
    pub fn parse(&self, line: &str) -> Record {
        Record::parse(line, self.delimiter)
    }
}

impl Default for RecordFormat {
    fn default() -> Self {
        RecordFormat { delimiter: DEFAULT_DELIMITER, pattern: default_pattern().clone() }
    }
}

fn default_pattern() -> &'static Regex {
    regex!(r#"^("[0-9]*";)*"[0-9]*"$"#)
}

/// Check `line` against the grammar for the default `;` delimiter.
pub fn is_valid_syntax(line: &str) -> bool {
    default_pattern().is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_assigns_positions_in_order() {
        let record = Record::parse(r#""12";"";"7""#, ';');
        let positions: Vec<usize> = record.fields().iter().map(Field::position).collect();
        let values: Vec<&str> = record.fields().iter().map(Field::value).collect();

        assert_eq!(positions, vec![0, 1, 2]);
        assert_eq!(values, vec![r#""12""#, r#""""#, r#""7""#]);
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn join_reproduces_the_source_line() {
        for line in [r#""1""#, r#""1";"2""#, r#""";"";"""#, r#""100";"";"200";"""#] {
            assert_eq!(Record::parse(line, ';').join(';'), line);
        }
        assert_eq!(Record::parse(r#""4"|"""#, '|').join('|'), r#""4"|"""#);
    }

    #[test]
    fn empty_marker_is_the_only_empty_value() {
        assert!(Field::new(0, r#""""#).is_empty());
        assert!(!Field::new(0, r#""0""#).is_empty());
        assert!(!Field::new(0, "").is_empty());

        let record = Record::parse(r#""";"5";"""#, ';');
        let non_empty: Vec<&Field> = record.non_empty_fields().collect();
        assert_eq!(non_empty, vec![&Field::new(1, r#""5""#)]);
    }

    #[test]
    fn fields_compare_by_position_and_value() {
        assert_eq!(Field::new(1, r#""5""#), Field::new(1, r#""5""#));
        assert_ne!(Field::new(0, r#""5""#), Field::new(1, r#""5""#));
        assert_ne!(Field::new(1, r#""5""#), Field::new(1, r#""6""#));
    }

    #[test]
    fn records_compare_by_content() {
        assert_eq!(Record::parse(r#""1";"2""#, ';'), Record::parse(r#""1";"2""#, ';'));
        assert_ne!(Record::parse(r#""1";"2""#, ';'), Record::parse(r#""1";"2";"""#, ';'));
    }

    #[test]
    fn default_grammar_accepts_quoted_digit_segments() {
        for line in [r#""""#, r#""1""#, r#""123";"";"4""#, r#""";"""#] {
            assert!(is_valid_syntax(line), "expected valid: {line}");
            assert!(RecordFormat::default().is_valid_syntax(line));
        }
    }

    #[test]
    fn default_grammar_rejects_everything_else() {
        for line in [
            "",
            "1;2",
            r#""1";"#,
            r#";"1""#,
            r#""1"; "2""#,
            r#""1a";"2""#,
            r#""1""2""#,
            r#""1";"2"x"#,
            r#""8" "#,
            r#""1","2""#,
        ] {
            assert!(!is_valid_syntax(line), "expected invalid: {line}");
        }
    }

    #[test]
    fn custom_delimiter_is_escaped() {
        let format = RecordFormat::new('|').unwrap();
        assert_eq!(format.delimiter(), '|');
        assert!(format.is_valid_syntax(r#""1"|""|"3""#));
        assert!(!format.is_valid_syntax(r#""1";"3""#));

        let dotted = RecordFormat::new('.').unwrap();
        assert!(dotted.is_valid_syntax(r#""1"."2""#));
        assert!(!dotted.is_valid_syntax(r#""1"x"2""#));

        let record = format.parse(r#""1"|""|"3""#);
        assert_eq!(record.fields()[2], Field::new(2, r#""3""#));
    }

    #[test]
    fn quote_and_digit_delimiters_are_rejected() {
        assert!(matches!(RecordFormat::new('"'), Err(Error::InvalidDelimiter('"'))));
        assert!(matches!(RecordFormat::new('7'), Err(Error::InvalidDelimiter('7'))));
    }
}
