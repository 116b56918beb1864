use serde::Serialize;
use crate::core::library::{LibraryError, LibraryResult};

/// One parsed line of a bulk import file: `<title><sep><author>`.
#[derive(Debug, PartialEq, Eq)]
pub struct ImportLine {
    pub title: String,
    pub author: String,
}

/// Splits on the first separator only, so later separators stay in the author.
/// Whitespace is kept as is.
pub fn parse_line(line: &str, separator: char) -> LibraryResult<ImportLine> {
    let (title, author) = line.split_once(separator).ok_or_else(|| {
        LibraryError::validation(
            format!("missing '{}' separator", separator).as_str(), Some("separator".to_string()))
    })?;
    if title.is_empty() {
        return Err(LibraryError::validation("empty title", Some("title".to_string())));
    }
    if author.is_empty() {
        return Err(LibraryError::validation("empty author", Some("author".to_string())));
    }
    Ok(ImportLine {
        title: title.to_string(),
        author: author.to_string(),
    })
}

/// Outcome of `add_books_from_file`. `completed` is false when the import stopped
/// early on an I/O failure or a malformed line.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize)]
pub struct ImportSummary {
    pub added: usize,
    pub skipped: usize,
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use crate::catalog::import::{parse_line, ImportLine};
    use crate::core::library::LibraryError;

    #[test]
    fn test_should_parse_line() {
        let parsed = parse_line("The Hobbit;J.R.R. Tolkien", ';').expect("should parse");
        assert_eq!(ImportLine { title: "The Hobbit".to_string(), author: "J.R.R. Tolkien".to_string() }, parsed);
    }

    #[test]
    fn test_should_keep_later_separators_in_author() {
        let parsed = parse_line("A;B;C", ';').expect("should parse");
        assert_eq!("A", parsed.title.as_str());
        assert_eq!("B;C", parsed.author.as_str());
    }

    #[test]
    fn test_should_not_trim_whitespace() {
        let parsed = parse_line(" A ; X ", ';').expect("should parse");
        assert_eq!(" A ", parsed.title.as_str());
        assert_eq!(" X ", parsed.author.as_str());
    }

    #[test]
    fn test_should_reject_malformed_lines() {
        assert!(matches!(parse_line("no separator", ';'), Err(LibraryError::Validation { .. })));
        assert!(matches!(parse_line(";Author", ';'), Err(LibraryError::Validation { .. })));
        assert!(matches!(parse_line("Title;", ';'), Err(LibraryError::Validation { .. })));
    }

    #[test]
    fn test_should_honor_custom_separator() {
        let parsed = parse_line("A|X", '|').expect("should parse");
        assert_eq!("X", parsed.author.as_str());
        assert!(parse_line("A;X", '|').is_err());
    }
}
