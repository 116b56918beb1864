use std::io::{BufRead, Write};
use crate::books::domain::model::Book;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::import_books_cmd::{ImportBooksCommand, ImportBooksCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::mark_read_cmd::{MarkReadCommand, MarkReadCommandRequest};
use crate::catalog::command::rate_book_cmd::{RateBookCommand, RateBookCommandRequest};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use crate::catalog::command::suggest_book_cmd::{SuggestBookCommand, SuggestBookCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::controller::command_error_reply;
use crate::core::library::LibraryResult;

const MENU: &str = "Enter a command (search, addBook, setToRead, rate, getBooks, suggestRead, addBooks, quit):";
const LIST_OPTIONS: &str = "Options: (1) all books by title, (2) all books by author, (3) read books, (4) unread books";

/// Line-oriented frontend over a catalog. Status lines from the catalog travel on
/// its own publisher; everything else the user sees is written to `output`.
/// End of input behaves like `quit` without the farewell line.
pub struct Shell<'a, R: BufRead, W: Write> {
    catalog_service: &'a mut dyn CatalogService,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(catalog_service: &'a mut dyn CatalogService, input: R, output: W) -> Self {
        Self {
            catalog_service,
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> LibraryResult<()> {
        loop {
            writeln!(self.output)?;
            let Some(command) = self.prompt_line(MENU)? else {
                break;
            };
            match command.as_str() {
                "search" => self.search()?,
                "addBook" => self.add_book()?,
                "setToRead" => self.set_to_read()?,
                "rate" => self.rate_book()?,
                "getBooks" => self.get_books()?,
                "suggestRead" => self.suggest_read()?,
                "addBooks" => self.add_books()?,
                "quit" => {
                    writeln!(self.output, "Exiting the library system.")?;
                    break;
                }
                _ => writeln!(self.output, "Invalid command.")?,
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn search(&mut self) -> LibraryResult<()> {
        let Some(option) = self.prompt_line("Search by (title, author, rating):")? else {
            return Ok(());
        };
        let req = match option.as_str() {
            "title" => self.prompt("Enter title: ")?.map(|t| Ok(SearchBooksCommandRequest::title(t.as_str()))),
            "author" => self.prompt("Enter author: ")?.map(|a| Ok(SearchBooksCommandRequest::author(a.as_str()))),
            "rating" => self.prompt("Enter rating (1-5): ")?.map(|r| SearchBooksCommandRequest::rating(r.as_str())),
            _ => {
                writeln!(self.output, "Invalid search option.")?;
                return Ok(());
            }
        };
        let Some(req) = req else {
            return Ok(());
        };
        let res = req.and_then(|req| SearchBooksCommand::new(&mut *self.catalog_service).execute(req));
        match res {
            Ok(res) => self.print_books(&res.books),
            Err(err) => self.report(&err),
        }
    }

    fn add_book(&mut self) -> LibraryResult<()> {
        let Some(title) = self.prompt("Enter title: ")? else {
            return Ok(());
        };
        let Some(author) = self.prompt("Enter author: ")? else {
            return Ok(());
        };
        let res = AddBookCommand::new(&mut *self.catalog_service)
            .execute(AddBookCommandRequest::new(title.as_str(), author.as_str()));
        match res {
            Ok(res) => writeln!(self.output, "Added {}", res.book).map_err(Into::into),
            Err(err) => self.report(&err),
        }
    }

    fn set_to_read(&mut self) -> LibraryResult<()> {
        let Some(title) = self.prompt("Enter the title of the book to mark as read: ")? else {
            return Ok(());
        };
        // the catalog reports hit or miss on its status channel
        let res = MarkReadCommand::new(&mut *self.catalog_service)
            .execute(MarkReadCommandRequest::new(title.as_str()));
        match res {
            Ok(_) => Ok(()),
            Err(err) => self.report(&err),
        }
    }

    fn rate_book(&mut self) -> LibraryResult<()> {
        let Some(title) = self.prompt("Enter the title of the book to rate: ")? else {
            return Ok(());
        };
        let Some(rating) = self.prompt("Enter the new rating (1-5): ")? else {
            return Ok(());
        };
        let res = RateBookCommandRequest::new(title.as_str(), rating.as_str())
            .and_then(|req| RateBookCommand::new(&mut *self.catalog_service).execute(req));
        match res {
            Ok(_) => Ok(()),
            Err(err) => self.report(&err),
        }
    }

    fn get_books(&mut self) -> LibraryResult<()> {
        let Some(option) = self.prompt_line(LIST_OPTIONS)? else {
            return Ok(());
        };
        let res = ListBooksCommandRequest::from_option(option.as_str())
            .and_then(|req| ListBooksCommand::new(&mut *self.catalog_service).execute(req));
        match res {
            Ok(res) => self.print_books(&res.books),
            Err(err) => self.report(&err),
        }
    }

    fn suggest_read(&mut self) -> LibraryResult<()> {
        let res = SuggestBookCommand::new(&mut *self.catalog_service).execute(SuggestBookCommandRequest);
        match res {
            Ok(res) => match res.book {
                Some(book) => writeln!(self.output, "We suggest you read: {}", book).map_err(Into::into),
                None => writeln!(self.output, "No unread books to suggest.").map_err(Into::into),
            },
            Err(err) => self.report(&err),
        }
    }

    fn add_books(&mut self) -> LibraryResult<()> {
        let Some(path) = self.prompt("Enter the file name: ")? else {
            return Ok(());
        };
        let res = ImportBooksCommand::new(&mut *self.catalog_service)
            .execute(ImportBooksCommandRequest::new(path.as_str()));
        match res {
            Ok(_) => Ok(()),
            Err(err) => self.report(&err),
        }
    }

    fn print_books(&mut self, books: &[Book]) -> LibraryResult<()> {
        if books.is_empty() {
            writeln!(self.output, "No books found.")?;
        }
        for book in books {
            writeln!(self.output, "{}", book)?;
        }
        Ok(())
    }

    fn report(&mut self, err: &CommandError) -> LibraryResult<()> {
        writeln!(self.output, "{}", command_error_reply(err))?;
        Ok(())
    }

    // question on its own line
    fn prompt_line(&mut self, text: &str) -> LibraryResult<Option<String>> {
        writeln!(self.output, "{}", text)?;
        self.read_line()
    }

    // inline prompt, answer typed after it
    fn prompt(&mut self, text: &str) -> LibraryResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.read_line()
    }

    fn read_line(&mut self) -> LibraryResult<Option<String>> {
        // flushed first so prompts show before blocking on input and before the
        // catalog writes its own status lines
        self.output.flush()?;
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        // invalid UTF-8 is replaced rather than ending the session
        let line = String::from_utf8_lossy(raw.as_slice());
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;
    use crate::books::domain::model::Book;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::catalog::controller::Shell;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::service::Catalog;
    use crate::catalog::selector::RandomSelector;
    use crate::core::domain::Configuration;
    use crate::gateway::memory::MemoryPublisher;

    fn build_catalog() -> (Catalog, MemoryPublisher) {
        let publisher = MemoryPublisher::new();
        let mut catalog = Catalog::with(&Configuration::new("test"),
                                        Box::new(MemoryBookRepository::new()),
                                        Box::new(publisher.clone()),
                                        Box::new(RandomSelector::seeded(1)));
        catalog.add_book(Book::new("The Hobbit", "J.R.R. Tolkien", 5));
        catalog.add_book(Book::new("To Kill a Mockingbird", "Harper Lee", 4));
        (catalog, publisher)
    }

    fn run_script(catalog: &mut Catalog, script: &str) -> String {
        let mut shell = Shell::new(catalog, Cursor::new(script.to_string()), Vec::new());
        shell.run().expect("should run shell");
        String::from_utf8(shell.into_output()).expect("utf8 output")
    }

    #[test]
    fn test_should_keep_running_after_non_utf8_line() {
        let (mut catalog, _) = build_catalog();
        let script = b"search\ntitle\n\xffbad\nsuggestRead\nquit\n".to_vec();
        let mut shell = Shell::new(&mut catalog, Cursor::new(script), Vec::new());
        shell.run().expect("should run shell");
        let out = String::from_utf8(shell.into_output()).expect("utf8 output");
        assert!(out.contains("No books found."));
        assert!(out.contains("We suggest you read: "));
        assert!(out.ends_with("Exiting the library system.\n"));
    }

    #[test]
    fn test_should_quit() {
        let (mut catalog, _) = build_catalog();
        let out = run_script(&mut catalog, "quit\n");
        assert!(out.contains("Enter a command (search, addBook"));
        assert!(out.ends_with("Exiting the library system.\n"));
    }

    #[test]
    fn test_should_stop_at_end_of_input() {
        let (mut catalog, _) = build_catalog();
        let out = run_script(&mut catalog, "");
        assert!(!out.contains("Exiting"));
    }

    #[test]
    fn test_should_reject_unknown_command() {
        let (mut catalog, _) = build_catalog();
        let out = run_script(&mut catalog, "dance\nquit\n");
        assert!(out.contains("Invalid command."));
    }

    #[test]
    fn test_should_search_by_title() {
        let (mut catalog, _) = build_catalog();
        let out = run_script(&mut catalog, "search\ntitle\nthe hobbit\nquit\n");
        assert!(out.contains("The Hobbit by J.R.R. Tolkien, Rating: 5 (Unread)\n"));
    }

    #[test]
    fn test_should_report_bad_search_input() {
        let (mut catalog, _) = build_catalog();
        let out = run_script(&mut catalog, "search\nrating\nfive\nsearch\nisbn\nsearch\nauthor\nNobody\nquit\n");
        assert!(out.contains("Invalid rating."));
        assert!(out.contains("Invalid search option."));
        assert!(out.contains("No books found."));
    }

    #[test]
    fn test_should_add_book_unrated() {
        let (mut catalog, _) = build_catalog();
        let out = run_script(&mut catalog, "addBook\n1984\nGeorge Orwell\nquit\n");
        assert!(out.contains("Added 1984 by George Orwell, Rating: 0 (Unread)"));
        assert_eq!(1, catalog.search_by_rating(0).len());
    }

    #[test]
    fn test_should_mark_and_rate_through_status_channel() {
        let (mut catalog, publisher) = build_catalog();
        let _ = run_script(&mut catalog, "setToRead\nthe hobbit\nrate\nThe Hobbit\n3\nrate\nDune\n2\nquit\n");
        assert_eq!(vec!["The Hobbit marked as read.".to_string(),
                        "The Hobbit rated 3".to_string(),
                        "Book not found.".to_string()], publisher.messages());
        assert_eq!(1, catalog.get_read_books().len());
    }

    #[test]
    fn test_should_reject_out_of_range_rating() {
        let (mut catalog, publisher) = build_catalog();
        let out = run_script(&mut catalog, "rate\nThe Hobbit\n9\nquit\n");
        assert!(out.contains("Rating must be between 1 and 5."));
        assert!(publisher.messages().is_empty());
        assert_eq!(1, catalog.search_by_rating(5).len());
    }

    #[test]
    fn test_should_list_books() {
        let (mut catalog, _) = build_catalog();
        let out = run_script(&mut catalog, "getBooks\n2\ngetBooks\n3\ngetBooks\n9\nquit\n");
        let harper = out.find("To Kill a Mockingbird by Harper Lee").expect("should list Harper Lee");
        let tolkien = out.find("The Hobbit by J.R.R. Tolkien").expect("should list Tolkien");
        assert!(harper < tolkien);
        assert!(out.contains("No books found."));
        assert!(out.contains("Invalid option."));
    }

    #[test]
    fn test_should_suggest_until_exhausted() {
        let (mut catalog, _) = build_catalog();
        let out = run_script(&mut catalog, "suggestRead\nsetToRead\nThe Hobbit\nsetToRead\nTo Kill a Mockingbird\nsuggestRead\nquit\n");
        assert!(out.contains("We suggest you read: "));
        assert!(out.contains("No unread books to suggest."));
    }

    #[test]
    fn test_should_import_from_file() {
        let (mut catalog, publisher) = build_catalog();
        let mut file = NamedTempFile::new().expect("should create temp file");
        write!(file, "A;X\nB;Y\n").expect("should write");
        let path = file.path().to_str().expect("utf8 path").to_string();
        let _ = run_script(&mut catalog, format!("addBooks\n{}\naddBooks\n/does/not/exist\nquit\n", path).as_str());
        assert_eq!(4, catalog.len());
        assert_eq!(vec!["Books added from file.".to_string(), "Error reading the file.".to_string()], publisher.messages());
    }
}
