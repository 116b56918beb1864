use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};
use crate::books::domain::model::Book;
use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::catalog::domain::CatalogService;
use crate::catalog::import::{parse_line, ImportSummary};
use crate::catalog::selector::{RandomSelector, Selector};
use crate::core::domain::{Configuration, MalformedLinePolicy};
use crate::core::events::StatusEvent;
use crate::core::library::LibraryResult;
use crate::gateway::console::{ConsolePublisher, MessageFormat};
use crate::gateway::events::StatusPublisher;

pub struct Catalog {
    config: Configuration,
    book_repository: Box<dyn BookRepository>,
    status_publisher: Box<dyn StatusPublisher>,
    selector: Box<dyn Selector>,
}

impl Catalog {
    /// Empty catalog writing status lines to stdout and suggesting from an
    /// entropy-seeded generator.
    pub fn new(config: &Configuration) -> Self {
        Self::with(config,
                   Box::new(MemoryBookRepository::new()),
                   Box::new(ConsolePublisher::stdout(MessageFormat::Plain)),
                   Box::new(RandomSelector::from_entropy()))
    }

    pub fn with(config: &Configuration,
                book_repository: Box<dyn BookRepository>,
                status_publisher: Box<dyn StatusPublisher>,
                selector: Box<dyn Selector>) -> Self {
        Self {
            config: config.clone(),
            book_repository,
            status_publisher,
            selector,
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    fn publish(&self, event: StatusEvent) {
        if let Err(err) = self.status_publisher.publish(&event) {
            warn!("dropped status line {:?}: {}", event.message, err);
        }
    }

    fn sorted_by<F>(&self, key: F) -> Vec<&Book>
        where F: Fn(&Book) -> &str {
        let mut books = self.book_repository.all();
        // stable, so equal keys keep insertion order
        books.sort_by(|a, b| key(*a).cmp(key(*b)));
        books
    }

    fn report_marked(&self, marked: LibraryResult<String>, key: &str) -> bool {
        match marked {
            Ok(title) => {
                self.publish(StatusEvent::marked_read(title.as_str()));
                true
            }
            Err(err) => {
                debug!("set to read missed {:?}: {}", key, err);
                self.publish(StatusEvent::not_found(key));
                false
            }
        }
    }

    fn report_rated(&self, rated: LibraryResult<String>, key: &str, rating: i32) -> bool {
        match rated {
            Ok(title) => {
                self.publish(StatusEvent::rated(title.as_str(), rating));
                true
            }
            Err(err) => {
                debug!("rate missed {:?}: {}", key, err);
                self.publish(StatusEvent::not_found(key));
                false
            }
        }
    }

    // Reads until EOF, an I/O error, or (under Abort) the first malformed line.
    // The file is closed when `reader` drops, on every path out of here.
    fn import_lines(&mut self, path: &Path, summary: &mut ImportSummary) -> LibraryResult<()> {
        let key = path.display().to_string();
        let reader = BufReader::new(File::open(path)?);
        for (ndx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            match parse_line(line.as_str(), self.config.import_separator) {
                Ok(entry) => {
                    self.book_repository.create(Book::unrated(entry.title.as_str(), entry.author.as_str()))?;
                    summary.added += 1;
                }
                Err(err) => {
                    let line_no = ndx + 1;
                    warn!("malformed line {} in {}: {}", line_no, key, err);
                    match self.config.malformed_lines {
                        MalformedLinePolicy::Abort => {
                            self.publish(StatusEvent::malformed_line(key.as_str(), line_no, true));
                            return Ok(());
                        }
                        MalformedLinePolicy::Skip => {
                            self.publish(StatusEvent::malformed_line(key.as_str(), line_no, false));
                            summary.skipped += 1;
                        }
                    }
                }
            }
        }
        summary.completed = true;
        Ok(())
    }
}

// setToRead is idempotent: an already-read book stays read and still counts as found.
fn mark_read(book: &mut Book) -> String {
    book.set_read(true);
    debug!(book_id = book.book_id(), "marked as read");
    book.title().to_string()
}

// Any integer is stored; the 1-5 range is enforced by the command layer.
fn apply_rating(book: &mut Book, rating: i32) -> String {
    book.set_rating(rating);
    debug!(book_id = book.book_id(), rating, "rated");
    book.title().to_string()
}

impl CatalogService for Catalog {
    fn add_book(&mut self, book: Book) {
        debug!(book_id = book.book_id(), "adding book");
        // the in-memory repository cannot fail to append
        if let Err(err) = self.book_repository.create(book) {
            warn!("failed to add book: {}", err);
        }
    }

    fn search_by_title(&self, title: &str) -> Vec<&Book> {
        self.book_repository.find_by_title(title)
    }

    fn search_by_author(&self, author: &str) -> Vec<&Book> {
        self.book_repository.find_by_author(author)
    }

    fn search_by_rating(&self, rating: i32) -> Vec<&Book> {
        self.book_repository.find_by_rating(rating)
    }

    fn set_to_read(&mut self, title: &str) -> bool {
        let marked = self.book_repository.find_first_by_title_mut(title).map(mark_read);
        self.report_marked(marked, title)
    }

    fn set_to_read_by_id(&mut self, id: &str) -> bool {
        let marked = self.book_repository.get_mut(id).map(mark_read);
        self.report_marked(marked, id)
    }

    fn rate_book(&mut self, title: &str, rating: i32) -> bool {
        let rated = self.book_repository.find_first_by_title_mut(title).map(|b| apply_rating(b, rating));
        self.report_rated(rated, title, rating)
    }

    fn rate_book_by_id(&mut self, id: &str, rating: i32) -> bool {
        let rated = self.book_repository.get_mut(id).map(|b| apply_rating(b, rating));
        self.report_rated(rated, id, rating)
    }

    fn get_all_books_sorted_by_title(&self) -> Vec<&Book> {
        self.sorted_by(Book::title)
    }

    fn get_all_books_sorted_by_author(&self) -> Vec<&Book> {
        self.sorted_by(Book::author)
    }

    fn get_read_books(&self) -> Vec<&Book> {
        self.book_repository.find_by_read(true)
    }

    fn get_unread_books(&self) -> Vec<&Book> {
        self.book_repository.find_by_read(false)
    }

    fn suggest_random_unread_book(&mut self) -> Option<&Book> {
        let unread = self.book_repository.find_by_read(false);
        if unread.is_empty() {
            return None;
        }
        let ndx = self.selector.select(unread.len()) % unread.len();
        unread.get(ndx).copied()
    }

    fn add_books_from_file(&mut self, path: &Path) -> ImportSummary {
        let key = path.display().to_string();
        let mut summary = ImportSummary::default();
        match self.import_lines(path, &mut summary) {
            Ok(()) => {
                info!("imported {} books from {} ({} skipped, completed: {})",
                      summary.added, key, summary.skipped, summary.completed);
                if summary.completed {
                    self.publish(StatusEvent::imported(key.as_str()));
                }
            }
            Err(err) => {
                warn!("failed to read {} after {} books: {}", key, summary.added, err);
                self.publish(StatusEvent::import_failed(key.as_str()));
            }
        }
        summary
    }

    fn find_by_id(&self, id: &str) -> Option<&Book> {
        self.book_repository.get(id).ok()
    }

    fn all_books(&self) -> Vec<&Book> {
        self.book_repository.all()
    }

    fn len(&self) -> usize {
        self.book_repository.len()
    }
}
