use crate::books::domain::model::Book;
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// Append-only, insertion-ordered store; books are never removed.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: Vec<Book>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }
}

impl Repository<Book> for MemoryBookRepository {
    fn create(&mut self, entity: Book) -> LibraryResult<usize> {
        self.books.push(entity);
        Ok(self.books.len())
    }

    fn get(&self, id: &str) -> LibraryResult<&Book> {
        self.books.iter().find(|b| b.id() == id)
            .ok_or_else(|| LibraryError::not_found(format!("book not found for id {}", id).as_str()))
    }

    fn get_mut(&mut self, id: &str) -> LibraryResult<&mut Book> {
        self.books.iter_mut().find(|b| b.id() == id)
            .ok_or_else(|| LibraryError::not_found(format!("book not found for id {}", id).as_str()))
    }

    fn find_first_mut(&mut self, predicate: &dyn Fn(&Book) -> bool) -> LibraryResult<&mut Book> {
        self.books.iter_mut().find(|b| predicate(&**b))
            .ok_or_else(|| LibraryError::not_found("no book matches predicate"))
    }

    fn query(&self, predicate: &dyn Fn(&Book) -> bool) -> Vec<&Book> {
        self.books.iter().filter(|b| predicate(*b)).collect()
    }

    fn len(&self) -> usize {
        self.books.len()
    }
}

impl BookRepository for MemoryBookRepository {}
