pub mod memory_book_repository;

use crate::books::domain::model::Book;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

pub trait BookRepository: Repository<Book> {
    fn find_by_title(&self, title: &str) -> Vec<&Book> {
        self.query(&|b: &Book| b.has_title(title))
    }

    fn find_by_author(&self, author: &str) -> Vec<&Book> {
        self.query(&|b: &Book| b.has_author(author))
    }

    fn find_by_rating(&self, rating: i32) -> Vec<&Book> {
        self.query(&|b: &Book| b.rating() == rating)
    }

    fn find_by_read(&self, read: bool) -> Vec<&Book> {
        self.query(&|b: &Book| b.is_read() == read)
    }

    fn find_first_by_title_mut(&mut self, title: &str) -> LibraryResult<&mut Book> {
        self.find_first_mut(&|b: &Book| b.has_title(title))
    }
}
