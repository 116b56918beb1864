pub mod service;

use std::path::Path;
use crate::books::domain::model::Book;
use crate::catalog::import::ImportSummary;

// CatalogService is the only surface through which a frontend reads or changes books.
// Lookup misses come back as false, None or an empty list; nothing here fails.
pub trait CatalogService {
    fn add_book(&mut self, book: Book);
    fn search_by_title(&self, title: &str) -> Vec<&Book>;
    fn search_by_author(&self, author: &str) -> Vec<&Book>;
    fn search_by_rating(&self, rating: i32) -> Vec<&Book>;
    fn set_to_read(&mut self, title: &str) -> bool;
    fn set_to_read_by_id(&mut self, id: &str) -> bool;
    fn rate_book(&mut self, title: &str, rating: i32) -> bool;
    fn rate_book_by_id(&mut self, id: &str, rating: i32) -> bool;
    fn get_all_books_sorted_by_title(&self) -> Vec<&Book>;
    fn get_all_books_sorted_by_author(&self) -> Vec<&Book>;
    fn get_read_books(&self) -> Vec<&Book>;
    fn get_unread_books(&self) -> Vec<&Book>;
    fn suggest_random_unread_book(&mut self) -> Option<&Book>;
    fn add_books_from_file(&mut self, path: &Path) -> ImportSummary;
    fn find_by_id(&self, id: &str) -> Option<&Book>;
    fn all_books(&self) -> Vec<&Book>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
