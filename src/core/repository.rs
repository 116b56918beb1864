use crate::core::domain::Identifiable;
use crate::core::library::LibraryResult;

pub trait Repository<Entity: Identifiable> {
    // appends an entity and returns the new size
    fn create(&mut self, entity: Entity) -> LibraryResult<usize>;

    // get an entity by id
    fn get(&self, id: &str) -> LibraryResult<&Entity>;

    // get an entity by id for in-place mutation
    fn get_mut(&mut self, id: &str) -> LibraryResult<&mut Entity>;

    // first entity in insertion order matching the predicate
    fn find_first_mut(&mut self, predicate: &dyn Fn(&Entity) -> bool) -> LibraryResult<&mut Entity>;

    // all entities matching the predicate, in insertion order
    fn query(&self, predicate: &dyn Fn(&Entity) -> bool) -> Vec<&Entity>;

    fn all(&self) -> Vec<&Entity> {
        self.query(&|_: &Entity| true)
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
