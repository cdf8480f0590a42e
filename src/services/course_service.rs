use crate::models::course::CourseListing;
use crate::store::ListingStore;

#[derive(Clone)]
pub struct CourseService {
    store: ListingStore,
}

impl CourseService {
    pub fn new(store: ListingStore) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<CourseListing> {
        self.store.list_courses()
    }
}
