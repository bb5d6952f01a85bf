//! Catalog layer tests

mod test_loading;
