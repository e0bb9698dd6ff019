pub(crate) mod sqlite_store;
