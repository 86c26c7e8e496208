//! Business logic for the todo service. Storage is reached only through the "driven port" traits
//! declared next to each entity, and the HTTP layer only talks to the "driving port" traits.

pub mod todo;

#[cfg(test)]
pub mod test_util;
