//! Database repository layer for campers, activities and signups.
//!
//! Repositories wrap SeaORM queries and convert entity models into domain models at the
//! boundary. They are generic over `ConnectionTrait` so the same repository runs against
//! the shared pool or inside a service-owned `DatabaseTransaction`.

pub mod activity;
pub mod camper;
pub mod signup;

#[cfg(test)]
mod test;
