pub mod pool;
pub mod records;
pub mod users;

pub use pool::create_pool;
