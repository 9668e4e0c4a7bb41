mod memory;
mod traits;

pub use memory::InMemoryContactRepository;
pub use traits::ContactRepository;
